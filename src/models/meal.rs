use serde::Serialize;

/// One of the three daily meal periods, as labeled by NEIS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SlotKind {
    Breakfast,
    Lunch,
    Dinner,
}

impl SlotKind {
    /// Parse a NEIS `MMEAL_SC_NM` label. Unrecognized labels yield `None`
    /// and the caller skips the row.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "조식" => Some(SlotKind::Breakfast),
            "중식" => Some(SlotKind::Lunch),
            "석식" => Some(SlotKind::Dinner),
            _ => None,
        }
    }

    /// Display label, matching the provider's wording.
    pub fn label(&self) -> &'static str {
        match self {
            SlotKind::Breakfast => "조식",
            SlotKind::Lunch => "중식",
            SlotKind::Dinner => "석식",
        }
    }

    pub const ALL: [SlotKind; 3] = [SlotKind::Breakfast, SlotKind::Lunch, SlotKind::Dinner];
}

/// Dishes and the calorie figure for one meal period.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MealSlot {
    pub dishes: Vec<String>,
    pub calories: f64,
}

impl MealSlot {
    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }
}

/// Macronutrient split as integer percentages.
///
/// Derived values are rounded independently, so the three fields need not
/// sum to exactly 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NutritionInfo {
    pub carbs: u32,
    pub protein: u32,
    pub fat: u32,
}

/// The normalized result for one calendar date.
///
/// Built fresh per lookup; `nutrition_info` is present only when derived
/// from real provider figures, never partially populated.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MealRecord {
    pub breakfast: MealSlot,
    pub lunch: MealSlot,
    pub dinner: MealSlot,
    pub total_calories: f64,
    pub nutrition_info: Option<NutritionInfo>,
}

impl MealRecord {
    pub fn slot(&self, kind: SlotKind) -> &MealSlot {
        match kind {
            SlotKind::Breakfast => &self.breakfast,
            SlotKind::Lunch => &self.lunch,
            SlotKind::Dinner => &self.dinner,
        }
    }

    pub fn slot_mut(&mut self, kind: SlotKind) -> &mut MealSlot {
        match kind {
            SlotKind::Breakfast => &mut self.breakfast,
            SlotKind::Lunch => &mut self.lunch,
            SlotKind::Dinner => &mut self.dinner,
        }
    }

    /// Recompute `total_calories` from the three slots.
    pub fn recompute_total(&mut self) {
        self.total_calories =
            self.breakfast.calories + self.lunch.calories + self.dinner.calories;
    }

    /// True when no slot carries any dish.
    pub fn is_empty(&self) -> bool {
        SlotKind::ALL.iter().all(|k| self.slot(*k).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_labels_round_trip() {
        for kind in SlotKind::ALL {
            assert_eq!(SlotKind::from_label(kind.label()), Some(kind));
        }
    }

    #[test]
    fn test_unknown_label_is_none() {
        assert_eq!(SlotKind::from_label("간식"), None);
        assert_eq!(SlotKind::from_label(""), None);
    }

    #[test]
    fn test_label_trimmed() {
        assert_eq!(SlotKind::from_label(" 중식 "), Some(SlotKind::Lunch));
    }

    #[test]
    fn test_recompute_total() {
        let mut record = MealRecord::default();
        record.slot_mut(SlotKind::Breakfast).calories = 400.0;
        record.slot_mut(SlotKind::Lunch).calories = 650.5;
        record.slot_mut(SlotKind::Dinner).calories = 500.0;
        record.recompute_total();
        assert!((record.total_calories - 1550.5).abs() < 1e-9);
    }

    #[test]
    fn test_is_empty() {
        let mut record = MealRecord::default();
        assert!(record.is_empty());
        record
            .slot_mut(SlotKind::Lunch)
            .dishes
            .push("쌀밥".to_string());
        assert!(!record.is_empty());
    }
}
