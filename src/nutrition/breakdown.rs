//! Macronutrient percentages derived from real provider figures.

use tracing::debug;

use crate::extract::text;
use crate::models::NutritionInfo;
use crate::nutrition::constants::*;

/// Derive a macronutrient split from the free-text `CAL_INFO` field.
///
/// Returns `None` when the field carries only a bare calorie figure (none of
/// the three macronutrient keywords present) or when the computed energy
/// total is not positive. Percentages are rounded independently, so they
/// need not sum to exactly 100.
pub fn derive_from_text(cal_info: &str) -> Option<NutritionInfo> {
    let cal_info = cal_info.trim();
    if cal_info.is_empty() {
        return None;
    }

    let carbs_g = text::labeled_number(cal_info, CARBS_LABEL);
    let protein_g = text::labeled_number(cal_info, PROTEIN_LABEL);
    let fat_g = text::labeled_number(cal_info, FAT_LABEL);

    if carbs_g.is_none() && protein_g.is_none() && fat_g.is_none() {
        return None;
    }

    let carbs_kcal = carbs_g.unwrap_or(0.0) * KCAL_PER_GRAM_CARBS;
    let protein_kcal = protein_g.unwrap_or(0.0) * KCAL_PER_GRAM_PROTEIN;
    let fat_kcal = fat_g.unwrap_or(0.0) * KCAL_PER_GRAM_FAT;

    let total = carbs_kcal + protein_kcal + fat_kcal;
    if total <= 0.0 {
        return None;
    }

    let info = NutritionInfo {
        carbs: share(carbs_kcal, total),
        protein: share(protein_kcal, total),
        fat: share(fat_kcal, total),
    };
    debug!(?info, "derived macronutrient split");
    Some(info)
}

fn share(part: f64, total: f64) -> u32 {
    (part / total * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_kcal_yields_none() {
        assert_eq!(derive_from_text("833.9 Kcal"), None);
        assert_eq!(derive_from_text(""), None);
        assert_eq!(derive_from_text("   "), None);
    }

    #[test]
    fn test_full_breakdown() {
        // 120*4 + 30*4 + 20*9 = 780 kcal
        let info = derive_from_text("833.9 Kcal 탄수화물: 120 단백질: 30 지방: 20").unwrap();
        assert_eq!(info.carbs, 62); // 480/780 = 61.5%
        assert_eq!(info.protein, 15); // 120/780 = 15.4%
        assert_eq!(info.fat, 23); // 180/780 = 23.1%
    }

    #[test]
    fn test_partial_keywords_still_derive() {
        // Protein alone accounts for all counted energy.
        let info = derive_from_text("단백질: 30").unwrap();
        assert_eq!(info.carbs, 0);
        assert_eq!(info.protein, 100);
        assert_eq!(info.fat, 0);
    }

    #[test]
    fn test_zero_total_yields_none() {
        assert_eq!(derive_from_text("탄수화물: 0 단백질: 0 지방: 0"), None);
    }

    #[test]
    fn test_percentages_bounded() {
        let info = derive_from_text("탄수화물 55.5 단백질 21.2 지방 14.9").unwrap();
        for pct in [info.carbs, info.protein, info.fat] {
            assert!(pct <= 100);
        }
    }
}
