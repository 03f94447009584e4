//! Placeholder macronutrient estimation for dates without real figures.

use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::models::{MealRecord, NutritionInfo};
use crate::nutrition::constants::*;

/// A macronutrient split plus its provenance, so the presentation layer can
/// label estimated output as such.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct NutritionSummary {
    #[serde(flatten)]
    pub percentages: NutritionInfo,
    pub estimated: bool,
}

/// Resolve the split to display: real figures when the record carries them,
/// otherwise a banded random placeholder.
pub fn resolve_breakdown(record: &MealRecord, rng: &mut impl Rng) -> NutritionSummary {
    match record.nutrition_info {
        Some(percentages) => NutritionSummary {
            percentages,
            estimated: false,
        },
        None => NutritionSummary {
            percentages: estimate_split(record.total_calories, rng),
            estimated: true,
        },
    }
}

/// Sample a visually plausible split for the given calorie total.
///
/// Carbohydrate and protein percentages are drawn uniformly from fixed bands
/// keyed on total calories; fat is the exact remainder, so the three always
/// sum to 100. Cosmetic output only, never shown as authoritative.
pub fn estimate_split(total_calories: f64, rng: &mut impl Rng) -> NutritionInfo {
    let (carbs_band, protein_band) = if total_calories >= HIGH_CAL_THRESHOLD {
        (HIGH_CARBS_BAND, HIGH_PROTEIN_BAND)
    } else if total_calories >= MID_CAL_THRESHOLD {
        (MID_CARBS_BAND, MID_PROTEIN_BAND)
    } else if total_calories > 0.0 {
        (LOW_CARBS_BAND, LOW_PROTEIN_BAND)
    } else {
        let (carbs, protein, fat) = ZERO_CAL_SPLIT;
        return NutritionInfo { carbs, protein, fat };
    };

    let carbs = sample_percent(rng, carbs_band);
    let protein = sample_percent(rng, protein_band);
    let split = NutritionInfo {
        carbs,
        protein,
        fat: 100 - carbs - protein,
    };
    debug!(?split, total_calories, "sampled placeholder split");
    split
}

fn sample_percent(rng: &mut impl Rng, (lo, hi): (f64, f64)) -> u32 {
    rng.gen_range(lo..=hi).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_zero_calories_fixed_split() {
        let mut rng = StdRng::seed_from_u64(7);
        let split = estimate_split(0.0, &mut rng);
        assert_eq!((split.carbs, split.protein, split.fat), ZERO_CAL_SPLIT);
    }

    #[test]
    fn test_split_always_sums_to_100() {
        let mut rng = StdRng::seed_from_u64(7);
        for total in [0.0, 300.0, 650.0, 1200.0] {
            for _ in 0..200 {
                let split = estimate_split(total, &mut rng);
                assert_eq!(split.carbs + split.protein + split.fat, 100);
            }
        }
    }
}
