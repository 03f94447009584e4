use rand::rngs::StdRng;
use rand::SeedableRng;

use meal_lookup_rs::models::{MealRecord, NutritionInfo};
use meal_lookup_rs::nutrition::{
    derive_from_text, estimate_split, resolve_breakdown, HIGH_CARBS_BAND, HIGH_PROTEIN_BAND,
    LOW_CARBS_BAND, LOW_PROTEIN_BAND, MID_CARBS_BAND, MID_PROTEIN_BAND, ZERO_CAL_SPLIT,
};

fn in_band(value: u32, (lo, hi): (f64, f64)) -> bool {
    let value = value as f64;
    value >= lo && value <= hi
}

#[test]
fn bare_calorie_text_yields_no_breakdown() {
    assert!(derive_from_text("650.0 Kcal").is_none());
    assert!(derive_from_text("1058.9 kcal").is_none());
}

#[test]
fn derived_percentages_are_bounded_integers() {
    let info = derive_from_text("탄수화물: 110.2 단백질: 33.1 지방: 22.8").unwrap();
    for pct in [info.carbs, info.protein, info.fat] {
        assert!(pct <= 100);
    }
}

#[test]
fn derived_shares_use_energy_factors() {
    // 50*4 = 200, 25*4 = 100, 100*9 = 900; total 1200.
    let info = derive_from_text("탄수화물 50 단백질 25 지방 100").unwrap();
    assert_eq!(info.carbs, 17); // 200/1200 = 16.7%
    assert_eq!(info.protein, 8); // 100/1200 = 8.3%
    assert_eq!(info.fat, 75); // 900/1200 = 75%
}

#[test]
fn high_band_membership_is_deterministic_with_seed() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..500 {
        let split = estimate_split(1100.0, &mut rng);
        assert!(in_band(split.carbs, HIGH_CARBS_BAND), "carbs {}", split.carbs);
        assert!(
            in_band(split.protein, HIGH_PROTEIN_BAND),
            "protein {}",
            split.protein
        );
        assert_eq!(split.carbs + split.protein + split.fat, 100);
    }
}

#[test]
fn mid_band_covers_600_to_899() {
    let mut rng = StdRng::seed_from_u64(42);
    for total in [600.0, 650.0, 899.9] {
        for _ in 0..200 {
            let split = estimate_split(total, &mut rng);
            assert!(in_band(split.carbs, MID_CARBS_BAND));
            assert!(in_band(split.protein, MID_PROTEIN_BAND));
            assert_eq!(split.carbs + split.protein + split.fat, 100);
        }
    }
}

#[test]
fn low_band_covers_positive_below_600() {
    let mut rng = StdRng::seed_from_u64(42);
    for total in [1.0, 300.0, 599.9] {
        for _ in 0..200 {
            let split = estimate_split(total, &mut rng);
            assert!(in_band(split.carbs, LOW_CARBS_BAND));
            assert!(in_band(split.protein, LOW_PROTEIN_BAND));
            assert_eq!(split.carbs + split.protein + split.fat, 100);
        }
    }
}

#[test]
fn zero_calories_uses_fixed_split() {
    let mut rng = StdRng::seed_from_u64(42);
    let split = estimate_split(0.0, &mut rng);
    assert_eq!((split.carbs, split.protein, split.fat), ZERO_CAL_SPLIT);
}

#[test]
fn resolve_prefers_real_figures() {
    let record = MealRecord {
        nutrition_info: Some(NutritionInfo {
            carbs: 62,
            protein: 15,
            fat: 23,
        }),
        ..Default::default()
    };

    let mut rng = StdRng::seed_from_u64(42);
    let summary = resolve_breakdown(&record, &mut rng);
    assert!(!summary.estimated);
    assert_eq!(summary.percentages, record.nutrition_info.unwrap());
}

#[test]
fn resolve_falls_back_to_estimate() {
    let mut record = MealRecord::default();
    record.lunch.calories = 650.0;
    record.recompute_total();

    let mut rng = StdRng::seed_from_u64(42);
    let summary = resolve_breakdown(&record, &mut rng);
    assert!(summary.estimated);
    // 650 kcal falls into the mid band.
    assert!(in_band(summary.percentages.carbs, MID_CARBS_BAND));
    assert!(in_band(summary.percentages.protein, MID_PROTEIN_BAND));
}
