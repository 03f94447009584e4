/// Physiological energy factors (kcal per gram).
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Keyword labels used by the provider's free-text nutrition field.
pub const CARBS_LABEL: &str = "탄수화물";
pub const PROTEIN_LABEL: &str = "단백질";
pub const FAT_LABEL: &str = "지방";

// ─────────────────────────────────────────────────────────────────────────────
// Placeholder-estimation bands, keyed on total calories.
// ─────────────────────────────────────────────────────────────────────────────

/// Total calories at or above which the high-calorie band applies.
pub const HIGH_CAL_THRESHOLD: f64 = 900.0;

/// Total calories at or above which the mid-calorie band applies.
pub const MID_CAL_THRESHOLD: f64 = 600.0;

/// Sampled carbohydrate/protein percentage bands per calorie tier.
pub const HIGH_CARBS_BAND: (f64, f64) = (55.0, 65.0);
pub const HIGH_PROTEIN_BAND: (f64, f64) = (15.0, 25.0);

pub const MID_CARBS_BAND: (f64, f64) = (60.0, 68.0);
pub const MID_PROTEIN_BAND: (f64, f64) = (12.0, 20.0);

pub const LOW_CARBS_BAND: (f64, f64) = (45.0, 55.0);
pub const LOW_PROTEIN_BAND: (f64, f64) = (20.0, 30.0);

/// Fixed split shown when total calories are zero.
pub const ZERO_CAL_SPLIT: (u32, u32, u32) = (60, 15, 25);
