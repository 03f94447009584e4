pub mod breakdown;
pub mod constants;
pub mod estimate;

pub use breakdown::derive_from_text;
pub use constants::*;
pub use estimate::{estimate_split, resolve_breakdown, NutritionSummary};
