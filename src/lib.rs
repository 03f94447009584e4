pub mod cli;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod interface;
pub mod models;
pub mod nutrition;

pub use error::{MealError, Result};
pub use models::{MealRecord, MealSlot, NutritionInfo, SlotKind};
