mod meal;

pub use meal::{MealRecord, MealSlot, NutritionInfo, SlotKind};
