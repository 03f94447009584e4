pub mod prompts;
pub mod render;

pub use prompts::{prompt_date, prompt_yes_no};
pub use render::{display_meal_record, format_korean_date};
