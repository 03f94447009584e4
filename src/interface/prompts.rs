use chrono::NaiveDate;
use dialoguer::{Confirm, Input};

use crate::cli::parse_date;
use crate::error::Result;

/// Prompt for a lookup date, defaulting to the given date (usually today).
pub fn prompt_date(default: NaiveDate) -> Result<NaiveDate> {
    let input: String = Input::new()
        .with_prompt("조회할 날짜 (YYYY-MM-DD)")
        .default(default.format("%Y-%m-%d").to_string())
        .interact_text()?;

    parse_date(input.trim())
}

/// Prompt for a yes/no answer with a default.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    let result = Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?;

    Ok(result)
}
