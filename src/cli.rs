use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::error::{MealError, Result};

/// 급식 조회 — look up NEIS school meal info for a date.
#[derive(Parser, Debug)]
#[command(name = "meal_lookup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// NEIS office-of-education code (ATPT_OFCDC_SC_CODE).
    #[arg(long, default_value = "J10")]
    pub office_code: String,

    /// NEIS school code (SD_SCHUL_CODE).
    #[arg(long, default_value = "7530475")]
    pub school_code: String,

    /// Print the result as JSON instead of the formatted view.
    #[arg(long)]
    pub json: bool,

    /// Seed for the placeholder nutrition estimator.
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Look up meals for one date (defaults to today).
    Lookup {
        /// Date in YYYY-MM-DD format.
        date: Option<String>,
    },

    /// Prompt for dates repeatedly.
    Interactive,
}

impl Default for Command {
    fn default() -> Self {
        Command::Lookup { date: None }
    }
}

/// Parse a `YYYY-MM-DD` date argument.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| MealError::InvalidInput(format!("날짜 형식은 YYYY-MM-DD 입니다: {input}")))
}
