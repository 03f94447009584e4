use chrono::{Local, NaiveDate};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use meal_lookup_rs::cli::{parse_date, Cli, Command};
use meal_lookup_rs::error::{MealError, Result};
use meal_lookup_rs::extract::parse_meal_response;
use meal_lookup_rs::fetch::{MealFetcher, SchoolCode};
use meal_lookup_rs::interface::{display_meal_record, format_korean_date, prompt_date, prompt_yes_no};
use meal_lookup_rs::nutrition;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        error!(error = %e, "meal lookup failed");
        eprintln!("{}", e.user_message());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let school = SchoolCode::new(cli.office_code.clone(), cli.school_code.clone());
    let fetcher = MealFetcher::with_default_relays();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    match cli.command.unwrap_or_default() {
        Command::Lookup { date } => {
            let date = match date {
                Some(input) => parse_date(&input)?,
                None => Local::now().date_naive(),
            };
            lookup_and_display(&fetcher, &school, date, &mut rng, cli.json)
        }
        Command::Interactive => cmd_interactive(&fetcher, &school, &mut rng, cli.json),
    }
}

/// Prompt-lookup loop. Lookup failures are shown as friendly messages and
/// the loop continues, so the user can retry with a different date.
fn cmd_interactive(
    fetcher: &MealFetcher,
    school: &SchoolCode,
    rng: &mut StdRng,
    json: bool,
) -> Result<()> {
    loop {
        let date = match prompt_date(Local::now().date_naive()) {
            Ok(date) => date,
            Err(e @ MealError::InvalidInput(_)) => {
                println!("{}", e.user_message());
                continue;
            }
            Err(e) => return Err(e),
        };

        if let Err(e) = lookup_and_display(fetcher, school, date, rng, json) {
            error!(error = %e, "meal lookup failed");
            println!("{}", e.user_message());
            println!();
        }

        if !prompt_yes_no("다른 날짜를 조회할까요?", true)? {
            break;
        }
    }

    Ok(())
}

/// One full search: fetch, extract, resolve the nutrition split, present.
fn lookup_and_display(
    fetcher: &MealFetcher,
    school: &SchoolCode,
    date: NaiveDate,
    rng: &mut StdRng,
    json: bool,
) -> Result<()> {
    let date_key = date.format("%Y%m%d").to_string();

    if !json {
        println!("{} 급식 정보를 조회합니다...", format_korean_date(date));
    }

    let body = fetcher.fetch(school, &date_key)?;
    debug!(bytes = body.len(), "raw response received");

    let record = parse_meal_response(&body)?;
    let summary = nutrition::resolve_breakdown(&record, rng);
    debug!(?record, ?summary, "meal record extracted");

    if json {
        let report = json!({
            "date": date.format("%Y-%m-%d").to_string(),
            "record": record,
            "nutrition": summary,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display_meal_record(date, &record, &summary);
    }

    Ok(())
}
