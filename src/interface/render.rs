use chrono::{Datelike, NaiveDate};

use crate::models::{MealRecord, SlotKind};
use crate::nutrition::NutritionSummary;

/// Korean weekday names, indexed by days from Sunday.
const WEEKDAYS: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

/// Width of a full (100%) nutrition bar, in characters.
const BAR_WIDTH: usize = 40;

/// Format a date as `YYYY년 M월 D일 (요일)`.
pub fn format_korean_date(date: NaiveDate) -> String {
    let weekday = WEEKDAYS[date.weekday().num_days_from_sunday() as usize];
    format!(
        "{}년 {}월 {}일 ({})",
        date.year(),
        date.month(),
        date.day(),
        weekday
    )
}

/// Display a full meal record with the nutrition chart.
pub fn display_meal_record(date: NaiveDate, record: &MealRecord, summary: &NutritionSummary) {
    println!();
    println!("=== {} 급식 정보 ===", format_korean_date(date));
    println!();
    println!("총 칼로리: {:.1}kcal", record.total_calories);
    println!();

    display_nutrition_chart(summary);

    for kind in SlotKind::ALL {
        display_meal_section(kind, record);
    }
    println!();
}

/// One meal-period section: calorie line (when known) plus the dish list.
fn display_meal_section(kind: SlotKind, record: &MealRecord) {
    let slot = record.slot(kind);

    println!("--- {} ---", kind.label());

    if slot.is_empty() {
        println!("  급식 정보가 없습니다.");
        println!();
        return;
    }

    if slot.calories > 0.0 {
        println!("  칼로리: {}kcal", slot.calories);
    }
    for dish in &slot.dishes {
        println!("  - {dish}");
    }
    println!();
}

/// Labeled percentage bars for the macronutrient split.
fn display_nutrition_chart(summary: &NutritionSummary) {
    let source = if summary.estimated { "추정" } else { "실제" };
    println!("영양소 구성비 ({source})");

    let rows = [
        ("탄수화물", summary.percentages.carbs),
        ("단백질", summary.percentages.protein),
        ("지방", summary.percentages.fat),
    ];
    for (name, percent) in rows {
        println!("  {:<4} {:<width$} {:>3}%", name, bar(percent), percent, width = BAR_WIDTH);
    }
    println!();
}

fn bar(percent: u32) -> String {
    let filled = (percent as usize * BAR_WIDTH) / 100;
    "█".repeat(filled.min(BAR_WIDTH))
}
