//! Pattern-matching helpers for the semi-structured NEIS text fields.

use std::sync::LazyLock;

use regex::Regex;

/// Parenthesized allergen annotations, e.g. `(대두)` or `(1.5.6.)`.
static PAREN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\([^)]*\)").unwrap());

/// Leading `N.` ordinal prefix on a dish name.
static ORDINAL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.").unwrap());

/// A numeric value immediately preceding a `Kcal` unit marker.
static KCAL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)([0-9.]+)\s*Kcal").unwrap());

/// Marker separating individual dishes inside `DDISH_NM`.
const DISH_SEPARATOR: &str = "<br/>";

/// Split a raw dish-name field into cleaned dish names.
///
/// Strips parenthesized allergen annotations, splits on the line-break
/// marker, removes leading ordinal prefixes, and drops entries that are
/// empty after trimming.
pub fn clean_dish_names(raw: &str) -> Vec<String> {
    let stripped = PAREN_RE.replace_all(raw, "");
    stripped
        .split(DISH_SEPARATOR)
        .map(|dish| ORDINAL_RE.replace(dish.trim(), "").trim().to_string())
        .filter(|dish| !dish.is_empty())
        .collect()
}

/// Extract the calorie figure from a free-text field.
///
/// Returns the number immediately preceding `Kcal` (case-insensitive), or
/// `0.0` when the pattern is absent.
pub fn extract_kcal(text: &str) -> f64 {
    KCAL_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Find a number immediately following a keyword label, e.g.
/// `labeled_number("탄수화물: 120.5 ...", "탄수화물")` -> `Some(120.5)`.
pub fn labeled_number(text: &str, label: &str) -> Option<f64> {
    let pattern = format!(r"{}[:\s]*([0-9.]+)", regex::escape(label));
    let re = Regex::new(&pattern).ok()?;
    re.captures(text)?.get(1)?.as_str().parse().ok()
}
