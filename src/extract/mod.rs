//! Turns the raw NEIS XML response into a normalized [`MealRecord`].

pub mod text;

use roxmltree::{Document, Node};
use tracing::debug;

use crate::error::{MealError, Result};
use crate::models::{MealRecord, SlotKind};
use crate::nutrition;

/// Provider status code meaning "no error".
pub const RESULT_OK: &str = "INFO-000";

/// Parse a meal-service response body into a [`MealRecord`].
///
/// Fails with [`MealError::MalformedResponse`] when the body is not
/// well-formed XML, [`MealError::RemoteError`] when the provider embedded a
/// non-success `RESULT/CODE`, and [`MealError::NoDataForDate`] when the
/// document carries zero `row` entries.
pub fn parse_meal_response(xml: &str) -> Result<MealRecord> {
    let doc =
        Document::parse(xml).map_err(|err| MealError::MalformedResponse(err.to_string()))?;
    let root = doc.root_element();

    if let Some(result) = root.descendants().find(|n| n.has_tag_name("RESULT")) {
        let code = child_text(result, "CODE");
        let message = child_text(result, "MESSAGE");
        if let Some(code) = code {
            if code != RESULT_OK {
                return Err(MealError::RemoteError { code, message });
            }
        }
    }

    let rows: Vec<Node> = root
        .descendants()
        .filter(|n| n.has_tag_name("row"))
        .collect();
    debug!(rows = rows.len(), "parsed response rows");

    if rows.is_empty() {
        return Err(MealError::NoDataForDate);
    }

    let mut record = MealRecord::default();

    for row in rows {
        let slot_label = child_text(row, "MMEAL_SC_NM").unwrap_or_default();
        let dish_field = child_text(row, "DDISH_NM").unwrap_or_default();
        let cal_field = child_text(row, "CAL_INFO")
            .map(|t| t.trim().to_string())
            .unwrap_or_default();

        let calories = text::extract_kcal(&cal_field);
        debug!(slot = %slot_label, calories, "row extracted");

        // First row with non-empty nutrition text that yields a breakdown
        // wins; later rows never overwrite.
        if record.nutrition_info.is_none() && !cal_field.is_empty() {
            record.nutrition_info = nutrition::derive_from_text(&cal_field);
        }

        let Some(kind) = SlotKind::from_label(&slot_label) else {
            continue;
        };

        let slot = record.slot_mut(kind);
        slot.dishes.extend(text::clean_dish_names(&dish_field));
        // Last writer wins when several rows target the same slot.
        slot.calories = calories;
    }

    record.recompute_total();
    Ok(record)
}

/// Concatenated text content (including CDATA sections) of the named child
/// element, mirroring DOM `textContent`.
fn child_text(node: Node, tag: &str) -> Option<String> {
    node.children().find(|n| n.has_tag_name(tag)).map(|child| {
        child
            .descendants()
            .filter(|d| d.is_text())
            .filter_map(|d| d.text())
            .collect()
    })
}
