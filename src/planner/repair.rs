//! JSON extraction and best-effort repair of model output.
//!
//! Models wrap JSON in prose and code fences, and occasionally emit
//! almost-JSON (trailing commas, single quotes, raw newlines inside
//! strings). Extraction slices the JSON object out of the surrounding
//! text; repair is an ordered list of pure `&str -> String` transforms
//! applied cumulatively, re-attempting a strict parse after each one and
//! stopping at the first success.
//!
//! The repair set is heuristic and deliberately minimal. Do not extend it
//! without a real failing response to justify the new pass.
//!
//! Repair is syntactic only. Semantic shape checks (day count, meal
//! slots) live in [`validate_shape`] and run after a successful parse.

use regex::Regex;
use serde::de::DeserializeOwned;

use crate::itinerary::{Itinerary, MealKind, MealSuggestion, TripRequest};

/// Failure to coerce model output into a usable structure.
///
/// For itinerary generation every variant means "fall back to synthesis";
/// none of them is user-fatal.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The text contains no JSON object at all.
    #[error("no JSON object found in model output")]
    NoJson,
    /// Strict parsing failed even after all repair passes.
    #[error("model output is not valid JSON after repair: {0}")]
    Unparsable(String),
    /// Parsed, but the structure violates the itinerary contract.
    #[error("itinerary shape invalid: {0}")]
    Shape(String),
}

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

/// Slice the JSON object out of raw model text.
///
/// Steps: trim, prefer the inner content of a fenced code block
/// (json-tagged or bare), then cut from the first `{` to the last `}`.
///
/// # Errors
///
/// Returns [`ParseError::NoJson`] when no brace pair remains.
pub fn extract_json(raw: &str) -> Result<String, ParseError> {
    let mut text = raw.trim();

    if let Some(inner) = fenced_block(text) {
        text = inner;
    }

    let start = text.find('{').ok_or(ParseError::NoJson)?;
    let end = text.rfind('}').ok_or(ParseError::NoJson)?;
    if end < start {
        return Err(ParseError::NoJson);
    }
    Ok(text[start..=end].to_owned())
}

/// Inner content of the first fenced code block, if any.
fn fenced_block(text: &str) -> Option<&str> {
    let pattern = if text.contains("```json") {
        r"(?s)```json\s*(.*?)\s*```"
    } else {
        r"(?s)```\s*(.*?)\s*```"
    };
    let re = Regex::new(pattern).ok()?;
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

// ---------------------------------------------------------------------------
// Repair passes
// ---------------------------------------------------------------------------

/// A single pure textual repair.
pub type RepairPass = fn(&str) -> String;

/// The ordered repair sequence. Applied cumulatively, in this order.
pub const REPAIR_PASSES: &[(&str, RepairPass)] = &[
    ("strip_trailing_commas", strip_trailing_commas),
    ("normalize_quotes", normalize_quotes),
    ("escape_newlines", escape_newlines),
];

/// Remove commas that directly precede a closing bracket or brace.
pub fn strip_trailing_commas(input: &str) -> String {
    match Regex::new(r",(\s*[}\]])") {
        Ok(re) => re.replace_all(input, "$1").into_owned(),
        Err(_) => input.to_owned(),
    }
}

/// Replace single quotes with double quotes.
///
/// Blunt by design: it also rewrites apostrophes inside string content,
/// which is acceptable for this contract (Chinese text, no contractions).
pub fn normalize_quotes(input: &str) -> String {
    input.replace('\'', "\"")
}

/// Escape literal newlines and carriage returns inside string content.
///
/// Tracks JSON string state so structural newlines between tokens are
/// left untouched. Carriage returns outside strings are dropped.
pub fn escape_newlines(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_string = false;
    let mut escaped = false;
    for c in input.chars() {
        if in_string {
            if escaped {
                out.push(c);
                escaped = false;
                continue;
            }
            match c {
                '\\' => {
                    out.push(c);
                    escaped = true;
                }
                '"' => {
                    out.push(c);
                    in_string = false;
                }
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                _ => out.push(c),
            }
        } else {
            match c {
                '"' => {
                    out.push(c);
                    in_string = true;
                }
                '\r' => {}
                _ => out.push(c),
            }
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Extract and strictly parse, with no textual repair.
///
/// # Errors
///
/// Returns [`ParseError::NoJson`] or [`ParseError::Unparsable`].
pub fn parse_strict<T: DeserializeOwned>(raw: &str) -> Result<T, ParseError> {
    let json = extract_json(raw)?;
    serde_json::from_str(&json).map_err(|e| ParseError::Unparsable(e.to_string()))
}

/// Extract, then parse with the repair sequence.
///
/// Strict parse first; on failure each repair pass is applied on top of
/// the previous ones and the parse retried. The first success wins.
///
/// # Errors
///
/// Returns [`ParseError::NoJson`] when no object is present, or
/// [`ParseError::Unparsable`] with the final parse error once the repair
/// sequence is exhausted.
pub fn parse_with_repair<T: DeserializeOwned>(raw: &str) -> Result<T, ParseError> {
    let json = extract_json(raw)?;

    let mut last_error = match serde_json::from_str(&json) {
        Ok(value) => return Ok(value),
        Err(e) => e.to_string(),
    };

    let mut repaired = json;
    for (name, pass) in REPAIR_PASSES {
        repaired = pass(&repaired);
        match serde_json::from_str(&repaired) {
            Ok(value) => {
                tracing::debug!(pass = name, "JSON repair succeeded");
                return Ok(value);
            }
            Err(e) => last_error = e.to_string(),
        }
    }

    Err(ParseError::Unparsable(last_error))
}

// ---------------------------------------------------------------------------
// Shape validation
// ---------------------------------------------------------------------------

/// Check a parsed itinerary against the structural contract and
/// normalize the parts we guarantee to callers.
///
/// Enforced: day count matches the request, every day has exactly 3
/// activities and one meal of each kind, at least one accommodation
/// option. Normalized: day numbering (1-based, sequential), meal order
/// (breakfast/lunch/dinner), accommodation totals
/// (`total_cost == price_per_night * total_nights`).
///
/// # Errors
///
/// Returns [`ParseError::Shape`] on the first violated constraint.
pub fn validate_shape(itinerary: &mut Itinerary, request: &TripRequest) -> Result<(), ParseError> {
    if itinerary.days.len() != request.days as usize {
        return Err(ParseError::Shape(format!(
            "expected {} days, got {}",
            request.days,
            itinerary.days.len()
        )));
    }

    for (index, day) in itinerary.days.iter_mut().enumerate() {
        let number = index + 1;
        if day.activities.len() != 3 {
            return Err(ParseError::Shape(format!(
                "day {number} has {} activities, expected 3",
                day.activities.len()
            )));
        }
        if day.meals.len() != 3 {
            return Err(ParseError::Shape(format!(
                "day {number} has {} meals, expected 3",
                day.meals.len()
            )));
        }
        day.meals = canonical_meals(std::mem::take(&mut day.meals))
            .map_err(|kind| ParseError::Shape(format!("day {number} is missing a {kind} meal")))?;
        day.day = number as u32;
    }

    if itinerary.accommodation.is_empty() {
        return Err(ParseError::Shape("no accommodation options".to_owned()));
    }
    let nights = request.nights();
    for option in &mut itinerary.accommodation {
        option.reconcile(nights);
    }

    Ok(())
}

/// Reorder meals into breakfast/lunch/dinner. Fails with the missing
/// kind's name when a kind is absent or duplicated.
fn canonical_meals(meals: Vec<MealSuggestion>) -> Result<Vec<MealSuggestion>, &'static str> {
    let mut pool = meals;
    let mut ordered = Vec::with_capacity(3);
    for kind in MealKind::ORDER {
        let position = pool.iter().position(|m| m.meal_type == kind);
        match position {
            Some(at) => ordered.push(pool.swap_remove(at)),
            None => {
                return Err(match kind {
                    MealKind::Breakfast => "breakfast",
                    MealKind::Lunch => "lunch",
                    MealKind::Dinner => "dinner",
                })
            }
        }
    }
    Ok(ordered)
}
