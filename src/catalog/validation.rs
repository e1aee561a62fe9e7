//! Catalog Validation Rules
//!
//! Format checks for the individual fields of a [`ProduceItem`], the
//! presence check on required fields, and the all-or-nothing batch check
//! built from both.

use super::models::ProduceItem;
use regex::Regex;
use std::sync::LazyLock;

static CODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9]{4}-[A-Za-z0-9]{4}-[A-Za-z0-9]{4}-[A-Za-z0-9]{4}$")
        .expect("code pattern compiles")
});

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]*$").expect("name pattern compiles"));

static WHOLE_PRICE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]*$").expect("whole price pattern compiles"));

static DECIMAL_PRICE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]*\.[0-9]{2}$").expect("decimal price pattern compiles"));

// =============================================================================
// Format Validator
// =============================================================================

/// Returns `true` iff the whole of `code` is four hyphen-separated groups of
/// four ASCII alphanumerics.
pub fn validate_code(code: &str) -> bool {
    let matched = CODE_PATTERN.is_match(code);
    if !matched {
        tracing::warn!(code, "produce code is formatted wrong");
    }
    matched
}

/// Returns `true` iff `name` holds only ASCII alphanumerics.
///
/// The empty string matches; it is rejected by [`check_integrity`] instead.
pub fn validate_name(name: &str) -> bool {
    let matched = NAME_PATTERN.is_match(name);
    if !matched {
        tracing::warn!(name, "produce name is formatted wrong");
    }
    matched
}

/// Returns `true` iff the canonical text of `price` is a plain integer or
/// carries exactly two fractional digits.
///
/// The sign is not inspected, so negative prices pass.
pub fn validate_price(price: f64) -> bool {
    let text = canonical_price_text(price);
    let matched = WHOLE_PRICE_PATTERN.is_match(&text) || DECIMAL_PRICE_PATTERN.is_match(&text);
    if !matched {
        tracing::warn!(price, "unit price is formatted wrong");
    }
    matched
}

/// Shortest round-trip decimal of the magnitude, with a single fractional
/// digit padded to two (`1.5` becomes `1.50`).
fn canonical_price_text(price: f64) -> String {
    let mut text = price.abs().to_string();
    if let Some((_, fraction)) = text.split_once('.') {
        if fraction.len() == 1 {
            text.push('0');
        }
    }
    text
}

// =============================================================================
// Integrity Checker
// =============================================================================

/// Rejects items with an empty code, an empty name or a zero unit price.
pub fn check_integrity(item: &ProduceItem) -> bool {
    let complete = !item.code.is_empty() && !item.name.is_empty() && item.unit_price != 0.0;
    if !complete {
        tracing::warn!(?item, "produce item is incomplete");
    }
    complete
}

// =============================================================================
// Batch Validator
// =============================================================================

/// A batch is valid only if every item passes every check.
///
/// Stops at the first failing item. An empty batch is valid.
pub fn validate_batch(items: &[ProduceItem]) -> bool {
    items.iter().all(|item| {
        validate_code(&item.code)
            && validate_name(&item.name)
            && check_integrity(item)
            && validate_price(item.unit_price)
    })
}
