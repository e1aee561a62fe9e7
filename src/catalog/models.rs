//! Produce Catalog Domain Models
//!
//! This module contains the data structures of the catalog domain.

use serde::{Deserialize, Serialize};

// =============================================================================
// Catalog Domain Models
// =============================================================================

/// A single catalog entry.
///
/// Fields absent from an incoming JSON object decode to their zero value,
/// which the integrity check then rejects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProduceItem {
    /// Identity key, shaped `XXXX-XXXX-XXXX-XXXX`
    #[serde(rename = "produce_code", default)]
    pub code: String,

    /// Alphanumeric display name
    #[serde(default)]
    pub name: String,

    /// Price per unit
    #[serde(default)]
    pub unit_price: f64,
}

impl ProduceItem {
    pub fn new(code: impl Into<String>, name: impl Into<String>, unit_price: f64) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            unit_price,
        }
    }
}

/// The entries the catalog holds at process start, in insertion order.
///
/// These are trusted and never pass through validation.
pub fn seed_items() -> Vec<ProduceItem> {
    vec![
        ProduceItem::new("A12T-4GH7-QPL9-3N4M", "Lettuce", 3.46),
        ProduceItem::new("E5T6-9UI3-TH15-QR88", "Peach", 2.99),
        ProduceItem::new("YRT6-72AS-K736-L4AR", "Green Pepper", 0.79),
        ProduceItem::new("TQ4C-VV6T-75ZX-1RMR", "Gala Apple", 3.59),
    ]
}

/// Body returned alongside a 404
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
