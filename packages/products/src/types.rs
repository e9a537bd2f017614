use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A product record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: String,
    pub barcode: String,
    pub serial: String,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub price: f64,
    pub description: String,
    pub stock: i64,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// A numeric field as it arrives off the wire: clients send prices and
/// stock counts both as JSON numbers and as quoted strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum NumericInput {
    Number(f64),
    Text(String),
}

impl NumericInput {
    /// Coerce to a float, `None` if the text form does not parse.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            NumericInput::Number(n) => Some(*n),
            NumericInput::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }

    /// Coerce to an integer, `None` if the text form does not parse.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            NumericInput::Number(n) => Some(*n as i64),
            NumericInput::Text(s) => s.trim().parse::<i64>().ok(),
        }
    }
}

/// Input for creating a product, as submitted by the caller.
///
/// Every field is optional at the serde layer so that presence is
/// checked by the validator (which reports all missing fields at once)
/// instead of failing at deserialization on the first one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductCreateInput {
    pub barcode: Option<String>,
    pub serial: Option<String>,
    pub name: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub price: Option<NumericInput>,
    pub description: Option<String>,
    pub stock: Option<NumericInput>,
}

/// A validated, coerced product ready for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub barcode: String,
    pub serial: String,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub price: f64,
    pub description: String,
    pub stock: i64,
}

/// Input for updating an existing product.
///
/// This is the full allow-list of mutable fields; anything else in the
/// request body (including `id` and the timestamps) is rejected at
/// deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductUpdateInput {
    pub barcode: Option<String>,
    pub serial: Option<String>,
    pub name: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub stock: Option<i64>,
}
