// Invoice input record, ingested from a generic JSON value.
//
// Responsibilities
// - Pull every required field out with a field-specific error so a caller
//   can tell which one is absent.
// - Resolve the polymorphic `details` entries into plain line items once,
//   here. The layout routine never re-inspects shapes.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("missing invoice field `{0}`")]
    MissingField(&'static str),

    #[error("invoice field `{0}` has the wrong shape")]
    InvalidField(&'static str),

    #[error("failed to save invoice: {0}")]
    Save(String),
}

/// One billable row: a description and a pre-formatted amount. The amount is
/// blank when the source entry did not carry one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub description: String,
    pub amount: String,
}

impl LineItem {
    /// Three-way interpretation of a `details` entry: a structured
    /// `{description, amount}` object, a string with one colon separator, or
    /// an opaque string with the amount left blank.
    pub fn from_entry(entry: &Value) -> Self {
        if let Some(map) = entry.as_object() {
            let field = |key: &str| {
                map.get(key)
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string()
            };
            return Self {
                description: field("description"),
                amount: field("amount"),
            };
        }
        match entry.as_str() {
            Some(text) => match text.split_once(':') {
                Some((description, amount)) => Self {
                    description: description.trim().to_string(),
                    amount: amount.trim().to_string(),
                },
                None => Self {
                    description: text.to_string(),
                    amount: String::new(),
                },
            },
            None => Self {
                description: entry.to_string(),
                amount: String::new(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceRequest {
    pub name: String,
    pub date: String,
    pub bill_to: Vec<String>,
    pub salary_description: String,
    pub details: Vec<LineItem>,
    pub total: String,
    pub total_words: String,
}

impl InvoiceRequest {
    pub fn from_value(data: &Value) -> Result<Self, LayoutError> {
        Ok(Self {
            name: string_field(data, "name")?,
            date: string_field(data, "date")?,
            bill_to: string_list_field(data, "bill_to")?,
            salary_description: string_field(data, "salary_description")?,
            details: detail_items(data)?,
            total: string_field(data, "total")?,
            total_words: string_field(data, "total_words")?,
        })
    }
}

fn string_field(data: &Value, key: &'static str) -> Result<String, LayoutError> {
    data.get(key)
        .ok_or(LayoutError::MissingField(key))?
        .as_str()
        .map(str::to_string)
        .ok_or(LayoutError::InvalidField(key))
}

fn string_list_field(data: &Value, key: &'static str) -> Result<Vec<String>, LayoutError> {
    data.get(key)
        .ok_or(LayoutError::MissingField(key))?
        .as_array()
        .ok_or(LayoutError::InvalidField(key))?
        .iter()
        .map(|line| {
            line.as_str()
                .map(str::to_string)
                .ok_or(LayoutError::InvalidField(key))
        })
        .collect()
}

fn detail_items(data: &Value) -> Result<Vec<LineItem>, LayoutError> {
    Ok(data
        .get("details")
        .ok_or(LayoutError::MissingField("details"))?
        .as_array()
        .ok_or(LayoutError::InvalidField("details"))?
        .iter()
        .map(LineItem::from_entry)
        .collect())
}
