//! Domain types exchanged with the seating-chart widget.
//!
//! These are the wire shapes the widget emits and accepts. Field names follow
//! the widget's camelCase convention; absent fields are omitted on encode and
//! default to `None` on decode.

use serde::{Deserialize, Serialize};

/// A seating-chart entity: a seat, a table, a booth, or a general admission
/// area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartObject {
    /// Display label, unique within the chart.
    pub label: String,
    /// Entity kind as reported by the widget ("seat", "table", ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    /// Ticket type the object is currently selected under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub for_sale: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selectable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entrance: Option<String>,
    /// Number of places for tables and general admission areas.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_selected: Option<u32>,
    /// Free-form data attached to the object by the chart author.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_data: Option<serde_json::Value>,
}

impl ChartObject {
    /// Create an object descriptor with only a label; every other attribute
    /// is absent.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            object_type: None,
            status: None,
            category: None,
            ticket_type: None,
            for_sale: None,
            selectable: None,
            section: None,
            entrance: None,
            capacity: None,
            num_selected: None,
            extra_data: None,
        }
    }
}

/// Category a chart object belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub key: CategoryKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Category keys may be numeric or textual depending on how the chart was
/// drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryKey {
    Number(i64),
    Text(String),
}

impl From<i64> for CategoryKey {
    fn from(key: i64) -> Self {
        Self::Number(key)
    }
}

impl From<&str> for CategoryKey {
    fn from(key: &str) -> Self {
        Self::Text(key.to_owned())
    }
}

/// A caller-defined ticket category attached to a selection, used for
/// pricing and eligibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketType {
    pub ticket_type: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Reason code explaining why a selection failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SelectionValidator {
    NoOrphanSeats,
    ConsecutiveSeats,
}

/// Pricing for a single category: either one simple price or a price per
/// ticket type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingForCategory {
    pub category: CategoryKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_types: Option<Vec<TicketType>>,
}

impl PricingForCategory {
    /// Simple pricing: one price for the whole category.
    pub fn simple(category: impl Into<CategoryKey>, price: f64) -> Self {
        Self {
            category: category.into(),
            price: Some(price),
            ticket_types: None,
        }
    }

    /// Multi-level pricing: one price per ticket type.
    pub fn with_ticket_types(
        category: impl Into<CategoryKey>,
        ticket_types: Vec<TicketType>,
    ) -> Self {
        Self {
            category: category.into(),
            price: None,
            ticket_types: Some(ticket_types),
        }
    }
}
