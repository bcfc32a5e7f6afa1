//! Chart configuration.
//!
//! [`ChartConfig`] carries the display options forwarded to the widget plus
//! one optional slot per recognized event callback. Display options encode to
//! camelCase JSON with absent fields omitted; callback slots never serialize,
//! they only drive handler registration and stub generation at load time.

use std::collections::HashMap;

use serde::Serialize;

use crate::chart::SeatingChart;
use crate::objects::{ChartObject, PricingForCategory, SelectionValidator, TicketType};

/// Callback with no payload.
pub type NotifyCallback = Box<dyn Fn()>;

/// Callback invoked with a single chart object.
pub type ObjectCallback = Box<dyn Fn(ChartObject)>;

/// Callback invoked with a chart object and the ticket type it was selected
/// or deselected under.
pub type ObjectTicketTypeCallback = Box<dyn Fn(ChartObject, Option<TicketType>)>;

/// Callback invoked with the objects affected by a hold or release, plus the
/// ticket types involved when the widget reports them.
pub type HoldCallback = Box<dyn Fn(Vec<ChartObject>, Option<Vec<TicketType>>)>;

/// Callback invoked with a best-available result: the assigned objects and
/// whether the selection could be fully honored.
pub type BestAvailableCallback = Box<dyn Fn(Vec<ChartObject>, bool)>;

/// Callback invoked with the reason codes of a failed selection.
pub type SelectionInvalidCallback = Box<dyn Fn(Vec<SelectionValidator>)>;

/// Formatter applied to prices before display; the result is sent back to
/// the widget.
pub type PriceFormatter = Box<dyn Fn(f64) -> f64>;

/// Provider of tooltip text for a hovered object; the result is sent back to
/// the widget.
pub type TooltipInfoProvider = Box<dyn Fn(ChartObject) -> String>;

/// Callback invoked with a handle to the rendered chart.
pub type ChartRenderedCallback = Box<dyn Fn(SeatingChart)>;

/// Configuration for a seating-chart view.
///
/// Created by the caller before or at load time; the adapter never mutates
/// it and replaces it wholesale on reload.
#[derive(Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    /// Workspace the event belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_key: Option<String>,
    /// Event key to render the chart for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    /// Event keys for seasons spanning multiple events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing: Option<Vec<PricingForCategory>>,
    /// Widget UI language (ISO 639-1).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Overrides for the widget's built-in UI strings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_places_to_select: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_selected_objects: Option<u32>,
    /// Labels to mark selected when the chart first renders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_objects: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_validators: Option<Vec<SelectionValidator>>,
    /// Hold-token session mode ("start", "continue", "manual", "none").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hold_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_legend: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_without_pricing_selectable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_without_category_selectable: Option<bool>,

    // Callback slots. A handler is registered for a slot if and only if the
    // slot is set; the slots themselves never serialize.
    #[serde(skip_serializing)]
    pub price_formatter: Option<PriceFormatter>,
    #[serde(skip_serializing)]
    pub on_selection_valid: Option<NotifyCallback>,
    #[serde(skip_serializing)]
    pub on_selection_invalid: Option<SelectionInvalidCallback>,
    #[serde(skip_serializing)]
    pub on_object_selected: Option<ObjectTicketTypeCallback>,
    #[serde(skip_serializing)]
    pub on_object_deselected: Option<ObjectTicketTypeCallback>,
    #[serde(skip_serializing)]
    pub on_object_clicked: Option<ObjectCallback>,
    #[serde(skip_serializing)]
    pub on_best_available_selected: Option<BestAvailableCallback>,
    #[serde(skip_serializing)]
    pub on_best_available_selection_failed: Option<NotifyCallback>,
    #[serde(skip_serializing)]
    pub on_hold_succeeded: Option<HoldCallback>,
    #[serde(skip_serializing)]
    pub on_hold_failed: Option<HoldCallback>,
    #[serde(skip_serializing)]
    pub on_release_hold_succeeded: Option<HoldCallback>,
    #[serde(skip_serializing)]
    pub on_release_hold_failed: Option<HoldCallback>,
    #[serde(skip_serializing)]
    pub on_selected_object_booked: Option<ObjectCallback>,
    #[serde(skip_serializing)]
    pub tooltip_info: Option<TooltipInfoProvider>,
    #[serde(skip_serializing)]
    pub on_chart_rendered: Option<ChartRenderedCallback>,
    #[serde(skip_serializing)]
    pub on_chart_rendering_failed: Option<NotifyCallback>,
}

impl ChartConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the workspace key.
    pub fn with_workspace_key(mut self, key: impl Into<String>) -> Self {
        self.workspace_key = Some(key.into());
        self
    }

    /// Set the event key.
    pub fn with_event(mut self, event: impl Into<String>) -> Self {
        self.event = Some(event.into());
        self
    }

    /// Set the event keys for a season.
    pub fn with_events(mut self, events: Vec<String>) -> Self {
        self.events = Some(events);
        self
    }

    /// Set per-category pricing.
    pub fn with_pricing(mut self, pricing: Vec<PricingForCategory>) -> Self {
        self.pricing = Some(pricing);
        self
    }

    /// Set the widget UI language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Override built-in widget UI strings.
    pub fn with_messages(mut self, messages: HashMap<String, String>) -> Self {
        self.messages = Some(messages);
        self
    }

    /// Require exactly this many places to be selected.
    pub fn with_number_of_places_to_select(mut self, count: u32) -> Self {
        self.number_of_places_to_select = Some(count);
        self
    }

    /// Cap the number of selectable objects.
    pub fn with_max_selected_objects(mut self, count: u32) -> Self {
        self.max_selected_objects = Some(count);
        self
    }

    /// Mark objects selected when the chart first renders.
    pub fn with_selected_objects(mut self, labels: Vec<String>) -> Self {
        self.selected_objects = Some(labels);
        self
    }

    /// Enable selection validators.
    pub fn with_selection_validators(mut self, validators: Vec<SelectionValidator>) -> Self {
        self.selection_validators = Some(validators);
        self
    }

    /// Set the hold-token session mode.
    pub fn with_session(mut self, session: impl Into<String>) -> Self {
        self.session = Some(session.into());
        self
    }

    /// Reuse an existing hold token.
    pub fn with_hold_token(mut self, token: impl Into<String>) -> Self {
        self.hold_token = Some(token.into());
        self
    }

    /// Show or hide the category legend.
    pub fn with_show_legend(mut self, show: bool) -> Self {
        self.show_legend = Some(show);
        self
    }

    /// Allow selecting objects that have no pricing configured.
    pub fn with_object_without_pricing_selectable(mut self, selectable: bool) -> Self {
        self.object_without_pricing_selectable = Some(selectable);
        self
    }

    /// Allow selecting objects that have no category.
    pub fn with_object_without_category_selectable(mut self, selectable: bool) -> Self {
        self.object_without_category_selectable = Some(selectable);
        self
    }

    /// Format prices before display.
    pub fn with_price_formatter(mut self, format: impl Fn(f64) -> f64 + 'static) -> Self {
        self.price_formatter = Some(Box::new(format));
        self
    }

    /// Notify when the selection passes all validators.
    pub fn with_on_selection_valid(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_selection_valid = Some(Box::new(callback));
        self
    }

    /// Notify when the selection fails validation.
    pub fn with_on_selection_invalid(
        mut self,
        callback: impl Fn(Vec<SelectionValidator>) + 'static,
    ) -> Self {
        self.on_selection_invalid = Some(Box::new(callback));
        self
    }

    /// Notify when an object is selected.
    pub fn with_on_object_selected(
        mut self,
        callback: impl Fn(ChartObject, Option<TicketType>) + 'static,
    ) -> Self {
        self.on_object_selected = Some(Box::new(callback));
        self
    }

    /// Notify when an object is deselected.
    pub fn with_on_object_deselected(
        mut self,
        callback: impl Fn(ChartObject, Option<TicketType>) + 'static,
    ) -> Self {
        self.on_object_deselected = Some(Box::new(callback));
        self
    }

    /// Notify when an object is clicked.
    pub fn with_on_object_clicked(mut self, callback: impl Fn(ChartObject) + 'static) -> Self {
        self.on_object_clicked = Some(Box::new(callback));
        self
    }

    /// Notify when a best-available selection is assigned.
    pub fn with_on_best_available_selected(
        mut self,
        callback: impl Fn(Vec<ChartObject>, bool) + 'static,
    ) -> Self {
        self.on_best_available_selected = Some(Box::new(callback));
        self
    }

    /// Notify when a best-available selection cannot be satisfied.
    pub fn with_on_best_available_selection_failed(
        mut self,
        callback: impl Fn() + 'static,
    ) -> Self {
        self.on_best_available_selection_failed = Some(Box::new(callback));
        self
    }

    /// Notify when objects are held successfully.
    pub fn with_on_hold_succeeded(
        mut self,
        callback: impl Fn(Vec<ChartObject>, Option<Vec<TicketType>>) + 'static,
    ) -> Self {
        self.on_hold_succeeded = Some(Box::new(callback));
        self
    }

    /// Notify when holding objects fails.
    pub fn with_on_hold_failed(
        mut self,
        callback: impl Fn(Vec<ChartObject>, Option<Vec<TicketType>>) + 'static,
    ) -> Self {
        self.on_hold_failed = Some(Box::new(callback));
        self
    }

    /// Notify when held objects are released successfully.
    pub fn with_on_release_hold_succeeded(
        mut self,
        callback: impl Fn(Vec<ChartObject>, Option<Vec<TicketType>>) + 'static,
    ) -> Self {
        self.on_release_hold_succeeded = Some(Box::new(callback));
        self
    }

    /// Notify when releasing held objects fails.
    pub fn with_on_release_hold_failed(
        mut self,
        callback: impl Fn(Vec<ChartObject>, Option<Vec<TicketType>>) + 'static,
    ) -> Self {
        self.on_release_hold_failed = Some(Box::new(callback));
        self
    }

    /// Notify when an object in the current selection is booked elsewhere.
    pub fn with_on_selected_object_booked(
        mut self,
        callback: impl Fn(ChartObject) + 'static,
    ) -> Self {
        self.on_selected_object_booked = Some(Box::new(callback));
        self
    }

    /// Provide tooltip text for hovered objects.
    pub fn with_tooltip_info(
        mut self,
        provider: impl Fn(ChartObject) -> String + 'static,
    ) -> Self {
        self.tooltip_info = Some(Box::new(provider));
        self
    }

    /// Notify when the chart finishes rendering, with a handle to it.
    pub fn with_on_chart_rendered(mut self, callback: impl Fn(SeatingChart) + 'static) -> Self {
        self.on_chart_rendered = Some(Box::new(callback));
        self
    }

    /// Notify when the chart fails to render.
    pub fn with_on_chart_rendering_failed(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_chart_rendering_failed = Some(Box::new(callback));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_options_in_camel_case() {
        let config = ChartConfig::new()
            .with_workspace_key("pk-123")
            .with_event("concert-night")
            .with_max_selected_objects(4)
            .with_show_legend(true);

        let encoded = serde_json::to_value(&config).unwrap();
        assert_eq!(encoded["workspaceKey"], "pk-123");
        assert_eq!(encoded["event"], "concert-night");
        assert_eq!(encoded["maxSelectedObjects"], 4);
        assert_eq!(encoded["showLegend"], true);
    }

    #[test]
    fn test_absent_options_are_omitted() {
        let config = ChartConfig::new().with_event("concert-night");

        let encoded = serde_json::to_value(&config).unwrap();
        let fields = encoded.as_object().unwrap();
        assert_eq!(fields.len(), 1);
    }

    #[test]
    fn test_callback_slots_never_serialize() {
        let config = ChartConfig::new()
            .with_event("concert-night")
            .with_price_formatter(|price| price * 1.2)
            .with_on_selection_valid(|| {});

        let encoded = serde_json::to_string(&config).unwrap();
        assert!(!encoded.contains("priceFormatter"));
        assert!(!encoded.contains("onSelectionValid"));
    }

    #[test]
    fn test_option_round_trip_field_for_field() {
        let config = ChartConfig::new()
            .with_workspace_key("pk-123")
            .with_pricing(vec![crate::objects::PricingForCategory::simple(2, 25.0)])
            .with_selection_validators(vec![SelectionValidator::NoOrphanSeats])
            .with_selected_objects(vec!["A-1".into()]);

        // Only the data fields are decodable; decode them back as a map and
        // compare against a fresh encoding.
        let encoded = serde_json::to_string(&config).unwrap();
        let decoded: serde_json::Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, serde_json::to_value(&config).unwrap());
        assert_eq!(decoded["pricing"][0]["category"], 2);
        assert_eq!(decoded["selectionValidators"][0]["type"], "noOrphanSeats");
    }
}
