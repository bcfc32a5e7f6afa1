//! Web view seam and the rendered-chart handle.

use std::rc::Rc;

use serde::Serialize;

/// Rendering engine contract.
///
/// Implemented by the embedding web view. The adapter loads assembled
/// documents into it and evaluates widget scripts against the current
/// document; rendering itself is entirely the host's concern.
pub trait WebViewHost {
    /// Replace the view content with the given document.
    fn load_html(&self, html: &str);

    /// Evaluate a JavaScript expression in the current document.
    fn evaluate_js(&self, script: &str);
}

/// Handle to a rendered seating chart.
///
/// Handed to the `onChartRendered` callback once the widget reports itself
/// rendered. Operations call into the widget by evaluating scripts and are
/// fire-and-forget: the widget applies them asynchronously and reports
/// outcomes through the configured callbacks, not through return values.
#[derive(Clone)]
pub struct SeatingChart {
    host: Rc<dyn WebViewHost>,
}

impl SeatingChart {
    /// Create a handle over the host the chart was rendered into.
    pub fn new(host: Rc<dyn WebViewHost>) -> Self {
        Self { host }
    }

    /// Select the given objects by label.
    pub fn select_objects(&self, labels: &[&str]) {
        self.call_with("chart.selectObjects", &labels);
    }

    /// Deselect the given objects by label.
    pub fn deselect_objects(&self, labels: &[&str]) {
        self.call_with("chart.deselectObjects", &labels);
    }

    /// Deselect everything currently selected.
    pub fn clear_selection(&self) {
        self.host.evaluate_js("chart.clearSelection()");
    }

    /// Restore the initial pan and zoom state.
    pub fn reset_view(&self) {
        self.host.evaluate_js("chart.resetView()");
    }

    /// Pan and zoom the view to fit the current selection.
    pub fn zoom_to_selected_objects(&self) {
        self.host.evaluate_js("chart.zoomToSelectedObjects()");
    }

    /// Call a widget function with one JSON-encoded argument.
    ///
    /// A value that fails to serialize is logged and dropped; widget calls
    /// never surface errors to the caller.
    fn call_with(&self, function: &str, argument: &impl Serialize) {
        let json = match serde_json::to_string(argument) {
            Ok(json) => json,
            Err(e) => {
                log::error!("Failed to serialize argument for {function}: {e}");
                return;
            }
        };
        self.host.evaluate_js(&format!("{function}({json})"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingHost {
        scripts: RefCell<Vec<String>>,
    }

    impl WebViewHost for RecordingHost {
        fn load_html(&self, _html: &str) {}

        fn evaluate_js(&self, script: &str) {
            self.scripts.borrow_mut().push(script.to_owned());
        }
    }

    #[test]
    fn test_select_objects_encodes_labels_as_json() {
        let host = Rc::new(RecordingHost::default());
        let chart = SeatingChart::new(host.clone());

        chart.select_objects(&["A-1", "A-2"]);

        let scripts = host.scripts.borrow();
        assert_eq!(scripts.as_slice(), [r#"chart.selectObjects(["A-1","A-2"])"#]);
    }

    #[test]
    fn test_parameterless_operations_evaluate_plain_calls() {
        let host = Rc::new(RecordingHost::default());
        let chart = SeatingChart::new(host.clone());

        chart.clear_selection();
        chart.reset_view();
        chart.zoom_to_selected_objects();

        let scripts = host.scripts.borrow();
        assert_eq!(
            scripts.as_slice(),
            [
                "chart.clearSelection()",
                "chart.resetView()",
                "chart.zoomToSelectedObjects()",
            ]
        );
    }
}
