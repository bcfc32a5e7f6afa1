//! The chart view adapter.

use std::rc::Rc;

use seatview_core::{ChartConfig, MessageBridge, SeatingChart, WebViewHost};

use crate::callbacks::CALLBACKS;
use crate::error::Result;
use crate::html;

/// Embeds the seating-chart widget in a web view and relays its events.
///
/// The view owns its two collaborators (the rendering host and the bridge
/// transport) and a configuration reference that is replaced wholesale on
/// reload. Everything runs on the view's main execution context; handlers
/// are registered and replaced on the same context that dispatches them.
pub struct ChartView {
    host: Rc<dyn WebViewHost>,
    bridge: Box<dyn MessageBridge>,
    region: Option<String>,
    config: Option<Rc<ChartConfig>>,
}

impl ChartView {
    /// Create a view for `region` without loading a chart.
    pub fn new(
        region: Option<&str>,
        host: Rc<dyn WebViewHost>,
        bridge: Box<dyn MessageBridge>,
    ) -> Self {
        Self {
            host,
            bridge,
            region: region.map(str::to_owned),
            config: None,
        }
    }

    /// Create a view and load the chart immediately.
    pub fn with_config(
        region: Option<&str>,
        config: ChartConfig,
        host: Rc<dyn WebViewHost>,
        bridge: Box<dyn MessageBridge>,
    ) -> Result<Self> {
        let mut view = Self::new(region, host, bridge);
        view.config = Some(Rc::new(config));
        view.load()?;
        Ok(view)
    }

    /// Replace the configuration and re-render with the existing region.
    ///
    /// No diffing: the document is fully re-assembled and every callback
    /// registration is replaced.
    pub fn reload(&mut self, config: ChartConfig) -> Result<()> {
        self.config = Some(Rc::new(config));
        self.load()
    }

    /// Assemble the chart document and load it into the host.
    ///
    /// Registers a bridge handler for every callback slot present in the
    /// configuration; the generated stub list is exactly the set of
    /// registered handlers.
    pub fn load(&mut self) -> Result<()> {
        let Some(region) = self.region.as_deref() else {
            log::warn!("Chart load requested without a region; skipping.");
            return Ok(());
        };

        self.bridge.clear();

        let mut stubs = Vec::new();
        if let Some(config) = &self.config {
            let chart = SeatingChart::new(Rc::clone(&self.host));
            for spec in CALLBACKS {
                if let Some(handler) = (spec.registrar)(config, &chart) {
                    self.bridge.register(spec.name, handler);
                    stubs.push(spec.name);
                }
            }
        } else {
            log::warn!("Chart load requested without a configuration; rendering empty.");
        }

        let config_js = html::build_config_js(self.config.as_deref(), &stubs)?;
        let document = html::render_html(&config_js, region);
        self.host.load_html(&document);
        Ok(())
    }

    /// Region the view was created for.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Current configuration, if one was supplied.
    pub fn config(&self) -> Option<&ChartConfig> {
        self.config.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    use seatview_core::BridgeHandler;
    use serde_json::{json, Value};

    #[derive(Default)]
    struct RecordingHost {
        loaded: RefCell<Vec<String>>,
    }

    impl WebViewHost for RecordingHost {
        fn load_html(&self, html: &str) {
            self.loaded.borrow_mut().push(html.to_owned());
        }

        fn evaluate_js(&self, _script: &str) {}
    }

    /// Bridge double that shares its registry with the test body.
    struct SharedBridge {
        handlers: Rc<RefCell<HashMap<String, BridgeHandler>>>,
    }

    impl MessageBridge for SharedBridge {
        fn register(&mut self, name: &str, handler: BridgeHandler) {
            self.handlers.borrow_mut().insert(name.to_owned(), handler);
        }

        fn clear(&mut self) {
            self.handlers.borrow_mut().clear();
        }
    }

    type Registry = Rc<RefCell<HashMap<String, BridgeHandler>>>;

    fn collaborators() -> (Rc<RecordingHost>, Box<SharedBridge>, Registry) {
        let host = Rc::new(RecordingHost::default());
        let handlers: Registry = Rc::new(RefCell::new(HashMap::new()));
        let bridge = Box::new(SharedBridge {
            handlers: Rc::clone(&handlers),
        });
        (host, bridge, handlers)
    }

    #[test]
    fn test_registrations_match_populated_slots() {
        let (host, bridge, handlers) = collaborators();
        let config = ChartConfig::new()
            .with_event("concert-night")
            .with_on_object_selected(|_, _| {})
            .with_on_object_deselected(|_, _| {})
            .with_tooltip_info(|_| String::new());

        let _view = ChartView::with_config(Some("eu"), config, host.clone(), bridge).unwrap();

        assert_eq!(handlers.borrow().len(), 3);
        let loaded = host.loaded.borrow();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].matches("window.bridge.call(").count(), 3);
    }

    #[test]
    fn test_absent_region_skips_load_without_error() {
        let (host, bridge, handlers) = collaborators();
        let mut view = ChartView::new(None, host.clone(), bridge);
        view.config = Some(Rc::new(ChartConfig::new().with_on_selection_valid(|| {})));

        assert!(view.load().is_ok());
        assert!(host.loaded.borrow().is_empty());
        assert!(handlers.borrow().is_empty());
    }

    #[test]
    fn test_absent_config_still_loads_an_empty_document() {
        let (host, bridge, handlers) = collaborators();
        let mut view = ChartView::new(Some("na"), host.clone(), bridge);

        assert!(view.load().is_ok());
        assert_eq!(host.loaded.borrow().len(), 1);
        assert!(handlers.borrow().is_empty());
        assert!(host.loaded.borrow()[0].contains("Object.assign({ divId: \"chart\" }, {})"));
    }

    #[test]
    fn test_reload_replaces_callback_registrations() {
        let (host, bridge, handlers) = collaborators();
        let stale_fired = Rc::new(Cell::new(false));
        let flag = Rc::clone(&stale_fired);
        let first = ChartConfig::new().with_on_selection_valid(move || flag.set(true));

        let mut view = ChartView::with_config(Some("eu"), first, host, bridge).unwrap();
        assert!(handlers.borrow().contains_key("onSelectionValid"));

        let second = ChartConfig::new().with_on_object_clicked(|_| {});
        view.reload(second).unwrap();

        let registry = handlers.borrow();
        assert_eq!(registry.len(), 1);
        assert!(registry.contains_key("onObjectClicked"));
        assert!(!registry.contains_key("onSelectionValid"));
        assert!(!stale_fired.get());
    }

    #[test]
    fn test_single_callback_scenario_end_to_end() {
        let (host, bridge, handlers) = collaborators();
        let config = ChartConfig::new().with_on_object_selected(|_, _| {});

        let _view = ChartView::with_config(Some("na"), config, host.clone(), bridge).unwrap();

        assert_eq!(handlers.borrow().len(), 1);
        assert!(handlers.borrow().contains_key("onObjectSelected"));

        let loaded = host.loaded.borrow();
        assert!(loaded[0].contains("cdn-na.seatview.net"));
        assert_eq!(loaded[0].matches("window.bridge.call(").count(), 1);
        assert!(loaded[0].contains("onObjectSelected: (arg1, arg2) =>"));
    }

    #[test]
    fn test_dispatch_through_registered_handler_resolves() {
        let (host, bridge, handlers) = collaborators();
        let config = ChartConfig::new().with_price_formatter(|price| price * 1.5);

        let _view = ChartView::with_config(Some("eu"), config, host, bridge).unwrap();

        let registry = handlers.borrow();
        let handler = registry.get("priceFormatter").unwrap();
        assert_eq!(handler(&[Value::String("10".into())]), Ok(json!(15.0)));
    }
}
