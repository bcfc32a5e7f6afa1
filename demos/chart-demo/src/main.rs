//! Console demonstration of the chart adapter.
//!
//! Wires the adapter to a logging web-view host and an in-process bridge,
//! loads a populated configuration, then plays the part of the widget by
//! dispatching a few events through the bridge. Run with
//! `RUST_LOG=info cargo run -p chart-demo`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use seatview::prelude::*;
use serde_json::{json, Value};

/// Host that logs instead of rendering.
struct ConsoleHost;

impl WebViewHost for ConsoleHost {
    fn load_html(&self, html: &str) {
        log::info!("loading chart document ({} bytes)", html.len());
    }

    fn evaluate_js(&self, script: &str) {
        log::info!("evaluate: {script}");
    }
}

/// In-process stand-in for the bridge transport: handlers register here and
/// the demo dispatches widget events by hand.
#[derive(Default, Clone)]
struct LocalBridge {
    handlers: Rc<RefCell<HashMap<String, BridgeHandler>>>,
}

impl LocalBridge {
    /// Web-side `window.bridge.call`, collapsed to a synchronous return.
    fn call(&self, name: &str, args: &[Value]) -> Option<Result<Value, String>> {
        let handlers = self.handlers.borrow();
        handlers.get(name).map(|handler| handler(args))
    }
}

impl MessageBridge for LocalBridge {
    fn register(&mut self, name: &str, handler: BridgeHandler) {
        self.handlers.borrow_mut().insert(name.to_owned(), handler);
    }

    fn clear(&mut self) {
        self.handlers.borrow_mut().clear();
    }
}

fn main() -> Result<(), ChartViewError> {
    env_logger::init();

    let host: Rc<dyn WebViewHost> = Rc::new(ConsoleHost);
    let bridge = LocalBridge::default();
    let web_side = bridge.clone();

    let config = ChartConfig::new()
        .with_workspace_key("pk-demo")
        .with_event("demo-night")
        .with_pricing(vec![
            PricingForCategory::simple(1, 30.0),
            PricingForCategory::with_ticket_types(
                "balcony",
                vec![TicketType {
                    ticket_type: "adult".into(),
                    price: 40.0,
                    label: None,
                }],
            ),
        ])
        .with_max_selected_objects(4)
        .with_price_formatter(|price| (price * 100.0).round() / 100.0)
        .with_on_object_selected(|object, ticket_type| {
            log::info!(
                "selected {} under {:?}",
                object.label,
                ticket_type.map(|t| t.ticket_type)
            );
        })
        .with_on_chart_rendered(|chart| {
            log::info!("chart rendered; zooming to selection");
            chart.zoom_to_selected_objects();
        });

    let _view = ChartView::with_config(Some("eu"), config, host, Box::new(bridge))?;

    // Play the widget: fire events back through the bridge.
    web_side.call("onChartRendered", &[]);
    web_side.call(
        "onObjectSelected",
        &[
            Value::String(json!({ "label": "A-1", "objectType": "seat" }).to_string()),
            Value::String("null".into()),
        ],
    );
    if let Some(Ok(formatted)) = web_side.call("priceFormatter", &[Value::String("10.005".into())])
    {
        log::info!("formatted price: {formatted}");
    }

    Ok(())
}
