//! Chart document assembly.
//!
//! The document is a static template with two placeholders, substituted via
//! literal string replacement: `%config%` receives the configuration object
//! literal, `%region%` the region identifier. The configuration literal is
//! composed structurally: the config's data fields are serialized to a JSON
//! object once, then emitted field by field with the callback stubs merged in
//! as additional fields.

use seatview_core::ChartConfig;
use serde_json::Value;

use crate::error::{ChartViewError, Result};

/// Document template. `%region%` selects the widget CDN; `%config%` is the
/// configuration object literal handed to the widget constructor.
const CHART_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta name="viewport" content="initial-scale=1.0, maximum-scale=1.0, user-scalable=no">
    <style>
        html, body { margin: 0; padding: 0; height: 100%; }
        #chart { width: 100%; height: 100%; }
    </style>
    <script src="https://cdn-%region%.seatview.net/chart.js"></script>
</head>
<body>
    <div id="chart"></div>
    <script>
        window.chart = new seatview.SeatingChart(Object.assign({ divId: "chart" }, %config%)).render();
    </script>
</body>
</html>
"#;

/// Stub expression for one callback field.
///
/// On invocation the stub forwards both arguments as JSON-stringified text
/// through the bridge and resolves or rejects the promise with the
/// transport's async result.
fn callback_stub(name: &str) -> String {
    format!(
        "{name}: (arg1, arg2) => (new Promise((resolve, reject) => \
         window.bridge.call(\"{name}\", [JSON.stringify(arg1), JSON.stringify(arg2)], \
         data => resolve(data), error => reject(error))))"
    )
}

/// Compose the configuration object literal.
///
/// Data fields and callback stubs are emitted as fields of one object; an
/// absent configuration yields an empty object.
pub(crate) fn build_config_js(config: Option<&ChartConfig>, callbacks: &[&str]) -> Result<String> {
    let fields = match config {
        Some(config) => {
            let encoded = serde_json::to_value(config)
                .map_err(|e| ChartViewError::ConfigEncoding(e.to_string()))?;
            match encoded {
                Value::Object(fields) => fields,
                other => {
                    return Err(ChartViewError::ConfigEncoding(format!(
                        "configuration serialized to {other} instead of an object"
                    )));
                }
            }
        }
        None => serde_json::Map::new(),
    };

    let mut entries: Vec<String> = fields
        .iter()
        .map(|(key, value)| format!("{}: {}", Value::String(key.clone()), value))
        .collect();
    entries.extend(callbacks.iter().map(|name| callback_stub(name)));

    Ok(format!("{{{}}}", entries.join(", ")))
}

/// Substitute the two placeholders into the template.
pub(crate) fn render_html(config_js: &str, region: &str) -> String {
    CHART_HTML
        .replace("%config%", config_js)
        .replace("%region%", region)
}
