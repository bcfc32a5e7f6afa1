//! # Seatview
//!
//! Embed a JavaScript-rendered interactive seating chart inside a native
//! view and relay events between the two layers.
//!
//! ## Architecture
//!
//! ```text
//! Your application (supplies ChartConfig + closures)
//!        ↓
//! ChartView (assembles the document, registers bridge handlers)
//!        ↓
//! WebViewHost / MessageBridge (embedding runtime, behind traits)
//!        ↓
//! Seating-chart widget (remote JavaScript)
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use seatview::prelude::*;
//!
//! let config = ChartConfig::new()
//!     .with_workspace_key("pk-123")
//!     .with_event("concert-night")
//!     .with_on_object_selected(|object, ticket_type| {
//!         println!("selected {} ({ticket_type:?})", object.label);
//!     });
//!
//! // host: Rc<dyn WebViewHost> and bridge: Box<dyn MessageBridge> are
//! // provided by the embedding web-view runtime.
//! let view = ChartView::with_config(Some("eu"), config, host, bridge)?;
//! ```

// Re-export sub-crates
pub use seatview_core as core;
pub use seatview_webview as webview;

/// Prelude module for convenient imports.
///
/// Import everything you need to embed a chart:
/// ```rust,ignore
/// use seatview::prelude::*;
/// ```
pub mod prelude {
    pub use seatview_core::{
        // Trait seams toward the embedding runtime
        BridgeHandler, MessageBridge, WebViewHost,
        // Chart handle passed to onChartRendered
        SeatingChart,
        // Configuration
        ChartConfig,
        // Domain types
        Category, CategoryKey, ChartObject, PricingForCategory, SelectionValidator, TicketType,
        // Error types
        DecodeError, DecodeResult,
    };

    pub use seatview_webview::{ChartView, ChartViewError};
}
