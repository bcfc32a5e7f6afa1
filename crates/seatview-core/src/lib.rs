//! Core types for embedding an interactive seating chart.
//!
//! Platform-free: the web view and the JS-bridge transport are external
//! collaborators behind the [`WebViewHost`] and [`MessageBridge`] traits.
//! This crate carries the domain types the widget exchanges, the chart
//! configuration, and the payload decoders the bridge handlers use.

pub mod bridge;
pub mod chart;
pub mod config;
pub mod decode;
mod error;
pub mod objects;

pub use bridge::{BridgeHandler, MessageBridge};
pub use chart::{SeatingChart, WebViewHost};
pub use config::ChartConfig;
pub use error::{DecodeError, DecodeResult};
pub use objects::{
    Category, CategoryKey, ChartObject, PricingForCategory, SelectionValidator, TicketType,
};
