//! Bridge transport seam.
//!
//! The generic call/response transport between the web layer and native code
//! is an external collaborator. The adapter only registers named handlers;
//! message delivery, promise resolution, and threading belong to the
//! embedding runtime.

use serde_json::Value;

/// Handler registered for a named bridge message.
///
/// Called on the view's main execution context with the positional arguments
/// delivered by the transport. Return `Ok(value)` to resolve the web-side
/// promise with the value, `Err(message)` to reject it.
pub type BridgeHandler = Box<dyn Fn(&[Value]) -> Result<Value, String>>;

/// Bidirectional call/response bridge.
///
/// Implemented by the embedding web-view runtime. The web side invokes
/// handlers via `window.bridge.call(name, args, onSuccess, onFailure)`;
/// the native side only registers them.
pub trait MessageBridge {
    /// Associate `handler` with a named message, replacing any previous
    /// handler of the same name.
    fn register(&mut self, name: &str, handler: BridgeHandler);

    /// Remove every registered handler.
    ///
    /// Called before re-registering so a reload never leaves a stale handler
    /// behind.
    fn clear(&mut self);
}
