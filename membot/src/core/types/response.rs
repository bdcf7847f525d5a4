//! Handler chain result type.

/// Handler result for the chain. `Reply(html)` carries the response body; the
/// runner sends it to the chat and later handlers can read it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; no response body.
    Stop,
    /// Stop the chain and attach reply text (HTML).
    Reply(String),
}
