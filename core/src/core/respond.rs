// pipework/src/core/respond.rs

//! The outbound seam: how the executor hands the finished response to the
//! surrounding HTTP framework.

use serde_json::Value;

/// Sink for the single response a successful invocation emits.
///
/// The wire contract's two-call shape (`status(code)` then `send(body)`) is
/// collapsed into one consuming call, which makes the exactly-once emission
/// rule structural: `send` takes `self`, so a responder cannot be used twice,
/// and on step failure the executor returns before ever calling it.
///
/// `Reply` is whatever the framework adapter wants back out of the handler,
/// e.g. its own response type.
pub trait Respond {
  type Reply;

  fn send(self, status_code: u16, body: Value) -> Self::Reply;
}

/// Minimal responder that hands the response parts straight back.
///
/// Useful for embedding the executor outside an HTTP framework and for
/// asserting on responses in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct PartsResponder;

impl Respond for PartsResponder {
  type Reply = (u16, Value);

  fn send(self, status_code: u16, body: Value) -> Self::Reply {
    (status_code, body)
  }
}
