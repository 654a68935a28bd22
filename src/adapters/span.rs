//! # Span Example
//!
//! Starts a tracing span carrying one attribute, does some work inside it,
//! and closes it on the way out. The span guard and the span handle are
//! dropped when the function returns, which ends the span on every exit
//! path.

use tracing::{info, info_span};

/// Name of the span opened by [`start_example`]
pub const SPAN_NAME: &str = "operation-with-arg";

/// Open [`SPAN_NAME`] with `span_key = "span_value"` for the duration of
/// the call
pub fn start_example() {
    let span = info_span!("operation-with-arg", span_key = "span_value");
    let _guard = span.enter();

    info!("do something");
}
