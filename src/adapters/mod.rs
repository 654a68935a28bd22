//! # Adapters
//!
//! Implementations of port traits, plus the example wrappers around
//! third-party SDKs:
//! - `factory`: the working `WidgetFactory`
//! - `dynamo`: a DynamoDB get-item call (feature `dynamodb`)
//! - `span`: starting and closing a tracing span
//!
//! The SDK wrappers add no logic of their own; they forward to the library
//! and hand its errors back unchanged.

pub mod factory;
pub mod span;

#[cfg(feature = "dynamodb")]
pub mod dynamo;
