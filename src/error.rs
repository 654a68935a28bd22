//! # Errors
//!
//! Third-party errors are wrapped transparently: their `Display` and
//! `source()` are exactly what the SDK produced.

#[cfg(feature = "dynamodb")]
use aws_sdk_dynamodb::error::SdkError;
#[cfg(feature = "dynamodb")]
use aws_sdk_dynamodb::operation::get_item::GetItemError;

/// Errors that can occur in callshape
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The factory switch withheld the factory
    #[error("Widget factory disabled by environment variable {var}")]
    FactoryDisabled { var: String },

    /// Marshalling a key into a DynamoDB attribute failed
    #[cfg(feature = "dynamodb")]
    #[error(transparent)]
    Marshal(#[from] serde_dynamo::Error),

    /// The DynamoDB get-item call failed
    #[cfg(feature = "dynamodb")]
    #[error(transparent)]
    GetItem(#[from] SdkError<GetItemError>),
}

/// Result type for callshape operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_disabled_message() {
        let err = Error::FactoryDisabled {
            var: "BUG".to_string(),
        };
        assert_eq!(err.to_string(), "Widget factory disabled by environment variable BUG");
    }
}
