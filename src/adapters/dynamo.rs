//! # DynamoDB Example
//!
//! One get-item call against a fixed table, with a per-request endpoint
//! override. The key is marshalled with `serde_dynamo`, the request is
//! built with the SDK's fluent builder, and the first attribute name of the
//! returned item comes back (empty when there is no item).
//!
//! Marshalling and SDK errors are returned unchanged.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::{Client, Config};
use serde::Serialize;
use tracing::debug;

use crate::error::Result;

/// Table read by [`first_item_key`]
pub const TABLE_NAME: &str = "example_table";

/// Name of the partition key attribute
pub const KEY_ATTRIBUTE: &str = "primary_key";

/// Partition key value looked up
pub const ITEM_PRIMARY_KEY: &str = "item_primary_key";

/// Endpoint override attached to the request
pub const DEMO_ENDPOINT: &str = "https://example.com";

/// Marshal a value into a DynamoDB attribute
pub fn marshal_key<T: Serialize>(value: T) -> Result<AttributeValue> {
    Ok(serde_dynamo::to_attribute_value(value)?)
}

/// First attribute name of an item, or `""`
///
/// "First" is the lexicographically smallest name, so the answer does not
/// depend on hash map iteration order.
pub fn first_key(item: Option<&HashMap<String, AttributeValue>>) -> String {
    item.and_then(|item| item.keys().min())
        .cloned()
        .unwrap_or_default()
}

/// Get [`ITEM_PRIMARY_KEY`] from [`TABLE_NAME`] via [`DEMO_ENDPOINT`]
pub async fn first_item_key(client: &Client) -> Result<String> {
    first_item_key_at(client, DEMO_ENDPOINT).await
}

/// Get [`ITEM_PRIMARY_KEY`] from [`TABLE_NAME`], sending the request to
/// `endpoint` instead of the client's configured endpoint
pub async fn first_item_key_at(client: &Client, endpoint: &str) -> Result<String> {
    let key = marshal_key(ITEM_PRIMARY_KEY)?;

    debug!(table = TABLE_NAME, endpoint, "dynamodb get_item");
    let out = client
        .get_item()
        .table_name(TABLE_NAME)
        .key(KEY_ATTRIBUTE, key)
        .customize()
        .config_override(Config::builder().endpoint_url(endpoint))
        .send()
        .await?;

    Ok(first_key(out.item()))
}
