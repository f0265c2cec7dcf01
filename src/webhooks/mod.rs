//! Webhook event handling.
//!
//! Webhook deliveries arrive as HTTP POSTs signed with the endpoint's signing
//! secret. [`construct_event`] verifies the signature and decodes the payload
//! into an [`Event`]; [`verify_signature`] is the verification step alone,
//! for callers that decode the payload themselves.

mod verification;

pub use verification::{construct_event, verify_signature, DEFAULT_TOLERANCE};

use serde::Deserialize;
use serde_json::Value;

/// A webhook event.
#[derive(Clone, Debug, Deserialize)]
pub struct Event {
    /// The event identifier, e.g. `evt_...`.
    pub id: String,
    /// Always `"event"`.
    pub object: String,
    /// The event type, e.g. `account.updated`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// When the event was created, as a Unix timestamp.
    #[serde(default)]
    pub created: Option<i64>,
    /// Whether the event originated in live mode.
    #[serde(default)]
    pub livemode: Option<bool>,
    /// The API version the event payload was rendered with.
    #[serde(default)]
    pub api_version: Option<String>,
    /// The event payload.
    pub data: EventData,
}

/// The payload of a webhook event.
#[derive(Clone, Debug, Deserialize)]
pub struct EventData {
    /// The API object the event describes, in its post-change state.
    pub object: Value,
    /// For update events, the attribute values before the change.
    #[serde(default)]
    pub previous_attributes: Option<Value>,
}
