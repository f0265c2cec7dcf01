//! The capability resource.

use serde::{Deserialize, Serialize};

/// A capability on a connected account, such as card payments or transfers.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Capability {
    /// The capability identifier, e.g. `card_payments`.
    pub id: String,
    /// Always `"capability"`.
    pub object: String,
    /// The account this capability belongs to.
    #[serde(default)]
    pub account: Option<String>,
    /// Whether the capability has been requested.
    #[serde(default)]
    pub requested: Option<bool>,
    /// When the capability was requested, as a Unix timestamp.
    #[serde(default)]
    pub requested_at: Option<i64>,
    /// The capability status: `active`, `inactive`, `pending`, or
    /// `unrequested`.
    #[serde(default)]
    pub status: Option<String>,
}
