//! The external account resource.

use serde::{Deserialize, Serialize};

/// A bank account or card attached to a connected account for payouts.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ExternalAccount {
    /// The external account identifier, e.g. `ba_...` or `card_...`.
    pub id: String,
    /// `"bank_account"` or `"card"`.
    pub object: String,
    /// The account this external account belongs to.
    #[serde(default)]
    pub account: Option<String>,
    /// Two-letter country code.
    #[serde(default)]
    pub country: Option<String>,
    /// Three-letter currency code.
    #[serde(default)]
    pub currency: Option<String>,
    /// Whether this is the default external account for its currency.
    #[serde(default)]
    pub default_for_currency: Option<bool>,
    /// Last four digits of the account or card number.
    #[serde(default)]
    pub last4: Option<String>,
    /// Status of the external account, e.g. `new` or `verified`.
    #[serde(default)]
    pub status: Option<String>,
    /// Set when the object was deleted.
    #[serde(default)]
    pub deleted: Option<bool>,
}
