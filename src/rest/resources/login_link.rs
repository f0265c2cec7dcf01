//! The login link resource.

use serde::{Deserialize, Serialize};

/// A single-use URL granting an Express account access to their dashboard.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct LoginLink {
    /// Always `"login_link"`.
    pub object: String,
    /// When the link was created, as a Unix timestamp.
    #[serde(default)]
    pub created: Option<i64>,
    /// The single-use login URL.
    pub url: String,
}
