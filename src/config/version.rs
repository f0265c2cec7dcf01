//! Stripe API version definitions.
//!
//! Stripe versions its API with release dates (e.g., `2024-06-20`). A request
//! pinned to a version via the `Stripe-Version` header is served with that
//! version's response shapes regardless of the account default.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// A Stripe API version in `YYYY-MM-DD` form.
///
/// # Example
///
/// ```rust
/// use stripe_api::ApiVersion;
///
/// let version = ApiVersion::latest();
/// assert_eq!(version.as_ref(), "2024-06-20");
///
/// let pinned: ApiVersion = "2023-10-16".parse().unwrap();
/// assert_eq!(format!("{pinned}"), "2023-10-16");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiVersion(String);

impl ApiVersion {
    /// The most recent version this crate is developed against.
    const LATEST: &'static str = "2024-06-20";

    /// Returns the latest API version known to this crate.
    #[must_use]
    pub fn latest() -> Self {
        Self(Self::LATEST.to_string())
    }

    /// Creates a validated API version from a date string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiVersion`] if the string is not in
    /// `YYYY-MM-DD` form.
    pub fn new(version: impl Into<String>) -> Result<Self, ConfigError> {
        let version = version.into();
        if Self::is_valid(&version) {
            Ok(Self(version))
        } else {
            Err(ConfigError::InvalidApiVersion { version })
        }
    }

    /// Checks the `YYYY-MM-DD` shape without interpreting the calendar date.
    fn is_valid(version: &str) -> bool {
        let bytes = version.as_bytes();
        if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return false;
        }
        version
            .split('-')
            .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()))
    }
}

impl AsRef<str> for ApiVersion {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_is_well_formed() {
        let version = ApiVersion::latest();
        assert!(ApiVersion::new(version.as_ref()).is_ok());
    }

    #[test]
    fn test_valid_date_versions_parse() {
        for v in ["2022-11-15", "2023-10-16", "2024-06-20"] {
            let version: ApiVersion = v.parse().unwrap();
            assert_eq!(version.as_ref(), v);
        }
    }

    #[test]
    fn test_invalid_versions_rejected() {
        for v in ["", "2024", "2024-06", "2024/06/20", "v2024-06-20", "2024-6-20x"] {
            assert!(
                matches!(ApiVersion::new(v), Err(ConfigError::InvalidApiVersion { .. })),
                "expected rejection for {v:?}"
            );
        }
    }

    #[test]
    fn test_display_round_trips() {
        let version = ApiVersion::new("2023-08-16").unwrap();
        assert_eq!(version.to_string(), "2023-08-16");
    }
}
