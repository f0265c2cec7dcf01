//! Operation metadata and URL path construction.
//!
//! Each API operation is described by a const [`Operation`] tuple (name,
//! verb, path template, identifier arity) and the resource services dispatch
//! those tuples through the shared pipeline. [`build_path`] renders a
//! template against its ordered identifier arguments, percent-encoding each
//! one so an identifier can never alter the route.
//!
//! # Path templates
//!
//! Templates use positional `{}` placeholders:
//!
//! - `/v1/accounts/{}` takes one identifier
//! - `/v1/accounts/{}/external_accounts/{}` takes the parent id, then the
//!   child id
//!
//! Placeholder count must equal the number of identifiers supplied at call
//! time; a mismatch is a programming error surfaced immediately as
//! [`StripeError::InvalidPath`], never a network-level failure.
//!
//! # Example
//!
//! ```rust
//! use stripe_api::rest::build_path;
//!
//! let path = build_path("/v1/accounts/{}/persons/{}", &["acct_1", "person_2"]).unwrap();
//! assert_eq!(path, "/v1/accounts/acct_1/persons/person_2");
//!
//! // Identifiers are percent-encoded for safe inclusion in a path segment
//! let path = build_path("/v1/accounts/{}", &["acct/../evil"]).unwrap();
//! assert_eq!(path, "/v1/accounts/acct%2F..%2Fevil");
//! ```

use crate::clients::HttpMethod;
use crate::rest::errors::StripeError;

/// The positional placeholder marker in path templates.
const PLACEHOLDER: &str = "{}";

/// Declarative metadata for one API operation.
///
/// A resource service is a table of these plus one-line dispatch methods;
/// no operation carries logic of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    /// The operation name (e.g., "retrieve", "all_persons").
    pub name: &'static str,
    /// The HTTP method for this operation.
    pub method: HttpMethod,
    /// The path template with positional `{}` placeholders.
    pub template: &'static str,
    /// The number of identifiers this operation takes (0..=2).
    pub arity: usize,
}

impl Operation {
    /// Creates a new operation descriptor.
    #[must_use]
    pub const fn new(
        name: &'static str,
        method: HttpMethod,
        template: &'static str,
        arity: usize,
    ) -> Self {
        Self {
            name,
            method,
            template,
            arity,
        }
    }

    /// Shorthand for a GET operation.
    #[must_use]
    pub const fn get(name: &'static str, template: &'static str, arity: usize) -> Self {
        Self::new(name, HttpMethod::Get, template, arity)
    }

    /// Shorthand for a POST operation.
    #[must_use]
    pub const fn post(name: &'static str, template: &'static str, arity: usize) -> Self {
        Self::new(name, HttpMethod::Post, template, arity)
    }

    /// Shorthand for a DELETE operation.
    #[must_use]
    pub const fn delete(name: &'static str, template: &'static str, arity: usize) -> Self {
        Self::new(name, HttpMethod::Delete, template, arity)
    }

    /// Returns the number of placeholders in the template.
    #[must_use]
    pub fn placeholder_count(&self) -> usize {
        self.template.matches(PLACEHOLDER).count()
    }
}

/// Renders a path template against ordered identifier arguments.
///
/// Each identifier is percent-encoded before interpolation so path-delimiter
/// characters (`/`, `?`, `#`) in identifier content cannot change the route.
/// This is a pure function; it performs no I/O.
///
/// # Errors
///
/// - [`StripeError::InvalidPath`] if the placeholder count does not match the
///   number of identifiers supplied.
/// - [`StripeError::InvalidIdentifier`] if any identifier is empty or reduces
///   to nothing after trimming.
pub fn build_path(template: &str, ids: &[&str]) -> Result<String, StripeError> {
    let expected = template.matches(PLACEHOLDER).count();
    if expected != ids.len() {
        return Err(StripeError::InvalidPath {
            template: template.to_string(),
            expected,
            supplied: ids.len(),
        });
    }

    for (position, id) in ids.iter().enumerate() {
        if id.trim().is_empty() {
            return Err(StripeError::InvalidIdentifier {
                template: template.to_string(),
                position,
            });
        }
    }

    let mut rendered = String::with_capacity(template.len());
    let mut segments = template.split(PLACEHOLDER);

    // split() yields arity + 1 literal segments around the placeholders
    if let Some(first) = segments.next() {
        rendered.push_str(first);
    }
    for (segment, id) in segments.zip(ids) {
        rendered.push_str(&urlencoding::encode(id));
        rendered.push_str(segment);
    }

    Ok(rendered)
}

// Verify Operation is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Operation>();
};
