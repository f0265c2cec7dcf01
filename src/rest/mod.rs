//! The resource-oriented request pipeline.
//!
//! Every API call flows through the same stages, in order:
//!
//! 1. [`build_path`] renders the operation's path template against its
//!    identifiers, percent-encoding each one.
//! 2. [`RequestOptions::merge`] layers per-call overrides on the client's
//!    defaults.
//! 3. The transport performs the exchange.
//! 4. [`decode_response`](response::decode_response) classifies the outcome
//!    into an object, a list page, or a typed [`StripeError`].
//!
//! List operations return a [`Collection`] instead of a page, deferring all
//! fetching to iteration time.

pub mod collection;
pub mod errors;
pub mod options;
pub mod params;
pub mod path;
pub mod resources;
pub mod response;

pub use collection::Collection;
pub use errors::{ErrorDetail, StripeError};
pub use options::RequestOptions;
pub use params::RequestParams;
pub use path::{build_path, Operation};
pub use response::{DecodedResult, Page};
