//! A Rust client for the Stripe Connect accounts API.
//!
//! This crate provides a typed binding for the accounts surface (accounts,
//! capabilities, external accounts, persons, and login links) on top of a
//! shared request/response pipeline: safe path construction, layered request
//! options, lazy pagination, and a closed error taxonomy.
//!
//! # Quick start
//!
//! ```rust,no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use stripe_api::{Client, RequestParams, SecretKey, StripeConfig};
//!
//! let config = StripeConfig::builder()
//!     .secret_key(SecretKey::new("sk_test_123")?)
//!     .build()?;
//! let client = Client::new(config)?;
//!
//! // Retrieve the account behind the credentials
//! let account = client.accounts().retrieve(None, None, None).await?;
//!
//! // Page through connected accounts
//! let mut accounts = client
//!     .accounts()
//!     .all(Some(RequestParams::new().with("limit", 10)), None)?;
//! while let Some(page) = accounts.next_page().await? {
//!     for account in page {
//!         println!("{}", account.id);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Errors
//!
//! Every fallible call returns [`StripeError`]; see
//! [`rest::errors`] for the full taxonomy and how HTTP statuses map onto it.
//! Errors that can precede a network call ([`StripeError::InvalidPath`],
//! [`StripeError::InvalidIdentifier`]) always do, so a misuse never costs a
//! request.
//!
//! # Per-call options
//!
//! Process-wide defaults live in [`StripeConfig`]. Anything that varies per
//! call, such as idempotency keys, a different key or version, extra headers,
//! or a tighter timeout, goes through [`RequestOptions`]:
//!
//! ```rust,no_run
//! # async fn demo(client: stripe_api::Client) -> Result<(), stripe_api::StripeError> {
//! use stripe_api::{RequestOptions, RequestParams};
//!
//! let account = client
//!     .accounts()
//!     .create(
//!         Some(RequestParams::new().with("type", "express")),
//!         Some(RequestOptions::new().with_idempotency_key("signup-7421")),
//!     )
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Webhooks
//!
//! [`webhooks::construct_event`] verifies a delivery's `Stripe-Signature`
//! header and decodes the payload into a [`webhooks::Event`].

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;
pub mod webhooks;

pub use clients::{ApiRequest, Client, HttpClient, HttpMethod, RawResponse, Transport, TransportError};
pub use config::{ApiBase, ApiVersion, SecretKey, StripeConfig};
pub use error::ConfigError;
pub use rest::resources::{Account, AccountService, Capability, ExternalAccount, LoginLink, Person};
pub use rest::{Collection, ErrorDetail, RequestOptions, RequestParams, StripeError};
