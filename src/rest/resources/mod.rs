//! Resource models and their generated service bindings.
//!
//! The models are deliberately permissive: every field the server may omit is
//! an `Option`, and unknown fields are ignored, so a newer API version cannot
//! break decoding.

mod account;
mod capability;
mod external_account;
mod login_link;
mod person;

pub use account::{Account, AccountService};
pub use capability::Capability;
pub use external_account::ExternalAccount;
pub use login_link::LoginLink;
pub use person::{Person, PersonRelationship};
