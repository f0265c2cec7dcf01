//! The account resource and its service.
//!
//! [`AccountService`] is the generated binding for the accounts surface:
//! accounts themselves plus their capabilities, external accounts, persons,
//! and login links. Every method is declarative: an [`Operation`] tuple
//! dispatched through the client's shared pipeline, with no logic of its own.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::clients::{Client, HttpClient, Transport};
use crate::rest::resources::{Capability, ExternalAccount, LoginLink, Person};
use crate::rest::{Collection, Operation, RequestOptions, RequestParams, StripeError};

/// A connected account.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Account {
    /// The account identifier, e.g. `acct_...`.
    pub id: String,
    /// Always `"account"`.
    pub object: String,
    /// The business type: `individual`, `company`, `non_profit`, or
    /// `government_entity`.
    #[serde(default)]
    pub business_type: Option<String>,
    /// Whether the account can process charges.
    #[serde(default)]
    pub charges_enabled: Option<bool>,
    /// Two-letter country code.
    #[serde(default)]
    pub country: Option<String>,
    /// When the account was created, as a Unix timestamp.
    #[serde(default)]
    pub created: Option<i64>,
    /// The account's default currency.
    #[serde(default)]
    pub default_currency: Option<String>,
    /// Whether onboarding details have been submitted.
    #[serde(default)]
    pub details_submitted: Option<bool>,
    /// The account's email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Arbitrary key-value metadata attached to the account.
    #[serde(default)]
    pub metadata: Option<HashMap<String, String>>,
    /// Whether the account can receive payouts.
    #[serde(default)]
    pub payouts_enabled: Option<bool>,
    /// The account type: `standard`, `express`, or `custom`.
    #[serde(rename = "type", default)]
    pub account_type: Option<String>,
    /// Set when the object was deleted.
    #[serde(default)]
    pub deleted: Option<bool>,
}

const ALL: Operation = Operation::get("all", "/v1/accounts", 0);
const ALL_CAPABILITIES: Operation =
    Operation::get("all_capabilities", "/v1/accounts/{}/capabilities", 1);
const ALL_EXTERNAL_ACCOUNTS: Operation =
    Operation::get("all_external_accounts", "/v1/accounts/{}/external_accounts", 1);
const ALL_PERSONS: Operation = Operation::get("all_persons", "/v1/accounts/{}/persons", 1);
const CREATE: Operation = Operation::post("create", "/v1/accounts", 0);
const CREATE_EXTERNAL_ACCOUNT: Operation = Operation::post(
    "create_external_account",
    "/v1/accounts/{}/external_accounts",
    1,
);
const CREATE_LOGIN_LINK: Operation =
    Operation::post("create_login_link", "/v1/accounts/{}/login_links", 1);
const CREATE_PERSON: Operation = Operation::post("create_person", "/v1/accounts/{}/persons", 1);
const DELETE: Operation = Operation::delete("delete", "/v1/accounts/{}", 1);
const DELETE_EXTERNAL_ACCOUNT: Operation = Operation::delete(
    "delete_external_account",
    "/v1/accounts/{}/external_accounts/{}",
    2,
);
const DELETE_PERSON: Operation =
    Operation::delete("delete_person", "/v1/accounts/{}/persons/{}", 2);
const REJECT: Operation = Operation::post("reject", "/v1/accounts/{}/reject", 1);
// retrieve is dual-mode: no id means "the account behind the credentials"
const RETRIEVE_CURRENT: Operation = Operation::get("retrieve", "/v1/account", 0);
const RETRIEVE: Operation = Operation::get("retrieve", "/v1/accounts/{}", 1);
const RETRIEVE_CAPABILITY: Operation =
    Operation::get("retrieve_capability", "/v1/accounts/{}/capabilities/{}", 2);
const RETRIEVE_EXTERNAL_ACCOUNT: Operation = Operation::get(
    "retrieve_external_account",
    "/v1/accounts/{}/external_accounts/{}",
    2,
);
const RETRIEVE_PERSON: Operation =
    Operation::get("retrieve_person", "/v1/accounts/{}/persons/{}", 2);
const UPDATE: Operation = Operation::post("update", "/v1/accounts/{}", 1);
const UPDATE_CAPABILITY: Operation =
    Operation::post("update_capability", "/v1/accounts/{}/capabilities/{}", 2);
const UPDATE_EXTERNAL_ACCOUNT: Operation = Operation::post(
    "update_external_account",
    "/v1/accounts/{}/external_accounts/{}",
    2,
);
const UPDATE_PERSON: Operation =
    Operation::post("update_person", "/v1/accounts/{}/persons/{}", 2);

/// Service for the accounts API surface.
///
/// Obtained from [`Client::accounts`]; borrows the client for its lifetime.
/// List operations return a lazy [`Collection`]; all other operations return
/// the decoded resource.
///
/// # Example
///
/// ```rust,no_run
/// # async fn demo(client: stripe_api::Client) -> Result<(), stripe_api::StripeError> {
/// use stripe_api::RequestParams;
///
/// let account = client
///     .accounts()
///     .create(
///         Some(RequestParams::new().with("type", "custom").with("country", "US")),
///         None,
///     )
///     .await?;
///
/// let link = client.accounts().create_login_link(&account.id, None, None).await?;
/// println!("{}", link.url);
/// # Ok(())
/// # }
/// ```
pub struct AccountService<'a, C: Transport = HttpClient> {
    client: &'a Client<C>,
}

impl<'a, C: Transport> AccountService<'a, C> {
    /// Creates the service over a borrowed client.
    #[must_use]
    pub const fn new(client: &'a Client<C>) -> Self {
        Self { client }
    }

    /// Lists accounts.
    ///
    /// # Errors
    ///
    /// Construction is lazy and cannot fail for this operation's template;
    /// fetch errors surface from [`Collection::next_page`].
    pub fn all(
        &self,
        params: Option<RequestParams>,
        options: Option<RequestOptions>,
    ) -> Result<Collection<'a, C, Account>, StripeError> {
        self.client.list(&ALL, &[], params, options)
    }

    /// Lists the capabilities of an account.
    ///
    /// # Errors
    ///
    /// [`StripeError::InvalidIdentifier`] for an empty id; fetch errors
    /// surface from [`Collection::next_page`].
    pub fn all_capabilities(
        &self,
        account_id: &str,
        params: Option<RequestParams>,
        options: Option<RequestOptions>,
    ) -> Result<Collection<'a, C, Capability>, StripeError> {
        self.client.list(&ALL_CAPABILITIES, &[account_id], params, options)
    }

    /// Lists the external accounts of an account.
    ///
    /// # Errors
    ///
    /// [`StripeError::InvalidIdentifier`] for an empty id; fetch errors
    /// surface from [`Collection::next_page`].
    pub fn all_external_accounts(
        &self,
        account_id: &str,
        params: Option<RequestParams>,
        options: Option<RequestOptions>,
    ) -> Result<Collection<'a, C, ExternalAccount>, StripeError> {
        self.client
            .list(&ALL_EXTERNAL_ACCOUNTS, &[account_id], params, options)
    }

    /// Lists the persons associated with an account.
    ///
    /// # Errors
    ///
    /// [`StripeError::InvalidIdentifier`] for an empty id; fetch errors
    /// surface from [`Collection::next_page`].
    pub fn all_persons(
        &self,
        account_id: &str,
        params: Option<RequestParams>,
        options: Option<RequestOptions>,
    ) -> Result<Collection<'a, C, Person>, StripeError> {
        self.client.list(&ALL_PERSONS, &[account_id], params, options)
    }

    /// Creates an account.
    ///
    /// # Errors
    ///
    /// Any [`StripeError`] from the pipeline.
    pub async fn create(
        &self,
        params: Option<RequestParams>,
        options: Option<RequestOptions>,
    ) -> Result<Account, StripeError> {
        self.client.execute_object(&CREATE, &[], params, options).await
    }

    /// Attaches an external account to an account.
    ///
    /// # Errors
    ///
    /// Any [`StripeError`] from the pipeline.
    pub async fn create_external_account(
        &self,
        account_id: &str,
        params: Option<RequestParams>,
        options: Option<RequestOptions>,
    ) -> Result<ExternalAccount, StripeError> {
        self.client
            .execute_object(&CREATE_EXTERNAL_ACCOUNT, &[account_id], params, options)
            .await
    }

    /// Creates a single-use login link for an Express account.
    ///
    /// # Errors
    ///
    /// Any [`StripeError`] from the pipeline.
    pub async fn create_login_link(
        &self,
        account_id: &str,
        params: Option<RequestParams>,
        options: Option<RequestOptions>,
    ) -> Result<LoginLink, StripeError> {
        self.client
            .execute_object(&CREATE_LOGIN_LINK, &[account_id], params, options)
            .await
    }

    /// Creates a person associated with an account.
    ///
    /// # Errors
    ///
    /// Any [`StripeError`] from the pipeline.
    pub async fn create_person(
        &self,
        account_id: &str,
        params: Option<RequestParams>,
        options: Option<RequestOptions>,
    ) -> Result<Person, StripeError> {
        self.client
            .execute_object(&CREATE_PERSON, &[account_id], params, options)
            .await
    }

    /// Deletes an account.
    ///
    /// # Errors
    ///
    /// Any [`StripeError`] from the pipeline.
    pub async fn delete(
        &self,
        account_id: &str,
        params: Option<RequestParams>,
        options: Option<RequestOptions>,
    ) -> Result<Account, StripeError> {
        self.client
            .execute_object(&DELETE, &[account_id], params, options)
            .await
    }

    /// Detaches an external account from an account.
    ///
    /// # Errors
    ///
    /// Any [`StripeError`] from the pipeline.
    pub async fn delete_external_account(
        &self,
        account_id: &str,
        external_account_id: &str,
        params: Option<RequestParams>,
        options: Option<RequestOptions>,
    ) -> Result<ExternalAccount, StripeError> {
        self.client
            .execute_object(
                &DELETE_EXTERNAL_ACCOUNT,
                &[account_id, external_account_id],
                params,
                options,
            )
            .await
    }

    /// Deletes a person associated with an account.
    ///
    /// # Errors
    ///
    /// Any [`StripeError`] from the pipeline.
    pub async fn delete_person(
        &self,
        account_id: &str,
        person_id: &str,
        params: Option<RequestParams>,
        options: Option<RequestOptions>,
    ) -> Result<Person, StripeError> {
        self.client
            .execute_object(&DELETE_PERSON, &[account_id, person_id], params, options)
            .await
    }

    /// Rejects an account, flagging it as suspicious or fraudulent.
    ///
    /// # Errors
    ///
    /// Any [`StripeError`] from the pipeline.
    pub async fn reject(
        &self,
        account_id: &str,
        params: Option<RequestParams>,
        options: Option<RequestOptions>,
    ) -> Result<Account, StripeError> {
        self.client
            .execute_object(&REJECT, &[account_id], params, options)
            .await
    }

    /// Retrieves an account.
    ///
    /// With `None`, retrieves the account the credentials belong to
    /// (`GET /v1/account`); with an id, retrieves that account.
    ///
    /// # Errors
    ///
    /// Any [`StripeError`] from the pipeline.
    pub async fn retrieve(
        &self,
        account_id: Option<&str>,
        params: Option<RequestParams>,
        options: Option<RequestOptions>,
    ) -> Result<Account, StripeError> {
        match account_id {
            Some(id) => {
                self.client
                    .execute_object(&RETRIEVE, &[id], params, options)
                    .await
            }
            None => {
                self.client
                    .execute_object(&RETRIEVE_CURRENT, &[], params, options)
                    .await
            }
        }
    }

    /// Retrieves one capability of an account.
    ///
    /// # Errors
    ///
    /// Any [`StripeError`] from the pipeline.
    pub async fn retrieve_capability(
        &self,
        account_id: &str,
        capability_id: &str,
        params: Option<RequestParams>,
        options: Option<RequestOptions>,
    ) -> Result<Capability, StripeError> {
        self.client
            .execute_object(
                &RETRIEVE_CAPABILITY,
                &[account_id, capability_id],
                params,
                options,
            )
            .await
    }

    /// Retrieves one external account of an account.
    ///
    /// # Errors
    ///
    /// Any [`StripeError`] from the pipeline.
    pub async fn retrieve_external_account(
        &self,
        account_id: &str,
        external_account_id: &str,
        params: Option<RequestParams>,
        options: Option<RequestOptions>,
    ) -> Result<ExternalAccount, StripeError> {
        self.client
            .execute_object(
                &RETRIEVE_EXTERNAL_ACCOUNT,
                &[account_id, external_account_id],
                params,
                options,
            )
            .await
    }

    /// Retrieves one person associated with an account.
    ///
    /// # Errors
    ///
    /// Any [`StripeError`] from the pipeline.
    pub async fn retrieve_person(
        &self,
        account_id: &str,
        person_id: &str,
        params: Option<RequestParams>,
        options: Option<RequestOptions>,
    ) -> Result<Person, StripeError> {
        self.client
            .execute_object(&RETRIEVE_PERSON, &[account_id, person_id], params, options)
            .await
    }

    /// Updates an account.
    ///
    /// # Errors
    ///
    /// Any [`StripeError`] from the pipeline.
    pub async fn update(
        &self,
        account_id: &str,
        params: Option<RequestParams>,
        options: Option<RequestOptions>,
    ) -> Result<Account, StripeError> {
        self.client
            .execute_object(&UPDATE, &[account_id], params, options)
            .await
    }

    /// Updates a capability of an account.
    ///
    /// # Errors
    ///
    /// Any [`StripeError`] from the pipeline.
    pub async fn update_capability(
        &self,
        account_id: &str,
        capability_id: &str,
        params: Option<RequestParams>,
        options: Option<RequestOptions>,
    ) -> Result<Capability, StripeError> {
        self.client
            .execute_object(
                &UPDATE_CAPABILITY,
                &[account_id, capability_id],
                params,
                options,
            )
            .await
    }

    /// Updates an external account's metadata.
    ///
    /// # Errors
    ///
    /// Any [`StripeError`] from the pipeline.
    pub async fn update_external_account(
        &self,
        account_id: &str,
        external_account_id: &str,
        params: Option<RequestParams>,
        options: Option<RequestOptions>,
    ) -> Result<ExternalAccount, StripeError> {
        self.client
            .execute_object(
                &UPDATE_EXTERNAL_ACCOUNT,
                &[account_id, external_account_id],
                params,
                options,
            )
            .await
    }

    /// Updates a person associated with an account.
    ///
    /// # Errors
    ///
    /// Any [`StripeError`] from the pipeline.
    pub async fn update_person(
        &self,
        account_id: &str,
        person_id: &str,
        params: Option<RequestParams>,
        options: Option<RequestOptions>,
    ) -> Result<Person, StripeError> {
        self.client
            .execute_object(&UPDATE_PERSON, &[account_id, person_id], params, options)
            .await
    }
}
