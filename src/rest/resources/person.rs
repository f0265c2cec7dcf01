//! The person resource.

use serde::{Deserialize, Serialize};

/// A person associated with a connected account, such as an owner or
/// representative.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Person {
    /// The person identifier, e.g. `person_...`.
    pub id: String,
    /// Always `"person"`.
    pub object: String,
    /// The account this person is associated with.
    #[serde(default)]
    pub account: Option<String>,
    /// When the person was created, as a Unix timestamp.
    #[serde(default)]
    pub created: Option<i64>,
    /// The person's email address.
    #[serde(default)]
    pub email: Option<String>,
    /// The person's first name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// The person's last name.
    #[serde(default)]
    pub last_name: Option<String>,
    /// The person's relationship to the account.
    #[serde(default)]
    pub relationship: Option<PersonRelationship>,
    /// Set when the object was deleted.
    #[serde(default)]
    pub deleted: Option<bool>,
}

/// How a person relates to the account they are associated with.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct PersonRelationship {
    /// Whether the person is a director of the account's legal entity.
    #[serde(default)]
    pub director: Option<bool>,
    /// Whether the person is an executive of the account's legal entity.
    #[serde(default)]
    pub executive: Option<bool>,
    /// Whether the person is an owner of the account's legal entity.
    #[serde(default)]
    pub owner: Option<bool>,
    /// The percent of the legal entity the person owns.
    #[serde(default)]
    pub percent_ownership: Option<f64>,
    /// Whether the person is the account representative.
    #[serde(default)]
    pub representative: Option<bool>,
    /// The person's job title.
    #[serde(default)]
    pub title: Option<String>,
}
