//! Response decoding.
//!
//! [`decode_response`] turns a raw transport response into one of three
//! outcomes: a single decoded object, a decoded list page, or a typed error.
//! Success and failure are decided by status code alone; the body shape then
//! decides single-object versus page. List pages arrive in Stripe's envelope:
//!
//! ```json
//! { "object": "list", "data": [...], "has_more": true, "url": "/v1/accounts" }
//! ```
//!
//! A 2xx body that fails to parse as JSON is a
//! [`StripeError::MalformedResponse`]; a non-2xx body that fails to parse
//! still produces a typed error from the status code, with empty detail.

use serde::Deserialize;
use serde_json::Value;

use crate::clients::RawResponse;
use crate::rest::errors::{parse_error_payload, translate_status, StripeError};

/// One page of a list response, decoded from the list envelope.
#[derive(Clone, Debug, Deserialize)]
pub struct Page {
    /// The items on this page, in server order.
    pub data: Vec<Value>,
    /// Whether more items exist beyond this page.
    pub has_more: bool,
    /// The list's own URL, as reported by the server.
    #[serde(default)]
    pub url: Option<String>,
}

impl Page {
    /// Returns the `id` of the last item on this page, the cursor for the
    /// next fetch.
    #[must_use]
    pub fn last_cursor(&self) -> Option<String> {
        self.data
            .last()
            .and_then(|item| item.get("id"))
            .and_then(Value::as_str)
            .map(ToString::to_string)
    }
}

/// A successfully decoded response body.
#[derive(Clone, Debug)]
pub enum DecodedResult {
    /// A single API object.
    Object(Value),
    /// One page of a list.
    Page(Page),
}

/// Returns `true` if the value carries the list envelope shape.
fn is_list_envelope(value: &Value) -> bool {
    value.get("object").and_then(Value::as_str) == Some("list")
        && value.get("data").is_some_and(Value::is_array)
        && value.get("has_more").is_some_and(Value::is_boolean)
}

/// Classifies a raw response into an object, a page, or a typed error.
///
/// # Errors
///
/// - A non-2xx status is translated through the status table, carrying
///   whatever error detail the body supplied.
/// - A 2xx body that is not valid JSON is [`StripeError::MalformedResponse`].
pub fn decode_response(response: &RawResponse) -> Result<DecodedResult, StripeError> {
    if !response.is_success() {
        let payload = parse_error_payload(&response.body);
        return Err(translate_status(
            response.status,
            payload,
            response.request_id(),
        ));
    }

    let value: Value = serde_json::from_str(&response.body).map_err(|e| {
        StripeError::MalformedResponse {
            status: response.status,
            reason: format!("response body is not valid JSON: {e}"),
        }
    })?;

    if is_list_envelope(&value) {
        let page: Page = serde_json::from_value(value).map_err(|e| {
            StripeError::MalformedResponse {
                status: response.status,
                reason: format!("list envelope did not decode: {e}"),
            }
        })?;
        return Ok(DecodedResult::Page(page));
    }

    Ok(DecodedResult::Object(value))
}
