//! Lazy, resumable iteration over list endpoints.
//!
//! A [`Collection`] is the handle returned by list operations. Constructing
//! one performs no network work; each [`next_page`](Collection::next_page)
//! call fetches exactly one page and advances the cursor. `has_more` from the
//! server is the sole exhaustion signal; an empty page with `has_more: true`
//! does not end iteration.
//!
//! A failed fetch leaves the collection's position unchanged, so the same
//! call can be retried without skipping or re-reading items.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::clients::{ApiRequest, HttpMethod, Transport};
use crate::rest::errors::StripeError;
use crate::rest::response::{decode_response, DecodedResult};
use crate::rest::{RequestOptions, RequestParams};

/// A pageable list of API objects.
///
/// Created by list operations on the resource services; generic over the
/// item type and the transport. Not `Clone`: each collection owns one
/// iteration position.
///
/// # Example
///
/// ```rust,no_run
/// # async fn demo(client: stripe_api::Client) -> Result<(), stripe_api::StripeError> {
/// use stripe_api::RequestParams;
///
/// let mut accounts = client
///     .accounts()
///     .all(Some(RequestParams::new().with("limit", 3)), None)?;
/// while let Some(page) = accounts.next_page().await? {
///     for account in page {
///         println!("{}", account.id);
///     }
/// }
/// # Ok(())
/// # }
/// ```
pub struct Collection<'a, C: Transport, T> {
    transport: &'a C,
    path: String,
    params: RequestParams,
    options: RequestOptions,
    next_cursor: Option<String>,
    exhausted: bool,
    _marker: std::marker::PhantomData<T>,
}

impl<'a, C: Transport, T: DeserializeOwned> Collection<'a, C, T> {
    /// Creates a collection positioned before the first page.
    ///
    /// No fetch happens here; the first [`next_page`](Self::next_page) call
    /// issues the first request.
    #[must_use]
    pub(crate) fn new(
        transport: &'a C,
        path: String,
        params: Option<RequestParams>,
        options: RequestOptions,
    ) -> Self {
        Self {
            transport,
            path,
            params: params.unwrap_or_default(),
            options,
            next_cursor: None,
            exhausted: false,
            _marker: std::marker::PhantomData,
        }
    }

    /// Returns `true` once the server has reported the final page.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Fetches the next page, or returns `None` if the collection is
    /// exhausted.
    ///
    /// Exactly one request is issued per call. On success the cursor advances
    /// to the last item of the page; on failure the position is unchanged and
    /// the call may be retried.
    ///
    /// # Errors
    ///
    /// Any error from the shared pipeline: [`StripeError::Connection`] when
    /// no response was obtained, a translated API error for non-2xx statuses,
    /// or [`StripeError::MalformedResponse`] when the page did not decode.
    pub async fn next_page(&mut self) -> Result<Option<Vec<T>>, StripeError> {
        if self.exhausted {
            return Ok(None);
        }

        let mut params = self.params.clone();
        if let Some(cursor) = &self.next_cursor {
            params.insert("starting_after", cursor.as_str());
        }

        let request = ApiRequest::new(
            HttpMethod::Get,
            self.path.clone(),
            Some(params),
            self.options.clone(),
        );

        let response = self.transport.send(request).await?;
        let page = match decode_response(&response)? {
            DecodedResult::Page(page) => page,
            DecodedResult::Object(_) => {
                return Err(StripeError::MalformedResponse {
                    status: response.status,
                    reason: "expected a list envelope, got a single object".to_string(),
                })
            }
        };

        debug!(
            path = %self.path,
            items = page.data.len(),
            has_more = page.has_more,
            "fetched list page"
        );

        let cursor = page.last_cursor();
        let has_more = page.has_more;
        let items = page
            .data
            .into_iter()
            .map(|item| {
                serde_json::from_value::<T>(item).map_err(|e| StripeError::MalformedResponse {
                    status: response.status,
                    reason: format!("list item did not decode: {e}"),
                })
            })
            .collect::<Result<Vec<T>, StripeError>>()?;

        // State only advances once the whole page decoded; any failure above
        // leaves the position where it was, so the same fetch can be retried.
        if let Some(cursor) = cursor {
            self.next_cursor = Some(cursor);
        }
        self.exhausted = !has_more;

        Ok(Some(items))
    }

    /// Drains the collection, fetching pages until exhaustion.
    ///
    /// Convenience over [`next_page`](Self::next_page); unbounded lists can
    /// make this expensive, so prefer page-at-a-time iteration when the total
    /// size is unknown.
    ///
    /// # Errors
    ///
    /// Stops at the first failing fetch and returns its error; pages already
    /// fetched are discarded.
    pub async fn collect_all(&mut self) -> Result<Vec<T>, StripeError> {
        let mut all = Vec::new();
        while let Some(page) = self.next_page().await? {
            all.extend(page);
        }
        Ok(all)
    }
}
