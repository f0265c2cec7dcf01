//! Client-side plumbing: the API client, the transport boundary, and the raw
//! request/response types exchanged across it.

pub mod api_client;
pub mod http_client;
pub mod request;
pub mod response;
pub mod transport;

pub use api_client::Client;
pub use http_client::HttpClient;
pub use request::{ApiRequest, HttpMethod};
pub use response::RawResponse;
pub use transport::{Transport, TransportError};
