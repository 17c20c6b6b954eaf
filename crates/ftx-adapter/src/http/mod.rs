/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod envelope;
pub mod error;
pub mod query;
pub mod request;
pub mod signature;

pub mod account;
pub mod converts;
pub mod fills;
pub mod futures;
pub mod orders;
pub mod spot_margin;
pub mod subaccounts;

pub use error::{FtxError, Result};
pub use query::QueryParams;
pub use request::RequestDescriptor;
pub use signature::RequestSigner;

pub use client::{ClientConfig, Credentials, FtxClient};
