/*
[INPUT]:  Endpoint path, HTTP verb, auth requirement, query params, JSON payload
[OUTPUT]: RequestDescriptor consumed once by FtxClient::build_request
[POS]:    HTTP layer - logical description of one REST call
[UPDATE]: When endpoints need new verbs or body encodings
*/

use reqwest::Method;
use serde::Serialize;
use url::form_urlencoded;

use crate::http::query::{QueryParams, to_query_string};
use crate::http::{FtxError, Result};

/// One logical REST call, before URL resolution and signing
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    method: Method,
    path: String,
    requires_auth: bool,
    query: Vec<(String, String)>,
    body: Option<Vec<u8>>,
}

impl RequestDescriptor {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            requires_auth: false,
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Mark the call as private; FtxClient attaches the FTX-* headers
    pub fn authenticated(mut self) -> Self {
        self.requires_auth = true;
        self
    }

    /// Append every present field of a parameter record
    pub fn with_query<P: QueryParams + ?Sized>(mut self, params: &P) -> Result<Self> {
        self.query.extend(params.to_query_pairs()?);
        Ok(self)
    }

    /// Append a single query pair
    pub fn with_query_pair(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Serialize the payload once; these bytes are both signed and sent
    pub fn with_json_body<B: Serialize + ?Sized>(mut self, payload: &B) -> Result<Self> {
        let body = serde_json::to_vec(payload).map_err(|e| FtxError::Encoding(e.to_string()))?;
        self.body = Some(body);
        Ok(self)
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn requires_auth(&self) -> bool {
        self.requires_auth
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// Path plus encoded query string, e.g. `/orders?market=BTC-PERP`
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, to_query_string(&self.query))
        }
    }

    pub(crate) fn into_body(self) -> Option<Vec<u8>> {
        self.body
    }
}

/// Percent-encode a value with spaces as `%20`, never `+`
pub fn percent_encode(raw: &str) -> String {
    // byte_serialize escapes a literal '+' as %2B, so any '+' left is a space
    form_urlencoded::byte_serialize(raw.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Percent-encode one path segment, e.g. a sub-account nickname
///
/// Empty, `.` and `..` are refused: URL parsing folds them into the
/// surrounding path and the request would reach another endpoint.
pub fn encode_path_segment(raw: &str) -> Result<String> {
    if matches!(raw, "" | "." | "..") {
        return Err(FtxError::Validation(format!(
            "{raw:?} is not a valid path segment"
        )));
    }
    Ok(percent_encode(raw))
}
