/*
[INPUT]:  HTTP configuration (base URL, timeouts), API credentials, request descriptors
[OUTPUT]: Signed reqwest requests and unwrapped, typed API results
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Request, Url};
use serde::de::DeserializeOwned;
use serde_json::value::RawValue;
use tracing::{debug, warn};

use crate::http::envelope::Envelope;
use crate::http::request::{RequestDescriptor, percent_encode};
use crate::http::signature::RequestSigner;
use crate::http::{FtxError, Result};

/// Base URL for the FTX REST API
pub const DEFAULT_BASE_URL: &str = "https://ftx.com/api";

/// Auth header names (FTX-KEY, FTX-SIGN, FTX-TS, FTX-SUBACCOUNT), lowercase as sent
pub const HEADER_KEY: &str = "ftx-key";
pub const HEADER_SIGN: &str = "ftx-sign";
pub const HEADER_TS: &str = "ftx-ts";
pub const HEADER_SUBACCOUNT: &str = "ftx-subaccount";

const ENV_API_KEY: &str = "FTX_API_KEY";
const ENV_API_SECRET: &str = "FTX_API_SECRET";
const ENV_SUBACCOUNT: &str = "FTX_SUBACCOUNT";

/// HTTP client configuration
///
/// Timeouts are off unless set; callers own deadline policy.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            connect_timeout: None,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Point the client at another host, e.g. a mock server
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Credentials for authenticated requests
#[derive(Clone)]
pub struct Credentials {
    pub api_key: String,
    pub subaccount: Option<String>,
    signer: RequestSigner,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("subaccount", &self.subaccount)
            .finish()
    }
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl AsRef<[u8]>) -> Self {
        Self {
            api_key: api_key.into(),
            subaccount: None,
            signer: RequestSigner::new(api_secret),
        }
    }

    /// Act on behalf of a sub-account (sent as FTX-SUBACCOUNT)
    pub fn with_subaccount(mut self, subaccount: impl Into<String>) -> Self {
        self.subaccount = Some(subaccount.into());
        self
    }

    /// Read `FTX_API_KEY`, `FTX_API_SECRET` and optional `FTX_SUBACCOUNT`
    pub fn from_env() -> Result<Self> {
        let api_key = read_env(ENV_API_KEY)?;
        let api_secret = read_env(ENV_API_SECRET)?;
        let credentials = Self::new(api_key, api_secret);
        Ok(match std::env::var(ENV_SUBACCOUNT) {
            Ok(name) if !name.is_empty() => credentials.with_subaccount(name),
            _ => credentials,
        })
    }

    pub fn signer(&self) -> &RequestSigner {
        &self.signer
    }
}

fn read_env(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(FtxError::Configuration(format!(
            "environment variable {name} is not set"
        ))),
    }
}

/// Main HTTP client for the FTX REST API
///
/// Cheap to clone and safe to share between tasks; every call signs and
/// sends its own request.
#[derive(Debug, Clone)]
pub struct FtxClient {
    http_client: Client,
    base_url: Url,
    credentials: Option<Arc<Credentials>>,
}

impl FtxClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }
        let http_client = builder
            .build()
            .map_err(|e| FtxError::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            base_url: Url::parse(&config.base_url)?,
            credentials: None,
        })
    }

    /// Create an authenticated client
    pub fn with_credentials(config: ClientConfig, credentials: Credentials) -> Result<Self> {
        let mut client = Self::with_config(config)?;
        client.set_credentials(credentials);
        Ok(client)
    }

    /// Set credentials for authenticated requests
    pub fn set_credentials(&mut self, credentials: Credentials) {
        self.credentials = Some(Arc::new(credentials));
    }

    /// Get credentials if set
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_deref()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve `base_url + path[?query]`, keeping any path prefix of the base
    fn resolve_url(&self, descriptor: &RequestDescriptor) -> Result<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}{}", descriptor.path_and_query()))?)
    }

    /// Build a ready-to-send request, signed with the current wall clock
    pub fn build_request(&self, descriptor: RequestDescriptor) -> Result<Request> {
        self.build_request_at(descriptor, Utc::now().timestamp_millis())
    }

    /// Build a request signed with an explicit millisecond timestamp
    pub fn build_request_at(
        &self,
        descriptor: RequestDescriptor,
        timestamp_millis: i64,
    ) -> Result<Request> {
        let url = self.resolve_url(&descriptor)?;
        let mut headers = HeaderMap::new();

        if descriptor.requires_auth() {
            let credentials = self
                .credentials
                .as_deref()
                .ok_or_else(|| FtxError::missing_credentials(url.path()))?;

            // Signed path is exactly what goes on the wire, never scheme/host
            let request_path = match url.query() {
                Some(query) => format!("{}?{query}", url.path()),
                None => url.path().to_string(),
            };
            let timestamp = timestamp_millis.to_string();
            let signature = credentials.signer.sign(
                &timestamp,
                descriptor.method(),
                &request_path,
                descriptor.body(),
            );

            headers.insert(HEADER_KEY, header_value(HEADER_KEY, &credentials.api_key)?);
            headers.insert(HEADER_SIGN, header_value(HEADER_SIGN, &signature)?);
            headers.insert(HEADER_TS, header_value(HEADER_TS, &timestamp)?);
            if let Some(subaccount) = &credentials.subaccount {
                let encoded = percent_encode(subaccount);
                headers.insert(HEADER_SUBACCOUNT, header_value(HEADER_SUBACCOUNT, &encoded)?);
            }
        }

        let method = descriptor.method().clone();
        if descriptor.body().is_some() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        let mut builder = self.http_client.request(method, url).headers(headers);
        if let Some(body) = descriptor.into_body() {
            builder = builder.body(body);
        }
        builder
            .build()
            .map_err(|e| FtxError::Configuration(format!("failed to build request: {e}")))
    }

    /// Send a built request and unwrap the response envelope
    ///
    /// Returns the raw `result` JSON; status is checked before the envelope.
    pub async fn send(&self, request: Request) -> Result<Box<RawValue>> {
        let method = request.method().clone();
        let path = request.url().path().to_string();
        let authenticated = request.headers().contains_key(HEADER_SIGN);
        debug!(%method, %path, authenticated, "sending request");

        let response = self.http_client.execute(request).await?;
        let status = response.status();
        let body = response.bytes().await?;
        debug!(%method, %path, status = status.as_u16(), "received response");

        if !status.is_success() {
            let body = String::from_utf8_lossy(&body).into_owned();
            warn!(%method, %path, status = status.as_u16(), "request failed with HTTP status");
            return Err(FtxError::Protocol {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: Envelope = serde_json::from_slice(&body).map_err(FtxError::Decoding)?;
        envelope.into_result().map_err(|message| {
            warn!(%method, %path, error = %message, "exchange rejected request");
            FtxError::Api { message }
        })
    }

    /// Build, send and decode the result into `T`
    pub async fn execute<T: DeserializeOwned>(&self, descriptor: RequestDescriptor) -> Result<T> {
        let request = self.build_request(descriptor)?;
        let raw = self.send(request).await?;
        serde_json::from_str(raw.get()).map_err(FtxError::Decoding)
    }

    /// Build and send, discarding whatever `result` holds
    pub async fn execute_unit(&self, descriptor: RequestDescriptor) -> Result<()> {
        let request = self.build_request(descriptor)?;
        self.send(request).await.map(|_| ())
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|_| FtxError::Configuration(format!("{name} contains invalid header characters")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;
    use serde_json::json;

    const TS: i64 = 1_588_591_511_721;

    fn client_with(credentials: Option<Credentials>) -> FtxClient {
        let mut client = FtxClient::new().expect("client init");
        if let Some(credentials) = credentials {
            client.set_credentials(credentials);
        }
        client
    }

    fn header<'a>(request: &'a Request, name: &str) -> Option<&'a str> {
        request.headers().get(name).and_then(|v| v.to_str().ok())
    }

    #[test]
    fn test_public_request_has_no_auth_headers() {
        let client = client_with(Some(Credentials::new("key", "secret")));
        let request = client
            .build_request_at(RequestDescriptor::get("/futures"), TS)
            .unwrap();

        assert_eq!(request.method(), Method::GET);
        assert_eq!(request.url().as_str(), "https://ftx.com/api/futures");
        assert!(header(&request, HEADER_KEY).is_none());
        assert!(header(&request, HEADER_SIGN).is_none());
        assert!(header(&request, HEADER_TS).is_none());
    }

    #[test]
    fn test_auth_request_without_credentials_fails() {
        let client = client_with(None);
        let err = client
            .build_request_at(RequestDescriptor::get("/account").authenticated(), TS)
            .unwrap_err();
        assert!(matches!(err, FtxError::Configuration(_)));
    }

    #[test]
    fn test_signed_get_uses_full_path_and_query() {
        let credentials = Credentials::new("key", "secret");
        let expected = credentials.signer().sign(
            &TS.to_string(),
            &Method::GET,
            "/api/orders?market=BTC-PERP",
            None,
        );
        let client = client_with(Some(credentials));

        let request = client
            .build_request_at(
                RequestDescriptor::get("/orders")
                    .authenticated()
                    .with_query_pair("market", "BTC-PERP"),
                TS,
            )
            .unwrap();

        assert_eq!(
            request.url().as_str(),
            "https://ftx.com/api/orders?market=BTC-PERP"
        );
        assert_eq!(header(&request, HEADER_KEY), Some("key"));
        assert_eq!(header(&request, HEADER_TS), Some("1588591511721"));
        assert_eq!(header(&request, HEADER_SIGN), Some(expected.as_str()));
        assert!(header(&request, HEADER_SUBACCOUNT).is_none());
    }

    #[test]
    fn test_signed_post_signs_exact_body() {
        let credentials = Credentials::new("key", "secret");
        let descriptor = RequestDescriptor::post("/account/leverage")
            .authenticated()
            .with_json_body(&json!({ "leverage": 5 }))
            .unwrap();
        let body = descriptor.body().unwrap().to_vec();
        let expected = credentials.signer().sign(
            &TS.to_string(),
            &Method::POST,
            "/api/account/leverage",
            Some(&body),
        );
        let client = client_with(Some(credentials));

        let request = client.build_request_at(descriptor, TS).unwrap();

        assert_eq!(header(&request, HEADER_SIGN), Some(expected.as_str()));
        assert_eq!(header(&request, "content-type"), Some("application/json"));
        let sent = request.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(sent, body.as_slice());
    }

    #[test]
    fn test_subaccount_header_is_url_encoded() {
        let client = client_with(Some(
            Credentials::new("key", "secret").with_subaccount("my sub/1"),
        ));
        let request = client
            .build_request_at(RequestDescriptor::get("/positions").authenticated(), TS)
            .unwrap();
        assert_eq!(header(&request, HEADER_SUBACCOUNT), Some("my%20sub%2F1"));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client =
            FtxClient::with_config(ClientConfig::default().with_base_url("http://localhost:8080/"))
                .unwrap();
        let request = client
            .build_request_at(RequestDescriptor::delete("/orders/1"), TS)
            .unwrap();
        assert_eq!(request.url().as_str(), "http://localhost:8080/orders/1");
        assert_eq!(request.method(), Method::DELETE);
    }

    #[test]
    fn test_invalid_base_url() {
        let err = FtxClient::with_config(ClientConfig::default().with_base_url("not a url"))
            .unwrap_err();
        assert!(matches!(err, FtxError::UrlParse(_)));
    }

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let credentials = Credentials::new("key", "top-secret").with_subaccount("sub");
        let rendered = format!("{credentials:?}");
        assert!(rendered.contains("key"));
        assert!(!rendered.contains("top-secret"));
    }
}
