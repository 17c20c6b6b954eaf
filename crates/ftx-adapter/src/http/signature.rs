/*
[INPUT]:  API secret, timestamp, HTTP method, request path and body bytes
[OUTPUT]: Hex HMAC-SHA256 signature for the FTX-SIGN header
[POS]:    HTTP layer - request signing for authenticated endpoints
[UPDATE]: When changing signing algorithm or payload layout
*/

use std::fmt;

use hmac::{Hmac, Mac};
use reqwest::Method;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Signs requests with the account's API secret
#[derive(Clone)]
pub struct RequestSigner {
    mac: HmacSha256,
}

impl fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestSigner")
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl RequestSigner {
    /// Create a new signer keyed with the API secret
    pub fn new(api_secret: impl AsRef<[u8]>) -> Self {
        // HMAC accepts keys of any length
        let mac = HmacSha256::new_from_slice(api_secret.as_ref())
            .expect("HMAC can take key of any size");
        Self { mac }
    }

    /// Build the exact byte string that gets signed
    ///
    /// Format: "{timestamp}{METHOD}{path_and_query}{body}"
    pub fn payload(
        timestamp: &str,
        method: &Method,
        request_path: &str,
        body: Option<&[u8]>,
    ) -> Vec<u8> {
        let method = method.as_str().to_ascii_uppercase();
        let mut payload = Vec::with_capacity(
            timestamp.len() + method.len() + request_path.len() + body.map_or(0, <[u8]>::len),
        );
        payload.extend_from_slice(timestamp.as_bytes());
        payload.extend_from_slice(method.as_bytes());
        payload.extend_from_slice(request_path.as_bytes());
        if let Some(body) = body {
            payload.extend_from_slice(body);
        }
        payload
    }

    /// Sign a request and return the lowercase hex digest
    pub fn sign(
        &self,
        timestamp: &str,
        method: &Method,
        request_path: &str,
        body: Option<&[u8]>,
    ) -> String {
        let mut mac = self.mac.clone();
        mac.update(&Self::payload(timestamp, method, request_path, body));
        hex::encode(mac.finalize().into_bytes())
    }
}
