/*
[INPUT]:  Raw response body `{ "success": bool, "result": ..., "error": string }`
[OUTPUT]: Envelope::Success(raw result) or Envelope::Failure(message)
[POS]:    HTTP layer - response unwrapping shared by all endpoints
[UPDATE]: When the exchange changes its response wrapper
*/

use serde::Deserialize;
use serde_json::value::RawValue;

/// Outer wrapper every REST response uses
#[derive(Debug, Deserialize)]
#[serde(try_from = "RawEnvelope")]
pub enum Envelope {
    /// `result` left unparsed so each endpoint picks its own type
    Success(Box<RawValue>),
    Failure(String),
}

#[derive(Deserialize)]
struct RawEnvelope {
    success: bool,
    #[serde(default)]
    result: Option<Box<RawValue>>,
    #[serde(default)]
    error: Option<String>,
}

impl TryFrom<RawEnvelope> for Envelope {
    type Error = serde_json::Error;

    fn try_from(raw: RawEnvelope) -> Result<Self, Self::Error> {
        if !raw.success {
            return Ok(Envelope::Failure(
                raw.error.unwrap_or_else(|| "unknown error".to_string()),
            ));
        }
        match raw.result {
            Some(result) => Ok(Envelope::Success(result)),
            // `"result": null` and a missing result both arrive here
            None => RawValue::from_string("null".to_string()).map(Envelope::Success),
        }
    }
}

impl Envelope {
    pub fn into_result(self) -> Result<Box<RawValue>, String> {
        match self {
            Envelope::Success(raw) => Ok(raw),
            Envelope::Failure(message) => Err(message),
        }
    }
}
