/*
[INPUT]:  Parameter records deriving serde::Serialize
[OUTPUT]: Ordered (name, value) pairs and URL query strings
[POS]:    HTTP layer - optional filter parameters for list endpoints
[UPDATE]: When parameter records gain non-scalar fields
*/

use serde::Serialize;
use url::form_urlencoded;

use crate::http::{FtxError, Result};

/// Marker for records that are sent as URL query parameters.
///
/// Field names come from the serde attributes and keep declaration order.
/// `None` fields are dropped entirely; the exchange treats `key=` differently
/// from a missing key.
pub trait QueryParams: Serialize {
    /// Render the record as ordered query pairs
    fn to_query_pairs(&self) -> Result<Vec<(String, String)>> {
        encode_query(self)
    }
}

/// Encode any flat serializable record into ordered query pairs.
///
/// Strings are emitted verbatim, integers in base 10, decimals in their full
/// string form and booleans as `true`/`false`. Nested arrays or objects are
/// rejected.
pub fn encode_query<P>(params: &P) -> Result<Vec<(String, String)>>
where
    P: Serialize + ?Sized,
{
    let encoded =
        serde_urlencoded::to_string(params).map_err(|e| FtxError::Encoding(e.to_string()))?;
    Ok(form_urlencoded::parse(encoded.as_bytes())
        .into_owned()
        .collect())
}

/// Join pairs into an `application/x-www-form-urlencoded` query string
pub fn to_query_string(pairs: &[(String, String)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .finish()
}
