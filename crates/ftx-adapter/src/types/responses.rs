/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::TransferStatus;
use super::time::FtxTime;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferResponse {
    pub id: i64,
    pub coin: String,
    pub size: Decimal,
    pub time: FtxTime,
    #[serde(default)]
    pub notes: String,
    pub status: TransferStatus,
}

impl TransferResponse {
    pub fn is_complete(&self) -> bool {
        self.status == TransferStatus::Complete
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuoteResponse {
    pub quote_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transfer_response() {
        let response: TransferResponse = serde_json::from_str(
            r#"{"id":316450,"coin":"XRP","size":10000,"time":"2019-03-05T09:56:55.728933+00:00","notes":"","status":"complete"}"#,
        )
        .unwrap();
        assert!(response.is_complete());
        assert_eq!(response.size, Decimal::from(10_000));
    }

    #[test]
    fn test_create_quote_response() {
        let response: CreateQuoteResponse = serde_json::from_str(r#"{"quoteId":1031}"#).unwrap();
        assert_eq!(response.quote_id, 1031);
    }
}
