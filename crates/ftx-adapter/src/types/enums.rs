/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use crate::http::FtxError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Limit,
    Market,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    New,
    Open,
    Closed,
}

/// Kind of conditional order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TriggerType {
    Stop,
    TrailingStop,
    TakeProfit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerOrderStatus {
    Open,
    Cancelled,
    Triggered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Liquidity {
    Maker,
    Taker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FutureType {
    Future,
    Perpetual,
    Move,
    Prediction,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferStatus {
    Complete,
    #[serde(other)]
    Pending,
}

/// Candle width in seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum Resolution {
    Sec15,
    Minute,
    Minute5,
    Minute15,
    Hour,
    Hour4,
    Day,
}

impl Resolution {
    pub const fn as_secs(self) -> u32 {
        match self {
            Resolution::Sec15 => 15,
            Resolution::Minute => 60,
            Resolution::Minute5 => 300,
            Resolution::Minute15 => 900,
            Resolution::Hour => 3_600,
            Resolution::Hour4 => 14_400,
            Resolution::Day => 86_400,
        }
    }
}

impl From<Resolution> for u32 {
    fn from(value: Resolution) -> Self {
        value.as_secs()
    }
}

impl TryFrom<u32> for Resolution {
    type Error = FtxError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            15 => Ok(Resolution::Sec15),
            60 => Ok(Resolution::Minute),
            300 => Ok(Resolution::Minute5),
            900 => Ok(Resolution::Minute15),
            3_600 => Ok(Resolution::Hour),
            14_400 => Ok(Resolution::Hour4),
            86_400 => Ok(Resolution::Day),
            other => Err(FtxError::Validation(format!(
                "unsupported resolution {other}s"
            ))),
        }
    }
}

// ### Streaming constants
//
// The WebSocket feed is not implemented here; these only name its values.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Orderbook,
    Trades,
    Ticker,
    Markets,
    Fills,
    Orders,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Subscribe,
    Unsubscribe,
    Login,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseType {
    Error,
    Subscribed,
    Unsubscribed,
    Info,
    Partial,
    Update,
}
