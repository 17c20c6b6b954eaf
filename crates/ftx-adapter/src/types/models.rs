/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{
    FutureType, Liquidity, OrderStatus, OrderType, Side, TriggerOrderStatus, TriggerType,
};
use super::time::FtxTime;

// ### Account

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInformation {
    pub backstop_provider: bool,
    pub collateral: Decimal,
    pub free_collateral: Decimal,
    pub initial_margin_requirement: Decimal,
    pub liquidating: bool,
    pub maintenance_margin_requirement: Decimal,
    pub maker_fee: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero"
    )]
    pub margin_fraction: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero"
    )]
    pub open_margin_fraction: Decimal,
    pub taker_fee: Decimal,
    pub total_account_value: Decimal,
    pub total_position_size: Decimal,
    pub username: String,
    pub leverage: Decimal,
    #[serde(default)]
    pub positions: Vec<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub cost: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero"
    )]
    pub entry_price: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero"
    )]
    pub estimated_liquidation_price: Decimal,
    pub future: String,
    pub initial_margin_requirement: Decimal,
    pub long_order_size: Decimal,
    pub maintenance_margin_requirement: Decimal,
    pub net_size: Decimal,
    pub open_size: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero"
    )]
    pub realized_pnl: Decimal,
    pub short_order_size: Decimal,
    pub side: Side,
    pub size: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero"
    )]
    pub unrealized_pnl: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero"
    )]
    pub collateral_used: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    pub coin: String,
    pub free: Decimal,
    pub total: Decimal,
}

// ### Orders

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub market: String,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub side: Side,
    /// Zero for market orders
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero"
    )]
    pub price: Decimal,
    pub size: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero"
    )]
    pub filled_size: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero"
    )]
    pub remaining_size: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero"
    )]
    pub avg_fill_price: Decimal,
    pub status: OrderStatus,
    pub created_at: FtxTime,
    #[serde(default)]
    pub reduce_only: bool,
    #[serde(default)]
    pub ioc: bool,
    #[serde(default)]
    pub post_only: bool,
    #[serde(default)]
    pub future: Option<String>,
    #[serde(default)]
    pub client_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerOrder {
    pub id: i64,
    #[serde(default)]
    pub order_id: Option<i64>,
    pub market: String,
    pub created_at: FtxTime,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub future: Option<String>,
    #[serde(default)]
    pub order_price: Option<Decimal>,
    #[serde(default)]
    pub reduce_only: bool,
    pub side: Side,
    pub size: Decimal,
    pub status: TriggerOrderStatus,
    #[serde(default)]
    pub trail_start: Option<Decimal>,
    #[serde(default)]
    pub trail_value: Option<Decimal>,
    #[serde(default)]
    pub trigger_price: Option<Decimal>,
    #[serde(default)]
    pub triggered_at: Option<FtxTime>,
    #[serde(rename = "type")]
    pub trigger_type: TriggerType,
    pub order_type: OrderType,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero"
    )]
    pub filled_size: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero"
    )]
    pub avg_fill_price: Decimal,
    #[serde(default)]
    pub order_status: Option<String>,
    #[serde(default)]
    pub retry_until_filled: bool,
}

/// One firing of a conditional order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trigger {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub filled_size: Option<f64>,
    #[serde(default)]
    pub order_size: Option<f64>,
    #[serde(default)]
    pub order_id: Option<i64>,
    pub time: FtxTime,
}

// ### Fills

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fill {
    pub fee: f64,
    pub fee_currency: String,
    pub fee_rate: f64,
    #[serde(default)]
    pub future: Option<String>,
    pub id: i64,
    pub liquidity: Liquidity,
    pub market: String,
    #[serde(default)]
    pub base_currency: Option<String>,
    #[serde(default)]
    pub quote_currency: Option<String>,
    #[serde(default)]
    pub order_id: Option<i64>,
    #[serde(default)]
    pub trade_id: Option<i64>,
    pub price: Decimal,
    pub side: Side,
    pub size: Decimal,
    pub time: FtxTime,
    #[serde(rename = "type")]
    pub fill_type: String,
}

// ### Futures

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Future {
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero"
    )]
    pub ask: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero"
    )]
    pub bid: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero"
    )]
    pub change1h: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero"
    )]
    pub change24h: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero"
    )]
    pub change_bod: Decimal,
    #[serde(default)]
    pub volume_usd24h: f64,
    #[serde(default)]
    pub volume: f64,
    pub description: String,
    pub enabled: bool,
    pub expired: bool,
    #[serde(default)]
    pub expiry: Option<FtxTime>,
    #[serde(default)]
    pub index: f64,
    #[serde(default)]
    pub imf_factor: f64,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero"
    )]
    pub last: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero"
    )]
    pub lower_bound: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero"
    )]
    pub mark: Decimal,
    pub name: String,
    pub perpetual: bool,
    #[serde(default)]
    pub position_limit_weight: f64,
    pub post_only: bool,
    pub price_increment: Decimal,
    pub size_increment: Decimal,
    pub underlying: String,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero"
    )]
    pub upper_bound: Decimal,
    #[serde(rename = "type")]
    pub future_type: FutureType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpiredFuture {
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero"
    )]
    pub ask: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero"
    )]
    pub bid: Decimal,
    pub description: String,
    pub enabled: bool,
    pub expired: bool,
    #[serde(default)]
    pub expiry: Option<FtxTime>,
    #[serde(default)]
    pub expiry_description: Option<String>,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero"
    )]
    pub imf_factor: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero"
    )]
    pub index: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero"
    )]
    pub last: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero"
    )]
    pub lower_bound: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero"
    )]
    pub margin_price: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero"
    )]
    pub mark: Decimal,
    #[serde(default)]
    pub move_start: Option<String>,
    pub name: String,
    pub perpetual: bool,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero"
    )]
    pub position_limit_weight: Decimal,
    pub post_only: bool,
    pub price_increment: Decimal,
    pub size_increment: Decimal,
    #[serde(rename = "type")]
    pub future_type: FutureType,
    pub underlying: String,
    #[serde(default)]
    pub underlying_description: Option<String>,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero"
    )]
    pub upper_bound: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FutureStats {
    pub volume: Decimal,
    #[serde(default)]
    pub next_funding_rate: Option<f64>,
    #[serde(default)]
    pub next_funding_time: Option<FtxTime>,
    #[serde(default)]
    pub expiration_price: Option<Decimal>,
    #[serde(default)]
    pub predicted_expiration_price: Option<Decimal>,
    #[serde(default)]
    pub strike_price: Option<Decimal>,
    #[serde(default)]
    pub open_interest: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundingRate {
    pub future: String,
    pub rate: Decimal,
    pub time: FtxTime,
}

/// Index candle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalIndex {
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub start_time: FtxTime,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero"
    )]
    pub volume: Decimal,
}

// ### Spot margin

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorrowRate {
    pub coin: String,
    pub estimate: f64,
    pub previous: f64,
}

pub type LendingRate = BorrowRate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorrowSummary {
    pub coin: String,
    pub size: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotMarginMarketInfo {
    pub coin: String,
    pub borrowed: Decimal,
    pub free: Decimal,
    pub estimated_rate: f64,
    pub previous_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorrowHistory {
    pub coin: String,
    pub cost: Decimal,
    pub rate: Decimal,
    pub size: Decimal,
    pub time: FtxTime,
}

pub type LendingHistory = BorrowHistory;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LendingOffer {
    pub coin: String,
    pub rate: f64,
    pub size: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LendingInfo {
    pub coin: String,
    pub lendable: Decimal,
    pub locked: Decimal,
    pub min_rate: Option<f64>,
    pub offered: Decimal,
}

// ### Sub-accounts

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubAccount {
    pub nickname: String,
    pub deletable: bool,
    pub editable: bool,
    #[serde(default)]
    pub competition: bool,
}

// ### OTC conversions

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteStatus {
    pub base_coin: String,
    pub cost: Decimal,
    pub expired: bool,
    pub filled: bool,
    pub from_coin: String,
    pub id: i64,
    pub price: Decimal,
    pub proceeds: Decimal,
    pub quote_coin: String,
    pub side: Side,
    pub to_coin: String,
}

mod serde_helpers {
    use super::Decimal;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;
    use std::str::FromStr;

    pub fn deserialize_decimal_or_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        if value.is_null() {
            return Ok(Decimal::ZERO);
        }

        if let Some(raw) = value.as_str() {
            if raw.trim().is_empty() {
                return Ok(Decimal::ZERO);
            }
            return Decimal::from_str(raw).map_err(serde::de::Error::custom);
        }

        if value.is_number() {
            let raw = value.to_string();
            return Decimal::from_str(&raw)
                .or_else(|_| Decimal::from_scientific(&raw))
                .map_err(serde::de::Error::custom);
        }

        Err(serde::de::Error::custom("invalid decimal value"))
    }
}
