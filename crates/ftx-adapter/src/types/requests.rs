/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Query parameter records and JSON request payloads
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{OrderType, Resolution, Side, TriggerType};
use crate::http::query::QueryParams;
use crate::http::{FtxError, Result};

// ### Query parameter records
//
// Every field is optional and omitted from the URL when `None`.
// Time bounds are Unix epoch seconds.

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetOrdersHistoryParams {
    pub market: Option<String>,
    pub limit: Option<u32>,
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
}

impl QueryParams for GetOrdersHistoryParams {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetOpenTriggerOrdersParams {
    pub market: Option<String>,
    #[serde(rename = "type")]
    pub trigger_type: Option<TriggerType>,
}

impl QueryParams for GetOpenTriggerOrdersParams {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetTriggerOrdersHistoryParams {
    pub market: Option<String>,
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    pub side: Option<Side>,
    #[serde(rename = "type")]
    pub trigger_type: Option<TriggerType>,
    #[serde(rename = "orderType")]
    pub order_type: Option<OrderType>,
    pub limit: Option<u32>,
}

impl QueryParams for GetTriggerOrdersHistoryParams {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetFillsParams {
    pub market: Option<String>,
    pub limit: Option<u32>,
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    /// `"asc"` returns oldest first
    pub order: Option<String>,
    #[serde(rename = "orderId")]
    pub order_id: Option<i64>,
}

impl QueryParams for GetFillsParams {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetFundingRatesParams {
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    pub future: Option<String>,
}

impl QueryParams for GetFundingRatesParams {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetHistoricalIndexParams {
    pub resolution: Resolution,
    pub limit: Option<u32>,
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
}

impl GetHistoricalIndexParams {
    pub fn new(resolution: Resolution) -> Self {
        Self {
            resolution,
            limit: None,
            start_time: None,
            end_time: None,
        }
    }
}

impl QueryParams for GetHistoricalIndexParams {}

// ### Order payloads

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderPayload {
    pub market: String,
    pub side: Side,
    /// `null` for market orders
    pub price: Option<Decimal>,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub size: Decimal,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub reduce_only: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub ioc: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub post_only: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_referral_program: Option<String>,
}

impl PlaceOrderPayload {
    pub fn limit(market: impl Into<String>, side: Side, price: Decimal, size: Decimal) -> Self {
        Self {
            market: market.into(),
            side,
            price: Some(price),
            order_type: OrderType::Limit,
            size,
            reduce_only: false,
            ioc: false,
            post_only: false,
            client_id: None,
            external_referral_program: None,
        }
    }

    pub fn market(market: impl Into<String>, side: Side, size: Decimal) -> Self {
        Self {
            price: None,
            order_type: OrderType::Market,
            ..Self::limit(market, side, Decimal::ZERO, size)
        }
    }
}

/// Conditional order: stop, take-profit or trailing stop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceTriggerOrderPayload {
    pub market: String,
    pub side: Side,
    pub size: Decimal,
    #[serde(rename = "type")]
    pub trigger_type: TriggerType,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub reduce_only: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub retry_until_filled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_price: Option<Decimal>,
    /// Limit price once triggered; market order when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trail_value: Option<Decimal>,
}

impl PlaceTriggerOrderPayload {
    pub fn new(market: impl Into<String>, side: Side, size: Decimal, trigger_type: TriggerType) -> Self {
        Self {
            market: market.into(),
            side,
            size,
            trigger_type,
            reduce_only: false,
            retry_until_filled: false,
            trigger_price: None,
            order_price: None,
            trail_value: None,
        }
    }

    pub fn stop(market: impl Into<String>, side: Side, size: Decimal, trigger_price: Decimal) -> Self {
        Self {
            trigger_price: Some(trigger_price),
            ..Self::new(market, side, size, TriggerType::Stop)
        }
    }

    pub fn take_profit(
        market: impl Into<String>,
        side: Side,
        size: Decimal,
        trigger_price: Decimal,
    ) -> Self {
        Self {
            trigger_price: Some(trigger_price),
            ..Self::new(market, side, size, TriggerType::TakeProfit)
        }
    }

    /// `trail_value` is negative for sells, positive for buys
    pub fn trailing_stop(
        market: impl Into<String>,
        side: Side,
        size: Decimal,
        trail_value: Decimal,
    ) -> Self {
        Self {
            trail_value: Some(trail_value),
            ..Self::new(market, side, size, TriggerType::TrailingStop)
        }
    }

    /// Check the field each trigger type depends on
    pub fn validate(&self) -> Result<()> {
        let missing = match self.trigger_type {
            TriggerType::Stop if self.trigger_price.is_none() => {
                "triggerPrice is required for stop loss orders"
            }
            TriggerType::TakeProfit if self.trigger_price.is_none() => {
                "triggerPrice is required for take profit orders"
            }
            TriggerType::TrailingStop if self.trail_value.is_none() => {
                "trailValue is required for trailing stop orders"
            }
            _ => return Ok(()),
        };
        Err(FtxError::Validation(missing.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyOrderPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyTriggerOrderPayload {
    pub size: Decimal,
    pub trigger_price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trail_value: Option<Decimal>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelAllOrdersPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditional_orders_only: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit_orders_only: Option<bool>,
}

// ### Account, lending, sub-account and OTC payloads

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeLeverageRequest {
    pub leverage: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LendingOfferPayload {
    pub coin: String,
    pub size: Decimal,
    /// Minimum hourly rate
    pub rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubAccountNameRequest {
    pub nickname: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeSubAccountNameRequest {
    pub nickname: String,
    pub new_nickname: String,
}

/// Move funds between sub-accounts; `None` means the main account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferPayload {
    pub coin: String,
    pub size: Decimal,
    pub source: Option<String>,
    pub destination: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuotePayload {
    pub from_coin: String,
    pub to_coin: String,
    pub size: Decimal,
}
