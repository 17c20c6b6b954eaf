/*
[INPUT]:  Future / index names and query filters
[OUTPUT]: Futures, stats, funding rates, index weights and candles
[POS]:    HTTP layer - public futures market data (no auth required)
[UPDATE]: When adding futures endpoints or changing response format
*/

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::http::request::encode_path_segment;
use crate::http::{FtxClient, RequestDescriptor, Result};
use crate::types::{
    ExpiredFuture, FundingRate, Future, FutureStats, GetFundingRatesParams,
    GetHistoricalIndexParams, HistoricalIndex,
};

impl FtxClient {
    /// GET /futures
    pub async fn get_futures(&self) -> Result<Vec<Future>> {
        self.execute(RequestDescriptor::get("/futures")).await
    }

    /// GET /futures/{name}
    pub async fn get_future(&self, name: &str) -> Result<Future> {
        let endpoint = format!("/futures/{}", encode_path_segment(name)?);
        self.execute(RequestDescriptor::get(endpoint)).await
    }

    /// GET /futures/{name}/stats
    pub async fn get_future_stats(&self, name: &str) -> Result<FutureStats> {
        let endpoint = format!("/futures/{}/stats", encode_path_segment(name)?);
        self.execute(RequestDescriptor::get(endpoint)).await
    }

    /// GET /funding_rates
    pub async fn get_funding_rates(&self, params: &GetFundingRatesParams) -> Result<Vec<FundingRate>> {
        let descriptor = RequestDescriptor::get("/funding_rates").with_query(params)?;
        self.execute(descriptor).await
    }

    /// Component weights of an index, keyed by coin
    ///
    /// GET /indexes/{index}/weights
    pub async fn get_index_weights(&self, index: &str) -> Result<HashMap<String, Decimal>> {
        let endpoint = format!("/indexes/{}/weights", encode_path_segment(index)?);
        self.execute(RequestDescriptor::get(endpoint)).await
    }

    /// GET /expired_futures
    pub async fn get_expired_futures(&self) -> Result<Vec<ExpiredFuture>> {
        self.execute(RequestDescriptor::get("/expired_futures")).await
    }

    /// Index candles
    ///
    /// GET /indexes/{index}/candles?resolution={secs}
    pub async fn get_historical_index(
        &self,
        index: &str,
        params: &GetHistoricalIndexParams,
    ) -> Result<Vec<HistoricalIndex>> {
        let endpoint = format!("/indexes/{}/candles", encode_path_segment(index)?);
        let descriptor = RequestDescriptor::get(endpoint).with_query(params)?;
        self.execute(descriptor).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::test_support::{mock_client, success};
    use crate::http::{ClientConfig, FtxClient};
    use crate::types::{FutureType, GetFundingRatesParams, GetHistoricalIndexParams, Resolution};
    use rust_decimal::Decimal;
    use serde_json::{Value, json};
    use wiremock::matchers::{header_exists, method, path, query_param};
    use wiremock::{Mock, MockServer};

    fn future_json(name: &str) -> Value {
        json!({
            "ask": 4196.0,
            "bid": 4114.25,
            "change1h": 0.0,
            "change24h": 0.0,
            "changeBod": 0.0,
            "volumeUsd24h": 100000000.0,
            "volume": 24390.24,
            "description": "Bitcoin March 2019 Futures",
            "enabled": true,
            "expired": false,
            "expiry": "2019-03-29T03:00:00+00:00",
            "index": 3919.58841011,
            "imfFactor": 0.002,
            "last": 4196.0,
            "lowerBound": 3663.75,
            "mark": 3854.75,
            "name": name,
            "perpetual": false,
            "positionLimitWeight": 1.0,
            "postOnly": false,
            "priceIncrement": 0.25,
            "sizeIncrement": 0.0001,
            "underlying": "BTC",
            "upperBound": 4112.2,
            "type": "future"
        })
    }

    /// Public client without credentials; auth headers would fail the build
    fn public_client(server: &MockServer) -> FtxClient {
        FtxClient::with_config(ClientConfig::default().with_base_url(format!("{}/api", server.uri())))
            .expect("client init")
    }

    #[tokio::test]
    async fn test_get_futures_is_public() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/futures"))
            .respond_with(success(json!([future_json("BTC-0329")])))
            .mount(&server)
            .await;

        let futures = public_client(&server).get_futures().await.unwrap();
        assert_eq!(futures[0].future_type, FutureType::Future);
        assert!(futures[0].expiry.is_some());

        let received = server.received_requests().await.unwrap();
        assert!(received[0].headers.get("ftx-key").is_none());
    }

    #[tokio::test]
    async fn test_public_call_sends_no_auth_even_with_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/futures/BTC-0329"))
            .and(header_exists("ftx-key"))
            .respond_with(success(json!(null)))
            .expect(0)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/futures/BTC-0329"))
            .respond_with(success(future_json("BTC-0329")))
            .mount(&server)
            .await;

        let future = mock_client(&server).get_future("BTC-0329").await.unwrap();
        assert_eq!(future.name, "BTC-0329");
    }

    #[tokio::test]
    async fn test_get_future_stats() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/futures/BTC-PERP/stats"))
            .respond_with(success(json!({
                "volume": 1000.23,
                "nextFundingRate": 0.00025,
                "nextFundingTime": "2019-03-29T03:00:00+00:00",
                "expirationPrice": 3992.1,
                "predictedExpirationPrice": 3993.6,
                "strikePrice": 8182.35,
                "openInterest": 21124.583
            })))
            .mount(&server)
            .await;

        let stats = public_client(&server).get_future_stats("BTC-PERP").await.unwrap();
        assert_eq!(stats.next_funding_rate, Some(0.00025));
        assert!(stats.next_funding_time.is_some());
    }

    #[tokio::test]
    async fn test_get_funding_rates_filters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/funding_rates"))
            .and(query_param("start_time", "1559881511"))
            .and(query_param("end_time", "1559881711"))
            .and(query_param("future", "BTC-PERP"))
            .respond_with(success(json!([{
                "future": "BTC-PERP",
                "rate": 0.0025,
                "time": "2019-06-02T08:00:00+00:00"
            }])))
            .mount(&server)
            .await;

        let params = GetFundingRatesParams {
            start_time: Some(1_559_881_511),
            end_time: Some(1_559_881_711),
            future: Some("BTC-PERP".to_string()),
        };
        let rates = public_client(&server).get_funding_rates(&params).await.unwrap();
        assert_eq!(rates[0].rate, "0.0025".parse::<Decimal>().unwrap());
    }

    #[tokio::test]
    async fn test_get_index_weights() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/indexes/ALT/weights"))
            .respond_with(success(json!({
                "BNB": 3.29254287,
                "BSV": 0.0,
                "ETH": 5.50564437
            })))
            .mount(&server)
            .await;

        let weights = public_client(&server).get_index_weights("ALT").await.unwrap();
        assert_eq!(weights.len(), 3);
        assert_eq!(weights["BNB"], "3.29254287".parse::<Decimal>().unwrap());
    }

    #[tokio::test]
    async fn test_get_expired_futures() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/expired_futures"))
            .respond_with(success(json!([{
                "ask": null,
                "bid": null,
                "description": "Bitcoin March 2020 Futures",
                "enabled": false,
                "expired": true,
                "expiry": "2020-03-27T03:00:00+00:00",
                "expiryDescription": "March 2020",
                "group": "quarterly",
                "imfFactor": 0.002,
                "index": 6807.943936097452,
                "last": 6804.5,
                "lowerBound": 6467.0,
                "marginPrice": 6801.0,
                "mark": 6801.0,
                "moveStart": null,
                "name": "BTC-20200327",
                "perpetual": false,
                "positionLimitWeight": 1.0,
                "postOnly": false,
                "priceIncrement": 0.5,
                "sizeIncrement": 0.0001,
                "type": "future",
                "underlying": "BTC",
                "underlyingDescription": "Bitcoin",
                "upperBound": 7152.0
            }])))
            .mount(&server)
            .await;

        let expired = public_client(&server).get_expired_futures().await.unwrap();
        assert!(expired[0].expired);
        assert_eq!(expired[0].ask, Decimal::ZERO);
        assert_eq!(expired[0].group.as_deref(), Some("quarterly"));
    }

    #[tokio::test]
    async fn test_get_historical_index() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/indexes/BTC/candles"))
            .and(query_param("resolution", "300"))
            .and(query_param("limit", "2"))
            .respond_with(success(json!([{
                "open": 11055.25,
                "high": 11089.0,
                "low": 11043.5,
                "close": 11059.25,
                "startTime": "2019-06-24T17:15:00+00:00",
                "volume": null
            }])))
            .mount(&server)
            .await;

        let mut params = GetHistoricalIndexParams::new(Resolution::Minute5);
        params.limit = Some(2);
        let candles = public_client(&server)
            .get_historical_index("BTC", &params)
            .await
            .unwrap();
        assert_eq!(candles[0].volume, Decimal::ZERO);
        assert_eq!(candles[0].close, "11059.25".parse::<Decimal>().unwrap());
    }
}
