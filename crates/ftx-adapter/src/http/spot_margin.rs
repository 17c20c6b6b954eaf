/*
[INPUT]:  Spot market names, lending offers
[OUTPUT]: Borrow / lending rates, history, offers and lending info
[POS]:    HTTP layer - spot margin endpoints (auth required)
[UPDATE]: When adding spot margin endpoints or changing response format
*/

use crate::http::{FtxClient, RequestDescriptor, Result};
use crate::types::{
    BorrowHistory, BorrowRate, BorrowSummary, LendingHistory, LendingInfo, LendingOffer,
    LendingOfferPayload, LendingRate, SpotMarginMarketInfo,
};

impl FtxClient {
    /// GET /spot_margin/borrow_rates
    pub async fn get_borrow_rates(&self) -> Result<Vec<BorrowRate>> {
        self.execute(RequestDescriptor::get("/spot_margin/borrow_rates").authenticated())
            .await
    }

    /// GET /spot_margin/lending_rates
    pub async fn get_lending_rates(&self) -> Result<Vec<LendingRate>> {
        self.execute(RequestDescriptor::get("/spot_margin/lending_rates").authenticated())
            .await
    }

    /// GET /spot_margin/borrow_summary
    pub async fn get_daily_borrowed_amounts(&self) -> Result<Vec<BorrowSummary>> {
        self.execute(RequestDescriptor::get("/spot_margin/borrow_summary").authenticated())
            .await
    }

    /// Borrow state of both coins of a spot market
    ///
    /// GET /spot_margin/market_info?market={market}
    pub async fn get_market_info(&self, market: &str) -> Result<Vec<SpotMarginMarketInfo>> {
        let descriptor = RequestDescriptor::get("/spot_margin/market_info")
            .authenticated()
            .with_query_pair("market", market);
        self.execute(descriptor).await
    }

    /// GET /spot_margin/borrow_history
    pub async fn get_borrow_history(&self) -> Result<Vec<BorrowHistory>> {
        self.execute(RequestDescriptor::get("/spot_margin/borrow_history").authenticated())
            .await
    }

    /// GET /spot_margin/lending_history
    pub async fn get_lending_history(&self) -> Result<Vec<LendingHistory>> {
        self.execute(RequestDescriptor::get("/spot_margin/lending_history").authenticated())
            .await
    }

    /// GET /spot_margin/offers
    pub async fn get_lending_offers(&self) -> Result<Vec<LendingOffer>> {
        self.execute(RequestDescriptor::get("/spot_margin/offers").authenticated())
            .await
    }

    /// GET /spot_margin/lending_info
    pub async fn get_lending_info(&self) -> Result<Vec<LendingInfo>> {
        self.execute(RequestDescriptor::get("/spot_margin/lending_info").authenticated())
            .await
    }

    /// Offer a coin for lending; a zero size withdraws the offer
    ///
    /// POST /spot_margin/offers
    pub async fn submit_lending_offer(&self, payload: &LendingOfferPayload) -> Result<()> {
        let descriptor = RequestDescriptor::post("/spot_margin/offers")
            .authenticated()
            .with_json_body(payload)?;
        self.execute_unit(descriptor).await
    }
}
