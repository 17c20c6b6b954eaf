/*
[INPUT]:  Conversion payloads and quote IDs
[OUTPUT]: Quote IDs and quote status
[POS]:    HTTP layer - OTC conversion endpoints (auth required)
[UPDATE]: When quote endpoints or response format change
*/

use crate::http::{FtxClient, RequestDescriptor, Result};
use crate::types::{CreateQuotePayload, CreateQuoteResponse, QuoteStatus};

impl FtxClient {
    /// Request a conversion quote and return its ID
    ///
    /// POST /otc/quotes
    pub async fn create_quote(&self, payload: &CreateQuotePayload) -> Result<i64> {
        let descriptor = RequestDescriptor::post("/otc/quotes")
            .authenticated()
            .with_json_body(payload)?;
        let response: CreateQuoteResponse = self.execute(descriptor).await?;
        Ok(response.quote_id)
    }

    /// GET /otc/quotes/{quote_id}?market={market}
    pub async fn get_quote_status(
        &self,
        quote_id: i64,
        market: Option<&str>,
    ) -> Result<Vec<QuoteStatus>> {
        let mut descriptor = RequestDescriptor::get(format!("/otc/quotes/{quote_id}")).authenticated();
        if let Some(market) = market {
            descriptor = descriptor.with_query_pair("market", market);
        }
        self.execute(descriptor).await
    }

    /// POST /otc/quotes/{quote_id}/accept
    pub async fn accept_quote(&self, quote_id: i64) -> Result<()> {
        let endpoint = format!("/otc/quotes/{quote_id}/accept");
        self.execute_unit(RequestDescriptor::post(endpoint).authenticated())
            .await
    }
}
