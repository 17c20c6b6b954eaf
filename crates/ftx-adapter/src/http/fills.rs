/*
[INPUT]:  Fill filters (market, time range, order ID)
[OUTPUT]: Executed fills
[POS]:    HTTP layer - fill history endpoint (auth required)
[UPDATE]: When fill filters or response format change
*/

use crate::http::{FtxClient, RequestDescriptor, Result};
use crate::types::{Fill, GetFillsParams};

impl FtxClient {
    /// GET /fills
    pub async fn get_fills(&self, params: &GetFillsParams) -> Result<Vec<Fill>> {
        let descriptor = RequestDescriptor::get("/fills")
            .authenticated()
            .with_query(params)?;
        self.execute(descriptor).await
    }
}
