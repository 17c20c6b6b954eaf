/*
[INPUT]:  Authenticated client, leverage value
[OUTPUT]: Account summary, positions, wallet balances
[POS]:    HTTP layer - account endpoints (auth required)
[UPDATE]: When adding account endpoints or changing response format
*/

use rust_decimal::Decimal;

use crate::http::{FtxClient, RequestDescriptor, Result};
use crate::types::{AccountInformation, Balance, ChangeLeverageRequest, Position};

impl FtxClient {
    /// Account summary including open positions
    ///
    /// GET /account
    pub async fn get_account_information(&self) -> Result<AccountInformation> {
        self.execute(RequestDescriptor::get("/account").authenticated())
            .await
    }

    /// GET /positions
    pub async fn get_positions(&self) -> Result<Vec<Position>> {
        self.execute(RequestDescriptor::get("/positions").authenticated())
            .await
    }

    /// Change account-wide max leverage
    ///
    /// POST /account/leverage
    pub async fn change_account_leverage(&self, leverage: Decimal) -> Result<()> {
        let descriptor = RequestDescriptor::post("/account/leverage")
            .authenticated()
            .with_json_body(&ChangeLeverageRequest { leverage })?;
        self.execute_unit(descriptor).await
    }

    /// GET /wallet/balances
    pub async fn get_wallet_balances(&self) -> Result<Vec<Balance>> {
        self.execute(RequestDescriptor::get("/wallet/balances").authenticated())
            .await
    }
}
