/*
[INPUT]:  Sub-account nicknames, transfer payloads
[OUTPUT]: Sub-accounts, their balances, transfer receipts
[POS]:    HTTP layer - sub-account management endpoints (auth required)
[UPDATE]: When adding sub-account endpoints or changing response format
*/

use crate::http::request::encode_path_segment;
use crate::http::{FtxClient, RequestDescriptor, Result};
use crate::types::{
    Balance, ChangeSubAccountNameRequest, SubAccount, SubAccountNameRequest, TransferPayload,
    TransferResponse,
};

impl FtxClient {
    /// GET /subaccounts
    pub async fn get_subaccounts(&self) -> Result<Vec<SubAccount>> {
        self.execute(RequestDescriptor::get("/subaccounts").authenticated())
            .await
    }

    /// POST /subaccounts
    pub async fn create_subaccount(&self, nickname: &str) -> Result<SubAccount> {
        let descriptor = RequestDescriptor::post("/subaccounts")
            .authenticated()
            .with_json_body(&SubAccountNameRequest {
                nickname: nickname.to_string(),
            })?;
        self.execute(descriptor).await
    }

    /// POST /subaccounts/update_name
    pub async fn change_subaccount_name(&self, nickname: &str, new_nickname: &str) -> Result<()> {
        let descriptor = RequestDescriptor::post("/subaccounts/update_name")
            .authenticated()
            .with_json_body(&ChangeSubAccountNameRequest {
                nickname: nickname.to_string(),
                new_nickname: new_nickname.to_string(),
            })?;
        self.execute_unit(descriptor).await
    }

    /// DELETE /subaccounts
    pub async fn delete_subaccount(&self, nickname: &str) -> Result<()> {
        let descriptor = RequestDescriptor::delete("/subaccounts")
            .authenticated()
            .with_json_body(&SubAccountNameRequest {
                nickname: nickname.to_string(),
            })?;
        self.execute_unit(descriptor).await
    }

    /// GET /subaccounts/{nickname}/balances
    pub async fn get_subaccount_balances(&self, nickname: &str) -> Result<Vec<Balance>> {
        let endpoint = format!("/subaccounts/{}/balances", encode_path_segment(nickname)?);
        self.execute(RequestDescriptor::get(endpoint).authenticated())
            .await
    }

    /// Move funds between the main account and sub-accounts
    ///
    /// POST /subaccounts/transfer
    pub async fn transfer(&self, payload: &TransferPayload) -> Result<TransferResponse> {
        let descriptor = RequestDescriptor::post("/subaccounts/transfer")
            .authenticated()
            .with_json_body(payload)?;
        self.execute(descriptor).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::FtxError;
    use crate::http::test_support::{mock_client, success};
    use crate::types::TransferPayload;
    use rust_decimal::Decimal;
    use serde_json::json;
    use wiremock::matchers::{any, body_json, method, path};
    use wiremock::{Mock, MockServer};

    #[tokio::test]
    async fn test_get_and_create_subaccounts() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/subaccounts"))
            .respond_with(success(json!([
                { "nickname": "sub1", "deletable": true, "editable": true, "competition": true }
            ])))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/subaccounts"))
            .and(body_json(json!({ "nickname": "sub2" })))
            .respond_with(success(json!(
                { "nickname": "sub2", "deletable": true, "editable": true }
            )))
            .expect(1)
            .mount(&server)
            .await;

        let client = mock_client(&server);
        let accounts = client.get_subaccounts().await.unwrap();
        assert!(accounts[0].competition);
        let created = client.create_subaccount("sub2").await.unwrap();
        assert_eq!(created.nickname, "sub2");
        assert!(!created.competition);
    }

    #[tokio::test]
    async fn test_rename_and_delete() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/subaccounts/update_name"))
            .and(body_json(json!({ "nickname": "sub1", "newNickname": "newSub1" })))
            .respond_with(success(json!(null)))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/api/subaccounts"))
            .and(body_json(json!({ "nickname": "newSub1" })))
            .respond_with(success(json!(null)))
            .expect(1)
            .mount(&server)
            .await;

        let client = mock_client(&server);
        client.change_subaccount_name("sub1", "newSub1").await.unwrap();
        client.delete_subaccount("newSub1").await.unwrap();
    }

    #[tokio::test]
    async fn test_get_subaccount_balances_path_is_encoded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/subaccounts/my%20sub/balances"))
            .respond_with(success(json!([
                { "coin": "USDT", "free": 4321.2, "total": 4340.2 }
            ])))
            .mount(&server)
            .await;

        let balances = mock_client(&server)
            .get_subaccount_balances("my sub")
            .await
            .unwrap();
        assert_eq!(balances[0].coin, "USDT");
    }

    #[tokio::test]
    async fn test_transfer_from_main_account() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/subaccounts/transfer"))
            .and(body_json(json!({
                "coin": "XRP",
                "size": "10000",
                "source": null,
                "destination": "sub1"
            })))
            .respond_with(success(json!({
                "id": 316450,
                "coin": "XRP",
                "size": 10000,
                "time": "2019-03-05T09:56:55.728933+00:00",
                "notes": "",
                "status": "complete"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let receipt = mock_client(&server)
            .transfer(&TransferPayload {
                coin: "XRP".to_string(),
                size: Decimal::from(10_000),
                source: None,
                destination: Some("sub1".to_string()),
            })
            .await
            .unwrap();
        assert!(receipt.is_complete());
        assert_eq!(receipt.id, 316450);
    }

    #[tokio::test]
    async fn test_dot_nickname_is_refused_before_sending() {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(success(json!([])))
            .expect(0)
            .mount(&server)
            .await;

        let err = mock_client(&server)
            .get_subaccount_balances("..")
            .await
            .unwrap_err();
        assert!(matches!(err, FtxError::Validation(_)));
    }
}
