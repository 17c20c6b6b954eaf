/*
[INPUT]:  Order payloads, order / client IDs, history filters
[OUTPUT]: Orders, trigger orders and their triggers
[POS]:    HTTP layer - order management endpoints (auth required)
[UPDATE]: When adding order endpoints or changing request/response format
*/

use tracing::warn;

use crate::http::request::encode_path_segment;
use crate::http::{FtxClient, RequestDescriptor, Result};
use crate::types::{
    CancelAllOrdersPayload, GetOpenTriggerOrdersParams, GetOrdersHistoryParams,
    GetTriggerOrdersHistoryParams, ModifyOrderPayload, ModifyTriggerOrderPayload, Order,
    PlaceOrderPayload, PlaceTriggerOrderPayload, Trigger, TriggerOrder,
};

impl FtxClient {
    /// Open orders, optionally for one market
    ///
    /// GET /orders?market={market}
    pub async fn get_open_orders(&self, market: Option<&str>) -> Result<Vec<Order>> {
        let mut descriptor = RequestDescriptor::get("/orders").authenticated();
        if let Some(market) = market {
            descriptor = descriptor.with_query_pair("market", market);
        }
        self.execute(descriptor).await
    }

    /// GET /orders/history
    pub async fn get_orders_history(&self, params: &GetOrdersHistoryParams) -> Result<Vec<Order>> {
        let descriptor = RequestDescriptor::get("/orders/history")
            .authenticated()
            .with_query(params)?;
        self.execute(descriptor).await
    }

    /// GET /conditional_orders
    pub async fn get_open_trigger_orders(
        &self,
        params: &GetOpenTriggerOrdersParams,
    ) -> Result<Vec<TriggerOrder>> {
        let descriptor = RequestDescriptor::get("/conditional_orders")
            .authenticated()
            .with_query(params)?;
        self.execute(descriptor).await
    }

    /// GET /conditional_orders/{order_id}/triggers
    pub async fn get_order_triggers(&self, order_id: i64) -> Result<Vec<Trigger>> {
        let endpoint = format!("/conditional_orders/{order_id}/triggers");
        self.execute(RequestDescriptor::get(endpoint).authenticated())
            .await
    }

    /// GET /conditional_orders/history
    pub async fn get_trigger_orders_history(
        &self,
        params: &GetTriggerOrdersHistoryParams,
    ) -> Result<Vec<TriggerOrder>> {
        let descriptor = RequestDescriptor::get("/conditional_orders/history")
            .authenticated()
            .with_query(params)?;
        self.execute(descriptor).await
    }

    /// POST /orders
    pub async fn place_order(&self, payload: &PlaceOrderPayload) -> Result<Order> {
        let descriptor = RequestDescriptor::post("/orders")
            .authenticated()
            .with_json_body(payload)?;
        self.execute(descriptor).await
    }

    /// Place a conditional order
    ///
    /// The payload is checked locally first; nothing is sent if it is incomplete.
    ///
    /// POST /conditional_orders
    pub async fn place_trigger_order(
        &self,
        payload: &PlaceTriggerOrderPayload,
    ) -> Result<TriggerOrder> {
        if let Err(err) = payload.validate() {
            warn!(market = %payload.market, error = %err, "rejected trigger order before sending");
            return Err(err);
        }
        let descriptor = RequestDescriptor::post("/conditional_orders")
            .authenticated()
            .with_json_body(payload)?;
        self.execute(descriptor).await
    }

    /// POST /orders/{order_id}/modify
    pub async fn modify_order(&self, order_id: i64, payload: &ModifyOrderPayload) -> Result<Order> {
        let descriptor = RequestDescriptor::post(format!("/orders/{order_id}/modify"))
            .authenticated()
            .with_json_body(payload)?;
        self.execute(descriptor).await
    }

    /// POST /orders/by_client_id/{client_id}/modify
    pub async fn modify_order_by_client_id(
        &self,
        client_id: &str,
        payload: &ModifyOrderPayload,
    ) -> Result<Order> {
        let endpoint = format!(
            "/orders/by_client_id/{}/modify",
            encode_path_segment(client_id)?
        );
        let descriptor = RequestDescriptor::post(endpoint)
            .authenticated()
            .with_json_body(payload)?;
        self.execute(descriptor).await
    }

    /// POST /conditional_orders/{order_id}/modify
    pub async fn modify_trigger_order(
        &self,
        order_id: i64,
        payload: &ModifyTriggerOrderPayload,
    ) -> Result<TriggerOrder> {
        let descriptor = RequestDescriptor::post(format!("/conditional_orders/{order_id}/modify"))
            .authenticated()
            .with_json_body(payload)?;
        self.execute(descriptor).await
    }

    /// GET /orders/{order_id}
    pub async fn get_order(&self, order_id: i64) -> Result<Order> {
        self.execute(RequestDescriptor::get(format!("/orders/{order_id}")).authenticated())
            .await
    }

    /// GET /orders/by_client_id/{client_id}
    pub async fn get_order_by_client_id(&self, client_id: &str) -> Result<Order> {
        let endpoint = format!("/orders/by_client_id/{}", encode_path_segment(client_id)?);
        self.execute(RequestDescriptor::get(endpoint).authenticated())
            .await
    }

    /// DELETE /orders/{order_id}
    pub async fn cancel_order(&self, order_id: i64) -> Result<()> {
        self.execute_unit(RequestDescriptor::delete(format!("/orders/{order_id}")).authenticated())
            .await
    }

    /// DELETE /orders/by_client_id/{client_id}
    pub async fn cancel_order_by_client_id(&self, client_id: &str) -> Result<()> {
        let endpoint = format!("/orders/by_client_id/{}", encode_path_segment(client_id)?);
        self.execute_unit(RequestDescriptor::delete(endpoint).authenticated())
            .await
    }

    /// DELETE /conditional_orders/{id}
    pub async fn cancel_open_trigger_order(&self, trigger_order_id: i64) -> Result<()> {
        let endpoint = format!("/conditional_orders/{trigger_order_id}");
        self.execute_unit(RequestDescriptor::delete(endpoint).authenticated())
            .await
    }

    /// Cancel every open order matching the payload filters
    ///
    /// DELETE /orders
    pub async fn cancel_all_orders(&self, payload: &CancelAllOrdersPayload) -> Result<()> {
        let descriptor = RequestDescriptor::delete("/orders")
            .authenticated()
            .with_json_body(payload)?;
        self.execute_unit(descriptor).await
    }
}
