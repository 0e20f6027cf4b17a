use crate::{
    ApiResponse, CollectionCenterId, HospitalId, OrderId, RiderId, requests,
    responses,
};
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::{Serialize, de::DeserializeOwned};

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

const OPERATIONS: &str = "api/operations";

/// An API client for interfacing with the operations backend.
///
/// The bearer token is carried by the client itself rather than read from
/// any global, so every request made through a given client is
/// authenticated the same way.
#[derive(Clone)]
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
    token: Option<SecretString>,
}

impl APIClient {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into().trim_end_matches('/').to_string(),
            inner_client: reqwest::Client::new(),
            token: None,
        }
    }

    /// Returns a copy of this client that authenticates with `token`.
    pub fn with_token(mut self, token: SecretString) -> Self {
        self.token = Some(token);
        self
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/{path}", &self.address)
    }

    fn authorize(
        &self,
        request: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token.expose_secret()),
            None => request,
        }
    }

    async fn get(&self, path: &str) -> ReqwestResult {
        tracing::debug!(path, "GET");
        let request = self.inner_client.get(self.format_url(path));
        self.authorize(request).send().await
    }

    async fn get_with_query(
        &self,
        path: &str,
        query: &impl Serialize,
    ) -> ReqwestResult {
        tracing::debug!(path, "GET");
        let request = self.inner_client.get(self.format_url(path)).query(query);
        self.authorize(request).send().await
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        tracing::debug!(path, "POST");
        let request = self.inner_client.post(self.format_url(path)).json(body);
        self.authorize(request).send().await
    }

    async fn empty_post(&self, path: &str) -> ReqwestResult {
        tracing::debug!(path, "POST");
        let request = self.inner_client.post(self.format_url(path));
        self.authorize(request).send().await
    }

    async fn patch(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        tracing::debug!(path, "PATCH");
        let request =
            self.inner_client.patch(self.format_url(path)).json(body);
        self.authorize(request).send().await
    }
}

/// Methods on the operations API
impl APIClient {
    /// Profile of the operator the token belongs to.
    pub async fn operator_profile(
        &self,
    ) -> Result<responses::OperatorProfile, ClientError> {
        let response = self.get("api/auth/me").await?;
        ok_envelope(response).await
    }

    pub async fn dashboard_stats(
        &self,
    ) -> Result<responses::DashboardStats, ClientError> {
        let response =
            self.get(&format!("{OPERATIONS}/dashboard/stats")).await?;
        ok_envelope(response).await
    }

    pub async fn list_hospitals(
        &self,
        filter: &requests::ListFilter,
    ) -> Result<Vec<responses::Hospital>, ClientError> {
        let response = self
            .get_with_query(&format!("{OPERATIONS}/hospitals"), filter)
            .await?;
        ok_envelope(response).await
    }

    pub async fn get_hospital(
        &self,
        hospital_id: &HospitalId,
    ) -> Result<responses::Hospital, ClientError> {
        let response = self
            .get(&format!("{OPERATIONS}/hospitals/{hospital_id}"))
            .await?;
        ok_envelope(response).await
    }

    pub async fn approve_hospital(
        &self,
        hospital_id: &HospitalId,
    ) -> Result<responses::Hospital, ClientError> {
        let response = self
            .empty_post(&format!("{OPERATIONS}/hospitals/{hospital_id}/approve"))
            .await?;
        ok_envelope(response).await
    }

    pub async fn reject_hospital(
        &self,
        hospital_id: &HospitalId,
        details: &requests::RejectRequest,
    ) -> Result<responses::Hospital, ClientError> {
        let response = self
            .post(
                &format!("{OPERATIONS}/hospitals/{hospital_id}/reject"),
                details,
            )
            .await?;
        ok_envelope(response).await
    }

    pub async fn update_hospital_status(
        &self,
        hospital_id: &HospitalId,
        details: &requests::ApprovalStatusUpdate,
    ) -> Result<responses::Hospital, ClientError> {
        let response = self
            .patch(
                &format!("{OPERATIONS}/hospitals/{hospital_id}/status"),
                details,
            )
            .await?;
        ok_envelope(response).await
    }

    pub async fn toggle_hospital_feature(
        &self,
        hospital_id: &HospitalId,
        details: &requests::FeatureToggle,
    ) -> Result<responses::Hospital, ClientError> {
        let response = self
            .patch(
                &format!("{OPERATIONS}/hospitals/{hospital_id}/features"),
                details,
            )
            .await?;
        ok_envelope(response).await
    }

    pub async fn list_collection_centers(
        &self,
        filter: &requests::ListFilter,
    ) -> Result<Vec<responses::CollectionCenter>, ClientError> {
        let response = self
            .get_with_query(&format!("{OPERATIONS}/collection-centers"), filter)
            .await?;
        ok_envelope(response).await
    }

    pub async fn get_collection_center(
        &self,
        center_id: &CollectionCenterId,
    ) -> Result<responses::CollectionCenter, ClientError> {
        let response = self
            .get(&format!("{OPERATIONS}/collection-centers/{center_id}"))
            .await?;
        ok_envelope(response).await
    }

    pub async fn approve_collection_center(
        &self,
        center_id: &CollectionCenterId,
    ) -> Result<responses::CollectionCenter, ClientError> {
        let response = self
            .empty_post(&format!(
                "{OPERATIONS}/collection-centers/{center_id}/approve"
            ))
            .await?;
        ok_envelope(response).await
    }

    pub async fn reject_collection_center(
        &self,
        center_id: &CollectionCenterId,
        details: &requests::RejectRequest,
    ) -> Result<responses::CollectionCenter, ClientError> {
        let response = self
            .post(
                &format!("{OPERATIONS}/collection-centers/{center_id}/reject"),
                details,
            )
            .await?;
        ok_envelope(response).await
    }

    pub async fn update_collection_center_status(
        &self,
        center_id: &CollectionCenterId,
        details: &requests::ApprovalStatusUpdate,
    ) -> Result<responses::CollectionCenter, ClientError> {
        let response = self
            .patch(
                &format!("{OPERATIONS}/collection-centers/{center_id}/status"),
                details,
            )
            .await?;
        ok_envelope(response).await
    }

    pub async fn list_riders(
        &self,
        filter: &requests::ListFilter,
    ) -> Result<Vec<responses::Rider>, ClientError> {
        let response = self
            .get_with_query(&format!("{OPERATIONS}/riders"), filter)
            .await?;
        ok_envelope(response).await
    }

    pub async fn get_rider(
        &self,
        rider_id: &RiderId,
    ) -> Result<responses::Rider, ClientError> {
        let response =
            self.get(&format!("{OPERATIONS}/riders/{rider_id}")).await?;
        ok_envelope(response).await
    }

    pub async fn approve_rider(
        &self,
        rider_id: &RiderId,
    ) -> Result<responses::Rider, ClientError> {
        let response = self
            .empty_post(&format!("{OPERATIONS}/riders/{rider_id}/approve"))
            .await?;
        ok_envelope(response).await
    }

    pub async fn reject_rider(
        &self,
        rider_id: &RiderId,
        details: &requests::RejectRequest,
    ) -> Result<responses::Rider, ClientError> {
        let response = self
            .post(&format!("{OPERATIONS}/riders/{rider_id}/reject"), details)
            .await?;
        ok_envelope(response).await
    }

    pub async fn update_rider_status(
        &self,
        rider_id: &RiderId,
        details: &requests::RiderStatusUpdate,
    ) -> Result<responses::Rider, ClientError> {
        let response = self
            .patch(&format!("{OPERATIONS}/riders/{rider_id}/status"), details)
            .await?;
        ok_envelope(response).await
    }

    /// One page of orders matching `query`.
    pub async fn list_orders(
        &self,
        query: &requests::OrderQuery,
    ) -> Result<responses::OrdersPage, ClientError> {
        let response = self
            .get_with_query(&format!("{OPERATIONS}/orders"), query)
            .await?;
        ok_envelope(response).await
    }

    pub async fn get_order(
        &self,
        order_id: &OrderId,
    ) -> Result<responses::Order, ClientError> {
        let response =
            self.get(&format!("{OPERATIONS}/orders/{order_id}")).await?;
        ok_envelope(response).await
    }

    pub async fn update_order_status(
        &self,
        order_id: &OrderId,
        details: &requests::OrderStatusUpdate,
    ) -> Result<responses::Order, ClientError> {
        let response = self
            .patch(&format!("{OPERATIONS}/orders/{order_id}/status"), details)
            .await?;
        ok_envelope(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// A non-success HTTP status, containing the message to display.
    #[error("{1}")]
    Api(StatusCode, String),
    /// The server answered with `success: false`.
    #[error("{0}")]
    Rejected(String),
    #[error("The server reported success but sent no data.")]
    MissingData,
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
    #[error("Unexpected response from the server.")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// Whether the token was refused and the operator must sign in again.
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            ClientError::Api(StatusCode::UNAUTHORIZED, _)
                | ClientError::Api(StatusCode::FORBIDDEN, _)
        )
    }
}

/// Decode an enveloped response into the desired type, or return an
/// appropriate error.
pub async fn ok_envelope<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();
    let body = response.text().await?;
    decode_envelope(status, &body)
}

/// Body handling shared by every endpoint, split out from the network
/// call so it can be exercised directly.
pub fn decode_envelope<T: DeserializeOwned>(
    status: StatusCode,
    body: &str,
) -> Result<T, ClientError> {
    if !status.is_success() {
        let message = serde_json::from_str::<ApiResponse<serde_json::Value>>(
            body,
        )
        .ok()
        .and_then(|envelope| envelope.error)
        .filter(|message| !message.trim().is_empty())
        .or_else(|| (!body.trim().is_empty()).then(|| body.to_string()))
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        });
        tracing::warn!(%status, %message, "request failed");
        return Err(ClientError::Api(status, message));
    }
    serde_json::from_str::<ApiResponse<T>>(body)?.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_yields_data() {
        let value: Vec<u32> =
            decode_envelope(StatusCode::OK, r#"{"success":true,"data":[1,2]}"#)
                .unwrap();
        assert_eq!(value, vec![1, 2]);
    }

    #[test]
    fn failed_envelope_carries_server_message() {
        let err = decode_envelope::<u32>(
            StatusCode::OK,
            r#"{"success":false,"error":"Hospital already approved"}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ClientError::Rejected(_)));
        assert_eq!(err.to_string(), "Hospital already approved");
    }

    #[test]
    fn failed_envelope_without_message_uses_default() {
        let err =
            decode_envelope::<u32>(StatusCode::OK, r#"{"success":false}"#)
                .unwrap_err();
        assert_eq!(
            err.to_string(),
            responses::DEFAULT_FAILURE_MESSAGE.to_string()
        );
    }

    #[test]
    fn success_without_data_is_an_error() {
        let err =
            decode_envelope::<u32>(StatusCode::OK, r#"{"success":true}"#)
                .unwrap_err();
        assert!(matches!(err, ClientError::MissingData));
    }

    #[test]
    fn http_error_prefers_envelope_message() {
        let err = decode_envelope::<u32>(
            StatusCode::UNAUTHORIZED,
            r#"{"success":false,"error":"Token expired"}"#,
        )
        .unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "Token expired");
    }

    #[test]
    fn http_error_falls_back_to_body_then_reason() {
        let err =
            decode_envelope::<u32>(StatusCode::BAD_GATEWAY, "upstream down")
                .unwrap_err();
        assert_eq!(err.to_string(), "upstream down");

        let err = decode_envelope::<u32>(StatusCode::NOT_FOUND, "")
            .unwrap_err();
        assert_eq!(err.to_string(), "Not Found");
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let err = decode_envelope::<u32>(StatusCode::OK, "<html>")
            .unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[test]
    fn address_trailing_slash_is_ignored() {
        let client = APIClient::new("http://localhost:8000/");
        assert_eq!(
            client.format_url("api/auth/me"),
            "http://localhost:8000/api/auth/me"
        );
        assert!(!client.has_token());
    }
}
