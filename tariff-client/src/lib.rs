//! # Tariff Client SDK
//!
//! A typed Rust client for the tariff adjustment BFF.

use reqwest::Client;
use serde::de::DeserializeOwned;

use tariff_types::{
    AccountResponse, Fee, NotificationMessage, Report, SearchResponse, TariffAdjustmentPayload,
    TariffAdjustmentResponse,
};

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Tariff BFF API client.
pub struct TariffClient {
    base_url: String,
    http: Client,
}

impl TariffClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Gets an account by ID.
    pub async fn get_account(&self, id: &str) -> Result<AccountResponse, ClientError> {
        self.get(&format!("/v1/accounts/{}", urlencoding::encode(id)))
            .await
    }

    /// Lists the tariff adjustments of an account.
    pub async fn list_adjustments(
        &self,
        id: &str,
    ) -> Result<Vec<TariffAdjustmentResponse>, ClientError> {
        self.get(&format!(
            "/v1/accounts/{}/tariff-adjustments",
            urlencoding::encode(id)
        ))
        .await
    }

    /// Submits a tariff adjustment. The server accepts it without waiting
    /// for the downstream systems.
    pub async fn submit_adjustment(&self, id: &str, new_fee: Fee) -> Result<(), ClientError> {
        let body = TariffAdjustmentPayload { new_fee };
        let resp = self
            .http
            .post(format!(
                "{}/v1/accounts/{}/tariff-adjustments",
                self.base_url,
                urlencoding::encode(id)
            ))
            .json(&body)
            .send()
            .await?;
        self.expect_success(resp).await
    }

    /// Sends an approval flow notification, as the flow itself would.
    pub async fn notify(&self, message: &NotificationMessage) -> Result<(), ClientError> {
        let resp = self
            .http
            .post(format!("{}/v1/accounts/notifications", self.base_url))
            .json(message)
            .send()
            .await?;
        self.expect_success(resp).await
    }

    /// Searches accounts; an empty term matches everything.
    pub async fn search(&self, term: &str) -> Result<SearchResponse, ClientError> {
        let resp = self
            .http
            .get(format!("{}/v1/search", self.base_url))
            .query(&[("term", term)])
            .send()
            .await?;
        self.handle_response(resp).await
    }

    /// Fetches the account report.
    pub async fn report(&self) -> Result<Report, ClientError> {
        self.get("/v1/report").await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            Err(api_error(resp).await)
        }
    }

    async fn expect_success(&self, resp: reqwest::Response) -> Result<(), ClientError> {
        if resp.status().is_success() {
            Ok(())
        } else {
            Err(api_error(resp).await)
        }
    }
}

async fn api_error(resp: reqwest::Response) -> ClientError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
        .unwrap_or(body);
    ClientError::Api {
        status: status.as_u16(),
        message,
    }
}
