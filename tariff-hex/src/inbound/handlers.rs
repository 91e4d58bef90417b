//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use serde::de::DeserializeOwned;
use tariff_types::{
    AccountResponse, AppError, NotificationMessage, SearchQuery, SearchResponse,
    TariffAdjustmentPayload, TariffAdjustmentResponse,
};

use crate::service::{AccountService, ReportService, SearchService};

/// Application state shared across handlers.
pub struct AppState {
    pub accounts: AccountService,
    pub search: Arc<SearchService>,
    pub reports: ReportService,
}

impl AppState {
    /// Wires the use cases; the report use case shares the search service.
    pub fn new(accounts: AccountService, search: Arc<SearchService>) -> Self {
        let reports = ReportService::new(Arc::clone(&search));
        Self {
            accounts,
            search,
            reports,
        }
    }
}

/// Error response with a JSON body `{"error": ..., "code": ...}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => ApiError::bad_request(msg),
            AppError::Upstream(e) => ApiError::internal(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "error": self.message,
            "code": self.status.as_u16()
        });

        (self.status, Json(body)).into_response()
    }
}

fn invalid_body<E: std::fmt::Display>(rejection: E) -> ApiError {
    tracing::debug!(%rejection, "rejected request payload");
    ApiError::bad_request("invalid body")
}

/// Decodes a JSON body whatever its `Content-Type` header says, or without one.
fn json_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(invalid_body)
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

// ─────────────────────────────────────────────────────────────────────────────
// Accounts
// ─────────────────────────────────────────────────────────────────────────────

/// Get account by ID.
#[tracing::instrument(skip(state), fields(account_id = %id))]
pub async fn get_account(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let account = state.accounts.get_account(&id).await?;
    Ok(Json(AccountResponse::from(account)))
}

/// Submit a tariff adjustment. Answers before the downstream calls finish.
#[tracing::instrument(skip(state, body), fields(account_id = %id))]
pub async fn create_tariff_adjustment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let payload: TariffAdjustmentPayload = json_body(&body)?;

    state
        .accounts
        .send_tariff_adjustment_request(&id, payload.new_fee)
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    Ok(StatusCode::NO_CONTENT)
}

/// List tariff adjustments for an account.
#[tracing::instrument(skip(state), fields(account_id = %id))]
pub async fn get_tariff_adjustments(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let adjustments = state.accounts.get_tariff_adjustments(&id).await?;
    let response: Vec<TariffAdjustmentResponse> =
        adjustments.into_iter().map(Into::into).collect();
    Ok(Json(response))
}

/// Webhook called by the adjustment approval flow.
#[tracing::instrument(skip(state, body))]
pub async fn notifications(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let msg: NotificationMessage = json_body(&body)?;
    tracing::info!(
        account_id = %msg.account_id,
        transaction_id = %msg.transaction_id,
        status = %msg.status,
        "adjustment flow notification received"
    );

    let applied = state
        .accounts
        .update_fee(&msg.account_id)
        .await
        .map_err(|e| match e {
            AppError::BadRequest(reason) => ApiError::bad_request(reason),
            AppError::Upstream(e) => ApiError::internal(format!("update fee failed: {e}")),
        })?;

    if !msg.transaction_id.is_empty() && applied.transaction_id.as_str() != msg.transaction_id {
        tracing::warn!(
            notified = %msg.transaction_id,
            applied = %applied.transaction_id,
            "applied adjustment differs from the notified one"
        );
    }

    Ok(StatusCode::ACCEPTED)
}

// ─────────────────────────────────────────────────────────────────────────────
// Search & report
// ─────────────────────────────────────────────────────────────────────────────

/// Search accounts by term.
#[tracing::instrument(skip(state, query))]
pub async fn search(
    State(state): State<Arc<AppState>>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query.map_err(invalid_body)?;
    let accounts = state.search.search_accounts_by_term(&query.term).await?;
    Ok(Json(SearchResponse::from(accounts)))
}

/// Aggregated account report.
#[tracing::instrument(skip(state))]
pub async fn get_report(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ApiError> {
    let report = state.reports.get_report().await.map_err(|e| {
        tracing::error!(error = %e, "get report failed");
        ApiError::internal("get report failed")
    })?;
    Ok(Json(report))
}
