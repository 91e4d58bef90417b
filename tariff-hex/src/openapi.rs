//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use tariff_types::domain::{Account, AccountId, Fee, Report, TransactionId};
use tariff_types::dto::{
    AccountResponse, NotificationMessage, SearchQuery, SearchResponse, TariffAdjustmentPayload,
    TariffAdjustmentResponse,
};
use utoipa::OpenApi;

// Stand-ins for the real handlers, used only for path generation.

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Get account by ID
#[utoipa::path(
    get,
    path = "/v1/accounts/{id}",
    tag = "accounts",
    params(
        ("id" = AccountId, Path, description = "Account ID")
    ),
    responses(
        (status = 200, description = "Account details", body = AccountResponse),
        (status = 400, description = "Missing account id"),
        (status = 500, description = "Accounts API failure")
    )
)]
async fn get_account() {}

/// Submit a tariff adjustment
///
/// Answers as soon as the request is accepted; storing the adjustment and
/// starting the approval flow happen in the background.
#[utoipa::path(
    post,
    path = "/v1/accounts/{id}/tariff-adjustments",
    tag = "tariff-adjustments",
    params(
        ("id" = AccountId, Path, description = "Account ID")
    ),
    request_body = TariffAdjustmentPayload,
    responses(
        (status = 204, description = "Adjustment accepted"),
        (status = 400, description = "Invalid body or missing account id")
    )
)]
async fn create_tariff_adjustment() {}

/// List tariff adjustments of an account
#[utoipa::path(
    get,
    path = "/v1/accounts/{id}/tariff-adjustments",
    tag = "tariff-adjustments",
    params(
        ("id" = AccountId, Path, description = "Account ID")
    ),
    responses(
        (status = 200, description = "Adjustments in downstream order", body = Vec<TariffAdjustmentResponse>),
        (status = 400, description = "Missing account id"),
        (status = 500, description = "Accounts API failure")
    )
)]
async fn get_tariff_adjustments() {}

/// Approval flow callback
///
/// Applies the account's most recent adjustment to its monthly fee.
#[utoipa::path(
    post,
    path = "/v1/accounts/notifications",
    tag = "tariff-adjustments",
    request_body = NotificationMessage,
    responses(
        (status = 202, description = "Fee updated"),
        (status = 400, description = "Invalid body or missing account id"),
        (status = 500, description = "Update fee failed")
    )
)]
async fn notifications() {}

/// Search accounts
#[utoipa::path(
    get,
    path = "/v1/search",
    tag = "search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching accounts", body = SearchResponse),
        (status = 500, description = "Search engine failure")
    )
)]
async fn search() {}

/// Account report
#[utoipa::path(
    get,
    path = "/v1/report",
    tag = "report",
    responses(
        (status = 200, description = "Totals and the most expensive accounts", body = Report),
        (status = 500, description = "Get report failed")
    )
)]
async fn get_report() {}

/// OpenAPI documentation for the tariff adjustment BFF.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tariff Adjustment BFF API",
        version = "1.0.0",
        description = "Backend-for-frontend over the fintech accounts API: account lookup, tariff adjustments with an asynchronous approval flow, search and reporting.",
    ),
    paths(
        health,
        get_account,
        create_tariff_adjustment,
        get_tariff_adjustments,
        notifications,
        search,
        get_report,
    ),
    components(
        schemas(
            Account,
            AccountId,
            AccountResponse,
            Fee,
            NotificationMessage,
            Report,
            SearchResponse,
            TariffAdjustmentPayload,
            TariffAdjustmentResponse,
            TransactionId,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "accounts", description = "Account lookup"),
        (name = "tariff-adjustments", description = "Fee change requests and approval callbacks"),
        (name = "search", description = "Account search"),
        (name = "report", description = "Aggregated account report"),
    )
)]
pub struct ApiDoc;
