//! Application router configuration.

use axum::{
    http::StatusCode,
    routing::{delete, get, put},
    Router,
};

use crate::{
    budget::{
        get_budget_overview_endpoint, replace_budget_goals_endpoint,
        update_category_limit_endpoint, update_monthly_budget_endpoint,
    },
    dashboard::{get_category_breakdown_endpoint, get_daily_trend_endpoint, get_summary_endpoint},
    endpoints,
    report::{export_report_endpoint, get_report_endpoint},
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, list_transactions_endpoint,
    },
    AppState,
};

/// Return a router with all the app's routes.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .route(endpoints::COFFEE, get(|| async { StatusCode::IM_A_TEAPOT }))
        .route(
            endpoints::TRANSACTIONS,
            get(list_transactions_endpoint).post(create_transaction_endpoint),
        )
        .route(endpoints::TRANSACTION, delete(delete_transaction_endpoint))
        .route(endpoints::SUMMARY, get(get_summary_endpoint))
        .route(
            endpoints::SUMMARY_CATEGORIES,
            get(get_category_breakdown_endpoint),
        )
        .route(endpoints::SUMMARY_DAILY, get(get_daily_trend_endpoint))
        .route(
            endpoints::BUDGETS,
            get(get_budget_overview_endpoint).put(replace_budget_goals_endpoint),
        )
        .route(
            endpoints::BUDGET_CATEGORY,
            put(update_category_limit_endpoint),
        )
        .route(endpoints::MONTHLY_BUDGET, put(update_monthly_budget_endpoint))
        .route(endpoints::REPORT, get(get_report_endpoint))
        .route(endpoints::REPORT_EXPORT, get(export_report_endpoint))
}
