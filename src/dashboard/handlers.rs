//! Route handlers for the dashboard views.
//!
//! Each handler takes a snapshot of the ledger, scopes it to the requested
//! period and recomputes the view from scratch. Nothing is cached between
//! requests.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;

use crate::{
    auth::Claims,
    budget::{budget_alert, monthly_summary, MonthlySummary},
    dashboard::aggregation::{self, CategoryAggregate, DailyAggregate},
    period::PeriodQuery,
    AppState, Error,
};

/// The monthly summary plus the budget alert when one fired.
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    #[serde(flatten)]
    summary: MonthlySummary,
    /// Present when more than 90% of the global monthly budget is used.
    budget_alert: Option<String>,
}

/// A route handler for the monthly summary.
pub async fn get_summary_endpoint(
    State(state): State<AppState>,
    _claims: Claims,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<SummaryResponse>, Error> {
    let period = query.period()?;
    let snapshot = state.ledger().lock().unwrap().list();
    let in_period = aggregation::filter_by_period(&snapshot, period);
    let totals = aggregation::totals(&in_period);
    let monthly_budget = state.budget_goals().lock().unwrap().monthly_budget();

    let summary = monthly_summary(&totals, monthly_budget);
    let budget_alert = budget_alert(summary.budget_used_percent);

    Ok(Json(SummaryResponse {
        summary,
        budget_alert,
    }))
}

/// A route handler for the per-category expense breakdown.
///
/// Categories come back in first-occurrence order, which the dashboard's
/// pie chart feeds from directly.
pub async fn get_category_breakdown_endpoint(
    State(state): State<AppState>,
    _claims: Claims,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<Vec<CategoryAggregate>>, Error> {
    let period = query.period()?;
    let snapshot = state.ledger().lock().unwrap().list();
    let in_period = aggregation::filter_by_period(&snapshot, period);

    Ok(Json(aggregation::category_breakdown(&in_period)))
}

/// A route handler for the daily spending trend.
pub async fn get_daily_trend_endpoint(
    State(state): State<AppState>,
    _claims: Claims,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<Vec<DailyAggregate>>, Error> {
    let period = query.period()?;
    let snapshot = state.ledger().lock().unwrap().list();
    let in_period = aggregation::filter_by_period(&snapshot, period);

    Ok(Json(aggregation::daily_trend(&in_period)))
}
