//! The monthly financial report and its CSV export.
//!
//! The report is the view the reporting page renders: the headline
//! summary, the savings rate, and the category breakdown sorted largest
//! first so the top category can be called out.

use axum::{
    extract::{Query, State},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::{
    auth::Claims,
    budget::{monthly_summary, savings_rate, MonthlySummary},
    dashboard::aggregation::{self, CategoryAggregate},
    period::PeriodQuery,
    AppState, Error,
};

/// The figures for one period's financial report.
#[derive(Debug, Serialize)]
pub struct Report {
    #[serde(flatten)]
    summary: MonthlySummary,
    /// `net / income` as a percentage, 0 when there was no income.
    savings_rate: f64,
    /// The category with the most spending, if there was any.
    top_category: Option<CategoryAggregate>,
    /// The expense breakdown, sorted descending by total.
    categories: Vec<CategoryAggregate>,
}

/// A route handler for the monthly financial report.
pub async fn get_report_endpoint(
    State(state): State<AppState>,
    _claims: Claims,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<Report>, Error> {
    let period = query.period()?;
    let snapshot = state.ledger().lock().unwrap().list();
    let in_period = aggregation::filter_by_period(&snapshot, period);
    let totals = aggregation::totals(&in_period);
    let monthly_budget = state.budget_goals().lock().unwrap().monthly_budget();

    let mut categories = aggregation::category_breakdown(&in_period);
    aggregation::sort_by_total_descending(&mut categories);

    Ok(Json(Report {
        summary: monthly_summary(&totals, monthly_budget),
        savings_rate: savings_rate(&totals),
        top_category: aggregation::top_category(&categories).cloned(),
        categories,
    }))
}

/// A route handler exporting the category breakdown as CSV.
pub async fn export_report_endpoint(
    State(state): State<AppState>,
    _claims: Claims,
    Query(query): Query<PeriodQuery>,
) -> Result<Response, Error> {
    let period = query.period()?;
    let snapshot = state.ledger().lock().unwrap().list();
    let in_period = aggregation::filter_by_period(&snapshot, period);

    let mut categories = aggregation::category_breakdown(&in_period);
    aggregation::sort_by_total_descending(&mut categories);

    Ok(([(CONTENT_TYPE, "text/csv")], format_csv(&categories)).into_response())
}

/// Format category aggregates as CSV with a `Category,Amount,Type` header.
///
/// Fields are joined with bare commas. A comma inside a category name
/// would break the row; callers are expected to keep category labels
/// comma-free.
fn format_csv(aggregates: &[CategoryAggregate]) -> String {
    let mut rows = vec!["Category,Amount,Type".to_string()];

    rows.extend(
        aggregates
            .iter()
            .map(|aggregate| format!("{},{},Expense", aggregate.category, aggregate.total)),
    );

    let mut csv = rows.join("\n");
    csv.push('\n');

    csv
}
