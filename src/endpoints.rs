//! The API endpoint URIs.

/// The route to create (POST) and list (GET) transactions.
pub const TRANSACTIONS: &str = "/api/transactions";
/// The route to delete a single transaction.
pub const TRANSACTION: &str = "/api/transactions/:transaction_id";
/// The route for the monthly summary.
pub const SUMMARY: &str = "/api/summary";
/// The route for the per-category expense breakdown.
pub const SUMMARY_CATEGORIES: &str = "/api/summary/categories";
/// The route for the daily spending trend.
pub const SUMMARY_DAILY: &str = "/api/summary/daily";
/// The route to view budget utilization (GET) and replace the goal map (PUT).
pub const BUDGETS: &str = "/api/budgets";
/// The route to replace a single category's limit.
pub const BUDGET_CATEGORY: &str = "/api/budgets/:category";
/// The route to replace the global monthly budget.
pub const MONTHLY_BUDGET: &str = "/api/budget";
/// The route for the monthly financial report.
pub const REPORT: &str = "/api/report";
/// The route to export the report's category breakdown as CSV.
pub const REPORT_EXPORT: &str = "/api/report/export";
/// The route to request a cup of coffee (experimental).
pub const COFFEE: &str = "/api/coffee";
