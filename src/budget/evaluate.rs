//! Compares aggregated spending against budget goals.
//!
//! Like the aggregation functions, everything here is pure and recomputed
//! on every read. The alert tier thresholds are shared by every consumer:
//! a utilization at or below 80% is `ok`, above 80% up to 100% is
//! `warning`, and anything above 100% is `over`.

use serde::Serialize;

use crate::{
    dashboard::aggregation::{CategoryAggregate, Totals},
    stores::BudgetGoalStore,
};

/// The global utilization above which the budget alert fires.
const BUDGET_ALERT_THRESHOLD: f64 = 90.0;

/// Classifies a budget utilization percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertTier {
    /// At or below 80% of the limit.
    Ok,
    /// Above 80% and at most 100% of the limit.
    Warning,
    /// Above 100% of the limit.
    Over,
}

impl AlertTier {
    /// Classify a utilization percentage.
    ///
    /// `None` (no budget set) classifies as [AlertTier::Ok]: without a
    /// limit there is nothing to exceed.
    pub fn from_used_percent(used_percent: Option<f64>) -> Self {
        match used_percent {
            None => AlertTier::Ok,
            Some(percent) if percent > 100.0 => AlertTier::Over,
            Some(percent) if percent > 80.0 => AlertTier::Warning,
            Some(_) => AlertTier::Ok,
        }
    }
}

/// The headline figures for one reporting period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySummary {
    /// Sum of income amounts.
    pub income: f64,
    /// Sum of the absolute values of expense amounts.
    pub expenses: f64,
    /// `income - expenses`.
    pub net: f64,
    /// Percentage of the global monthly budget spent, `null` when no
    /// budget is set.
    pub budget_used_percent: Option<f64>,
}

/// One category's spending measured against its goal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBudgetStatus {
    /// The expense category.
    pub category: String,
    /// The absolute amount spent in the category this period.
    pub spent: f64,
    /// The category's spending limit.
    pub limit: f64,
    /// `spent / limit * 100`, `null` when the limit is zero.
    pub used_percent: Option<f64>,
    /// Classification of `used_percent`.
    pub tier: AlertTier,
}

/// Global and per-category budget utilization for one reporting period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetOverview {
    /// The global monthly spending ceiling.
    pub monthly_budget: f64,
    /// Total spent this period.
    pub spent: f64,
    /// `monthly_budget - spent`. May be negative.
    pub remaining: f64,
    /// Percentage of the global budget spent, `null` when no budget is set.
    pub used_percent: Option<f64>,
    /// Classification of the global utilization.
    pub tier: AlertTier,
    /// Per-category statuses, one per configured goal, sorted by category
    /// name.
    pub categories: Vec<CategoryBudgetStatus>,
}

/// The percentage of `budget` consumed by `expenses`.
///
/// Returns `None` when no budget is set (`budget <= 0`); this is the "no
/// budget" sentinel, never a division by zero.
pub fn budget_used_percent(expenses: f64, budget: f64) -> Option<f64> {
    if budget <= 0.0 {
        return None;
    }

    Some(expenses / budget * 100.0)
}

/// The user-facing budget alert, if the global utilization warrants one.
///
/// Fires whenever more than 90% of the global monthly budget is used,
/// independent of per-category tiers. Re-evaluated on every read; the
/// alert is a signal, not stored state.
pub fn budget_alert(used_percent: Option<f64>) -> Option<String> {
    let percent = used_percent?;

    if percent > BUDGET_ALERT_THRESHOLD {
        Some(format!(
            "You've used {percent:.1}% of your monthly budget."
        ))
    } else {
        None
    }
}

/// The share of income kept as net savings, as a percentage.
///
/// Zero when there is no income to measure against.
pub fn savings_rate(totals: &Totals) -> f64 {
    if totals.income <= 0.0 {
        return 0.0;
    }

    totals.net / totals.income * 100.0
}

/// Combine period totals with the global budget into a [MonthlySummary].
pub fn monthly_summary(totals: &Totals, monthly_budget: f64) -> MonthlySummary {
    MonthlySummary {
        income: totals.income,
        expenses: totals.expenses,
        net: totals.net,
        budget_used_percent: budget_used_percent(totals.expenses, monthly_budget),
    }
}

/// Measure a period's spending against the configured goals.
///
/// Every configured goal gets a status, including categories with no
/// spending this period. Spending in categories without a goal contributes
/// to the global figures but gets no per-category row. The goal map has no
/// meaningful order, so rows are sorted by category name.
pub fn evaluate(breakdown: &[CategoryAggregate], goals: &BudgetGoalStore) -> BudgetOverview {
    let spent: f64 = breakdown.iter().map(|aggregate| aggregate.total).sum();
    let monthly_budget = goals.monthly_budget();
    let used_percent = budget_used_percent(spent, monthly_budget);

    let mut categories: Vec<CategoryBudgetStatus> = goals
        .limits()
        .iter()
        .map(|(category, &limit)| {
            let spent = breakdown
                .iter()
                .find(|aggregate| &aggregate.category == category)
                .map(|aggregate| aggregate.total)
                .unwrap_or(0.0);
            let used_percent = budget_used_percent(spent, limit);

            CategoryBudgetStatus {
                category: category.clone(),
                spent,
                limit,
                used_percent,
                tier: AlertTier::from_used_percent(used_percent),
            }
        })
        .collect();

    categories.sort_by(|a, b| a.category.cmp(&b.category));

    BudgetOverview {
        monthly_budget,
        spent,
        remaining: monthly_budget - spent,
        used_percent,
        tier: AlertTier::from_used_percent(used_percent),
        categories,
    }
}
