//! The in-memory store for budget goals.

use std::collections::HashMap;

use crate::Error;

/// Holds the per-category spending limits and the global monthly budget.
///
/// Limits are mutated wholesale: a caller replaces one category's limit or
/// the entire map, never increments in place. The global monthly budget is
/// independent of the per-category sum; the two are not required to
/// reconcile.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetGoalStore {
    limits: HashMap<String, f64>,
    monthly_budget: f64,
}

impl BudgetGoalStore {
    /// Create a store with no goals set.
    pub fn new() -> Self {
        Self {
            limits: HashMap::new(),
            monthly_budget: 0.0,
        }
    }

    /// Create a store seeded with the default goal set for the known
    /// expense categories and a global monthly budget of 3000.
    pub fn with_defaults() -> Self {
        let limits = [
            ("Food", 400.0),
            ("Rent", 800.0),
            ("Bills", 200.0),
            ("Transport", 150.0),
            ("Entertainment", 100.0),
            ("Shopping", 200.0),
            ("Healthcare", 100.0),
        ]
        .into_iter()
        .map(|(category, limit)| (category.to_string(), limit))
        .collect();

        Self {
            limits,
            monthly_budget: 3000.0,
        }
    }

    /// The per-category spending limits.
    pub fn limits(&self) -> &HashMap<String, f64> {
        &self.limits
    }

    /// The global monthly spending ceiling. Zero means no budget is set.
    pub fn monthly_budget(&self) -> f64 {
        self.monthly_budget
    }

    /// Replace the limit for one category.
    ///
    /// # Errors
    /// Returns [Error::Validation] if `limit` is negative or not finite, or
    /// if `category` is empty.
    pub fn set_limit(&mut self, category: &str, limit: f64) -> Result<(), Error> {
        if category.trim().is_empty() {
            return Err(Error::Validation("category must not be empty".to_string()));
        }

        validate_limit(limit)?;
        self.limits.insert(category.to_string(), limit);

        Ok(())
    }

    /// Replace the entire per-category limit map.
    ///
    /// # Errors
    /// Returns [Error::Validation] if any limit is negative or not finite;
    /// the stored map is unchanged in that case.
    pub fn replace_limits(&mut self, limits: HashMap<String, f64>) -> Result<(), Error> {
        for (category, limit) in &limits {
            if category.trim().is_empty() {
                return Err(Error::Validation("category must not be empty".to_string()));
            }

            validate_limit(*limit)?;
        }

        self.limits = limits;

        Ok(())
    }

    /// Replace the global monthly budget.
    ///
    /// # Errors
    /// Returns [Error::Validation] if `monthly_budget` is negative or not
    /// finite.
    pub fn set_monthly_budget(&mut self, monthly_budget: f64) -> Result<(), Error> {
        validate_limit(monthly_budget)?;
        self.monthly_budget = monthly_budget;

        Ok(())
    }
}

impl Default for BudgetGoalStore {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_limit(limit: f64) -> Result<(), Error> {
    if !limit.is_finite() || limit < 0.0 {
        return Err(Error::Validation(format!(
            "a budget limit must be a non-negative number, got {limit}"
        )));
    }

    Ok(())
}
