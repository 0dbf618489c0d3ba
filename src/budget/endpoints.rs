//! Route handlers for budget utilization and goal mutations.

use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{
    auth::Claims,
    budget::evaluate::{self, BudgetOverview},
    dashboard::aggregation,
    period::PeriodQuery,
    stores::BudgetGoalStore,
    AppState, Error,
};

/// The stored goals, as returned by the mutation endpoints.
#[derive(Debug, Serialize)]
pub struct BudgetGoalsResponse {
    limits: HashMap<String, f64>,
    monthly_budget: f64,
}

impl BudgetGoalsResponse {
    fn from_store(store: &BudgetGoalStore) -> Self {
        Self {
            limits: store.limits().clone(),
            monthly_budget: store.monthly_budget(),
        }
    }
}

/// The payload for replacing one category's limit.
#[derive(Debug, Deserialize)]
pub struct UpdateLimit {
    limit: f64,
}

/// The payload for replacing the global monthly budget.
#[derive(Debug, Deserialize)]
pub struct UpdateMonthlyBudget {
    monthly_budget: f64,
}

/// A route handler for the budget utilization view: the period's spending
/// measured against every configured goal plus the global ceiling.
pub async fn get_budget_overview_endpoint(
    State(state): State<AppState>,
    _claims: Claims,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<BudgetOverview>, Error> {
    let period = query.period()?;
    let snapshot = state.ledger().lock().unwrap().list();
    let in_period = aggregation::filter_by_period(&snapshot, period);
    let breakdown = aggregation::category_breakdown(&in_period);

    let goals = state.budget_goals().lock().unwrap();

    Ok(Json(evaluate::evaluate(&breakdown, &goals)))
}

/// A route handler for replacing the entire per-category limit map.
pub async fn replace_budget_goals_endpoint(
    State(state): State<AppState>,
    claims: Claims,
    Json(limits): Json<HashMap<String, f64>>,
) -> Result<Json<BudgetGoalsResponse>, Error> {
    let mut goals = state.budget_goals().lock().unwrap();
    goals.replace_limits(limits)?;

    tracing::info!("{} replaced the budget goal map", claims.sub);

    Ok(Json(BudgetGoalsResponse::from_store(&goals)))
}

/// A route handler for replacing a single category's limit.
pub async fn update_category_limit_endpoint(
    State(state): State<AppState>,
    claims: Claims,
    Path(category): Path<String>,
    Json(payload): Json<UpdateLimit>,
) -> Result<Json<BudgetGoalsResponse>, Error> {
    let mut goals = state.budget_goals().lock().unwrap();
    goals.set_limit(&category, payload.limit)?;

    tracing::info!("{} set the {category} limit to {}", claims.sub, payload.limit);

    Ok(Json(BudgetGoalsResponse::from_store(&goals)))
}

/// A route handler for replacing the global monthly budget.
pub async fn update_monthly_budget_endpoint(
    State(state): State<AppState>,
    claims: Claims,
    Json(payload): Json<UpdateMonthlyBudget>,
) -> Result<Json<BudgetGoalsResponse>, Error> {
    let mut goals = state.budget_goals().lock().unwrap();
    goals.set_monthly_budget(payload.monthly_budget)?;

    tracing::info!(
        "{} set the monthly budget to {}",
        claims.sub,
        payload.monthly_budget
    );

    Ok(Json(BudgetGoalsResponse::from_store(&goals)))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    use crate::{auth, build_router, AppState};

    fn test_server() -> (TestServer, String) {
        let state = AppState::new("42");
        let token = auth::encode_token("user-1", "test@test.com", state.encoding_key()).unwrap();
        let app = build_router().with_state(state);
        let server = TestServer::new(app).expect("Could not create test server.");

        (server, token)
    }

    async fn spend(server: &TestServer, token: &str, amount: f64, category: &str) {
        server
            .post("/api/transactions")
            .authorization_bearer(token)
            .content_type("application/json")
            .json(&json!({
                "amount": amount,
                "type": "expense",
                "category": category,
                "date": "2024-08-01",
            }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    #[tokio::test]
    async fn overview_reports_spending_against_goals() {
        let (server, token) = test_server();
        spend(&server, &token, -800.0, "Rent").await;

        let overview = server
            .get("/api/budgets?year=2024&month=8")
            .authorization_bearer(&token)
            .await
            .json::<Value>();

        assert_eq!(overview["monthly_budget"], 3000.0);
        assert_eq!(overview["spent"], 800.0);
        assert_eq!(overview["remaining"], 2200.0);
        assert_eq!(overview["tier"], "ok");

        let rent = overview["categories"]
            .as_array()
            .unwrap()
            .iter()
            .find(|status| status["category"] == "Rent")
            .unwrap();
        // 800 of 800 is exactly 100%: warning, not over.
        assert_eq!(rent["tier"], "warning");
    }

    #[tokio::test]
    async fn replacing_the_goal_map_changes_the_overview() {
        let (server, token) = test_server();
        spend(&server, &token, -90.0, "Coffee").await;

        let response = server
            .put("/api/budgets")
            .authorization_bearer(&token)
            .content_type("application/json")
            .json(&json!({"Coffee": 60.0}))
            .await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["limits"]["Coffee"], 60.0);

        let overview = server
            .get("/api/budgets?year=2024&month=8")
            .authorization_bearer(&token)
            .await
            .json::<Value>();

        let categories = overview["categories"].as_array().unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0]["category"], "Coffee");
        assert_eq!(categories[0]["tier"], "over");
    }

    #[tokio::test]
    async fn updating_a_single_limit_keeps_the_others() {
        let (server, token) = test_server();

        let response = server
            .put("/api/budgets/Food")
            .authorization_bearer(&token)
            .content_type("application/json")
            .json(&json!({"limit": 550.0}))
            .await;
        response.assert_status_ok();

        let limits = &response.json::<Value>()["limits"];
        assert_eq!(limits["Food"], 550.0);
        assert_eq!(limits["Rent"], 800.0);
    }

    #[tokio::test]
    async fn negative_limit_is_rejected() {
        let (server, token) = test_server();

        server
            .put("/api/budgets/Food")
            .authorization_bearer(&token)
            .content_type("application/json")
            .json(&json!({"limit": -5.0}))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn zero_monthly_budget_reports_the_no_budget_sentinel() {
        let (server, token) = test_server();
        spend(&server, &token, -100.0, "Food").await;

        server
            .put("/api/budget")
            .authorization_bearer(&token)
            .content_type("application/json")
            .json(&json!({"monthly_budget": 0.0}))
            .await
            .assert_status_ok();

        let overview = server
            .get("/api/budgets?year=2024&month=8")
            .authorization_bearer(&token)
            .await
            .json::<Value>();

        assert_eq!(overview["used_percent"], Value::Null);
        assert_eq!(overview["tier"], "ok");
    }

    #[tokio::test]
    async fn goal_mutations_require_authentication() {
        let (server, token) = test_server();

        server
            .put("/api/budget")
            .content_type("application/json")
            .json(&json!({"monthly_budget": 100.0}))
            .await
            .assert_status(StatusCode::UNAUTHORIZED);

        let overview = server
            .get("/api/budgets?year=2024&month=8")
            .authorization_bearer(&token)
            .await
            .json::<Value>();
        assert_eq!(overview["monthly_budget"], 3000.0);
    }
}
