// handlers/protected/pages.rs - Budgets, reports and settings

use axum::extract::State;
use serde_json::{json, Value};

use crate::middleware::{ApiResponse, VerifiedSession};
use crate::state::AppState;

/// GET /budgets
pub async fn budgets(_session: VerifiedSession) -> ApiResponse<Value> {
    ApiResponse::success(json!({
        "title": "Budgets",
        "budgets": [
            { "category": "groceries", "limit_cents": 40_000 },
            { "category": "dining", "limit_cents": 15_000 },
            { "category": "entertainment", "limit_cents": 5_000 },
        ],
    }))
}

/// GET /reports
pub async fn reports(_session: VerifiedSession) -> ApiResponse<Value> {
    ApiResponse::success(json!({
        "title": "Reports",
        "available": ["monthly-summary", "category-breakdown", "income-vs-expenses"],
    }))
}

/// GET /settings
pub async fn settings(State(state): State<AppState>, session: VerifiedSession) -> ApiResponse<Value> {
    ApiResponse::success(json!({
        "title": "Settings",
        "email": session.email,
        "session_lifetime_hours": state.config.auth.session_expiry_hours,
    }))
}
