// handlers/public/pages.rs - Marketing, legal and health endpoints

use axum::extract::State;
use serde_json::{json, Value};

use crate::middleware::ApiResponse;
use crate::state::AppState;

/// GET / - Landing page data plus the public/protected route map
pub async fn home(State(state): State<AppState>) -> ApiResponse<Value> {
    let gate = state.gate.config();

    ApiResponse::success(json!({
        "name": "Pocketbook",
        "version": env!("CARGO_PKG_VERSION"),
        "tagline": "Know where your money goes.",
        "pages": {
            "public": ["/", "/about", "/privacy", "/terms", gate.login_path()],
            "protected": gate.protected().prefixes(),
        },
        "login": gate.login_path(),
    }))
}

/// GET /about
pub async fn about() -> ApiResponse<Value> {
    ApiResponse::success(json!({
        "title": "About Pocketbook",
        "body": "Pocketbook tracks spending, budgets and reports in one place.",
    }))
}

/// GET /privacy
pub async fn privacy() -> ApiResponse<Value> {
    ApiResponse::success(json!({
        "title": "Privacy Policy",
        "sections": [
            "We store only the transactions you enter or import.",
            "Session cookies are HttpOnly and used solely to keep you signed in.",
            "We never sell personal data.",
        ],
    }))
}

/// GET /terms
pub async fn terms() -> ApiResponse<Value> {
    ApiResponse::success(json!({
        "title": "Terms of Service",
        "sections": [
            "Pocketbook is provided as-is for personal budgeting.",
            "You are responsible for the accuracy of the data you enter.",
        ],
    }))
}

/// GET /health
pub async fn health() -> ApiResponse<Value> {
    ApiResponse::success(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now(),
    }))
}
