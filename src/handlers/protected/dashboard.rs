// handlers/protected/dashboard.rs - GET /dashboard

use std::collections::BTreeMap;

use serde_json::{json, Value};

use super::transactions::sample_transactions;
use crate::middleware::{ApiResponse, VerifiedSession};

/// GET /dashboard - Signed-in overview: balance and spending per category
pub async fn dashboard(session: VerifiedSession) -> ApiResponse<Value> {
    let transactions = sample_transactions();

    let balance_cents: i64 = transactions.iter().map(|t| t.amount_cents).sum();

    let mut spending: BTreeMap<&'static str, i64> = BTreeMap::new();
    for t in transactions.iter().filter(|t| t.amount_cents < 0) {
        *spending.entry(t.category.as_str()).or_default() += -t.amount_cents;
    }

    ApiResponse::success(json!({
        "user": session.email,
        "session_expires_at": session.claims.exp,
        "balance_cents": balance_cents,
        "spending_by_category_cents": spending,
        "recent": transactions.iter().rev().take(3).collect::<Vec<_>>(),
    }))
}
