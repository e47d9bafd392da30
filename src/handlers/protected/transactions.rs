// handlers/protected/transactions.rs - Transaction list, detail and categorization

use axum::{extract::Path, Json};
use serde::{Deserialize, Serialize};

use crate::categorize::{categorize, Category};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, VerifiedSession};

#[derive(Debug, Clone, Serialize)]
pub struct Transaction {
    pub id: u32,
    pub date: &'static str,
    pub description: &'static str,
    /// Negative for money out.
    pub amount_cents: i64,
    pub category: Category,
}

const SAMPLE: &[(u32, &str, &str, i64)] = &[
    (1, "2024-03-01", "Monthly rent - March", -145_000),
    (2, "2024-03-02", "Whole Foods Market", -8_734),
    (3, "2024-03-03", "STARBUCKS #1234", -575),
    (4, "2024-03-05", "Payroll ACME Corp", 310_000),
    (5, "2024-03-07", "Netflix.com", -1_549),
    (6, "2024-03-09", "Shell gas station", -4_210),
    (7, "2024-03-11", "Comcast internet", -7_999),
];

/// Transactions shown until the remote store is wired in.
pub fn sample_transactions() -> Vec<Transaction> {
    SAMPLE
        .iter()
        .map(|&(id, date, description, amount_cents)| Transaction {
            id,
            date,
            description,
            amount_cents,
            category: categorize(description),
        })
        .collect()
}

/// GET /transactions
pub async fn transactions_list(session: VerifiedSession) -> ApiResponse<Vec<Transaction>> {
    tracing::debug!("Listing transactions for {}", session.email);
    ApiResponse::success(sample_transactions())
}

/// GET /transactions/:id
pub async fn transaction_get(_session: VerifiedSession, Path(id): Path<u32>) -> ApiResult<Transaction> {
    sample_transactions()
        .into_iter()
        .find(|t| t.id == id)
        .map(ApiResponse::success)
        .ok_or_else(|| ApiError::not_found(format!("Transaction {} not found", id)))
}

#[derive(Debug, Deserialize)]
pub struct CategorizeRequest {
    pub description: Option<String>,
    pub descriptions: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct Suggestion {
    pub description: String,
    pub category: Category,
}

/// POST /transactions/categorize
///
/// Accepts `{ "description": "..." }` or `{ "descriptions": ["...", ...] }`
/// and returns one suggestion per description, in input order.
pub async fn transactions_categorize(
    _session: VerifiedSession,
    Json(payload): Json<CategorizeRequest>,
) -> ApiResult<Vec<Suggestion>> {
    let descriptions: Vec<String> = match (payload.description, payload.descriptions) {
        (None, None) => {
            return Err(ApiError::field_error(
                "description",
                "Provide 'description' or 'descriptions'",
            ))
        }
        (single, many) => single.into_iter().chain(many.unwrap_or_default()).collect(),
    };

    let suggestions = descriptions
        .into_iter()
        .map(|description| Suggestion {
            category: categorize(&description),
            description,
        })
        .collect();

    Ok(ApiResponse::success(suggestions))
}
