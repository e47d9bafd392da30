// handlers/protected/mod.rs - Protected handlers (gate + verified session)
//
// Route prefixes: /dashboard, /transactions, /budgets, /reports, /settings
// Every handler takes `VerifiedSession`, so a forged or expired cookie that
// slips past the presence-only gate is still rejected with 401.

pub mod dashboard;
pub mod pages;
pub mod transactions;

pub use dashboard::dashboard;
pub use pages::{budgets, reports, settings};
pub use transactions::{transaction_get, transactions_categorize, transactions_list};
