pub mod classify;
pub mod routes;
pub mod serve;
