use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::gate::AuthGate;

/// Route protection middleware: forwards the request unchanged or redirects to
/// the login page with the original path as the callback.
pub async fn auth_gate_middleware(
    State(gate): State<Arc<AuthGate>>,
    request: Request,
    next: Next,
) -> Response {
    let (decision, location) = {
        let jar = CookieJar::from_headers(request.headers());
        let decision = gate.evaluate(request.uri().path(), &jar);
        let location = decision.location(gate.config().callback_param());
        (decision, location)
    };

    match location {
        None => next.run(request).await,
        Some(location) => {
            tracing::debug!(?decision, "Gate redirecting unauthenticated request to {}", location);
            Redirect::to(&location).into_response()
        }
    }
}
