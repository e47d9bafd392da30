use axum::{
    http::{header, HeaderValue, Method},
    middleware::from_fn_with_state,
    routing::{get, post, MethodRouter},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::gate::ProtectedPaths;
use crate::handlers::{protected, public};
use crate::middleware::auth_gate_middleware;
use crate::state::AppState;

/// Every route served by a protected handler. The router is built from this
/// table and [`uncovered_routes`] checks the same patterns.
fn protected_route_table() -> Vec<(&'static str, MethodRouter<AppState>)> {
    vec![
        ("/dashboard", get(protected::dashboard)),
        ("/transactions", get(protected::transactions_list)),
        ("/transactions/:id", get(protected::transaction_get)),
        ("/transactions/categorize", post(protected::transactions_categorize)),
        ("/budgets", get(protected::budgets)),
        ("/reports", get(protected::reports)),
        ("/settings", get(protected::settings)),
    ]
}

/// Route patterns served by protected handlers, in declaration order.
pub fn protected_route_patterns() -> Vec<&'static str> {
    protected_route_table()
        .into_iter()
        .map(|(pattern, _)| pattern)
        .collect()
}

/// Build the application router with the route gate in front of every route.
///
/// Coverage of the protected handler routes is enforced by [`AppState::new`].
pub fn router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.security.cors_origins);

    Router::new()
        .merge(public_routes())
        .merge(protected_routes())
        .layer(from_fn_with_state(state.gate.clone(), auth_gate_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Protected handler routes the gate would not cover with `paths`.
pub fn uncovered_routes(paths: &ProtectedPaths) -> Vec<&'static str> {
    protected_route_patterns()
        .into_iter()
        .filter(|route| !paths.covers_route(route))
        .collect()
}

fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(public::home))
        .route("/about", get(public::about))
        .route("/privacy", get(public::privacy))
        .route("/terms", get(public::terms))
        .route("/health", get(public::health))
        .route("/login", get(public::login_get).post(public::login_post))
        .route("/logout", post(public::logout_post))
}

fn protected_routes() -> Router<AppState> {
    protected_route_table()
        .into_iter()
        .fold(Router::new(), |router, (pattern, handler)| router.route(pattern, handler))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}
