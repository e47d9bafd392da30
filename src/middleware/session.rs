use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::extract::cookie::CookieJar;

use crate::error::ApiError;
use crate::session::{CookieSource, SessionClaims, SessionError, SessionValidity};
use crate::state::AppState;

/// A session whose token signature and expiry have been verified.
///
/// The route gate only checks that a cookie is present; handlers that act on
/// behalf of a user take this extractor instead.
#[derive(Clone, Debug)]
pub struct VerifiedSession {
    pub email: String,
    pub claims: SessionClaims,
}

#[async_trait]
impl<S> FromRequestParts<S> for VerifiedSession
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);
        let jar = CookieJar::from_headers(&parts.headers);

        let token = jar
            .cookie(&state.config.auth.cookie_name)
            .filter(|token| !token.is_empty())
            .ok_or(SessionError::Missing)?;

        let claims = state.sessions.verify(token)?;

        tracing::debug!("Verified session {} for {}", claims.sid, claims.sub);

        Ok(Self {
            email: claims.sub.clone(),
            claims,
        })
    }
}
