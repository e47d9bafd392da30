use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use super::{SessionClaims, SessionError, SessionValidity};
use crate::config::AuthConfig;

/// HS256 session token issuer and verifier.
#[derive(Clone)]
pub struct JwtSessions {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiry_hours: u64,
}

impl JwtSessions {
    pub fn new(secret: &str, expiry_hours: u64) -> Result<Self, SessionError> {
        if secret.is_empty() {
            return Err(SessionError::MissingSecret);
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expiry_hours,
        })
    }

    pub fn from_config(auth: &AuthConfig) -> Result<Self, SessionError> {
        Self::new(&auth.session_secret, auth.session_expiry_hours)
    }

    pub fn expiry_hours(&self) -> u64 {
        self.expiry_hours
    }

    /// Issue a fresh session token for `email`.
    pub fn issue(&self, email: &str) -> Result<String, SessionError> {
        let now = Utc::now();
        let exp = (now + Duration::hours(self.expiry_hours as i64)).timestamp();

        let claims = SessionClaims {
            sub: email.to_string(),
            sid: Uuid::new_v4(),
            iat: now.timestamp(),
            exp,
        };

        self.sign(&claims)
    }

    pub(crate) fn sign(&self, claims: &SessionClaims) -> Result<String, SessionError> {
        encode(&Header::default(), claims, &self.encoding_key)
            .map_err(|e| SessionError::Issue(e.to_string()))
    }
}

impl SessionValidity for JwtSessions {
    fn verify(&self, token: &str) -> Result<SessionClaims, SessionError> {
        if token.is_empty() {
            return Err(SessionError::Missing);
        }

        let validation = Validation::default();

        decode::<SessionClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => SessionError::Expired,
                _ => SessionError::Invalid(e.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_verifies() {
        let sessions = JwtSessions::new("test-secret", 1).unwrap();
        let token = sessions.issue("demo@pocketbook.local").unwrap();

        let claims = sessions.verify(&token).unwrap();
        assert_eq!(claims.sub, "demo@pocketbook.local");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn each_login_gets_a_new_session_id() {
        let sessions = JwtSessions::new("test-secret", 1).unwrap();
        let a = sessions.verify(&sessions.issue("a@b.c").unwrap()).unwrap();
        let b = sessions.verify(&sessions.issue("a@b.c").unwrap()).unwrap();
        assert_ne!(a.sid, b.sid);
    }

    #[test]
    fn token_from_other_secret_is_invalid() {
        let ours = JwtSessions::new("secret-a", 1).unwrap();
        let theirs = JwtSessions::new("secret-b", 1).unwrap();
        let token = theirs.issue("demo@pocketbook.local").unwrap();

        assert!(matches!(ours.verify(&token), Err(SessionError::Invalid(_))));
    }

    #[test]
    fn expired_token_is_rejected() {
        let sessions = JwtSessions::new("test-secret", 1).unwrap();
        let now = Utc::now().timestamp();
        let token = sessions
            .sign(&SessionClaims {
                sub: "demo@pocketbook.local".to_string(),
                sid: Uuid::new_v4(),
                iat: now - 7200,
                exp: now - 3600,
            })
            .unwrap();

        assert_eq!(sessions.verify(&token), Err(SessionError::Expired));
    }

    #[test]
    fn garbage_and_empty_tokens_are_rejected() {
        let sessions = JwtSessions::new("test-secret", 1).unwrap();
        assert_eq!(sessions.verify(""), Err(SessionError::Missing));
        assert!(matches!(sessions.verify("abc"), Err(SessionError::Invalid(_))));
    }

    #[test]
    fn empty_secret_is_refused() {
        assert!(matches!(JwtSessions::new("", 1), Err(SessionError::MissingSecret)));
    }
}
