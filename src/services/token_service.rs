use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, SecretString};

use crate::{
    dto::auth::Claims,
    error::{AppError, AppResult},
};

/// Session tokens live for one hour and are never refreshed.
pub const TOKEN_TTL_HOURS: i64 = 1;

/// Signs and verifies session tokens carrying the caller's email.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenService {
    pub fn new(secret: &SecretString) -> Self {
        let secret = secret.expose_secret().as_bytes();
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }

    pub fn issue(&self, email: &str) -> AppResult<String> {
        let issued_at = Utc::now();
        let expiration = issued_at
            .checked_add_signed(Duration::hours(TOKEN_TTL_HOURS))
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to set expiration")))?;

        let claims = Claims {
            email: email.to_string(),
            iat: issued_at.timestamp() as usize,
            exp: expiration.timestamp() as usize,
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))
    }

    /// Fails with `Unauthorized` when the token is malformed, badly signed or expired.
    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        let decoded = decode::<Claims>(token, &self.decoding, &Validation::default())
            .map_err(|err| {
                tracing::debug!(error = %err, "token rejected");
                AppError::Unauthorized
            })?;
        Ok(decoded.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(secret: &str) -> TokenService {
        TokenService::new(&SecretString::from(secret.to_string()))
    }

    #[test]
    fn issued_token_verifies_with_same_secret() {
        let tokens = service("test-secret");
        let token = tokens.issue("a@x.com").unwrap();
        let claims = tokens.verify(&token).unwrap();
        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn token_from_other_secret_is_unauthorized() {
        let token = service("one").issue("a@x.com").unwrap();
        let err = service("two").verify(&token).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized));
    }

    #[test]
    fn expired_token_is_unauthorized() {
        let tokens = service("test-secret");
        let past = Utc::now() - Duration::hours(2);
        let claims = Claims {
            email: "a@x.com".into(),
            iat: past.timestamp() as usize,
            exp: (past + Duration::hours(TOKEN_TTL_HOURS)).timestamp() as usize,
        };
        let token = encode(&Header::default(), &claims, &tokens.encoding).unwrap();
        assert!(matches!(tokens.verify(&token), Err(AppError::Unauthorized)));
    }

    #[test]
    fn garbage_is_unauthorized() {
        assert!(matches!(
            service("s").verify("not-a-token"),
            Err(AppError::Unauthorized)
        ));
    }
}
