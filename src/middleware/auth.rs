use axum::{extract::FromRequestParts, http::header, http::request::Parts};

use crate::{
    error::{AppError, AppResult},
    state::AppState,
};

/// Caller identified by a valid bearer token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub email: String,
}

/// Caller whose stored user record carries the `admin` role.
#[derive(Debug, Clone)]
pub struct AdminUser(pub AuthUser);

/// The path email must belong to the caller.
pub fn ensure_self(user: &AuthUser, email: &str) -> AppResult<()> {
    if user.email != email {
        return Err(AppError::Forbidden);
    }
    Ok(())
}

/// One user lookup per call; roles are not cached.
pub async fn ensure_admin(state: &AppState, user: &AuthUser) -> AppResult<()> {
    let stored = state.repos.users.find_by_email(&user.email).await?;
    match stored {
        Some(u) if u.is_admin() => Ok(()),
        _ => {
            tracing::warn!(email = %user.email, "admin route refused");
            Err(AppError::Forbidden)
        }
    }
}

fn bearer_token(parts: &Parts) -> AppResult<&str> {
    let auth_str = parts
        .headers
        .get(header::AUTHORIZATION)
        .ok_or(AppError::Unauthorized)?
        .to_str()
        .map_err(|_| AppError::Unauthorized)?;

    let token = auth_str
        .strip_prefix("Bearer ")
        .ok_or(AppError::Unauthorized)?
        .trim();
    if token.is_empty() {
        return Err(AppError::Unauthorized);
    }
    Ok(token)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let claims = state.tokens.verify(token)?;
        Ok(AuthUser {
            email: claims.email,
        })
    }
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        ensure_admin(state, &user).await?;
        Ok(AdminUser(user))
    }
}
