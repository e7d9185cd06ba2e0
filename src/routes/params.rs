use serde::Deserialize;
use utoipa::IntoParams;

use crate::error::{AppError, AppResult};

/// `?email=` owner filter shared by the per-user collections.
#[derive(Debug, Deserialize, IntoParams, Default)]
#[into_params(parameter_in = Query)]
pub struct EmailQuery {
    pub email: Option<String>,
}

impl EmailQuery {
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref().map(str::trim).filter(|e| !e.is_empty())
    }

    pub fn required(&self) -> AppResult<&str> {
        self.email()
            .ok_or_else(|| AppError::BadRequest("email is required".into()))
    }
}
