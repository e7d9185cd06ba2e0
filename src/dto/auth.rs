use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /jwt`; anything besides `email` is ignored.
#[derive(Deserialize, Debug, ToSchema)]
pub struct TokenRequest {
    pub email: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Deserialize, Serialize, ToSchema, Clone)]
pub struct Claims {
    pub email: String,
    pub iat: usize,
    pub exp: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AdminStatus {
    pub admin: bool,
}
