use serde::Deserialize;
use utoipa::ToSchema;

use crate::models::UserMetadata;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub email: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
    pub uid: Option<String>,
    #[serde(default)]
    pub metadata: UserMetadata,
}

/// Sign-in metadata patch. `role` is not accepted here; see `PATCH /users/admin/{id}`.
#[derive(Debug, Deserialize, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
    pub last_sign_in_time: Option<String>,
}
