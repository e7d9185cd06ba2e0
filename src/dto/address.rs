use serde::Deserialize;
use utoipa::ToSchema;

use crate::models::AddressFields;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAddressRequest {
    pub email: String,
    #[serde(flatten)]
    pub fields: AddressFields,
}
