use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddFavoriteRequest {
    pub email: String,
    #[serde(alias = "_id")]
    pub product_id: Option<String>,
    pub name: Option<String>,
    pub img: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
}
