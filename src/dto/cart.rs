use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub email: String,
    #[serde(alias = "_id")]
    pub product_id: Option<String>,
    pub name: Option<String>,
    pub img: Option<String>,
    pub category: Option<String>,
    #[serde(default = "default_count")]
    pub count: i32,
    #[serde(default)]
    pub price: f64,
}

fn default_count() -> i32 {
    1
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCartItemRequest {
    pub count: i32,
    pub price: f64,
}
