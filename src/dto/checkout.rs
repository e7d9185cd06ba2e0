use serde::Deserialize;
use utoipa::ToSchema;

use crate::models::OrderLines;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCheckoutRequest {
    pub email: String,
    #[serde(default)]
    pub cart: OrderLines,
    pub subtotal: Option<f64>,
    pub discount: Option<f64>,
    pub discount_price: Option<f64>,
    pub total: Option<f64>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCheckoutRequest {
    pub subtotal: Option<f64>,
    pub discount: Option<f64>,
    pub discount_price: Option<f64>,
    pub total: Option<f64>,
}
