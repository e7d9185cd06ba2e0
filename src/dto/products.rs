use serde::Deserialize;
use utoipa::ToSchema;

use crate::models::Supplier;

/// Used for both create and full-field update; absent fields are stored as null.
/// `name` is required by both and checked by the handler.
#[derive(Debug, Deserialize, ToSchema, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub name: Option<String>,
    pub old_price: Option<f64>,
    pub new_price: Option<f64>,
    pub category: Option<String>,
    pub rating: Option<f64>,
    pub stock: Option<String>,
    #[serde(alias = "stock_quantity")]
    pub stock_quantity: Option<i32>,
    pub description: Option<String>,
    pub featured: Option<bool>,
    pub offer: Option<f64>,
    pub brand: Option<String>,
    #[serde(alias = "unit_of_measure")]
    pub unit_of_measure: Option<String>,
    pub supplier: Option<Supplier>,
    pub img: Option<String>,
}
