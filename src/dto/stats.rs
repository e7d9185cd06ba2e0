use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub user: u64,
    pub product_items: u64,
    pub order_items: u64,
    pub revenue: f64,
}

#[derive(Debug, Serialize, ToSchema, Clone, PartialEq)]
pub struct CategoryStat {
    pub category: Option<String>,
    pub quantity: u64,
    pub revenue: f64,
}
