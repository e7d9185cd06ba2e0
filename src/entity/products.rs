use sea_orm::entity::prelude::*;

use crate::models::Supplier;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub old_price: Option<f64>,
    pub new_price: Option<f64>,
    pub category: Option<String>,
    pub rating: Option<f64>,
    pub stock: Option<String>,
    pub stock_quantity: Option<i32>,
    pub description: Option<String>,
    pub featured: Option<bool>,
    pub offer: Option<f64>,
    pub brand: Option<String>,
    pub unit_of_measure: Option<String>,
    pub supplier: Option<Supplier>,
    pub img: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
