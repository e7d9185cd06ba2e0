use sea_orm::entity::prelude::*;

use crate::models::ProductIds;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "payments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(indexed)]
    pub email: String,
    pub price: f64,
    pub transaction_id: Option<String>,
    pub order_id: Option<Uuid>,
    pub product_item_ids: ProductIds,
    pub date: DateTimeWithTimeZone,
    pub payment_method: Option<String>,
    pub status: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
