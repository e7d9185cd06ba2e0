use sea_orm::entity::prelude::*;

use crate::models::{OrderAddresses, OrderLines};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(indexed)]
    pub email: String,
    pub name: Option<String>,
    pub cart: OrderLines,
    pub total: f64,
    pub address: OrderAddresses,
    pub bank_name: Option<String>,
    pub payment_method: Option<String>,
    pub is_order_confirmed: bool,
    pub is_delivered: bool,
    #[sea_orm(unique)]
    pub transaction_id: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
