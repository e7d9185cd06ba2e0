use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set, sea_query::Expr,
};
use uuid::Uuid;

use crate::{
    dto::orders::UpdateOrderRequest,
    entity::orders::{ActiveModel, Column, Entity as Orders},
    error::AppResult,
    models::{Order, OrderAddresses, OrderLines},
};

/// An order as accepted at checkout; both status flags start out false.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub email: String,
    pub name: Option<String>,
    pub cart: OrderLines,
    pub total: f64,
    pub address: OrderAddresses,
    pub bank_name: Option<String>,
    pub payment_method: Option<String>,
    pub transaction_id: Option<String>,
}

/// `PATCH /order/{key}` addresses one order by id or all of an owner's orders by email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderKey {
    Id(Uuid),
    Email(String),
}

impl OrderKey {
    pub fn parse(raw: &str) -> Self {
        match Uuid::parse_str(raw.trim()) {
            Ok(id) => OrderKey::Id(id),
            Err(_) => OrderKey::Email(raw.trim().to_string()),
        }
    }
}

#[derive(Clone)]
pub struct OrderRepository {
    conn: DatabaseConnection,
}

impl OrderRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list(&self, email: Option<&str>) -> AppResult<Vec<Order>> {
        let mut finder = Orders::find();
        if let Some(email) = email.filter(|e| !e.is_empty()) {
            finder = finder.filter(Column::Email.eq(email));
        }
        let items = finder
            .order_by_asc(Column::CreatedAt)
            .all(&self.conn)
            .await?
            .into_iter()
            .map(Order::from)
            .collect();
        Ok(items)
    }

    pub async fn find_first_by_email(&self, email: &str) -> AppResult<Option<Order>> {
        let order = Orders::find()
            .filter(Column::Email.eq(email))
            .order_by_asc(Column::CreatedAt)
            .one(&self.conn)
            .await?
            .map(Order::from);
        Ok(order)
    }

    pub async fn find_by_transaction_id(&self, tran_id: &str) -> AppResult<Option<Order>> {
        let order = Orders::find()
            .filter(Column::TransactionId.eq(tran_id))
            .one(&self.conn)
            .await?
            .map(Order::from);
        Ok(order)
    }

    pub async fn create(&self, order: NewOrder) -> AppResult<Order> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(order.email),
            name: Set(order.name),
            cart: Set(order.cart),
            total: Set(order.total),
            address: Set(order.address),
            bank_name: Set(order.bank_name),
            payment_method: Set(order.payment_method),
            is_order_confirmed: Set(false),
            is_delivered: Set(false),
            transaction_id: Set(order.transaction_id),
            created_at: Set(Utc::now().into()),
        }
        .insert(&self.conn)
        .await?;
        Ok(Order::from(model))
    }

    /// Never touches `is_order_confirmed`; see [`OrderRepository::confirm`].
    pub async fn update(&self, key: &OrderKey, patch: UpdateOrderRequest) -> AppResult<u64> {
        let mut active = <ActiveModel as Default>::default();
        if let Some(method) = patch.payment_method {
            active.payment_method = Set(Some(method));
        }
        if let Some(delivered) = patch.is_delivered {
            active.is_delivered = Set(delivered);
        }
        if !active.is_changed() {
            return Ok(0);
        }

        let filter = match key {
            OrderKey::Id(id) => Column::Id.eq(*id),
            OrderKey::Email(email) => Column::Email.eq(email.as_str()),
        };
        let result = Orders::update_many()
            .set(active)
            .filter(filter)
            .exec(&self.conn)
            .await?;
        Ok(result.rows_affected)
    }

    /// Flips the confirmation flag false→true for the order holding `tran_id`.
    /// Returns 0 when no order matches or it was already confirmed, so
    /// concurrent callbacks confirm at most once.
    pub async fn confirm<C: ConnectionTrait>(db: &C, tran_id: &str) -> AppResult<u64> {
        let result = Orders::update_many()
            .col_expr(Column::IsOrderConfirmed, Expr::value(true))
            .filter(Column::TransactionId.eq(tran_id))
            .filter(Column::IsOrderConfirmed.eq(false))
            .exec(db)
            .await?;
        Ok(result.rows_affected)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<u64> {
        let result = Orders::delete_by_id(id).exec(&self.conn).await?;
        Ok(result.rows_affected)
    }
}
