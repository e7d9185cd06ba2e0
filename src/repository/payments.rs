use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::{
    entity::payments::{ActiveModel, Column, Entity as Payments},
    error::AppResult,
    models::{Payment, ProductIds},
};

#[derive(Debug, Clone)]
pub struct NewPayment {
    pub email: String,
    pub price: f64,
    pub transaction_id: Option<String>,
    pub order_id: Option<Uuid>,
    pub product_item_ids: ProductIds,
    pub date: DateTime<Utc>,
    pub payment_method: Option<String>,
    pub status: Option<String>,
}

#[derive(Clone)]
pub struct PaymentRepository {
    conn: DatabaseConnection,
}

impl PaymentRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list(&self, email: Option<&str>) -> AppResult<Vec<Payment>> {
        let mut finder = Payments::find();
        if let Some(email) = email {
            finder = finder.filter(Column::Email.eq(email));
        }
        let items = finder
            .order_by_asc(Column::Date)
            .all(&self.conn)
            .await?
            .into_iter()
            .map(Payment::from)
            .collect();
        Ok(items)
    }

    pub async fn create(&self, payment: NewPayment) -> AppResult<Uuid> {
        Self::insert(&self.conn, payment).await
    }

    /// Inserts on `db`, which may be an open transaction.
    pub async fn insert<C: ConnectionTrait>(db: &C, payment: NewPayment) -> AppResult<Uuid> {
        let id = Uuid::new_v4();
        ActiveModel {
            id: Set(id),
            email: Set(payment.email),
            price: Set(payment.price),
            transaction_id: Set(payment.transaction_id),
            order_id: Set(payment.order_id),
            product_item_ids: Set(payment.product_item_ids),
            date: Set(payment.date.into()),
            payment_method: Set(payment.payment_method),
            status: Set(payment.status),
        }
        .insert(db)
        .await?;
        Ok(id)
    }

    /// Sum of every recorded payment's price; 0 when nothing was paid yet.
    pub async fn revenue(&self) -> AppResult<f64> {
        let total = Payments::find()
            .select_only()
            .column_as(Column::Price.sum(), "revenue")
            .into_tuple::<Option<f64>>()
            .one(&self.conn)
            .await?;
        Ok(total.flatten().unwrap_or(0.0))
    }
}
