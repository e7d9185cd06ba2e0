use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::{
    dto::checkout::{CreateCheckoutRequest, UpdateCheckoutRequest},
    entity::checkouts::{ActiveModel, Column, Entity as Checkouts},
    error::AppResult,
    models::Checkout,
};

#[derive(Clone)]
pub struct CheckoutRepository {
    conn: DatabaseConnection,
}

impl CheckoutRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list(&self) -> AppResult<Vec<Checkout>> {
        let items = Checkouts::find()
            .order_by_asc(Column::CreatedAt)
            .all(&self.conn)
            .await?
            .into_iter()
            .map(Checkout::from)
            .collect();
        Ok(items)
    }

    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<Checkout>> {
        let checkout = Checkouts::find()
            .filter(Column::Email.eq(email))
            .order_by_asc(Column::CreatedAt)
            .one(&self.conn)
            .await?
            .map(Checkout::from);
        Ok(checkout)
    }

    pub async fn create(&self, payload: CreateCheckoutRequest) -> AppResult<Uuid> {
        let id = Uuid::new_v4();
        ActiveModel {
            id: Set(id),
            email: Set(payload.email),
            cart: Set(payload.cart),
            subtotal: Set(payload.subtotal),
            discount: Set(payload.discount),
            discount_price: Set(payload.discount_price),
            total: Set(payload.total),
            created_at: Set(Utc::now().into()),
        }
        .insert(&self.conn)
        .await?;
        Ok(id)
    }

    /// Rewrites the price summary of every checkout the owner has open.
    pub async fn update_by_email(
        &self,
        email: &str,
        payload: UpdateCheckoutRequest,
    ) -> AppResult<u64> {
        let active = ActiveModel {
            subtotal: Set(payload.subtotal),
            discount: Set(payload.discount),
            discount_price: Set(payload.discount_price),
            total: Set(payload.total),
            ..Default::default()
        };
        let result = Checkouts::update_many()
            .set(active)
            .filter(Column::Email.eq(email))
            .exec(&self.conn)
            .await?;
        Ok(result.rows_affected)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<u64> {
        let result = Checkouts::delete_by_id(id).exec(&self.conn).await?;
        Ok(result.rows_affected)
    }
}
