use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::{
    dto::cart::{AddToCartRequest, UpdateCartItemRequest},
    entity::cart_items::{ActiveModel, Column, Entity as CartItems},
    error::AppResult,
    models::CartItem,
};

#[derive(Clone)]
pub struct CartRepository {
    conn: DatabaseConnection,
}

impl CartRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list_by_email(&self, email: &str) -> AppResult<Vec<CartItem>> {
        let items = CartItems::find()
            .filter(Column::Email.eq(email))
            .order_by_asc(Column::CreatedAt)
            .all(&self.conn)
            .await?
            .into_iter()
            .map(CartItem::from)
            .collect();
        Ok(items)
    }

    pub async fn create(&self, payload: AddToCartRequest) -> AppResult<Uuid> {
        let id = Uuid::new_v4();
        ActiveModel {
            id: Set(id),
            email: Set(payload.email),
            product_id: Set(payload.product_id),
            name: Set(payload.name),
            img: Set(payload.img),
            category: Set(payload.category),
            count: Set(payload.count),
            price: Set(payload.price),
            created_at: Set(Utc::now().into()),
        }
        .insert(&self.conn)
        .await?;
        Ok(id)
    }

    pub async fn update(&self, id: Uuid, payload: UpdateCartItemRequest) -> AppResult<u64> {
        let active = ActiveModel {
            count: Set(payload.count),
            price: Set(payload.price),
            ..Default::default()
        };
        let result = CartItems::update_many()
            .set(active)
            .filter(Column::Id.eq(id))
            .exec(&self.conn)
            .await?;
        Ok(result.rows_affected)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<u64> {
        let result = CartItems::delete_by_id(id).exec(&self.conn).await?;
        Ok(result.rows_affected)
    }

    /// Empties one owner's cart, typically right after checkout.
    pub async fn delete_by_email(&self, email: &str) -> AppResult<u64> {
        let result = CartItems::delete_many()
            .filter(Column::Email.eq(email))
            .exec(&self.conn)
            .await?;
        Ok(result.rows_affected)
    }
}
