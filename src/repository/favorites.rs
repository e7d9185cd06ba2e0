use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::{
    dto::favorites::AddFavoriteRequest,
    entity::favorites::{ActiveModel, Column, Entity as Favorites},
    error::AppResult,
    models::Favorite,
};

#[derive(Clone)]
pub struct FavoriteRepository {
    conn: DatabaseConnection,
}

impl FavoriteRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list_by_email(&self, email: &str) -> AppResult<Vec<Favorite>> {
        let items = Favorites::find()
            .filter(Column::Email.eq(email))
            .order_by_asc(Column::CreatedAt)
            .all(&self.conn)
            .await?
            .into_iter()
            .map(Favorite::from)
            .collect();
        Ok(items)
    }

    pub async fn create(&self, payload: AddFavoriteRequest) -> AppResult<Uuid> {
        let id = Uuid::new_v4();
        ActiveModel {
            id: Set(id),
            email: Set(payload.email),
            product_id: Set(payload.product_id),
            name: Set(payload.name),
            img: Set(payload.img),
            category: Set(payload.category),
            price: Set(payload.price),
            created_at: Set(Utc::now().into()),
        }
        .insert(&self.conn)
        .await?;
        Ok(id)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<u64> {
        let result = Favorites::delete_by_id(id).exec(&self.conn).await?;
        Ok(result.rows_affected)
    }
}
