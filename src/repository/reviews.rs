use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use crate::{
    dto::reviews::CreateReviewRequest,
    entity::reviews::{ActiveModel, Column, Entity as Reviews},
    error::AppResult,
    models::Review,
};

#[derive(Clone)]
pub struct ReviewRepository {
    conn: DatabaseConnection,
}

impl ReviewRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list(&self) -> AppResult<Vec<Review>> {
        let items = Reviews::find()
            .order_by_asc(Column::CreatedAt)
            .all(&self.conn)
            .await?
            .into_iter()
            .map(Review::from)
            .collect();
        Ok(items)
    }

    pub async fn create(&self, payload: CreateReviewRequest) -> AppResult<Uuid> {
        let id = Uuid::new_v4();
        ActiveModel {
            id: Set(id),
            name: Set(payload.name),
            email: Set(payload.email),
            image: Set(payload.image),
            rating: Set(payload.rating),
            details: Set(payload.details),
            created_at: Set(Utc::now().into()),
        }
        .insert(&self.conn)
        .await?;
        Ok(id)
    }
}
