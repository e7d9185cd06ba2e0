use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use crate::{
    dto::coupons::CreateCouponRequest,
    entity::coupons::{ActiveModel, Column, Entity as Coupons},
    error::AppResult,
    models::Coupon,
};

#[derive(Clone)]
pub struct CouponRepository {
    conn: DatabaseConnection,
}

impl CouponRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list(&self) -> AppResult<Vec<Coupon>> {
        let items = Coupons::find()
            .order_by_asc(Column::CreatedAt)
            .all(&self.conn)
            .await?
            .into_iter()
            .map(Coupon::from)
            .collect();
        Ok(items)
    }

    pub async fn create(&self, payload: CreateCouponRequest) -> AppResult<Uuid> {
        let id = Uuid::new_v4();
        ActiveModel {
            id: Set(id),
            code: Set(payload.code),
            discount: Set(payload.discount),
            terms: Set(payload.terms),
            created_at: Set(Utc::now().into()),
        }
        .insert(&self.conn)
        .await?;
        Ok(id)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<u64> {
        let result = Coupons::delete_by_id(id).exec(&self.conn).await?;
        Ok(result.rows_affected)
    }
}
