use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::{
    dto::address::CreateAddressRequest,
    entity::addresses::{ActiveModel, Column, Entity as Addresses},
    error::AppResult,
    models::Address,
};

#[derive(Clone)]
pub struct AddressRepository {
    conn: DatabaseConnection,
}

impl AddressRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list_by_email(&self, email: &str) -> AppResult<Vec<Address>> {
        let items = Addresses::find()
            .filter(Column::Email.eq(email))
            .order_by_asc(Column::CreatedAt)
            .all(&self.conn)
            .await?
            .into_iter()
            .map(Address::from)
            .collect();
        Ok(items)
    }

    pub async fn create(&self, payload: CreateAddressRequest) -> AppResult<Uuid> {
        let id = Uuid::new_v4();
        let fields = payload.fields;
        ActiveModel {
            id: Set(id),
            email: Set(payload.email),
            name: Set(fields.name),
            district: Set(fields.district),
            division: Set(fields.division),
            town: Set(fields.town),
            post_code: Set(fields.post_code),
            phone: Set(fields.phone),
            address: Set(fields.address),
            created_at: Set(Utc::now().into()),
        }
        .insert(&self.conn)
        .await?;
        Ok(id)
    }
}
