use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::{
    dto::products::ProductPayload,
    entity::products::{ActiveModel, Column, Entity as Products},
    error::AppResult,
    models::Product,
};

#[derive(Clone)]
pub struct ProductRepository {
    conn: DatabaseConnection,
}

impl ProductRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list(&self) -> AppResult<Vec<Product>> {
        let items = Products::find()
            .order_by_asc(Column::CreatedAt)
            .all(&self.conn)
            .await?
            .into_iter()
            .map(Product::from)
            .collect();
        Ok(items)
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Option<Product>> {
        let product = Products::find_by_id(id)
            .one(&self.conn)
            .await?
            .map(Product::from);
        Ok(product)
    }

    pub async fn find_many(&self, ids: &[Uuid]) -> AppResult<Vec<Product>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let items = Products::find()
            .filter(Column::Id.is_in(ids.iter().copied()))
            .all(&self.conn)
            .await?
            .into_iter()
            .map(Product::from)
            .collect();
        Ok(items)
    }

    pub async fn create(&self, payload: ProductPayload) -> AppResult<Uuid> {
        let id = Uuid::new_v4();
        let mut active = fields(payload);
        active.id = Set(id);
        active.created_at = Set(Utc::now().into());
        active.insert(&self.conn).await?;
        Ok(id)
    }

    /// Overwrites every editable field, including the ones the payload leaves out.
    pub async fn replace(&self, id: Uuid, mut payload: ProductPayload) -> AppResult<u64> {
        payload.supplier = Some(payload.supplier.unwrap_or_default());
        let active = fields(payload);
        let result = Products::update_many()
            .set(active)
            .filter(Column::Id.eq(id))
            .exec(&self.conn)
            .await?;
        Ok(result.rows_affected)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<u64> {
        let result = Products::delete_by_id(id).exec(&self.conn).await?;
        Ok(result.rows_affected)
    }
}

fn fields(payload: ProductPayload) -> ActiveModel {
    ActiveModel {
        id: NotSet,
        name: Set(payload.name.unwrap_or_default()),
        old_price: Set(payload.old_price),
        new_price: Set(payload.new_price),
        category: Set(payload.category),
        rating: Set(payload.rating),
        stock: Set(payload.stock),
        stock_quantity: Set(payload.stock_quantity),
        description: Set(payload.description),
        featured: Set(payload.featured),
        offer: Set(payload.offer),
        brand: Set(payload.brand),
        unit_of_measure: Set(payload.unit_of_measure),
        supplier: Set(payload.supplier),
        img: Set(payload.img),
        created_at: NotSet,
    }
}
