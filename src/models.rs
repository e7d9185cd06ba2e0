use chrono::{DateTime, Utc};
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entity;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
    pub uid: Option<String>,
    pub role: Option<String>,
    pub metadata: UserMetadata,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserMetadata {
    pub creation_time: Option<String>,
    pub last_sign_in_time: Option<String>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some("admin")
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub old_price: Option<f64>,
    pub new_price: Option<f64>,
    pub category: Option<String>,
    pub rating: Option<f64>,
    pub stock: Option<String>,
    #[serde(rename = "stock_quantity")]
    pub stock_quantity: Option<i32>,
    pub description: Option<String>,
    pub featured: Option<bool>,
    pub offer: Option<f64>,
    pub brand: Option<String>,
    #[serde(rename = "unit_of_measure")]
    pub unit_of_measure: Option<String>,
    pub supplier: Option<Supplier>,
    pub img: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(
    Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Default, FromJsonQueryResult,
)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "contact_info")]
    pub contact_info: ContactInfo,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Default)]
pub struct ContactInfo {
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: Option<String>,
    pub email: Option<String>,
    pub image: Option<String>,
    pub rating: Option<f64>,
    pub details: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A product line inside a cart, checkout or order document.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    #[serde(alias = "_id")]
    pub product_id: Option<String>,
    pub name: Option<String>,
    pub img: Option<String>,
    pub category: Option<String>,
    pub count: Option<i32>,
    pub price: Option<f64>,
}

#[derive(
    Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Default, FromJsonQueryResult,
)]
#[serde(transparent)]
pub struct OrderLines(pub Vec<OrderLine>);

impl OrderLines {
    pub fn product_ids(&self) -> Vec<String> {
        self.0
            .iter()
            .filter_map(|line| line.product_id.clone())
            .collect()
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub email: String,
    pub product_id: Option<String>,
    pub name: Option<String>,
    pub img: Option<String>,
    pub category: Option<String>,
    pub count: i32,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub email: String,
    pub product_id: Option<String>,
    pub name: Option<String>,
    pub img: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub created_at: DateTime<Utc>,
}

/// Postal fields shared by saved addresses and order addresses.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AddressFields {
    pub name: Option<String>,
    pub district: Option<String>,
    pub division: Option<String>,
    pub town: Option<String>,
    pub post_code: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub email: String,
    #[serde(flatten)]
    pub fields: AddressFields,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub code: String,
    pub discount: Option<f64>,
    pub terms: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Checkout {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub email: String,
    pub cart: OrderLines,
    pub subtotal: Option<f64>,
    pub discount: Option<f64>,
    pub discount_price: Option<f64>,
    pub total: Option<f64>,
    pub created_at: DateTime<Utc>,
}

/// One entry of an order's `address` list: `{ "data": { ... } }`.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Default)]
pub struct OrderAddress {
    #[serde(default)]
    pub data: Option<AddressFields>,
}

#[derive(
    Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Default, FromJsonQueryResult,
)]
#[serde(transparent)]
pub struct OrderAddresses(pub Vec<OrderAddress>);

impl OrderAddresses {
    pub fn primary(&self) -> AddressFields {
        self.0
            .first()
            .and_then(|entry| entry.data.clone())
            .unwrap_or_default()
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub cart: OrderLines,
    pub total: f64,
    pub address: OrderAddresses,
    #[serde(rename = "bank_name")]
    pub bank_name: Option<String>,
    pub payment_method: Option<String>,
    pub is_order_confirmed: bool,
    pub is_delivered: bool,
    pub transaction_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(
    Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Default, FromJsonQueryResult,
)]
#[serde(transparent)]
pub struct ProductIds(pub Vec<String>);

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub email: String,
    pub price: f64,
    pub transaction_id: Option<String>,
    pub order_id: Option<Uuid>,
    pub product_item_ids: ProductIds,
    pub date: DateTime<Utc>,
    pub payment_method: Option<String>,
    pub status: Option<String>,
}

impl From<entity::users::Model> for User {
    fn from(model: entity::users::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            name: model.name,
            photo_url: model.photo_url,
            uid: model.uid,
            role: model.role,
            metadata: UserMetadata {
                creation_time: model.creation_time,
                last_sign_in_time: model.last_sign_in_time,
            },
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

impl From<entity::products::Model> for Product {
    fn from(model: entity::products::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            old_price: model.old_price,
            new_price: model.new_price,
            category: model.category,
            rating: model.rating,
            stock: model.stock,
            stock_quantity: model.stock_quantity,
            description: model.description,
            featured: model.featured,
            offer: model.offer,
            brand: model.brand,
            unit_of_measure: model.unit_of_measure,
            supplier: model.supplier,
            img: model.img,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

impl From<entity::reviews::Model> for Review {
    fn from(model: entity::reviews::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            image: model.image,
            rating: model.rating,
            details: model.details,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

impl From<entity::cart_items::Model> for CartItem {
    fn from(model: entity::cart_items::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            product_id: model.product_id,
            name: model.name,
            img: model.img,
            category: model.category,
            count: model.count,
            price: model.price,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

impl From<entity::favorites::Model> for Favorite {
    fn from(model: entity::favorites::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            product_id: model.product_id,
            name: model.name,
            img: model.img,
            category: model.category,
            price: model.price,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

impl From<entity::addresses::Model> for Address {
    fn from(model: entity::addresses::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            fields: AddressFields {
                name: model.name,
                district: model.district,
                division: model.division,
                town: model.town,
                post_code: model.post_code,
                phone: model.phone,
                address: model.address,
            },
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

impl From<entity::coupons::Model> for Coupon {
    fn from(model: entity::coupons::Model) -> Self {
        Self {
            id: model.id,
            code: model.code,
            discount: model.discount,
            terms: model.terms,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

impl From<entity::checkouts::Model> for Checkout {
    fn from(model: entity::checkouts::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            cart: model.cart,
            subtotal: model.subtotal,
            discount: model.discount,
            discount_price: model.discount_price,
            total: model.total,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

impl From<entity::orders::Model> for Order {
    fn from(model: entity::orders::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            name: model.name,
            cart: model.cart,
            total: model.total,
            address: model.address,
            bank_name: model.bank_name,
            payment_method: model.payment_method,
            is_order_confirmed: model.is_order_confirmed,
            is_delivered: model.is_delivered,
            transaction_id: model.transaction_id,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

impl From<entity::payments::Model> for Payment {
    fn from(model: entity::payments::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            price: model.price,
            transaction_id: model.transaction_id,
            order_id: model.order_id,
            product_item_ids: model.product_item_ids,
            date: model.date.with_timezone(&Utc),
            payment_method: model.payment_method,
            status: model.status,
        }
    }
}
