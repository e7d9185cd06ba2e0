use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::ProductIds;

/// A payment the client records itself after a card payment succeeds.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    pub email: String,
    pub price: f64,
    pub transaction_id: Option<String>,
    pub order_id: Option<Uuid>,
    #[serde(default)]
    pub product_item_ids: ProductIds,
    pub date: Option<DateTime<Utc>>,
    pub payment_method: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PaymentIntentRequest {
    pub price: f64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentResponse {
    pub client_secret: Option<String>,
}
