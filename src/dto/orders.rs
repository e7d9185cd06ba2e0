use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::{
    models::{OrderAddresses, OrderLines},
    response::InsertOneResult,
};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub email: String,
    pub name: Option<String>,
    #[serde(default)]
    pub cart: OrderLines,
    pub total: OrderTotal,
    #[serde(default)]
    pub address: OrderAddresses,
    #[serde(rename = "bank_name", alias = "bankName")]
    pub bank_name: Option<String>,
    pub payment_method: Option<String>,
}

/// The browser client sends the total as a number, a numeric string, or a
/// one-element list of either.
#[derive(Debug, Deserialize, ToSchema, Clone)]
#[serde(untagged)]
pub enum OrderTotal {
    Number(f64),
    Text(String),
    List(Vec<Value>),
}

impl OrderTotal {
    pub fn amount(&self) -> Option<f64> {
        let amount = match self {
            OrderTotal::Number(n) => Some(*n),
            OrderTotal::Text(s) => s.trim().parse::<f64>().ok(),
            OrderTotal::List(items) => match items.first()? {
                Value::Number(n) => n.as_f64(),
                Value::String(s) => s.trim().parse::<f64>().ok(),
                _ => None,
            },
        }?;
        amount.is_finite().then_some(amount)
    }
}

/// Only delivery and payment method are client-editable; confirmation is not.
#[derive(Debug, Deserialize, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderRequest {
    pub payment_method: Option<String>,
    pub is_delivered: Option<bool>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GatewayRedirect {
    pub url: String,
}

/// Direct orders answer with the stored id, gateway orders with the page to open.
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum OrderCreated {
    Inserted(InsertOneResult),
    Redirect(GatewayRedirect),
}
