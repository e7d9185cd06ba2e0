use chrono::Utc;
use sea_orm::TransactionTrait;
use uuid::Uuid;

use crate::{
    dto::{orders::CreateOrderRequest, payments::PaymentIntentResponse},
    error::{AppError, AppResult},
    models::{Order, ProductIds},
    payments::SessionRequest,
    repository::{
        OrderRepository, PaymentRepository, orders::NewOrder, payments::NewPayment,
    },
    state::{AppState, Links},
};

/// `bank_name` value that routes an order through the hosted gateway.
pub const GATEWAY_BANK: &str = "SSL-Commerz";

const GATEWAY_CURRENCY: &str = "BDT";
const CARD_CURRENCY: &str = "usd";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentRoute {
    /// Stored immediately; confirmation is not driven by this service.
    Direct,
    /// Settled through a hosted gateway session and its success callback.
    Gateway,
}

impl PaymentRoute {
    pub fn of(bank_name: Option<&str>) -> Self {
        match bank_name {
            Some(GATEWAY_BANK) => PaymentRoute::Gateway,
            _ => PaymentRoute::Direct,
        }
    }
}

#[derive(Debug)]
pub enum OrderPlaced {
    Direct(Order),
    /// The order is already stored when the client receives the URL.
    Redirect { url: String, order: Order },
}

#[derive(Debug, PartialEq, Eq)]
pub enum CallbackOutcome {
    Confirmed { order_id: Uuid, payment_id: Uuid },
    AlreadyConfirmed { order_id: Uuid },
}

pub async fn place_order(state: &AppState, payload: CreateOrderRequest) -> AppResult<OrderPlaced> {
    let total = payload
        .total
        .amount()
        .ok_or_else(|| AppError::BadRequest("total must be a number".into()))?;

    let mut order = NewOrder {
        email: payload.email,
        name: payload.name,
        cart: payload.cart,
        total,
        address: payload.address,
        bank_name: payload.bank_name,
        payment_method: payload.payment_method,
        transaction_id: None,
    };

    match PaymentRoute::of(order.bank_name.as_deref()) {
        PaymentRoute::Direct => {
            let order = state.repos.orders.create(order).await?;
            tracing::info!(order_id = %order.id, email = %order.email, "order placed");
            Ok(OrderPlaced::Direct(order))
        }
        PaymentRoute::Gateway => {
            let tran_id = new_transaction_id();
            let request = session_request(&order, &tran_id, &state.links);

            let session = state.gateway.init_session(&request).await.map_err(|err| {
                tracing::error!(error = %err, tran_id = %tran_id, "gateway session failed");
                AppError::Gateway("Error initializing SSLCommerz".into())
            })?;
            let Some(url) = session.redirect_url().map(str::to_string) else {
                tracing::error!(tran_id = %tran_id, status = ?session.status, "gateway returned no page url");
                return Err(AppError::Gateway("Failed to get GatewayPageURL".into()));
            };

            order.transaction_id = Some(tran_id);
            let order = state.repos.orders.create(order).await?;
            tracing::info!(order_id = %order.id, tran_id = ?order.transaction_id, "gateway order stored");
            Ok(OrderPlaced::Redirect { url, order })
        }
    }
}

/// Handles the gateway's success redirect for `tran_id`.
///
/// The conditional confirm and the payment insert commit together; a failed
/// insert leaves the order unconfirmed.
pub async fn confirm_payment(state: &AppState, tran_id: &str) -> AppResult<CallbackOutcome> {
    let Some(order) = state.repos.orders.find_by_transaction_id(tran_id).await? else {
        tracing::warn!(tran_id = %tran_id, "success callback for unknown transaction");
        return Err(AppError::NotFound);
    };

    let txn = state.orm.begin().await?;

    if OrderRepository::confirm(&txn, tran_id).await? == 0 {
        txn.commit().await?;
        tracing::info!(order_id = %order.id, tran_id = %tran_id, "order already confirmed");
        return Ok(CallbackOutcome::AlreadyConfirmed { order_id: order.id });
    }

    let payment_id = PaymentRepository::insert(
        &txn,
        NewPayment {
            email: order.email.clone(),
            price: order.total,
            transaction_id: Some(tran_id.to_string()),
            order_id: Some(order.id),
            product_item_ids: ProductIds(order.cart.product_ids()),
            date: Utc::now(),
            payment_method: Some(GATEWAY_BANK.to_string()),
            status: Some("success".to_string()),
        },
    )
    .await?;

    txn.commit().await?;

    tracing::info!(order_id = %order.id, payment_id = %payment_id, "order confirmed");
    Ok(CallbackOutcome::Confirmed {
        order_id: order.id,
        payment_id,
    })
}

/// Creates a card payment intent for `price` (major units, USD).
pub async fn create_card_intent(state: &AppState, price: f64) -> AppResult<PaymentIntentResponse> {
    if !price.is_finite() || price <= 0.0 {
        return Err(AppError::BadRequest("price must be a positive number".into()));
    }
    let amount = to_minor_units(price);

    let intent = state
        .cards
        .create_payment_intent(amount, CARD_CURRENCY)
        .await
        .map_err(|err| {
            tracing::error!(error = %err, amount, "payment intent failed");
            AppError::Gateway("Error creating payment intent".into())
        })?;

    Ok(PaymentIntentResponse {
        client_secret: intent.client_secret,
    })
}

fn to_minor_units(price: f64) -> i64 {
    (price * 100.0).round() as i64
}

fn new_transaction_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Customer and shipping fields come from the order's first address, with
/// the shop's home-city defaults for anything missing.
pub fn session_request(order: &NewOrder, tran_id: &str, links: &Links) -> SessionRequest {
    let primary = order.address.primary();
    let district = primary.district.unwrap_or_else(|| "Dhaka".into());
    let division = primary.division.unwrap_or_else(|| "Dhaka".into());
    let town = primary.town.unwrap_or_else(|| "Dhaka".into());
    let postcode = primary.post_code.unwrap_or_else(|| "1000".into());
    let phone = primary.phone.unwrap_or_else(|| "01711111111".into());
    let name = order.name.clone().unwrap_or_else(|| order.email.clone());

    SessionRequest {
        total_amount: format!("{:.2}", order.total),
        currency: GATEWAY_CURRENCY.into(),
        tran_id: tran_id.into(),
        success_url: links.success_url(tran_id),
        fail_url: links.client_url("fail"),
        cancel_url: links.client_url("cancel"),
        ipn_url: links.client_url("ipn"),
        shipping_method: "Courier".into(),
        product_name: "grocery".into(),
        product_category: "grocery".into(),
        product_profile: "grocery-shop".into(),
        cus_name: name.clone(),
        cus_email: order.email.clone(),
        cus_add1: district.clone(),
        cus_add2: division.clone(),
        cus_city: town.clone(),
        cus_state: town.clone(),
        cus_postcode: postcode.clone(),
        cus_country: "Bangladesh".into(),
        cus_phone: phone,
        cus_fax: "none".into(),
        ship_name: name,
        ship_add1: district,
        ship_add2: division,
        ship_city: town.clone(),
        ship_state: town,
        ship_postcode: postcode,
        ship_country: "Bangladesh".into(),
    }
}
