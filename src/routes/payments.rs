use axum::{
    Json, Router,
    extract::{Query, State},
    routing::{get, post},
};
use chrono::Utc;

use crate::{
    dto::payments::{CreatePaymentRequest, PaymentIntentRequest, PaymentIntentResponse},
    error::AppResult,
    models::Payment,
    repository::payments::NewPayment,
    response::InsertOneResult,
    routes::params::EmailQuery,
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create-payment-intent", post(create_payment_intent))
        .route("/payment", get(list_payments).post(record_payment))
}

#[utoipa::path(
    post,
    path = "/create-payment-intent",
    request_body = PaymentIntentRequest,
    responses(
        (status = 200, description = "Client secret of a new card payment intent", body = PaymentIntentResponse),
        (status = 400, description = "Price is not positive"),
        (status = 500, description = "Card provider failure")
    ),
    tag = "Payments"
)]
pub async fn create_payment_intent(
    State(state): State<AppState>,
    Json(payload): Json<PaymentIntentRequest>,
) -> AppResult<Json<PaymentIntentResponse>> {
    let intent = order_service::create_card_intent(&state, payload.price).await?;
    Ok(Json(intent))
}

#[utoipa::path(
    post,
    path = "/payment",
    request_body = CreatePaymentRequest,
    responses((status = 200, description = "Payment recorded", body = InsertOneResult)),
    tag = "Payments"
)]
pub async fn record_payment(
    State(state): State<AppState>,
    Json(payload): Json<CreatePaymentRequest>,
) -> AppResult<Json<InsertOneResult>> {
    let id = state
        .repos
        .payments
        .create(NewPayment {
            email: payload.email,
            price: payload.price,
            transaction_id: payload.transaction_id,
            order_id: payload.order_id,
            product_item_ids: payload.product_item_ids,
            date: payload.date.unwrap_or_else(Utc::now),
            payment_method: payload.payment_method,
            status: payload.status,
        })
        .await?;
    Ok(Json(InsertOneResult::inserted(id)))
}

#[utoipa::path(
    get,
    path = "/payment",
    params(EmailQuery),
    responses((status = 200, description = "Payment history of the email, or all payments", body = Vec<Payment>)),
    tag = "Payments"
)]
pub async fn list_payments(
    State(state): State<AppState>,
    Query(query): Query<EmailQuery>,
) -> AppResult<Json<Vec<Payment>>> {
    Ok(Json(state.repos.payments.list(query.email()).await?))
}
