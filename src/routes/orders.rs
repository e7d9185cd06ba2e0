use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::Redirect,
    routing::{get, post},
};

use crate::{
    dto::orders::{CreateOrderRequest, GatewayRedirect, OrderCreated, UpdateOrderRequest},
    error::AppResult,
    models::Order,
    repository::{orders::OrderKey, parse_id},
    response::{DeleteResult, InsertOneResult, UpdateResult},
    routes::params::EmailQuery,
    services::order_service::{self, CallbackOutcome, OrderPlaced},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/order", get(list_orders).post(create_order))
        .route(
            "/order/{key}",
            get(get_order).patch(update_order).delete(delete_order),
        )
        .route("/payment/success/{tran_id}", post(payment_success))
}

#[utoipa::path(
    post,
    path = "/order",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "`{insertedId}` for direct orders, `{url}` for gateway orders", body = OrderCreated),
        (status = 400, description = "Unusable total"),
        (status = 500, description = "Gateway session could not be opened")
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrderRequest>,
) -> AppResult<Json<OrderCreated>> {
    let created = match order_service::place_order(&state, payload).await? {
        OrderPlaced::Direct(order) => OrderCreated::Inserted(InsertOneResult::inserted(order.id)),
        OrderPlaced::Redirect { url, .. } => OrderCreated::Redirect(GatewayRedirect { url }),
    };
    Ok(Json(created))
}

#[utoipa::path(
    get,
    path = "/order",
    params(EmailQuery),
    responses((status = 200, description = "Orders of the email, or every order", body = Vec<Order>)),
    tag = "Orders"
)]
pub async fn list_orders(
    State(state): State<AppState>,
    Query(query): Query<EmailQuery>,
) -> AppResult<Json<Vec<Order>>> {
    Ok(Json(state.repos.orders.list(query.email()).await?))
}

#[utoipa::path(
    get,
    path = "/order/{email}",
    params(("email" = String, Path, description = "Owner email")),
    responses((status = 200, description = "The owner's first order, or null", body = Option<Order>)),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<Option<Order>>> {
    Ok(Json(state.repos.orders.find_first_by_email(&email).await?))
}

#[utoipa::path(
    patch,
    path = "/order/{key}",
    params(("key" = String, Path, description = "Order id, or an owner email to update all their orders")),
    request_body = UpdateOrderRequest,
    responses((status = 200, description = "Payment method and delivery flag updated", body = UpdateResult)),
    tag = "Orders"
)]
pub async fn update_order(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(payload): Json<UpdateOrderRequest>,
) -> AppResult<Json<UpdateResult>> {
    let key = OrderKey::parse(&key);
    let rows = state.repos.orders.update(&key, payload).await?;
    Ok(Json(UpdateResult::new(rows)))
}

#[utoipa::path(
    delete,
    path = "/order/{id}",
    params(("id" = String, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order removed", body = DeleteResult),
        (status = 400, description = "Malformed id")
    ),
    tag = "Orders"
)]
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResult>> {
    let rows = state.repos.orders.delete(parse_id(&id)?).await?;
    Ok(Json(DeleteResult::new(rows)))
}

#[utoipa::path(
    post,
    path = "/payment/success/{tran_id}",
    params(("tran_id" = String, Path, description = "Transaction id issued when the gateway session opened")),
    responses(
        (status = 303, description = "Order confirmed; browser sent to the payment history page"),
        (status = 404, description = "No order carries this transaction id")
    ),
    tag = "Payments"
)]
pub async fn payment_success(
    State(state): State<AppState>,
    Path(tran_id): Path<String>,
) -> AppResult<Redirect> {
    if let CallbackOutcome::AlreadyConfirmed { order_id } =
        order_service::confirm_payment(&state, &tran_id).await?
    {
        tracing::debug!(order_id = %order_id, "repeated success callback");
    }
    Ok(Redirect::to(&state.links.payment_history_url()))
}
