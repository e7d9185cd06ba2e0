use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, patch},
};

use crate::{
    dto::cart::{AddToCartRequest, UpdateCartItemRequest},
    error::AppResult,
    models::CartItem,
    repository::parse_id,
    response::{DeleteResult, InsertOneResult, UpdateResult},
    routes::params::EmailQuery,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/carts",
            get(list_cart).post(add_to_cart).delete(clear_cart),
        )
        .route("/carts/{id}", patch(update_cart_item).delete(remove_from_cart))
}

#[utoipa::path(
    get,
    path = "/carts",
    params(EmailQuery),
    responses(
        (status = 200, description = "Cart lines owned by the email", body = Vec<CartItem>),
        (status = 400, description = "Missing email")
    ),
    tag = "Cart"
)]
pub async fn list_cart(
    State(state): State<AppState>,
    Query(query): Query<EmailQuery>,
) -> AppResult<Json<Vec<CartItem>>> {
    let email = query.required()?;
    Ok(Json(state.repos.carts.list_by_email(email).await?))
}

#[utoipa::path(
    post,
    path = "/carts",
    request_body = AddToCartRequest,
    responses((status = 200, description = "Cart line stored", body = InsertOneResult)),
    tag = "Cart"
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    Json(payload): Json<AddToCartRequest>,
) -> AppResult<Json<InsertOneResult>> {
    let id = state.repos.carts.create(payload).await?;
    Ok(Json(InsertOneResult::inserted(id)))
}

#[utoipa::path(
    patch,
    path = "/carts/{id}",
    params(("id" = String, Path, description = "Cart line id")),
    request_body = UpdateCartItemRequest,
    responses(
        (status = 200, description = "Count and price replaced", body = UpdateResult),
        (status = 400, description = "Malformed id")
    ),
    tag = "Cart"
)]
pub async fn update_cart_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateCartItemRequest>,
) -> AppResult<Json<UpdateResult>> {
    let id = parse_id(&id)?;
    let rows = state.repos.carts.update(id, payload).await?;
    Ok(Json(UpdateResult::new(rows)))
}

#[utoipa::path(
    delete,
    path = "/carts/{id}",
    params(("id" = String, Path, description = "Cart line id")),
    responses(
        (status = 200, description = "Cart line removed", body = DeleteResult),
        (status = 400, description = "Malformed id")
    ),
    tag = "Cart"
)]
pub async fn remove_from_cart(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResult>> {
    let rows = state.repos.carts.delete(parse_id(&id)?).await?;
    Ok(Json(DeleteResult::new(rows)))
}

#[utoipa::path(
    delete,
    path = "/carts",
    params(EmailQuery),
    responses(
        (status = 200, description = "Every cart line of the owner removed", body = DeleteResult),
        (status = 400, description = "Missing email")
    ),
    tag = "Cart"
)]
pub async fn clear_cart(
    State(state): State<AppState>,
    Query(query): Query<EmailQuery>,
) -> AppResult<Json<DeleteResult>> {
    let email = query.required()?;
    let rows = state.repos.carts.delete_by_email(email).await?;
    tracing::debug!(email = %email, rows, "cart cleared");
    Ok(Json(DeleteResult::new(rows)))
}
