use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    dto::checkout::{CreateCheckoutRequest, UpdateCheckoutRequest},
    error::AppResult,
    models::Checkout,
    repository::parse_id,
    response::{DeleteResult, InsertOneResult, UpdateResult},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    // GET/PATCH address the checkout by owner email, DELETE by id.
    Router::new()
        .route("/checkout", get(list_checkouts).post(create_checkout))
        .route(
            "/checkout/{key}",
            get(get_checkout)
                .patch(update_checkout)
                .delete(delete_checkout),
        )
}

#[utoipa::path(
    get,
    path = "/checkout",
    responses((status = 200, description = "All pending checkouts", body = Vec<Checkout>)),
    tag = "Checkout"
)]
pub async fn list_checkouts(State(state): State<AppState>) -> AppResult<Json<Vec<Checkout>>> {
    Ok(Json(state.repos.checkouts.list().await?))
}

#[utoipa::path(
    get,
    path = "/checkout/{email}",
    params(("email" = String, Path, description = "Owner email")),
    responses((status = 200, description = "The owner's checkout, or null", body = Option<Checkout>)),
    tag = "Checkout"
)]
pub async fn get_checkout(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<Option<Checkout>>> {
    Ok(Json(state.repos.checkouts.find_by_email(&email).await?))
}

#[utoipa::path(
    post,
    path = "/checkout",
    request_body = CreateCheckoutRequest,
    responses((status = 200, description = "Checkout stored", body = InsertOneResult)),
    tag = "Checkout"
)]
pub async fn create_checkout(
    State(state): State<AppState>,
    Json(payload): Json<CreateCheckoutRequest>,
) -> AppResult<Json<InsertOneResult>> {
    let id = state.repos.checkouts.create(payload).await?;
    Ok(Json(InsertOneResult::inserted(id)))
}

#[utoipa::path(
    patch,
    path = "/checkout/{email}",
    params(("email" = String, Path, description = "Owner email")),
    request_body = UpdateCheckoutRequest,
    responses((status = 200, description = "Price summary replaced", body = UpdateResult)),
    tag = "Checkout"
)]
pub async fn update_checkout(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(payload): Json<UpdateCheckoutRequest>,
) -> AppResult<Json<UpdateResult>> {
    let rows = state.repos.checkouts.update_by_email(&email, payload).await?;
    Ok(Json(UpdateResult::new(rows)))
}

#[utoipa::path(
    delete,
    path = "/checkout/{id}",
    params(("id" = String, Path, description = "Checkout id")),
    responses(
        (status = 200, description = "Checkout removed", body = DeleteResult),
        (status = 400, description = "Malformed id")
    ),
    tag = "Checkout"
)]
pub async fn delete_checkout(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResult>> {
    let rows = state.repos.checkouts.delete(parse_id(&id)?).await?;
    Ok(Json(DeleteResult::new(rows)))
}
