use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get},
};

use crate::{
    dto::coupons::CreateCouponRequest,
    error::{AppError, AppResult},
    middleware::auth::AdminUser,
    models::Coupon,
    repository::parse_id,
    response::{DeleteResult, InsertOneResult},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/coupon", get(list_coupons).post(create_coupon))
        .route("/coupon/{id}", delete(delete_coupon))
}

#[utoipa::path(
    get,
    path = "/coupon",
    responses((status = 200, description = "Active coupons", body = Vec<Coupon>)),
    tag = "Coupons"
)]
pub async fn list_coupons(State(state): State<AppState>) -> AppResult<Json<Vec<Coupon>>> {
    Ok(Json(state.repos.coupons.list().await?))
}

#[utoipa::path(
    post,
    path = "/coupon",
    request_body = CreateCouponRequest,
    responses(
        (status = 200, description = "Coupon stored", body = InsertOneResult),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller is not an admin")
    ),
    security(("bearer_auth" = [])),
    tag = "Coupons"
)]
pub async fn create_coupon(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(payload): Json<CreateCouponRequest>,
) -> AppResult<Json<InsertOneResult>> {
    if payload.code.trim().is_empty() {
        return Err(AppError::BadRequest("code must not be empty".into()));
    }
    let id = state.repos.coupons.create(payload).await?;
    Ok(Json(InsertOneResult::inserted(id)))
}

#[utoipa::path(
    delete,
    path = "/coupon/{id}",
    params(("id" = String, Path, description = "Coupon id")),
    responses(
        (status = 200, description = "Coupon removed", body = DeleteResult),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller is not an admin")
    ),
    security(("bearer_auth" = [])),
    tag = "Coupons"
)]
pub async fn delete_coupon(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResult>> {
    let rows = state.repos.coupons.delete(parse_id(&id)?).await?;
    Ok(Json(DeleteResult::new(rows)))
}
