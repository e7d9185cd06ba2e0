use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    dto::products::ProductPayload,
    error::{AppError, AppResult},
    middleware::auth::AdminUser,
    models::Product,
    repository::parse_id,
    response::{DeleteResult, InsertOneResult, UpdateResult},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product).patch(update_product).delete(delete_product),
        )
}

fn validate(payload: &ProductPayload) -> AppResult<()> {
    if payload.name.as_deref().is_none_or(|name| name.trim().is_empty()) {
        return Err(AppError::BadRequest("name is required".into()));
    }
    Ok(())
}

#[utoipa::path(
    get,
    path = "/products",
    responses((status = 200, description = "Full catalogue", body = Vec<Product>)),
    tag = "Products"
)]
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    Ok(Json(state.repos.products.list().await?))
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    params(("id" = String, Path, description = "Product id")),
    responses(
        (status = 200, description = "The product, or null", body = Option<Product>),
        (status = 400, description = "Malformed id")
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Option<Product>>> {
    let product = state.repos.products.get(parse_id(&id)?).await?;
    Ok(Json(product))
}

#[utoipa::path(
    post,
    path = "/products",
    request_body = ProductPayload,
    responses(
        (status = 200, description = "Product stored", body = InsertOneResult),
        (status = 400, description = "Missing or blank name"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller is not an admin")
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(payload): Json<ProductPayload>,
) -> AppResult<Json<InsertOneResult>> {
    validate(&payload)?;
    let id = state.repos.products.create(payload).await?;
    Ok(Json(InsertOneResult::inserted(id)))
}

#[utoipa::path(
    patch,
    path = "/products/{id}",
    params(("id" = String, Path, description = "Product id")),
    request_body = ProductPayload,
    responses(
        (status = 200, description = "Every editable field replaced", body = UpdateResult),
        (status = 400, description = "Malformed id, or missing or blank name"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller is not an admin")
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn update_product(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
    Json(payload): Json<ProductPayload>,
) -> AppResult<Json<UpdateResult>> {
    let id = parse_id(&id)?;
    validate(&payload)?;
    let rows = state.repos.products.replace(id, payload).await?;
    Ok(Json(UpdateResult::new(rows)))
}

#[utoipa::path(
    delete,
    path = "/products/{id}",
    params(("id" = String, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product removed", body = DeleteResult),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller is not an admin")
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResult>> {
    let rows = state.repos.products.delete(parse_id(&id)?).await?;
    Ok(Json(DeleteResult::new(rows)))
}
