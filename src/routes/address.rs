use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};

use crate::{
    dto::address::CreateAddressRequest, error::AppResult, models::Address,
    response::InsertOneResult, routes::params::EmailQuery, state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/address", get(list_addresses).post(create_address))
}

#[utoipa::path(
    get,
    path = "/address",
    params(EmailQuery),
    responses(
        (status = 200, description = "Saved delivery addresses", body = Vec<Address>),
        (status = 400, description = "Missing email")
    ),
    tag = "Address"
)]
pub async fn list_addresses(
    State(state): State<AppState>,
    Query(query): Query<EmailQuery>,
) -> AppResult<Json<Vec<Address>>> {
    let email = query.required()?;
    Ok(Json(state.repos.addresses.list_by_email(email).await?))
}

#[utoipa::path(
    post,
    path = "/address",
    request_body = CreateAddressRequest,
    responses((status = 200, description = "Address stored", body = InsertOneResult)),
    tag = "Address"
)]
pub async fn create_address(
    State(state): State<AppState>,
    Json(payload): Json<CreateAddressRequest>,
) -> AppResult<Json<InsertOneResult>> {
    let id = state.repos.addresses.create(payload).await?;
    Ok(Json(InsertOneResult::inserted(id)))
}
