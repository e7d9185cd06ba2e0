use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{delete, get},
};

use crate::{
    dto::favorites::AddFavoriteRequest,
    error::AppResult,
    models::Favorite,
    repository::parse_id,
    response::{DeleteResult, InsertOneResult},
    routes::params::EmailQuery,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/favorites", get(list_favorites).post(add_favorite))
        .route("/favorites/{id}", delete(remove_favorite))
}

#[utoipa::path(
    get,
    path = "/favorites",
    params(EmailQuery),
    responses(
        (status = 200, description = "Favorites saved by the email", body = Vec<Favorite>),
        (status = 400, description = "Missing email")
    ),
    tag = "Favorites"
)]
pub async fn list_favorites(
    State(state): State<AppState>,
    Query(query): Query<EmailQuery>,
) -> AppResult<Json<Vec<Favorite>>> {
    let email = query.required()?;
    Ok(Json(state.repos.favorites.list_by_email(email).await?))
}

#[utoipa::path(
    post,
    path = "/favorites",
    request_body = AddFavoriteRequest,
    responses((status = 200, description = "Favorite stored", body = InsertOneResult)),
    tag = "Favorites"
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    Json(payload): Json<AddFavoriteRequest>,
) -> AppResult<Json<InsertOneResult>> {
    let id = state.repos.favorites.create(payload).await?;
    Ok(Json(InsertOneResult::inserted(id)))
}

#[utoipa::path(
    delete,
    path = "/favorites/{id}",
    params(("id" = String, Path, description = "Favorite id")),
    responses(
        (status = 200, description = "Favorite removed", body = DeleteResult),
        (status = 400, description = "Malformed id")
    ),
    tag = "Favorites"
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResult>> {
    let rows = state.repos.favorites.delete(parse_id(&id)?).await?;
    Ok(Json(DeleteResult::new(rows)))
}
