use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::reviews::CreateReviewRequest, error::AppResult, models::Review,
    response::InsertOneResult, state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/reviews", get(list_reviews).post(create_review))
}

#[utoipa::path(
    get,
    path = "/reviews",
    responses((status = 200, description = "All reviews", body = Vec<Review>)),
    tag = "Reviews"
)]
pub async fn list_reviews(State(state): State<AppState>) -> AppResult<Json<Vec<Review>>> {
    Ok(Json(state.repos.reviews.list().await?))
}

#[utoipa::path(
    post,
    path = "/reviews",
    request_body = CreateReviewRequest,
    responses((status = 200, description = "Review stored", body = InsertOneResult)),
    tag = "Reviews"
)]
pub async fn create_review(
    State(state): State<AppState>,
    Json(payload): Json<CreateReviewRequest>,
) -> AppResult<Json<InsertOneResult>> {
    let id = state.repos.reviews.create(payload).await?;
    Ok(Json(InsertOneResult::inserted(id)))
}
