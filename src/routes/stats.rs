use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::stats::{AdminStats, CategoryStat},
    error::AppResult,
    services::stats_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin-status", get(admin_stats))
        .route("/order-stats", get(order_stats))
}

#[utoipa::path(
    get,
    path = "/admin-status",
    responses((status = 200, description = "Store-wide counters and revenue", body = AdminStats)),
    tag = "Stats"
)]
pub async fn admin_stats(State(state): State<AppState>) -> AppResult<Json<AdminStats>> {
    Ok(Json(stats_service::admin_stats(&state).await?))
}

#[utoipa::path(
    get,
    path = "/order-stats",
    responses((status = 200, description = "Units sold and revenue per product category", body = Vec<CategoryStat>)),
    tag = "Stats"
)]
pub async fn order_stats(State(state): State<AppState>) -> AppResult<Json<Vec<CategoryStat>>> {
    Ok(Json(stats_service::order_stats(&state).await?))
}
