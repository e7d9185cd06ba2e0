#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is up", body = String, content_type = "text/plain"),
    ),
    tag = "Health"
)]
pub async fn health_check() -> &'static str {
    "Grocery-Shop is running"
}
