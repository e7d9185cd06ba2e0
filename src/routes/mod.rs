use axum::{
    Json, Router,
    http::{StatusCode, Uri},
    routing::get,
};
use serde_json::{Value, json};

use crate::state::AppState;

pub mod address;
pub mod auth;
pub mod carts;
pub mod checkout;
pub mod coupons;
pub mod doc;
pub mod favorites;
pub mod health;
pub mod orders;
pub mod params;
pub mod payments;
pub mod products;
pub mod reviews;
pub mod stats;
pub mod users;

/// Every route the browser client talks to, mounted at the root. State and
/// the tower layers are attached by the caller.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(health::health_check))
        .merge(auth::router())
        .merge(users::router())
        .merge(products::router())
        .merge(reviews::router())
        .merge(carts::router())
        .merge(favorites::router())
        .merge(address::router())
        .merge(coupons::router())
        .merge(checkout::router())
        .merge(orders::router())
        .merge(payments::router())
        .merge(stats::router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
}

async fn not_found(uri: Uri) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "Not Found", "path": uri.path() })),
    )
}
