use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateReviewRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub image: Option<String>,
    pub rating: Option<f64>,
    pub details: Option<String>,
}
