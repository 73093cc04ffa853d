//! Root handler.

use axum::Json;

use crate::dto::response::HomeResponse;
use crate::extractors::AuthUser;

/// GET /
pub async fn home(_auth: AuthUser) -> Json<HomeResponse> {
    Json(HomeResponse {
        message: "Welcome to the Event Service!".to_string(),
        status: "success".to_string(),
    })
}
