//! Bearer token authentication middleware.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use eventhub_core::error::AppError;
use eventhub_service::context::RequestContext;

use crate::error::ApiResult;
use crate::state::AppState;

/// Rejects requests that do not authenticate; otherwise stores the resolved
/// [`RequestContext`] in the request extensions for the `AuthUser` extractor.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> ApiResult<Response> {
    let header = match request.headers().get(AUTHORIZATION) {
        Some(value) => Some(
            value
                .to_str()
                .map_err(|_| AppError::unauthorized("Malformed Authorization header"))?,
        ),
        None => None,
    };

    let user = state.authenticator.authenticate(header).await?;
    request.extensions_mut().insert(RequestContext::new(user));

    Ok(next.run(request).await)
}
