//! Event CRUD handlers.

use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;

use eventhub_core::error::AppError;
use eventhub_entity::event::Event;

use crate::dto::request::{DeleteByUsersRequest, EventForm};
use crate::dto::response::{
    CreateEventResponse, DeleteEventsResponse, MessageResponse, UpdateEventResponse,
};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, parse_id};
use crate::state::AppState;

fn multipart_body(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Multipart, AppError> {
    multipart.map_err(|e| {
        AppError::validation("Expected a multipart/form-data body").with_details(e.body_text())
    })
}

/// POST /api/v1/event/create
pub async fn create_event(
    State(state): State<AppState>,
    auth: AuthUser,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<(StatusCode, Json<CreateEventResponse>)> {
    let form = EventForm::from_multipart(multipart_body(multipart)?).await?;
    let (fields, image) = form.into_parts()?;

    let created = state
        .event_service
        .create(auth.context(), fields, image)
        .await?
        .into_value();

    Ok((
        StatusCode::CREATED,
        Json(CreateEventResponse {
            message: "Event created successfully".to_string(),
            image: created.image_path,
            event: created.event,
        }),
    ))
}

/// GET /api/v1/event/all
pub async fn list_events(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<Event>>> {
    Ok(Json(state.event_service.list_all().await?))
}

/// GET /api/v1/event/{id}
pub async fn get_event(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<Event>> {
    let id = parse_id(&id, "event ID")?;
    Ok(Json(state.event_service.get_by_id(id).await?))
}

/// GET /api/v1/event/all/user/{user_id}
pub async fn list_user_events(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(user_id): Path<String>,
) -> ApiResult<Json<Vec<Event>>> {
    let user_id = parse_id(&user_id, "user ID")?;
    Ok(Json(state.event_service.list_by_user(user_id).await?))
}

/// PUT /api/v1/event/{id}
pub async fn update_event(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<Json<UpdateEventResponse>> {
    let id = parse_id(&id, "event ID")?;
    let form = EventForm::from_multipart(multipart_body(multipart)?).await?;
    let (fields, image) = form.into_parts()?;

    let event = state
        .event_service
        .update(auth.context(), id, fields, image)
        .await?
        .into_value();

    Ok(Json(UpdateEventResponse {
        message: "Event updated successfully".to_string(),
        event,
    }))
}

/// DELETE /api/v1/event/{id}
pub async fn delete_event(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id = parse_id(&id, "event ID")?;
    state.event_service.delete_by_id(auth.context(), id).await?;
    Ok(Json(MessageResponse::new("Event deleted successfully")))
}

/// DELETE /api/v1/event/user
pub async fn delete_user_events(
    State(state): State<AppState>,
    auth: AuthUser,
    body: Result<Json<DeleteByUsersRequest>, JsonRejection>,
) -> ApiResult<Json<DeleteEventsResponse>> {
    let Json(request) = body.map_err(|e| {
        AppError::validation("Invalid request payload").with_details(e.body_text())
    })?;
    let user_ids = request.user_ids()?;

    let deleted = state
        .event_service
        .delete_by_user_ids(auth.context(), &user_ids)
        .await?
        .into_value();

    Ok(Json(DeleteEventsResponse {
        message: "Events deleted successfully".to_string(),
        deleted,
    }))
}
