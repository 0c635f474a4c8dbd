use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};

pub mod response;

use crate::response::{ApiResponse, IntoApiResponse};
use crate::{ApiError, ApiState};

use self::response::EventResp;

/// List visible events
#[utoipa::path(
    get,
    path = "/api/events",
    tag = "event",
    responses(
        (status = 200, description = "List visible events, newest id first", body = [EventResp])
    )
)]
pub async fn get_events(
    State(state): State<Arc<ApiState>>,
) -> ApiResponse<Json<Vec<EventResp>>> {
    let events = state
        .catalog
        .list_visible_events()
        .await
        .into_response("502-001")?;

    Ok(Json(events.iter().map(EventResp::from).collect()))
}

/// Get a visible event
#[utoipa::path(
    get,
    path = "/api/events/detail/{id}",
    tag = "event",
    responses(
        (status = 200, description = "Get an event successfully", body = EventResp),
        (status = 404, description = "No such visible event")
    ),
    params(
        ("id" = i64, Path, description = "event id"),
    )
)]
pub async fn get_event(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i64>,
) -> ApiResponse<Json<EventResp>> {
    let event = state
        .catalog
        .get_event_detail(id)
        .await
        .into_response("502-002")?;

    let Some(event) = event else {
        return Err(ApiError::NotFound);
    };

    Ok(Json(EventResp::from(&event)))
}

/// Get the intro content of an event
#[utoipa::path(
    get,
    path = "/api/events/intro/{id}",
    tag = "event",
    responses(
        (status = 200, description = "Intro html", body = String, content_type = "text/html"),
        (status = 404, description = "No intro for this event")
    ),
    params(
        ("id" = i64, Path, description = "event id"),
    )
)]
pub async fn get_event_intro(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i64>,
) -> ApiResponse<Html<String>> {
    let intro = state
        .intro
        .find_by_event_id(id)
        .await
        .into_response("502-003")?;

    let Some(intro) = intro else {
        return Err(ApiError::NotFound);
    };

    Ok(Html(intro.content.unwrap_or_default()))
}
