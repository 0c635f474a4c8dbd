use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use catalog::stats::{parse_stats_date, today};
use entity::prelude::*;
use tracing::info;

pub mod request;
pub mod response;

use crate::response::{ApiResponse, IntoApiResponse};
use crate::ApiState;

use self::{
    request::GetDailyStatsParam,
    response::{EventDailyStatsResp, EventStatsResp},
};

/// Get total views and shares of an event
#[utoipa::path(
    get,
    path = "/api/events/{event_id}/stats",
    tag = "stats",
    responses(
        (status = 200, description = "Get event stats successfully", body = EventStatsResp)
    ),
    params(
        ("event_id" = i64, Path, description = "event id"),
    )
)]
pub async fn get_stats(
    State(state): State<Arc<ApiState>>,
    Path(event_id): Path<i64>,
) -> ApiResponse<Json<EventStatsResp>> {
    let stats = state
        .stats
        .get_stats(event_id)
        .await
        .into_response("502-004")?;

    Ok(Json(EventStatsResp::from(stats)))
}

async fn increment(
    state: &ApiState,
    event_id: i64,
    counter: Counter,
) -> ApiResponse<()> {
    let count = state
        .stats
        .increment(event_id, counter)
        .await
        .into_response("502-005")?;
    info!(task = "increment", event_id, %counter, count);

    Ok(())
}

async fn increment_daily(
    state: &ApiState,
    event_id: i64,
    counter: Counter,
) -> ApiResponse<()> {
    let date = today();
    let count = state
        .stats
        .increment_daily(event_id, counter, date)
        .await
        .into_response("502-007")?;
    info!(task = "increment daily", event_id, %counter, %date, count);

    Ok(())
}

/// Add one view to an event
#[utoipa::path(
    post,
    path = "/api/events/{event_id}/stats/view",
    tag = "stats",
    responses((status = 200, description = "View counted")),
    params(("event_id" = i64, Path, description = "event id"))
)]
pub async fn add_view(
    State(state): State<Arc<ApiState>>,
    Path(event_id): Path<i64>,
) -> ApiResponse<()> {
    increment(&state, event_id, Counter::View).await
}

/// Add one share to an event
#[utoipa::path(
    post,
    path = "/api/events/{event_id}/stats/share",
    tag = "stats",
    responses((status = 200, description = "Share counted")),
    params(("event_id" = i64, Path, description = "event id"))
)]
pub async fn add_share(
    State(state): State<Arc<ApiState>>,
    Path(event_id): Path<i64>,
) -> ApiResponse<()> {
    increment(&state, event_id, Counter::Share).await
}

/// Get views and shares of an event on one day
#[utoipa::path(
    get,
    path = "/api/events/{event_id}/daily-stats",
    tag = "stats",
    responses(
        (status = 200, description = "Get daily stats successfully", body = EventDailyStatsResp),
        (status = 400, description = "Malformed date")
    ),
    params(
        ("event_id" = i64, Path, description = "event id"),
        GetDailyStatsParam
    )
)]
pub async fn get_daily_stats(
    State(state): State<Arc<ApiState>>,
    Path(event_id): Path<i64>,
    Query(params): Query<GetDailyStatsParam>,
) -> ApiResponse<Json<EventDailyStatsResp>> {
    let date = parse_stats_date(&params.date).into_response("400-001")?;

    let stats = state
        .stats
        .get_daily_stats(event_id, date)
        .await
        .into_response("502-006")?;

    Ok(Json(EventDailyStatsResp::from(stats)))
}

/// Add one view to today's count of an event
#[utoipa::path(
    post,
    path = "/api/events/{event_id}/daily-stats/view",
    tag = "stats",
    responses((status = 200, description = "Daily view counted")),
    params(("event_id" = i64, Path, description = "event id"))
)]
pub async fn add_daily_view(
    State(state): State<Arc<ApiState>>,
    Path(event_id): Path<i64>,
) -> ApiResponse<()> {
    increment_daily(&state, event_id, Counter::View).await
}

/// Add one share to today's count of an event
#[utoipa::path(
    post,
    path = "/api/events/{event_id}/daily-stats/share",
    tag = "stats",
    responses((status = 200, description = "Daily share counted")),
    params(("event_id" = i64, Path, description = "event id"))
)]
pub async fn add_daily_share(
    State(state): State<Arc<ApiState>>,
    Path(event_id): Path<i64>,
) -> ApiResponse<()> {
    increment_daily(&state, event_id, Counter::Share).await
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use catalog::{memory::InMemoryStore, stats::today};
    use serde_json::{json, Value};

    use crate::test_util::{app, get, post, send};

    #[tokio::test]
    async fn test_total_counters() {
        // Arrange
        let app = app(Arc::new(InMemoryStore::new()));

        // Act
        send(&app, post("/api/events/5/stats/view")).await;
        send(&app, post("/api/events/5/stats/view")).await;
        let (status, _) = send(&app, post("/api/events/5/stats/share")).await;
        let (_, body) = send(&app, get("/api/events/5/stats")).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        let body: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(body, json!({ "eventId": 5, "views": 2, "shares": 1 }));
    }

    #[tokio::test]
    async fn test_daily_counters() {
        // Arrange
        let app = app(Arc::new(InMemoryStore::new()));
        let date = today().to_string();

        // Act
        send(&app, post("/api/events/5/daily-stats/view")).await;
        send(&app, post("/api/events/5/daily-stats/share")).await;
        send(&app, post("/api/events/5/daily-stats/share")).await;
        let (status, body) = send(
            &app,
            get(&format!("/api/events/5/daily-stats?date={}", date)),
        )
        .await;
        let (_, other_day) =
            send(&app, get("/api/events/5/daily-stats?date=2000-01-01")).await;
        let (_, totals) = send(&app, get("/api/events/5/stats")).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        let body: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(
            body,
            json!({ "eventId": 5, "date": date, "views": 1, "shares": 2 })
        );
        let other_day: Value = serde_json::from_str(&other_day).unwrap();
        assert_eq!(other_day["views"], 0);
        let totals: Value = serde_json::from_str(&totals).unwrap();
        assert_eq!(totals["views"], 0);
    }

    #[tokio::test]
    async fn test_malformed_date_is_client_error() {
        // Arrange
        let app = app(Arc::new(InMemoryStore::new()));

        // Act
        let (status, body) =
            send(&app, get("/api/events/5/daily-stats?date=05-01-2024")).await;

        // Assert
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.starts_with("invalid date parameter"));
    }
}
