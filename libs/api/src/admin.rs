use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::ApiState;

/// Drop every cached listing and detail
#[utoipa::path(
    delete,
    path = "/api/admin/cache",
    tag = "admin",
    responses(
        (status = 204, description = "Cache cleared"),
        (status = 401, description = "Missing or invalid API key")
    )
)]
pub async fn invalidate_all(State(state): State<Arc<ApiState>>) -> StatusCode {
    state.catalog.invalidate_all();
    StatusCode::NO_CONTENT
}

/// Drop the cached detail of one event and the listing
#[utoipa::path(
    delete,
    path = "/api/admin/cache/{id}",
    tag = "admin",
    responses(
        (status = 204, description = "Cache entries dropped"),
        (status = 401, description = "Missing or invalid API key")
    ),
    params(("id" = i64, Path, description = "event id"))
)]
pub async fn invalidate_event(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i64>,
) -> StatusCode {
    state.catalog.invalidate_event(id).await;
    StatusCode::NO_CONTENT
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use catalog::memory::InMemoryStore;
    use entity::prelude::*;
    use serde_json::Value;

    use crate::test_util::{app, get, send, ADMIN_API_KEY};

    fn delete(uri: &str, key: Option<&str>) -> Request<Body> {
        let mut builder = Request::delete(uri);
        if let Some(key) = key {
            builder = builder.header(header::AUTHORIZATION, key);
        }
        builder.body(Body::empty()).unwrap()
    }

    fn event(id: i64, status: EventStatus) -> EventEntity {
        EventEntity {
            id,
            status_id: status.id(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_admin_requires_api_key() {
        // Arrange
        let app = app(Arc::new(InMemoryStore::new()));

        // Act
        let (missing, _) = send(&app, delete("/api/admin/cache", None)).await;
        let (wrong, _) =
            send(&app, delete("/api/admin/cache", Some("nope"))).await;
        let (ok, _) =
            send(&app, delete("/api/admin/cache", Some(ADMIN_API_KEY))).await;

        // Assert
        assert_eq!(missing, StatusCode::UNAUTHORIZED);
        assert_eq!(wrong, StatusCode::UNAUTHORIZED);
        assert_eq!(ok, StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_invalidate_event_refreshes_responses() {
        // Arrange
        let store = Arc::new(
            InMemoryStore::new().with_event(event(1, EventStatus::Ongoing)),
        );
        let app = app(store.clone());
        send(&app, get("/api/events")).await;
        send(&app, get("/api/events/detail/1")).await;
        store.insert_event(event(1, EventStatus::Ended));

        // Act
        let (stale, _) = send(&app, get("/api/events/detail/1")).await;
        send(&app, delete("/api/admin/cache/1", Some(ADMIN_API_KEY))).await;
        let (fresh, _) = send(&app, get("/api/events/detail/1")).await;
        let (_, list) = send(&app, get("/api/events")).await;

        // Assert
        assert_eq!(stale, StatusCode::OK);
        assert_eq!(fresh, StatusCode::NOT_FOUND);
        let list: Value = serde_json::from_str(&list).unwrap();
        assert_eq!(list, Value::Array(vec![]));
    }
}
