use std::sync::Arc;

use axum::{
    http::HeaderValue,
    middleware,
    routing::{delete, get, post},
    Router,
};
use anyhow::Context as _;
use catalog::{
    EventAssembler, EventCatalog, EventIntroStore, EventStatsStore,
};
use repository::Repository;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

pub use crate::config::{Config, ServerConfig};

pub mod admin;
mod auth;
mod config;
pub mod event;
pub mod healthz;
pub mod not_found;
mod response;
pub mod stats;

pub enum ApiError {
    AuthError(String),
    ClientError(String),
    NotFound,
    ServerError(String),
}

#[derive(Clone)]
pub struct ApiState {
    catalog: EventCatalog,
    intro: Arc<dyn EventIntroStore>,
    stats: Arc<dyn EventStatsStore>,
    admin_api_key: String,
}

impl ApiState {
    pub fn new(
        catalog: EventCatalog,
        intro: Arc<dyn EventIntroStore>,
        stats: Arc<dyn EventStatsStore>,
        admin_api_key: String,
    ) -> Self {
        Self {
            catalog,
            intro,
            stats,
            admin_api_key,
        }
    }

    pub fn from_repository(
        repository: Repository,
        config: &Config,
        admin_api_key: String,
    ) -> Self {
        let assembler = EventAssembler::new(
            Arc::new(repository.event),
            Arc::new(repository.cover_image),
        );

        Self::new(
            EventCatalog::new(assembler, config.cache),
            Arc::new(repository.event_intro),
            Arc::new(repository.event_stats),
            admin_api_key,
        )
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        event::get_events,
        event::get_event,
        event::get_event_intro,
        stats::get_stats,
        stats::add_view,
        stats::add_share,
        stats::get_daily_stats,
        stats::add_daily_view,
        stats::add_daily_share,
        admin::invalidate_all,
        admin::invalidate_event,
    ),
    components(schemas(
        event::response::EventResp,
        stats::response::EventStatsResp,
        stats::response::EventDailyStatsResp,
    )),
    tags(
        (name = "event", description = "Event listing, detail and intro"),
        (name = "stats", description = "Event view and share counters"),
        (name = "admin", description = "Cache maintenance")
    )
)]
struct ApiDoc;

pub async fn serve(
    repository: Repository,
    config: &Config,
    admin_api_key: String,
) -> anyhow::Result<Router> {
    info!(task = "start api serving");

    let state = ApiState::from_repository(repository, config, admin_api_key);

    router(state, &config.server)
}

pub fn router(state: ApiState, server: &ServerConfig) -> anyhow::Result<Router> {
    let state = Arc::new(state);

    let origins = server
        .allow_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("invalid cors origin {}", origin))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    // events
    let event_router = Router::new()
        .route("/", get(event::get_events))
        .route("/detail/:id", get(event::get_event))
        .route("/intro/:id", get(event::get_event_intro))
        .route("/:event_id/stats", get(stats::get_stats))
        .route("/:event_id/stats/view", post(stats::add_view))
        .route("/:event_id/stats/share", post(stats::add_share))
        .route("/:event_id/daily-stats", get(stats::get_daily_stats))
        .route("/:event_id/daily-stats/view", post(stats::add_daily_view))
        .route("/:event_id/daily-stats/share", post(stats::add_daily_share))
        .fallback(not_found::get_404);

    // admin
    let admin_router = Router::new()
        .route("/cache", delete(admin::invalidate_all))
        .route("/cache/:id", delete(admin::invalidate_event))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::auth))
        .fallback(not_found::get_404);

    let router = Router::new()
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .route("/healthz", get(healthz::get_health))
        .nest("/api/events", event_router)
        .nest("/api/admin", admin_router)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_origin(origins))
        .fallback(not_found::get_404)
        .with_state(state);

    Ok(router)
}

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use catalog::{
        memory::InMemoryStore, CachePolicy, EventAssembler, EventCatalog,
    };
    use http_body_util::BodyExt as _;
    use tower::ServiceExt as _;

    use crate::{router, ApiState, ServerConfig};

    pub const ADMIN_API_KEY: &str = "test-admin-key";

    pub fn app(store: Arc<InMemoryStore>) -> Router {
        let catalog = EventCatalog::new(
            EventAssembler::new(store.clone(), store.clone()),
            CachePolicy::default(),
        );
        let state = ApiState::new(
            catalog,
            store.clone(),
            store,
            ADMIN_API_KEY.to_string(),
        );

        router(state, &ServerConfig::default()).unwrap()
    }

    pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();

        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    pub fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    pub fn post(uri: &str) -> Request<Body> {
        Request::post(uri).body(Body::empty()).unwrap()
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use catalog::memory::InMemoryStore;

    use crate::test_util::{app, get, send};

    #[tokio::test]
    async fn test_healthz_and_unknown_route() {
        // Arrange
        let app = app(Arc::new(InMemoryStore::new()));

        // Act
        let (health, _) = send(&app, get("/healthz")).await;
        let (missing, _) = send(&app, get("/nothing/here")).await;

        // Assert
        assert_eq!(health, StatusCode::OK);
        assert_eq!(missing, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        // Arrange
        let app = app(Arc::new(InMemoryStore::new()));

        // Act
        let (status, body) = send(&app, get("/api-docs/openapi.json")).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("/api/events/detail/{id}"));
    }
}
