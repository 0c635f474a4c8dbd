use cover_image::CoverImageRepository;
use event::EventRepository;
use event_intro::EventIntroRepository;
use event_stats::EventStatsRepository;
use migration::Migrator;
use migration::MigratorTrait;
use response::Response;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

mod active_models;
pub mod cover_image;
pub mod event;
pub mod event_intro;
pub mod event_stats;
mod response;

#[derive(Clone, Debug)]
pub struct Repository {
    pub event: EventRepository,
    pub cover_image: CoverImageRepository,
    pub event_intro: EventIntroRepository,
    pub event_stats: EventStatsRepository,
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error(
        "in sea-orm crate from unsuccessful database operations: {}: {}",
        message,
        source
    )]
    InSeaOrmDbErr {
        message: String,
        source: sea_orm::DbErr,
    },

    #[error("in redis crate: {}: {}", message, source)]
    InRedis {
        message: String,
        source: redis::RedisError,
    },
}

trait IntoResponse<T> {
    fn into_response(self, message: &str) -> Response<T>;
}

impl<T> IntoResponse<T> for Result<T, sea_orm::DbErr> {
    fn into_response(self, message: &str) -> Response<T> {
        self.map_err(|e| RepositoryError::InSeaOrmDbErr {
            message: message.to_string(),
            source: e,
        })
    }
}

impl<T> IntoResponse<T> for redis::RedisResult<T> {
    fn into_response(self, message: &str) -> Response<T> {
        self.map_err(|e| RepositoryError::InRedis {
            message: message.to_string(),
            source: e,
        })
    }
}

pub async fn init_repository(
    db_url: &str,
    redis_url: &str,
) -> Result<Repository, RepositoryError> {
    let db = init_db(db_url).await?;
    let redis = redis::Client::open(redis_url)
        .into_response("in redis client open")?;

    let repository = Repository {
        event: EventRepository::new(db.clone()),
        cover_image: CoverImageRepository::new(db.clone()),
        event_intro: EventIntroRepository::new(db.clone()),
        event_stats: EventStatsRepository::new(redis),
    };

    info!(task = "repository initialized");

    Ok(repository)
}

async fn init_db(db_url: &str) -> Response<DatabaseConnection> {
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(5)
        .min_connections(1)
        .sqlx_logging(true)
        .sqlx_logging_level(log::LevelFilter::Debug);

    let db = Database::connect(opt)
        .await
        .into_response("in database connect")?;

    Migrator::up(&db, None)
        .await
        .into_response("in migrator up")?;

    Ok(db)
}
