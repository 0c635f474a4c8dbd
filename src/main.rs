use api::Config;
use shuttle_runtime::{Error, SecretStore, Secrets};
use tracing_subscriber::EnvFilter;

#[shuttle_runtime::main]
async fn main(
    #[Secrets] secret_store: SecretStore,
    #[shuttle_shared_db::Postgres(local_uri = "{secrets.LOCAL_DATABASE_URL}")]
    conn_string: String,
) -> shuttle_axum::ShuttleAxum {
    if secret_store.get("ENV").as_deref() == Some("prod") {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("info,catalog=debug")),
            )
            .init();
    }

    let Some(redis_url) = secret_store.get("REDIS_URL") else {
        return Err(Error::BuildPanic("REDIS_URL was not found".to_string()));
    };
    let Some(admin_api_key) = secret_store.get("ADMIN_API_KEY") else {
        return Err(Error::BuildPanic(
            "ADMIN_API_KEY was not found".to_string(),
        ));
    };
    let config_name =
        format!("Config{}.toml", secret_store.get("CONFIG").unwrap_or_default());

    let repository = repository::init_repository(&conn_string, &redis_url)
        .await
        .map_err(|e| Error::BuildPanic(e.to_string()))?;
    let config = Config::load(&config_name)
        .map_err(|e| Error::BuildPanic(e.to_string()))?;

    let router = api::serve(repository, &config, admin_api_key)
        .await
        .map_err(|e| Error::BuildPanic(e.to_string()))?;

    Ok(router.into())
}
