use std::net::{Ipv4Addr, SocketAddr};

use anyhow::Context;
use api::{serve, Config};
use toml::{map::Map, Value};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let secrets = util::load_env("Secrets.dev.toml")?;
    let conn_string = secret(&secrets, "LOCAL_DATABASE_URL")?;
    let redis_url = secret(&secrets, "REDIS_URL")?;
    let admin_api_key = secret(&secrets, "ADMIN_API_KEY")?;
    let config = secrets
        .get("CONFIG")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let config_name = &format!("Config{}.toml", config);

    let repository = repository::init_repository(conn_string, redis_url)
        .await
        .context("failed to init repository")?;

    let config = Config::load(config_name)?;
    let router = serve(repository, &config, admin_api_key.to_string()).await?;

    let address = SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.server.port));
    let listener = TcpListener::bind(&address).await?;
    info!(task = "listen", %address);

    Ok(axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?)
}

fn secret<'a>(
    secrets: &'a Map<String, Value>,
    key: &str,
) -> anyhow::Result<&'a str> {
    secrets
        .get(key)
        .and_then(Value::as_str)
        .with_context(|| format!("{} was not found in Secrets.dev.toml", key))
}
