use anyhow::Context;

use catalog_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    catalog_observability::init();

    let config = ApiConfig::from_env().context("invalid configuration")?;

    let services = catalog_api::app::services::build_services(config.seed_path.as_deref())
        .context("failed to build catalog services")?;
    let app = catalog_api::app::build_app(services);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
