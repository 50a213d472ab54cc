//! Process bootstrap for the ecosystem GraphQL API
//!
//! Composes the schema, selects a data source, and serves the gateway.
//! Composition failures abort startup: a process must never serve an
//! ambiguously merged schema.

use anyhow::Result;
use ecosystem::config::ServerConfig;
use ecosystem::core::SharedDataSource;
use ecosystem::storage::InMemoryDataSource;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();
    let schema = ecosystem::schema::compose()?;
    let datasource = build_datasource(&config).await?;

    ecosystem::server::serve(schema, datasource, &config.bind_addr()).await
}

async fn build_datasource(config: &ServerConfig) -> Result<SharedDataSource> {
    #[cfg(feature = "postgres")]
    if let Some(url) = &config.database_url {
        let db = ecosystem::storage::PostgresDataSource::connect(url).await?;
        tracing::info!("Using Postgres data source");
        return Ok(Arc::new(db));
    }

    #[cfg(not(feature = "postgres"))]
    if config.database_url.is_some() {
        tracing::warn!(
            "database_url is set but this build has no `postgres` feature; using the in-memory store"
        );
    }

    let store = match &config.seed_file {
        Some(path) => {
            tracing::info!("Seeding in-memory store from {}", path);
            InMemoryDataSource::from_seed_file(path)?
        }
        None => InMemoryDataSource::new(),
    };
    Ok(Arc::new(store))
}
