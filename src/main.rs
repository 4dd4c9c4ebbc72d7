//! Catalog backend entry point
//!
//! All operations are exposed via GraphQL at /graphql.

use std::sync::Arc;

use anyhow::Context;

use catalog::config::Config;
use catalog::db::Database;
use catalog::{AppState, build_app, graphql, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Arc::new(Config::from_env()?);

    logging::init_tracing(config.log_format);
    tracing::info!("Starting catalog backend");

    let db = Database::connect_with_retry(
        &config.database_url,
        config.database_max_connections,
        config.database_connect_timeout,
    )
    .await?;
    db.ensure_schema().await?;
    tracing::info!(database_url = %config.database_url, "Database ready");

    let schema = graphql::build_schema(Arc::new(db.clone()));
    tracing::info!("GraphQL schema built");

    let state = AppState {
        config: config.clone(),
        db,
        schema,
    };
    let app = build_app(state);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);
    tracing::info!("GraphQL playground: http://localhost:{}/graphql", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
