//! GraphQL gateway
//!
//! The transport layer around the composed schema: one POST endpoint that
//! executes queries with the shared data source injected into the request
//! context, plus the playground UI and an SDL export. The gateway adds no
//! semantics of its own; filter validation and relation resolution happen in
//! the resolvers.

use crate::core::datasource::SharedDataSource;
use anyhow::Result;
use async_graphql::dynamic::Schema;
use async_graphql::http::{GraphQLPlaygroundConfig, playground_source};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
struct AppState {
    schema: Schema,
    datasource: SharedDataSource,
}

/// Build the GraphQL router
///
/// Routes:
/// - `POST /graphql` — query/mutation endpoint
/// - `GET /graphql/playground` — playground UI
/// - `GET /graphql/schema` — SDL export
pub fn build_router(schema: Schema, datasource: SharedDataSource) -> Router {
    Router::new()
        .route("/graphql", post(graphql_handler))
        .route("/graphql/playground", get(graphql_playground))
        .route("/graphql/schema", get(graphql_sdl))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(AppState { schema, datasource })
}

/// Execute a GraphQL request with the data source attached to its context
async fn graphql_handler(
    State(state): State<AppState>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    let request = request.into_inner().data(state.datasource.clone());
    state.schema.execute(request).await.into()
}

async fn graphql_playground() -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}

async fn graphql_sdl(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; charset=utf-8",
        )],
        state.schema.sdl(),
    )
}

/// Serve the gateway with graceful shutdown
///
/// Binds the listener, serves requests, and drains on SIGTERM or Ctrl+C.
pub async fn serve(schema: Schema, datasource: SharedDataSource, addr: &str) -> Result<()> {
    let app = build_router(schema, datasource);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("GraphQL server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
