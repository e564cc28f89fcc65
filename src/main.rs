mod config;
mod feed;
mod graphql;
mod page;
mod routes;
mod state;
mod submission;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::GuestbookConfig::from_env().expect("invalid guestbook config");
    let backend = graphql::GraphQlClient::new(&config).expect("graphql client init failed");
    tracing::info!(endpoint = backend.endpoint(), policy = ?config.submit_policy, "graphql backend configured");

    let port = config.port;
    let state = state::AppState::new(config, Arc::new(backend));

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "guestbook listening");
    axum::serve(listener, app).await.expect("server failed");
}
