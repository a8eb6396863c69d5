use std::net::SocketAddr;
use std::sync::Arc;
use anyhow::Context;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;
use crate::config::Config;
use crate::dispatcher::Dispatcher;
use crate::helpers::handler_404::page_not_found_handler;

pub mod health_check;
pub mod message_controller;

pub async fn serve(
    dispatcher: Arc<Dispatcher>,
    config: &Config,
) -> anyhow::Result<()> {
    let application = router_endpoints(dispatcher)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
        );

    let port = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Bot webhook listening on port: {}", port);
    axum::Server::bind(&port)
        .serve(application.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Error spinning up the bot webhook server")
}

pub fn router_endpoints(dispatcher: Arc<Dispatcher>) -> Router {
    health_check::router()
        .merge(message_controller::router(dispatcher))
        .fallback(page_not_found_handler)
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutting down bot webhook server");
    }
}
