//! Webhook entry point.
//!
//! Telegram POSTs updates to the configured public URL; teloxide's axum
//! adapter decodes them into the same update stream the polling listener
//! produces. The router additionally serves a `/health` endpoint.

use std::convert::Infallible;
use std::net::SocketAddr;

use axum::{routing::get, Json};
use serde_json::json;
use teloxide::update_listeners::{webhooks, UpdateListener};
use tokio::net::TcpListener;
use url::Url;

use crate::telegram::Bot;

/// Start the webhook HTTP server and return its update listener.
///
/// Registers the webhook with Telegram (`setWebhook`), binds the axum
/// server on `0.0.0.0:port`, and serves it in a background task. The
/// returned listener feeds the dispatcher; the server shuts down when the
/// listener is stopped.
///
/// # Arguments
/// * `bot` - Bot instance used to register the webhook
/// * `port` - Local port to bind
/// * `url` - Public HTTPS URL Telegram delivers updates to
pub async fn webhook_listener(
    bot: Bot,
    port: u16,
    url: Url,
) -> anyhow::Result<impl UpdateListener<Err = Infallible>> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let (listener, stop_flag, router) = webhooks::axum_to_router(bot, webhooks::Options::new(addr, url)).await?;
    let router = router.route("/health", get(health_handler));

    let tcp = TcpListener::bind(&addr).await?;
    log::info!("Webhook server listening on http://{}", addr);
    log::info!("  /health - Health check");

    tokio::spawn(async move {
        if let Err(e) = axum::serve(tcp, router).with_graceful_shutdown(stop_flag).await {
            log::error!("Webhook server error: {}", e);
        }
    });

    Ok(listener)
}

/// GET /health — liveness probe for the hosting platform.
async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
