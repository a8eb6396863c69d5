use std::sync::Arc;
use axum::{Extension, Json, Router};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use serde_json::json;
use tracing::debug;
use crate::dispatcher::{Dispatcher, IncomingMessage};

pub fn router(dispatcher: Arc<Dispatcher>) -> Router {
    Router::new()
        .route("/messages", post(receive_message))
        .route_layer(Extension(dispatcher))
}

/// Replies with `{"reply": ...}`, or 204 when the message gets no answer.
pub async fn receive_message(
    Extension(dispatcher): Extension<Arc<Dispatcher>>,
    Json(body): Json<IncomingMessage>,
) -> impl IntoResponse {
    return match dispatcher.handle(&body).await {
        Some(reply) => {
            (
                StatusCode::OK,
                Json(json!({ "reply": reply }))
            ).into_response()
        }
        None => {
            debug!("No reply for message from {}", body.author_id);
            StatusCode::NO_CONTENT.into_response()
        }
    };
}
