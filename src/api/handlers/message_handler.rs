use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use tracing::debug;

use crate::{
    api::{app_state::AppState, dto::message_dto::*},
    error::AppError,
    models::message::Message,
};

/// Logs the message to history, then answers it.
///
/// Bodies that are not valid JSON are rejected before anything is logged.
pub async fn send_message(
    State(state): State<AppState>,
    payload: Result<Json<SendMessageRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        debug!("Rejected message body: {}", rejection.body_text());
        AppError::Validation(rejection.body_text())
    })?;
    let text = request.normalized_text();
    let language = request.language().to_string();
    debug!(chars = text.chars().count(), language = %language, "Received message");

    state
        .history
        .append(Message::new(text.clone(), language.clone()))
        .await?;

    let result = state.responder.classify(&text, &language);
    state.metrics.record_classification(result.category);

    Ok(Json(SendMessageResponse {
        response: result.response_text,
    }))
}

pub async fn list_history(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let history = state.history.list().await?;
    debug!("Listing {} history messages", history.len());

    Ok(Json(HistoryResponse { history }))
}
