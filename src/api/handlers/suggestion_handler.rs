use axum::{Json, extract::State, response::IntoResponse};

use crate::api::{app_state::AppState, dto::message_dto::*};

pub async fn list_suggestions(State(state): State<AppState>) -> impl IntoResponse {
    Json(SuggestionsResponse {
        suggestions: state.suggestions.suggestions(),
    })
}

pub async fn health_tip(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthTipResponse {
        tip: state.suggestions.health_tip(),
    })
}
