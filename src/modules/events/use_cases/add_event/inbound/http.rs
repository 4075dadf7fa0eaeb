use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::events::use_cases::add_event::command::AddEvent;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AddEventBody {
    pub title: String,
    pub description: String,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub message: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<AddEventBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = AddEvent {
        title: body.title,
        description: body.description,
    };

    match state.add_event.handle(command).await {
        Ok(payload) => Json(payload).into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                message: err.to_string(),
            }),
        )
            .into_response(),
    }
}
