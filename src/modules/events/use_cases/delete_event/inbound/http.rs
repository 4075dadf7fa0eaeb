use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::events::use_cases::delete_event::command::DeleteEvent;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct DeleteEventBody {
    pub title: String,
    pub description: String,
    pub id: i64,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<DeleteEventBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = DeleteEvent {
        title: body.title,
        description: body.description,
        id: body.id,
    };

    Json(state.delete_event.handle(command).await).into_response()
}
