use crate::controller::{self, ModalEvent, ModalUpdate};
use crate::routes::{Response, UNAVAILABLE_MESSAGE};
use crate::AppState;
use axum::{extract::State, http::StatusCode, Json};
use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct ModalRequest {
    /// Absent on the initial render, before any card or close click.
    #[serde(default)]
    pub event: Option<ModalEvent>,
    pub modal_open: bool,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// POST /api/modal — apply a card click or close action to the modal state.
pub async fn modal(
    State(state): State<AppState>,
    Json(request): Json<ModalRequest>,
) -> (StatusCode, Json<Response<ModalUpdate>>) {
    match controller::on_card_or_close(
        state.source.as_ref(),
        request.event,
        request.modal_open,
        request.start_date,
        request.end_date,
    )
    .await
    {
        Ok(update) => (StatusCode::OK, Json(Response::Success(update))),
        Err(error) => {
            tracing::error!("Modal update failed: {}", error);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(Response::Error {
                    error: UNAVAILABLE_MESSAGE.to_string(),
                }),
            )
        }
    }
}
