use crate::controller::{self, RangeUpdate};
use crate::routes::{Response, UNAVAILABLE_MESSAGE};
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct RangeQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// GET /api/range — rebuild the summary cards and the chart for a range.
pub async fn range(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> (StatusCode, Json<Response<RangeUpdate>>) {
    match controller::on_range_change(state.source.as_ref(), query.start_date, query.end_date).await
    {
        Ok(update) => (StatusCode::OK, Json(Response::Success(update))),
        Err(error) => {
            tracing::error!("Range update failed: {}", error);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(Response::Error {
                    error: UNAVAILABLE_MESSAGE.to_string(),
                }),
            )
        }
    }
}
