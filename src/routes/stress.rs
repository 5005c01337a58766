//! Load generation endpoint.
//!
//! `GET /stress/{n}` burns CPU proportionally to `n` and reports how long it
//! took. Used to drive horizontal pod autoscaling. There is no upper bound on
//! `n` and no cancellation: a request runs until the loop finishes.

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Serialize;
use serde_json::value::RawValue;

use crate::error::AppError;
use crate::middleware::RequestId;
use crate::state::AppState;
use crate::stress;

/// Body of `GET /stress/{n}`.
#[derive(Debug, Serialize)]
pub struct StressResponse {
    /// Decimal integer of any width, emitted as a bare JSON number
    pub result: Box<RawValue>,
    pub time_taken: f64,
    pub hostname: String,
}

/// Load generation handler.
///
/// `n` that is not an integer is rejected by the `Path` extractor with 400
/// before this runs. Negative `n` performs no work.
pub async fn load(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(n): Path<i64>,
) -> Result<Json<StressResponse>, AppError> {
    let outcome = tokio::task::spawn_blocking(move || stress::run(n)).await?;

    tracing::debug!(
        request_id = %request_id.0,
        n,
        iterations = outcome.iterations,
        elapsed_ms = outcome.elapsed.as_millis() as u64,
        "Load run finished"
    );

    Ok(Json(StressResponse {
        result: RawValue::from_string(outcome.result.to_string())?,
        time_taken: outcome.elapsed.as_secs_f64(),
        hostname: state.identity.hostname.clone(),
    }))
}
