use axum::extract::{Path, State};
use axum::Json;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::pipeline::RoastReport;

pub async fn player_roast(
    State(state): State<AppState>,
    Path((name, tag)): Path<(String, String)>,
) -> Result<Json<RoastReport>, ApiError> {
    let report = state.pipeline.roast(&name, &tag).await?;
    Ok(Json(report))
}
