use axum::extract::{Path, Query, State};
use axum::Json;

use super::{resolve_count, CountParams};
use crate::api::state::AppState;
use crate::api::ApiError;
use crate::pipeline::AnalysisReport;

pub async fn player_analysis(
    State(state): State<AppState>,
    Path((name, tag)): Path<(String, String)>,
    Query(params): Query<CountParams>,
) -> Result<Json<AnalysisReport>, ApiError> {
    let count = resolve_count(params.count, state.default_count)?;
    let report = state.pipeline.analyze(&name, &tag, count).await?;
    Ok(Json(report))
}
