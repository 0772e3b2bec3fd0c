use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::IntoResponse;

use super::{resolve_count, CountParams};
use crate::api::state::AppState;
use crate::api::ApiError;
use crate::chart::{ChartRequest, CHART_TEAMMATES};

/// Rendered chart for the player's recent matches.
pub async fn player_chart(
    State(state): State<AppState>,
    Path((name, tag)): Path<(String, String)>,
    Query(params): Query<CountParams>,
) -> Result<impl IntoResponse, ApiError> {
    let count = resolve_count(params.count, state.default_count)?;
    let report = state.pipeline.analyze(&name, &tag, count).await?;

    let request = ChartRequest::from_payload(&report.payload, CHART_TEAMMATES);
    let artifact = state
        .chart_renderer
        .render(&request)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(([(header::CONTENT_TYPE, artifact.content_type)], artifact.bytes))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{json, Value};

    use crate::api::build_router;
    use crate::api::test_support::{get_raw, ids_url, test_state, ACCOUNT, MATCHES};
    use crate::fetch::mock::MockTransport;
    use crate::models::fixtures::team_match;

    #[tokio::test]
    async fn test_chart_ok() {
        let transport = MockTransport::new()
            .with_json(ACCOUNT, json!({"puuid": "p-1"}))
            .with_json(&ids_url(10), json!(["NA1_1"]))
            .with_json(
                &format!("{MATCHES}/NA1_1"),
                team_match("NA1_1", ("Me", "EUW"), &[("A", "1"), ("B", "2")], true),
            );

        let app = build_router(test_state(transport));
        let (status, content_type, body) = get_raw(app, "/api/players/Me/EUW/chart").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/json"));

        let document: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(document["panels"][0]["points"][0]["index"], 1);
        assert_eq!(document["panels"][0]["points"][0]["kda"], 6.0);
        assert_eq!(document["panels"][1]["bars"].as_array().unwrap().len(), 2);
    }
}
