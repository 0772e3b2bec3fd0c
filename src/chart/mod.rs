//! Chart requests and renderers.
//!
//! The analytics payload is turned into a [`ChartRequest`] (KDA trend plus the
//! top teammates) and handed to a [`ChartRenderer`], which returns an opaque
//! artifact. The bundled renderer emits a declarative two-panel JSON document
//! that a front-end draws.

use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::models::{AnalyticsPayload, CompatibilityRow};

/// Teammates shown in the compatibility panel.
pub const CHART_TEAMMATES: usize = 8;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("Failed to encode chart: {0}")]
    Encode(#[from] serde_json::Error),
}

/// One point of the KDA trend. `index` 1 is the oldest match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KdaPoint {
    pub index: usize,
    pub match_id: String,
    pub kda: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRequest {
    pub kda_series: Vec<KdaPoint>,
    pub teammates: Vec<CompatibilityRow>,
}

impl ChartRequest {
    pub fn from_payload(payload: &AnalyticsPayload, top_n: usize) -> Self {
        let kda_series = payload
            .performances()
            .iter()
            .enumerate()
            .map(|(i, p)| KdaPoint {
                index: i + 1,
                match_id: p.match_id.clone(),
                kda: crate::analysis::round_to(p.kda, 2),
            })
            .collect();

        Self {
            kda_series,
            teammates: payload.top_teammates(top_n).to_vec(),
        }
    }
}

/// Rendered chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartArtifact {
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

pub trait ChartRenderer: Send + Sync {
    fn render(&self, request: &ChartRequest) -> Result<ChartArtifact, ChartError>;
}

/// Renders the chart as a JSON document.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonChartRenderer;

impl ChartRenderer for JsonChartRenderer {
    fn render(&self, request: &ChartRequest) -> Result<ChartArtifact, ChartError> {
        let document = json!({
            "panels": [
                {
                    "title": "KDA Trend (Last Matches)",
                    "kind": "line",
                    "x_label": "Match index (1=oldest)",
                    "y_label": "KDA",
                    "points": request.kda_series,
                },
                {
                    "title": "Top Teammates (by Win Rate)",
                    "kind": "horizontal_bar",
                    "x_label": "Win Rate %",
                    "x_range": [0, 100],
                    "bars": request.teammates.iter().map(|r| json!({
                        "label": r.teammate,
                        "value": r.win_rate_pct,
                        "annotation": format!("{:.1}%", r.win_rate_pct),
                    })).collect::<Vec<_>>(),
                }
            ]
        });

        Ok(ChartArtifact {
            content_type: "application/json",
            bytes: serde_json::to_vec(&document)?,
        })
    }
}
