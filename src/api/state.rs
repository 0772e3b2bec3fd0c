use std::sync::Arc;

use crate::chart::ChartRenderer;
use crate::config::AppConfig;
use crate::pipeline::AnalysisPipeline;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<AnalysisPipeline>,
    pub chart_renderer: Arc<dyn ChartRenderer>,
    pub default_count: usize,
    pub cors_origin: String,
}

impl AppState {
    pub fn new(
        pipeline: AnalysisPipeline,
        chart_renderer: Arc<dyn ChartRenderer>,
        config: &AppConfig,
    ) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            chart_renderer,
            default_count: config.riot.default_match_count,
            cors_origin: config.server.cors_origin.clone(),
        }
    }
}
