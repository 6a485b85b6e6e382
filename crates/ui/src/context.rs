use std::sync::Arc;

use quiz_core::model::QuizSettings;
use services::QuizLoader;

/// Where the webview fetches the chart library and the map geometry from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapAssets {
    pub echarts_url: String,
    pub map_script_url: String,
}

impl Default for MapAssets {
    fn default() -> Self {
        Self {
            echarts_url: "https://cdn.jsdelivr.net/npm/echarts@5.5.0/dist/echarts.min.js".to_string(),
            map_script_url: "https://cdn.jsdelivr.net/npm/echarts@4.9.0/map/js/china.js".to_string(),
        }
    }
}

pub trait UiApp: Send + Sync {
    fn quiz_loader(&self) -> Arc<QuizLoader>;
    fn map_assets(&self) -> MapAssets;
}

#[derive(Clone)]
pub struct AppContext {
    quiz_loader: Arc<QuizLoader>,
    map_assets: MapAssets,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz_loader: app.quiz_loader(),
            map_assets: app.map_assets(),
        }
    }

    #[must_use]
    pub fn quiz_loader(&self) -> Arc<QuizLoader> {
        Arc::clone(&self.quiz_loader)
    }

    #[must_use]
    pub fn settings(&self) -> &QuizSettings {
        self.quiz_loader.settings()
    }

    #[must_use]
    pub fn map_assets(&self) -> &MapAssets {
        &self.map_assets
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
