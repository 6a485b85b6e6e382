use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use tracing::info;
use tracing_subscriber::EnvFilter;

use quiz_core::model::QuizSettingsDraft;
use services::QuizLoader;
use storage::source_from_location;
use ui::{App, MapAssets, UiApp, build_app_context};

#[derive(Parser, Debug)]
#[command(name = "map-quiz")]
#[command(about = "Light up the map by answering a question for each region")]
struct Cli {
    /// Question document, as a file path or an http(s) URL
    #[arg(long, env = "MAP_QUIZ_QUESTIONS", default_value = "data/questions.json")]
    questions: String,

    /// Delay between a correct answer and the knowledge popup, in milliseconds
    #[arg(long, env = "MAP_QUIZ_TRANSITION_MS")]
    transition_ms: Option<u64>,

    /// Fill color of answered regions
    #[arg(long, env = "MAP_QUIZ_LIT_COLOR")]
    lit_color: Option<String>,

    /// Hover color of answered regions
    #[arg(long, env = "MAP_QUIZ_LIT_HOVER_COLOR")]
    lit_hover_color: Option<String>,

    /// Registered map name to render
    #[arg(long, env = "MAP_QUIZ_MAP")]
    map: Option<String>,

    /// Script URL for the chart library
    #[arg(long, env = "MAP_QUIZ_ECHARTS_URL")]
    echarts_url: Option<String>,

    /// Script URL that registers the map geometry
    #[arg(long, env = "MAP_QUIZ_MAP_SCRIPT_URL")]
    map_script_url: Option<String>,

    /// Log filter directive; falls back to RUST_LOG, then "info"
    #[arg(long)]
    log: Option<String>,
}

impl Cli {
    fn settings_draft(&self) -> QuizSettingsDraft {
        QuizSettingsDraft {
            transition_delay_ms: self.transition_ms,
            lit_color: self.lit_color.clone(),
            lit_hover_color: self.lit_hover_color.clone(),
            map_name: self.map.clone(),
            ..QuizSettingsDraft::default()
        }
    }

    fn map_assets(&self) -> MapAssets {
        let defaults = MapAssets::default();
        MapAssets {
            echarts_url: self.echarts_url.clone().unwrap_or(defaults.echarts_url),
            map_script_url: self
                .map_script_url
                .clone()
                .unwrap_or(defaults.map_script_url),
        }
    }
}

struct DesktopApp {
    quiz_loader: Arc<QuizLoader>,
    map_assets: MapAssets,
}

impl UiApp for DesktopApp {
    fn quiz_loader(&self) -> Arc<QuizLoader> {
        Arc::clone(&self.quiz_loader)
    }

    fn map_assets(&self) -> MapAssets {
        self.map_assets.clone()
    }
}

fn init_tracing(directive: Option<&str>) {
    let filter = directive
        .map(EnvFilter::new)
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run(cli: &Cli) -> Result<()> {
    let settings = cli
        .settings_draft()
        .validate()
        .context("invalid quiz settings")?;
    let loader = QuizLoader::new(source_from_location(&cli.questions), settings);
    info!(
        questions = %loader.source_location(),
        map = loader.settings().map_name(),
        transition_ms = loader.settings().transition_delay().as_millis(),
        "starting map quiz"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        quiz_loader: Arc::new(loader),
        map_assets: cli.map_assets(),
    });
    let context = build_app_context(&app);

    // Some tao setups default to an always-on-top window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("点亮中国地图")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log.as_deref());

    if let Err(err) = run(&cli) {
        // Printed once at the binary boundary.
        eprintln!("{err:#}");
        std::process::exit(2);
    }
}
