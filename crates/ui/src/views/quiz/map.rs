use dioxus::document::eval;
use dioxus::prelude::*;
use serde::Deserialize;
use tracing::{debug, error, warn};

use services::{MapClick, MapOption, MapSurface, SeriesItem};

use super::scripts::{configure_chart_script, init_chart_script, update_series_script};
use crate::context::MapAssets;

pub(super) const CHART_ELEMENT_ID: &str = "map-container";

/// Messages the chart script sends back over the eval channel.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum ChartEvent {
    Ready,
    Click { name: String },
    Failed { reason: String },
}

/// `MapSurface` backed by an ECharts instance living in the webview.
///
/// Options and series are kept on the JS side so they apply even when they
/// arrive before the chart has finished loading.
#[derive(Clone, Copy, Debug, Default)]
pub struct EchartsSurface;

impl MapSurface for EchartsSurface {
    fn configure(&mut self, option: &MapOption) {
        match serde_json::to_string(option) {
            Ok(json) => {
                let _ = eval(&configure_chart_script(&json));
            }
            Err(err) => warn!(error = %err, "failed to serialize map option"),
        }
    }

    fn update_series(&mut self, data: &[SeriesItem]) {
        match serde_json::to_string(data) {
            Ok(json) => {
                let _ = eval(&update_series_script(&json));
            }
            Err(err) => warn!(error = %err, "failed to serialize map series"),
        }
    }
}

#[component]
pub fn MapCanvas(
    assets: MapAssets,
    map_name: String,
    on_region_click: Callback<MapClick>,
) -> Element {
    // One click listener per mount.
    use_hook(move || {
        let script = init_chart_script(
            CHART_ELEMENT_ID,
            &assets.echarts_url,
            &assets.map_script_url,
            &map_name,
        );
        let mut events = eval(&script);
        spawn(async move {
            loop {
                match events.recv::<ChartEvent>().await {
                    Ok(ChartEvent::Click { name }) => on_region_click.call(MapClick::new(name)),
                    Ok(ChartEvent::Ready) => debug!("map chart ready"),
                    Ok(ChartEvent::Failed { reason }) => {
                        error!(%reason, "map chart failed to initialize");
                        break;
                    }
                    Err(err) => {
                        debug!(error = ?err, "map event channel closed");
                        break;
                    }
                }
            }
        });
    });

    rsx! {
        div { id: CHART_ELEMENT_ID, class: "map-container" }
    }
}
