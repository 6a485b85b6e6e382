use std::sync::Arc;

use serde::Serialize;

use quiz_core::model::{MapTheme, QuestionStore, RegionName, RegionState};

/// Raw click reported by the map renderer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapClick {
    pub name: String,
}

impl MapClick {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Rendering collaborator that draws the map.
///
/// Implementations take a declarative option once and then accept incremental
/// series updates that recolor individual regions without a reset.
pub trait MapSurface {
    fn configure(&mut self, option: &MapOption);
    fn update_series(&mut self, data: &[SeriesItem]);
}

//
// ─── DECLARATIVE OPTION ────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MapOption {
    pub tooltip: Tooltip,
    pub series: Vec<MapSeries>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Tooltip {
    pub trigger: &'static str,
    pub formatter: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapSeries {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub map: String,
    pub roam: bool,
    pub item_style: ItemStyle,
    pub emphasis: Emphasis,
    pub label: Label,
    pub data: Vec<SeriesItem>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemStyle {
    pub area_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Emphasis {
    pub focus: &'static str,
    pub item_style: ItemStyle,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Label {
    pub show: bool,
    pub color: &'static str,
    pub position: &'static str,
    pub font_size: u32,
}

/// Per-region override inside the map series.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesItem {
    pub name: String,
    pub item_style: ItemStyle,
    pub emphasis: Emphasis,
}

fn area(color: &str) -> ItemStyle {
    ItemStyle {
        area_color: color.to_string(),
        border_color: None,
        border_width: None,
    }
}

//
// ─── ADAPTER ───────────────────────────────────────────────────────────────────
//

/// Translates renderer clicks into regions and paints answered regions.
pub struct MapAdapter {
    store: Arc<QuestionStore>,
    theme: MapTheme,
    map_name: String,
    surface: Box<dyn MapSurface>,
    painted: RegionState,
}

impl MapAdapter {
    #[must_use]
    pub fn new(
        store: Arc<QuestionStore>,
        theme: MapTheme,
        map_name: impl Into<String>,
        surface: Box<dyn MapSurface>,
    ) -> Self {
        Self {
            store,
            theme,
            map_name: map_name.into(),
            surface,
            painted: RegionState::new(),
        }
    }

    /// Exact match of the clicked name against the store's regions.
    #[must_use]
    pub fn resolve_click(&self, click: &MapClick) -> Option<RegionName> {
        self.store.resolve(&click.name).cloned()
    }

    /// The option the surface is configured with before any region is lit.
    #[must_use]
    pub fn initial_option(&self) -> MapOption {
        MapOption {
            tooltip: Tooltip {
                trigger: "item",
                formatter: "{b}",
            },
            series: vec![MapSeries {
                name: self.map_name.clone(),
                kind: "map",
                map: self.map_name.clone(),
                roam: false,
                item_style: ItemStyle {
                    area_color: self.theme.default_area().to_string(),
                    border_color: Some("#FFFFFF"),
                    border_width: Some(1),
                },
                emphasis: Emphasis {
                    focus: "none",
                    item_style: area(self.theme.hover_area()),
                },
                label: Label {
                    show: true,
                    color: "#333",
                    position: "inside",
                    font_size: 10,
                },
                data: Vec::new(),
            }],
        }
    }

    pub fn configure_surface(&mut self) {
        let option = self.initial_option();
        self.surface.configure(&option);
    }

    /// Light `region` on the map.
    ///
    /// Additive and idempotent: already painted regions are left untouched and
    /// the surface is only updated when something new is painted.
    pub fn apply_answered_visual(&mut self, region: &RegionName) -> bool {
        if !self.painted.insert(region.clone()) {
            return false;
        }
        let data = self.lit_series();
        self.surface.update_series(&data);
        true
    }

    /// Series data for every painted region, in the order they were lit.
    #[must_use]
    pub fn lit_series(&self) -> Vec<SeriesItem> {
        self.painted
            .lit_order()
            .iter()
            .map(|region| SeriesItem {
                name: region.to_string(),
                item_style: area(self.theme.lit_area()),
                emphasis: Emphasis {
                    focus: "none",
                    item_style: area(self.theme.lit_hover_area()),
                },
            })
            .collect()
    }
}
