//! Viewer configuration.
//!
//! Loaded from a YAML (`.yaml` / `.yml`) or JSON file; every field has a
//! default so partial files are fine.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::tooltip::TOOLTIP_OFFSET;
use crate::error::BenchPlotError;

// ─────────────────────────────────────────────────────────────────────────────
// Sub-configs
// ─────────────────────────────────────────────────────────────────────────────

/// Size of each benchmark graph in points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphSize {
    pub width: f32,
    pub height: f32,
}

impl Default for GraphSize {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 400.0,
        }
    }
}

/// Hover and tooltip behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoverConfig {
    /// Maximum screen distance (px) between pointer and a point for the point
    /// to count as hovered.
    pub radius_px: f32,
    /// Offset (px) of the tooltip from the hovered point.
    pub tooltip_offset_px: f32,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            radius_px: 10.0,
            tooltip_offset_px: TOOLTIP_OFFSET,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ViewerConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration for the benchmark viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Native window title.
    pub title: String,
    /// Initial window size `[width, height]`.
    pub window_size: [f32; 2],
    pub graph: GraphSize,
    pub hover: HoverConfig,
    /// Whether every series checkbox starts checked.
    pub initially_checked: bool,
    /// Text size (bytes) used for the speed-over-time graphs.
    pub history_text_size: Option<u64>,
    /// Log filter directive used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "Benchmark results".to_string(),
            window_size: [1100.0, 900.0],
            graph: GraphSize::default(),
            hover: HoverConfig::default(),
            initially_checked: true,
            history_text_size: None,
            log_level: "info".to_string(),
        }
    }
}

impl ViewerConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, BenchPlotError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_json(json: &str) -> Result<Self, BenchPlotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from `path`, picking the format from the file extension. Unknown
    /// extensions are read as YAML.
    pub fn load(path: &Path) -> Result<Self, BenchPlotError> {
        let txt = std::fs::read_to_string(path).map_err(|source| BenchPlotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json(&txt)
        } else {
            Self::from_yaml(&txt)
        }
    }
}
