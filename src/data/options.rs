//! Chart display options.
//!
//! [`PlotOptions`] mirrors the flot option schema (`series`, `legend`, `grid`,
//! `xaxis`, `yaxis`) so a configuration can be dumped as JSON, while the
//! viewer reads the same values to drive `egui_plot`. Function-valued fields
//! (axis transforms, tick formatters) are closed enums that serialize as
//! their names.

use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::data::units::{format_bytes, format_bytes_per_second, KIB, MIB};

// ─────────────────────────────────────────────────────────────────────────────
// Series / legend / grid
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinesOptions {
    pub show: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointsOptions {
    pub show: bool,
    pub radius: f32,
}

/// How every series is drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesOptions {
    pub lines: LinesOptions,
    pub points: PointsOptions,
}

impl Default for SeriesOptions {
    fn default() -> Self {
        Self {
            lines: LinesOptions { show: true },
            points: PointsOptions {
                show: true,
                radius: 2.0,
            },
        }
    }
}

/// Compass position of the legend box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LegendPosition {
    #[serde(rename = "nw")]
    NorthWest,
    #[serde(rename = "ne")]
    NorthEast,
    #[serde(rename = "sw")]
    SouthWest,
    #[serde(rename = "se")]
    SouthEast,
}

impl LegendPosition {
    pub fn corner(self) -> egui_plot::Corner {
        match self {
            LegendPosition::NorthWest => egui_plot::Corner::LeftTop,
            LegendPosition::NorthEast => egui_plot::Corner::RightTop,
            LegendPosition::SouthWest => egui_plot::Corner::LeftBottom,
            LegendPosition::SouthEast => egui_plot::Corner::RightBottom,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendOptions {
    pub position: LegendPosition,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridOptions {
    /// Hover events (and therefore tooltips) are reported.
    pub hoverable: bool,
    /// Click events are reported.
    pub clickable: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Axes
// ─────────────────────────────────────────────────────────────────────────────

/// A labeled position on an axis, serialized as `[value, "label"]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick(pub f64, pub String);

impl Tick {
    pub fn new(value: f64, label: impl Into<String>) -> Self {
        Tick(value, label.into())
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn label(&self) -> &str {
        &self.1
    }
}

/// Value transform applied before mapping data to screen space, together
/// with its inverse.
///
/// Serializes as the `transform` / `inverseTransform` pair of function names,
/// or nothing for [`AxisTransform::Identity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisTransform {
    Identity,
    /// Natural logarithm, inverted by `exp`.
    Log,
}

impl AxisTransform {
    pub fn apply(self, v: f64) -> f64 {
        match self {
            AxisTransform::Identity => v,
            AxisTransform::Log => v.ln(),
        }
    }

    pub fn inverse(self, v: f64) -> f64 {
        match self {
            AxisTransform::Identity => v,
            AxisTransform::Log => v.exp(),
        }
    }

    /// Names of the forward and inverse functions.
    pub fn function_names(self) -> Option<(&'static str, &'static str)> {
        match self {
            AxisTransform::Identity => None,
            AxisTransform::Log => Some(("ln", "exp")),
        }
    }
}

impl Serialize for AxisTransform {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if let Some((forward, inverse)) = self.function_names() {
            map.serialize_entry("transform", forward)?;
            map.serialize_entry("inverseTransform", inverse)?;
        }
        map.end()
    }
}

/// Special interpretation of axis values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisMode {
    /// Values are milliseconds since the UNIX epoch.
    Time,
}

/// Named tick label formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TickFormatter {
    /// Plain number with two decimals.
    Plain,
    BytesPerSecond,
}

impl TickFormatter {
    pub fn format(self, value: f64) -> String {
        match self {
            TickFormatter::Plain => format!("{:.2}", value),
            TickFormatter::BytesPerSecond => format_bytes_per_second(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XAxisOptions {
    /// Fixed tick positions (in data units). Empty means automatic.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ticks: Vec<Tick>,
    #[serde(flatten)]
    pub transform: AxisTransform,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<AxisMode>,
}

impl XAxisOptions {
    /// Data value to plot coordinate.
    pub fn to_plot(&self, v: f64) -> f64 {
        self.transform.apply(v)
    }

    /// Plot coordinate back to data value.
    pub fn from_plot(&self, v: f64) -> f64 {
        self.transform.inverse(v)
    }

    /// Label for a data value: the matching fixed tick label when there is
    /// one, otherwise a time or byte rendering depending on the axis mode.
    pub fn label(&self, value: f64, span: f64) -> String {
        if let Some(tick) = self
            .ticks
            .iter()
            .find(|t| (t.value() - value).abs() <= t.value().abs() * 1e-9)
        {
            return tick.label().to_string();
        }
        match self.mode {
            Some(AxisMode::Time) => format_time_ms(value, span),
            None => format_bytes(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YAxisOptions {
    #[serde(rename = "tickFormatter")]
    pub tick_formatter: TickFormatter,
}

// ─────────────────────────────────────────────────────────────────────────────
// PlotOptions
// ─────────────────────────────────────────────────────────────────────────────

/// Full chart configuration handed to a [`ChartRenderer`](crate::data::selector::ChartRenderer).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotOptions {
    pub series: SeriesOptions,
    pub legend: LegendOptions,
    pub grid: GridOptions,
    pub xaxis: XAxisOptions,
    pub yaxis: YAxisOptions,
}

impl PlotOptions {
    fn base(xaxis: XAxisOptions) -> Self {
        Self {
            series: SeriesOptions::default(),
            legend: LegendOptions {
                position: LegendPosition::NorthWest,
            },
            grid: GridOptions {
                hoverable: true,
                clickable: true,
            },
            xaxis,
            yaxis: YAxisOptions {
                tick_formatter: TickFormatter::BytesPerSecond,
            },
        }
    }

    /// Options for throughput against text size, on a log x-axis with
    /// power-of-two ticks from 8 B to 16 MiB.
    pub fn parallel() -> Self {
        Self::base(XAxisOptions {
            ticks: parallel_ticks(),
            transform: AxisTransform::Log,
            mode: None,
        })
    }

    /// Options for throughput against wall-clock time.
    pub fn speed_time() -> Self {
        Self::base(XAxisOptions {
            ticks: Vec::new(),
            transform: AxisTransform::Identity,
            mode: Some(AxisMode::Time),
        })
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn parallel_ticks() -> Vec<Tick> {
    vec![
        Tick::new(8.0, "8 B"),
        Tick::new(16.0, "16 B"),
        Tick::new(64.0, "64 B"),
        Tick::new(256.0, "256 B"),
        Tick::new(KIB, "1 kiB"),
        Tick::new(4.0 * KIB, "4 kiB"),
        Tick::new(16.0 * KIB, "16 kiB"),
        Tick::new(64.0 * KIB, "64 kiB"),
        Tick::new(256.0 * KIB, "256 kiB"),
        Tick::new(MIB, "1 MiB"),
        Tick::new(4.0 * MIB, "4 MiB"),
        Tick::new(16.0 * MIB, "16 MiB"),
    ]
}

/// Render a millisecond timestamp in UTC. Spans under a day show the time of
/// day only.
pub fn format_time_ms(ms: f64, span_ms: f64) -> String {
    const DAY_MS: f64 = 86_400_000.0;
    let dt = if ms.is_finite() {
        DateTime::<Utc>::from_timestamp_millis(ms as i64)
    } else {
        None
    }
    .unwrap_or_default();
    if span_ms.abs() < DAY_MS {
        dt.format("%H:%M:%S").to_string()
    } else {
        dt.format("%Y-%m-%d").to_string()
    }
}
