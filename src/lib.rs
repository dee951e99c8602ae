//! benchplot crate root: re-exports and module wiring.
//!
//! Throughput charts for regular-expression engine benchmarks, built on
//! egui/eframe:
//! - `data`: unit formatting, chart options, hover tooltips, series
//!   selection, and benchmark result parsing
//! - `app`: the eframe viewer wiring those pieces to egui_plot
//! - `config`: viewer configuration
//! - `error`: error types
//! - `logging`: tracing subscriber setup

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;

// Public re-exports for a compact external API
pub use app::{run_viewer, BenchPlotApp};
pub use config::ViewerConfig;
pub use data::options::{AxisMode, AxisTransform, PlotOptions, TickFormatter};
pub use data::results::{speed_history, Report, ResultSet};
pub use data::selector::{plot_selected, plot_selected_with, ChartRenderer, SelectorContainer};
pub use data::series::{DataSets, Series};
pub use data::tooltip::{HoverItem, HoverPos, Tooltip, TooltipRenderer, TooltipSurface};
pub use data::units::{format_bytes, format_bytes_per_second, format_with_suffix};
pub use error::BenchPlotError;
