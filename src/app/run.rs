//! Native-window entry point for the viewer.

use eframe::egui;

use crate::config::ViewerConfig;
use crate::data::results::Report;
use crate::error::BenchPlotError;

use super::{build_graphs, BenchPlotApp};

/// Open the viewer for `reports` and block until the window is closed.
///
/// The most recent report provides the throughput-vs-size graphs; all of them
/// together feed the speed-over-time graphs.
pub fn run_viewer(reports: Vec<Report>, config: ViewerConfig) -> Result<(), BenchPlotError> {
    let Some(latest) = reports.iter().max_by(|a, b| a.time_ms.total_cmp(&b.time_ms)) else {
        tracing::warn!("no reports to show");
        return Ok(());
    };
    let graphs = build_graphs(latest, &reports, &config)?;
    tracing::info!(graphs = graphs.len(), "starting viewer");

    let app = BenchPlotApp::new(latest.engines.clone(), graphs, config.clone());
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(egui::vec2(
            config.window_size[0],
            config.window_size[1],
        )),
        ..Default::default()
    };

    eframe::run_native(&config.title, options, Box::new(move |_cc| Ok(Box::new(app))))
        .map_err(|e| BenchPlotError::Viewer(e.to_string()))
}
