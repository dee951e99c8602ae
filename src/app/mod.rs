//! Benchmark viewer application.
//!
//! | Sub-module          | Responsibility |
//! | ------------------- | -------------- |
//! | [`canvas`]          | egui_plot [`ChartRenderer`](crate::data::selector::ChartRenderer) |
//! | [`choices`]         | Checkbox [`SelectorContainer`](crate::data::selector::SelectorContainer) |
//! | [`tooltip_surface`] | egui [`TooltipSurface`](crate::data::tooltip::TooltipSurface) |
//! | [`run`]             | [`run_viewer()`] entry point |

pub mod canvas;
pub mod choices;
pub mod tooltip_surface;
mod run;

pub use canvas::{PlotCanvas, PlotHover, RenderedPlot};
pub use choices::{Choice, ChoiceList};
pub use run::run_viewer;
pub use tooltip_surface::EguiTooltipSurface;

use eframe::egui;

use crate::config::ViewerConfig;
use crate::data::options::PlotOptions;
use crate::data::results::{speed_history, text_sizes, EngineInfo, Report};
use crate::data::selector::plot_selected_with;
use crate::data::series::DataSets;
use crate::data::tooltip::{HoverPos, TooltipRenderer};
use crate::data::units::format_bytes;
use crate::error::BenchPlotError;

/// One plot with its checkbox list.
pub struct Graph {
    /// Plot target id.
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub data_sets: DataSets,
    pub choices: ChoiceList,
    pub options: PlotOptions,
}

impl Graph {
    /// Replot from the current checkbox state.
    pub fn replot(&self, canvas: &mut PlotCanvas) {
        plot_selected_with(
            canvas,
            &self.id,
            &self.data_sets,
            &self.choices,
            &self.options,
        );
    }
}

/// Build the throughput-vs-size graphs of `report`, plus speed-over-time
/// graphs when `history` holds more than one report.
pub fn build_graphs(
    report: &Report,
    history: &[Report],
    config: &ViewerConfig,
) -> Result<Vec<Graph>, BenchPlotError> {
    let mut graphs = Vec::new();
    for (index, bench) in report.benchmarks.iter().enumerate() {
        let set = bench.result_set()?;
        graphs.push(Graph {
            id: format!("plot_parallel_{}", index + 1),
            title: bench.title(),
            description: bench.description.clone(),
            data_sets: set.data_sets(),
            choices: ChoiceList::from_choices(set.choices(), config.initially_checked),
            options: PlotOptions::parallel(),
        });

        if history.len() < 2 {
            continue;
        }
        let Some(size) = config
            .history_text_size
            .or_else(|| text_sizes(&set).last().copied())
        else {
            continue;
        };
        let series = speed_history(history, index, size)?;
        let choices = series
            .iter()
            .enumerate()
            .map(|(i, s)| (i.to_string(), s.label.clone(), s.color))
            .collect();
        graphs.push(Graph {
            id: format!("plot_time_{}", index + 1),
            title: format!("{} (history at {})", bench.title(), format_bytes(size as f64)),
            description: None,
            data_sets: series
                .into_iter()
                .enumerate()
                .map(|(i, s)| (i.to_string(), s))
                .collect(),
            choices: ChoiceList::from_choices(choices, config.initially_checked),
            options: PlotOptions::speed_time(),
        });
    }
    Ok(graphs)
}

/// eframe application showing one graph per benchmark.
pub struct BenchPlotApp {
    engines: Vec<EngineInfo>,
    graphs: Vec<Graph>,
    canvas: PlotCanvas,
    tooltips: TooltipRenderer<EguiTooltipSurface>,
    /// Graph the pointer was over last frame.
    hovered_graph: Option<usize>,
    last_pos: HoverPos,
    config: ViewerConfig,
}

impl BenchPlotApp {
    pub fn new(engines: Vec<EngineInfo>, graphs: Vec<Graph>, config: ViewerConfig) -> Self {
        let mut canvas = PlotCanvas::default();
        for graph in &graphs {
            graph.replot(&mut canvas);
        }
        let tooltips = TooltipRenderer::new(EguiTooltipSurface::default())
            .with_offset(config.hover.tooltip_offset_px);
        Self {
            engines,
            graphs,
            canvas,
            tooltips,
            hovered_graph: None,
            last_pos: HoverPos { x: 0.0, y: 0.0 },
            config,
        }
    }

    pub fn graphs(&self) -> &[Graph] {
        &self.graphs
    }

    pub fn canvas(&self) -> &PlotCanvas {
        &self.canvas
    }

    fn engines_table(&self, ui: &mut egui::Ui) {
        if self.engines.is_empty() {
            return;
        }
        egui::Grid::new("engines_table")
            .num_columns(2)
            .striped(true)
            .show(ui, |ui| {
                ui.strong("engine");
                ui.strong("commit");
                ui.end_row();
                for engine in &self.engines {
                    ui.label(&engine.name);
                    ui.monospace(&engine.commit);
                    ui.end_row();
                }
            });
        ui.separator();
    }
}

impl eframe::App for BenchPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("benchplot_status").show(ctx, |ui| {
            ui.horizontal(|ui| match self.tooltips.surface().readout() {
                Some((x, y)) => {
                    ui.label(format!("x: {x}"));
                    ui.label(format!("y: {y}"));
                }
                None => {
                    ui.weak("hover a graph to inspect points");
                }
            });
        });

        let mut hovered_now: Option<(usize, PlotHover)> = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.engines_table(ui);
                let size = egui::vec2(self.config.graph.width, self.config.graph.height);
                for (index, graph) in self.graphs.iter_mut().enumerate() {
                    ui.monospace(&graph.title);
                    if let Some(desc) = &graph.description {
                        ui.label(desc);
                    }
                    ui.horizontal_top(|ui| {
                        if let Some(hover) =
                            self.canvas
                                .show(ui, &graph.id, size, self.config.hover.radius_px)
                        {
                            hovered_now = Some((index, hover));
                        }
                        if graph.choices.ui(ui) {
                            graph.replot(&mut self.canvas);
                        }
                    });
                    ui.separator();
                }
            });
        });

        match hovered_now {
            Some((index, hover)) => {
                self.hovered_graph = Some(index);
                self.last_pos = hover.pos;
                self.tooltips.on_hover(hover.pos, hover.item.as_ref());
            }
            None => {
                if self.hovered_graph.take().is_some() {
                    self.tooltips.on_hover(self.last_pos, None);
                }
            }
        }

        self.tooltips.surface().draw(ctx);
    }
}
