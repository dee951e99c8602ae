//! egui_plot backend for [`ChartRenderer`].
//!
//! `plot` calls only store what to draw; [`PlotCanvas::show`] draws the
//! stored state every frame, so a target keeps its last rendering until the
//! next `plot` call for it.

use std::collections::HashMap;
use std::ops::RangeInclusive;

use eframe::egui;
use egui_plot::{GridInput, GridMark, Legend, Line, Plot, PlotPoint, Points};

use crate::data::options::{PlotOptions, XAxisOptions};
use crate::data::selector::ChartRenderer;
use crate::data::series::Series;
use crate::data::tooltip::{HoverItem, HoverPos};

/// Last series and options plotted into a target.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPlot {
    pub series: Vec<Series>,
    pub options: PlotOptions,
}

/// Pointer state over a plot for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotHover {
    pub pos: HoverPos,
    pub item: Option<HoverItem>,
}

/// Store of rendered plots, keyed by target id.
#[derive(Debug, Default)]
pub struct PlotCanvas {
    plots: HashMap<String, RenderedPlot>,
    render_count: usize,
}

impl ChartRenderer for PlotCanvas {
    fn plot(&mut self, target: &str, series: Vec<Series>, options: &PlotOptions) {
        self.render_count += 1;
        self.plots.insert(
            target.to_string(),
            RenderedPlot {
                series,
                options: options.clone(),
            },
        );
    }
}

impl PlotCanvas {
    pub fn get(&self, target: &str) -> Option<&RenderedPlot> {
        self.plots.get(target)
    }

    /// Number of `plot` calls received so far.
    pub fn render_count(&self) -> usize {
        self.render_count
    }

    /// Draw `target` into `ui`. Returns the hover state when the pointer is
    /// over the plot and the options allow hovering.
    pub fn show(
        &self,
        ui: &mut egui::Ui,
        target: &str,
        size: egui::Vec2,
        hover_radius: f32,
    ) -> Option<PlotHover> {
        let Some(rendered) = self.plots.get(target) else {
            let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "no series selected",
                egui::FontId::proportional(14.0),
                ui.visuals().weak_text_color(),
            );
            return None;
        };
        let options = &rendered.options;

        let mut plot = Plot::new(target)
            .width(size.x)
            .height(size.y)
            .show_x(false)
            .show_y(false)
            .legend(Legend::default().position(options.legend.position.corner()));

        let y_fmt = options.yaxis.tick_formatter;
        plot = plot.y_axis_formatter(move |y, _range| y_fmt.format(y.value));

        let x_labels = options.xaxis.clone();
        plot = plot.x_axis_formatter(move |x, range: &RangeInclusive<f64>| {
            let span = x_labels.from_plot(*range.end()) - x_labels.from_plot(*range.start());
            x_labels.label(x_labels.from_plot(x.value), span)
        });

        if !options.xaxis.ticks.is_empty() {
            let marks = tick_marks(&options.xaxis);
            plot = plot.x_grid_spacer(move |_input: GridInput| marks.clone());
        }

        let response = plot.show(ui, |plot_ui| {
            for s in &rendered.series {
                let pts: Vec<[f64; 2]> = s
                    .points
                    .iter()
                    .map(|p| [options.xaxis.to_plot(p[0]), p[1]])
                    .filter(|p| p[0].is_finite() && p[1].is_finite())
                    .collect();
                if options.series.lines.show {
                    plot_ui.line(
                        Line::new(s.label.as_str(), pts.clone())
                            .color(s.color)
                            .width(1.5),
                    );
                }
                if options.series.points.show {
                    plot_ui.points(
                        Points::new(s.label.as_str(), pts)
                            .radius(options.series.points.radius)
                            .color(s.color),
                    );
                }
            }

            if !options.grid.hoverable {
                return None;
            }
            let pointer = plot_ui.pointer_coordinate()?;
            let pointer_screen = plot_ui.screen_from_plot(pointer);
            let pos = HoverPos {
                x: options.xaxis.from_plot(pointer.x),
                y: pointer.y,
            };

            let mut best: Option<(f32, HoverItem)> = None;
            for s in &rendered.series {
                for (i, p) in s.points.iter().enumerate() {
                    let px = options.xaxis.to_plot(p[0]);
                    if !px.is_finite() || !p[1].is_finite() {
                        continue;
                    }
                    let screen = plot_ui.screen_from_plot(PlotPoint::new(px, p[1]));
                    let d = screen.distance(pointer_screen);
                    if d > hover_radius || best.as_ref().is_some_and(|(bd, _)| d >= *bd) {
                        continue;
                    }
                    best = Some((
                        d,
                        HoverItem {
                            data_index: i,
                            datapoint: *p,
                            page_x: screen.x,
                            page_y: screen.y,
                            series_label: s.label.clone(),
                            series_color: s.color,
                        },
                    ));
                }
            }
            Some(PlotHover {
                pos,
                item: best.map(|(_, item)| item),
            })
        });

        if options.grid.clickable && response.response.clicked() {
            if let Some(PlotHover {
                item: Some(item), ..
            }) = &response.inner
            {
                tracing::info!(
                    series = %item.series_label,
                    x = item.datapoint[0],
                    y = item.datapoint[1],
                    "point clicked"
                );
            }
        }

        response.inner
    }
}

/// Grid marks at the fixed tick positions, in plot coordinates.
///
/// Each mark's step is the distance to its neighbour so egui_plot keeps the
/// labels while they have room.
fn tick_marks(xaxis: &XAxisOptions) -> Vec<GridMark> {
    let values: Vec<f64> = xaxis
        .ticks
        .iter()
        .map(|t| xaxis.to_plot(t.value()))
        .filter(|v| v.is_finite())
        .collect();
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let step_size = if i > 0 {
                value - values[i - 1]
            } else if values.len() > 1 {
                values[1] - value
            } else {
                1.0
            };
            GridMark {
                value,
                step_size: step_size.abs(),
            }
        })
        .collect()
}
