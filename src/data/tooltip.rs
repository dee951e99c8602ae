//! Hover tooltips for plotted benchmark points.
//!
//! [`TooltipRenderer`] decides *when* a tooltip is created or removed and what
//! it says; a [`TooltipSurface`] does the actual drawing. The viewer provides
//! an egui-backed surface, tests use a recording one.

use egui::Color32;

use crate::data::units::{format_bytes, format_bytes_per_second, round2};

/// Pixel offset between the hovered point and the tooltip's top-left corner.
pub const TOOLTIP_OFFSET: f32 = 5.0;

/// Tooltip background opacity.
pub const TOOLTIP_OPACITY: f32 = 0.80;

/// Pointer position in plot (data) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverPos {
    pub x: f64,
    pub y: f64,
}

/// The data point under the pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverItem {
    /// Index of the point within its series.
    pub data_index: usize,
    /// Raw (untransformed) `[x, y]` data values.
    pub datapoint: [f64; 2],
    /// Screen position of the point.
    pub page_x: f32,
    pub page_y: f32,
    pub series_label: String,
    pub series_color: Color32,
}

/// A tooltip ready to be drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub x: f32,
    pub y: f32,
    /// Background color, opacity already applied.
    pub background: Color32,
    pub border: Color32,
    /// One entry per displayed line.
    pub lines: Vec<String>,
}

/// Where tooltips and the cursor readout end up.
pub trait TooltipSurface {
    /// Show the pointer position, already rounded for display.
    fn set_cursor_readout(&mut self, x: &str, y: &str);
    /// Remove the current tooltip. Removing when none is shown is a no-op.
    fn remove_tooltip(&mut self);
    fn show_tooltip(&mut self, tooltip: Tooltip);
}

/// Text lines for a hovered throughput point.
///
/// ```
/// # use benchplot::data::tooltip::tooltip_lines;
/// let lines = tooltip_lines("rejit amortised", 2048.0, 1536.0);
/// assert_eq!(lines[1], "2 kiB/s (1536 B/s)");
/// assert_eq!(lines[2], "2 kiB (2048 B)");
/// ```
pub fn tooltip_lines(label: &str, x: f64, y: f64) -> Vec<String> {
    let x = round2(x);
    let y = round2(y);
    vec![
        label.to_string(),
        format!("{} ({} B/s)", format_bytes_per_second(y), y.floor()),
        format!("{} ({} B)", format_bytes(x), x.floor()),
    ]
}

/// Hover state machine.
///
/// Keeps the index of the previously hovered point so moving the pointer
/// around a single point does not recreate its tooltip every event.
pub struct TooltipRenderer<S: TooltipSurface> {
    surface: S,
    previous_point: Option<usize>,
    offset: f32,
}

impl<S: TooltipSurface> TooltipRenderer<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            previous_point: None,
            offset: TOOLTIP_OFFSET,
        }
    }

    pub fn with_offset(mut self, offset: f32) -> Self {
        self.offset = offset;
        self
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn previous_point(&self) -> Option<usize> {
        self.previous_point
    }

    /// Handle one hover event.
    pub fn on_hover(&mut self, pos: HoverPos, item: Option<&HoverItem>) {
        self.surface
            .set_cursor_readout(&format!("{:.2}", pos.x), &format!("{:.2}", pos.y));

        match item {
            Some(item) => {
                if self.previous_point == Some(item.data_index) {
                    return;
                }
                self.previous_point = Some(item.data_index);
                self.surface.remove_tooltip();

                let [x, y] = item.datapoint;
                tracing::trace!(index = item.data_index, x, y, "tooltip");
                let c = item.series_color;
                self.surface.show_tooltip(Tooltip {
                    x: item.page_x + self.offset,
                    y: item.page_y + self.offset,
                    background: Color32::from_rgba_unmultiplied(
                        c.r(),
                        c.g(),
                        c.b(),
                        (TOOLTIP_OPACITY * 255.0).round() as u8,
                    ),
                    border: Color32::from_rgb(0xff, 0xdd, 0xdd),
                    lines: tooltip_lines(&item.series_label, x, y),
                });
            }
            None => {
                self.surface.remove_tooltip();
                self.previous_point = None;
            }
        }
    }
}
