//! egui-backed tooltip surface for the viewer.

use eframe::egui;
use egui::Color32;

use crate::data::tooltip::{Tooltip, TooltipSurface};

/// Tooltip surface that draws a floating frame on top of the viewer.
#[derive(Debug, Default)]
pub struct EguiTooltipSurface {
    readout: Option<(String, String)>,
    tooltip: Option<Tooltip>,
}

impl TooltipSurface for EguiTooltipSurface {
    fn set_cursor_readout(&mut self, x: &str, y: &str) {
        self.readout = Some((x.to_string(), y.to_string()));
    }

    fn remove_tooltip(&mut self) {
        self.tooltip = None;
    }

    fn show_tooltip(&mut self, tooltip: Tooltip) {
        self.tooltip = Some(tooltip);
    }
}

impl EguiTooltipSurface {
    pub fn readout(&self) -> Option<(&str, &str)> {
        self.readout
            .as_ref()
            .map(|(x, y)| (x.as_str(), y.as_str()))
    }

    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }

    /// Paint the current tooltip, if any.
    pub fn draw(&self, ctx: &egui::Context) {
        let Some(tip) = &self.tooltip else {
            return;
        };
        egui::Area::new(egui::Id::new("benchplot_tooltip"))
            .order(egui::Order::Tooltip)
            .fixed_pos(egui::pos2(tip.x, tip.y))
            .interactable(false)
            .show(ctx, |ui| {
                egui::Frame::default()
                    .fill(tip.background)
                    .stroke(egui::Stroke::new(1.0, tip.border))
                    .inner_margin(egui::Margin::same(2))
                    .show(ui, |ui| {
                        for line in &tip.lines {
                            ui.label(egui::RichText::new(line).color(Color32::BLACK));
                        }
                    });
            });
    }
}
