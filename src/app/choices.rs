//! Checkbox list selecting which series a graph shows.

use eframe::egui;
use egui::Color32;

use crate::data::selector::SelectorContainer;

/// One checkbox of a [`ChoiceList`].
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    /// Data-set key this checkbox selects.
    pub name: Option<String>,
    pub label: String,
    pub color: Color32,
    pub checked: bool,
}

/// Checkboxes in display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChoiceList {
    pub items: Vec<Choice>,
}

impl ChoiceList {
    /// Build from `(key, label, color)` triples, all with the same initial state.
    pub fn from_choices(choices: Vec<(String, String, Color32)>, checked: bool) -> Self {
        Self {
            items: choices
                .into_iter()
                .map(|(name, label, color)| Choice {
                    name: Some(name),
                    label,
                    color,
                    checked,
                })
                .collect(),
        }
    }

    pub fn set_all(&mut self, checked: bool) {
        for item in &mut self.items {
            item.checked = checked;
        }
    }

    /// Draw the checkboxes, each preceded by its series color swatch.
    /// Returns `true` when any checkbox changed this frame.
    pub fn ui(&mut self, ui: &mut egui::Ui) -> bool {
        let mut changed = false;
        ui.vertical(|ui| {
            for item in &mut self.items {
                ui.horizontal(|ui| {
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                    ui.painter().rect_filled(rect, 2.0, item.color);
                    if ui.checkbox(&mut item.checked, item.label.as_str()).changed() {
                        changed = true;
                    }
                });
            }
        });
        changed
    }
}

impl SelectorContainer for ChoiceList {
    fn checked_names(&self) -> Vec<Option<&str>> {
        self.items
            .iter()
            .filter(|c| c.checked)
            .map(|c| c.name.as_deref())
            .collect()
    }
}
