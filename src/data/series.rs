//! Plot series and named data-set collections.

use std::collections::HashMap;

use egui::Color32;

/// One named sequence of `[x, y]` points drawn as a single line/point set.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub color: Color32,
    pub points: Vec<[f64; 2]>,
}

impl Series {
    pub fn new(label: impl Into<String>, color: Color32) -> Self {
        Self {
            label: label.into(),
            color,
            points: Vec::new(),
        }
    }

    pub fn with_points(mut self, points: Vec<[f64; 2]>) -> Self {
        self.points = points;
        self
    }

    /// Sort points by ascending x.
    pub fn sort_by_x(&mut self) {
        self.points.sort_by(|a, b| a[0].total_cmp(&b[0]));
    }
}

/// Series keyed by the name their selector checkbox carries.
pub type DataSets = HashMap<String, Series>;
