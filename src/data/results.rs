//! Benchmark results: raw engine tables, result sets, and report files.
//!
//! Every engine prints a whitespace-separated table whose first line holds
//! the column labels:
//!
//! ```text
//! text_size amortised non_amortised
//! 8         1.2e6     3.4e5
//! 1024      9.8e7     2.1e7
//! ```
//!
//! `text_size` is the x column; every other column becomes a series.

use std::collections::BTreeMap;
use std::path::Path;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::data::series::{DataSets, Series};
use crate::error::{BenchPlotError, ResultsError};

pub const TEXT_SIZE_LABEL: &str = "text_size";
pub const AMORTISED_LABEL: &str = "amortised";

/// (strong, light) color pairs, one per engine.
const ENGINE_COLORS: [(Color32, Color32); 4] = [
    (Color32::from_rgb(0xDE, 0xBD, 0x00), Color32::from_rgb(0xE0, 0xD4, 0x8D)),
    (Color32::from_rgb(0x27, 0x7A, 0xD9), Color32::from_rgb(0x94, 0xB8, 0xE0)),
    (Color32::from_rgb(0x00, 0x94, 0x0A), Color32::from_rgb(0x72, 0xB3, 0x77)),
    (Color32::from_rgb(0xA2, 0x2E, 0xBF), Color32::from_rgb(0xBF, 0x6C, 0xD4)),
];

/// Color of the `label` series for the engine at `engine_index`.
pub fn series_color(engine_index: usize, label: &str) -> Color32 {
    let (strong, light) = ENGINE_COLORS[engine_index % ENGINE_COLORS.len()];
    if label == AMORTISED_LABEL {
        strong
    } else {
        light
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EngineTable
// ─────────────────────────────────────────────────────────────────────────────

/// One column of an engine table: values keyed by text size.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Column {
    pub label: String,
    pub values: BTreeMap<u64, f64>,
}

/// Parsed output of one engine run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EngineTable {
    pub columns: Vec<Column>,
}

impl EngineTable {
    pub fn parse(output: &str) -> Result<Self, ResultsError> {
        let mut lines = output
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l.trim()))
            .filter(|(_, l)| !l.is_empty());

        let (_, header) = lines.next().ok_or(ResultsError::MissingLabels)?;
        let labels: Vec<&str> = header.split_whitespace().collect();
        let size_col = labels
            .iter()
            .position(|l| *l == TEXT_SIZE_LABEL)
            .ok_or(ResultsError::MissingLabels)?;

        let mut columns: Vec<(usize, Column)> = labels
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != size_col)
            .map(|(i, l)| {
                (
                    i,
                    Column {
                        label: l.to_string(),
                        values: BTreeMap::new(),
                    },
                )
            })
            .collect();

        for (line_no, line) in lines {
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() != labels.len() {
                return Err(ResultsError::ColumnCount {
                    line: line_no,
                    expected: labels.len(),
                    found: fields.len(),
                });
            }
            let size = parse_size(fields[size_col], line_no)?;
            for (i, col) in columns.iter_mut() {
                let value = fields[*i]
                    .parse::<f64>()
                    .map_err(|_| ResultsError::InvalidNumber {
                        line: line_no,
                        value: fields[*i].to_string(),
                    })?;
                col.values.insert(size, value);
            }
        }

        Ok(Self {
            columns: columns.into_iter().map(|(_, c)| c).collect(),
        })
    }

    pub fn column(&self, label: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.label == label)
    }
}

/// Text sizes are integers; a float with no fractional part is accepted too.
fn parse_size(field: &str, line: usize) -> Result<u64, ResultsError> {
    let invalid = || ResultsError::InvalidNumber {
        line,
        value: field.to_string(),
    };
    match field.parse::<u64>() {
        Ok(v) => Ok(v),
        Err(_) => {
            let f = field.parse::<f64>().map_err(|_| invalid())?;
            if f >= 0.0 && f.fract() == 0.0 {
                Ok(f as u64)
            } else {
                Err(invalid())
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ResultSet
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct EngineResult {
    pub engine: String,
    pub table: EngineTable,
}

/// Results of every engine for one benchmark.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultSet {
    pub engines: Vec<EngineResult>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_result(&mut self, engine: &str, output: &str) -> Result<(), ResultsError> {
        if self.engines.iter().any(|e| e.engine == engine) {
            return Err(ResultsError::DuplicateEngine(engine.to_string()));
        }
        let table = EngineTable::parse(output)?;
        self.engines.push(EngineResult {
            engine: engine.to_string(),
            table,
        });
        Ok(())
    }

    /// All series in engine then column order, each paired with its key.
    fn keyed_series(&self) -> Vec<(String, Series)> {
        let mut out = Vec::new();
        for (engine_index, result) in self.engines.iter().enumerate() {
            for col in &result.table.columns {
                let points = col.values.iter().map(|(&x, &y)| [x as f64, y]).collect();
                let series = Series::new(
                    format!("{} {}", result.engine, col.label),
                    series_color(engine_index, &col.label),
                )
                .with_points(points);
                out.push((out.len().to_string(), series));
            }
        }
        out
    }

    /// Data sets keyed by series index.
    pub fn data_sets(&self) -> DataSets {
        self.keyed_series().into_iter().collect()
    }

    /// Data-set keys with their labels and colors, in display order.
    pub fn choices(&self) -> Vec<(String, String, Color32)> {
        self.keyed_series()
            .into_iter()
            .map(|(key, s)| (key, s.label, s.color))
            .collect()
    }

    pub fn keys(&self) -> Vec<String> {
        self.keyed_series().into_iter().map(|(k, _)| k).collect()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Report files
// ─────────────────────────────────────────────────────────────────────────────

/// An engine that took part in a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineInfo {
    pub name: String,
    #[serde(default = "unknown_commit")]
    pub commit: String,
}

fn unknown_commit() -> String {
    "<unknown>".to_string()
}

/// Raw output of one engine for one benchmark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawResult {
    pub engine: String,
    pub output: String,
}

/// One benchmark of a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Benchmark {
    pub regexp: String,
    #[serde(default = "default_low_char")]
    pub low_char: String,
    #[serde(default = "default_high_char")]
    pub high_char: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub results: Vec<RawResult>,
}

fn default_low_char() -> String {
    "0".to_string()
}

fn default_high_char() -> String {
    "z".to_string()
}

impl Benchmark {
    /// Heading shown above the benchmark's graph.
    pub fn title(&self) -> String {
        format!(
            "regexp: {}     range: ['{}','{}']",
            self.regexp, self.low_char, self.high_char
        )
    }

    pub fn result_set(&self) -> Result<ResultSet, BenchPlotError> {
        let mut set = ResultSet::new();
        for raw in &self.results {
            set.add_result(&raw.engine, &raw.output)
                .map_err(|source| BenchPlotError::Results {
                    benchmark: self.regexp.clone(),
                    engine: raw.engine.clone(),
                    source,
                })?;
        }
        Ok(set)
    }
}

/// Results of one benchmark run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Run time in milliseconds since the UNIX epoch.
    #[serde(default)]
    pub time_ms: f64,
    #[serde(default)]
    pub engines: Vec<EngineInfo>,
    pub benchmarks: Vec<Benchmark>,
}

impl Report {
    pub fn from_json(json: &str) -> Result<Self, BenchPlotError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, BenchPlotError> {
        let txt = std::fs::read_to_string(path).map_err(|source| BenchPlotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let report = Self::from_json(&txt)?;
        tracing::info!(
            path = %path.display(),
            benchmarks = report.benchmarks.len(),
            "loaded report"
        );
        Ok(report)
    }
}

/// Throughput over time at one text size.
///
/// Produces one series per (engine, column) with a `[time_ms, value]` point
/// for every report holding a value at `text_size`, sorted by time. Reports
/// without the benchmark are skipped.
pub fn speed_history(
    reports: &[Report],
    benchmark_index: usize,
    text_size: u64,
) -> Result<Vec<Series>, BenchPlotError> {
    let mut engines: Vec<String> = Vec::new();
    let mut series: Vec<((String, String), Series)> = Vec::new();

    for report in reports {
        let Some(bench) = report.benchmarks.get(benchmark_index) else {
            continue;
        };
        let set = bench.result_set()?;
        for result in &set.engines {
            let engine_index = match engines.iter().position(|e| *e == result.engine) {
                Some(i) => i,
                None => {
                    engines.push(result.engine.clone());
                    engines.len() - 1
                }
            };
            for col in &result.table.columns {
                let Some(&value) = col.values.get(&text_size) else {
                    continue;
                };
                let key = (result.engine.clone(), col.label.clone());
                let idx = match series.iter().position(|(k, _)| *k == key) {
                    Some(i) => i,
                    None => {
                        series.push((
                            key,
                            Series::new(
                                format!("{} {}", result.engine, col.label),
                                series_color(engine_index, &col.label),
                            ),
                        ));
                        series.len() - 1
                    }
                };
                series[idx].1.points.push([report.time_ms, value]);
            }
        }
    }

    Ok(series
        .into_iter()
        .map(|(_, mut s)| {
            s.sort_by_x();
            s
        })
        .collect())
}

/// Text sizes present in any engine table of a benchmark, ascending.
pub fn text_sizes(set: &ResultSet) -> Vec<u64> {
    let mut sizes: Vec<u64> = set
        .engines
        .iter()
        .flat_map(|e| e.table.columns.iter())
        .flat_map(|c| c.values.keys().copied())
        .collect();
    sizes.sort_unstable();
    sizes.dedup();
    sizes
}
