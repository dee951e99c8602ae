use benchplot::data::results::*;
use benchplot::error::{BenchPlotError, ResultsError};

const REJIT: &str = "text_size amortised non_amortised
8 100 50
1024 2000 1500

64 900 700
";

const PCRE: &str = "text_size amortised
8 80
64 400
1024 1000
";

#[test]
fn parses_columns_keyed_by_text_size() {
    let table = EngineTable::parse(REJIT).unwrap();
    assert_eq!(table.columns.len(), 2);
    let amortised = table.column("amortised").unwrap();
    assert_eq!(amortised.values.len(), 3);
    assert_eq!(amortised.values[&64], 900.0);
    assert_eq!(table.column("non_amortised").unwrap().values[&1024], 1500.0);
}

#[test]
fn missing_labels_line_is_rejected() {
    assert_eq!(
        EngineTable::parse("8 100 50\n").unwrap_err(),
        ResultsError::MissingLabels
    );
    assert_eq!(EngineTable::parse("").unwrap_err(), ResultsError::MissingLabels);
}

#[test]
fn wrong_column_count_reports_line() {
    let err = EngineTable::parse("text_size amortised\n8 1 2\n").unwrap_err();
    assert_eq!(
        err,
        ResultsError::ColumnCount {
            line: 2,
            expected: 2,
            found: 3
        }
    );
}

#[test]
fn invalid_number_is_rejected() {
    let err = EngineTable::parse("text_size amortised\n8 fast\n").unwrap_err();
    assert!(matches!(err, ResultsError::InvalidNumber { line: 2, .. }), "{err:?}");
}

#[test]
fn duplicate_engine_is_rejected() {
    let mut set = ResultSet::new();
    set.add_result("rejit", REJIT).unwrap();
    assert_eq!(
        set.add_result("rejit", REJIT).unwrap_err(),
        ResultsError::DuplicateEngine("rejit".to_string())
    );
}

#[test]
fn data_sets_are_sorted_labeled_and_colored() {
    let mut set = ResultSet::new();
    set.add_result("rejit", REJIT).unwrap();
    set.add_result("pcre", PCRE).unwrap();

    assert_eq!(set.keys(), vec!["0", "1", "2"]);
    let sets = set.data_sets();
    let s0 = &sets["0"];
    assert_eq!(s0.label, "rejit amortised");
    assert_eq!(s0.points, vec![[8.0, 100.0], [64.0, 900.0], [1024.0, 2000.0]]);
    assert_eq!(s0.color, series_color(0, "amortised"));
    assert_eq!(sets["1"].color, series_color(0, "non_amortised"));
    assert_ne!(sets["0"].color, sets["1"].color);
    assert_eq!(sets["2"].label, "pcre amortised");
    assert_eq!(sets["2"].color, series_color(1, "amortised"));
}

#[test]
fn palette_wraps_after_four_engines() {
    assert_eq!(series_color(4, "amortised"), series_color(0, "amortised"));
}

fn report(time_ms: f64, rejit_at_1024: f64) -> Report {
    Report::from_json(&format!(
        r#"{{
            "time_ms": {time_ms},
            "engines": [{{ "name": "rejit", "commit": "abc123" }}],
            "benchmarks": [{{
                "regexp": "abcdefgh",
                "results": [{{ "engine": "rejit", "output": "text_size amortised\n8 10\n1024 {rejit_at_1024}\n" }}]
            }}]
        }}"#
    ))
    .unwrap()
}

#[test]
fn report_json_fills_defaults() {
    let r = report(1000.0, 5.0);
    assert_eq!(r.engines[0].commit, "abc123");
    let bench = &r.benchmarks[0];
    assert_eq!(bench.low_char, "0");
    assert_eq!(bench.high_char, "z");
    assert!(bench.description.is_none());
    assert_eq!(bench.title(), "regexp: abcdefgh     range: ['0','z']");
    assert_eq!(text_sizes(&bench.result_set().unwrap()), vec![8, 1024]);
}

#[test]
fn bad_engine_output_names_benchmark_and_engine() {
    let r = Report::from_json(
        r#"{ "benchmarks": [{ "regexp": "x", "results": [{ "engine": "pcre", "output": "garbage" }] }] }"#,
    )
    .unwrap();
    match r.benchmarks[0].result_set() {
        Err(BenchPlotError::Results { benchmark, engine, source }) => {
            assert_eq!(benchmark, "x");
            assert_eq!(engine, "pcre");
            assert_eq!(source, ResultsError::MissingLabels);
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn speed_history_orders_points_by_report_time() {
    let reports = vec![report(2000.0, 7.0), report(1000.0, 5.0)];
    let history = speed_history(&reports, 0, 1024).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].label, "rejit amortised");
    assert_eq!(history[0].points, vec![[1000.0, 5.0], [2000.0, 7.0]]);
}

#[test]
fn speed_history_skips_missing_sizes_and_benchmarks() {
    let reports = vec![report(1000.0, 5.0)];
    assert!(speed_history(&reports, 0, 4096).unwrap().is_empty());
    assert!(speed_history(&reports, 3, 1024).unwrap().is_empty());
}

#[test]
fn load_reports_missing_file_as_io_error() {
    let err = Report::load(std::path::Path::new("/nonexistent/benchplot/report.json")).unwrap_err();
    assert!(matches!(err, BenchPlotError::Io { .. }), "{err:?}");
}
