use benchplot::app::build_graphs;
use benchplot::{PlotOptions, Report, ViewerConfig};

fn report(time_ms: f64, amortised: f64) -> Report {
    Report::from_json(&format!(
        r#"{{
            "time_ms": {time_ms},
            "engines": [{{ "name": "rejit" }}],
            "benchmarks": [{{
                "regexp": "abcdefgh",
                "description": "plain literal",
                "results": [{{
                    "engine": "rejit",
                    "output": "text_size amortised\n8 10\n4096 {amortised}\n"
                }}]
            }}]
        }}"#
    ))
    .unwrap()
}

#[test]
fn single_report_gives_one_graph_per_benchmark() {
    let latest = report(1000.0, 5.0);
    let graphs = build_graphs(&latest, std::slice::from_ref(&latest), &ViewerConfig::default()).unwrap();
    assert_eq!(graphs.len(), 1);
    let g = &graphs[0];
    assert_eq!(g.id, "plot_parallel_1");
    assert_eq!(g.title, "regexp: abcdefgh     range: ['0','z']");
    assert_eq!(g.description.as_deref(), Some("plain literal"));
    assert_eq!(g.options, PlotOptions::parallel());
    assert_eq!(g.data_sets["0"].points, vec![[8.0, 10.0], [4096.0, 5.0]]);
    assert_eq!(g.choices.items.len(), 1);
    assert!(g.choices.items[0].checked);
}

#[test]
fn history_graph_uses_largest_text_size() {
    let reports = vec![report(2000.0, 7.0), report(1000.0, 5.0)];
    let graphs = build_graphs(&reports[0], &reports, &ViewerConfig::default()).unwrap();
    assert_eq!(graphs.len(), 2);
    let history = &graphs[1];
    assert_eq!(history.id, "plot_time_1");
    assert!(history.title.ends_with("(history at 4 kiB)"), "{}", history.title);
    assert!(history.description.is_none());
    assert_eq!(history.options, PlotOptions::speed_time());
    assert_eq!(history.choices.items[0].name.as_deref(), Some("0"));
    assert_eq!(history.choices.items[0].label, "rejit amortised");
    assert_eq!(history.data_sets["0"].points, vec![[1000.0, 5.0], [2000.0, 7.0]]);
}

#[test]
fn configured_history_size_and_unchecked_choices() {
    let config = ViewerConfig {
        history_text_size: Some(8),
        initially_checked: false,
        ..ViewerConfig::default()
    };
    let reports = vec![report(1000.0, 5.0), report(2000.0, 7.0)];
    let graphs = build_graphs(&reports[1], &reports, &config).unwrap();
    let history = &graphs[1];
    assert!(history.title.ends_with("(history at 8 iB)"), "{}", history.title);
    assert_eq!(history.data_sets["0"].points, vec![[1000.0, 10.0], [2000.0, 10.0]]);
    assert!(graphs.iter().all(|g| g.choices.items.iter().all(|c| !c.checked)));
}
