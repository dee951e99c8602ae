use benchplot::config::ViewerConfig;

#[test]
fn defaults_check_every_series_and_use_flot_sizes() {
    let cfg = ViewerConfig::default();
    assert!(cfg.initially_checked);
    assert_eq!(cfg.graph.width, 600.0);
    assert_eq!(cfg.graph.height, 400.0);
    assert_eq!(cfg.hover.radius_px, 10.0);
    assert_eq!(cfg.hover.tooltip_offset_px, 5.0);
}

#[test]
fn partial_yaml_keeps_other_defaults() {
    let cfg = ViewerConfig::from_yaml("title: Nightly\nhover:\n  radius_px: 6\n").unwrap();
    assert_eq!(cfg.title, "Nightly");
    assert_eq!(cfg.hover.radius_px, 6.0);
    assert_eq!(cfg.hover.tooltip_offset_px, 5.0);
    assert_eq!(cfg.log_level, "info");
}

#[test]
fn json_config_is_accepted() {
    let cfg = ViewerConfig::from_json(r#"{ "initially_checked": false, "history_text_size": 1024 }"#)
        .unwrap();
    assert!(!cfg.initially_checked);
    assert_eq!(cfg.history_text_size, Some(1024));
}

#[test]
fn load_picks_format_from_extension() {
    let dir = std::env::temp_dir().join(format!("benchplot-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let json_path = dir.join("viewer.json");
    std::fs::write(&json_path, r#"{ "title": "from json" }"#).unwrap();
    assert_eq!(ViewerConfig::load(&json_path).unwrap().title, "from json");

    let yaml_path = dir.join("viewer.yaml");
    std::fs::write(&yaml_path, "title: from yaml\n").unwrap();
    assert_eq!(ViewerConfig::load(&yaml_path).unwrap().title, "from yaml");

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn malformed_yaml_is_an_error() {
    assert!(ViewerConfig::from_yaml("hover: [1, 2").is_err());
}
