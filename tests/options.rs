use benchplot::data::options::*;
use benchplot::data::units::{KIB, MIB};

#[test]
fn log_transform_round_trips_plotted_sizes() {
    let opts = PlotOptions::parallel();
    for x in [8.0, KIB, 16.0 * MIB] {
        let back = opts.xaxis.from_plot(opts.xaxis.to_plot(x));
        assert!((back - x).abs() <= x * 1e-12, "{} -> {}", x, back);
    }
}

#[test]
fn parallel_ticks_span_8_b_to_16_mib() {
    let opts = PlotOptions::parallel();
    let ticks = &opts.xaxis.ticks;
    assert_eq!(ticks.len(), 12);
    assert_eq!(ticks.first().unwrap().label(), "8 B");
    assert_eq!(ticks.last().unwrap().value(), 16.0 * MIB);
    assert_eq!(ticks.last().unwrap().label(), "16 MiB");
    assert!(ticks.windows(2).all(|w| w[0].value() < w[1].value()));
}

#[test]
fn presets_share_series_legend_grid_and_y_formatter() {
    let p = PlotOptions::parallel();
    let t = PlotOptions::speed_time();
    assert_eq!(p.series, t.series);
    assert_eq!(p.legend.position, LegendPosition::NorthWest);
    assert!(p.grid.hoverable && p.grid.clickable);
    assert_eq!(p.yaxis.tick_formatter, TickFormatter::BytesPerSecond);
    assert_eq!(t.yaxis, p.yaxis);
    assert!(p.series.lines.show && p.series.points.show);
    assert_eq!(p.series.points.radius, 2.0);
}

#[test]
fn speed_time_uses_time_mode_without_transform() {
    let t = PlotOptions::speed_time();
    assert_eq!(t.xaxis.mode, Some(AxisMode::Time));
    assert_eq!(t.xaxis.transform, AxisTransform::Identity);
    assert!(t.xaxis.ticks.is_empty());
    assert_eq!(t.xaxis.to_plot(1234.5), 1234.5);
}

#[test]
fn y_tick_formatter_renders_throughput() {
    assert_eq!(TickFormatter::BytesPerSecond.format(3.0 * MIB), "3 MiB/s");
    assert_eq!(TickFormatter::Plain.format(1.5), "1.50");
}

#[test]
fn x_label_prefers_fixed_tick_labels() {
    let opts = PlotOptions::parallel();
    assert_eq!(opts.xaxis.label(4.0 * KIB, 0.0), "4 kiB");
    assert_eq!(opts.xaxis.label(3.0 * KIB, 0.0), "3 kiB");
}

#[test]
fn time_labels_switch_to_dates_for_long_spans() {
    // 2024-01-15 12:00:00 UTC
    let ms = 1_705_320_000_000.0;
    assert_eq!(format_time_ms(ms, 60_000.0), "12:00:00");
    assert_eq!(format_time_ms(ms, 7.0 * 86_400_000.0), "2024-01-15");
}

#[test]
fn parallel_options_serialize_with_flot_field_names() {
    let json: serde_json::Value =
        serde_json::from_str(&PlotOptions::parallel().to_json().unwrap()).unwrap();
    assert_eq!(json["legend"]["position"], "nw");
    assert_eq!(json["grid"]["hoverable"], true);
    assert_eq!(json["series"]["points"]["radius"], 2.0);
    assert_eq!(json["xaxis"]["transform"], "ln");
    assert_eq!(json["xaxis"]["inverseTransform"], "exp");
    assert_eq!(json["xaxis"]["ticks"][0][1], "8 B");
    assert_eq!(json["yaxis"]["tickFormatter"], "bytes_per_second");
    assert!(json["xaxis"].get("mode").is_none());
}

#[test]
fn time_options_serialize_mode_only() {
    let json: serde_json::Value =
        serde_json::from_str(&PlotOptions::speed_time().to_json().unwrap()).unwrap();
    assert_eq!(json["xaxis"]["mode"], "time");
    assert!(json["xaxis"].get("transform").is_none());
    assert!(json["xaxis"].get("ticks").is_none());
}
