//! End-to-end rendering of the built-in three-level feeder.

mod common;

use tcc_plot::color::{PALETTE, lighten};
use tcc_plot::network::reference::ReferenceNetwork;
use tcc_plot::plot::{LineStyle, PlotStyle, SeriesKind, compose};

#[test]
fn load_chart_has_every_curve_on_the_path() {
    let r = ReferenceNetwork::build();
    let chart = compose(&r.network, r.load, &PlotStyle::default()).expect("load renders");

    assert_eq!(chart.count(SeriesKind::Ampacity), 3);
    assert_eq!(chart.count(SeriesKind::RatedCurrent), 3);
    assert_eq!(chart.count(SeriesKind::Fuse), 2);
    assert_eq!(chart.count(SeriesKind::Thermal), 3);
    assert_eq!(chart.series.len(), 11);
}

#[test]
fn conductors_cycle_palette_and_protections_follow_their_cable() {
    let r = ReferenceNetwork::build();
    let chart = compose(&r.network, r.load, &PlotStyle::default()).expect("load renders");

    let rated: Vec<_> = chart.series_of(SeriesKind::RatedCurrent).map(|s| s.color).collect();
    assert_eq!(rated, PALETTE[..3]);
    let ampacity: Vec<_> = chart.series_of(SeriesKind::Ampacity).map(|s| s.color).collect();
    assert_eq!(ampacity, PALETTE[..3].iter().map(|&c| lighten(c, 0.5)).collect::<Vec<_>>());

    let thermal: Vec<_> = chart.series_of(SeriesKind::Thermal).map(|s| s.color).collect();
    assert_eq!(thermal, PALETTE[..3].iter().map(|&c| lighten(c, 0.75)).collect::<Vec<_>>());
    let fuses: Vec<_> = chart.series_of(SeriesKind::Fuse).map(|s| s.color).collect();
    assert_eq!(fuses, PALETTE[..2].iter().map(|&c| lighten(c, 0.75)).collect::<Vec<_>>());
}

#[test]
fn series_are_drawn_source_end_first() {
    let r = ReferenceNetwork::build();
    let chart = compose(&r.network, r.load, &PlotStyle::default()).expect("load renders");
    let labels: Vec<&str> = chart.series.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(
        labels,
        [
            "NH 80   80A",
            "Sica 63   63A",
            "C-TS5   70mm²",
            "I_n=25.53A",
            "NH 40   40A",
            "Sica 32   32A",
            "C-TSS8   10mm²",
            "I_n=15.64A",
            "Sica 16   16A",
            "C-CAS   2.5mm²",
            "I_n=9.17A",
        ]
    );
    let styles: Vec<LineStyle> = chart.series.iter().take(4).map(|s| s.style).collect();
    assert_eq!(
        styles,
        [LineStyle::DashDot, LineStyle::Dashed, LineStyle::Solid, LineStyle::Dotted]
    );
}

#[test]
fn intermediate_bus_sees_only_upstream_curves() {
    let r = ReferenceNetwork::build();
    let chart = compose(&r.network, r.buses[1], &PlotStyle::default()).expect("bus renders");
    assert_eq!(chart.series.len(), 4);
    assert_eq!(chart.title, "Curves for TSS8");

    let top = compose(&r.network, r.buses[0], &PlotStyle::default()).expect("bus renders");
    assert!(top.series.is_empty());
}

#[test]
fn rendering_is_deterministic() {
    let catalog = common::reference_catalog();
    let a = catalog.compose("Load", &PlotStyle::default()).expect("renders");
    let b = catalog.compose("Load", &PlotStyle::default()).expect("renders");
    assert_eq!(a, b);
}

#[test]
fn ampacity_curves_and_markers_share_the_time_axis() {
    let style = PlotStyle {
        protection_lighten: 0.2,
        conductor_lighten: 0.9,
    };
    let r = ReferenceNetwork::build();
    let chart = compose(&r.network, r.load, &style).expect("renders");
    let axis = (chart.y_axis.min, chart.y_axis.max);
    assert_eq!(axis, (1e-3, 1e6));

    for s in chart.series_of(SeriesKind::Ampacity) {
        let first = s.points.first().map(|p| p.time_s).expect("sampled");
        let last = s.points.last().map(|p| p.time_s).expect("sampled");
        assert!((first - axis.0).abs() <= 1e-12, "{} starts at {first}", s.label);
        assert!((last - axis.1).abs() <= 1e-6 * axis.1, "{} ends at {last}", s.label);
        assert!(s.points.iter().all(|p| p.time_s >= axis.0 * (1.0 - 1e-9)));
        assert!(s.points.iter().all(|p| p.time_s <= axis.1 * (1.0 + 1e-9)));
    }
    for s in chart.series_of(SeriesKind::RatedCurrent) {
        let times: Vec<f64> = s.points.iter().map(|p| p.time_s).collect();
        assert_eq!(times, [axis.0, axis.1]);
    }
}
