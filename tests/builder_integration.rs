//! Building a network from a CSV sheet and rendering its items.

mod common;

use tcc_plot::color::{PALETTE, lighten};
use tcc_plot::error::InputError;
use tcc_plot::io::{BuildDefaults, build_catalog, read_rows};
use tcc_plot::plot::{PlotStyle, SeriesKind};

#[test]
fn sheet_items_keep_input_order_and_metadata() {
    let catalog = common::sample_catalog();
    let names: Vec<&str> = catalog.items().iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["TS5", "TSS8", "CAS 5.12", "pump"]);

    let cas = catalog.get("CAS 5.12").expect("item");
    assert!(cas.emergency);
    assert!(!cas.is_load);
    assert_eq!(cas.sector.as_deref(), Some("kitchen"));
    assert!(catalog.get("pump").is_some_and(|i| i.is_load && !i.emergency));
}

#[test]
fn pump_chart_collects_four_stages() {
    let catalog = common::sample_catalog();
    let chart = catalog.compose("pump", &PlotStyle::default()).expect("pump renders");

    assert_eq!(chart.count(SeriesKind::Ampacity), 4);
    assert_eq!(chart.count(SeriesKind::RatedCurrent), 4);
    assert_eq!(chart.count(SeriesKind::Fuse), 2);
    assert_eq!(chart.count(SeriesKind::Thermal), 4);

    let rated: Vec<_> = chart.series_of(SeriesKind::RatedCurrent).map(|s| s.color).collect();
    assert_eq!(rated, PALETTE[..4]);
    let thermal: Vec<_> = chart.series_of(SeriesKind::Thermal).map(|s| s.color).collect();
    assert_eq!(thermal, PALETTE[..4].iter().map(|&c| lighten(c, 0.75)).collect::<Vec<_>>());

    let last = chart.series.last().expect("series");
    assert_eq!(last.label, "I_n=5A");
    assert_eq!(last.source, "C-PUMP");
}

#[test]
fn decimal_commas_and_products_are_read() {
    let catalog = common::sample_catalog();
    let net = catalog.network();
    let conductor = |name: &str| {
        let id = net.find(name).expect("conductor exists");
        net.node(id).kind().as_conductor().cloned().expect("conductor kind")
    };
    assert_eq!(conductor("C-TS5").rated_a, 25.53);
    assert_eq!(conductor("C-CAS").section_mm2, 2.5);
    let pump = conductor("C-PUMP");
    assert_eq!(pump.section_mm2, 2.5);
    assert_eq!(pump.k, 143.0);
    assert_eq!(conductor("C-TSS8").k, 115.0);
}

#[test]
fn whole_tree_drawing() {
    let catalog = common::sample_catalog();
    let text = catalog.tree(None).expect("tree");
    let expected = "==grid\n\
                    \x20   ┣━ TS5\n\
                    \x20   ┃   ┣━ TSS8\n\
                    \x20   ┃   ┃   ┣━ CAS 5.12\n\
                    \x20   ┃   ┃   ┃   ┣━ pump\n";
    assert_eq!(text, expected);
}

#[test]
fn unknown_feeder_names_its_row() {
    let sheet = "name,rated_current,conductor_section,conductor_admissible,feeder\n\
                 A,10,2.5,26,\n\
                 B,10,2.5,26,Z\n";
    let rows = read_rows(sheet.as_bytes(), 0, b',').expect("parses");
    let err = build_catalog(&rows, &BuildDefaults::default()).unwrap_err();
    assert!(matches!(err, InputError::UnknownFeeder { row: 2, ref name } if name == "Z"));
    assert_eq!(err.to_string(), "row 2: feeder \"Z\" does not exist");
}

#[test]
fn missing_name_is_reported() {
    let sheet = "name,rated_current,conductor_section,conductor_admissible\n\
                 ,10,2.5,26\n";
    let rows = read_rows(sheet.as_bytes(), 0, b',').expect("parses");
    let err = build_catalog(&rows, &BuildDefaults::default()).unwrap_err();
    assert!(matches!(err, InputError::MissingField { row: 1, column: "name" }));
}
