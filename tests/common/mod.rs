//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use tcc_plot::catalog::Catalog;
use tcc_plot::io::{BuildDefaults, build_catalog, read_rows};

/// Two banner lines, a header and a four-level feeder ending in a pump.
///
/// Mirrors the built-in reference boards, with the pump on its own
/// generic breaker below `CAS 5.12`.
pub const SAMPLE_SHEET: &str = "\
Tablero general - planilla de cargas
rev 2
sector,load,emergency,name,rated_current,conductor_name,conductor_section,conductor_admissible,conductor_k,breaker_name,breaker_rated,breaker_short_circuit,breaker_curve,generic_name,generic_curve,fuse_name,fuse_rating,feeder
main,,,TS5,\"25,53\",C-TS5,70,256,,Sica 63,63,10000,C,,,NH 80,80,
main,,,TSS8,\"15,64\",C-TSS8,10,87,,Sica 32,32,3000,C,,,NH 40,40,TS5
kitchen,,SI,CAS 5.12,9.17,C-CAS,\"2,5\",26,,Sica 16,16,3000,C,,,,,TSS8
kitchen,x,,pump,5,C-PUMP,1x2.5,26,143,,,,,Generic 5,C,,,CAS 5.12
";

/// Rows skipped before the header of [`SAMPLE_SHEET`].
pub const SAMPLE_SKIP_ROWS: usize = 2;

/// Catalog built from [`SAMPLE_SHEET`].
pub fn sample_catalog() -> Catalog {
    let rows = read_rows(SAMPLE_SHEET.as_bytes(), SAMPLE_SKIP_ROWS, b',').expect("sample sheet parses");
    build_catalog(&rows, &BuildDefaults::default()).expect("sample sheet builds")
}

/// Catalog over the built-in reference network.
pub fn reference_catalog() -> Catalog {
    Catalog::reference()
}
