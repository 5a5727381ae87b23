//! Time-current coordination charts for radial low-voltage networks.
//!
//! A network is a tree of buses, protections, conductors and loads hanging
//! from one source. For any bus or load, [`plot::compose`] collects the fuse,
//! breaker and conductor curves on its path to the source into one log-log
//! [`plot::Chart`], colored so each protection matches the cable it feeds.

/// REST API over a built network.
#[cfg(feature = "api")]
pub mod api;
pub mod batch;
pub mod catalog;
pub mod color;
pub mod config;
pub mod curves;
pub mod error;
pub mod io;
pub mod network;
pub mod plot;
/// Interactive terminal browser.
#[cfg(feature = "tui")]
pub mod tui;
