//! Turns input rows into a wired network and its item catalog.
//!
//! Every row yields the chain `Protection → Conductor → item`. A second pass
//! hangs each chain's protection from the item named in `feeder`, or from
//! the network source when the cell is empty. The source holds a single
//! child, so when several chains start at the source they share an implicit
//! busbar ([`SOURCE_BUS_NAME`]) that is not listed as an item.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::catalog::{Catalog, Item};
use crate::curves::{ElectronicSettings, Fuse, Thermal, TripFamily};
use crate::error::InputError;
use crate::network::{
    Bus, Conductor, DEFAULT_CONDUCTOR_K, Load, Network, NodeId, NodeKind, Protection,
};

use super::input::{InputRow, parse_quantity};

/// Name given to the network source.
pub const SOURCE_NAME: &str = "grid";

/// Busbar inserted below the source when several rows have no feeder.
pub const SOURCE_BUS_NAME: &str = "grid busbar";

/// Values applied where a row leaves a cell empty.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildDefaults {
    /// Conductor material constant `K`.
    pub conductor_k: f64,
}

impl Default for BuildDefaults {
    fn default() -> Self {
        Self {
            conductor_k: DEFAULT_CONDUCTOR_K,
        }
    }
}

/// Parsed view of one row; borrows the raw cells and knows its row number.
struct Cells<'a> {
    row: usize,
    raw: &'a InputRow,
}

impl<'a> Cells<'a> {
    fn text(cell: &Option<String>) -> Option<&str> {
        cell.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    fn number(&self, column: &'static str, cell: &Option<String>) -> Result<Option<f64>, InputError> {
        match Self::text(cell) {
            None => Ok(None),
            Some(value) => parse_quantity(value).map(Some).ok_or_else(|| InputError::InvalidNumber {
                row: self.row,
                column,
                value: value.to_string(),
            }),
        }
    }

    fn required(&self, column: &'static str, cell: &Option<String>) -> Result<f64, InputError> {
        self.number(column, cell)?.ok_or(InputError::MissingField {
            row: self.row,
            column,
        })
    }

    fn family(&self, cell: &Option<String>) -> Result<Option<TripFamily>, InputError> {
        Self::text(cell)
            .map(|value| {
                value.parse().map_err(|value| InputError::UnknownCurveFamily {
                    row: self.row,
                    value,
                })
            })
            .transpose()
    }

    fn thermal(&self, rated_current: f64) -> Result<Option<Thermal>, InputError> {
        let r = self.raw;
        if let Some(name) = Self::text(&r.breaker_name) {
            match self.family(&r.breaker_curve)? {
                Some(TripFamily::C) => {
                    return Ok(Some(Thermal::type_c(
                        name,
                        self.required("breaker_rated", &r.breaker_rated)?,
                        self.number("breaker_short_circuit", &r.breaker_short_circuit)?
                            .unwrap_or_default(),
                    )));
                }
                Some(TripFamily::M(defaults)) => {
                    let settings = ElectronicSettings {
                        long_pickup: self.number("breaker_ir", &r.breaker_ir)?.unwrap_or(defaults.long_pickup),
                        long_delay_s: self.number("breaker_tr", &r.breaker_tr)?.unwrap_or(defaults.long_delay_s),
                        short_pickup: self.number("breaker_isd", &r.breaker_isd)?.or(defaults.short_pickup),
                        short_delay_s: self.number("breaker_tsd", &r.breaker_tsd)?.unwrap_or(defaults.short_delay_s),
                        instantaneous_pickup: self
                            .number("breaker_ii", &r.breaker_ii)?
                            .unwrap_or(defaults.instantaneous_pickup),
                        instantaneous_delay_s: defaults.instantaneous_delay_s,
                    };
                    return Ok(Some(Thermal::electronic(
                        name,
                        self.required("breaker_rated", &r.breaker_rated)?,
                        self.number("breaker_short_circuit", &r.breaker_short_circuit)?
                            .unwrap_or_default(),
                        settings,
                    )));
                }
                None => {}
            }
        }

        let Some(name) = Self::text(&r.generic_name) else {
            return Ok(None);
        };
        Ok(Some(Thermal {
            name: name.to_string(),
            rated_a: rated_current,
            short_circuit_a: self
                .number("generic_short_circuit", &r.generic_short_circuit)?
                .unwrap_or_default(),
            family: self.family(&r.generic_curve)?.unwrap_or(TripFamily::C),
        }))
    }

    fn fuse(&self) -> Result<Option<Fuse>, InputError> {
        let r = self.raw;
        Ok(self.number("fuse_rating", &r.fuse_rating)?.map(|rating| {
            let name = Self::text(&r.fuse_name).map_or_else(|| format!("Fuse {rating}A"), str::to_string);
            Fuse::new(name, rating)
        }))
    }

    fn conductor(&self, rated_current: f64, defaults: &BuildDefaults) -> Result<Conductor, InputError> {
        let r = self.raw;
        let k = self.number("conductor_k", &r.conductor_k)?.unwrap_or(defaults.conductor_k);
        Ok(Conductor::new(
            self.required("conductor_section", &r.conductor_section)?,
            self.required("conductor_admissible", &r.conductor_admissible)?,
            rated_current,
        )
        .with_k(k))
    }
}

fn is_affirmative(cell: &Option<String>) -> bool {
    Cells::text(cell).is_some_and(|v| v.eq_ignore_ascii_case("si") || v.eq_ignore_ascii_case("yes"))
}

struct Chain {
    row: usize,
    item: NodeId,
    protection: NodeId,
    feeder: Option<String>,
}

/// Builds the network described by `rows`.
///
/// Row numbers in errors are 1-based positions in `rows`.
///
/// # Errors
///
/// Fails on the first row that is malformed, duplicates an earlier item,
/// names an unknown feeder or cannot be attached.
pub fn build_catalog(rows: &[InputRow], defaults: &BuildDefaults) -> Result<Catalog, InputError> {
    let mut network = Network::new(SOURCE_NAME);
    let mut items = Vec::with_capacity(rows.len());
    let mut by_name: HashMap<String, NodeId> = HashMap::with_capacity(rows.len());
    let mut chains = Vec::with_capacity(rows.len());

    for (i, raw) in rows.iter().enumerate() {
        let cells = Cells { row: i + 1, raw };
        let name = Cells::text(&raw.name).ok_or(InputError::MissingField {
            row: cells.row,
            column: "name",
        })?;
        if by_name.contains_key(name) {
            return Err(InputError::DuplicateItem {
                row: cells.row,
                name: name.to_string(),
            });
        }

        let rated_current = cells.required("rated_current", &raw.rated_current)?;
        let protection = Protection {
            fuse: cells.fuse()?,
            thermal: cells.thermal(rated_current)?,
        };
        let conductor = cells.conductor(rated_current, defaults)?;
        let is_load = Cells::text(&raw.load).is_some();
        let kind = if is_load {
            NodeKind::Load(Load::new(rated_current))
        } else {
            NodeKind::Bus(Bus::default())
        };

        let protection_name = Cells::text(&raw.breaker_name)
            .or_else(|| Cells::text(&raw.generic_name))
            .map_or_else(|| format!("P-{name}"), str::to_string);
        let conductor_name = Cells::text(&raw.conductor_name).map_or_else(|| format!("C-{name}"), str::to_string);

        let p = network.add_node(protection_name, NodeKind::Protection(protection));
        let c = network.add_node(conductor_name, NodeKind::Conductor(conductor));
        let item = network.add_node(name, kind);
        for (parent, child) in [(p, c), (c, item)] {
            network
                .attach_child(parent, child)
                .map_err(|source| InputError::Network { row: cells.row, source })?;
        }

        debug!(row = cells.row, item = name, load = is_load, "parsed row");
        by_name.insert(name.to_string(), item);
        items.push(Item {
            name: name.to_string(),
            node: item,
            sector: Cells::text(&raw.sector).map(str::to_string),
            is_load,
            emergency: is_affirmative(&raw.emergency),
        });
        chains.push(Chain {
            row: cells.row,
            item,
            protection: p,
            feeder: Cells::text(&raw.feeder).map(str::to_string),
        });
    }

    let mut top_level = Vec::new();
    for chain in &chains {
        let Some(feeder) = &chain.feeder else {
            top_level.push(chain.protection);
            continue;
        };
        let parent = *by_name.get(feeder).ok_or_else(|| InputError::UnknownFeeder {
            row: chain.row,
            name: feeder.clone(),
        })?;
        network
            .attach_child(parent, chain.protection)
            .map_err(|source| InputError::Network { row: chain.row, source })?;
        debug!(row = chain.row, item = network.node(chain.item).name(), feeder, "attached");
    }

    let first_row = chains.iter().find(|c| c.feeder.is_none()).map_or(0, |c| c.row);
    let wire = |source| InputError::Network { row: first_row, source };
    match top_level.len() {
        0 => {}
        1 => network.attach_child(network.root(), top_level[0]).map_err(wire)?,
        n => {
            let bus = network.add_node(SOURCE_BUS_NAME, NodeKind::Bus(Bus::default()));
            network.attach_child(network.root(), bus).map_err(wire)?;
            debug!(chains = n, "grouping top-level chains under {SOURCE_BUS_NAME}");
            network.set_children(bus, top_level).map_err(wire)?;
        }
    }

    info!(items = items.len(), nodes = network.len(), "network built");
    Ok(Catalog::new(network, items))
}
