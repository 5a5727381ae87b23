//! Renderable items of a network, in input order.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::RenderError;
use crate::network::reference::ReferenceNetwork;
use crate::network::{Network, NodeId};
use crate::plot::{Chart, PlotStyle, compose};

/// A bus or load that can anchor a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub name: String,
    #[serde(skip)]
    pub node: NodeId,
    /// Board or area the item belongs to, when known.
    pub sector: Option<String>,
    /// `true` for loads, `false` for buses.
    pub is_load: bool,
    /// Item is on the emergency supply.
    pub emergency: bool,
}

/// A built network together with its items.
#[derive(Debug, Clone)]
pub struct Catalog {
    network: Network,
    items: Vec<Item>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Wraps a network. Items keep the order given; a later duplicate name
    /// shadows nothing, the first one wins lookups.
    pub fn new(network: Network, items: Vec<Item>) -> Self {
        let mut index = HashMap::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            index.entry(item.name.clone()).or_insert(i);
        }
        Self {
            network,
            items,
            index,
        }
    }

    /// Catalog over the built-in three-level feeder.
    pub fn reference() -> Self {
        let r = ReferenceNetwork::build();
        let mut items: Vec<Item> = r
            .buses
            .iter()
            .map(|&id| Item {
                name: r.network.node(id).name().to_string(),
                node: id,
                sector: None,
                is_load: false,
                emergency: false,
            })
            .collect();
        items.push(Item {
            name: r.network.node(r.load).name().to_string(),
            node: r.load,
            sector: None,
            is_load: true,
            emergency: false,
        });
        Self::new(r.network, items)
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Items in input order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks an item up by name.
    pub fn get(&self, name: &str) -> Option<&Item> {
        self.index.get(name).map(|&i| &self.items[i])
    }

    /// Composes the chart of the named item.
    pub fn compose(&self, name: &str, style: &PlotStyle) -> Result<Chart, RenderError> {
        let item = self
            .get(name)
            .ok_or_else(|| RenderError::UnknownItem(name.to_string()))?;
        compose(&self.network, item.node, style)
    }

    /// Text tree around the named item, or the whole tree for `None`.
    pub fn tree(&self, name: Option<&str>) -> Result<String, RenderError> {
        let id = match name {
            Some(name) => {
                self.get(name)
                    .ok_or_else(|| RenderError::UnknownItem(name.to_string()))?
                    .node
            }
            None => self.network.root(),
        };
        Ok(self.network.render_tree(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_items_in_order() {
        let catalog = Catalog::reference();
        let names: Vec<&str> = catalog.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["TS5", "TSS8", "CAS 5.12", "Load"]);
        assert!(catalog.get("Load").is_some_and(|i| i.is_load));
        assert!(catalog.get("C-TS5").is_none());
    }

    #[test]
    fn unknown_item_is_reported() {
        let catalog = Catalog::reference();
        let err = catalog.compose("nope", &PlotStyle::default()).unwrap_err();
        assert_eq!(err, RenderError::UnknownItem("nope".into()));
        assert!(catalog.tree(Some("nope")).is_err());
    }

    #[test]
    fn tree_defaults_to_root() {
        let catalog = Catalog::reference();
        let text = catalog.tree(None).expect("root tree");
        assert!(text.starts_with("==grid\n"));
    }
}
