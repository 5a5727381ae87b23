//! Radial network model: an arena of nodes linked by owning child edges and
//! non-owning parent handles.
//!
//! The tree is built once, through [`Network::attach_child`] and
//! [`Network::set_children`], and is read-only afterwards. Rendering only
//! needs `&Network`, so one network can be shared across worker threads.

pub mod node;
/// Built-in worked example network.
pub mod reference;
mod view;

pub use node::{
    Bus, Cardinality, Conductor, DEFAULT_CONDUCTOR_K, Load, Node, NodeId, NodeKind, Protection,
};

use crate::error::NetworkError;

/// Arena-backed distribution tree with a single source at [`Network::ROOT`].
///
/// # Examples
///
/// ```
/// use tcc_plot::network::{Bus, Load, Network, NodeKind};
///
/// let mut net = Network::new("grid");
/// let bus = net.add_node("MAIN", NodeKind::Bus(Bus::default()));
/// let load = net.add_node("pump", NodeKind::Load(Load::new(12.0)));
/// net.attach_child(Network::ROOT, bus).unwrap();
/// net.attach_child(bus, load).unwrap();
///
/// let names: Vec<&str> = net.ancestors(load).map(|id| net.node(id).name()).collect();
/// assert_eq!(names, ["pump", "MAIN", "grid"]);
/// ```
#[derive(Debug, Clone)]
pub struct Network {
    nodes: Vec<Node>,
}

impl Network {
    /// Handle of the source node.
    pub const ROOT: NodeId = NodeId(0);

    /// Creates a network holding only its source.
    pub fn new(root_name: impl Into<String>) -> Self {
        Self {
            nodes: vec![Node::new(root_name.into(), NodeKind::Source)],
        }
    }

    /// Handle of the source node.
    pub fn root(&self) -> NodeId {
        Self::ROOT
    }

    /// Inserts a detached node and returns its handle.
    ///
    /// A second `Source` may be inserted but can never be attached, so it
    /// stays outside the tree.
    pub fn add_node(&mut self, name: impl Into<String>, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(name.into(), kind));
        id
    }

    /// Returns the node behind `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by a different network.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Returns the node behind `id`, if it belongs to this arena.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Number of nodes, the source included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a network owns at least its source.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// First node with the given name.
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.iter().find(|(_, n)| n.name == name).map(|(id, _)| id)
    }

    /// Attaches `child` under `parent`.
    ///
    /// Buses append; source, protection and conductor nodes accept a single
    /// child; loads accept none.
    ///
    /// # Errors
    ///
    /// * [`NetworkError::Cardinality`] if `parent` has no free slot
    /// * [`NetworkError::RootAsChild`] if `child` is the source
    /// * [`NetworkError::AlreadyAttached`] if `child` already has a parent
    /// * [`NetworkError::Cycle`] if `child` is `parent` or one of its ancestors
    pub fn attach_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), NetworkError> {
        self.check_attachable(parent, child)?;

        let p = self.node(parent);
        let limit = p.kind.cardinality().limit();
        if limit.is_some_and(|max| p.children.len() >= max) {
            return Err(NetworkError::Cardinality {
                parent: p.name.clone(),
                kind: p.kind.label(),
                limit: limit.unwrap_or_default(),
                child: self.node(child).name.clone(),
            });
        }

        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);
        Ok(())
    }

    /// Replaces the whole child list of a bus.
    ///
    /// Previous children are detached. Either every child is attached or,
    /// on error, nothing changes.
    ///
    /// # Errors
    ///
    /// * [`NetworkError::NotABus`] if `bus` does not hold a child list
    /// * any error [`Network::attach_child`] reports for a single child, or
    ///   [`NetworkError::AlreadyAttached`] for a child listed twice
    pub fn set_children(&mut self, bus: NodeId, children: Vec<NodeId>) -> Result<(), NetworkError> {
        let b = self.node(bus);
        if b.kind.cardinality() != Cardinality::Many {
            return Err(NetworkError::NotABus {
                name: b.name.clone(),
                kind: b.kind.label(),
            });
        }

        for (i, &child) in children.iter().enumerate() {
            if children[..i].contains(&child) {
                return Err(NetworkError::AlreadyAttached {
                    child: self.node(child).name.clone(),
                    parent: self.node(bus).name.clone(),
                });
            }
            if self.node(child).parent == Some(bus) {
                continue;
            }
            self.check_attachable(bus, child)?;
        }

        let previous = std::mem::take(&mut self.nodes[bus.0].children);
        for old in previous {
            self.nodes[old.0].parent = None;
        }
        for &child in &children {
            self.nodes[child.0].parent = Some(bus);
        }
        self.nodes[bus.0].children = children;
        Ok(())
    }

    fn check_attachable(&self, parent: NodeId, child: NodeId) -> Result<(), NetworkError> {
        let c = self.node(child);
        if matches!(c.kind, NodeKind::Source) {
            return Err(NetworkError::RootAsChild(c.name.clone()));
        }
        if let Some(current) = c.parent {
            return Err(NetworkError::AlreadyAttached {
                child: c.name.clone(),
                parent: self.node(current).name.clone(),
            });
        }
        if self.ancestors(parent).any(|a| a == child) {
            return Err(NetworkError::Cycle {
                parent: self.node(parent).name.clone(),
                child: c.name.clone(),
            });
        }
        Ok(())
    }

    /// Walks from `id` up to the topmost node, both included.
    ///
    /// For an attached node the last element is [`Network::ROOT`].
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            network: self,
            next: Some(id),
        }
    }

    /// Nodes from the source down to `id`, or `None` if `id` is detached.
    pub fn path_from_root(&self, id: NodeId) -> Option<Vec<NodeId>> {
        let mut path: Vec<NodeId> = self.ancestors(id).collect();
        if path.last() != Some(&Self::ROOT) {
            return None;
        }
        path.reverse();
        Some(path)
    }

    /// Downstream nodes of `id`.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }
}

/// Child-to-parent walk produced by [`Network::ancestors`].
///
/// Cloning the iterator restarts the walk from the same position.
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    network: &'a Network,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.network.node(current).parent;
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::Thermal;

    fn protection() -> NodeKind {
        NodeKind::Protection(Protection {
            fuse: None,
            thermal: Some(Thermal::type_c("b", 16.0, 3e3)),
        })
    }

    fn conductor() -> NodeKind {
        NodeKind::Conductor(Conductor::new(2.5, 26.0, 9.0))
    }

    #[test]
    fn single_slot_rejects_second_child() {
        let mut net = Network::new("grid");
        let p = net.add_node("P", protection());
        let a = net.add_node("A", conductor());
        let b = net.add_node("B", conductor());
        net.attach_child(p, a).expect("first child fits");
        let err = net.attach_child(p, b).unwrap_err();
        assert!(matches!(err, NetworkError::Cardinality { limit: 1, .. }));
        assert_eq!(net.node(b).parent(), None);
    }

    #[test]
    fn source_takes_only_one_child() {
        let mut net = Network::new("grid");
        let a = net.add_node("A", NodeKind::Bus(Bus::default()));
        let b = net.add_node("B", NodeKind::Bus(Bus::default()));
        assert!(net.attach_child(Network::ROOT, a).is_ok());
        assert!(net.attach_child(Network::ROOT, b).is_err());
    }

    #[test]
    fn load_takes_no_children() {
        let mut net = Network::new("grid");
        let l = net.add_node("L", NodeKind::Load(Load::new(5.0)));
        let p = net.add_node("P", protection());
        let err = net.attach_child(l, p).unwrap_err();
        assert!(matches!(err, NetworkError::Cardinality { limit: 0, .. }));
    }

    #[test]
    fn bus_appends_children_in_order() {
        let mut net = Network::new("grid");
        let bus = net.add_node("B", NodeKind::Bus(Bus::default()));
        let p1 = net.add_node("P1", protection());
        let p2 = net.add_node("P2", protection());
        net.attach_child(bus, p1).expect("attach");
        net.attach_child(bus, p2).expect("attach");
        assert_eq!(net.children(bus), &[p1, p2]);
        assert_eq!(net.node(p2).parent(), Some(bus));
    }

    #[test]
    fn cycles_and_reparenting_are_rejected() {
        let mut net = Network::new("grid");
        let bus = net.add_node("B", NodeKind::Bus(Bus::default()));
        let p = net.add_node("P", protection());
        let bus2 = net.add_node("B2", NodeKind::Bus(Bus::default()));
        net.attach_child(bus, p).expect("attach");
        assert!(matches!(
            net.attach_child(p, bus),
            Err(NetworkError::Cycle { .. })
        ));
        assert!(matches!(
            net.attach_child(bus2, p),
            Err(NetworkError::AlreadyAttached { .. })
        ));
        assert!(matches!(
            net.attach_child(bus, Network::ROOT),
            Err(NetworkError::RootAsChild(_))
        ));
    }

    #[test]
    fn set_children_replaces_bus_children() {
        let mut net = Network::new("grid");
        let bus = net.add_node("B", NodeKind::Bus(Bus::default()));
        let p1 = net.add_node("P1", protection());
        let p2 = net.add_node("P2", protection());
        let p3 = net.add_node("P3", protection());
        net.attach_child(bus, p1).expect("attach");
        net.set_children(bus, vec![p2, p3]).expect("bulk set");
        assert_eq!(net.children(bus), &[p2, p3]);
        assert_eq!(net.node(p1).parent(), None);
        assert_eq!(net.node(p3).parent(), Some(bus));
    }

    #[test]
    fn set_children_is_all_or_nothing() {
        let mut net = Network::new("grid");
        let bus = net.add_node("B", NodeKind::Bus(Bus::default()));
        let p1 = net.add_node("P1", protection());
        net.attach_child(bus, p1).expect("attach");
        let err = net.set_children(bus, vec![p1, Network::ROOT]);
        assert!(err.is_err());
        assert_eq!(net.children(bus), &[p1]);

        let p = net.add_node("P", protection());
        assert!(matches!(
            net.set_children(p, vec![]),
            Err(NetworkError::NotABus { .. })
        ));
        assert!(net.set_children(bus, vec![p, p]).is_err());
    }

    #[test]
    fn ancestors_is_restartable_and_ends_at_root() {
        let mut net = Network::new("grid");
        let bus = net.add_node("B", NodeKind::Bus(Bus::default()));
        let p = net.add_node("P", protection());
        net.attach_child(Network::ROOT, bus).expect("attach");
        net.attach_child(bus, p).expect("attach");

        let walk = net.ancestors(p);
        let first: Vec<NodeId> = walk.clone().collect();
        let second: Vec<NodeId> = walk.collect();
        assert_eq!(first, vec![p, bus, Network::ROOT]);
        assert_eq!(first, second);
        assert_eq!(net.path_from_root(p), Some(vec![Network::ROOT, bus, p]));
    }

    #[test]
    fn detached_nodes_have_no_root_path() {
        let mut net = Network::new("grid");
        let bus = net.add_node("B", NodeKind::Bus(Bus::default()));
        assert_eq!(net.path_from_root(bus), None);
        assert_eq!(net.ancestors(bus).count(), 1);
        assert_eq!(net.find("B"), Some(bus));
        assert_eq!(net.find("nope"), None);
    }
}
