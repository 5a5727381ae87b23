//! Node kinds of the single-line diagram and their device parameters.

use std::fmt;

use crate::curves::{Curve, Fuse, Thermal, conductor_curve};

/// Default material/insulation constant for copper with PVC insulation.
pub const DEFAULT_CONDUCTOR_K: f64 = 115.0;

/// Default maximum relative voltage drop of a load feeder.
pub const DEFAULT_MAX_VOLTAGE_DROP: f64 = 0.05;

/// Handle of a node inside a [`super::Network`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in its arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How many children a node kind may own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// No children (loads).
    Leaf,
    /// Exactly one child slot (source, protection, conductor).
    Single,
    /// Any number of children (buses).
    Many,
}

impl Cardinality {
    /// Maximum child count, `None` when unbounded.
    pub fn limit(self) -> Option<usize> {
        match self {
            Self::Leaf => Some(0),
            Self::Single => Some(1),
            Self::Many => None,
        }
    }
}

/// Busbar where the network branches.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Bus {
    /// Prospective short-circuit current at the bus (A).
    pub short_circuit_a: f64,
}

/// Protective device: a fuse, a breaker, or both in series.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Protection {
    /// Optional fuse.
    pub fuse: Option<Fuse>,
    /// Optional breaker trip unit.
    pub thermal: Option<Thermal>,
}

/// Cable run between a protection and the next bus or load.
#[derive(Debug, Clone, PartialEq)]
pub struct Conductor {
    /// Cross-section `S` (mm²).
    pub section_mm2: f64,
    /// Continuous ampacity `I_adm` (A).
    pub admissible_a: f64,
    /// Rated (design) current `I_n` carried by the run (A).
    pub rated_a: f64,
    /// Material/insulation constant `K`.
    pub k: f64,
}

impl Conductor {
    /// Creates a conductor with the default `K`.
    pub fn new(section_mm2: f64, admissible_a: f64, rated_a: f64) -> Self {
        Self {
            section_mm2,
            admissible_a,
            rated_a,
            k: DEFAULT_CONDUCTOR_K,
        }
    }

    /// Replaces the material constant.
    pub fn with_k(mut self, k: f64) -> Self {
        self.k = k;
        self
    }

    /// Withstand curve floored at the continuous ampacity.
    pub fn ampacity_curve(&self) -> Curve {
        conductor_curve(self.section_mm2, self.admissible_a, self.k)
    }
}

/// Terminal consumer.
#[derive(Debug, Clone, PartialEq)]
pub struct Load {
    /// Rated current (A).
    pub rated_a: f64,
    /// Active power (W).
    pub power_w: f64,
    /// Power factor `cos φ`.
    pub power_factor: f64,
    /// Maximum relative voltage drop.
    pub max_voltage_drop: f64,
}

impl Load {
    /// Creates a load drawing `rated_a` with unknown power at unity power factor.
    pub fn new(rated_a: f64) -> Self {
        Self {
            rated_a,
            power_w: 0.0,
            power_factor: 1.0,
            max_voltage_drop: DEFAULT_MAX_VOLTAGE_DROP,
        }
    }
}

/// The five kinds of node in the diagram.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Network source; the tree root.
    Source,
    /// Busbar.
    Bus(Bus),
    /// Protective device.
    Protection(Protection),
    /// Cable run.
    Conductor(Conductor),
    /// Terminal load.
    Load(Load),
}

impl NodeKind {
    /// Child-count rule of this kind.
    pub fn cardinality(&self) -> Cardinality {
        match self {
            Self::Bus(_) => Cardinality::Many,
            Self::Load(_) => Cardinality::Leaf,
            Self::Source | Self::Protection(_) | Self::Conductor(_) => Cardinality::Single,
        }
    }

    /// Lower-case kind name for messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Bus(_) => "bus",
            Self::Protection(_) => "protection",
            Self::Conductor(_) => "conductor",
            Self::Load(_) => "load",
        }
    }

    /// Buses and loads are the items a chart can be drawn for.
    pub fn is_item(&self) -> bool {
        matches!(self, Self::Bus(_) | Self::Load(_))
    }

    pub fn as_conductor(&self) -> Option<&Conductor> {
        match self {
            Self::Conductor(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_protection(&self) -> Option<&Protection> {
        match self {
            Self::Protection(p) => Some(p),
            _ => None,
        }
    }
}

/// One node of the arena.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub(crate) name: String,
    pub(crate) kind: NodeKind,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    pub(crate) fn new(name: String, kind: NodeKind) -> Self {
        Self {
            name,
            kind,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Human identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Kind and device parameters.
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Upstream node, `None` for the root or a detached node.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Downstream nodes in attachment order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}
