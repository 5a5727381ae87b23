//! Worked three-level feeder used as the `reference` preset and in tests.
//!
//! Main board TS5 feeds sub-board TSS8, which feeds circuit board CAS 5.12,
//! which supplies a single 30 kW load:
//!
//! ```text
//! board     I_load  I_cond  breaker  fuse  I_cc
//! TS5       25.53   256     63 A     80 A  68.67
//! TSS8      15.64   87      32 A     40 A  6.757
//! CAS 5.12  9.17    26      16 A     -     -
//! ```

use crate::curves::{Fuse, Thermal};

use super::{Bus, Conductor, Load, Network, NodeId, NodeKind, Protection};

/// Handles into the reference network.
#[derive(Debug, Clone)]
pub struct ReferenceNetwork {
    /// The built tree.
    pub network: Network,
    /// Buses TS5, TSS8 and CAS 5.12, root-first.
    pub buses: [NodeId; 3],
    /// Protections feeding each conductor, root-first.
    pub protections: [NodeId; 3],
    /// Conductors, root-first.
    pub conductors: [NodeId; 3],
    /// The terminal load.
    pub load: NodeId,
}

struct Stage {
    bus: &'static str,
    short_circuit_a: f64,
    fuse: Option<(&'static str, f64)>,
    breaker: (&'static str, f64, f64),
    cable: (&'static str, f64, f64, f64),
}

const STAGES: [Stage; 3] = [
    Stage {
        bus: "TS5",
        short_circuit_a: 68.67e6,
        fuse: Some(("NH 80", 80.0)),
        breaker: ("Sica 63", 63.0, 10e3),
        cable: ("C-TS5", 70.0, 256.0, 25.53),
    },
    Stage {
        bus: "TSS8",
        short_circuit_a: 6.757e6,
        fuse: Some(("NH 40", 40.0)),
        breaker: ("Sica 32", 32.0, 3e3),
        cable: ("C-TSS8", 10.0, 87.0, 15.64),
    },
    Stage {
        bus: "CAS 5.12",
        short_circuit_a: 0.0,
        fuse: None,
        breaker: ("Sica 16", 16.0, 3e3),
        cable: ("C-CAS", 2.5, 26.0, 9.17),
    },
];

impl ReferenceNetwork {
    /// Builds the network. Every attachment is valid by construction.
    pub fn build() -> Self {
        let mut network = Network::new("grid");
        let mut buses = [Network::ROOT; 3];
        let mut protections = [Network::ROOT; 3];
        let mut conductors = [Network::ROOT; 3];
        let mut upstream = Network::ROOT;

        for (i, stage) in STAGES.iter().enumerate() {
            let bus = network.add_node(
                stage.bus,
                NodeKind::Bus(Bus {
                    short_circuit_a: stage.short_circuit_a,
                }),
            );
            let (breaker, rated, icc) = stage.breaker;
            let protection = network.add_node(
                format!("P-{}", stage.bus),
                NodeKind::Protection(Protection {
                    fuse: stage.fuse.map(|(name, rating)| Fuse::new(name, rating)),
                    thermal: Some(Thermal::type_c(breaker, rated, icc)),
                }),
            );
            let (cable, s, adm, rated_a) = stage.cable;
            let conductor =
                network.add_node(cable, NodeKind::Conductor(Conductor::new(s, adm, rated_a)));

            for (parent, child) in [(upstream, bus), (bus, protection), (protection, conductor)] {
                if let Err(e) = network.attach_child(parent, child) {
                    unreachable!("reference network is well formed: {e}");
                }
            }

            buses[i] = bus;
            protections[i] = protection;
            conductors[i] = conductor;
            upstream = conductor;
        }

        let load = network.add_node(
            "Load",
            NodeKind::Load(Load {
                rated_a: 53.0,
                power_w: 30e3,
                power_factor: 0.9,
                ..Load::new(53.0)
            }),
        );
        if let Err(e) = network.attach_child(upstream, load) {
            unreachable!("reference network is well formed: {e}");
        }

        Self {
            network,
            buses,
            protections,
            conductors,
            load,
        }
    }
}
