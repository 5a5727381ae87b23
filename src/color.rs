//! Curve colors: a categorical palette keyed by conductor depth plus HLS
//! lightening for the curves that belong with each conductor.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::network::{Network, NodeId, NodeKind};

/// An sRGB color with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    /// Pure white.
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

    /// Creates a color from unit-range channels.
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from 8-bit channels.
    pub const fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }

    /// 8-bit channels, rounded.
    pub fn to_u8(self) -> (u8, u8, u8) {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (q(self.r), q(self.g), q(self.b))
    }

    /// `#rrggbb` notation.
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_u8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Hue, lightness, saturation, each in `[0, 1]`.
    pub fn to_hls(self) -> (f64, f64, f64) {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let l = (max + min) / 2.0;
        if max == min {
            return (0.0, l, 0.0);
        }
        let range = max - min;
        let s = if l <= 0.5 {
            range / (max + min)
        } else {
            range / (2.0 - max - min)
        };
        let rc = (max - self.r) / range;
        let gc = (max - self.g) / range;
        let bc = (max - self.b) / range;
        let h = if self.r == max {
            bc - gc
        } else if self.g == max {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };
        ((h / 6.0).rem_euclid(1.0), l, s)
    }

    /// Inverse of [`Rgb::to_hls`].
    pub fn from_hls(h: f64, l: f64, s: f64) -> Self {
        if s == 0.0 {
            return Self::new(l, l, l);
        }
        let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let m1 = 2.0 * l - m2;
        Self::new(
            hue_channel(m1, m2, h + 1.0 / 3.0),
            hue_channel(m1, m2, h),
            hue_channel(m1, m2, h - 1.0 / 3.0),
        )
    }
}

fn hue_channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < 1.0 / 6.0 {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < 2.0 / 3.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0
    } else {
        m1
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Ten-entry categorical palette ("tab10").
pub const PALETTE: [Rgb; 10] = [
    Rgb::from_u8(0x1f, 0x77, 0xb4),
    Rgb::from_u8(0xff, 0x7f, 0x0e),
    Rgb::from_u8(0x2c, 0xa0, 0x2c),
    Rgb::from_u8(0xd6, 0x27, 0x28),
    Rgb::from_u8(0x94, 0x67, 0xbd),
    Rgb::from_u8(0x8c, 0x56, 0x4b),
    Rgb::from_u8(0xe3, 0x77, 0xc2),
    Rgb::from_u8(0x7f, 0x7f, 0x7f),
    Rgb::from_u8(0xbc, 0xbd, 0x22),
    Rgb::from_u8(0x17, 0xbe, 0xcf),
];

/// Palette entry for a conductor nesting depth; repeats every 10 levels.
pub fn palette_color(depth: usize) -> Rgb {
    PALETTE[depth % PALETTE.len()]
}

/// Number of conductors strictly above `id` on its path to the source.
pub fn conductor_depth(network: &Network, id: NodeId) -> usize {
    network
        .ancestors(id)
        .skip(1)
        .filter(|&a| matches!(network.node(a).kind(), NodeKind::Conductor(_)))
        .count()
}

/// Palette color of a conductor, `None` for any other kind of node.
pub fn base_color(network: &Network, id: NodeId) -> Option<Rgb> {
    match network.node(id).kind() {
        NodeKind::Conductor(_) => Some(palette_color(conductor_depth(network, id))),
        _ => None,
    }
}

/// Blends `color` toward white by `amount` in HLS space.
///
/// Lightness becomes `l + amount·(1 − l)` with hue and saturation kept.
/// `amount` is clamped to `[0, 1]`: 0 returns `color`, 1 returns white.
pub fn lighten(color: Rgb, amount: f64) -> Rgb {
    let amount = amount.clamp(0.0, 1.0);
    if amount == 0.0 {
        return color;
    }
    if amount == 1.0 {
        return Rgb::WHITE;
    }
    let (h, l, s) = color.to_hls();
    Rgb::from_hls(h, l + amount * (1.0 - l), s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{Conductor, Load};

    fn close(a: Rgb, b: Rgb) -> bool {
        (a.r - b.r).abs() < 1e-9 && (a.g - b.g).abs() < 1e-9 && (a.b - b.b).abs() < 1e-9
    }

    #[test]
    fn hls_round_trip() {
        for c in PALETTE {
            let (h, l, s) = c.to_hls();
            assert!(close(Rgb::from_hls(h, l, s), c), "{c}");
        }
    }

    #[test]
    fn lighten_endpoints() {
        let c = PALETTE[3];
        assert_eq!(lighten(c, 0.0), c);
        assert_eq!(lighten(c, 1.0), Rgb::WHITE);
        assert_eq!(lighten(c, 2.0), Rgb::WHITE);
        assert_eq!(lighten(c, -1.0), c);
    }

    #[test]
    fn lighten_raises_lightness_and_keeps_hue() {
        let c = PALETTE[0];
        let (h0, l0, _) = c.to_hls();
        let (h1, l1, _) = lighten(c, 0.5).to_hls();
        assert!((h0 - h1).abs() < 1e-9);
        assert!((l1 - (l0 + 0.5 * (1.0 - l0))).abs() < 1e-9);
        let (_, l2, _) = lighten(c, 0.75).to_hls();
        assert!(l2 > l1);
    }

    #[test]
    fn grey_stays_grey() {
        let grey = Rgb::new(0.4, 0.4, 0.4);
        let light = lighten(grey, 0.5);
        assert!(close(light, Rgb::new(0.7, 0.7, 0.7)));
    }

    #[test]
    fn hex_notation() {
        assert_eq!(PALETTE[0].to_hex(), "#1f77b4");
        assert_eq!(Rgb::WHITE.to_string(), "#ffffff");
    }

    #[test]
    fn depth_cycles_through_palette() {
        let mut net = Network::new("grid");
        let mut parent = Network::ROOT;
        let mut conductors = Vec::new();
        for i in 0..12 {
            let c = net.add_node(
                format!("C{i}"),
                NodeKind::Conductor(Conductor::new(2.5, 26.0, 10.0)),
            );
            net.attach_child(parent, c).expect("single slot is free");
            conductors.push(c);
            parent = c;
        }
        let load = net.add_node("L", NodeKind::Load(Load::new(1.0)));
        net.attach_child(parent, load).expect("single slot is free");

        let depths: Vec<usize> = conductors.iter().map(|&c| conductor_depth(&net, c)).collect();
        assert_eq!(depths, (0..12).collect::<Vec<_>>());
        let indices: Vec<usize> = depths.iter().map(|d| d % 10).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 1]);
        assert_eq!(base_color(&net, conductors[0]), base_color(&net, conductors[10]));
        assert_eq!(base_color(&net, load), None);
        assert_eq!(conductor_depth(&net, load), 12);
    }
}
