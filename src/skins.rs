//! Ship skin catalog
//!
//! Static configuration: skin id → display color, price, name. One entry is
//! animated instead of having a fixed color.

use serde::{Deserialize, Serialize};

use crate::consts::RAINBOW_PHASE_RATE;

/// Skin every save owns and falls back to
pub const DEFAULT_SKIN: &str = "white";

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// How a skin is colored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkinStyle {
    Static(Rgb),
    /// Cycles through hues over time
    Rainbow,
}

/// A purchasable ship skin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkinInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub price: u64,
    pub style: SkinStyle,
}

/// All skins, in shop display order
pub static SKINS: &[SkinInfo] = &[
    SkinInfo {
        id: "white",
        name: "Default White",
        price: 0,
        style: SkinStyle::Static(Rgb(255, 255, 255)),
    },
    SkinInfo {
        id: "red",
        name: "Racing Red",
        price: 5,
        style: SkinStyle::Static(Rgb(255, 100, 100)),
    },
    SkinInfo {
        id: "blue",
        name: "Ocean Blue",
        price: 8,
        style: SkinStyle::Static(Rgb(100, 150, 255)),
    },
    SkinInfo {
        id: "green",
        name: "Neon Green",
        price: 10,
        style: SkinStyle::Static(Rgb(100, 255, 100)),
    },
    SkinInfo {
        id: "purple",
        name: "Royal Purple",
        price: 12,
        style: SkinStyle::Static(Rgb(200, 100, 255)),
    },
    SkinInfo {
        id: "gold",
        name: "Golden Elite",
        price: 15,
        style: SkinStyle::Static(Rgb(255, 215, 0)),
    },
    SkinInfo {
        id: "cyan",
        name: "Cyber Cyan",
        price: 18,
        style: SkinStyle::Static(Rgb(0, 255, 255)),
    },
    SkinInfo {
        id: "orange",
        name: "Fire Orange",
        price: 20,
        style: SkinStyle::Static(Rgb(255, 165, 0)),
    },
    SkinInfo {
        id: "pink",
        name: "Hot Pink",
        price: 25,
        style: SkinStyle::Static(Rgb(255, 192, 203)),
    },
    SkinInfo {
        id: "rainbow",
        name: "Rainbow Special",
        price: 50,
        style: SkinStyle::Rainbow,
    },
];

/// Look up a skin by id
pub fn find_skin(id: &str) -> Option<&'static SkinInfo> {
    SKINS.iter().find(|s| s.id == id)
}

/// Resolved ship color state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ShipPaint {
    Static(Rgb),
    /// Animated; `phase` advances every frame
    Rainbow { phase: f32 },
}

impl Default for ShipPaint {
    fn default() -> Self {
        ShipPaint::Static(Rgb(255, 255, 255))
    }
}

impl ShipPaint {
    /// Paint for a skin id; unknown ids get the default skin's paint
    pub fn for_skin(id: &str) -> Self {
        match find_skin(id).map(|s| s.style) {
            Some(SkinStyle::Static(rgb)) => ShipPaint::Static(rgb),
            Some(SkinStyle::Rainbow) => ShipPaint::Rainbow { phase: 0.0 },
            None => {
                log::warn!("Unknown skin '{}', using {}", id, DEFAULT_SKIN);
                ShipPaint::for_skin(DEFAULT_SKIN)
            }
        }
    }

    /// Advance the animation phase
    pub fn advance(&mut self, dt: f32) {
        if let ShipPaint::Rainbow { phase } = self {
            *phase += RAINBOW_PHASE_RATE * dt;
        }
    }

    /// Current display color
    pub fn color(&self) -> Rgb {
        match *self {
            ShipPaint::Static(rgb) => rgb,
            ShipPaint::Rainbow { phase } => {
                use std::f32::consts::TAU;
                let channel = |offset: f32| (127.0 + 127.0 * (phase + offset).sin()) as u8;
                Rgb(channel(0.0), channel(TAU / 3.0), channel(2.0 * TAU / 3.0))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_unique_and_default_free() {
        for (i, a) in SKINS.iter().enumerate() {
            assert!(SKINS[i + 1..].iter().all(|b| b.id != a.id), "duplicate {}", a.id);
        }
        assert_eq!(find_skin(DEFAULT_SKIN).map(|s| s.price), Some(0));
        assert_eq!(find_skin("gold").map(|s| s.price), Some(15));
    }

    #[test]
    fn test_paint_resolution() {
        assert_eq!(ShipPaint::for_skin("red"), ShipPaint::Static(Rgb(255, 100, 100)));
        assert_eq!(ShipPaint::for_skin("rainbow"), ShipPaint::Rainbow { phase: 0.0 });
        assert_eq!(ShipPaint::for_skin("nope"), ShipPaint::Static(Rgb(255, 255, 255)));
    }

    #[test]
    fn test_rainbow_animates() {
        let mut paint = ShipPaint::for_skin("rainbow");
        let first = paint.color();
        paint.advance(0.5);
        assert_ne!(paint.color(), first);

        // Static paint ignores time
        let mut gold = ShipPaint::for_skin("gold");
        gold.advance(10.0);
        assert_eq!(gold.color(), Rgb(255, 215, 0));
    }

    #[test]
    fn test_rainbow_channels_phase_shifted() {
        let paint = ShipPaint::Rainbow { phase: std::f32::consts::FRAC_PI_2 };
        let Rgb(r, g, b) = paint.color();
        // Red peaks at sin(π/2) = 1; green and blue both sit at -0.5
        assert_eq!(r, 254);
        assert_eq!(g, b);
    }
}
