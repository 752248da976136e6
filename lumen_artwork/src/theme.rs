// Theme registry: named visual profiles for generated artwork.
//
// Each theme fixes a trio of base colors and a hue window that the palette
// generator jitters within. The registry is a static table — enum variants
// with `match` lookups — so there is no runtime mutation and no global
// state. Unknown keys resolve to the default theme silently: gallery pages
// pass theme keys through from URLs and content tables, and a typo there
// should degrade to a valid artwork, not an error.
//
// Used by `palette.rs` for color derivation and by `lib.rs` to resolve a
// theme from a seed when the caller does not pick one.

use crate::palette::HslColor;
use serde::{Deserialize, Serialize};

/// The seven artwork themes shipped with the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Theme {
    /// Ember oranges and golds — the flagship look.
    Spark,
    /// Deep heated reds shading toward molten amber.
    Forge,
    /// Cool cyans and open blues.
    Flow,
    /// Saturated violets with magenta accents.
    Nexus,
    /// Warm signal yellows.
    Beacon,
    /// Mossy and leafy greens.
    Grove,
    /// Pale glacial blues, high lightness.
    Crystal,
}

impl Theme {
    /// Theme used when a key does not match any registered theme.
    pub const DEFAULT: Theme = Theme::Spark;

    /// All registered themes, in registry order.
    pub fn all() -> &'static [Theme] {
        &[
            Theme::Spark,
            Theme::Forge,
            Theme::Flow,
            Theme::Nexus,
            Theme::Beacon,
            Theme::Grove,
            Theme::Crystal,
        ]
    }

    /// Resolve a string key to a theme.
    ///
    /// Unknown keys fall back to [`Theme::DEFAULT`] silently.
    pub fn from_key(key: &str) -> Theme {
        match key {
            "spark" => Theme::Spark,
            "forge" => Theme::Forge,
            "flow" => Theme::Flow,
            "nexus" => Theme::Nexus,
            "beacon" => Theme::Beacon,
            "grove" => Theme::Grove,
            "crystal" => Theme::Crystal,
            _ => Theme::DEFAULT,
        }
    }

    /// The registry key for this theme.
    pub fn key(self) -> &'static str {
        match self {
            Theme::Spark => "spark",
            Theme::Forge => "forge",
            Theme::Flow => "flow",
            Theme::Nexus => "nexus",
            Theme::Beacon => "beacon",
            Theme::Grove => "grove",
            Theme::Crystal => "crystal",
        }
    }

    /// Base colors as `(primary, secondary, accent)`.
    pub fn base_colors(self) -> (HslColor, HslColor, HslColor) {
        match self {
            Theme::Spark => (
                HslColor::new(32.0, 95.0, 55.0),
                HslColor::new(48.0, 90.0, 60.0),
                HslColor::new(8.0, 85.0, 55.0),
            ),
            Theme::Forge => (
                HslColor::new(18.0, 85.0, 45.0),
                HslColor::new(35.0, 80.0, 50.0),
                HslColor::new(0.0, 90.0, 40.0),
            ),
            Theme::Flow => (
                HslColor::new(195.0, 85.0, 55.0),
                HslColor::new(215.0, 75.0, 60.0),
                HslColor::new(170.0, 80.0, 50.0),
            ),
            Theme::Nexus => (
                HslColor::new(275.0, 80.0, 60.0),
                HslColor::new(300.0, 70.0, 55.0),
                HslColor::new(250.0, 85.0, 65.0),
            ),
            Theme::Beacon => (
                HslColor::new(52.0, 95.0, 60.0),
                HslColor::new(40.0, 90.0, 55.0),
                HslColor::new(60.0, 85.0, 70.0),
            ),
            Theme::Grove => (
                HslColor::new(130.0, 60.0, 45.0),
                HslColor::new(95.0, 55.0, 50.0),
                HslColor::new(160.0, 65.0, 40.0),
            ),
            Theme::Crystal => (
                HslColor::new(190.0, 70.0, 75.0),
                HslColor::new(210.0, 60.0, 80.0),
                HslColor::new(175.0, 50.0, 65.0),
            ),
        }
    }

    /// Hue window `(min, max)` that jittered auxiliary colors draw from.
    pub fn hue_range(self) -> (f64, f64) {
        match self {
            Theme::Spark => (10.0, 50.0),
            Theme::Forge => (0.0, 40.0),
            Theme::Flow => (160.0, 230.0),
            Theme::Nexus => (240.0, 310.0),
            Theme::Beacon => (35.0, 65.0),
            Theme::Grove => (85.0, 170.0),
            Theme::Crystal => (165.0, 225.0),
        }
    }
}
