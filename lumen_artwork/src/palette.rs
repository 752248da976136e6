// Palette derivation: per-theme colors with seeded jitter.
//
// A palette starts from the theme's static base colors and, when the caller
// supplies a generator, layers on a jitter triple (hue shift, saturation
// and lightness variance) plus five auxiliary colors drawn from the theme's
// hue window. The draw order is fixed — jitter triple first, then each
// auxiliary color as hue, saturation, lightness — because the position of
// every draw in the seed's stream is part of the reproducibility contract.
//
// The rng-free path is first-class, not a degraded fallback: gallery pages
// use it for static previews, so `PaletteMode::Base` must return a complete
// palette (identity jitter, auxiliaries = the three base colors) rather
// than leaving fields for the renderer to patch over.
//
// Used by `lib.rs::compose` with `PaletteMode::Jittered`; the base path is
// exposed to callers directly.

use crate::theme::Theme;
use lumen_prng::ArtRng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of auxiliary colors a jittered palette carries.
pub const AUX_COLOR_COUNT: usize = 5;

/// A color in HSL space. Formats as the CSS `hsl(H, S%, L%)` string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HslColor {
    /// Hue in degrees. Not normalized; jittered hues may leave [0, 360).
    pub hue: f64,
    /// Saturation percentage.
    pub saturation: f64,
    /// Lightness percentage.
    pub lightness: f64,
}

impl HslColor {
    pub const fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({:.1}, {:.1}%, {:.1}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// A derived palette: theme base colors plus jitter and auxiliaries.
///
/// `aux_colors` is always populated — three base colors in the rng-free
/// path, [`AUX_COLOR_COUNT`] drawn colors otherwise — so consumers never
/// need a missing-field fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub theme: Theme,
    pub primary: HslColor,
    pub secondary: HslColor,
    pub accent: HslColor,
    /// The theme's hue window auxiliaries were (or would be) drawn from.
    pub hue_range: (f64, f64),
    /// Global hue offset applied by renderers, in degrees.
    pub hue_shift: f64,
    /// Saturation multiplier.
    pub sat_var: f64,
    /// Lightness multiplier.
    pub light_var: f64,
    /// Ordered auxiliary colors; particles reference these by index.
    pub aux_colors: Vec<HslColor>,
}

/// How a palette gets its variation: none, or drawn from a seeded stream.
///
/// The strategy is chosen once by the caller, which keeps the rng-free
/// path explicit instead of an `Option<&mut ArtRng>` branch inside the
/// generator.
pub enum PaletteMode<'r> {
    /// Identity jitter, auxiliaries = `[primary, secondary, accent]`.
    Base,
    /// Jitter and auxiliaries drawn from the generation stream.
    Jittered(&'r mut ArtRng),
}

/// Derive a palette for a theme.
pub fn palette(theme: Theme, mode: PaletteMode<'_>) -> Palette {
    let (primary, secondary, accent) = theme.base_colors();
    let (hue_min, hue_max) = theme.hue_range();

    match mode {
        PaletteMode::Base => Palette {
            theme,
            primary,
            secondary,
            accent,
            hue_range: (hue_min, hue_max),
            hue_shift: 0.0,
            sat_var: 1.0,
            light_var: 1.0,
            aux_colors: vec![primary, secondary, accent],
        },
        PaletteMode::Jittered(rng) => {
            let hue_shift = rng.range(-10.0, 10.0);
            let sat_var = rng.range(0.9, 1.1);
            let light_var = rng.range(0.95, 1.05);

            let aux_colors = (0..AUX_COLOR_COUNT)
                .map(|_| {
                    let hue = rng.range(hue_min, hue_max);
                    let saturation = rng.range(60.0, 100.0);
                    let lightness = rng.range(50.0, 70.0);
                    HslColor::new(hue, saturation, lightness)
                })
                .collect();

            Palette {
                theme,
                primary,
                secondary,
                accent,
                hue_range: (hue_min, hue_max),
                hue_shift,
                sat_var,
                light_var,
                aux_colors,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_palette_is_static() {
        let p = palette(Theme::from_key("flow"), PaletteMode::Base);
        let (primary, secondary, accent) = Theme::Flow.base_colors();
        assert_eq!(p.hue_shift, 0.0);
        assert_eq!(p.sat_var, 1.0);
        assert_eq!(p.light_var, 1.0);
        assert_eq!(p.aux_colors, vec![primary, secondary, accent]);
        assert_eq!(p.primary, primary);
        assert_eq!(p.secondary, secondary);
        assert_eq!(p.accent, accent);
    }

    #[test]
    fn test_jittered_palette_deterministic() {
        let mut a = ArtRng::from_seed("palette-seed");
        let mut b = ArtRng::from_seed("palette-seed");
        let pa = palette(Theme::Spark, PaletteMode::Jittered(&mut a));
        let pb = palette(Theme::Spark, PaletteMode::Jittered(&mut b));
        assert_eq!(pa, pb);
    }

    #[test]
    fn test_jittered_palette_within_bounds() {
        for seed in 0..50 {
            let mut rng = ArtRng::from_seed(&format!("palette-{seed}"));
            let p = palette(Theme::Grove, PaletteMode::Jittered(&mut rng));
            let (hue_min, hue_max) = Theme::Grove.hue_range();

            assert!((-10.0..10.0).contains(&p.hue_shift));
            assert!((0.9..1.1).contains(&p.sat_var));
            assert!((0.95..1.05).contains(&p.light_var));
            assert_eq!(p.aux_colors.len(), AUX_COLOR_COUNT);
            for color in &p.aux_colors {
                assert!(color.hue >= hue_min && color.hue < hue_max);
                assert!(color.saturation >= 60.0 && color.saturation < 100.0);
                assert!(color.lightness >= 50.0 && color.lightness < 70.0);
            }
        }
    }

    #[test]
    fn test_jittered_palette_consumes_eighteen_draws() {
        let mut a = ArtRng::from_seed("draw-count");
        let mut b = ArtRng::from_seed("draw-count");
        let _ = palette(Theme::Crystal, PaletteMode::Jittered(&mut a));
        for _ in 0..(3 + AUX_COLOR_COUNT * 3) {
            let _ = b.next_f64();
        }
        assert_eq!(a.next_u32(), b.next_u32(), "streams diverged");
    }

    #[test]
    fn test_hsl_display_format() {
        let c = HslColor::new(13.076, 69.6, 64.535);
        assert_eq!(c.to_string(), "hsl(13.1, 69.6%, 64.5%)");
    }

    #[test]
    fn test_palette_serde_round_trip() {
        let mut rng = ArtRng::from_seed("serde");
        let p = palette(Theme::Nexus, PaletteMode::Jittered(&mut rng));
        let json = serde_json::to_string(&p).unwrap();
        let restored: Palette = serde_json::from_str(&json).unwrap();
        assert_eq!(p, restored);
    }
}
