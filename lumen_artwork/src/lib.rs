// Seeded generative artwork: parameters, palettes, and layouts for the
// Lumen galleries.
//
// A seed string deterministically drives everything: it is hashed into
// PRNG state (`lumen_prng`), the six generation knobs are drawn, the
// theme palette is jittered, and the burst/particle layout is placed —
// all from one stream, in one fixed order. Rendering then replays the
// finished scene onto a caller-supplied surface without touching the
// stream.
//
// Architecture:
// - `theme.rs`: `Theme` registry — base colors and hue windows
// - `palette.rs`: `Palette` derivation with seeded jitter
// - `params.rs`: `GenerationParams` — the six bounded knobs
// - `layout.rs`: burst and particle placement
// - `surface.rs`: the `Surface` drawing-collaborator trait
// - `render.rs`: scene → surface primitives
// - `lib.rs` (this file): `compose` pipeline and the `generate` entry
//   points
//
// **Critical constraint: determinism.** For a fixed `(seed, width,
// height, theme)` the ordered draw sequence — and therefore every
// palette, burst, and particle — is bit-identical across calls,
// processes, and platforms. Golden-seed tests below pin exact values;
// nothing here may reorder, add, or drop a draw.

pub mod layout;
pub mod palette;
pub mod params;
pub mod render;
pub mod surface;
pub mod theme;

// Re-export key types at crate root for convenience.
pub use layout::{Burst, BurstKind, Layout, Particle, ParticleRole};
pub use palette::{AUX_COLOR_COUNT, HslColor, Palette, PaletteMode, palette};
pub use params::GenerationParams;
pub use render::render;
pub use surface::Surface;
pub use theme::Theme;

use lumen_prng::{ArtRng, hash_seed};
use serde::{Deserialize, Serialize};

/// A fully composed artwork: everything the renderer needs, and nothing
/// that outlives the generation call that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub theme: Theme,
    pub width: f64,
    pub height: f64,
    pub palette: Palette,
    pub params: GenerationParams,
    pub layout: Layout,
}

/// Summary of one generation, returned to the embedding page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtworkInfo {
    pub seed: String,
    pub theme: Theme,
    pub params: GenerationParams,
    pub burst_count: u32,
}

/// Compose a scene from a seed without rendering it.
///
/// This is the pure pipeline: hash → params (six draws) → jittered
/// palette (eighteen draws) → layout. The tuner and the tests use it
/// directly; `generate` adds rendering on top.
pub fn compose(seed: &str, theme: Theme, width: f64, height: f64) -> Scene {
    let mut rng = ArtRng::from_seed(seed);
    let params = GenerationParams::draw(&mut rng);
    let pal = palette::palette(theme, PaletteMode::Jittered(&mut rng));
    let placed = layout::compose_layout(&mut rng, width, height, &params);
    Scene {
        theme,
        width,
        height,
        palette: pal,
        params,
        layout: placed,
    }
}

/// Generate an artwork onto a surface, resolving the theme from the seed.
///
/// The theme index is word 0 of the seed hash modulo the registry size,
/// so the same seed lands on the same theme everywhere without the
/// caller carrying theme state.
pub fn generate(surface: &mut dyn Surface, seed: &str) -> ArtworkInfo {
    let words = hash_seed(seed);
    let themes = Theme::all();
    let theme = themes[words[0] as usize % themes.len()];
    generate_with_theme(surface, seed, theme)
}

/// Generate an artwork onto a surface with an explicit theme.
pub fn generate_with_theme(surface: &mut dyn Surface, seed: &str, theme: Theme) -> ArtworkInfo {
    let scene = compose(seed, theme, surface.width(), surface.height());
    render::render(&scene, surface);
    ArtworkInfo {
        seed: seed.to_string(),
        theme,
        params: scene.params,
        burst_count: scene.params.burst_count,
    }
}
