// Generation parameters: the six bounded knobs behind one artwork.
//
// Every composition draws these once, in a fixed order, before anything
// else touches the stream. The bounds are load-bearing: the lower floors
// were raised (bursts 3→4, particles 80→100, energy 0.6→0.65, trails 3→4)
// after batch audits with the tuner kept scoring low-end draws as sparse
// and muted. Keep the floors; widening them regresses the gallery.
//
// Consumed by `layout.rs` for placement and by `lumen_tuner` for batch
// scoring. See `lib.rs::compose` for where the draw happens in the stream.

use lumen_prng::ArtRng;
use serde::{Deserialize, Serialize};

/// The bounded numeric knobs for one artwork, drawn once per generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Number of bursts, primary included. In `[4, 8]`.
    pub burst_count: u32,
    /// Ambient particle count. In `[100, 200]`.
    pub particle_count: u32,
    /// Fraction of burst pairs the renderer connects. In `[0.3, 0.7]`.
    pub connection_density: f64,
    /// Brightness/intensity scale for bursts. In `[0.65, 1.0]`.
    pub energy_intensity: f64,
    /// Trail segments behind orbital particles. In `[4, 8]`.
    pub trail_length: u32,
    /// Compositional off-center bias used by the renderer. In `[0.2, 0.8]`.
    pub asymmetry: f64,
}

impl GenerationParams {
    /// Draw all six knobs from the stream, in the canonical order.
    ///
    /// The order is part of the reproducibility contract: burst count,
    /// particle count, connection density, energy intensity, trail length,
    /// asymmetry — six draws total.
    pub fn draw(rng: &mut ArtRng) -> Self {
        Self {
            burst_count: rng.int(4, 8) as u32,
            particle_count: rng.int(100, 200) as u32,
            connection_density: rng.range(0.3, 0.7),
            energy_intensity: rng.range(0.65, 1.0),
            trail_length: rng.int(4, 8) as u32,
            asymmetry: rng.range(0.2, 0.8),
        }
    }
}
