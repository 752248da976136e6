// Spatial layout generation: burst placement and particle fields.
//
// Produces the geometry of one artwork — a primary burst biased toward the
// canvas center, secondary bursts that either cluster around it or scatter
// inside a margin, an ambient particle field, and optional orbital rings —
// all from draws on a single `ArtRng` threaded through in one fixed order.
//
// The generation is fully deterministic given the rng state at entry and
// the canvas dimensions: identical inputs reproduce identical burst and
// particle lists element-for-element, in the same order. Positions are not
// clamped to the canvas; clustered secondaries near an edge may land
// outside it, and the renderer simply clips them.
//
// See also: `params.rs` for the knobs consumed here, `render.rs` for how
// the resulting scene reaches a drawing surface.

use crate::palette::AUX_COLOR_COUNT;
use crate::params::GenerationParams;
use lumen_prng::ArtRng;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Size of every orbital particle. Orbitals draw only their angle and
/// radius jitter from the stream; size and alpha are fixed.
const ORBITAL_PARTICLE_SIZE: f64 = 1.5;

/// Alpha of every orbital particle.
const ORBITAL_PARTICLE_ALPHA: f64 = 0.6;

/// Whether a burst is the composition's focal point or a satellite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BurstKind {
    Primary,
    Secondary,
}

/// A visual focal point: position, radius, and brightness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Burst {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub intensity: f64,
    pub kind: BurstKind,
}

/// Rendering role of a particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleRole {
    /// Free-floating background particle. `glow` is a rendering hint, not
    /// a geometric property.
    Ambient { glow: bool },
    /// Member of a ring around a burst.
    Orbital,
}

/// A single placed particle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub alpha: f64,
    /// Index into the palette's auxiliary colors, assigned round-robin.
    pub color_index: usize,
    pub role: ParticleRole,
}

/// The placed geometry of one artwork.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Primary burst first, then secondaries in placement order.
    pub bursts: Vec<Burst>,
    /// Ambient particles in placement order, then orbital rings per burst.
    pub particles: Vec<Particle>,
}

/// Place all bursts and particles for one artwork.
///
/// Draw order (the reproducibility contract): primary burst x, y, size;
/// per secondary burst a cluster roll, two position draws, size, and an
/// intensity factor; per ambient particle x, y, size, alpha, glow roll;
/// then per burst an orbital roll and, on success, ring count, ring radius
/// factor, and per ring particle an angle jitter and radius jitter.
pub fn compose_layout(
    rng: &mut ArtRng,
    width: f64,
    height: f64,
    params: &GenerationParams,
) -> Layout {
    let mut bursts = Vec::with_capacity(params.burst_count as usize);
    let mut particles = Vec::new();

    // --- Primary burst ---
    // Center-biased placement; full-canvas-uniform primaries made too many
    // edge-heavy compositions.
    let primary_x = rng.range(width * 0.35, width * 0.65);
    let primary_y = rng.range(height * 0.35, height * 0.65);
    let primary_size = rng.range(width * 0.08, width * 0.15);
    bursts.push(Burst {
        x: primary_x,
        y: primary_y,
        size: primary_size,
        intensity: params.energy_intensity,
        kind: BurstKind::Primary,
    });

    // --- Secondary bursts ---
    // 40% cluster near the primary, the rest scatter inside a margin.
    for _ in 1..params.burst_count {
        let (x, y) = if rng.random_bool(0.4) {
            let angle = rng.range(0.0, TAU);
            let dist = rng.range(width * 0.1, width * 0.3);
            (
                primary_x + angle.cos() * dist,
                primary_y + angle.sin() * dist,
            )
        } else {
            let margin = width * 0.15;
            (
                rng.range(margin, width - margin),
                rng.range(margin, height - margin),
            )
        };
        let size = rng.range(width * 0.04, width * 0.1);
        let intensity = params.energy_intensity * rng.range(0.5, 1.0);
        bursts.push(Burst {
            x,
            y,
            size,
            intensity,
            kind: BurstKind::Secondary,
        });
    }

    // --- Ambient particle field ---
    for i in 0..params.particle_count as usize {
        let x = rng.range(0.0, width);
        let y = rng.range(0.0, height);
        let size = rng.range(0.5, 3.0);
        let alpha = rng.range(0.1, 0.5);
        let glow = rng.random_bool(0.15);
        particles.push(Particle {
            x,
            y,
            size,
            alpha,
            color_index: i % AUX_COLOR_COUNT,
            role: ParticleRole::Ambient { glow },
        });
    }

    // --- Orbital rings ---
    // 60% of bursts carry a ring of evenly spaced particles, each jittered
    // in angle (±0.2 rad) and radius (±20%).
    for (burst_index, burst) in bursts.iter().enumerate() {
        if !rng.random_bool(0.6) {
            continue;
        }
        let count = rng.int(5, 12);
        let orbit = burst.size * rng.range(1.5, 2.5);
        for k in 0..count {
            let base_angle = f64::from(k) * TAU / f64::from(count);
            let angle = base_angle + rng.range(-0.2, 0.2);
            let radius = orbit * rng.range(0.8, 1.2);
            particles.push(Particle {
                x: burst.x + angle.cos() * radius,
                y: burst.y + angle.sin() * radius,
                size: ORBITAL_PARTICLE_SIZE,
                alpha: ORBITAL_PARTICLE_ALPHA,
                color_index: burst_index % AUX_COLOR_COUNT,
                role: ParticleRole::Orbital,
            });
        }
    }

    Layout { bursts, particles }
}
