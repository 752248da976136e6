// Scene rendering: drives a finished scene through a drawing surface.
//
// Rendering is a pure consumer — it reads the composed scene and issues
// surface primitives, never touching the generation stream. That keeps
// the draw-sequence contract confined to composition: two renders of the
// same scene issue the identical primitive sequence, and rendering twice
// cannot perturb what a seed generates.
//
// Connection lines between bursts are gated by `connection_density`
// through a fixed pairing pattern rather than a stream draw, for the same
// reason. Pixel output is the surface's business (see `surface.rs`).

use crate::layout::{Burst, BurstKind, ParticleRole};
use crate::palette::HslColor;
use crate::surface::Surface;
use crate::Scene;

/// Draw a composed scene onto a surface.
pub fn render(scene: &Scene, surface: &mut dyn Surface) {
    let palette = &scene.palette;
    let params = &scene.params;
    let width = scene.width;
    let height = scene.height;

    // --- Background ---
    let backdrop = HslColor::new(
        palette.primary.hue,
        palette.primary.saturation * 0.5,
        6.0,
    );
    surface.fill(&backdrop);

    // Large ambient wash, pushed off-center by the asymmetry knob.
    let wash_x = width * (0.35 + 0.3 * params.asymmetry);
    let wash_y = height * (0.65 - 0.3 * params.asymmetry);
    surface.radial_gradient(
        wash_x,
        wash_y,
        width * 0.6,
        &palette.secondary,
        &backdrop,
        0.12,
    );

    // --- Connections ---
    // Fixed pairing pattern: pair (i, j) lights up when its slot falls
    // under the density threshold.
    for (i, a) in scene.layout.bursts.iter().enumerate() {
        for (j, b) in scene.layout.bursts.iter().enumerate().skip(i + 1) {
            let slot = ((i * 7 + j * 13) % 10) as f64 / 10.0;
            if slot < params.connection_density {
                let alpha = 0.2 * a.intensity.min(b.intensity);
                surface.line(a.x, a.y, b.x, b.y, &palette.accent, alpha);
            }
        }
    }

    // --- Bursts ---
    for burst in &scene.layout.bursts {
        let inner = match burst.kind {
            BurstKind::Primary => &palette.accent,
            BurstKind::Secondary => &palette.primary,
        };
        surface.radial_gradient(
            burst.x,
            burst.y,
            burst.size,
            inner,
            &palette.secondary,
            burst.intensity,
        );
    }

    // --- Particles ---
    for particle in &scene.layout.particles {
        let color = &palette.aux_colors[particle.color_index % palette.aux_colors.len()];
        match particle.role {
            ParticleRole::Ambient { glow } => {
                if glow {
                    surface.arc(
                        particle.x,
                        particle.y,
                        particle.size * 3.0,
                        color,
                        particle.alpha * 0.3,
                    );
                }
                surface.arc(particle.x, particle.y, particle.size, color, particle.alpha);
            }
            ParticleRole::Orbital => {
                draw_orbital_trail(surface, scene, particle.x, particle.y, color);
                surface.arc(particle.x, particle.y, particle.size, color, particle.alpha);
            }
        }
    }
}

/// Comet tail behind an orbital particle: `trail_length` shrinking dots
/// stepping toward the nearest burst center.
fn draw_orbital_trail(
    surface: &mut dyn Surface,
    scene: &Scene,
    x: f64,
    y: f64,
    color: &HslColor,
) {
    let Some(anchor) = nearest_burst(&scene.layout.bursts, x, y) else {
        return;
    };
    let steps = scene.params.trail_length;
    for step in 1..=steps {
        let t = f64::from(step) / f64::from(steps + 1);
        let tx = x + (anchor.x - x) * t * 0.25;
        let ty = y + (anchor.y - y) * t * 0.25;
        let fade = 0.4 * (1.0 - t);
        surface.arc(tx, ty, 1.0 - t * 0.5, color, fade);
    }
}

fn nearest_burst<'a>(bursts: &'a [Burst], x: f64, y: f64) -> Option<&'a Burst> {
    bursts.iter().min_by(|a, b| {
        let da = (a.x - x).powi(2) + (a.y - y).powi(2);
        let db = (b.x - x).powi(2) + (b.y - y).powi(2);
        da.total_cmp(&db)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose;
    use crate::theme::Theme;

    /// Records every primitive call for assertion.
    #[derive(Debug, Clone, PartialEq)]
    enum DrawOp {
        Fill(HslColor),
        Line(f64, f64, f64, f64, HslColor, f64),
        Arc(f64, f64, f64, HslColor, f64),
        Gradient(f64, f64, f64, HslColor, HslColor, f64),
    }

    struct RecordingSurface {
        width: f64,
        height: f64,
        ops: Vec<DrawOp>,
    }

    impl RecordingSurface {
        fn new(width: f64, height: f64) -> Self {
            Self {
                width,
                height,
                ops: Vec::new(),
            }
        }
    }

    impl Surface for RecordingSurface {
        fn width(&self) -> f64 {
            self.width
        }

        fn height(&self) -> f64 {
            self.height
        }

        fn fill(&mut self, color: &HslColor) {
            self.ops.push(DrawOp::Fill(*color));
        }

        fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &HslColor, alpha: f64) {
            self.ops.push(DrawOp::Line(x1, y1, x2, y2, *color, alpha));
        }

        fn arc(&mut self, x: f64, y: f64, radius: f64, color: &HslColor, alpha: f64) {
            self.ops.push(DrawOp::Arc(x, y, radius, *color, alpha));
        }

        fn radial_gradient(
            &mut self,
            x: f64,
            y: f64,
            radius: f64,
            inner: &HslColor,
            outer: &HslColor,
            alpha: f64,
        ) {
            self.ops
                .push(DrawOp::Gradient(x, y, radius, *inner, *outer, alpha));
        }
    }

    fn ops_for(seed: &str) -> Vec<DrawOp> {
        let scene = compose(seed, Theme::Spark, 800.0, 600.0);
        let mut surface = RecordingSurface::new(800.0, 600.0);
        render(&scene, &mut surface);
        surface.ops
    }

    #[test]
    fn test_same_seed_same_primitive_sequence() {
        assert_eq!(ops_for("render-seed"), ops_for("render-seed"));
    }

    #[test]
    fn test_different_seeds_diverge() {
        assert_ne!(ops_for("render-a"), ops_for("render-b"));
    }

    #[test]
    fn test_background_fill_comes_first() {
        let ops = ops_for("background");
        assert!(matches!(ops.first(), Some(DrawOp::Fill(_))));
    }

    #[test]
    fn test_every_particle_reaches_the_surface() {
        let scene = compose("coverage", Theme::Flow, 800.0, 600.0);
        let mut surface = RecordingSurface::new(800.0, 600.0);
        render(&scene, &mut surface);
        let arcs = surface
            .ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Arc(..)))
            .count();
        // At least one arc per particle (glow and trails add more).
        assert!(arcs >= scene.layout.particles.len());
    }

    #[test]
    fn test_rendering_does_not_perturb_composition() {
        let scene = compose("pure", Theme::Grove, 800.0, 600.0);
        let mut surface = RecordingSurface::new(800.0, 600.0);
        render(&scene, &mut surface);
        render(&scene, &mut surface);
        let again = compose("pure", Theme::Grove, 800.0, 600.0);
        assert_eq!(scene, again);
    }
}
