// Drawing surface abstraction.
//
// The engine never touches a real canvas: gallery pages hand it whatever
// 2D surface they render with (an HTML canvas context in the web build, a
// recording double in tests), and the renderer talks to it through this
// trait. Pixel semantics live entirely on the other side of the seam —
// the engine's contract ends at the ordered sequence of primitive calls.

use crate::palette::HslColor;

/// A 2D drawing collaborator supplied by the caller.
///
/// Implementations are expected to interpret coordinates in pixels with
/// the origin at the top-left, but nothing in the engine depends on it.
pub trait Surface {
    /// Canvas width in pixels.
    fn width(&self) -> f64;

    /// Canvas height in pixels.
    fn height(&self) -> f64;

    /// Flood the whole surface with a color.
    fn fill(&mut self, color: &HslColor);

    /// Straight line segment.
    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &HslColor, alpha: f64);

    /// Filled disc.
    fn arc(&mut self, x: f64, y: f64, radius: f64, color: &HslColor, alpha: f64);

    /// Radial gradient disc fading from `inner` at the center to `outer`
    /// at the rim.
    fn radial_gradient(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        inner: &HslColor,
        outer: &HslColor,
        alpha: f64,
    );
}
