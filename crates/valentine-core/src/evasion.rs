//! Evasion geometry for the declining control.
//!
//! Every time the pointer enters (or a finger touches) the "No" control on
//! the question screen, it jumps to a fresh offset from the viewport center.
//! The offset keeps the control at least [`EVADE_MARGIN`] away from every
//! edge.

use rand::Rng;

/// Distance kept between the evading control and each viewport edge.
pub const EVADE_MARGIN: f64 = 100.0;

/// Current viewport size in logical units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Offset of the evading control from the viewport center.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const ORIGIN: Offset = Offset { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Map two unit samples in `[0, 1)` to an offset inside `viewport`.
///
/// Degenerate extents (zero, negative, NaN, or not wider than both margins)
/// collapse that axis to 0 instead of producing an off-screen position.
///
/// # Example
///
/// ```
/// use valentine_core::{evade_offset, Offset, Viewport};
///
/// let offset = evade_offset(Viewport::new(1000.0, 800.0), 0.0, 0.5);
/// assert_eq!(offset, Offset::new(-400.0, 0.0));
///
/// assert_eq!(evade_offset(Viewport::new(0.0, 0.0), 0.3, 0.9), Offset::ORIGIN);
/// ```
pub fn evade_offset(viewport: Viewport, ux: f64, uy: f64) -> Offset {
    Offset {
        x: axis_offset(viewport.width, ux),
        y: axis_offset(viewport.height, uy),
    }
}

/// Draw a fresh evasion offset using the injected random source.
pub fn sample_offset<R: Rng + ?Sized>(viewport: Viewport, rng: &mut R) -> Offset {
    let ux: f64 = rng.random();
    let uy: f64 = rng.random();
    evade_offset(viewport, ux, uy)
}

fn axis_offset(extent: f64, unit: f64) -> f64 {
    let extent = if extent.is_finite() { extent.max(0.0) } else { 0.0 };
    let range = (extent - EVADE_MARGIN * 2.0).max(0.0);
    if range == 0.0 {
        return 0.0;
    }
    let unit = if unit.is_finite() { unit.clamp(0.0, 1.0) } else { 0.0 };
    unit * range - extent / 2.0 + EVADE_MARGIN
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn unit_extremes_reach_the_margins() {
        let vp = Viewport::new(1000.0, 600.0);
        assert_eq!(evade_offset(vp, 0.0, 0.0), Offset::new(-400.0, -200.0));
        assert_eq!(evade_offset(vp, 1.0, 1.0), Offset::new(400.0, 200.0));
        assert_eq!(evade_offset(vp, 0.5, 0.5), Offset::ORIGIN);
    }

    #[test]
    fn zero_viewport_falls_back_to_origin() {
        assert_eq!(evade_offset(Viewport::new(0.0, 0.0), 0.7, 0.2), Offset::ORIGIN);
    }

    #[test]
    fn negative_and_nan_extents_are_degenerate() {
        let vp = Viewport::new(-50.0, f64::NAN);
        assert_eq!(evade_offset(vp, 0.9, 0.9), Offset::ORIGIN);
    }

    #[test]
    fn viewport_within_margins_pins_axis() {
        // Wide enough horizontally, too short vertically
        let vp = Viewport::new(400.0, 150.0);
        let offset = evade_offset(vp, 0.25, 0.75);
        assert_eq!(offset.x, -50.0);
        assert_eq!(offset.y, 0.0);
    }

    #[test]
    fn seeded_sampling_is_reproducible() {
        let vp = Viewport::new(1280.0, 720.0);
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..10 {
            assert_eq!(sample_offset(vp, &mut a), sample_offset(vp, &mut b));
        }
    }
}
