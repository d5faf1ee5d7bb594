//! Confetti layer.
//!
//! Executes the burst commands produced by the celebration scheduler.
//! Each burst becomes a few absolutely positioned DOM particles whose
//! flight is a CSS animation; the layer only adds and prunes them.

use std::time::{Duration, Instant};

use dioxus::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use valentine_core::{play, BurstRenderer, BurstSpec, CelebrationError, CelebrationSchedule};

use crate::context::{use_celebrations, Celebrations};

/// How long a particle stays in the DOM; matches `confetti-fly` in the stylesheet.
pub const PARTICLE_LIFETIME: Duration = Duration::from_millis(2500);

const FALLBACK_COLOR: &str = "#FF69B4";

/// One piece of confetti in flight.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfettiParticle {
    pub id: u64,
    pub color: &'static str,
    /// Launch point as a fraction of the viewport width
    pub origin_x: f64,
    /// Peak displacement in pixels (screen coordinates, y down)
    pub dx: f64,
    pub dy: f64,
    pub spin: f64,
    pub born: Instant,
}

impl ConfettiParticle {
    fn alive_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.born) < PARTICLE_LIFETIME
    }

    fn style(&self) -> String {
        format!(
            "left: {:.1}%; background: {}; --dx: {:.0}px; --dy: {:.0}px; --spin: {:.0}deg;",
            self.origin_x * 100.0,
            self.color,
            self.dx,
            self.dy,
            self.spin
        )
    }
}

/// Turn one burst spec into particles.
///
/// Directions fan out uniformly over `angle ± spread / 2`.
pub fn launch_particles<R: Rng + ?Sized>(
    spec: &BurstSpec,
    rng: &mut R,
    first_id: u64,
    born: Instant,
) -> Vec<ConfettiParticle> {
    let half_spread = spec.spread.abs() / 2.0;
    (0..u64::from(spec.particle_count))
        .map(|i| {
            let angle = if half_spread > 0.0 {
                spec.angle + rng.random_range(-half_spread..=half_spread)
            } else {
                spec.angle
            };
            let distance = rng.random_range(180.0..420.0);
            let radians = angle.to_radians();
            ConfettiParticle {
                id: first_id + i,
                color: spec.palette.choose(rng).copied().unwrap_or(FALLBACK_COLOR),
                origin_x: spec.origin.x(),
                dx: radians.cos() * distance,
                dy: -radians.sin() * distance,
                spin: rng.random_range(-720.0..720.0),
                born,
            }
        })
        .collect()
}

/// Burst renderer backed by the layer's particle signal.
struct DomBurstRenderer {
    particles: Signal<Vec<ConfettiParticle>>,
    rng: SmallRng,
    next_id: u64,
}

impl DomBurstRenderer {
    fn new(particles: Signal<Vec<ConfettiParticle>>, first_id: u64) -> Self {
        Self {
            particles,
            rng: SmallRng::from_os_rng(),
            next_id: first_id,
        }
    }

    /// Drop particles whose animation has finished.
    fn sweep(&mut self) {
        let now = Instant::now();
        if let Ok(mut particles) = self.particles.try_write() {
            particles.retain(|p| p.alive_at(now));
        }
    }
}

impl BurstRenderer for DomBurstRenderer {
    fn fire(&mut self, spec: &BurstSpec) -> Result<(), CelebrationError> {
        let now = Instant::now();
        let launched = launch_particles(spec, &mut self.rng, self.next_id, now);
        self.next_id += launched.len() as u64;

        let mut particles = self
            .particles
            .try_write()
            .map_err(|_| CelebrationError::SurfaceUnavailable)?;
        particles.retain(|p| p.alive_at(now));
        particles.extend(launched);
        Ok(())
    }
}

/// Full-window overlay that plays a celebration each time one is requested.
///
/// Celebrations may overlap; each runs in its own task scoped to this
/// layer, so closing the window stops them.
#[component]
pub fn ConfettiLayer() -> Element {
    let celebrations = use_celebrations();
    let particles = use_signal(Vec::<ConfettiParticle>::new);

    use_effect(move || {
        let Celebrations(count) = celebrations();
        if count == 0 {
            return;
        }
        spawn(async move {
            // Separate id ranges keep keys unique across overlapping runs
            let mut renderer = DomBurstRenderer::new(particles, u64::from(count) << 32);
            let report = play(CelebrationSchedule::default(), &mut renderer).await;
            tracing::debug!(?report, "Confetti run complete");

            tokio::time::sleep(PARTICLE_LIFETIME).await;
            renderer.sweep();
        });
    });

    rsx! {
        div { class: "confetti-layer", "aria-hidden": "true",
            for particle in particles.read().iter() {
                {
                    let style = particle.style();
                    rsx! {
                        div { key: "{particle.id}", class: "confetti", style: "{style}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use valentine_core::{BurstOrigin, CONFETTI_PALETTE};

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(14)
    }

    #[test]
    fn burst_launches_requested_count() {
        let spec = BurstSpec::from_side(BurstOrigin::Left);
        let particles = launch_particles(&spec, &mut rng(), 10, Instant::now());
        assert_eq!(particles.len(), 3);
        let ids: Vec<_> = particles.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![10, 11, 12]);
        assert!(particles.iter().all(|p| CONFETTI_PALETTE.contains(&p.color)));
    }

    #[test]
    fn sides_fly_towards_the_middle_and_up() {
        let now = Instant::now();
        let mut rng = rng();
        for _ in 0..20 {
            for p in launch_particles(&BurstSpec::from_side(BurstOrigin::Left), &mut rng, 0, now) {
                assert!(p.dx > 0.0 && p.dy < 0.0);
                assert_eq!(p.origin_x, 0.0);
            }
            for p in launch_particles(&BurstSpec::from_side(BurstOrigin::Right), &mut rng, 0, now) {
                assert!(p.dx < 0.0 && p.dy < 0.0);
                assert_eq!(p.origin_x, 1.0);
            }
        }
    }

    #[test]
    fn empty_palette_uses_fallback() {
        let spec = BurstSpec {
            palette: &[],
            ..BurstSpec::from_side(BurstOrigin::Left)
        };
        let particles = launch_particles(&spec, &mut rng(), 0, Instant::now());
        assert!(particles.iter().all(|p| p.color == FALLBACK_COLOR));
    }

    #[test]
    fn particles_expire() {
        let born = Instant::now();
        let spec = BurstSpec::from_side(BurstOrigin::Right);
        let p = launch_particles(&spec, &mut rng(), 0, born).remove(0);
        assert!(p.alive_at(born));
        assert!(!p.alive_at(born + PARTICLE_LIFETIME));
        assert!(p.style().starts_with("left: 100.0%;"));
    }
}
