//! Confetti celebration scheduler.
//!
//! The celebration is two mirrored bursts (one from each side of the
//! screen) fired every frame for three seconds. [`CelebrationSchedule`]
//! describes that as a finite list of [`Frame`]s; [`play`] walks the list
//! in real time and hands each burst to a [`BurstRenderer`].
//!
//! Rendering is best-effort. A renderer that fails is logged and skipped,
//! and nothing here can touch the flow state.

use std::time::Duration;

use tokio::time::Instant;

use crate::error::CelebrationError;

/// Colors handed to the renderer with every burst.
pub const CONFETTI_PALETTE: [&str; 7] = [
    "#FF69B4", "#FFB6C1", "#FF1493", "#FFC0CB", "#FFE4E1", "#FFFFFF", "#FFD700",
];

/// Which screen edge a burst is emitted from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BurstOrigin {
    Left,
    Right,
}

impl BurstOrigin {
    /// Horizontal origin as a fraction of the viewport width
    pub fn x(self) -> f64 {
        match self {
            BurstOrigin::Left => 0.0,
            BurstOrigin::Right => 1.0,
        }
    }
}

/// Declarative description of one particle burst.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BurstSpec {
    pub particle_count: u32,
    /// Launch angle in degrees, 90 pointing straight up
    pub angle: f64,
    /// Cone width in degrees around `angle`
    pub spread: f64,
    pub origin: BurstOrigin,
    pub palette: &'static [&'static str],
}

impl BurstSpec {
    pub fn from_side(origin: BurstOrigin) -> Self {
        let angle = match origin {
            BurstOrigin::Left => 60.0,
            BurstOrigin::Right => 120.0,
        };
        Self {
            particle_count: 3,
            angle,
            spread: 55.0,
            origin,
            palette: &CONFETTI_PALETTE,
        }
    }
}

/// Bursts to fire at one point in the celebration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    /// Time since the celebration started
    pub offset: Duration,
    pub bursts: [BurstSpec; 2],
}

/// Timing of a celebration.
///
/// `Copy`, so restarting is just calling [`frames`](Self::frames) again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CelebrationSchedule {
    pub duration: Duration,
    pub cadence: Duration,
}

impl Default for CelebrationSchedule {
    fn default() -> Self {
        Self {
            duration: Self::DURATION,
            cadence: Self::FRAME,
        }
    }
}

impl CelebrationSchedule {
    pub const DURATION: Duration = Duration::from_secs(3);
    /// Roughly one animation frame at 60Hz
    pub const FRAME: Duration = Duration::from_millis(16);

    pub fn new(duration: Duration, cadence: Duration) -> Self {
        Self { duration, cadence }
    }

    /// Number of frames the schedule produces.
    pub fn frame_count(&self) -> usize {
        if self.cadence.is_zero() {
            return usize::from(!self.duration.is_zero());
        }
        let frames = self.duration.as_nanos().div_ceil(self.cadence.as_nanos());
        usize::try_from(frames).unwrap_or(usize::MAX)
    }

    /// Lazy iterator over every frame, earliest first.
    pub fn frames(&self) -> Frames {
        Frames {
            schedule: *self,
            next: 0,
            total: self.frame_count(),
        }
    }
}

/// Iterator returned by [`CelebrationSchedule::frames`].
#[derive(Clone, Debug)]
pub struct Frames {
    schedule: CelebrationSchedule,
    next: usize,
    total: usize,
}

impl Iterator for Frames {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.next >= self.total {
            return None;
        }
        let index = u32::try_from(self.next).ok()?;
        self.next += 1;
        Some(Frame {
            offset: self.schedule.cadence * index,
            bursts: [
                BurstSpec::from_side(BurstOrigin::Left),
                BurstSpec::from_side(BurstOrigin::Right),
            ],
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.next;
        (remaining, Some(remaining))
    }
}

/// Anything that can put a burst on screen.
///
/// `fire` is called from the UI's event loop and must not block.
pub trait BurstRenderer {
    fn fire(&mut self, spec: &BurstSpec) -> Result<(), CelebrationError>;
}

/// Summary of a finished celebration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayReport {
    pub frames: usize,
    pub bursts_fired: usize,
    pub bursts_failed: usize,
}

/// Play `schedule` against `renderer` in real time.
///
/// Dropping the future stops the celebration, which is what happens when
/// the owning view goes away.
pub async fn play<R: BurstRenderer + ?Sized>(
    schedule: CelebrationSchedule,
    renderer: &mut R,
) -> PlayReport {
    let started = Instant::now();
    let mut report = PlayReport::default();

    tracing::info!(
        frames = schedule.frame_count(),
        duration_ms = schedule.duration.as_millis() as u64,
        "Celebration started"
    );

    for frame in schedule.frames() {
        let Some(deadline) = started.checked_add(frame.offset) else {
            tracing::debug!(offset = ?frame.offset, "Celebration frame beyond the clock, stopping");
            break;
        };
        tokio::time::sleep_until(deadline).await;
        report.frames += 1;

        for burst in &frame.bursts {
            match renderer.fire(burst) {
                Ok(()) => report.bursts_fired += 1,
                Err(e) => {
                    if report.bursts_failed == 0 {
                        tracing::warn!("Confetti burst failed: {}", e);
                    } else {
                        tracing::trace!("Confetti burst failed: {}", e);
                    }
                    report.bursts_failed += 1;
                }
            }
        }
    }

    tracing::info!(
        fired = report.bursts_fired,
        failed = report.bursts_failed,
        "Celebration finished"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        fired: Vec<(Duration, BurstOrigin)>,
        started: Option<Instant>,
    }

    impl BurstRenderer for Recorder {
        fn fire(&mut self, spec: &BurstSpec) -> Result<(), CelebrationError> {
            let started = *self.started.get_or_insert_with(Instant::now);
            self.fired.push((started.elapsed(), spec.origin));
            Ok(())
        }
    }

    struct Headless;

    impl BurstRenderer for Headless {
        fn fire(&mut self, _spec: &BurstSpec) -> Result<(), CelebrationError> {
            Err(CelebrationError::SurfaceUnavailable)
        }
    }

    #[test]
    fn default_schedule_covers_three_seconds() {
        let schedule = CelebrationSchedule::default();
        let frames: Vec<_> = schedule.frames().collect();
        assert_eq!(frames.len(), 188);
        assert_eq!(frames[0].offset, Duration::ZERO);
        assert!(frames.last().unwrap().offset < Duration::from_secs(3));
    }

    #[test]
    fn frames_are_mirrored() {
        let frame = CelebrationSchedule::default().frames().next().unwrap();
        let [left, right] = frame.bursts;
        assert_eq!(left.origin, BurstOrigin::Left);
        assert_eq!(right.origin, BurstOrigin::Right);
        assert_eq!(left.angle + right.angle, 180.0);
        assert_eq!(left.particle_count, 3);
        assert_eq!(left.spread, 55.0);
        assert_eq!(left.palette.len(), 7);
    }

    #[test]
    fn frames_restart_from_the_beginning() {
        let schedule = CelebrationSchedule::new(Duration::from_millis(100), Duration::from_millis(25));
        let first: Vec<_> = schedule.frames().map(|f| f.offset).collect();
        let second: Vec<_> = schedule.frames().map(|f| f.offset).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 4);
    }

    #[test]
    fn zero_cadence_fires_once() {
        let schedule = CelebrationSchedule::new(Duration::from_secs(1), Duration::ZERO);
        assert_eq!(schedule.frames().count(), 1);
        let empty = CelebrationSchedule::new(Duration::ZERO, Duration::ZERO);
        assert_eq!(empty.frames().count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn play_fires_both_sides_every_frame() {
        let mut recorder = Recorder::default();
        let report = play(CelebrationSchedule::default(), &mut recorder).await;

        assert_eq!(report.frames, 188);
        assert_eq!(report.bursts_fired, 376);
        assert_eq!(report.bursts_failed, 0);

        let (last_at, _) = recorder.fired.last().copied().unwrap();
        assert!(last_at < Duration::from_secs(3));
        assert!(last_at >= Duration::from_millis(2992));
    }

    #[tokio::test(start_paused = true)]
    async fn huge_schedule_stops_instead_of_overflowing() {
        let schedule = CelebrationSchedule::new(Duration::MAX, Duration::MAX / 2);
        let mut recorder = Recorder::default();
        let report = play(schedule, &mut recorder).await;

        assert_eq!(report.frames, 1);
        assert_eq!(report.bursts_fired, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn failing_renderer_still_finishes() {
        let report = play(CelebrationSchedule::default(), &mut Headless).await;
        assert_eq!(report.frames, 188);
        assert_eq!(report.bursts_fired, 0);
        assert_eq!(report.bursts_failed, 376);
    }
}
