use std::time::Duration;

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameTime {
    /// Time elapsed since the previous frame, in seconds.
    pub dt: f32,

    /// Sum of all clamped deltas produced by this clock, in seconds.
    pub elapsed: f64,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots from host-supplied deltas.
///
/// Delta time is clamped to avoid pathological values when the host is paused
/// by a debugger, minimized, or stalls. Fade animations advance only through
/// these deltas, so a stalled frame never skips a fade.
#[derive(Debug, Clone)]
pub struct FrameClock {
    elapsed: f64,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    /// Creates a new clock with default clamps (0.1 ms ..= 250 ms).
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            elapsed: 0.0,
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    #[inline]
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Advances by a caller-provided delta.
    pub fn step(&mut self, dt: Duration) -> FrameTime {
        let dt = dt.clamp(self.dt_min, self.dt_max);
        self.elapsed += dt.as_secs_f64();

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            elapsed: self.elapsed,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_is_deterministic() {
        let mut clock = FrameClock::new();
        let a = clock.step(Duration::from_millis(16));
        let b = clock.step(Duration::from_millis(16));
        assert_eq!(a.frame_index, 0);
        assert_eq!(b.frame_index, 1);
        assert!((a.dt - 0.016).abs() < 1e-6);
        assert!((b.elapsed - 0.032).abs() < 1e-9);
    }

    #[test]
    fn deltas_are_clamped() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.step(Duration::from_secs(5)).dt, 0.25);
        assert!((clock.step(Duration::ZERO).dt - 0.0001).abs() < 1e-7);
    }
}
