//! Frame-loop clock for simulation playback

/// Upper bound on the playback rate (real seconds of simulation per wall second).
pub const MAX_RATE: f64 = 1e6;

/// Cumulative elapsed time handed to every tick. Never runs backwards.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationClock {
    elapsed: f64,
    /// 1.0 = realtime
    rate: f64,
    paused: bool,
}

impl SimulationClock {
    pub fn new() -> Self {
        Self {
            elapsed: 0.0,
            rate: 1.0,
            paused: false,
        }
    }

    /// Starts at `elapsed` seconds. Negative values start at zero.
    pub fn starting_at(elapsed: f64) -> Self {
        Self {
            elapsed: elapsed.max(0.0),
            ..Self::new()
        }
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn set_rate(&mut self, rate: f64) {
        if rate.is_finite() {
            self.rate = rate.clamp(0.0, MAX_RATE);
        }
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Advances by a wall-clock frame delta and returns the new elapsed time.
    /// Negative or non-finite deltas are ignored.
    pub fn advance(&mut self, frame_delta: f64) -> f64 {
        if !self.paused && frame_delta.is_finite() && frame_delta > 0.0 {
            self.elapsed += frame_delta * self.rate;
        }
        self.elapsed
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_at_rate() {
        let mut clock = SimulationClock::new();
        clock.advance(0.5);
        clock.set_rate(4.0);
        assert_eq!(clock.advance(0.25), 1.5);
    }

    #[test]
    fn never_runs_backwards() {
        let mut clock = SimulationClock::starting_at(10.0);
        clock.advance(-3.0);
        clock.advance(f64::NAN);
        clock.set_rate(-2.0);
        clock.advance(1.0);
        assert_eq!(clock.elapsed(), 10.0);
        assert_eq!(SimulationClock::starting_at(-5.0).elapsed(), 0.0);
    }

    #[test]
    fn pause_freezes_time() {
        let mut clock = SimulationClock::new();
        clock.toggle_pause();
        assert!(clock.is_paused());
        assert_eq!(clock.advance(1.0), 0.0);
        clock.resume();
        assert_eq!(clock.advance(1.0), 1.0);
    }
}
