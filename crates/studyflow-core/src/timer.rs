//! Countdown timer
//!
//! Owns its whole-second value and its idle/running lifecycle. The caller
//! provides the clock by calling [`Countdown::tick`] once per second while
//! [`Countdown::is_running`] holds.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    Idle,
    Running,
}

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// Timer is not running; nothing changed
    Ignored,
    /// One second elapsed, this many remain
    Remaining(u32),
    /// Reached zero on this tick; the timer is idle again
    Expired,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    default_minutes: u32,
    preset_minutes: u32,
    remaining: u32,
    phase: TimerPhase,
}

impl Countdown {
    pub fn new(default_minutes: u32) -> Self {
        Self {
            default_minutes,
            preset_minutes: default_minutes,
            remaining: default_minutes.saturating_mul(60),
            phase: TimerPhase::Idle,
        }
    }

    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == TimerPhase::Running
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining
    }

    pub fn preset_minutes(&self) -> u32 {
        self.preset_minutes
    }

    /// Stop and load a new preset.
    pub fn set_preset(&mut self, minutes: u32) {
        self.phase = TimerPhase::Idle;
        self.preset_minutes = minutes;
        self.remaining = minutes.saturating_mul(60);
    }

    /// Start when idle, pause when running. Returns whether it is now running.
    ///
    /// Starting from zero reloads the current preset first.
    pub fn toggle(&mut self) -> bool {
        match self.phase {
            TimerPhase::Running => self.phase = TimerPhase::Idle,
            TimerPhase::Idle => {
                if self.remaining == 0 {
                    self.remaining = self.preset_minutes.saturating_mul(60);
                }
                if self.remaining > 0 {
                    self.phase = TimerPhase::Running;
                }
            }
        }
        self.is_running()
    }

    /// Stop and re-apply the default preset.
    pub fn reset(&mut self) {
        self.set_preset(self.default_minutes);
    }

    pub fn tick(&mut self) -> TickEvent {
        if self.phase != TimerPhase::Running {
            return TickEvent::Ignored;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.phase = TimerPhase::Idle;
            return TickEvent::Expired;
        }
        TickEvent::Remaining(self.remaining)
    }

    /// `MM:SS`
    pub fn display(&self) -> String {
        format!("{:02}:{:02}", self.remaining / 60, self.remaining % 60)
    }

    /// Fraction of the preset already elapsed, 0.0..=1.0
    pub fn elapsed_fraction(&self) -> f64 {
        let total = self.preset_minutes.saturating_mul(60);
        if total == 0 {
            return 0.0;
        }
        1.0 - f64::from(self.remaining) / f64::from(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_session_expires_once() {
        let mut timer = Countdown::new(25);
        timer.set_preset(25);
        assert!(timer.toggle());

        let mut expired = 0;
        for _ in 0..1500 {
            if timer.tick() == TickEvent::Expired {
                expired += 1;
            }
        }
        assert_eq!(expired, 1);
        assert_eq!(timer.remaining_secs(), 0);
        assert_eq!(timer.phase(), TimerPhase::Idle);

        for _ in 0..5 {
            assert_eq!(timer.tick(), TickEvent::Ignored);
        }
        assert_eq!(timer.remaining_secs(), 0);
    }

    #[test]
    fn test_toggle_pauses_and_resumes() {
        let mut timer = Countdown::new(1);
        timer.toggle();
        timer.tick();
        assert!(!timer.toggle());
        assert_eq!(timer.tick(), TickEvent::Ignored);
        assert_eq!(timer.display(), "00:59");
        assert!(timer.toggle());
        assert_eq!(timer.tick(), TickEvent::Remaining(58));
    }

    #[test]
    fn test_set_preset_stops_and_reloads() {
        let mut timer = Countdown::new(25);
        timer.toggle();
        timer.set_preset(45);
        assert!(!timer.is_running());
        assert_eq!(timer.display(), "45:00");
    }

    #[test]
    fn test_reset_restores_default() {
        let mut timer = Countdown::new(25);
        timer.set_preset(15);
        timer.toggle();
        timer.tick();
        timer.reset();
        assert!(!timer.is_running());
        assert_eq!(timer.preset_minutes(), 25);
        assert_eq!(timer.remaining_secs(), 1500);
    }

    #[test]
    fn test_start_after_expiry_reloads_preset() {
        let mut timer = Countdown::new(25);
        timer.set_preset(1);
        timer.toggle();
        for _ in 0..60 {
            timer.tick();
        }
        assert_eq!(timer.remaining_secs(), 0);
        assert!(timer.toggle());
        assert_eq!(timer.remaining_secs(), 60);
    }

    #[test]
    fn test_huge_preset_saturates() {
        let mut timer = Countdown::new(u32::MAX);
        assert_eq!(timer.remaining_secs(), u32::MAX);

        timer.set_preset(80_000_000);
        assert_eq!(timer.remaining_secs(), u32::MAX);
        assert!(timer.toggle());
        assert_eq!(timer.tick(), TickEvent::Remaining(u32::MAX - 1));
        assert!(timer.elapsed_fraction() >= 0.0);
    }

    #[test]
    fn test_zero_preset_never_runs() {
        let mut timer = Countdown::new(25);
        timer.set_preset(0);
        assert!(!timer.toggle());
        assert_eq!(timer.tick(), TickEvent::Ignored);
    }
}
