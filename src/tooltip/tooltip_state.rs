use std::f64::consts::PI;
use std::time::{Duration, Instant};

/// Lifecycle phase of the tooltip
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Absent,
    Visible,
    /// Fading out since `started`, from opacity `from`
    Fading { started: Instant, from: f64 },
}

/// What a call to [`TooltipState::advance`] changed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tick {
    Idle,
    Opacity(f64),
    Removed,
}

/// Tooltip lifecycle plus the pending dismiss timer
#[derive(Debug, Clone)]
pub struct TooltipState {
    phase: Phase,
    opacity: f64,
    dismiss_at: Option<Instant>,
}

impl TooltipState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Absent,
            opacity: 0.0,
            dismiss_at: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn dismiss_at(&self) -> Option<Instant> {
        self.dismiss_at
    }

    pub fn is_present(&self) -> bool {
        self.phase != Phase::Absent
    }

    /// A new tooltip has been shown
    pub fn show(&mut self, opacity: f64) {
        self.phase = Phase::Visible;
        self.opacity = opacity;
        self.dismiss_at = None;
    }

    /// Drop the tooltip synchronously, discarding any timer or fade
    pub fn clear(&mut self) {
        self.phase = Phase::Absent;
        self.opacity = 0.0;
        self.dismiss_at = None;
    }

    /// Returns true if a pending timer was discarded
    pub fn cancel_dismiss(&mut self) -> bool {
        self.dismiss_at.take().is_some()
    }

    /// Arm the dismiss timer, replacing any pending one
    ///
    /// Only a visible tooltip can be dismissed; a fade already in progress
    /// keeps running.
    pub fn schedule_dismiss(&mut self, now: Instant, delay: Duration) -> bool {
        if self.phase != Phase::Visible {
            return false;
        }
        self.dismiss_at = Some(now + delay);
        true
    }

    /// Stop a fade in progress and return to `opacity`
    pub fn restore(&mut self, opacity: f64) {
        if self.phase == Phase::Absent {
            return;
        }
        self.phase = Phase::Visible;
        self.opacity = opacity;
    }

    /// Fire a due timer and move the fade forward to `now`
    pub fn advance(&mut self, now: Instant, fade: Duration) -> Tick {
        if let Some(deadline) = self.dismiss_at {
            if now < deadline {
                return Tick::Idle;
            }
            self.dismiss_at = None;
            if self.phase == Phase::Visible {
                self.phase = Phase::Fading {
                    started: deadline,
                    from: self.opacity,
                };
            }
        }

        let Phase::Fading { started, from } = self.phase else {
            return Tick::Idle;
        };

        let elapsed = now.saturating_duration_since(started);
        if fade.is_zero() || elapsed >= fade {
            self.clear();
            return Tick::Removed;
        }

        let progress = elapsed.as_secs_f64() / fade.as_secs_f64();
        self.opacity = from * (1.0 - swing(progress));
        Tick::Opacity(self.opacity)
    }
}

impl Default for TooltipState {
    fn default() -> Self {
        Self::new()
    }
}

/// jQuery's default easing curve
pub fn swing(progress: f64) -> f64 {
    0.5 - (progress * PI).cos() / 2.0
}

#[cfg(test)]
#[path = "tooltip_state_tests.rs"]
mod tooltip_state_tests;
