//! Frame timing: a clamped frame clock and the one-shot startup timer.
//!
//! `draw_web()` calls at ~60fps with variable delta. Both types are fed
//! timestamps from `performance.now()` so they stay deterministic and
//! testable without a browser.

/// Turns absolute frame timestamps into per-frame deltas.
pub struct FrameClock {
    /// Timestamp of the last update (ms), None if first frame
    last_timestamp: Option<f64>,
    /// Sum of all deltas handed out so far (ms)
    pub elapsed_ms: f64,
}

/// Longest delta a single frame may report. A backgrounded tab would
/// otherwise produce one huge jump when it comes back.
pub const MAX_FRAME_DELTA_MS: f64 = 500.0;

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_timestamp: None,
            elapsed_ms: 0.0,
        }
    }

    /// Feed the current timestamp; returns milliseconds since the previous
    /// frame, clamped to `0..=MAX_FRAME_DELTA_MS`. The first frame returns 0.
    pub fn update(&mut self, now_ms: f64) -> f64 {
        let delta = match self.last_timestamp {
            Some(prev) => (now_ms - prev).clamp(0.0, MAX_FRAME_DELTA_MS),
            None => 0.0,
        };
        self.last_timestamp = Some(now_ms);
        self.elapsed_ms += delta;
        delta
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum TimerState {
    Pending { deadline_ms: f64 },
    Fired,
    Cancelled,
}

/// A timer that fires exactly once, polled from the frame loop.
///
/// Cancelling is allowed at any time; a cancelled timer never fires.
#[derive(Debug)]
pub struct OneShot {
    state: TimerState,
}

impl OneShot {
    /// Arm a timer that fires `delay_ms` after `now_ms`.
    pub fn start(now_ms: f64, delay_ms: f64) -> Self {
        Self {
            state: TimerState::Pending {
                deadline_ms: now_ms + delay_ms,
            },
        }
    }

    /// Returns true on the first poll at or after the deadline, false otherwise.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.state {
            TimerState::Pending { deadline_ms } if now_ms >= deadline_ms => {
                self.state = TimerState::Fired;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        if let TimerState::Pending { .. } = self.state {
            self.state = TimerState::Cancelled;
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, TimerState::Pending { .. })
    }
}
