//! Scrolling primitives: the smooth-scroll animation and the scoped
//! background scroll lock used while the mobile menu is open.

use std::rc::Rc;

/// Something whose scrolling can be suspended, e.g. the document body.
pub trait ScrollSurface {
    fn set_scroll_locked(&self, locked: bool);
}

/// Surface that ignores lock requests (host builds, tests that don't care).
pub struct NoopSurface;

impl ScrollSurface for NoopSurface {
    fn set_scroll_locked(&self, _locked: bool) {}
}

/// Holds the scroll lock on a surface for as long as it lives.
///
/// The lock is released in `Drop`, so closing the menu, replacing the
/// state, or tearing down the whole page all restore scrolling.
pub struct ScrollLock {
    surface: Rc<dyn ScrollSurface>,
}

impl ScrollLock {
    pub fn acquire(surface: Rc<dyn ScrollSurface>) -> Self {
        surface.set_scroll_locked(true);
        Self { surface }
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        self.surface.set_scroll_locked(false);
    }
}

/// Time constant of the exponential approach, in milliseconds.
const SMOOTH_SCROLL_TAU_MS: f64 = 90.0;
/// Distance (px) under which the animation snaps to the target.
const SNAP_DISTANCE_PX: f64 = 1.0;

/// Animates the scroll offset toward a target over several frames.
#[derive(Debug, Default)]
pub struct SmoothScroll {
    target: Option<f64>,
}

impl SmoothScroll {
    pub fn new() -> Self {
        Self { target: None }
    }

    pub fn start(&mut self, target: f64) {
        self.target = Some(target.max(0.0));
    }

    pub fn cancel(&mut self) {
        self.target = None;
    }

    pub fn is_active(&self) -> bool {
        self.target.is_some()
    }

    /// Advance by `delta_ms` from `current`. Returns the next offset while
    /// animating, `None` when idle. The final step lands exactly on the target.
    pub fn step(&mut self, current: f64, delta_ms: f64) -> Option<f64> {
        let target = self.target?;
        let remaining = target - current;
        let t = 1.0 - (-delta_ms.max(0.0) / SMOOTH_SCROLL_TAU_MS).exp();
        let next = current + remaining * t;

        if (target - next).abs() < SNAP_DISTANCE_PX {
            self.target = None;
            return Some(target);
        }
        Some(next)
    }
}
