//! Count-up animation engine for the landing-page stat counters.
//!
//! The animation is an explicit state machine rather than a closure chain:
//! the platform layer feeds it frame timestamps and schedules the next frame
//! only while the machine asks for one. Teardown goes through
//! [`CounterHandle::release`], after which any late callback becomes a no-op
//! instead of mutating state owned by an unmounted view.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Default animation length when the caller does not override it.
pub const DEFAULT_DURATION_MS: u64 = 2000;

/// Intersection ratio that counts as "scrolled into view".
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

/// Lifecycle of a single counter. `Hidden` is initial, `Settled` terminal;
/// nothing transitions backwards, so re-entering the viewport after the
/// first trigger can never restart the run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Hidden,
    Animating { started_at: Option<f64> },
    Settled,
}

/// What the scheduler should do after a frame was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStep {
    /// Keep going: schedule one more frame callback.
    Continue,
    /// Terminal value reached; do not schedule again.
    Settled,
    /// The frame was ignored (not animating, or the handle was released).
    Idle,
}

#[derive(Debug, Clone)]
pub struct Counter {
    target: u64,
    duration_ms: f64,
    current: u64,
    phase: Phase,
}

impl Counter {
    pub fn new(target: u64, duration_ms: u64) -> Self {
        Self {
            target,
            duration_ms: duration_ms.max(1) as f64,
            current: 0,
            phase: Phase::Hidden,
        }
    }

    /// First intersection callback. Returns `true` only on the
    /// `Hidden -> Animating` transition; repeated visibility reports are
    /// ignored, as is visibility after the run settled.
    pub fn mark_visible(&mut self) -> bool {
        match self.phase {
            Phase::Hidden => {
                self.phase = Phase::Animating { started_at: None };
                true
            }
            _ => false,
        }
    }

    /// Apply one frame timestamp (milliseconds, monotonic frame clock).
    /// The first frame after the visibility trigger records the start time.
    pub fn frame(&mut self, now_ms: f64) -> FrameStep {
        let started_at = match self.phase {
            Phase::Animating { started_at } => started_at.unwrap_or(now_ms),
            _ => return FrameStep::Idle,
        };

        if self.target == 0 {
            // Nothing to interpolate; settle on the first frame.
            self.phase = Phase::Settled;
            return FrameStep::Settled;
        }

        let ratio = ((now_ms - started_at) / self.duration_ms).clamp(0.0, 1.0);
        let next = (ratio * self.target as f64).floor() as u64;
        if next > self.current {
            self.current = next;
        }

        if ratio >= 1.0 {
            self.current = self.target;
            self.phase = Phase::Settled;
            FrameStep::Settled
        } else {
            self.phase = Phase::Animating {
                started_at: Some(started_at),
            };
            FrameStep::Continue
        }
    }

    pub fn current(&self) -> u64 {
        self.current
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_settled(&self) -> bool {
        matches!(self.phase, Phase::Settled)
    }
}

/// Clonable handle shared between the component, the intersection callback,
/// and the frame callback. Releasing it turns every later entry point into a
/// no-op, which is what makes a late `requestAnimationFrame` delivery after
/// unmount safe.
#[derive(Debug, Clone)]
pub struct CounterHandle {
    state: Rc<RefCell<Counter>>,
    alive: Rc<Cell<bool>>,
}

impl CounterHandle {
    pub fn new(target: u64, duration_ms: u64) -> Self {
        Self {
            state: Rc::new(RefCell::new(Counter::new(target, duration_ms))),
            alive: Rc::new(Cell::new(true)),
        }
    }

    pub fn is_released(&self) -> bool {
        !self.alive.get()
    }

    /// Detach the handle from its view. Idempotent.
    pub fn release(&self) {
        self.alive.set(false);
    }

    pub fn mark_visible(&self) -> bool {
        if self.is_released() {
            return false;
        }
        self.state.borrow_mut().mark_visible()
    }

    pub fn frame(&self, now_ms: f64) -> FrameStep {
        if self.is_released() {
            return FrameStep::Idle;
        }
        self.state.borrow_mut().frame(now_ms)
    }

    pub fn current(&self) -> u64 {
        self.state.borrow().current()
    }

    pub fn is_settled(&self) -> bool {
        self.state.borrow().is_settled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_settled(counter: &mut Counter, start: f64, step: f64) -> Vec<u64> {
        let mut seen = Vec::new();
        let mut now = start;
        loop {
            let outcome = counter.frame(now);
            seen.push(counter.current());
            match outcome {
                FrameStep::Continue => now += step,
                FrameStep::Settled => break,
                FrameStep::Idle => panic!("animating counter reported Idle"),
            }
        }
        seen
    }

    #[test]
    fn hidden_counter_ignores_frames() {
        let mut counter = Counter::new(500, 2000);
        assert_eq!(counter.frame(16.0), FrameStep::Idle);
        assert_eq!(counter.current(), 0);
    }

    #[test]
    fn visibility_trigger_is_idempotent() {
        let mut counter = Counter::new(500, 2000);
        assert!(counter.mark_visible());
        assert!(!counter.mark_visible());

        counter.frame(0.0);
        let mid = counter.frame(700.0);
        assert_eq!(mid, FrameStep::Continue);
        let before = counter.current();

        // A stale intersection report mid-run must not reset the clock.
        assert!(!counter.mark_visible());
        assert_eq!(counter.frame(800.0), FrameStep::Continue);
        assert!(counter.current() >= before);
    }

    #[test]
    fn halfway_point_shows_half_the_target() {
        let mut counter = Counter::new(500, 2000);
        counter.mark_visible();
        assert_eq!(counter.frame(10_000.0), FrameStep::Continue);
        assert_eq!(counter.frame(11_000.0), FrameStep::Continue);
        assert_eq!(counter.current(), 250);
        assert_eq!(counter.frame(12_000.0), FrameStep::Settled);
        assert_eq!(counter.current(), 500);
    }

    #[test]
    fn settles_exactly_at_target() {
        let mut counter = Counter::new(777, 2000);
        counter.mark_visible();
        counter.frame(0.0);
        // Overshooting the duration still clamps to the target, no more.
        assert_eq!(counter.frame(5_000.0), FrameStep::Settled);
        assert_eq!(counter.current(), 777);
        assert!(counter.is_settled());
    }

    #[test]
    fn values_never_decrease() {
        let mut counter = Counter::new(1234, 2000);
        counter.mark_visible();
        let seen = run_to_settled(&mut counter, 0.0, 16.7);
        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(*seen.last().unwrap(), 1234);
    }

    #[test]
    fn settled_counter_ignores_further_frames() {
        let mut counter = Counter::new(10, 100);
        counter.mark_visible();
        counter.frame(0.0);
        assert_eq!(counter.frame(100.0), FrameStep::Settled);
        assert_eq!(counter.frame(200.0), FrameStep::Idle);
        assert_eq!(counter.current(), 10);
    }

    #[test]
    fn zero_target_settles_immediately() {
        let mut counter = Counter::new(0, 2000);
        counter.mark_visible();
        assert_eq!(counter.frame(42.0), FrameStep::Settled);
        assert_eq!(counter.current(), 0);
    }

    #[test]
    fn released_handle_drops_late_frames() {
        let handle = CounterHandle::new(500, 2000);
        assert!(handle.mark_visible());
        handle.frame(0.0);
        handle.frame(500.0);
        let before = handle.current();

        // Unmount mid-animation, then a stale frame callback fires anyway.
        handle.release();
        assert_eq!(handle.frame(600.0), FrameStep::Idle);
        assert_eq!(handle.current(), before);
        assert!(!handle.mark_visible());
    }

    #[test]
    fn handle_release_is_idempotent() {
        let handle = CounterHandle::new(5, 100);
        handle.release();
        handle.release();
        assert!(handle.is_released());
        assert_eq!(handle.frame(0.0), FrameStep::Idle);
    }

    #[test]
    fn clones_share_release_state() {
        let handle = CounterHandle::new(100, 1000);
        let for_callback = handle.clone();
        handle.release();
        assert!(for_callback.is_released());
        assert_eq!(for_callback.frame(0.0), FrameStep::Idle);
    }
}
