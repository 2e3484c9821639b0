//! Cancellable debounce timer owned by the calculator controller.

use gloo::timers::callback::Timeout;

/// Coalesces rapid input events into a single delayed action.
///
/// At most one action is pending at a time: scheduling a new one drops the
/// previous `Timeout`, which cancels the underlying browser timer. Dropping
/// the debouncer itself cancels any pending action, so no timer outlives its
/// owner. Actions run on the UI thread and never concurrently with
/// themselves.
#[derive(Default)]
pub struct Debouncer {
    pending: Option<Timeout>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Schedule `action` to run after `delay_ms` of inactivity, cancelling
    /// any previously scheduled action.
    pub fn schedule<F>(&mut self, delay_ms: u32, action: F)
    where
        F: FnOnce() + 'static,
    {
        self.pending = Some(Timeout::new(delay_ms, action));
    }

    /// Drop the pending action, if any. Safe to call when nothing is
    /// scheduled.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

// These exercise real browser timers and run under wasm-bindgen-test.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use gloo::timers::future::TimeoutFuture;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_rapid_schedules_collapse_to_one_firing() {
        let fired = Rc::new(Cell::new(0u32));
        let mut debouncer = Debouncer::new();

        for _ in 0..5 {
            let fired = fired.clone();
            debouncer.schedule(20, move || fired.set(fired.get() + 1));
        }

        TimeoutFuture::new(80).await;
        assert_eq!(fired.get(), 1);
    }

    #[wasm_bindgen_test]
    async fn test_last_scheduled_action_wins() {
        let observed = Rc::new(Cell::new(0u32));
        let mut debouncer = Debouncer::new();

        for value in [1u32, 2, 3] {
            let observed = observed.clone();
            debouncer.schedule(20, move || observed.set(value));
        }

        TimeoutFuture::new(80).await;
        assert_eq!(observed.get(), 3);
    }

    #[wasm_bindgen_test]
    async fn test_cancel_prevents_firing() {
        let fired = Rc::new(Cell::new(0u32));
        let mut debouncer = Debouncer::new();

        {
            let fired = fired.clone();
            debouncer.schedule(20, move || fired.set(fired.get() + 1));
        }
        debouncer.cancel();

        TimeoutFuture::new(80).await;
        assert_eq!(fired.get(), 0);
    }
}
