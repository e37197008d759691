//! Leptos Ticker Utilities
//!
//! A single repeating interval owned by a component, plus one-shot delays.
//! Built on gloo-timers; the interval is cleared when the owner is disposed.

use gloo_timers::callback::{Interval, Timeout};
use leptos::prelude::*;

/// Handle to at most one running interval
#[derive(Clone, Copy)]
pub struct Ticker {
    handle: StoredValue<Option<Interval>, LocalStorage>,
}

/// Create a ticker tied to the current reactive owner
pub fn use_ticker() -> Ticker {
    let ticker = Ticker {
        handle: StoredValue::new_local(None),
    };
    on_cleanup(move || ticker.stop());
    ticker
}

impl Ticker {
    /// Start calling `on_tick` every `period_ms`.
    ///
    /// Returns `false` without starting anything if an interval is already active.
    pub fn start(&self, period_ms: u32, on_tick: impl FnMut() + 'static) -> bool {
        if self.is_active() {
            return false;
        }
        let interval = Interval::new(period_ms, on_tick);
        self.handle.try_update_value(|slot| *slot = Some(interval)).is_some()
    }

    /// Clear the interval. Safe to call from inside the tick callback.
    pub fn stop(&self) {
        let Some(interval) = self.handle.try_update_value(|slot| slot.take()).flatten() else {
            return;
        };
        // The JS interval is cleared now; the Rust closure may still be on the
        // stack, so it is released on the next turn of the event loop.
        let callback = interval.cancel();
        Timeout::new(0, move || drop(callback)).forget();
    }

    pub fn is_active(&self) -> bool {
        self.handle.try_with_value(|slot| slot.is_some()).unwrap_or(false)
    }
}

/// Run `f` once after `ms` milliseconds
pub fn delay(ms: u32, f: impl FnOnce() + 'static) {
    Timeout::new(ms, f).forget();
}
