//! Trailing-edge debounce for search input.
//!
//! Each keystroke arms the gate and receives a ticket. After the delay the
//! action runs only if no newer ticket was issued meanwhile and the gate is
//! still alive. Leaving the page disposes the gate, so a timer that outlives
//! its page never touches the page's signals.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DebounceGate {
    generation: u64,
}

impl DebounceGate {
    /// Invalidate earlier tickets and return a fresh one.
    pub fn arm(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation == ticket
    }
}

/// Arm a gate signal. `None` once the owning page is gone.
pub fn arm(gate: RwSignal<DebounceGate>) -> Option<u64> {
    gate.try_update(DebounceGate::arm)
}

/// Whether `ticket` may still fire: the gate is alive and not re-armed.
pub fn fires(gate: RwSignal<DebounceGate>, ticket: u64) -> bool {
    gate.try_with_untracked(|g| g.is_current(ticket)).unwrap_or(false)
}

/// Run `action` after `delay_ms` unless the gate is re-armed or disposed first.
#[cfg(feature = "csr")]
pub fn debounce<F>(gate: RwSignal<DebounceGate>, delay_ms: u32, action: F)
where
    F: FnOnce() + 'static,
{
    let Some(ticket) = arm(gate) else {
        return;
    };
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(delay_ms).await;
        if fires(gate, ticket) {
            action();
        }
    });
}
