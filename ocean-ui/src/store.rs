use dioxus::prelude::*;
use ocean::{AppState, StateEvent, StateStore};

/// `AppState` held in a Dioxus signal so every dispatch re-renders readers.
#[derive(Clone, Copy, PartialEq)]
pub struct SignalStore(Signal<AppState>);

impl SignalStore {
    pub fn new(signal: Signal<AppState>) -> Self {
        Self(signal)
    }
}

impl StateStore for SignalStore {
    fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        // peek: controller reads must not subscribe the calling scope
        f(&self.0.peek())
    }

    fn dispatch(&self, event: StateEvent) {
        let mut signal = self.0;
        signal.write().apply(event);
    }
}
