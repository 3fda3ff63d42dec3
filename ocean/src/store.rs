//! Where `AppState` lives.
//!
//! The web UI keeps it in a Dioxus signal; tests and native tools use
//! [`LocalStore`]. Reads and writes are short, synchronous critical sections
//! and are never held across an await.

use std::cell::RefCell;
use std::rc::Rc;

use crate::state::{AppState, StateEvent};

pub trait StateStore {
    fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> R;
    fn dispatch(&self, event: StateEvent);

    fn snapshot(&self) -> AppState {
        self.read(AppState::clone)
    }
}

#[derive(Debug, Clone, Default)]
pub struct LocalStore {
    state: Rc<RefCell<AppState>>,
}

impl LocalStore {
    pub fn new(state: AppState) -> Self {
        Self {
            state: Rc::new(RefCell::new(state)),
        }
    }
}

impl StateStore for LocalStore {
    fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.state.borrow())
    }

    fn dispatch(&self, event: StateEvent) {
        self.state.borrow_mut().apply(event);
    }
}
