//! View State
//!
//! Framework-free state for each roadmap screen plus the async flows that
//! drive it through a `RoadmapApi`. Components keep the state in an
//! `RwSignal`; tests keep it in a `RefCell`.

mod assign;
mod board;
mod columns;

pub use assign::*;
pub use board::*;
pub use columns::*;

use std::cell::RefCell;

use leptos::prelude::*;

/// Somewhere a flow can read and write its view state between awaits
pub trait StateCell<S> {
    fn modify(&self, f: impl FnOnce(&mut S));
    fn with_state<R>(&self, f: impl FnOnce(&S) -> R) -> R;
}

impl<S: Send + Sync + 'static> StateCell<S> for RwSignal<S> {
    fn modify(&self, f: impl FnOnce(&mut S)) {
        self.update(f);
    }

    fn with_state<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        self.with_untracked(f)
    }
}

impl<S> StateCell<S> for RefCell<S> {
    fn modify(&self, f: impl FnOnce(&mut S)) {
        f(&mut *self.borrow_mut());
    }

    fn with_state<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&*self.borrow())
    }
}
