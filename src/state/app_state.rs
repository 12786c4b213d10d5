// ============================================================================
// APP STATE - global application state
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::state::{CheckInOutState, SearchState, TrailState};

/// DOM update kind requested after a state change
#[derive(Clone, Debug)]
pub enum UpdateType {
    /// Patch specific elements in place
    Incremental(IncrementalUpdate),
    /// Full re-render (trail change, fetch completion)
    FullRender,
}

/// Specific incremental update target
#[derive(Clone, Debug)]
pub enum IncrementalUpdate {
    /// Check-in/check-out boxes and the status line
    CheckInOut,
    /// Search results block (list + pager)
    SearchResults,
}

/// Global application state
#[derive(Clone)]
pub struct AppState {
    pub trail_id: Rc<RefCell<i32>>,
    pub trail: TrailState,
    pub check_in_out: CheckInOutState,
    pub search: SearchState,

    // Reactivity: callbacks notified on state changes
    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    pub fn new(trail_id: i32) -> Self {
        Self {
            trail_id: Rc::new(RefCell::new(trail_id)),
            trail: TrailState::new(),
            check_in_out: CheckInOutState::new(),
            search: SearchState::new(),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn get_trail_id(&self) -> i32 {
        *self.trail_id.borrow()
    }

    /// Subscribe to state changes that require a re-render.
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notify all subscribers of a change.
    pub fn notify_subscribers(&self) {
        for callback in self.change_subscribers.borrow().iter() {
            callback();
        }
    }
}
