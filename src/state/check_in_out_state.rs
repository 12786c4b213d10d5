// ============================================================================
// CHECK-IN/OUT STATE - derived action state for the current page view
// ============================================================================
// `actions` is None while the record fetch is loading or after it failed;
// the view renders a generic error instead of guessing permissions.
// `pending` is the in-flight mutation guard: while true, both actions are
// locally no-ops so rapid double-clicks cannot fire overlapping mutations.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::SessionActionState;

#[derive(Clone)]
pub struct CheckInOutState {
    pub actions: Rc<RefCell<Option<SessionActionState>>>,
    pub pending: Rc<RefCell<bool>>,
    pub loading: Rc<RefCell<bool>>,
    pub error: Rc<RefCell<Option<String>>>,
}

impl CheckInOutState {
    pub fn new() -> Self {
        Self {
            actions: Rc::new(RefCell::new(None)),
            pending: Rc::new(RefCell::new(false)),
            loading: Rc::new(RefCell::new(true)),
            error: Rc::new(RefCell::new(None)),
        }
    }

    pub fn set_actions(&self, actions: Option<SessionActionState>) {
        *self.actions.borrow_mut() = actions;
    }

    pub fn get_actions(&self) -> Option<SessionActionState> {
        self.actions.borrow().clone()
    }

    pub fn set_pending(&self, pending: bool) {
        *self.pending.borrow_mut() = pending;
    }

    pub fn get_pending(&self) -> bool {
        *self.pending.borrow()
    }

    pub fn set_loading(&self, loading: bool) {
        *self.loading.borrow_mut() = loading;
    }

    pub fn get_loading(&self) -> bool {
        *self.loading.borrow()
    }

    pub fn set_error(&self, error: Option<String>) {
        *self.error.borrow_mut() = error;
    }

    pub fn get_error(&self) -> Option<String> {
        self.error.borrow().clone()
    }
}

impl Default for CheckInOutState {
    fn default() -> Self {
        Self::new()
    }
}
