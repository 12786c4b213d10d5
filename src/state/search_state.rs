// ============================================================================
// SEARCH STATE - trail search results and paging window
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::TrailSummary;

#[derive(Clone)]
pub struct SearchState {
    pub results: Rc<RefCell<Vec<TrailSummary>>>,
    pub result_idx: Rc<RefCell<usize>>,
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            results: Rc::new(RefCell::new(Vec::new())),
            result_idx: Rc::new(RefCell::new(0)),
        }
    }

    pub fn set_results(&self, results: Vec<TrailSummary>) {
        *self.results.borrow_mut() = results;
        *self.result_idx.borrow_mut() = 0;
    }

    pub fn get_results(&self) -> Vec<TrailSummary> {
        self.results.borrow().clone()
    }

    pub fn result_count(&self) -> usize {
        self.results.borrow().len()
    }

    pub fn set_result_idx(&self, idx: usize) {
        *self.result_idx.borrow_mut() = idx;
    }

    pub fn get_result_idx(&self) -> usize {
        *self.result_idx.borrow()
    }

    pub fn clear(&self) {
        self.results.borrow_mut().clear();
        *self.result_idx.borrow_mut() = 0;
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}
