// ============================================================================
// TRAIL STATE - currently displayed trail detail bundle
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{ExpertReview, RecentHiker, TrailDetail};

#[derive(Clone)]
pub struct TrailState {
    pub trail: Rc<RefCell<Option<TrailDetail>>>,
    pub expert_reviews: Rc<RefCell<Vec<ExpertReview>>>,
    pub recent_hikers: Rc<RefCell<Vec<RecentHiker>>>,
    pub loading: Rc<RefCell<bool>>,
    pub error: Rc<RefCell<Option<String>>>,
}

impl TrailState {
    pub fn new() -> Self {
        Self {
            trail: Rc::new(RefCell::new(None)),
            expert_reviews: Rc::new(RefCell::new(Vec::new())),
            recent_hikers: Rc::new(RefCell::new(Vec::new())),
            loading: Rc::new(RefCell::new(true)),
            error: Rc::new(RefCell::new(None)),
        }
    }

    pub fn set_trail(&self, trail: Option<TrailDetail>) {
        *self.trail.borrow_mut() = trail;
    }

    pub fn get_trail(&self) -> Option<TrailDetail> {
        self.trail.borrow().clone()
    }

    pub fn set_reviews(&self, reviews: Vec<ExpertReview>) {
        *self.expert_reviews.borrow_mut() = reviews;
    }

    pub fn get_reviews(&self) -> Vec<ExpertReview> {
        self.expert_reviews.borrow().clone()
    }

    pub fn set_recent_hikers(&self, hikers: Vec<RecentHiker>) {
        *self.recent_hikers.borrow_mut() = hikers;
    }

    pub fn get_recent_hikers(&self) -> Vec<RecentHiker> {
        self.recent_hikers.borrow().clone()
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

impl Default for TrailState {
    fn default() -> Self {
        Self::new()
    }
}
