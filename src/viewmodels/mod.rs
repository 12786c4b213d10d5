pub mod check_in_out_viewmodel;
pub mod search_viewmodel;
pub mod trail_viewmodel;

pub use check_in_out_viewmodel::{gate_check_in, gate_check_out, ActionError, CheckInOutViewModel};
pub use search_viewmodel::{
    next_result_idx, page_window, prev_result_idx, SearchViewModel, RESULTS_PER_PAGE,
};
pub use trail_viewmodel::TrailViewModel;
