pub mod app_state;
pub mod check_in_out_state;
pub mod search_state;
pub mod trail_state;

pub use app_state::{AppState, IncrementalUpdate, UpdateType};
pub use check_in_out_state::CheckInOutState;
pub use search_state::SearchState;
pub use trail_state::TrailState;
