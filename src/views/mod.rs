pub mod app;
pub mod check_in_out;
pub mod search_bar;
pub mod search_results;
pub mod trail_detail;

pub use app::render_app;
pub use check_in_out::render_check_in_out;
pub use search_bar::render_search_bar;
pub use search_results::render_search_results;
pub use trail_detail::{render_detail_grid, render_top_details};
