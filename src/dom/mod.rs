// ============================================================================
// DOM MODULE - web-sys manipulation helpers
// ============================================================================

pub mod builder;
pub mod element;
pub mod events;
pub mod incremental;

pub use builder::*;
pub use element::*;
pub use events::*;
pub use incremental::*;
