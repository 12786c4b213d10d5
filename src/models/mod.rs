pub mod hike;
pub mod trail;

pub use hike::{CheckInResult, CheckOutResult, HikeRecord, SessionActionState, CHECKED_IN_LABEL};
pub use trail::{ExpertReview, RecentHiker, SuggestedEquipment, TrailDetail, TrailSummary, TrailTag};
