pub mod briefs;
pub mod cache;
pub mod meetings;
pub mod panel;

pub use briefs::{compute_briefs_data, BriefsData, RECENT_BRIEFS_LIMIT};
pub use cache::MeetingsCache;
pub use meetings::{
    compute_meetings_data, is_upcoming, MeetingsData, UPCOMING_PREVIEW_LIMIT,
    UPCOMING_THRESHOLD_MINUTES,
};
pub use panel::{compute_panel_view, PanelView};
