pub mod types;
pub mod error;
pub mod clock;
pub mod config;
pub mod view;
pub mod derive;
pub mod handlers;
pub mod sample;
pub mod store;
pub mod render;

pub use error::{BriefMeError, Result};
pub use types::*;
pub use config::DashboardConfig;
pub use view::{FollowUpsFilter, LeftRailTab, OpenSection, ViewState, ViewStatePatch};
pub use derive::{
    BriefsData, MeetingsData, PanelView, RECENT_BRIEFS_LIMIT, UPCOMING_PREVIEW_LIMIT,
    UPCOMING_THRESHOLD_MINUTES,
};
pub use sample::DashboardSource;
pub use store::{DashboardSnapshot, DashboardStore};
pub use render::{CompactRenderer, DashboardRenderer, MarkdownRenderer};
