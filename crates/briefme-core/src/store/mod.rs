use crate::config::DashboardConfig;
use crate::derive::{
    compute_briefs_data, compute_meetings_data, compute_panel_view, BriefsData, MeetingsCache,
    MeetingsData, PanelView,
};
use crate::handlers;
use crate::sample::DashboardSource;
use crate::types::Meeting;
use crate::view::{ViewState, ViewStatePatch};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::cell::{Cell, RefCell};
use std::sync::Arc;

/// Everything a view needs to draw one frame of the dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub generated_at: DateTime<Utc>,
    pub meetings_version: u64,
    pub state: Arc<ViewState>,
    pub briefs: Arc<BriefsData>,
    pub meetings: Arc<MeetingsData>,
    pub panel: PanelView,
}

/// State container for the dashboard home view.
///
/// Owns the consolidated [`ViewState`] and the meeting collection. Writes
/// go through [`update_state`](Self::update_state) or the meeting
/// handlers; reads get immutable `Arc` snapshots, so a reader never sees a
/// half-applied update.
pub struct DashboardStore {
    state: Arc<ViewState>,
    meetings: Arc<Vec<Meeting>>,
    /// Bumped only when the meeting collection actually changes.
    meetings_version: u64,
    briefs: Arc<BriefsData>,
    cache: RefCell<MeetingsCache>,
    recomputations: Cell<u64>,
    config: DashboardConfig,
}

impl DashboardStore {
    pub fn new(source: DashboardSource, config: DashboardConfig) -> Self {
        let briefs = Arc::new(compute_briefs_data(
            &source.briefs,
            &source.upcoming_briefs,
            &source.follow_ups,
        ));
        log::debug!(
            "dashboard store seeded: {} briefs, {} follow-ups, {} meetings",
            briefs.all_briefs.len(),
            briefs.follow_ups.len(),
            source.meetings.len()
        );

        Self {
            state: Arc::new(ViewState::default()),
            meetings: Arc::new(source.meetings),
            meetings_version: 0,
            briefs,
            cache: RefCell::new(MeetingsCache::new()),
            recomputations: Cell::new(0),
            config,
        }
    }

    /// A store seeded from the built-in sample data.
    pub fn sample() -> Self {
        Self::new(DashboardSource::sample(), DashboardConfig::default())
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    // --- State ---

    pub fn state(&self) -> Arc<ViewState> {
        Arc::clone(&self.state)
    }

    /// Shallow-merge `patch` into the view state. Fields the patch does not
    /// name keep their values.
    pub fn update_state(&mut self, patch: ViewStatePatch) {
        if patch.is_empty() {
            return;
        }
        log::debug!("update_state: {:?}", patch.changed_fields());
        self.state = Arc::new(patch.apply_to(&self.state));
    }

    // --- Meetings ---

    pub fn meetings(&self) -> &[Meeting] {
        &self.meetings
    }

    pub fn meetings_version(&self) -> u64 {
        self.meetings_version
    }

    pub fn find_meeting(&self, id: &str) -> Option<&Meeting> {
        self.meetings.iter().find(|m| m.id == id)
    }

    fn replace_meetings(&mut self, meetings: Vec<Meeting>) {
        self.meetings = Arc::new(meetings);
        self.meetings_version += 1;
    }

    /// Flip the proxy flag of one meeting. Returns false (and changes
    /// nothing) when no meeting has that id.
    pub fn toggle_proxy(&mut self, meeting_id: &str) -> bool {
        if !handlers::contains(&self.meetings, meeting_id) {
            log::debug!("toggle_proxy: no meeting {:?}", meeting_id);
            return false;
        }
        let next = handlers::toggle_proxy(&self.meetings, meeting_id);
        self.replace_meetings(next);
        true
    }

    /// Select a meeting for note editing and open the notes drawer.
    pub fn open_notes(&mut self, meeting_id: &str) -> bool {
        let patch = match self.find_meeting(meeting_id) {
            Some(meeting) => handlers::open_notes(meeting),
            None => {
                log::debug!("open_notes: no meeting {:?}", meeting_id);
                return false;
            }
        };
        self.update_state(patch);
        true
    }

    /// Commit the notes buffer to the selected meeting (if any), then close
    /// the drawer and clear the selection and buffer.
    pub fn save_notes(&mut self) {
        let commit = handlers::save_notes(&self.state, &self.meetings);
        match commit.meetings {
            Some(meetings) => self.replace_meetings(meetings),
            None => log::debug!("save_notes: nothing selected, cleanup only"),
        }
        self.update_state(commit.cleanup);
    }

    /// Tick or untick a follow-up.
    pub fn toggle_follow_up(&mut self, follow_up_id: &str) {
        let patch = handlers::toggle_checked(&self.state, follow_up_id);
        self.update_state(patch);
    }

    // --- Derived views ---

    pub fn briefs_data(&self) -> Arc<BriefsData> {
        Arc::clone(&self.briefs)
    }

    /// Meeting views for the current collection, recomputed only after the
    /// collection changed.
    pub fn meetings_data(&self) -> Arc<MeetingsData> {
        if let Some(cached) = self.cache.borrow().get(self.meetings_version) {
            return cached;
        }

        let data = Arc::new(compute_meetings_data(&self.meetings));
        self.recomputations.set(self.recomputations.get() + 1);
        log::debug!("meetings data recomputed at version {}", self.meetings_version);
        self.cache
            .borrow_mut()
            .put(Arc::clone(&data), self.meetings_version);
        data
    }

    /// How many times the meeting views have been computed.
    pub fn recomputations(&self) -> u64 {
        self.recomputations.get()
    }

    pub fn panel_view(&self) -> PanelView {
        compute_panel_view(
            &self.state,
            &self.briefs,
            &self.meetings_data(),
            &self.config,
        )
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        let meetings = self.meetings_data();
        let panel = compute_panel_view(&self.state, &self.briefs, &meetings, &self.config);
        DashboardSnapshot {
            generated_at: Utc::now(),
            meetings_version: self.meetings_version,
            state: self.state(),
            briefs: self.briefs_data(),
            meetings,
            panel,
        }
    }
}

impl Default for DashboardStore {
    fn default() -> Self {
        Self::sample()
    }
}
