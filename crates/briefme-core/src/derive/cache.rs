use super::MeetingsData;
use std::sync::Arc;

pub struct CachedMeetings {
    pub data: Arc<MeetingsData>,
    pub version: u64,
}

/// Single-entry memo for `MeetingsData`, keyed on the meeting collection
/// version. Nothing expires; a version change is the only invalidation.
#[derive(Default)]
pub struct MeetingsCache {
    entry: Option<CachedMeetings>,
}

impl MeetingsCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached views if they were computed from `current_version`.
    pub fn get(&self, current_version: u64) -> Option<Arc<MeetingsData>> {
        self.entry
            .as_ref()
            .filter(|e| e.version == current_version)
            .map(|e| Arc::clone(&e.data))
    }

    pub fn put(&mut self, data: Arc<MeetingsData>, version: u64) {
        self.entry = Some(CachedMeetings { data, version });
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}
