use crate::error::{BriefMeError, Result};

/// Limits applied when the dashboard panels are collapsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Schedule rows shown before "show more today". Default: 3.
    pub today_preview_limit: usize,

    /// Follow-ups shown before "show all follow-ups". Default: 3.
    pub follow_up_preview_limit: usize,

    /// Upper bound on rendered text output, in characters. Default: 8000.
    pub max_chars: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            today_preview_limit: 3,
            follow_up_preview_limit: 3,
            max_chars: 8000,
        }
    }
}

impl DashboardConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_today_preview_limit(mut self, limit: usize) -> Self {
        self.today_preview_limit = limit;
        self
    }

    pub fn with_follow_up_preview_limit(mut self, limit: usize) -> Self {
        self.follow_up_preview_limit = limit;
        self
    }

    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.today_preview_limit == 0 {
            return Err(BriefMeError::Validation(
                "today_preview_limit must be > 0".into(),
            ));
        }

        if self.follow_up_preview_limit == 0 {
            return Err(BriefMeError::Validation(
                "follow_up_preview_limit must be > 0".into(),
            ));
        }

        if self.max_chars == 0 {
            return Err(BriefMeError::Validation("max_chars must be > 0".into()));
        }

        Ok(())
    }
}
