use super::{BriefsData, MeetingsData};
use crate::config::DashboardConfig;
use crate::types::{Brief, FollowUp, Meeting};
use crate::view::{FollowUpsFilter, ViewState};
use serde::Serialize;

/// What the home view's lists actually show for the current view state.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PanelView {
    pub briefs: Vec<Brief>,
    /// Empty unless `show_upcoming_briefs` is set.
    pub upcoming_briefs: Vec<Brief>,
    pub schedule: Vec<Meeting>,
    /// Schedule rows cut by the "today" preview limit.
    pub hidden_schedule: usize,
    pub follow_ups: Vec<FollowUp>,
    /// Follow-ups that passed the filter but were cut by the preview limit.
    pub hidden_follow_ups: usize,
}

pub fn compute_panel_view(
    state: &ViewState,
    briefs: &BriefsData,
    meetings: &MeetingsData,
    config: &DashboardConfig,
) -> PanelView {
    let briefs_shown = if state.show_all_briefs {
        briefs.all_briefs.clone()
    } else {
        briefs.recent_briefs.clone()
    };

    let upcoming_briefs = if state.show_upcoming_briefs {
        briefs.upcoming_briefs.clone()
    } else {
        Vec::new()
    };

    let (schedule, hidden_schedule) = preview(
        &meetings.all_meetings,
        state.show_more_today,
        config.today_preview_limit,
    );

    let filtered: Vec<FollowUp> = briefs
        .follow_ups
        .iter()
        .filter(|f| match state.follow_ups_filter {
            FollowUpsFilter::All => true,
            FollowUpsFilter::Current => !state.checked_follow_ups.contains(&f.id),
        })
        .cloned()
        .collect();
    let (follow_ups, hidden_follow_ups) = preview(
        &filtered,
        state.show_all_follow_ups,
        config.follow_up_preview_limit,
    );

    PanelView {
        briefs: briefs_shown,
        upcoming_briefs,
        schedule,
        hidden_schedule,
        follow_ups,
        hidden_follow_ups,
    }
}

/// Everything when expanded, otherwise the first `limit` items plus the
/// number left out.
fn preview<T: Clone>(items: &[T], expanded: bool, limit: usize) -> (Vec<T>, usize) {
    if expanded || items.len() <= limit {
        (items.to_vec(), 0)
    } else {
        (items[..limit].to_vec(), items.len() - limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::{compute_briefs_data, compute_meetings_data};
    use crate::sample::DashboardSource;

    fn sample_views() -> (BriefsData, MeetingsData) {
        let source = DashboardSource::sample();
        (
            compute_briefs_data(&source.briefs, &source.upcoming_briefs, &source.follow_ups),
            compute_meetings_data(&source.meetings),
        )
    }

    #[test]
    fn test_collapsed_defaults() {
        let (briefs, meetings) = sample_views();
        let view = compute_panel_view(
            &ViewState::default(),
            &briefs,
            &meetings,
            &DashboardConfig::default(),
        );
        assert_eq!(view.briefs, briefs.recent_briefs);
        assert!(view.upcoming_briefs.is_empty());
        assert_eq!(view.schedule.len(), 3);
        assert_eq!(view.hidden_schedule, 2);
        assert_eq!(view.follow_ups.len(), 3);
        assert_eq!(view.hidden_follow_ups, 3);
    }

    #[test]
    fn test_expanded_panels() {
        let (briefs, meetings) = sample_views();
        let state = ViewState {
            show_all_briefs: true,
            show_upcoming_briefs: true,
            show_more_today: true,
            show_all_follow_ups: true,
            ..ViewState::default()
        };
        let view = compute_panel_view(&state, &briefs, &meetings, &DashboardConfig::default());
        assert_eq!(view.briefs.len(), 5);
        assert_eq!(view.upcoming_briefs.len(), 2);
        assert_eq!(view.schedule, meetings.all_meetings);
        assert_eq!(view.hidden_schedule, 0);
        assert_eq!(view.follow_ups.len(), 6);
        assert_eq!(view.hidden_follow_ups, 0);
    }

    #[test]
    fn test_current_filter_hides_checked() {
        let (briefs, meetings) = sample_views();
        let state = ViewState {
            follow_ups_filter: FollowUpsFilter::Current,
            checked_follow_ups: ["f1".to_string(), "f3".to_string()].into_iter().collect(),
            show_all_follow_ups: true,
            ..ViewState::default()
        };
        let view = compute_panel_view(&state, &briefs, &meetings, &DashboardConfig::default());
        let ids: Vec<&str> = view.follow_ups.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["f2", "f4", "f5", "f6"]);

        // The "all" filter keeps checked items visible.
        let all = ViewState {
            follow_ups_filter: FollowUpsFilter::All,
            ..state
        };
        let view = compute_panel_view(&all, &briefs, &meetings, &DashboardConfig::default());
        assert_eq!(view.follow_ups.len(), 6);
    }

    #[test]
    fn test_preview_limit_from_config() {
        let (briefs, meetings) = sample_views();
        let config = DashboardConfig::new()
            .with_today_preview_limit(10)
            .with_follow_up_preview_limit(1);
        let view = compute_panel_view(&ViewState::default(), &briefs, &meetings, &config);
        assert_eq!(view.schedule.len(), 5);
        assert_eq!(view.hidden_schedule, 0);
        assert_eq!(view.follow_ups.len(), 1);
        assert_eq!(view.hidden_follow_ups, 5);
    }
}
