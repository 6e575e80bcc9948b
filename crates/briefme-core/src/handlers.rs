//! Meeting-collection transitions and the view-state patches that go with
//! them. Everything here is pure: inputs are borrowed, results are new
//! values for the store to install.

use crate::types::Meeting;
use crate::view::{ViewState, ViewStatePatch};

/// Result of the save-notes transition.
#[derive(Debug, Clone, PartialEq)]
pub struct NotesCommit {
    /// Rebuilt collection, or `None` when there was nothing to commit to.
    pub meetings: Option<Vec<Meeting>>,
    /// Closes the drawer and clears the selection and the buffer. Always applied.
    pub cleanup: ViewStatePatch,
}

pub fn contains(meetings: &[Meeting], id: &str) -> bool {
    meetings.iter().any(|m| m.id == id)
}

/// New collection with `has_proxy` negated on the meeting matching `id`.
/// A miss yields a collection equal to the input.
pub fn toggle_proxy(meetings: &[Meeting], id: &str) -> Vec<Meeting> {
    meetings
        .iter()
        .map(|m| {
            if m.id == id {
                Meeting {
                    has_proxy: !m.has_proxy,
                    ..m.clone()
                }
            } else {
                m.clone()
            }
        })
        .collect()
}

/// New collection with `notes` (trimmed) attached to the meeting matching `id`.
pub fn commit_notes(meetings: &[Meeting], id: &str, notes: &str) -> Vec<Meeting> {
    let trimmed = notes.trim();
    meetings
        .iter()
        .map(|m| {
            if m.id == id {
                Meeting {
                    proxy_notes: Some(trimmed.to_string()),
                    has_notes: !trimmed.is_empty(),
                    ..m.clone()
                }
            } else {
                m.clone()
            }
        })
        .collect()
}

/// Select `meeting`, open the notes drawer and seed the buffer with its
/// existing notes.
pub fn open_notes(meeting: &Meeting) -> ViewStatePatch {
    ViewStatePatch {
        selected_meeting: Some(Some(meeting.clone())),
        show_instructions_drawer: Some(true),
        temp_notes: Some(meeting.notes().to_string()),
        ..Default::default()
    }
}

pub fn close_notes() -> ViewStatePatch {
    ViewStatePatch {
        show_instructions_drawer: Some(false),
        selected_meeting: Some(None),
        temp_notes: Some(String::new()),
        ..Default::default()
    }
}

/// Commit the notes buffer to the selected meeting, then close the drawer.
///
/// The commit only happens when a meeting is selected and still present in
/// the collection; the cleanup happens regardless.
pub fn save_notes(state: &ViewState, meetings: &[Meeting]) -> NotesCommit {
    let meetings = state
        .selected_meeting
        .as_ref()
        .filter(|selected| contains(meetings, &selected.id))
        .map(|selected| commit_notes(meetings, &selected.id, &state.temp_notes));

    NotesCommit {
        meetings,
        cleanup: close_notes(),
    }
}

/// Tick or untick a follow-up.
pub fn toggle_checked(state: &ViewState, follow_up_id: &str) -> ViewStatePatch {
    let mut checked = state.checked_follow_ups.clone();
    if !checked.remove(follow_up_id) {
        checked.insert(follow_up_id.to_string());
    }
    ViewStatePatch {
        checked_follow_ups: Some(checked),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_meetings;
    use proptest::prelude::*;

    #[test]
    fn test_toggle_proxy_flips_only_match() {
        let meetings = sample_meetings();
        let toggled = toggle_proxy(&meetings, "m3");
        for (before, after) in meetings.iter().zip(&toggled) {
            if before.id == "m3" {
                assert_eq!(after.has_proxy, !before.has_proxy);
                assert_eq!(
                    Meeting { has_proxy: before.has_proxy, ..after.clone() },
                    *before
                );
            } else {
                assert_eq!(after, before);
            }
        }
    }

    #[test]
    fn test_toggle_proxy_miss_is_noop() {
        let meetings = sample_meetings();
        assert_eq!(toggle_proxy(&meetings, "nope"), meetings);
        assert!(toggle_proxy(&[], "m1").is_empty());
    }

    #[test]
    fn test_commit_whitespace_notes() {
        let meetings = commit_notes(&sample_meetings(), "m2", "   ");
        let m2 = meetings.iter().find(|m| m.id == "m2").unwrap();
        assert!(!m2.has_notes);
        assert_eq!(m2.proxy_notes.as_deref(), Some(""));
    }

    #[test]
    fn test_commit_real_notes_trimmed() {
        let meetings = commit_notes(&sample_meetings(), "m3", "  Focus on X \n");
        let m3 = meetings.iter().find(|m| m.id == "m3").unwrap();
        assert!(m3.has_notes);
        assert_eq!(m3.proxy_notes.as_deref(), Some("Focus on X"));
    }

    #[test]
    fn test_open_notes_seeds_buffer() {
        let meetings = sample_meetings();
        let patch = open_notes(&meetings[1]);
        let state = patch.apply_to(&ViewState::default());
        assert!(state.show_instructions_drawer);
        assert_eq!(state.selected_meeting.as_ref().map(|m| m.id.as_str()), Some("m2"));
        assert_eq!(state.temp_notes, "Push for variant B, flag the copy issue.");

        let empty = open_notes(&meetings[2]).apply_to(&state);
        assert_eq!(empty.temp_notes, "");
    }

    #[test]
    fn test_save_notes_without_selection_only_cleans_up() {
        let state = ViewState {
            show_instructions_drawer: true,
            temp_notes: "orphaned".into(),
            ..ViewState::default()
        };
        let commit = save_notes(&state, &sample_meetings());
        assert!(commit.meetings.is_none());

        let next = commit.cleanup.apply_to(&state);
        assert!(!next.show_instructions_drawer);
        assert!(next.selected_meeting.is_none());
        assert_eq!(next.temp_notes, "");
    }

    #[test]
    fn test_save_notes_for_vanished_meeting_skips_commit() {
        let mut gone = sample_meetings().remove(0);
        gone.id = "m99".into();
        let state = open_notes(&gone).apply_to(&ViewState::default());
        let commit = save_notes(&state, &sample_meetings());
        assert!(commit.meetings.is_none());
        assert_eq!(commit.cleanup, close_notes());
    }

    #[test]
    fn test_save_notes_commits_buffer() {
        let meetings = sample_meetings();
        let mut state = open_notes(&meetings[2]).apply_to(&ViewState::default());
        state.temp_notes = "Focus on X".into();

        let commit = save_notes(&state, &meetings);
        let updated = commit.meetings.expect("selected meeting should be committed");
        let m3 = updated.iter().find(|m| m.id == "m3").unwrap();
        assert!(m3.has_notes);
        assert_eq!(m3.proxy_notes.as_deref(), Some("Focus on X"));
        assert_eq!(updated.len(), meetings.len());
    }

    #[test]
    fn test_toggle_checked_is_involution() {
        let state = ViewState::default();
        let once = toggle_checked(&state, "f1").apply_to(&state);
        assert!(once.checked_follow_ups.contains("f1"));
        let twice = toggle_checked(&once, "f1").apply_to(&once);
        assert_eq!(twice, state);
    }

    proptest! {
        #[test]
        fn prop_toggle_proxy_involution(
            flags in proptest::collection::vec(any::<bool>(), 1..8),
            pick in any::<proptest::sample::Index>(),
        ) {
            let template = sample_meetings().remove(0);
            let meetings: Vec<Meeting> = flags
                .iter()
                .enumerate()
                .map(|(i, flag)| Meeting {
                    id: format!("m{}", i),
                    has_proxy: *flag,
                    ..template.clone()
                })
                .collect();
            let id = meetings[pick.index(meetings.len())].id.clone();
            let twice = toggle_proxy(&toggle_proxy(&meetings, &id), &id);
            prop_assert_eq!(twice, meetings);
        }
    }
}
