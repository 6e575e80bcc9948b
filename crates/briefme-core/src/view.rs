use crate::error::{BriefMeError, Result};
use crate::types::{BriefId, FollowUp, FollowUpId, Meeting, MeetingId};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Default presence status shown in the header.
pub const DEFAULT_STATUS: &str = "available";

/// The consolidated UI state of the dashboard home view.
///
/// Always fully defined: `ViewState::default()` supplies a value for every
/// field, and updates only ever replace whole fields through
/// [`ViewStatePatch`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewState {
    // Selection
    pub selected_brief: Option<BriefId>,
    pub selected_calendar_item: Option<MeetingId>,
    pub selected_meeting: Option<Meeting>,
    pub selected_message: Option<String>,
    pub selected_transcript: Option<BriefId>,
    pub selected_follow_up: Option<FollowUp>,
    pub selected_follow_up_id: Option<FollowUpId>,

    // Visibility and filters
    pub show_all_briefs: bool,
    pub open_section: OpenSection,
    pub left_rail_tab: LeftRailTab,
    pub is_home_selected: bool,
    pub follow_ups_filter: FollowUpsFilter,

    // Panels and modals
    pub show_right_drawer: bool,
    pub left_panel_collapsed: bool,
    pub right_panel_collapsed: bool,
    pub show_follow_up_modal: bool,
    pub show_priority_confirm_modal: bool,
    pub show_status_modal: bool,
    pub show_mobile_brief_drawer: bool,
    /// The proxy-notes drawer.
    pub show_instructions_drawer: bool,

    // Working buffers
    pub playing_brief: Option<BriefId>,
    pub current_status: String,
    /// Scratch buffer for notes being edited; committed by `save_notes`.
    pub temp_notes: String,
    /// Follow-ups the user has ticked off.
    pub checked_follow_ups: BTreeSet<FollowUpId>,
    /// Pending priority change awaiting confirmation. Opaque to this crate.
    pub priority_change_data: Option<Value>,
    pub snooze_reason: String,

    // Disclosure
    pub show_more_today: bool,
    pub show_all_follow_ups: bool,
    pub show_upcoming_briefs: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            selected_brief: None,
            selected_calendar_item: None,
            selected_meeting: None,
            selected_message: None,
            selected_transcript: None,
            selected_follow_up: None,
            selected_follow_up_id: None,
            show_all_briefs: false,
            open_section: OpenSection::Briefs,
            left_rail_tab: LeftRailTab::Briefs,
            is_home_selected: true,
            follow_ups_filter: FollowUpsFilter::All,
            show_right_drawer: false,
            left_panel_collapsed: false,
            right_panel_collapsed: false,
            show_follow_up_modal: false,
            show_priority_confirm_modal: false,
            show_status_modal: false,
            show_mobile_brief_drawer: false,
            show_instructions_drawer: false,
            playing_brief: None,
            current_status: DEFAULT_STATUS.to_string(),
            temp_notes: String::new(),
            checked_follow_ups: BTreeSet::new(),
            priority_change_data: None,
            snooze_reason: String::new(),
            show_more_today: false,
            show_all_follow_ups: false,
            show_upcoming_briefs: false,
        }
    }
}

/// Which accordion section of the home view is expanded
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum OpenSection {
    #[default]
    Briefs,
    Calendar,
    Followups,
    None,
}

/// Active tab of the left rail
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum LeftRailTab {
    #[default]
    Briefs,
    Calendar,
    Followups,
}

/// Follow-up list filter
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum FollowUpsFilter {
    /// Every follow-up, checked or not.
    #[default]
    All,
    /// Only follow-ups not yet checked off.
    Current,
}

impl OpenSection {
    pub fn as_str(self) -> &'static str {
        match self {
            OpenSection::Briefs => "briefs",
            OpenSection::Calendar => "calendar",
            OpenSection::Followups => "followups",
            OpenSection::None => "none",
        }
    }
}

impl LeftRailTab {
    pub fn as_str(self) -> &'static str {
        match self {
            LeftRailTab::Briefs => "briefs",
            LeftRailTab::Calendar => "calendar",
            LeftRailTab::Followups => "followups",
        }
    }
}

impl FollowUpsFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            FollowUpsFilter::All => "all",
            FollowUpsFilter::Current => "current",
        }
    }
}

impl fmt::Display for OpenSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for LeftRailTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for FollowUpsFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OpenSection {
    type Err = BriefMeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "briefs" => Ok(OpenSection::Briefs),
            "calendar" => Ok(OpenSection::Calendar),
            "followups" | "follow-ups" => Ok(OpenSection::Followups),
            "none" => Ok(OpenSection::None),
            _ => Err(BriefMeError::unknown("section", s)),
        }
    }
}

impl FromStr for LeftRailTab {
    type Err = BriefMeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "briefs" => Ok(LeftRailTab::Briefs),
            "calendar" => Ok(LeftRailTab::Calendar),
            "followups" | "follow-ups" => Ok(LeftRailTab::Followups),
            _ => Err(BriefMeError::unknown("left rail tab", s)),
        }
    }
}

impl FromStr for FollowUpsFilter {
    type Err = BriefMeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(FollowUpsFilter::All),
            "current" => Ok(FollowUpsFilter::Current),
            _ => Err(BriefMeError::unknown("follow-ups filter", s)),
        }
    }
}

/// A partial [`ViewState`]: only the fields that are `Some` get replaced.
///
/// Fields that are optional in `ViewState` are doubly optional here so a
/// patch can clear them: `None` leaves the field alone, `Some(None)` sets
/// it to absent. In JSON a missing key means "leave alone" and `null`
/// means "clear".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ViewStatePatch {
    #[serde(deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub selected_brief: Option<Option<BriefId>>,
    #[serde(deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub selected_calendar_item: Option<Option<MeetingId>>,
    #[serde(deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub selected_meeting: Option<Option<Meeting>>,
    #[serde(deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub selected_message: Option<Option<String>>,
    #[serde(deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub selected_transcript: Option<Option<BriefId>>,
    #[serde(deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub selected_follow_up: Option<Option<FollowUp>>,
    #[serde(deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub selected_follow_up_id: Option<Option<FollowUpId>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_all_briefs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_section: Option<OpenSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_rail_tab: Option<LeftRailTab>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_home_selected: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_ups_filter: Option<FollowUpsFilter>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_right_drawer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_panel_collapsed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_panel_collapsed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_follow_up_modal: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_priority_confirm_modal: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_status_modal: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_mobile_brief_drawer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_instructions_drawer: Option<bool>,

    #[serde(deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub playing_brief: Option<Option<BriefId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked_follow_ups: Option<BTreeSet<FollowUpId>>,
    #[serde(deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub priority_change_data: Option<Option<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snooze_reason: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_more_today: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_all_follow_ups: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_upcoming_briefs: Option<bool>,
}

/// Present-but-null must become `Some(None)`, not `None`.
fn double_option<'de, D, T>(deserializer: D) -> std::result::Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn merge<T: Clone>(target: &mut T, value: &Option<T>) {
    if let Some(v) = value {
        *target = v.clone();
    }
}

impl ViewStatePatch {
    /// Parse a patch from a JSON object. Unknown keys are rejected.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Shallow-merge this patch into `state`, returning the new state.
    pub fn apply_to(&self, state: &ViewState) -> ViewState {
        let mut next = state.clone();
        self.merge_into(&mut next);
        next
    }

    /// Shallow-merge in place. Fields not named by the patch are untouched.
    pub fn merge_into(&self, state: &mut ViewState) {
        merge(&mut state.selected_brief, &self.selected_brief);
        merge(&mut state.selected_calendar_item, &self.selected_calendar_item);
        merge(&mut state.selected_meeting, &self.selected_meeting);
        merge(&mut state.selected_message, &self.selected_message);
        merge(&mut state.selected_transcript, &self.selected_transcript);
        merge(&mut state.selected_follow_up, &self.selected_follow_up);
        merge(&mut state.selected_follow_up_id, &self.selected_follow_up_id);

        merge(&mut state.show_all_briefs, &self.show_all_briefs);
        merge(&mut state.open_section, &self.open_section);
        merge(&mut state.left_rail_tab, &self.left_rail_tab);
        merge(&mut state.is_home_selected, &self.is_home_selected);
        merge(&mut state.follow_ups_filter, &self.follow_ups_filter);

        merge(&mut state.show_right_drawer, &self.show_right_drawer);
        merge(&mut state.left_panel_collapsed, &self.left_panel_collapsed);
        merge(&mut state.right_panel_collapsed, &self.right_panel_collapsed);
        merge(&mut state.show_follow_up_modal, &self.show_follow_up_modal);
        merge(&mut state.show_priority_confirm_modal, &self.show_priority_confirm_modal);
        merge(&mut state.show_status_modal, &self.show_status_modal);
        merge(&mut state.show_mobile_brief_drawer, &self.show_mobile_brief_drawer);
        merge(&mut state.show_instructions_drawer, &self.show_instructions_drawer);

        merge(&mut state.playing_brief, &self.playing_brief);
        merge(&mut state.current_status, &self.current_status);
        merge(&mut state.temp_notes, &self.temp_notes);
        merge(&mut state.checked_follow_ups, &self.checked_follow_ups);
        merge(&mut state.priority_change_data, &self.priority_change_data);
        merge(&mut state.snooze_reason, &self.snooze_reason);

        merge(&mut state.show_more_today, &self.show_more_today);
        merge(&mut state.show_all_follow_ups, &self.show_all_follow_ups);
        merge(&mut state.show_upcoming_briefs, &self.show_upcoming_briefs);
    }

    /// Names (camelCase, as in JSON) of the fields this patch replaces.
    pub fn changed_fields(&self) -> Vec<&'static str> {
        let named = [
            ("selectedBrief", self.selected_brief.is_some()),
            ("selectedCalendarItem", self.selected_calendar_item.is_some()),
            ("selectedMeeting", self.selected_meeting.is_some()),
            ("selectedMessage", self.selected_message.is_some()),
            ("selectedTranscript", self.selected_transcript.is_some()),
            ("selectedFollowUp", self.selected_follow_up.is_some()),
            ("selectedFollowUpId", self.selected_follow_up_id.is_some()),
            ("showAllBriefs", self.show_all_briefs.is_some()),
            ("openSection", self.open_section.is_some()),
            ("leftRailTab", self.left_rail_tab.is_some()),
            ("isHomeSelected", self.is_home_selected.is_some()),
            ("followUpsFilter", self.follow_ups_filter.is_some()),
            ("showRightDrawer", self.show_right_drawer.is_some()),
            ("leftPanelCollapsed", self.left_panel_collapsed.is_some()),
            ("rightPanelCollapsed", self.right_panel_collapsed.is_some()),
            ("showFollowUpModal", self.show_follow_up_modal.is_some()),
            ("showPriorityConfirmModal", self.show_priority_confirm_modal.is_some()),
            ("showStatusModal", self.show_status_modal.is_some()),
            ("showMobileBriefDrawer", self.show_mobile_brief_drawer.is_some()),
            ("showInstructionsDrawer", self.show_instructions_drawer.is_some()),
            ("playingBrief", self.playing_brief.is_some()),
            ("currentStatus", self.current_status.is_some()),
            ("tempNotes", self.temp_notes.is_some()),
            ("checkedFollowUps", self.checked_follow_ups.is_some()),
            ("priorityChangeData", self.priority_change_data.is_some()),
            ("snoozeReason", self.snooze_reason.is_some()),
            ("showMoreToday", self.show_more_today.is_some()),
            ("showAllFollowUps", self.show_all_follow_ups.is_some()),
            ("showUpcomingBriefs", self.show_upcoming_briefs.is_some()),
        ];
        named
            .into_iter()
            .filter_map(|(name, set)| set.then_some(name))
            .collect()
    }

    /// True when the patch names no field at all.
    pub fn is_empty(&self) -> bool {
        self.changed_fields().is_empty()
    }
}
