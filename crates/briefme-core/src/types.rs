use crate::error::{BriefMeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type alias for meeting identifiers
pub type MeetingId = String;

/// Type alias for brief identifiers
pub type BriefId = String;

/// Type alias for follow-up identifiers
pub type FollowUpId = String;

/// A calendar meeting as shown on the dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    /// Unique within the owning collection.
    pub id: MeetingId,

    pub title: String,

    /// Display time, e.g. "8:00 AM". Also the chronological sort key.
    pub time: String,

    /// Display duration, e.g. "30 min".
    pub duration: String,

    /// Ordered attendee list.
    pub attendees: Vec<Attendee>,

    /// Free-text preparation notes produced upstream.
    pub briefing: String,

    pub ai_summary: String,

    /// Whether a delegate attends on the user's behalf.
    pub has_proxy: bool,

    /// True iff `proxy_notes` is non-empty after trimming.
    /// Maintained by the notes handlers, never set directly.
    pub has_notes: bool,

    /// Instructions left for the proxy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_notes: Option<String>,

    pub summary_ready: bool,

    pub is_recording: bool,

    /// Signed offset in minutes from "now" to the start of the meeting.
    /// Negative means the meeting already started. Precomputed upstream;
    /// never compared against the wall clock here.
    pub minutes_until: i32,
}

impl Meeting {
    /// Proxy notes as stored, or an empty string.
    pub fn notes(&self) -> &str {
        self.proxy_notes.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attendee {
    pub name: String,
    pub email: String,
}

impl Attendee {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// A generated summary covering a window of messages, emails and meetings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Brief {
    pub id: BriefId,
    pub name: String,
    pub time_created: String,
    pub time_range: String,
    pub slack_messages: MessageCounts,
    pub emails: MessageCounts,
    pub action_items: u32,
    pub has_transcript: bool,
}

/// Message volume for one channel of a brief
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MessageCounts {
    pub total: u32,
    pub from_priority_people: u32,
}

impl MessageCounts {
    pub fn new(total: u32, from_priority_people: u32) -> Self {
        Self {
            total,
            from_priority_people,
        }
    }
}

/// An extracted action item that needs the user's attention
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FollowUp {
    pub id: FollowUpId,
    pub platform: Platform,
    pub priority: Priority,
    pub message: String,
    pub sender: String,
    pub time: String,
    pub action_type: String,
}

/// Follow-up urgency
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = BriefMeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(BriefMeError::unknown("priority", s)),
        }
    }
}

/// Integration a follow-up came from, serialized as its single-letter tag
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Platform {
    #[serde(rename = "S")]
    Slack,
    #[serde(rename = "G")]
    Gmail,
    #[serde(rename = "O")]
    Outlook,
    #[serde(rename = "C")]
    Calendar,
}

impl Platform {
    pub fn tag(self) -> char {
        match self {
            Platform::Slack => 'S',
            Platform::Gmail => 'G',
            Platform::Outlook => 'O',
            Platform::Calendar => 'C',
        }
    }

    pub fn from_tag(tag: char) -> Option<Self> {
        match tag.to_ascii_uppercase() {
            'S' => Some(Platform::Slack),
            'G' => Some(Platform::Gmail),
            'O' => Some(Platform::Outlook),
            'C' => Some(Platform::Calendar),
            _ => None,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Platform {
    type Err = BriefMeError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.trim().chars();
        let platform = match (chars.next(), chars.next()) {
            (Some(c), None) => Platform::from_tag(c),
            _ => match s.trim().to_ascii_lowercase().as_str() {
                "slack" => Some(Platform::Slack),
                "gmail" => Some(Platform::Gmail),
                "outlook" => Some(Platform::Outlook),
                "calendar" => Some(Platform::Calendar),
                _ => None,
            },
        };
        platform.ok_or_else(|| BriefMeError::unknown("platform", s))
    }
}
