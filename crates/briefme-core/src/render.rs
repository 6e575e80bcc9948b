use crate::store::DashboardSnapshot;
use crate::types::{Brief, FollowUp, Meeting};

pub trait DashboardRenderer {
    fn render(&self, snapshot: &DashboardSnapshot) -> String;
}

pub struct MarkdownRenderer {
    pub max_chars: usize,
}

pub struct CompactRenderer {
    pub max_chars: usize,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self { max_chars: 8000 }
    }
}

impl Default for CompactRenderer {
    fn default() -> Self {
        Self { max_chars: 8000 }
    }
}

/// Render with the compact or the markdown renderer.
pub fn render(snapshot: &DashboardSnapshot, compact: bool, max_chars: usize) -> String {
    if compact {
        CompactRenderer { max_chars }.render(snapshot)
    } else {
        MarkdownRenderer { max_chars }.render(snapshot)
    }
}

/// Truncate `s` to at most `max_chars` characters.
/// Appends " [truncated]" when there is room; otherwise hard-truncates.
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    const SUFFIX: &str = " [truncated]";
    let suffix_len = SUFFIX.chars().count();
    if max_chars <= suffix_len {
        return s.chars().take(max_chars).collect();
    }
    let kept: String = s.chars().take(max_chars - suffix_len).collect();
    format!("{}{}", kept, SUFFIX)
}

fn brief_line(brief: &Brief) -> String {
    format!(
        "**{}** ({}): {} Slack ({} priority), {} email ({} priority), {} action items{}",
        brief.name,
        brief.time_range,
        brief.slack_messages.total,
        brief.slack_messages.from_priority_people,
        brief.emails.total,
        brief.emails.from_priority_people,
        brief.action_items,
        if brief.has_transcript { ", transcript" } else { "" },
    )
}

fn meeting_markers(meeting: &Meeting) -> String {
    let mut markers = Vec::new();
    if meeting.has_proxy {
        markers.push("proxy");
    }
    if meeting.has_notes {
        markers.push("notes");
    }
    if meeting.is_recording {
        markers.push("recording");
    }
    if meeting.summary_ready {
        markers.push("summary");
    }
    if markers.is_empty() {
        String::new()
    } else {
        format!(" [{}]", markers.join(", "))
    }
}

fn follow_up_line(follow_up: &FollowUp, checked: bool) -> String {
    format!(
        "[{}] {} {} - {} ({}, {})",
        if checked { "x" } else { " " },
        follow_up.platform,
        follow_up.priority,
        follow_up.message,
        follow_up.sender,
        follow_up.action_type,
    )
}

impl DashboardRenderer for MarkdownRenderer {
    fn render(&self, snapshot: &DashboardSnapshot) -> String {
        let state = &snapshot.state;
        let panel = &snapshot.panel;

        let mut out = format!(
            "# Dashboard\n_Generated: {}_ · status: {}\n\n",
            snapshot.generated_at.format("%Y-%m-%d %H:%M UTC"),
            state.current_status
        );

        match &snapshot.meetings.next_meeting {
            Some(next) => out.push_str(&format!(
                "**Up next:** {} at {} (in {} min)\n\n",
                next.title, next.time, next.minutes_until
            )),
            None => out.push_str("**Up next:** nothing in the next two hours\n\n"),
        }

        out.push_str("## Briefs\n\n");
        for brief in &panel.briefs {
            let playing = state.playing_brief.as_deref() == Some(brief.id.as_str());
            out.push_str(&format!(
                "- {}{}\n",
                brief_line(brief),
                if playing { " ▶" } else { "" }
            ));
        }
        for brief in &panel.upcoming_briefs {
            out.push_str(&format!("- _Upcoming:_ {} ({})\n", brief.name, brief.time_created));
        }
        out.push('\n');

        out.push_str("## Today\n\n");
        for meeting in &panel.schedule {
            out.push_str(&format!(
                "- {} · **{}** ({}, {} attendees){}\n",
                meeting.time,
                meeting.title,
                meeting.duration,
                meeting.attendees.len(),
                meeting_markers(meeting)
            ));
        }
        if panel.hidden_schedule > 0 {
            out.push_str(&format!("- _…{} more_\n", panel.hidden_schedule));
        }
        out.push('\n');

        out.push_str(&format!("## Follow-ups ({})\n\n", state.follow_ups_filter));
        for follow_up in &panel.follow_ups {
            let checked = state.checked_follow_ups.contains(&follow_up.id);
            out.push_str(&format!("- {}\n", follow_up_line(follow_up, checked)));
        }
        if panel.hidden_follow_ups > 0 {
            out.push_str(&format!("- _…{} more_\n", panel.hidden_follow_ups));
        }

        truncate(&out, self.max_chars)
    }
}

impl DashboardRenderer for CompactRenderer {
    fn render(&self, snapshot: &DashboardSnapshot) -> String {
        let panel = &snapshot.panel;
        let mut out = String::new();

        if let Some(next) = &snapshot.meetings.next_meeting {
            out.push_str(&format!("next: {} {} (+{}m)\n", next.time, next.title, next.minutes_until));
        }
        for brief in &panel.briefs {
            out.push_str(&format!("brief: {} · {} actions\n", brief.name, brief.action_items));
        }
        for meeting in &panel.schedule {
            out.push_str(&format!("{} {}{}\n", meeting.time, meeting.title, meeting_markers(meeting)));
        }
        for follow_up in &panel.follow_ups {
            let checked = snapshot.state.checked_follow_ups.contains(&follow_up.id);
            out.push_str(&format!("{}\n", follow_up_line(follow_up, checked)));
        }

        truncate(&out, self.max_chars)
    }
}
