//! Static sample collections that stand in for backend data.

use crate::types::{Attendee, Brief, FollowUp, Meeting, MessageCounts, Platform, Priority};

/// The four source collections the dashboard is built from.
#[derive(Debug, Clone, Default)]
pub struct DashboardSource {
    pub briefs: Vec<Brief>,
    pub upcoming_briefs: Vec<Brief>,
    pub follow_ups: Vec<FollowUp>,
    pub meetings: Vec<Meeting>,
}

impl DashboardSource {
    pub fn sample() -> Self {
        Self {
            briefs: sample_briefs(),
            upcoming_briefs: sample_upcoming_briefs(),
            follow_ups: sample_follow_ups(),
            meetings: sample_meetings(),
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn brief(
    id: &str,
    name: &str,
    time_created: &str,
    time_range: &str,
    slack: (u32, u32),
    emails: (u32, u32),
    action_items: u32,
    has_transcript: bool,
) -> Brief {
    Brief {
        id: id.to_string(),
        name: name.to_string(),
        time_created: time_created.to_string(),
        time_range: time_range.to_string(),
        slack_messages: MessageCounts::new(slack.0, slack.1),
        emails: MessageCounts::new(emails.0, emails.1),
        action_items,
        has_transcript,
    }
}

pub fn sample_briefs() -> Vec<Brief> {
    vec![
        brief("b1", "Morning Brief", "Today, 8:00 AM", "6:00 PM - 8:00 AM", (24, 6), (12, 3), 4, true),
        brief("b2", "Midday Brief", "Today, 12:00 PM", "8:00 AM - 12:00 PM", (31, 9), (8, 2), 3, true),
        brief("b3", "Evening Brief", "Yesterday, 6:00 PM", "12:00 PM - 6:00 PM", (18, 4), (15, 5), 6, false),
        brief("b4", "Midday Brief", "Yesterday, 12:00 PM", "8:00 AM - 12:00 PM", (27, 7), (10, 1), 2, true),
        brief("b5", "Morning Brief", "Yesterday, 8:00 AM", "6:00 PM - 8:00 AM", (12, 2), (20, 6), 5, false),
    ]
}

pub fn sample_upcoming_briefs() -> Vec<Brief> {
    vec![
        brief("u1", "Evening Brief", "Today, 6:00 PM", "12:00 PM - 6:00 PM", (0, 0), (0, 0), 0, false),
        brief("u2", "Morning Brief", "Tomorrow, 8:00 AM", "6:00 PM - 8:00 AM", (0, 0), (0, 0), 0, false),
    ]
}

fn follow_up(
    id: &str,
    platform: Platform,
    priority: Priority,
    message: &str,
    sender: &str,
    time: &str,
    action_type: &str,
) -> FollowUp {
    FollowUp {
        id: id.to_string(),
        platform,
        priority,
        message: message.to_string(),
        sender: sender.to_string(),
        time: time.to_string(),
        action_type: action_type.to_string(),
    }
}

pub fn sample_follow_ups() -> Vec<FollowUp> {
    vec![
        follow_up(
            "f1",
            Platform::Slack,
            Priority::High,
            "Can you sign off on the Q3 launch checklist before 3pm?",
            "Priya Shah",
            "9:12 AM",
            "Approve",
        ),
        follow_up(
            "f2",
            Platform::Gmail,
            Priority::High,
            "Contract redlines are back from legal, need your review",
            "Marcus Lee",
            "8:47 AM",
            "Review",
        ),
        follow_up(
            "f3",
            Platform::Outlook,
            Priority::Medium,
            "Please confirm the offsite venue and headcount",
            "Dana Ortiz",
            "Yesterday",
            "Reply",
        ),
        follow_up(
            "f4",
            Platform::Slack,
            Priority::Medium,
            "Thoughts on the new onboarding flow mockups?",
            "Sam Rivera",
            "10:03 AM",
            "Reply",
        ),
        follow_up(
            "f5",
            Platform::Calendar,
            Priority::Low,
            "Reschedule the 1:1 that conflicts with the board prep",
            "Calendar",
            "7:30 AM",
            "Schedule",
        ),
        follow_up(
            "f6",
            Platform::Gmail,
            Priority::Low,
            "Expense report for the March trip is pending",
            "Finance Ops",
            "Yesterday",
            "Submit",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn meeting(
    id: &str,
    title: &str,
    time: &str,
    duration: &str,
    attendees: Vec<Attendee>,
    briefing: &str,
    ai_summary: &str,
    minutes_until: i32,
) -> Meeting {
    Meeting {
        id: id.to_string(),
        title: title.to_string(),
        time: time.to_string(),
        duration: duration.to_string(),
        attendees,
        briefing: briefing.to_string(),
        ai_summary: ai_summary.to_string(),
        has_proxy: false,
        has_notes: false,
        proxy_notes: None,
        summary_ready: minutes_until < 0,
        is_recording: false,
        minutes_until,
    }
}

/// Meetings relative to a late-morning "now": two already started, two
/// within the next two hours and one after that.
pub fn sample_meetings() -> Vec<Meeting> {
    let mut meetings = vec![
        meeting(
            "m1",
            "Leadership Sync",
            "8:00 AM",
            "45 min",
            vec![
                Attendee::new("Priya Shah", "priya@acme.io"),
                Attendee::new("Marcus Lee", "marcus@acme.io"),
            ],
            "Weekly leadership alignment on hiring and launch readiness.",
            "Launch moved to the 14th; hiring freeze lifted for engineering.",
            -180,
        ),
        meeting(
            "m2",
            "Design Review",
            "10:00 AM",
            "30 min",
            vec![
                Attendee::new("Sam Rivera", "sam@acme.io"),
                Attendee::new("Lena Novak", "lena@acme.io"),
            ],
            "Review onboarding flow mockups, round two.",
            "Team prefers variant B; copy changes requested on step three.",
            -60,
        ),
        meeting(
            "m3",
            "Customer Call: Northwind",
            "11:45 AM",
            "60 min",
            vec![
                Attendee::new("Dana Ortiz", "dana@acme.io"),
                Attendee::new("Jo Baker", "jo@northwind.com"),
            ],
            "Renewal discussion. Northwind raised latency concerns last quarter.",
            "",
            45,
        ),
        meeting(
            "m4",
            "Board Prep",
            "12:45 PM",
            "30 min",
            vec![Attendee::new("Marcus Lee", "marcus@acme.io")],
            "Finalize the deck narrative and the Q3 numbers.",
            "",
            105,
        ),
        meeting(
            "m5",
            "1:1 with Sam",
            "1:15 PM",
            "30 min",
            vec![Attendee::new("Sam Rivera", "sam@acme.io")],
            "Career growth check-in.",
            "",
            135,
        ),
    ];
    meetings[1].has_proxy = true;
    meetings[1].proxy_notes = Some("Push for variant B, flag the copy issue.".to_string());
    meetings[1].has_notes = true;
    meetings
}
