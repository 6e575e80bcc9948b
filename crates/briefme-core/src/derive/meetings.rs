use crate::clock::clock_sort_key;
use crate::types::Meeting;
use serde::Serialize;

/// A meeting starting within this many minutes counts as upcoming.
pub const UPCOMING_THRESHOLD_MINUTES: i32 = 120;

/// How many upcoming meetings get the prominent "up next" slots.
pub const UPCOMING_PREVIEW_LIMIT: usize = 2;

/// Meeting views derived from one version of the meeting collection
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MeetingsData {
    pub has_upcoming_meetings: bool,
    /// First upcoming meeting in collection order.
    pub next_meeting: Option<Meeting>,
    /// At most `UPCOMING_PREVIEW_LIMIT` upcoming meetings, collection order.
    pub upcoming_meetings: Vec<Meeting>,
    /// Upcoming meetings past the preview slots, collection order.
    pub remaining_meetings: Vec<Meeting>,
    /// Every meeting, stably sorted by time of day.
    pub all_meetings: Vec<Meeting>,
}

/// Starts within the next two hours and has not started yet.
///
/// `minutes_until` is a precomputed offset; no clock is consulted.
pub fn is_upcoming(meeting: &Meeting) -> bool {
    (0..UPCOMING_THRESHOLD_MINUTES).contains(&meeting.minutes_until)
}

pub fn compute_meetings_data(meetings: &[Meeting]) -> MeetingsData {
    let upcoming: Vec<&Meeting> = meetings.iter().filter(|m| is_upcoming(m)).collect();

    let mut all_meetings = meetings.to_vec();
    // sort_by_key is stable: equal times keep collection order
    all_meetings.sort_by_key(|m| clock_sort_key(&m.time));

    MeetingsData {
        has_upcoming_meetings: !upcoming.is_empty(),
        next_meeting: upcoming.first().map(|m| (*m).clone()),
        upcoming_meetings: upcoming
            .iter()
            .take(UPCOMING_PREVIEW_LIMIT)
            .map(|m| (*m).clone())
            .collect(),
        remaining_meetings: upcoming
            .iter()
            .skip(UPCOMING_PREVIEW_LIMIT)
            .map(|m| (*m).clone())
            .collect(),
        all_meetings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::parse_clock_minutes;
    use crate::sample::sample_meetings;
    use proptest::prelude::*;

    fn meeting_at(id: &str, time: &str, minutes_until: i32) -> Meeting {
        let mut m = sample_meetings().remove(0);
        m.id = id.to_string();
        m.time = time.to_string();
        m.minutes_until = minutes_until;
        m
    }

    fn ids(meetings: &[Meeting]) -> Vec<&str> {
        meetings.iter().map(|m| m.id.as_str()).collect()
    }

    #[test]
    fn test_upcoming_threshold() {
        let meetings = vec![
            meeting_at("a", "8:00 AM", -180),
            meeting_at("b", "10:00 AM", -60),
            meeting_at("c", "11:45 AM", 45),
            meeting_at("d", "12:45 PM", 105),
            meeting_at("e", "1:15 PM", 135),
        ];
        let data = compute_meetings_data(&meetings);
        assert!(data.has_upcoming_meetings);
        assert_eq!(ids(&data.upcoming_meetings), vec!["c", "d"]);
        assert!(data.remaining_meetings.is_empty());
        assert_eq!(data.next_meeting.map(|m| m.id), Some("c".to_string()));
    }

    #[test]
    fn test_threshold_boundaries() {
        assert!(is_upcoming(&meeting_at("x", "9:00 AM", 0)));
        assert!(is_upcoming(&meeting_at("x", "9:00 AM", 119)));
        assert!(!is_upcoming(&meeting_at("x", "9:00 AM", 120)));
        assert!(!is_upcoming(&meeting_at("x", "9:00 AM", -1)));
    }

    #[test]
    fn test_remaining_meetings_past_preview_slots() {
        let meetings = vec![
            meeting_at("a", "9:00 AM", 10),
            meeting_at("b", "9:30 AM", 300),
            meeting_at("c", "9:45 AM", 30),
            meeting_at("d", "10:00 AM", 60),
            meeting_at("e", "10:30 AM", 90),
        ];
        let data = compute_meetings_data(&meetings);
        assert_eq!(ids(&data.upcoming_meetings), vec!["a", "c"]);
        assert_eq!(ids(&data.remaining_meetings), vec!["d", "e"]);
    }

    #[test]
    fn test_no_upcoming_meetings() {
        let meetings = vec![meeting_at("a", "9:00 AM", -30), meeting_at("b", "5:00 PM", 400)];
        let data = compute_meetings_data(&meetings);
        assert!(!data.has_upcoming_meetings);
        assert!(data.next_meeting.is_none());
        assert!(data.upcoming_meetings.is_empty());
        assert_eq!(data.all_meetings.len(), 2);
    }

    #[test]
    fn test_chronological_sort() {
        let meetings = vec![
            meeting_at("a", "2:00 PM", 0),
            meeting_at("b", "9:00 AM", 0),
            meeting_at("c", "12:00 PM", 0),
            meeting_at("d", "12:30 AM", 0),
        ];
        let data = compute_meetings_data(&meetings);
        let times: Vec<&str> = data.all_meetings.iter().map(|m| m.time.as_str()).collect();
        assert_eq!(times, vec!["12:30 AM", "9:00 AM", "12:00 PM", "2:00 PM"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_times() {
        let meetings = vec![
            meeting_at("late", "3:00 PM", 0),
            meeting_at("first", "9:00 AM", 0),
            meeting_at("second", "9:00 AM", 0),
            meeting_at("unknown", "TBD", 0),
            meeting_at("third", "9:00 am", 0),
        ];
        let data = compute_meetings_data(&meetings);
        assert_eq!(
            ids(&data.all_meetings),
            vec!["first", "second", "third", "late", "unknown"]
        );
    }

    fn arb_time() -> impl Strategy<Value = String> {
        (1u32..=12, 0u32..60, prop_oneof![Just("AM"), Just("PM")])
            .prop_map(|(h, m, meridiem)| format!("{}:{:02} {}", h, m, meridiem))
    }

    proptest! {
        #[test]
        fn prop_all_meetings_sorted_and_complete(
            entries in proptest::collection::vec((arb_time(), -300i32..300), 0..12)
        ) {
            let meetings: Vec<Meeting> = entries
                .iter()
                .enumerate()
                .map(|(i, (time, until))| meeting_at(&format!("m{}", i), time, *until))
                .collect();
            let data = compute_meetings_data(&meetings);

            prop_assert_eq!(data.all_meetings.len(), meetings.len());
            let keys: Vec<u32> = data
                .all_meetings
                .iter()
                .map(|m| parse_clock_minutes(&m.time).unwrap())
                .collect();
            prop_assert!(keys.windows(2).all(|w| w[0] <= w[1]));

            let qualifying = meetings.iter().filter(|m| is_upcoming(m)).count();
            prop_assert_eq!(
                data.upcoming_meetings.len() + data.remaining_meetings.len(),
                qualifying
            );
            prop_assert_eq!(data.has_upcoming_meetings, qualifying > 0);
        }
    }
}
