//! Display-time parsing for chronological ordering.
//!
//! Meeting times arrive as display strings ("9:00 AM", "12:30 PM"). The
//! schedule view orders them by minutes since midnight using 12-hour
//! clock rules.

const MINUTES_PER_HOUR: u32 = 60;

/// Parse `"H:MM AM|PM"` into minutes since midnight.
///
/// 12 AM is hour 0, 12 PM is hour 12, any other PM hour gets 12 added.
/// The meridiem is case-insensitive and surrounding whitespace is ignored.
/// Returns `None` for anything that is not a valid 12-hour time.
pub fn parse_clock_minutes(display: &str) -> Option<u32> {
    let (clock, meridiem) = display.trim().split_once(char::is_whitespace)?;
    let (hours, minutes) = clock.split_once(':')?;

    if minutes.len() != 2 {
        return None;
    }
    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    if !(1..=12).contains(&hours) || minutes >= MINUTES_PER_HOUR {
        return None;
    }

    let hours = match meridiem.trim().to_ascii_uppercase().as_str() {
        "AM" if hours == 12 => 0,
        "AM" => hours,
        "PM" if hours == 12 => 12,
        "PM" => hours + 12,
        _ => return None,
    };

    Some(hours * MINUTES_PER_HOUR + minutes)
}

/// Sort key for a display time. Unparseable times order after every
/// parseable one.
pub fn clock_sort_key(display: &str) -> (bool, u32) {
    match parse_clock_minutes(display) {
        Some(minutes) => (false, minutes),
        None => (true, 0),
    }
}
