//! Time-slot utilities: slot generation, lenient parsing, canonical formatting.

use chrono::{Duration, NaiveTime};

/// Canonical slot rendering, e.g. `08:00 AM`.
pub const SLOT_FORMAT: &str = "%I:%M %p";

const ACCEPTED_FORMATS: [&str; 4] = ["%I:%M %p", "%I:%M%p", "%H:%M", "%H:%M:%S"];

pub fn format_slot(t: NaiveTime) -> String {
    t.format(SLOT_FORMAT).to_string()
}

/// Parse `8:00 AM`, `08:00 am`, `8:00PM`, `13:30` or `13:30:00`.
pub fn parse_slot(s: &str) -> Option<NaiveTime> {
    let s = s.trim();
    ACCEPTED_FORMATS
        .iter()
        .find_map(|f| NaiveTime::parse_from_str(s, f).ok())
}

/// Parse a config window bound (`HH:MM`).
pub fn parse_hhmm(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M").ok()
}

/// All slots from `start` to `end` inclusive, `step_minutes` apart.
pub fn generate_slots(start: NaiveTime, end: NaiveTime, step_minutes: u32) -> Vec<NaiveTime> {
    let mut out = Vec::new();
    if step_minutes == 0 {
        return out;
    }

    let step = Duration::minutes(i64::from(step_minutes));
    let mut t = start;
    while t <= end {
        out.push(t);
        let (next, wrapped) = t.overflowing_add_signed(step);
        if wrapped != 0 {
            break;
        }
        t = next;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn default_window_has_nineteen_half_hour_slots() {
        let slots = generate_slots(hm(8, 0), hm(17, 0), 30);
        assert_eq!(slots.len(), 19);
        assert_eq!(slots.first(), Some(&hm(8, 0)));
        assert_eq!(slots.last(), Some(&hm(17, 0)));
    }

    #[test]
    fn parse_slot_accepts_padded_and_unpadded() {
        assert_eq!(parse_slot("8:00 AM"), Some(hm(8, 0)));
        assert_eq!(parse_slot("08:00 AM"), Some(hm(8, 0)));
        assert_eq!(parse_slot("1:30 pm"), Some(hm(13, 30)));
        assert_eq!(parse_slot("13:30"), Some(hm(13, 30)));
        assert_eq!(parse_slot("noon"), None);
    }

    #[test]
    fn format_slot_is_zero_padded_twelve_hour() {
        assert_eq!(format_slot(hm(8, 0)), "08:00 AM");
        assert_eq!(format_slot(hm(12, 30)), "12:30 PM");
    }

    #[test]
    fn late_window_does_not_wrap_past_midnight() {
        let slots = generate_slots(hm(23, 0), hm(23, 59), 30);
        assert_eq!(slots, vec![hm(23, 0), hm(23, 30)]);
    }
}
