/// Canonical weekday sequence used to order day groups. Kept as an explicit
/// constant so output order never depends on locale settings or map
/// iteration order.
pub const WEEKDAY_ORDER: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Display label for a weekday token. This is the single localization seam
/// for day names; unrecognized tokens pass through unchanged rather than
/// erroring.
pub fn canonical_day_label(raw: &str) -> &str {
    match raw {
        "Monday" => "Monday",
        "Tuesday" => "Tuesday",
        "Wednesday" => "Wednesday",
        "Thursday" => "Thursday",
        "Friday" => "Friday",
        "Saturday" => "Saturday",
        "Sunday" => "Sunday",
        other => other,
    }
}

/// Truncates a wall-clock string to its `HH:MM` prefix. Absent or empty
/// input yields `""`, which doubles as the "earliest" sort key in
/// [`super::grouping::group_slots`].
///
/// This is textual truncation, not time parsing: a string that is not a
/// well-formed time produces whatever its first five characters happen to
/// be, and anything shorter than five characters passes through as-is. The
/// admin screens are the only writers of these strings and do not validate
/// them either, so hardening this would change observable output.
pub fn normalize_time(raw: Option<&str>) -> String {
    match raw {
        Some(s) if !s.is_empty() => s.chars().take(5).collect(),
        _ => String::new(),
    }
}

/// Joins two normalized times into a display range. A missing end (or
/// start) leaves the other side standing alone with no dash; both missing
/// yields `""`.
pub fn format_time_range(start: Option<&str>, end: Option<&str>) -> String {
    let start = normalize_time(start);
    let end = normalize_time(end);

    match (start.is_empty(), end.is_empty()) {
        (true, true) => String::new(),
        (false, true) => start,
        (true, false) => end,
        (false, false) => format!("{start} - {end}"),
    }
}
