use api::schedule::{canonical_day_label, format_time_range, normalize_time, WEEKDAY_ORDER};

#[test]
fn normalize_time_truncates_seconds() {
    assert_eq!(normalize_time(Some("18:00:00")), "18:00");
    assert_eq!(normalize_time(Some("07:15:30")), "07:15");
}

#[test]
fn normalize_time_keeps_five_char_form() {
    assert_eq!(normalize_time(Some("18:00")), "18:00");
}

#[test]
fn normalize_time_empty_inputs_yield_empty_string() {
    assert_eq!(normalize_time(None), "");
    assert_eq!(normalize_time(Some("")), "");
}

#[test]
fn normalize_time_passes_short_strings_through() {
    assert_eq!(normalize_time(Some("18:0")), "18:0");
    assert_eq!(normalize_time(Some("9")), "9");
}

#[test]
fn normalize_time_is_textual_not_calendar_aware() {
    // Known fragility carried over from the admin screens: anything at
    // least five characters long is truncated, valid time or not.
    assert_eq!(normalize_time(Some("whenever")), "whene");
    assert_eq!(normalize_time(Some("99:99:99")), "99:99");
}

#[test]
fn format_time_range_joins_both_ends() {
    assert_eq!(
        format_time_range(Some("18:00:00"), Some("19:30:00")),
        "18:00 - 19:30"
    );
}

#[test]
fn format_time_range_single_side_stands_alone() {
    assert_eq!(format_time_range(Some(""), Some("19:00")), "19:00");
    assert_eq!(format_time_range(Some("18:00"), None), "18:00");
}

#[test]
fn format_time_range_both_missing_is_empty() {
    assert_eq!(format_time_range(None, None), "");
    assert_eq!(format_time_range(Some(""), Some("")), "");
}

#[test]
fn day_labels_cover_canonical_days() {
    for day in WEEKDAY_ORDER {
        assert_eq!(canonical_day_label(day), day);
    }
}

#[test]
fn day_label_passes_unknown_tokens_through() {
    assert_eq!(canonical_day_label("Funday"), "Funday");
    // Matching is case-sensitive on purpose.
    assert_eq!(canonical_day_label("monday"), "monday");
}

#[test]
fn weekday_order_is_monday_through_sunday() {
    assert_eq!(WEEKDAY_ORDER.len(), 7);
    assert_eq!(WEEKDAY_ORDER[0], "Monday");
    assert_eq!(WEEKDAY_ORDER[6], "Sunday");
}
