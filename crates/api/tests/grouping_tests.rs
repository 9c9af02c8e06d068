mod common;

use api::schedule::{group_slots, DayGroup, ScheduleScope};
use common::slot;
use uuid::Uuid;

fn days(groups: &[DayGroup]) -> Vec<&str> {
    groups.iter().map(|g| g.day.as_str()).collect()
}

fn slot_ids(groups: &[DayGroup]) -> Vec<Uuid> {
    groups
        .iter()
        .flat_map(|g| g.slots.iter().map(|s| s.id))
        .collect()
}

#[test]
fn slots_within_a_day_sort_by_start_time() {
    let club_id = Uuid::new_v4();
    let evening = slot(club_id, None, "Monday", Some("18:00"), Some("19:30"));
    let morning = slot(club_id, None, "Monday", Some("07:00"), Some("08:00"));

    let groups = group_slots(&[evening, morning], ScheduleScope::Club(club_id));

    assert_eq!(days(&groups), vec!["Monday"]);
    let starts: Vec<_> = groups[0]
        .slots
        .iter()
        .map(|s| s.start_time.as_deref().unwrap())
        .collect();
    assert_eq!(starts, vec!["07:00", "18:00"]);
}

#[test]
fn club_scope_excludes_branch_slots() {
    let club_id = Uuid::new_v4();
    let branch_id = Uuid::new_v4();
    let slots = [slot(
        club_id,
        Some(branch_id),
        "Tuesday",
        Some("18:00:00"),
        Some("19:00:00"),
    )];

    // The main-location view must not double-count a slot already shown
    // under its branch.
    let groups = group_slots(&slots, ScheduleScope::Club(club_id));
    assert!(groups.is_empty());
}

#[test]
fn branch_scope_matches_only_that_branch() {
    let club_id = Uuid::new_v4();
    let branch_a = Uuid::new_v4();
    let branch_b = Uuid::new_v4();
    let slots = [
        slot(club_id, Some(branch_a), "Monday", Some("10:00"), None),
        slot(club_id, Some(branch_b), "Monday", Some("11:00"), None),
        slot(club_id, None, "Monday", Some("12:00"), None),
    ];

    let groups = group_slots(&slots, ScheduleScope::Branch(branch_a));

    assert_eq!(slot_ids(&groups), vec![slots[0].id]);
    assert!(groups
        .iter()
        .flat_map(|g| &g.slots)
        .all(|s| s.branch_id == Some(branch_a)));
}

#[test]
fn branch_scope_includes_slot_even_without_branch_record() {
    // Grouping and branch lookup are independent: a slot referencing an
    // unknown branch still lands in that branch's day groups.
    let club_id = Uuid::new_v4();
    let orphan_branch = Uuid::new_v4();
    let slots = [slot(club_id, Some(orphan_branch), "Friday", None, None)];

    let groups = group_slots(&slots, ScheduleScope::Branch(orphan_branch));
    assert_eq!(days(&groups), vec!["Friday"]);
}

#[test]
fn days_follow_canonical_order() {
    let club_id = Uuid::new_v4();
    let slots = [
        slot(club_id, None, "Sunday", Some("09:00"), None),
        slot(club_id, None, "Wednesday", Some("09:00"), None),
        slot(club_id, None, "Monday", Some("09:00"), None),
        slot(club_id, None, "Friday", Some("09:00"), None),
    ];

    let groups = group_slots(&slots, ScheduleScope::Club(club_id));
    assert_eq!(days(&groups), vec!["Monday", "Wednesday", "Friday", "Sunday"]);
}

#[test]
fn empty_days_are_omitted_not_emitted() {
    let club_id = Uuid::new_v4();
    let slots = [slot(club_id, None, "Thursday", Some("20:00"), None)];

    let groups = group_slots(&slots, ScheduleScope::Club(club_id));
    assert_eq!(days(&groups), vec!["Thursday"]);
}

#[test]
fn unknown_day_tokens_append_after_canonical_days() {
    let club_id = Uuid::new_v4();
    let slots = [
        slot(club_id, None, "Funday", Some("10:00"), None),
        slot(club_id, None, "Sunday", Some("10:00"), None),
        slot(club_id, None, "", Some("10:00"), None),
        slot(club_id, None, "Monday", Some("10:00"), None),
    ];

    let groups = group_slots(&slots, ScheduleScope::Club(club_id));

    // Canonical days first, then malformed tokens in first-seen order; no
    // record is dropped.
    assert_eq!(days(&groups), vec!["Monday", "Sunday", "Funday", ""]);
}

#[test]
fn missing_start_time_sorts_first() {
    let club_id = Uuid::new_v4();
    let untimed = slot(club_id, None, "Monday", None, None);
    let timed = slot(club_id, None, "Monday", Some("06:00"), Some("07:00"));
    let untimed_id = untimed.id;

    let groups = group_slots(&[timed, untimed], ScheduleScope::Club(club_id));
    assert_eq!(groups[0].slots[0].id, untimed_id);
}

#[test]
fn grouping_is_total_over_matching_slots() {
    let club_id = Uuid::new_v4();
    let branch_id = Uuid::new_v4();
    let slots = [
        slot(club_id, None, "Monday", Some("10:00"), None),
        slot(club_id, None, "Monday", Some("10:00"), None),
        slot(club_id, None, "Someday", None, None),
        slot(club_id, Some(branch_id), "Monday", Some("10:00"), None),
        slot(Uuid::new_v4(), None, "Monday", Some("10:00"), None),
    ];

    let groups = group_slots(&slots, ScheduleScope::Club(club_id));

    // Exactly the club's branchless slots, each exactly once.
    let mut expected: Vec<Uuid> = vec![slots[0].id, slots[1].id, slots[2].id];
    let mut actual = slot_ids(&groups);
    expected.sort();
    actual.sort();
    assert_eq!(actual, expected);
}

#[test]
fn grouping_is_idempotent() {
    let club_id = Uuid::new_v4();
    let slots = [
        slot(club_id, None, "Tuesday", Some("18:00:00"), None),
        slot(club_id, None, "Tuesday", None, None),
        slot(club_id, None, "Holiday", Some("08:00"), None),
    ];

    let first = group_slots(&slots, ScheduleScope::Club(club_id));
    let second = group_slots(&slots, ScheduleScope::Club(club_id));

    assert_eq!(days(&first), days(&second));
    assert_eq!(slot_ids(&first), slot_ids(&second));
}

#[test]
fn empty_input_yields_empty_output() {
    let groups = group_slots(&[], ScheduleScope::Club(Uuid::new_v4()));
    assert!(groups.is_empty());
}
