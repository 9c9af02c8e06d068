mod common;

use std::collections::HashMap;

use api::schedule::{build_location_schedule, NO_MANAGER_FALLBACK};
use common::{branch, club, slot};

#[test]
fn branch_without_slots_still_listed() {
    let club_row = club("Hwarang Taekwondo");
    let empty_branch = branch(club_row.id, "Riverside");
    let busy_branch = branch(club_row.id, "Downtown");
    let slots = [slot(
        club_row.id,
        Some(busy_branch.id),
        "Monday",
        Some("18:00"),
        Some("19:30"),
    )];

    let view = build_location_schedule(
        club_row,
        vec![empty_branch.clone(), busy_branch.clone()],
        &HashMap::new(),
        &slots,
    );

    // "No schedule configured yet" is an explicit empty list, not an
    // omitted branch.
    assert_eq!(view.branches.len(), 2);
    let empty = view
        .branches
        .iter()
        .find(|bs| bs.branch.id == empty_branch.id)
        .unwrap();
    assert!(empty.days.is_empty());

    let busy = view
        .branches
        .iter()
        .find(|bs| bs.branch.id == busy_branch.id)
        .unwrap();
    assert_eq!(busy.days.len(), 1);
}

#[test]
fn missing_manager_degrades_to_fallback() {
    let club_row = club("Hwarang Taekwondo");
    let managed = branch(club_row.id, "Downtown");
    let unmanaged = branch(club_row.id, "Riverside");

    let mut manager_names = HashMap::new();
    manager_names.insert(managed.id, "Kim Yuna".to_string());

    let view = build_location_schedule(
        club_row,
        vec![managed.clone(), unmanaged.clone()],
        &manager_names,
        &[],
    );

    let by_id = |id| {
        view.branches
            .iter()
            .find(|bs| bs.branch.id == id)
            .unwrap()
    };
    assert_eq!(by_id(managed.id).manager_name, "Kim Yuna");
    assert_eq!(by_id(unmanaged.id).manager_name, NO_MANAGER_FALLBACK);
}

#[test]
fn main_and_branch_views_do_not_double_count() {
    let club_row = club("Hwarang Taekwondo");
    let branch_row = branch(club_row.id, "Downtown");
    let main_slot = slot(club_row.id, None, "Monday", Some("07:00"), Some("08:00"));
    let branch_slot = slot(
        club_row.id,
        Some(branch_row.id),
        "Monday",
        Some("18:00"),
        Some("19:30"),
    );
    let main_id = main_slot.id;
    let branch_slot_id = branch_slot.id;

    let view = build_location_schedule(
        club_row,
        vec![branch_row],
        &HashMap::new(),
        &[main_slot, branch_slot],
    );

    let main_ids: Vec<_> = view
        .main_days
        .iter()
        .flat_map(|g| g.slots.iter().map(|s| s.id))
        .collect();
    assert_eq!(main_ids, vec![main_id]);

    let branch_ids: Vec<_> = view.branches[0]
        .days
        .iter()
        .flat_map(|g| g.slots.iter().map(|s| s.id))
        .collect();
    assert_eq!(branch_ids, vec![branch_slot_id]);
}

#[test]
fn club_with_no_data_builds_empty_view() {
    let club_row = club("Dormant Club");

    let view = build_location_schedule(club_row, Vec::new(), &HashMap::new(), &[]);

    assert!(view.main_days.is_empty());
    assert!(view.branches.is_empty());
}
