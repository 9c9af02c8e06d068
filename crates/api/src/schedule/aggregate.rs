use std::collections::HashMap;

use infra::models::{BranchRow, ClubRow, ScheduleSlotRow};
use uuid::Uuid;

use super::grouping::{group_slots, DayGroup, ScheduleScope};

/// Shown when a branch has no assigned manager, or the manager lookup
/// failed and the field degraded.
pub const NO_MANAGER_FALLBACK: &str = "no manager assigned";

#[derive(Debug, Clone)]
pub struct BranchSchedule {
    pub branch: BranchRow,
    pub manager_name: String,
    pub days: Vec<DayGroup>,
}

#[derive(Debug, Clone)]
pub struct LocationSchedule {
    pub club: ClubRow,
    pub main_days: Vec<DayGroup>,
    pub branches: Vec<BranchSchedule>,
}

/// Builds the nested per-location view for one club: the main-location day
/// groups plus one entry per supplied branch.
///
/// Every branch passed in appears in the output exactly once, even with
/// zero slots (explicit empty `days`), so presentation can tell "no
/// schedule configured yet" apart from "branch not loaded". A branch with
/// no entry in `manager_names` gets the fallback literal; a missing display
/// field never suppresses the branch.
pub fn build_location_schedule(
    club: ClubRow,
    branches: Vec<BranchRow>,
    manager_names: &HashMap<Uuid, String>,
    all_slots: &[ScheduleSlotRow],
) -> LocationSchedule {
    let main_days = group_slots(all_slots, ScheduleScope::Club(club.id));

    let branches = branches
        .into_iter()
        .map(|branch| {
            let days = group_slots(all_slots, ScheduleScope::Branch(branch.id));
            let manager_name = manager_names
                .get(&branch.id)
                .cloned()
                .unwrap_or_else(|| NO_MANAGER_FALLBACK.to_string());

            BranchSchedule {
                branch,
                manager_name,
                days,
            }
        })
        .collect();

    LocationSchedule {
        club,
        main_days,
        branches,
    }
}
