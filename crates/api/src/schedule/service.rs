use std::collections::HashMap;

use futures_util::future::join_all;
use tracing::warn;
use uuid::Uuid;

use infra::db::Db;
use infra::models::BranchRow;
use infra::repos::{branches, clubs, coaches, schedule_slots};

use super::aggregate::{build_location_schedule, LocationSchedule};
use super::grouping::{group_slots, DayGroup, ScheduleScope};

// Fetch boundary for the schedule views. Collaborator failures are caught
// here, logged, and degraded to empty collections so the pure grouping code
// never sees an error; a scope with no data renders as "no schedule
// configured" rather than failing. Only a total inability to reach the
// backend propagates an error.

/// Loads and builds the full per-location view for one club. The club
/// record, its branch list and the slot collection are fetched
/// concurrently; `None` means the club does not exist.
pub async fn load_location_schedule(
    db: &Db,
    club_id: Uuid,
) -> anyhow::Result<Option<LocationSchedule>> {
    let (club_res, branches_res, slots_res) = tokio::join!(
        clubs::get_by_id(db, club_id),
        branches::list_by_club(db, club_id),
        schedule_slots::list(db),
    );

    // Without the club record there is nothing to hang the view on.
    let club = match club_res? {
        Some(club) => club,
        None => return Ok(None),
    };

    let branch_rows = branches_res.unwrap_or_else(|e| {
        warn!(club_id = %club_id, "branch list unavailable, rendering club without branches: {e}");
        Vec::new()
    });
    let slots = slots_res.unwrap_or_else(|e| {
        warn!("schedule slot list unavailable, rendering empty schedules: {e}");
        Vec::new()
    });

    let branch_ids: Vec<Uuid> = branch_rows.iter().map(|b| b.id).collect();
    let manager_names = load_manager_names(db, &branch_ids).await;

    Ok(Some(build_location_schedule(
        club,
        branch_rows,
        &manager_names,
        &slots,
    )))
}

/// Loads the view for every club in the portal. Per-club branch fetches fan
/// out concurrently and are keyed by club id, so completion order is
/// irrelevant; the slot list is fetched in parallel with the club list.
pub async fn load_portal_schedule(db: &Db) -> anyhow::Result<Vec<LocationSchedule>> {
    let (clubs_res, slots_res) = tokio::join!(clubs::list_all(db), schedule_slots::list(db));

    if clubs_res.is_err() && slots_res.is_err() {
        anyhow::bail!("schedule backend unavailable: no collection could be fetched");
    }

    let club_rows = clubs_res.unwrap_or_else(|e| {
        warn!("club list unavailable, rendering empty portal schedule: {e}");
        Vec::new()
    });
    let slots = slots_res.unwrap_or_else(|e| {
        warn!("schedule slot list unavailable, rendering empty schedules: {e}");
        Vec::new()
    });

    let branch_fetches = club_rows
        .iter()
        .map(|club| async move { (club.id, branches::list_by_club(db, club.id).await) });

    let mut branches_by_club: HashMap<Uuid, Vec<BranchRow>> = HashMap::new();
    for (club_id, result) in join_all(branch_fetches).await {
        match result {
            Ok(rows) => {
                branches_by_club.insert(club_id, rows);
            }
            Err(e) => {
                // The club still renders, with an empty branch list; a
                // half-merged branch view is never published.
                warn!(club_id = %club_id, "branch list unavailable for club: {e}");
            }
        }
    }

    let branch_ids: Vec<Uuid> = branches_by_club
        .values()
        .flatten()
        .map(|branch| branch.id)
        .collect();
    let manager_names = load_manager_names(db, &branch_ids).await;

    Ok(club_rows
        .into_iter()
        .map(|club| {
            let branch_rows = branches_by_club.remove(&club.id).unwrap_or_default();
            build_location_schedule(club, branch_rows, &manager_names, &slots)
        })
        .collect())
}

/// Day groups for a single branch, without the surrounding club view. A
/// slot whose `branch_id` matches is included even if the branch record
/// itself is missing; grouping and lookup are independent concerns.
pub async fn load_branch_schedule(db: &Db, branch_id: Uuid) -> anyhow::Result<Vec<DayGroup>> {
    let slots = schedule_slots::list(db).await?;
    Ok(group_slots(&slots, ScheduleScope::Branch(branch_id)))
}

/// Concurrent fan-out over the manager lookups, one per branch. A failed
/// lookup degrades that one branch to the fallback label downstream instead
/// of aborting the aggregation.
async fn load_manager_names(db: &Db, branch_ids: &[Uuid]) -> HashMap<Uuid, String> {
    let lookups = branch_ids
        .iter()
        .map(|&id| async move { (id, coaches::get_manager_for_branch(db, id).await) });

    let mut names = HashMap::new();
    for (branch_id, result) in join_all(lookups).await {
        match result {
            Ok(Some(coach)) => {
                names.insert(branch_id, coach.display_name());
            }
            Ok(None) => {}
            Err(e) => {
                warn!(branch_id = %branch_id, "manager lookup failed, using fallback: {e}");
            }
        }
    }

    names
}
