use infra::models::ScheduleSlotRow;
use uuid::Uuid;

use super::daytime::{normalize_time, WEEKDAY_ORDER};

/// Filter key selecting which slots belong to one grouping call: a club's
/// main location or a specific branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleScope {
    /// Main-location view: slots of this club that carry no branch.
    Club(Uuid),
    /// All slots attributed to this branch.
    Branch(Uuid),
}

impl ScheduleScope {
    fn matches(&self, slot: &ScheduleSlotRow) -> bool {
        match *self {
            // Branch-attributed slots are excluded here so a page rendering
            // the club schedule next to each branch schedule never shows a
            // slot twice.
            ScheduleScope::Club(club_id) => slot.club_id == club_id && slot.branch_id.is_none(),
            ScheduleScope::Branch(branch_id) => slot.branch_id == Some(branch_id),
        }
    }
}

/// A weekday token paired with the time-ordered slots for that day, for one
/// scope. Computed per aggregation call and never cached.
#[derive(Debug, Clone)]
pub struct DayGroup {
    pub day: String,
    pub slots: Vec<ScheduleSlotRow>,
}

/// Groups the slots matching `scope` by weekday.
///
/// Canonical days come first in Monday..Sunday order; any unrecognized day
/// token gets its own group appended after them in first-seen order, so a
/// malformed record is surfaced rather than dropped. Days with no matching
/// slots are omitted entirely. Within a day the sort is stable ascending by
/// normalized start time, with a missing start keying as `""` and therefore
/// sorting first.
///
/// Total over its input: every matching slot appears exactly once and the
/// function never errors.
pub fn group_slots(all_slots: &[ScheduleSlotRow], scope: ScheduleScope) -> Vec<DayGroup> {
    let matching: Vec<&ScheduleSlotRow> =
        all_slots.iter().filter(|slot| scope.matches(slot)).collect();

    let mut day_order: Vec<&str> = WEEKDAY_ORDER.to_vec();
    for slot in &matching {
        if !day_order.contains(&slot.day_of_week.as_str()) {
            day_order.push(slot.day_of_week.as_str());
        }
    }

    let mut groups = Vec::new();
    for day in day_order {
        let mut slots: Vec<ScheduleSlotRow> = matching
            .iter()
            .filter(|slot| slot.day_of_week == day)
            .map(|slot| (*slot).clone())
            .collect();

        if slots.is_empty() {
            continue;
        }

        slots.sort_by_key(|slot| normalize_time(slot.start_time.as_deref()));
        groups.push(DayGroup {
            day: day.to_string(),
            slots,
        });
    }

    groups
}
