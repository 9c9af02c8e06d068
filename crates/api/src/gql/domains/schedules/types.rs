use async_graphql::dataloader::DataLoader;
use async_graphql::{ComplexObject, Context, InputObject, Result, SimpleObject, ID};
use uuid::Uuid;

use crate::gql::domains::branches::types::Branch;
use crate::gql::domains::clubs::types::Club;
use crate::gql::error::ResultExt;
use crate::gql::loaders::{BranchLoader, ClubLoader};
use crate::schedule;
use crate::schedule::{canonical_day_label, format_time_range};

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct ScheduleSlot {
    pub id: ID,
    pub club_id: ID,
    pub branch_id: Option<ID>,
    /// Raw weekday token as stored; see `DayGroup.label` for display.
    pub day_of_week: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    /// Preformatted `"HH:MM - HH:MM"` display string (one side alone when
    /// the other is missing).
    pub time_range: String,
    pub location: Option<String>,
}

#[ComplexObject]
impl ScheduleSlot {
    async fn club(&self, ctx: &Context<'_>) -> Result<Option<Club>> {
        let loader = ctx.data::<DataLoader<ClubLoader>>()?;
        let id = Uuid::parse_str(self.club_id.as_str()).gql_err("Invalid club ID")?;
        Ok(loader.load_one(id).await?.map(Club::from))
    }

    async fn branch(&self, ctx: &Context<'_>) -> Result<Option<Branch>> {
        let Some(branch_id) = &self.branch_id else {
            return Ok(None);
        };

        let loader = ctx.data::<DataLoader<BranchLoader>>()?;
        let id = Uuid::parse_str(branch_id.as_str()).gql_err("Invalid branch ID")?;
        Ok(loader.load_one(id).await?.map(Branch::from))
    }
}

impl From<infra::models::ScheduleSlotRow> for ScheduleSlot {
    fn from(row: infra::models::ScheduleSlotRow) -> Self {
        let time_range = format_time_range(row.start_time.as_deref(), row.end_time.as_deref());

        Self {
            id: row.id.into(),
            club_id: row.club_id.into(),
            branch_id: row.branch_id.map(Into::into),
            day_of_week: row.day_of_week,
            start_time: row.start_time,
            end_time: row.end_time,
            time_range,
            location: row.location,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct DayGroup {
    /// Weekday token the slots were grouped under (raw for unrecognized
    /// values).
    pub day: String,
    /// Display label; passes unrecognized tokens through unchanged.
    pub label: String,
    pub slots: Vec<ScheduleSlot>,
}

impl From<schedule::DayGroup> for DayGroup {
    fn from(group: schedule::DayGroup) -> Self {
        let label = canonical_day_label(&group.day).to_string();

        Self {
            day: group.day,
            label,
            slots: group.slots.into_iter().map(ScheduleSlot::from).collect(),
        }
    }
}

#[derive(SimpleObject)]
pub struct BranchSchedule {
    pub branch: Branch,
    /// Display name of the assigned manager, or the fallback literal when
    /// none is assigned or the lookup degraded.
    pub manager_name: String,
    pub days: Vec<DayGroup>,
}

impl From<schedule::BranchSchedule> for BranchSchedule {
    fn from(bs: schedule::BranchSchedule) -> Self {
        Self {
            branch: bs.branch.into(),
            manager_name: bs.manager_name,
            days: bs.days.into_iter().map(DayGroup::from).collect(),
        }
    }
}

#[derive(SimpleObject)]
pub struct LocationSchedule {
    pub club: Club,
    /// Day groups for the club's main location (slots with no branch).
    pub main_days: Vec<DayGroup>,
    /// One entry per known branch, present even when it has no slots.
    pub branches: Vec<BranchSchedule>,
}

impl From<schedule::LocationSchedule> for LocationSchedule {
    fn from(ls: schedule::LocationSchedule) -> Self {
        Self {
            club: ls.club.into(),
            main_days: ls.main_days.into_iter().map(DayGroup::from).collect(),
            branches: ls.branches.into_iter().map(BranchSchedule::from).collect(),
        }
    }
}

#[derive(InputObject)]
pub struct CreateScheduleSlotInput {
    pub club_id: ID,
    /// Omit for a slot at the club's main location.
    pub branch_id: Option<ID>,
    pub day_of_week: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub location: Option<String>,
}
