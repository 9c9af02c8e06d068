use async_graphql::{Context, Object, Result, ID};
use uuid::Uuid;

use crate::gql::error::{GqlError, ResultExt};
use crate::schedule::service;
use crate::state::AppState;
use infra::repos::schedule_slots;

use super::types::{
    CreateScheduleSlotInput, DayGroup, LocationSchedule, ScheduleSlot,
};

#[derive(Default)]
pub struct ScheduleQuery;

#[Object]
impl ScheduleQuery {
    /// The full, unfiltered slot collection. Scope filtering and day
    /// grouping are the aggregation engine's job, not the query's.
    async fn schedule_slots(&self, ctx: &Context<'_>) -> Result<Vec<ScheduleSlot>> {
        let state = ctx.data::<AppState>()?;

        let rows = schedule_slots::list(&state.db)
            .await
            .map_err(GqlError::from)?;
        Ok(rows.into_iter().map(ScheduleSlot::from).collect())
    }

    /// Per-location schedule view for one club: main-location day groups
    /// plus one entry per branch. `null` when the club does not exist.
    async fn location_schedule(
        &self,
        ctx: &Context<'_>,
        club_id: ID,
    ) -> Result<Option<LocationSchedule>> {
        let state = ctx.data::<AppState>()?;
        let club_id = Uuid::parse_str(club_id.as_str()).gql_err("Invalid club ID")?;

        let view = service::load_location_schedule(&state.db, club_id)
            .await
            .gql_err("Failed to load location schedule")?;
        Ok(view.map(LocationSchedule::from))
    }

    /// Location schedule views for every club in the portal.
    async fn portal_schedule(&self, ctx: &Context<'_>) -> Result<Vec<LocationSchedule>> {
        let state = ctx.data::<AppState>()?;

        let views = service::load_portal_schedule(&state.db)
            .await
            .gql_err("Failed to load portal schedule")?;
        Ok(views.into_iter().map(LocationSchedule::from).collect())
    }

    /// Day groups for a single branch.
    async fn branch_schedule(&self, ctx: &Context<'_>, branch_id: ID) -> Result<Vec<DayGroup>> {
        let state = ctx.data::<AppState>()?;
        let branch_id = Uuid::parse_str(branch_id.as_str()).gql_err("Invalid branch ID")?;

        let groups = service::load_branch_schedule(&state.db, branch_id)
            .await
            .gql_err("Failed to load branch schedule")?;
        Ok(groups.into_iter().map(DayGroup::from).collect())
    }
}

#[derive(Default)]
pub struct ScheduleMutation;

#[Object]
impl ScheduleMutation {
    /// Creates a recurring weekly slot. Day and time strings are stored as
    /// given; the grouping engine tolerates malformed values instead of
    /// this mutation rejecting them, matching the admin screens.
    async fn create_schedule_slot(
        &self,
        ctx: &Context<'_>,
        input: CreateScheduleSlotInput,
    ) -> Result<ScheduleSlot> {
        let state = ctx.data::<AppState>()?;
        let club_id = Uuid::parse_str(input.club_id.as_str()).gql_err("Invalid club ID")?;
        let branch_id = match &input.branch_id {
            Some(id) => Some(Uuid::parse_str(id.as_str()).gql_err("Invalid branch ID")?),
            None => None,
        };

        let row = schedule_slots::create(
            &state.db,
            schedule_slots::CreateScheduleSlot {
                club_id,
                branch_id,
                day_of_week: input.day_of_week,
                start_time: input.start_time,
                end_time: input.end_time,
                location: input.location,
            },
        )
        .await
        .map_err(GqlError::from)?;

        Ok(row.into())
    }

    async fn delete_schedule_slot(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        let state = ctx.data::<AppState>()?;
        let id = Uuid::parse_str(id.as_str()).gql_err("Invalid schedule slot ID")?;

        let deleted = schedule_slots::delete(&state.db, id)
            .await
            .map_err(GqlError::from)?;
        Ok(deleted)
    }
}
