use async_graphql::{Context, Object, Result, ID};
use uuid::Uuid;

use crate::gql::domains::branches::types::Branch;
use crate::gql::error::{GqlError, ResultExt};
use crate::state::AppState;
use infra::pagination::LimitOffset;
use infra::repos::{branches, clubs, coaches, schedule_slots};

use super::types::{Club, ClubOverview, ClubStats, Coach, CreateClubInput, UpdateClubInput};

#[derive(Default)]
pub struct ClubQuery;

#[Object]
impl ClubQuery {
    async fn clubs(
        &self,
        ctx: &Context<'_>,
        limit: Option<i32>,
        offset: Option<i32>,
    ) -> Result<Vec<Club>> {
        let state = ctx.data::<AppState>()?;

        let page = if limit.is_none() && offset.is_none() {
            None
        } else {
            Some(LimitOffset::new(
                i64::from(limit.unwrap_or(100)),
                i64::from(offset.unwrap_or(0)),
            ))
        };

        let rows = clubs::list(&state.db, page).await.map_err(GqlError::from)?;
        Ok(rows.into_iter().map(Club::from).collect())
    }

    async fn club(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Club>> {
        let state = ctx.data::<AppState>()?;
        let id = Uuid::parse_str(id.as_str()).gql_err("Invalid club ID")?;

        let row = clubs::get_by_id(&state.db, id)
            .await
            .map_err(GqlError::from)?;
        Ok(row.map(Club::from))
    }

    async fn coaches_for_club(&self, ctx: &Context<'_>, club_id: ID) -> Result<Vec<Coach>> {
        let state = ctx.data::<AppState>()?;
        let club_id = Uuid::parse_str(club_id.as_str()).gql_err("Invalid club ID")?;

        let rows = coaches::list_by_club(&state.db, club_id)
            .await
            .map_err(GqlError::from)?;
        Ok(rows.into_iter().map(Coach::from).collect())
    }

    /// Club detail with its branches and headline counts, as rendered by
    /// the admin club page.
    async fn club_overview(&self, ctx: &Context<'_>, club_id: ID) -> Result<ClubOverview> {
        let state = ctx.data::<AppState>()?;
        let id = Uuid::parse_str(club_id.as_str()).gql_err("Invalid club ID")?;

        let club = clubs::get_by_id(&state.db, id)
            .await
            .map_err(GqlError::from)?
            .ok_or_else(|| GqlError::new("Club not found"))?;

        let (branches_res, slot_count_res, coach_count_res) = tokio::join!(
            branches::list_by_club(&state.db, id),
            schedule_slots::count_by_club(&state.db, id),
            coaches::count_by_club(&state.db, id),
        );

        let branch_rows = branches_res.map_err(GqlError::from)?;
        let schedule_slot_count = slot_count_res.map_err(GqlError::from)?;
        let coach_count = coach_count_res.map_err(GqlError::from)?;

        Ok(ClubOverview {
            stats: ClubStats {
                branch_count: branch_rows.len() as i64,
                schedule_slot_count,
                coach_count,
            },
            branches: branch_rows.into_iter().map(Branch::from).collect(),
            club: club.into(),
        })
    }
}

#[derive(Default)]
pub struct ClubMutation;

#[Object]
impl ClubMutation {
    async fn create_club(&self, ctx: &Context<'_>, input: CreateClubInput) -> Result<Club> {
        let state = ctx.data::<AppState>()?;

        let row = clubs::create(
            &state.db,
            clubs::CreateClub {
                name: input.name,
                address: input.address,
                phone: input.phone,
                email: input.email,
                description: input.description,
            },
        )
        .await
        .map_err(GqlError::from)?;

        Ok(row.into())
    }

    async fn update_club(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UpdateClubInput,
    ) -> Result<Club> {
        let state = ctx.data::<AppState>()?;
        let id = Uuid::parse_str(id.as_str()).gql_err("Invalid club ID")?;

        let row = clubs::update(
            &state.db,
            id,
            clubs::UpdateClub {
                name: input.name,
                address: input.address,
                phone: input.phone,
                email: input.email,
                description: input.description,
                is_active: input.is_active,
            },
        )
        .await
        .map_err(GqlError::from)?
        .ok_or_else(|| GqlError::new("Club not found"))?;

        Ok(row.into())
    }

    /// Deletes a club. Refused while branches, coaches or schedule slots
    /// still reference it; referential integrity lives in the database, not
    /// here.
    async fn delete_club(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        let state = ctx.data::<AppState>()?;
        let id = Uuid::parse_str(id.as_str()).gql_err("Invalid club ID")?;

        match clubs::delete(&state.db, id).await {
            Ok(deleted) => Ok(deleted),
            Err(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation() => Err(
                GqlError::new("Club still has branches, coaches or schedule slots").into(),
            ),
            Err(e) => Err(GqlError::from(e).into()),
        }
    }
}
