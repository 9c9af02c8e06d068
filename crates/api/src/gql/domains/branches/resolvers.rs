use async_graphql::{Context, Object, Result, ID};
use uuid::Uuid;

use crate::gql::error::{GqlError, ResultExt};
use crate::state::AppState;
use infra::repos::branches;

use super::types::{Branch, CreateBranchInput};

#[derive(Default)]
pub struct BranchQuery;

#[Object]
impl BranchQuery {
    async fn branches_for_club(&self, ctx: &Context<'_>, club_id: ID) -> Result<Vec<Branch>> {
        let state = ctx.data::<AppState>()?;
        let club_id = Uuid::parse_str(club_id.as_str()).gql_err("Invalid club ID")?;

        let rows = branches::list_by_club(&state.db, club_id)
            .await
            .map_err(GqlError::from)?;
        Ok(rows.into_iter().map(Branch::from).collect())
    }

    async fn branch(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Branch>> {
        let state = ctx.data::<AppState>()?;
        let id = Uuid::parse_str(id.as_str()).gql_err("Invalid branch ID")?;

        let row = branches::get_by_id(&state.db, id)
            .await
            .map_err(GqlError::from)?;
        Ok(row.map(Branch::from))
    }
}

#[derive(Default)]
pub struct BranchMutation;

#[Object]
impl BranchMutation {
    async fn create_branch(&self, ctx: &Context<'_>, input: CreateBranchInput) -> Result<Branch> {
        let state = ctx.data::<AppState>()?;
        let club_id = Uuid::parse_str(input.club_id.as_str()).gql_err("Invalid club ID")?;

        let row = branches::create(
            &state.db,
            branches::CreateBranch {
                club_id,
                name: input.name,
                address: input.address,
                phone: input.phone,
            },
        )
        .await
        .map_err(GqlError::from)?;

        Ok(row.into())
    }

    async fn delete_branch(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        let state = ctx.data::<AppState>()?;
        let id = Uuid::parse_str(id.as_str()).gql_err("Invalid branch ID")?;

        match branches::delete(&state.db, id).await {
            Ok(deleted) => Ok(deleted),
            Err(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation() => {
                Err(GqlError::new("Branch still has schedule slots").into())
            }
            Err(e) => Err(GqlError::from(e).into()),
        }
    }
}
