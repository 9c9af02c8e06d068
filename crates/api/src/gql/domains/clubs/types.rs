use async_graphql::{InputObject, SimpleObject, ID};
use chrono::{DateTime, Utc};

use crate::gql::domains::branches::types::Branch;

#[derive(SimpleObject, Clone)]
pub struct Club {
    pub id: ID,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<infra::models::ClubRow> for Club {
    fn from(row: infra::models::ClubRow) -> Self {
        Self {
            id: row.id.into(),
            name: row.name,
            address: row.address,
            phone: row.phone,
            email: row.email,
            description: row.description,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(SimpleObject, Clone, Copy)]
pub struct ClubStats {
    pub branch_count: i64,
    pub schedule_slot_count: i64,
    pub coach_count: i64,
}

/// A club together with its branches and headline counts, as shown on the
/// admin club detail page.
#[derive(SimpleObject)]
pub struct ClubOverview {
    pub club: Club,
    pub branches: Vec<Branch>,
    pub stats: ClubStats,
}

#[derive(SimpleObject, Clone)]
pub struct Coach {
    pub id: ID,
    pub club_id: ID,
    pub branch_id: Option<ID>,
    pub first_name: String,
    pub last_name: Option<String>,
    /// Full display name as shown on the branch pages.
    pub display_name: String,
    pub is_manager: bool,
    pub is_active: bool,
}

impl From<infra::models::CoachRow> for Coach {
    fn from(row: infra::models::CoachRow) -> Self {
        let display_name = row.display_name();

        Self {
            id: row.id.into(),
            club_id: row.club_id.into(),
            branch_id: row.branch_id.map(Into::into),
            first_name: row.first_name,
            last_name: row.last_name,
            display_name,
            is_manager: row.is_manager,
            is_active: row.is_active,
        }
    }
}

#[derive(InputObject)]
pub struct CreateClubInput {
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
}

#[derive(InputObject, Default)]
pub struct UpdateClubInput {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}
