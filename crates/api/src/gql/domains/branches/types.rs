use async_graphql::{InputObject, SimpleObject, ID};
use chrono::{DateTime, Utc};

#[derive(SimpleObject, Clone)]
pub struct Branch {
    pub id: ID,
    pub club_id: ID,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<infra::models::BranchRow> for Branch {
    fn from(row: infra::models::BranchRow) -> Self {
        Self {
            id: row.id.into(),
            club_id: row.club_id.into(),
            name: row.name,
            address: row.address,
            phone: row.phone,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(InputObject)]
pub struct CreateBranchInput {
    pub club_id: ID,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
}
