use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ClubRow {
    pub id: Uuid,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct BranchRow {
    pub id: Uuid,
    pub club_id: Uuid,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One recurring weekly training block. `day_of_week` is the English day
/// name as stored by the admin screens; `start_time`/`end_time` are raw
/// wall-clock strings (`HH:MM` or `HH:MM:SS`) and may be absent.
///
/// A slot with `branch_id = None` belongs to the club's main location.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ScheduleSlotRow {
    pub id: Uuid,
    pub club_id: Uuid,
    pub branch_id: Option<Uuid>,
    pub day_of_week: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct CoachRow {
    pub id: Uuid,
    pub club_id: Uuid,
    pub branch_id: Option<Uuid>,
    pub first_name: String,
    pub last_name: Option<String>,
    pub is_manager: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CoachRow {
    pub fn display_name(&self) -> String {
        match &self.last_name {
            Some(last) => format!("{} {}", self.first_name, last),
            None => self.first_name.clone(),
        }
    }
}
