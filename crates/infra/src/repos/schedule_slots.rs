use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::ScheduleSlotRow;

#[derive(Debug, Clone)]
pub struct CreateScheduleSlot {
    pub club_id: Uuid,
    pub branch_id: Option<Uuid>,
    pub day_of_week: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub location: Option<String>,
}

/// Full, unfiltered slot collection. All scope filtering and day grouping
/// happens in the schedule domain, not in SQL, so the query stays a plain
/// scan ordered only for determinism.
pub async fn list<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<Vec<ScheduleSlotRow>> {
    sqlx::query_as::<_, ScheduleSlotRow>(
        r#"
        SELECT id, club_id, branch_id, day_of_week, start_time, end_time,
               location, created_at, updated_at
        FROM schedule_slots
        ORDER BY created_at ASC
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn get_by_id<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
) -> SqlxResult<Option<ScheduleSlotRow>> {
    sqlx::query_as::<_, ScheduleSlotRow>(
        r#"
        SELECT id, club_id, branch_id, day_of_week, start_time, end_time,
               location, created_at, updated_at
        FROM schedule_slots
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn count_by_club<'e>(executor: impl PgExecutor<'e>, club_id: Uuid) -> SqlxResult<i64> {
    sqlx::query_scalar("SELECT COUNT(*) FROM schedule_slots WHERE club_id = $1")
        .bind(club_id)
        .fetch_one(executor)
        .await
}

pub async fn create<'e>(
    executor: impl PgExecutor<'e>,
    data: CreateScheduleSlot,
) -> SqlxResult<ScheduleSlotRow> {
    sqlx::query_as::<_, ScheduleSlotRow>(
        r#"
        INSERT INTO schedule_slots (club_id, branch_id, day_of_week, start_time, end_time, location)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, club_id, branch_id, day_of_week, start_time, end_time,
                  location, created_at, updated_at
        "#,
    )
    .bind(data.club_id)
    .bind(data.branch_id)
    .bind(data.day_of_week)
    .bind(data.start_time)
    .bind(data.end_time)
    .bind(data.location)
    .fetch_one(executor)
    .await
}

pub async fn delete<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> SqlxResult<bool> {
    let result = sqlx::query("DELETE FROM schedule_slots WHERE id = $1")
        .bind(id)
        .execute(executor)
        .await?;

    Ok(result.rows_affected() > 0)
}
