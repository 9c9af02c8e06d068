use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::CoachRow;

pub async fn list_by_club<'e>(
    executor: impl PgExecutor<'e>,
    club_id: Uuid,
) -> SqlxResult<Vec<CoachRow>> {
    sqlx::query_as::<_, CoachRow>(
        r#"
        SELECT id, club_id, branch_id, first_name, last_name, is_manager,
               is_active, created_at, updated_at
        FROM coaches
        WHERE club_id = $1
        ORDER BY first_name ASC
        "#,
    )
    .bind(club_id)
    .fetch_all(executor)
    .await
}

/// The coach flagged as manager for a branch, if one is assigned.
pub async fn get_manager_for_branch<'e>(
    executor: impl PgExecutor<'e>,
    branch_id: Uuid,
) -> SqlxResult<Option<CoachRow>> {
    sqlx::query_as::<_, CoachRow>(
        r#"
        SELECT id, club_id, branch_id, first_name, last_name, is_manager,
               is_active, created_at, updated_at
        FROM coaches
        WHERE branch_id = $1 AND is_manager = TRUE AND is_active = TRUE
        ORDER BY created_at ASC
        LIMIT 1
        "#,
    )
    .bind(branch_id)
    .fetch_optional(executor)
    .await
}

pub async fn count_by_club<'e>(executor: impl PgExecutor<'e>, club_id: Uuid) -> SqlxResult<i64> {
    sqlx::query_scalar("SELECT COUNT(*) FROM coaches WHERE club_id = $1")
        .bind(club_id)
        .fetch_one(executor)
        .await
}
