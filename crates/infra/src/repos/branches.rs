use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::BranchRow;

#[derive(Debug, Clone)]
pub struct CreateBranch {
    pub club_id: Uuid,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
}

pub async fn list_by_club<'e>(
    executor: impl PgExecutor<'e>,
    club_id: Uuid,
) -> SqlxResult<Vec<BranchRow>> {
    sqlx::query_as::<_, BranchRow>(
        r#"
        SELECT id, club_id, name, address, phone, is_active, created_at, updated_at
        FROM branches
        WHERE club_id = $1
        ORDER BY name ASC
        "#,
    )
    .bind(club_id)
    .fetch_all(executor)
    .await
}

pub async fn get_by_id<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
) -> SqlxResult<Option<BranchRow>> {
    sqlx::query_as::<_, BranchRow>(
        r#"
        SELECT id, club_id, name, address, phone, is_active, created_at, updated_at
        FROM branches
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn create<'e>(executor: impl PgExecutor<'e>, data: CreateBranch) -> SqlxResult<BranchRow> {
    sqlx::query_as::<_, BranchRow>(
        r#"
        INSERT INTO branches (club_id, name, address, phone)
        VALUES ($1, $2, $3, $4)
        RETURNING id, club_id, name, address, phone, is_active, created_at, updated_at
        "#,
    )
    .bind(data.club_id)
    .bind(data.name)
    .bind(data.address)
    .bind(data.phone)
    .fetch_one(executor)
    .await
}

pub async fn delete<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> SqlxResult<bool> {
    let result = sqlx::query("DELETE FROM branches WHERE id = $1")
        .bind(id)
        .execute(executor)
        .await?;

    Ok(result.rows_affected() > 0)
}
