use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::ClubRow;
use crate::pagination::LimitOffset;

#[derive(Debug, Clone)]
pub struct CreateClub {
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateClub {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

pub async fn list<'e>(
    executor: impl PgExecutor<'e>,
    page: Option<LimitOffset>,
) -> SqlxResult<Vec<ClubRow>> {
    let p = page.unwrap_or_default();

    sqlx::query_as::<_, ClubRow>(
        r#"
        SELECT id, name, address, phone, email, description, is_active,
               created_at, updated_at
        FROM clubs
        ORDER BY name ASC
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(p.limit)
    .bind(p.offset)
    .fetch_all(executor)
    .await
}

/// Full collection, no paging: the portal-wide schedule view filters and
/// groups client-side and must see every club.
pub async fn list_all<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<Vec<ClubRow>> {
    sqlx::query_as::<_, ClubRow>(
        r#"
        SELECT id, name, address, phone, email, description, is_active,
               created_at, updated_at
        FROM clubs
        ORDER BY name ASC
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn get_by_id<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> SqlxResult<Option<ClubRow>> {
    sqlx::query_as::<_, ClubRow>(
        r#"
        SELECT id, name, address, phone, email, description, is_active,
               created_at, updated_at
        FROM clubs
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn create<'e>(executor: impl PgExecutor<'e>, data: CreateClub) -> SqlxResult<ClubRow> {
    sqlx::query_as::<_, ClubRow>(
        r#"
        INSERT INTO clubs (name, address, phone, email, description)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, name, address, phone, email, description, is_active,
                  created_at, updated_at
        "#,
    )
    .bind(data.name)
    .bind(data.address)
    .bind(data.phone)
    .bind(data.email)
    .bind(data.description)
    .fetch_one(executor)
    .await
}

pub async fn update<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
    data: UpdateClub,
) -> SqlxResult<Option<ClubRow>> {
    sqlx::query_as::<_, ClubRow>(
        r#"
        UPDATE clubs
        SET name = COALESCE($2, name),
            address = COALESCE($3, address),
            phone = COALESCE($4, phone),
            email = COALESCE($5, email),
            description = COALESCE($6, description),
            is_active = COALESCE($7, is_active),
            updated_at = NOW()
        WHERE id = $1
        RETURNING id, name, address, phone, email, description, is_active,
                  created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(data.name)
    .bind(data.address)
    .bind(data.phone)
    .bind(data.email)
    .bind(data.description)
    .bind(data.is_active)
    .fetch_optional(executor)
    .await
}

/// Fails with a foreign-key violation while branches, slots or coaches still
/// reference the club; callers surface that as a user-facing error.
pub async fn delete<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> SqlxResult<bool> {
    let result = sqlx::query("DELETE FROM clubs WHERE id = $1")
        .bind(id)
        .execute(executor)
        .await?;

    Ok(result.rows_affected() > 0)
}
