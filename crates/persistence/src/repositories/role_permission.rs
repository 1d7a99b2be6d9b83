//! Role permission repository for database operations.

use async_trait::async_trait;
use domain::models::RolePermissionFilter;
use shared::pagination::offset_for;
use sqlx::PgPool;

use crate::entities::RolePermissionEntity;

/// Storage collaborator for role permission records.
///
/// Implemented by the PostgreSQL repository; the service layer is written
/// against this trait so its policy can be exercised without a database.
#[async_trait]
pub trait RolePermissionStore: Send + Sync {
    /// Fetch a single record by primary key.
    async fn find_by_id(&self, id: i64) -> Result<Option<RolePermissionEntity>, sqlx::Error>;

    /// Fetch the first record matching the filter, if any.
    async fn find_one(
        &self,
        filter: &RolePermissionFilter,
    ) -> Result<Option<RolePermissionEntity>, sqlx::Error>;

    /// Fetch one page (one-based `page`) ordered by id descending, together
    /// with the total record count. The two queries run sequentially, no
    /// transaction spans them.
    async fn find_page(
        &self,
        page: i64,
        limit: i64,
    ) -> Result<(Vec<RolePermissionEntity>, i64), sqlx::Error>;

    /// Persist an entity. Inserts when the id is unset, otherwise fully
    /// replaces the data fields of the existing row. `created_by` and
    /// `created_at` are never touched by the replace path.
    async fn save(
        &self,
        entity: RolePermissionEntity,
    ) -> Result<RolePermissionEntity, sqlx::Error>;

    /// Delete by primary key, returning the number of rows removed.
    async fn delete_by_id(&self, id: i64) -> Result<u64, sqlx::Error>;

    /// Fetch every record for a role, in storage order.
    async fn find_by_role_id(
        &self,
        role_id: i64,
    ) -> Result<Vec<RolePermissionEntity>, sqlx::Error>;
}

/// PostgreSQL-backed repository for role permission records.
#[derive(Clone)]
pub struct RolePermissionRepository {
    pool: PgPool,
}

impl RolePermissionRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RolePermissionStore for RolePermissionRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<RolePermissionEntity>, sqlx::Error> {
        let entity = sqlx::query_as::<_, RolePermissionEntity>(
            r#"
            SELECT id, role_id, permission_id, value_yn, created_by, updated_by, created_at, updated_at
            FROM role_permissions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entity)
    }

    async fn find_one(
        &self,
        filter: &RolePermissionFilter,
    ) -> Result<Option<RolePermissionEntity>, sqlx::Error> {
        let entity = sqlx::query_as::<_, RolePermissionEntity>(
            r#"
            SELECT id, role_id, permission_id, value_yn, created_by, updated_by, created_at, updated_at
            FROM role_permissions
            WHERE ($1::BIGINT IS NULL OR role_id = $1)
              AND ($2::TEXT IS NULL OR permission_id = $2)
              AND ($3::BOOLEAN IS NULL OR value_yn = $3)
            LIMIT 1
            "#,
        )
        .bind(filter.role_id)
        .bind(filter.permission_id.as_deref())
        .bind(filter.value_yn)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entity)
    }

    async fn find_page(
        &self,
        page: i64,
        limit: i64,
    ) -> Result<(Vec<RolePermissionEntity>, i64), sqlx::Error> {
        let entities = sqlx::query_as::<_, RolePermissionEntity>(
            r#"
            SELECT id, role_id, permission_id, value_yn, created_by, updated_by, created_at, updated_at
            FROM role_permissions
            ORDER BY id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset_for(page, limit))
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM role_permissions")
            .fetch_one(&self.pool)
            .await?;

        Ok((entities, total))
    }

    async fn save(
        &self,
        entity: RolePermissionEntity,
    ) -> Result<RolePermissionEntity, sqlx::Error> {
        let saved = match entity.id {
            Some(id) => {
                sqlx::query_as::<_, RolePermissionEntity>(
                    r#"
                    UPDATE role_permissions
                    SET role_id = $2, permission_id = $3, value_yn = $4,
                        updated_by = $5, updated_at = now()
                    WHERE id = $1
                    RETURNING id, role_id, permission_id, value_yn, created_by, updated_by, created_at, updated_at
                    "#,
                )
                .bind(id)
                .bind(entity.role_id)
                .bind(&entity.permission_id)
                .bind(entity.value_yn)
                .bind(entity.updated_by.as_deref())
                .fetch_one(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, RolePermissionEntity>(
                    r#"
                    INSERT INTO role_permissions (role_id, permission_id, value_yn, created_by, updated_by)
                    VALUES ($1, $2, $3, $4, $5)
                    RETURNING id, role_id, permission_id, value_yn, created_by, updated_by, created_at, updated_at
                    "#,
                )
                .bind(entity.role_id)
                .bind(&entity.permission_id)
                .bind(entity.value_yn)
                .bind(entity.created_by.as_deref())
                .bind(entity.updated_by.as_deref())
                .fetch_one(&self.pool)
                .await?
            }
        };

        Ok(saved)
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM role_permissions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn find_by_role_id(
        &self,
        role_id: i64,
    ) -> Result<Vec<RolePermissionEntity>, sqlx::Error> {
        let entities = sqlx::query_as::<_, RolePermissionEntity>(
            r#"
            SELECT id, role_id, permission_id, value_yn, created_by, updated_by, created_at, updated_at
            FROM role_permissions
            WHERE role_id = $1
            "#,
        )
        .bind(role_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(entities)
    }
}
