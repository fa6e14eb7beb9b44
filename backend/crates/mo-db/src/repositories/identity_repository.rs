use crate::{DbError, Result as DbErrorResult};

use mo_core::Identity;

use std::panic::Location;

use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

/// Point lookups and keyed updates on `auth_identities`.
///
/// Stateless: every call runs on the executor handed in, so the caller
/// decides whether it joins an open transaction.
pub struct IdentityRepository;

impl IdentityRepository {
    pub async fn create<'e, E>(executor: E, identity: &Identity) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let created_at = identity.created_at.timestamp();

        sqlx::query(
            r#"
                INSERT INTO auth_identities (id, linked_user_id, version, created_at)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(identity.id.as_str())
        .bind(identity.linked_user_id.as_deref())
        .bind(identity.version.as_str())
        .bind(created_at)
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: &str) -> DbErrorResult<Option<Identity>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query(
            r#"
                SELECT id, linked_user_id, version, created_at
                FROM auth_identities
                WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        row.as_ref().map(identity_from_row).transpose()
    }

    pub async fn exists<'e, E>(executor: E, id: &str) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(1) FROM auth_identities WHERE id = ?")
            .bind(id)
            .fetch_one(executor)
            .await?;

        Ok(count > 0)
    }

    /// Overwrite the external user link. Returns false if no row matched.
    pub async fn update_linked_user<'e, E>(
        executor: E,
        id: &str,
        linked_user_id: &str,
    ) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("UPDATE auth_identities SET linked_user_id = ? WHERE id = ?")
            .bind(linked_user_id)
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Replace the revocation stamp. Returns false if no row matched.
    pub async fn update_version<'e, E>(executor: E, id: &str, version: &str) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("UPDATE auth_identities SET version = ? WHERE id = ?")
            .bind(version)
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn identity_from_row(row: &SqliteRow) -> DbErrorResult<Identity> {
    let created_at: i64 = row.try_get("created_at")?;

    Ok(Identity {
        id: row.try_get("id")?,
        linked_user_id: row.try_get("linked_user_id")?,
        version: row.try_get("version")?,
        created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in auth_identities.created_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
    })
}
