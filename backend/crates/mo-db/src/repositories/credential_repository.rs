use crate::{DbError, Result as DbErrorResult};

use mo_core::Credential;

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

/// Email-keyed storage for password credentials.
pub struct CredentialRepository;

impl CredentialRepository {
    /// Insert a credential. Bookkeeping timestamps are stamped here, not by the
    /// caller. A second credential for the same email fails with a unique
    /// violation (see `DbError::is_unique_violation`).
    pub async fn create<'e, E>(executor: E, credential: &Credential) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let now = Utc::now().timestamp();

        sqlx::query(
            r#"
                INSERT INTO auth_credentials (email, password_hash, identity_id, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(credential.email.as_str())
        .bind(credential.password_hash.as_str())
        .bind(credential.identity_id.as_str())
        .bind(now)
        .bind(now)
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_email<'e, E>(executor: E, email: &str) -> DbErrorResult<Option<Credential>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query(
            r#"
                SELECT email, password_hash, identity_id, created_at, updated_at
                FROM auth_credentials
                WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(executor)
        .await?;

        row.as_ref().map(credential_from_row).transpose()
    }

    pub async fn exists<'e, E>(executor: E, email: &str) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(1) FROM auth_credentials WHERE email = ?")
                .bind(email)
                .fetch_one(executor)
                .await?;

        Ok(count > 0)
    }
}

fn credential_from_row(row: &SqliteRow) -> DbErrorResult<Credential> {
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    Ok(Credential {
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
        identity_id: row.try_get("identity_id")?,
        created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in auth_credentials.created_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
        updated_at: DateTime::from_timestamp(updated_at, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in auth_credentials.updated_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
    })
}
