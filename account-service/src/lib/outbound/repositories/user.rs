use std::str::FromStr;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::account::errors::RepositoryError;
use crate::domain::account::models::UserRecord;
use crate::domain::account::ports::UserRepository;

/// Name Postgres assigns to the unique index behind `users.email`; see the
/// migrations.
const EMAIL_UNIQUE_CONSTRAINT: &str = "users_email_key";

/// Column rules the `users` schema imposes on a record: name length bounds
/// and an RFC-shaped email. Checked before the insert is attempted.
/// Presence rules stay with the flow's validator; these belong to the
/// store.
pub fn check_record(record: &UserRecord) -> Result<(), RepositoryError> {
    let name_length = record.name.chars().count();
    if !(4..=50).contains(&name_length) {
        return Err(RepositoryError::SchemaViolation(
            "name must be between 4 and 50 characters".to_string(),
        ));
    }

    if email_address::EmailAddress::from_str(&record.email).is_err() {
        return Err(RepositoryError::SchemaViolation(
            "email must be a valid email address".to_string(),
        ));
    }

    Ok(())
}

/// Postgres implementation of the repository port.
///
/// Uniqueness comes from the `users_email_key` constraint, never from a
/// read-then-write: the insert is attempted and a constraint violation is
/// translated afterwards, so concurrent registrations race safely.
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Row shape for the login lookup; exactly the projection the flows read.
#[derive(sqlx::FromRow)]
struct UserRow {
    name: String,
    email: String,
    password_hash: String,
}

impl From<UserRow> for UserRecord {
    fn from(row: UserRow) -> Self {
        Self {
            name: row.name,
            email: row.email,
            password_hash: row.password_hash,
        }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, record: UserRecord) -> Result<(), RepositoryError> {
        check_record(&record)?;

        sqlx::query(
            r#"
            INSERT INTO users (name, email, password_hash)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(&record.name)
        .bind(&record.email)
        .bind(&record.password_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_error) = e.as_database_error() {
                if db_error.is_unique_violation()
                    && db_error.constraint() == Some(EMAIL_UNIQUE_CONSTRAINT)
                {
                    return RepositoryError::UniqueViolation {
                        constraint: EMAIL_UNIQUE_CONSTRAINT.to_string(),
                    };
                }
            }
            RepositoryError::Database(e.to_string())
        })?;

        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT name, email, password_hash
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(row.map(UserRecord::from))
    }
}
