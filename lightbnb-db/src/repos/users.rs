//! User repository
//!
//! - lookup by email: case-insensitive, at most one row
//! - lookup by id: primary key
//! - create: INSERT ... RETURNING the assigned id

use sqlx::PgPool;
use tracing::{debug, error};

use crate::error::{DbError, Result};
use crate::models::{NewUser, User};

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a single user given their email, ignoring case.
    pub async fn get_by_email(&self, email: &str) -> Result<User> {
        debug!(email, "fetching user by email");

        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password
            FROM users
            WHERE LOWER(email) = LOWER($1)
            LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await
        .inspect_err(|e| error!(email, error = %e, "get user by email failed"))?
        .ok_or_else(|| DbError::not_found("user", email))
    }

    /// Get a single user given their id.
    pub async fn get_by_id(&self, id: i32) -> Result<User> {
        debug!(id, "fetching user by id");

        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password
            FROM users
            WHERE id = $1
            LIMIT 1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .inspect_err(|e| error!(id, error = %e, "get user by id failed"))?
        .ok_or_else(|| DbError::not_found("user", id))
    }

    /// Add a new user, returning the stored row with its id.
    ///
    /// A duplicate email is reported as `DbError::Conflict`.
    pub async fn create(&self, user: &NewUser) -> Result<User> {
        debug!(email = %user.email, "creating user");

        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, password
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password)
        .fetch_one(self.pool)
        .await
        .map_err(|e| DbError::from_insert("user", e))
        .inspect_err(|e| error!(email = %user.email, error = %e, "create user failed"))
    }
}
