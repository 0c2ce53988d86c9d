//! Users

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User record from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// Stored as given; never echoed back out.
    #[serde(skip_serializing, default)]
    pub password: String,
}

/// Insert payload for `users`
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}
