use chrono::{DateTime, Utc};

use super::value_objects::UserId;

/// A stored user as exposed to callers. The password never lives here.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub id_document: String,
    pub username: String,
    pub email: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// A validated registration, still carrying the plain password.
#[derive(Debug, Clone)]
pub struct UserRegistration {
    pub id_document: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

/// What gets written to storage on creation.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub id_document: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

impl User {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: UserId,
        id_document: String,
        username: String,
        email: String,
        created_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            id_document,
            username,
            email,
            created_at,
        }
    }

    /// Fixed record served when no database is configured outside production.
    pub fn placeholder() -> Self {
        Self {
            id: UserId::FIRST,
            id_document: "123456789".to_string(),
            username: "testuser".to_string(),
            email: "testuser@example.com".to_string(),
            created_at: None,
        }
    }
}
