use chrono::{NaiveDateTime, Utc};
use serde::Serialize;

use crate::domain::types::{UserId, UserRole};
use crate::domain::user::User;

/// Displayed when a course's instructor row cannot be resolved.
pub const UNKNOWN_INSTRUCTOR_NAME: &str = "Instructor desconocido";

/// Public, safe projection of a user profile.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserPublic {
    /// `None` for the unknown-instructor placeholder.
    pub id: Option<UserId>,
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub role: UserRole,
    pub created_at: NaiveDateTime,
}

impl UserPublic {
    /// Placeholder shown instead of failing when the instructor row is
    /// missing.
    pub fn unknown_instructor() -> Self {
        Self {
            id: None,
            name: Some(UNKNOWN_INSTRUCTOR_NAME.to_string()),
            avatar: None,
            role: UserRole::Teacher,
            created_at: Utc::now().naive_utc(),
        }
    }
}

impl From<User> for UserPublic {
    fn from(user: User) -> Self {
        Self {
            id: Some(user.id),
            name: user.name.map(Into::into),
            avatar: user.avatar.map(Into::into),
            role: user.role,
            created_at: user.created_at,
        }
    }
}
