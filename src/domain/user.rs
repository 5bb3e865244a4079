use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{AuthId, AvatarUrl, EmailAddress, UserId, UserName, UserRole};

/// A local user profile.
///
/// Authentication itself is handled by the external identity provider; this
/// row links the provider identity (`auth_id`) to a role-bearing profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: EmailAddress,
    pub name: Option<UserName>,
    pub avatar: Option<AvatarUrl>,
    pub role: UserRole,
    pub email_verified: Option<NaiveDateTime>,
    /// External identity-provider id, absent for profiles created ahead of
    /// the user's first sign-in.
    pub auth_id: Option<AuthId>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Information required to create a new [`User`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewUser {
    pub email: EmailAddress,
    pub name: Option<UserName>,
    pub avatar: Option<AvatarUrl>,
    pub role: UserRole,
    pub auth_id: Option<AuthId>,
    pub email_verified: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
