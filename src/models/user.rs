use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::types::{AuthId, AvatarUrl, EmailAddress, TypeConstraintError, UserName};
use crate::domain::user::{NewUser as DomainNewUser, User as DomainUser};

/// Diesel model representing the `users` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::users)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub role: String,
    pub email_verified: Option<NaiveDateTime>,
    pub auth_id: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`User`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser {
    pub email: String,
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub role: String,
    pub auth_id: Option<String>,
    pub email_verified: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<User> for DomainUser {
    type Error = TypeConstraintError;

    fn try_from(user: User) -> Result<Self, Self::Error> {
        Ok(Self {
            id: user.id.try_into()?,
            email: EmailAddress::new(user.email)?,
            name: user.name.map(UserName::new).transpose()?,
            avatar: user.avatar.map(AvatarUrl::new).transpose()?,
            role: user.role.as_str().try_into()?,
            email_verified: user.email_verified,
            auth_id: user.auth_id.map(AuthId::new).transpose()?,
            created_at: user.created_at,
            updated_at: user.updated_at,
        })
    }
}

impl From<DomainNewUser> for NewUser {
    fn from(user: DomainNewUser) -> Self {
        Self {
            email: user.email.into_inner(),
            name: user.name.map(UserName::into_inner),
            avatar: user.avatar.map(AvatarUrl::into_inner),
            role: user.role.as_str().to_string(),
            auth_id: user.auth_id.map(AuthId::into_inner),
            email_verified: user.email_verified,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
