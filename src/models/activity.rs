use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::activity::{
    NewUserActivity as DomainNewUserActivity, UserActivity as DomainUserActivity,
};
use crate::domain::types::TypeConstraintError;

/// Diesel model representing the append-only `user_activities` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::user_activities)]
pub struct UserActivity {
    pub id: i32,
    pub user_id: i32,
    pub activity_type: String,
    pub description: String,
    pub metadata: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Insertable form of [`UserActivity`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::user_activities)]
pub struct NewUserActivity {
    pub user_id: i32,
    pub activity_type: String,
    pub description: String,
    pub metadata: Option<String>,
    pub created_at: NaiveDateTime,
}

impl TryFrom<UserActivity> for DomainUserActivity {
    type Error = TypeConstraintError;

    fn try_from(activity: UserActivity) -> Result<Self, Self::Error> {
        Ok(Self {
            id: activity.id.try_into()?,
            user_id: activity.user_id.try_into()?,
            activity_type: activity.activity_type.as_str().try_into()?,
            description: activity.description,
            metadata: activity.metadata,
            created_at: activity.created_at,
        })
    }
}

impl From<DomainNewUserActivity> for NewUserActivity {
    fn from(activity: DomainNewUserActivity) -> Self {
        Self {
            user_id: activity.user_id.get(),
            activity_type: activity.activity_type.as_str().to_string(),
            description: activity.description,
            metadata: activity.metadata,
            created_at: activity.created_at,
        }
    }
}
