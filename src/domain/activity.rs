use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{ActivityId, ActivityType, UserId};

/// A row of the append-only user activity log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserActivity {
    pub id: ActivityId,
    pub user_id: UserId,
    pub activity_type: ActivityType,
    pub description: String,
    /// Serialized JSON payload describing the event.
    pub metadata: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Information required to append a [`UserActivity`] row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUserActivity {
    pub user_id: UserId,
    pub activity_type: ActivityType,
    pub description: String,
    pub metadata: Option<String>,
    pub created_at: NaiveDateTime,
}
