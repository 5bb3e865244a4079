use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CourseId, EnrollmentId, Progress, UserId};

/// A student's enrollment in a course.
///
/// The core only ever reads enrollments in aggregate (counts); it never
/// mutates individual rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: EnrollmentId,
    pub user_id: UserId,
    pub course_id: CourseId,
    pub progress: Progress,
    pub completed: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
