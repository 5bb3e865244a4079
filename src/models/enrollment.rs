use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::enrollment::Enrollment as DomainEnrollment;
use crate::domain::types::{Progress, TypeConstraintError};

/// Diesel model representing the `enrollments` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::enrollments)]
pub struct Enrollment {
    pub id: i32,
    pub user_id: i32,
    pub course_id: i32,
    pub progress: i32,
    pub completed: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Enrollment> for DomainEnrollment {
    type Error = TypeConstraintError;

    fn try_from(enrollment: Enrollment) -> Result<Self, Self::Error> {
        Ok(Self {
            id: enrollment.id.try_into()?,
            user_id: enrollment.user_id.try_into()?,
            course_id: enrollment.course_id.try_into()?,
            progress: Progress::new(enrollment.progress)?,
            completed: enrollment.completed,
            created_at: enrollment.created_at,
            updated_at: enrollment.updated_at,
        })
    }
}
