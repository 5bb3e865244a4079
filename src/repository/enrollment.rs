use diesel::prelude::*;

use crate::domain::enrollment::Enrollment;
use crate::domain::types::{CourseId, UserId};
use crate::models::enrollment::Enrollment as DbEnrollment;
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, EnrollmentReader};

impl EnrollmentReader for DieselRepository {
    fn count_enrollments(&self, course_id: CourseId) -> RepositoryResult<usize> {
        use crate::schema::enrollments;

        let mut conn = self.conn()?;

        let total = enrollments::table
            .filter(enrollments::course_id.eq(course_id.get()))
            .count()
            .get_result::<i64>(&mut conn)?;

        Ok(total as usize)
    }

    fn list_enrollments(&self, user_id: UserId) -> RepositoryResult<Vec<Enrollment>> {
        use crate::schema::enrollments;

        let mut conn = self.conn()?;

        let items = enrollments::table
            .filter(enrollments::user_id.eq(user_id.get()))
            .order(enrollments::created_at.desc())
            .load::<DbEnrollment>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Enrollment>, _>>()?;

        Ok(items)
    }
}
