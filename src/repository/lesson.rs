use diesel::prelude::*;

use crate::domain::lesson::Lesson;
use crate::domain::types::CourseId;
use crate::models::lesson::Lesson as DbLesson;
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, LessonReader};

impl LessonReader for DieselRepository {
    fn list_published_lessons(&self, course_id: CourseId) -> RepositoryResult<Vec<Lesson>> {
        use crate::schema::lessons;

        let mut conn = self.conn()?;

        let items = lessons::table
            .filter(lessons::course_id.eq(course_id.get()))
            .filter(lessons::is_published.eq(true))
            .order(lessons::order.asc())
            .load::<DbLesson>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Lesson>, _>>()?;

        Ok(items)
    }

    fn count_lessons(&self, course_id: CourseId) -> RepositoryResult<usize> {
        use crate::schema::lessons;

        let mut conn = self.conn()?;

        let total = lessons::table
            .filter(lessons::course_id.eq(course_id.get()))
            .count()
            .get_result::<i64>(&mut conn)?;

        Ok(total as usize)
    }
}
