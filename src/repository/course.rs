use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::course::{Course, NewCourse};
use crate::domain::types::{CourseId, CourseSortField, CourseStatus, SortDirection, SubcategoryId};
use crate::models::course::{Course as DbCourse, NewCourse as DbNewCourse};
use crate::repository::errors::RepositoryResult;
use crate::repository::{CourseListQuery, CourseReader, CourseWriter, DieselRepository};

impl CourseReader for DieselRepository {
    fn list_courses(&self, query: CourseListQuery) -> RepositoryResult<(usize, Vec<Course>)> {
        use crate::schema::courses;

        let mut conn = self.conn()?;

        let query_builder = || {
            let mut items = courses::table.into_boxed::<diesel::sqlite::Sqlite>();

            if let Some(status) = query.status {
                items = items.filter(courses::status.eq(status.as_str()));
            }

            if let Some(search) = &query.search {
                // SQLite LIKE is case-insensitive for ASCII.
                let pattern = format!("%{search}%");
                items = items.filter(
                    courses::title
                        .like(pattern.clone())
                        .or(courses::description.like(pattern.clone()))
                        .or(courses::short_desc.like(pattern)),
                );
            }

            if let Some(category_id) = query.category_id {
                items = items.filter(courses::category_id.eq(category_id.get()));
            }

            if let Some(subcategory_id) = query.subcategory_id {
                items = items.filter(courses::subcategory_id.eq(subcategory_id.get()));
            }

            if let Some(level) = query.level {
                items = items.filter(courses::level.eq(level.as_str()));
            }

            if let Some(price_min) = query.price_min {
                items = items.filter(courses::price.ge(price_min));
            }

            if let Some(price_max) = query.price_max {
                items = items.filter(courses::price.le(price_max));
            }

            if query.featured {
                items = items.filter(courses::featured.eq(true));
            }

            if let Some(instructor_id) = query.instructor_id {
                items = items.filter(courses::instructor_id.eq(instructor_id.get()));
            }

            items
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = query_builder();

        // Enrollment counts live in a separate table, so popularity ordering
        // happens in the service layer; the database falls back to recency.
        let field = match query.sort.field {
            CourseSortField::Enrollments => CourseSortField::CreatedAt,
            field => field,
        };
        items = match (field, query.sort.direction) {
            (CourseSortField::Price, SortDirection::Asc) => items.order(courses::price.asc()),
            (CourseSortField::Price, SortDirection::Desc) => items.order(courses::price.desc()),
            (CourseSortField::Title, SortDirection::Asc) => items.order(courses::title.asc()),
            (CourseSortField::Title, SortDirection::Desc) => items.order(courses::title.desc()),
            (_, SortDirection::Asc) => items.order(courses::created_at.asc()),
            (_, SortDirection::Desc) => items.order(courses::created_at.desc()),
        };

        // Apply pagination if requested. Page and size come straight from
        // the query string, so the offset math saturates instead of
        // overflowing.
        if let Some(pagination) = &query.pagination {
            let offset = pagination
                .page
                .max(1)
                .saturating_sub(1)
                .saturating_mul(pagination.per_page)
                .min(i64::MAX as usize) as i64;
            let limit = pagination.per_page.min(i64::MAX as usize) as i64;
            items = items.offset(offset).limit(limit);
        }

        let items = items
            .load::<DbCourse>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Course>, _>>()?;

        Ok((total, items))
    }

    fn get_course_by_id(&self, id: CourseId) -> RepositoryResult<Option<Course>> {
        use crate::schema::courses;

        let mut conn = self.conn()?;

        let course = courses::table
            .filter(courses::id.eq(id.get()))
            .first::<DbCourse>(&mut conn)
            .optional()?;

        let course = course.map(TryInto::try_into).transpose()?;
        Ok(course)
    }

    fn get_course_by_slug(&self, slug: &str) -> RepositoryResult<Option<Course>> {
        use crate::schema::courses;

        let mut conn = self.conn()?;

        let course = courses::table
            .filter(courses::slug.eq(slug))
            .first::<DbCourse>(&mut conn)
            .optional()?;

        let course = course.map(TryInto::try_into).transpose()?;
        Ok(course)
    }

    fn slug_exists(&self, slug: &str) -> RepositoryResult<bool> {
        use crate::schema::courses;

        let mut conn = self.conn()?;

        let total = courses::table
            .filter(courses::slug.eq(slug))
            .count()
            .get_result::<i64>(&mut conn)?;

        Ok(total > 0)
    }

    fn count_published_by_subcategory(
        &self,
        subcategory_id: SubcategoryId,
    ) -> RepositoryResult<usize> {
        use crate::schema::courses;

        let mut conn = self.conn()?;

        let total = courses::table
            .filter(courses::subcategory_id.eq(subcategory_id.get()))
            .filter(courses::status.eq(CourseStatus::Published.as_str()))
            .count()
            .get_result::<i64>(&mut conn)?;

        Ok(total as usize)
    }
}

impl CourseWriter for DieselRepository {
    fn create_course(&self, course: &NewCourse) -> RepositoryResult<Course> {
        use crate::schema::courses;

        let mut conn = self.conn()?;
        let db_course: DbNewCourse = course.clone().into();

        let created = diesel::insert_into(courses::table)
            .values(db_course)
            .get_result::<DbCourse>(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn set_course_status(
        &self,
        id: CourseId,
        status: CourseStatus,
        published_at: Option<NaiveDateTime>,
    ) -> RepositoryResult<usize> {
        use crate::schema::courses;

        let mut conn = self.conn()?;

        let target = courses::table.filter(courses::id.eq(id.get()));

        // A publication stamp doubles as the modification time so the row
        // carries one consistent timestamp.
        let affected = match published_at {
            Some(published_at) => diesel::update(target)
                .set((
                    courses::status.eq(status.as_str()),
                    courses::published_at.eq(published_at),
                    courses::updated_at.eq(published_at),
                ))
                .execute(&mut conn)?,
            None => diesel::update(target)
                .set((
                    courses::status.eq(status.as_str()),
                    courses::updated_at.eq(diesel::dsl::now),
                ))
                .execute(&mut conn)?,
        };

        Ok(affected)
    }
}
