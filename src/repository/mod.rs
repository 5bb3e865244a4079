use chrono::NaiveDateTime;

use crate::db::{DbConnection, DbPool};
use crate::domain::activity::{NewUserActivity, UserActivity};
use crate::domain::category::{Category, Subcategory};
use crate::domain::course::{Course, NewCourse};
use crate::domain::enrollment::Enrollment;
use crate::domain::lesson::Lesson;
use crate::domain::pagination::Pagination;
use crate::domain::types::{
    CategoryId, CourseId, CourseLevel, CourseSortField, CourseStatus, SortDirection,
    SubcategoryId, UserId,
};
use crate::domain::user::{NewUser, User};
use crate::repository::errors::RepositoryResult;

pub mod activity;
pub mod category;
pub mod course;
pub mod enrollment;
pub mod errors;
pub mod lesson;
#[cfg(test)]
pub mod test;
pub mod user;

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Sort options applied to course listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseSort {
    pub field: CourseSortField,
    pub direction: SortDirection,
}

impl Default for CourseSort {
    fn default() -> Self {
        Self {
            field: CourseSortField::CreatedAt,
            direction: SortDirection::Desc,
        }
    }
}

/// Query parameters used when listing or searching courses.
#[derive(Debug, Clone, Default)]
pub struct CourseListQuery {
    /// Restrict to courses in a given lifecycle status.
    pub status: Option<CourseStatus>,
    /// Case-insensitive substring search over title, description and
    /// short description.
    pub search: Option<String>,
    /// Filter by category identifier.
    pub category_id: Option<CategoryId>,
    /// Filter by subcategory identifier.
    pub subcategory_id: Option<SubcategoryId>,
    /// Filter by difficulty level.
    pub level: Option<CourseLevel>,
    /// Lower price bound, inclusive.
    pub price_min: Option<f64>,
    /// Upper price bound, inclusive.
    pub price_max: Option<f64>,
    /// When set, restrict to featured courses. Never filters the other way.
    pub featured: bool,
    /// Restrict to courses authored by a given instructor.
    pub instructor_id: Option<UserId>,
    /// Sort options.
    pub sort: CourseSort,
    /// Pagination parameters.
    pub pagination: Option<Pagination>,
}

impl CourseListQuery {
    pub fn status(mut self, status: CourseStatus) -> Self {
        self.status = Some(status);
        self
    }
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
    pub fn category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }
    pub fn subcategory(mut self, subcategory_id: SubcategoryId) -> Self {
        self.subcategory_id = Some(subcategory_id);
        self
    }
    pub fn level(mut self, level: CourseLevel) -> Self {
        self.level = Some(level);
        self
    }
    pub fn price_min(mut self, price_min: f64) -> Self {
        self.price_min = Some(price_min);
        self
    }
    pub fn price_max(mut self, price_max: f64) -> Self {
        self.price_max = Some(price_max);
        self
    }
    pub fn featured_only(mut self) -> Self {
        self.featured = true;
        self
    }
    pub fn instructor(mut self, instructor_id: UserId) -> Self {
        self.instructor_id = Some(instructor_id);
        self
    }
    pub fn sort(mut self, field: CourseSortField, direction: SortDirection) -> Self {
        self.sort = CourseSort { field, direction };
        self
    }
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Read-only operations for course entities.
pub trait CourseReader {
    /// List courses matching the supplied query parameters, together with
    /// the total match count before pagination.
    fn list_courses(&self, query: CourseListQuery) -> RepositoryResult<(usize, Vec<Course>)>;
    /// Retrieve a course by its identifier.
    fn get_course_by_id(&self, id: CourseId) -> RepositoryResult<Option<Course>>;
    /// Retrieve a course by its slug.
    fn get_course_by_slug(&self, slug: &str) -> RepositoryResult<Option<Course>>;
    /// Check whether a slug is already taken.
    fn slug_exists(&self, slug: &str) -> RepositoryResult<bool>;
    /// Count published courses within a subcategory.
    fn count_published_by_subcategory(
        &self,
        subcategory_id: SubcategoryId,
    ) -> RepositoryResult<usize>;
}

/// Write operations for course entities.
pub trait CourseWriter {
    /// Persist a new course and return the stored row.
    fn create_course(&self, course: &NewCourse) -> RepositoryResult<Course>;
    /// Transition a course to a new lifecycle status.
    ///
    /// Updates `updated_at` and, when `published_at` is supplied, stamps the
    /// publication time as well.
    fn set_course_status(
        &self,
        id: CourseId,
        status: CourseStatus,
        published_at: Option<NaiveDateTime>,
    ) -> RepositoryResult<usize>;
}

/// Read-only operations for user entities.
pub trait UserReader {
    /// Retrieve a user by its identifier.
    fn get_user_by_id(&self, id: UserId) -> RepositoryResult<Option<User>>;
    /// Retrieve a user by email address.
    fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;
    /// Retrieve a user by its external authentication identifier.
    fn get_user_by_auth_id(&self, auth_id: &str) -> RepositoryResult<Option<User>>;
}

/// Write operations for user entities.
pub trait UserWriter {
    /// Persist a new user and return the stored row.
    fn create_user(&self, user: &NewUser) -> RepositoryResult<User>;
    /// Link an external authentication identifier to an existing profile.
    fn set_auth_id(&self, id: UserId, auth_id: &str) -> RepositoryResult<usize>;
    /// Stamp the email verification time for a user looked up by
    /// authentication identifier.
    fn set_email_verified(
        &self,
        auth_id: &str,
        verified_at: NaiveDateTime,
    ) -> RepositoryResult<usize>;
}

/// Read-only operations for category and subcategory entities.
pub trait CategoryReader {
    /// List all categories ordered by name.
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    /// Retrieve a category by its identifier.
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;
    /// List all subcategories ordered by name.
    fn list_subcategories(&self) -> RepositoryResult<Vec<Subcategory>>;
    /// Retrieve a subcategory by its identifier.
    fn get_subcategory_by_id(&self, id: SubcategoryId) -> RepositoryResult<Option<Subcategory>>;
}

/// Read-only operations for lesson entities.
pub trait LessonReader {
    /// List the published lessons of a course in display order.
    fn list_published_lessons(&self, course_id: CourseId) -> RepositoryResult<Vec<Lesson>>;
    /// Count all lessons of a course.
    fn count_lessons(&self, course_id: CourseId) -> RepositoryResult<usize>;
}

/// Read-only operations for enrollment entities.
pub trait EnrollmentReader {
    /// Count enrollments in a course.
    fn count_enrollments(&self, course_id: CourseId) -> RepositoryResult<usize>;
    /// List enrollments of a user.
    fn list_enrollments(&self, user_id: UserId) -> RepositoryResult<Vec<Enrollment>>;
}

/// Read-only operations for the user activity log.
pub trait ActivityReader {
    /// List activity entries for a user, most recent first.
    fn list_activities(&self, user_id: UserId) -> RepositoryResult<Vec<UserActivity>>;
}

/// Write operations for the user activity log.
pub trait ActivityWriter {
    /// Append an activity entry.
    fn log_activity(&self, activity: &NewUserActivity) -> RepositoryResult<usize>;
}
