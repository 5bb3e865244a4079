use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{NaiveDateTime, Utc};

use crate::domain::activity::{NewUserActivity, UserActivity};
use crate::domain::category::{Category, Subcategory};
use crate::domain::course::{Course, NewCourse};
use crate::domain::enrollment::Enrollment;
use crate::domain::lesson::Lesson;
use crate::domain::types::{
    ActivityId, AuthId, CategoryId, CourseId, CourseSortField, CourseStatus, SortDirection,
    SubcategoryId, UserId,
};
use crate::domain::user::{NewUser, User};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    ActivityReader, ActivityWriter, CategoryReader, CourseListQuery, CourseReader, CourseWriter,
    EnrollmentReader, LessonReader, UserReader, UserWriter,
};

/// Simple in-memory repository used for unit tests.
///
/// Collections touched by writer traits sit behind mutexes so the repository
/// can be shared by reference like the Diesel-backed one.
#[derive(Default)]
pub struct TestRepository {
    users: Mutex<Vec<User>>,
    categories: Vec<Category>,
    subcategories: Vec<Subcategory>,
    courses: Mutex<Vec<Course>>,
    lessons: Vec<Lesson>,
    enrollments: Vec<Enrollment>,
    enrollment_counts: HashMap<CourseId, usize>,
    activities: Mutex<Vec<UserActivity>>,
}

impl TestRepository {
    pub fn with_users(self, users: Vec<User>) -> Self {
        *self.users.lock().unwrap() = users;
        self
    }

    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_subcategories(mut self, subcategories: Vec<Subcategory>) -> Self {
        self.subcategories = subcategories;
        self
    }

    pub fn with_courses(self, courses: Vec<Course>) -> Self {
        *self.courses.lock().unwrap() = courses;
        self
    }

    pub fn with_lessons(mut self, lessons: Vec<Lesson>) -> Self {
        self.lessons = lessons;
        self
    }

    pub fn with_enrollment_counts(mut self, counts: Vec<(CourseId, usize)>) -> Self {
        self.enrollment_counts = counts.into_iter().collect();
        self
    }

    /// Snapshot of the stored courses.
    pub fn courses(&self) -> Vec<Course> {
        self.courses.lock().unwrap().clone()
    }

    /// Snapshot of the activity log.
    pub fn activities(&self) -> Vec<UserActivity> {
        self.activities.lock().unwrap().clone()
    }
}

impl CourseReader for TestRepository {
    fn list_courses(&self, query: CourseListQuery) -> RepositoryResult<(usize, Vec<Course>)> {
        let mut items: Vec<Course> = self.courses.lock().unwrap().clone();

        if let Some(status) = query.status {
            items.retain(|c| c.status == status);
        }
        if let Some(search) = &query.search {
            let search = search.to_lowercase();
            items.retain(|c| {
                c.title.as_str().to_lowercase().contains(&search)
                    || c.description
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(&search))
                    || c.short_desc
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(&search))
            });
        }
        if let Some(category_id) = query.category_id {
            items.retain(|c| c.category_id == Some(category_id));
        }
        if let Some(subcategory_id) = query.subcategory_id {
            items.retain(|c| c.subcategory_id == Some(subcategory_id));
        }
        if let Some(level) = query.level {
            items.retain(|c| c.level == Some(level));
        }
        if let Some(price_min) = query.price_min {
            items.retain(|c| c.price.get() >= price_min);
        }
        if let Some(price_max) = query.price_max {
            items.retain(|c| c.price.get() <= price_max);
        }
        if query.featured {
            items.retain(|c| c.featured);
        }
        if let Some(instructor_id) = query.instructor_id {
            items.retain(|c| c.instructor_id == instructor_id);
        }

        let total = items.len();

        let field = match query.sort.field {
            CourseSortField::Enrollments => CourseSortField::CreatedAt,
            field => field,
        };
        items.sort_by(|a, b| {
            let ordering = match field {
                CourseSortField::Price => a.price.get().total_cmp(&b.price.get()),
                CourseSortField::Title => a.title.as_str().cmp(b.title.as_str()),
                _ => a.created_at.cmp(&b.created_at),
            };
            match query.sort.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });

        if let Some(pagination) = &query.pagination {
            let offset = pagination
                .page
                .max(1)
                .saturating_sub(1)
                .saturating_mul(pagination.per_page);
            items = items
                .into_iter()
                .skip(offset)
                .take(pagination.per_page)
                .collect();
        }

        Ok((total, items))
    }

    fn get_course_by_id(&self, id: CourseId) -> RepositoryResult<Option<Course>> {
        Ok(self
            .courses
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    fn get_course_by_slug(&self, slug: &str) -> RepositoryResult<Option<Course>> {
        Ok(self
            .courses
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.slug == slug)
            .cloned())
    }

    fn slug_exists(&self, slug: &str) -> RepositoryResult<bool> {
        Ok(self.courses.lock().unwrap().iter().any(|c| c.slug == slug))
    }

    fn count_published_by_subcategory(
        &self,
        subcategory_id: SubcategoryId,
    ) -> RepositoryResult<usize> {
        Ok(self
            .courses
            .lock()
            .unwrap()
            .iter()
            .filter(|c| {
                c.subcategory_id == Some(subcategory_id) && c.status == CourseStatus::Published
            })
            .count())
    }
}

impl CourseWriter for TestRepository {
    fn create_course(&self, course: &NewCourse) -> RepositoryResult<Course> {
        let mut courses = self.courses.lock().unwrap();
        let created = Course {
            id: CourseId::new(courses.len() as i32 + 1).unwrap(),
            title: course.title.clone(),
            slug: course.slug.clone(),
            description: course.description.clone(),
            short_desc: course.short_desc.clone(),
            thumbnail: course.thumbnail.clone(),
            price: course.price,
            status: course.status,
            featured: course.featured,
            level: course.level,
            duration: None,
            created_at: course.created_at,
            updated_at: course.updated_at,
            published_at: course.published_at,
            instructor_id: course.instructor_id,
            category_id: course.category_id,
            subcategory_id: course.subcategory_id,
        };
        courses.push(created.clone());
        Ok(created)
    }

    fn set_course_status(
        &self,
        id: CourseId,
        status: CourseStatus,
        published_at: Option<NaiveDateTime>,
    ) -> RepositoryResult<usize> {
        let mut courses = self.courses.lock().unwrap();
        match courses.iter_mut().find(|c| c.id == id) {
            Some(course) => {
                course.status = status;
                course.updated_at = match published_at {
                    Some(published_at) => {
                        course.published_at = Some(published_at);
                        published_at
                    }
                    None => Utc::now().naive_utc(),
                };
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

impl UserReader for TestRepository {
    fn get_user_by_id(&self, id: UserId) -> RepositoryResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email.as_str() == email)
            .cloned())
    }

    fn get_user_by_auth_id(&self, auth_id: &str) -> RepositoryResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.auth_id.as_ref().is_some_and(|a| a.as_str() == auth_id))
            .cloned())
    }
}

impl UserWriter for TestRepository {
    fn create_user(&self, user: &NewUser) -> RepositoryResult<User> {
        let mut users = self.users.lock().unwrap();
        let created = User {
            id: UserId::new(users.len() as i32 + 1).unwrap(),
            email: user.email.clone(),
            name: user.name.clone(),
            avatar: user.avatar.clone(),
            role: user.role,
            email_verified: user.email_verified,
            auth_id: user.auth_id.clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        };
        users.push(created.clone());
        Ok(created)
    }

    fn set_auth_id(&self, id: UserId, auth_id: &str) -> RepositoryResult<usize> {
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                user.auth_id = AuthId::new(auth_id).ok();
                user.updated_at = Utc::now().naive_utc();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    fn set_email_verified(
        &self,
        auth_id: &str,
        verified_at: NaiveDateTime,
    ) -> RepositoryResult<usize> {
        let mut users = self.users.lock().unwrap();
        match users
            .iter_mut()
            .find(|u| u.auth_id.as_ref().is_some_and(|a| a.as_str() == auth_id))
        {
            Some(user) => {
                user.email_verified = Some(verified_at);
                user.updated_at = Utc::now().naive_utc();
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

impl CategoryReader for TestRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        let mut items = self.categories.clone();
        items.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(items)
    }

    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>> {
        Ok(self.categories.iter().find(|c| c.id == id).cloned())
    }

    fn list_subcategories(&self) -> RepositoryResult<Vec<Subcategory>> {
        let mut items = self.subcategories.clone();
        items.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(items)
    }

    fn get_subcategory_by_id(&self, id: SubcategoryId) -> RepositoryResult<Option<Subcategory>> {
        Ok(self.subcategories.iter().find(|s| s.id == id).cloned())
    }
}

impl LessonReader for TestRepository {
    fn list_published_lessons(&self, course_id: CourseId) -> RepositoryResult<Vec<Lesson>> {
        let mut items: Vec<Lesson> = self
            .lessons
            .iter()
            .filter(|l| l.course_id == course_id && l.is_published)
            .cloned()
            .collect();
        items.sort_by_key(|l| l.order);
        Ok(items)
    }

    fn count_lessons(&self, course_id: CourseId) -> RepositoryResult<usize> {
        Ok(self
            .lessons
            .iter()
            .filter(|l| l.course_id == course_id)
            .count())
    }
}

impl EnrollmentReader for TestRepository {
    fn count_enrollments(&self, course_id: CourseId) -> RepositoryResult<usize> {
        Ok(self
            .enrollment_counts
            .get(&course_id)
            .copied()
            .unwrap_or_default())
    }

    fn list_enrollments(&self, user_id: UserId) -> RepositoryResult<Vec<Enrollment>> {
        Ok(self
            .enrollments
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect())
    }
}

impl ActivityReader for TestRepository {
    fn list_activities(&self, user_id: UserId) -> RepositoryResult<Vec<UserActivity>> {
        Ok(self
            .activities
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect())
    }
}

impl ActivityWriter for TestRepository {
    fn log_activity(&self, activity: &NewUserActivity) -> RepositoryResult<usize> {
        let mut activities = self.activities.lock().unwrap();
        let entry = UserActivity {
            id: ActivityId::new(activities.len() as i32 + 1).unwrap(),
            user_id: activity.user_id,
            activity_type: activity.activity_type,
            description: activity.description.clone(),
            metadata: activity.metadata.clone(),
            created_at: activity.created_at,
        };
        activities.push(entry);
        Ok(1)
    }
}
