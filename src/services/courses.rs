use chrono::Utc;
use serde_json::json;

use crate::domain::activity::NewUserActivity;
use crate::domain::auth::AuthenticatedUser;
use crate::domain::course::Course;
use crate::domain::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::domain::slug::{slug_candidate, slugify};
use crate::domain::types::{
    ActivityType, CourseId, CourseSlug, CourseSortField, CourseStatus, SortDirection,
    SubcategoryId, UserId, UserRole,
};
use crate::dto::courses::{
    CategoryRef, CourseCounts, CoursePublic, CourseSummary, InstructorSummary, LessonRef,
    SubcategoryRef,
};
use crate::dto::users::UserPublic;
use crate::forms::courses::{CourseListingParams, CreateCourseFormPayload};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    ActivityWriter, CategoryReader, CourseListQuery, CourseReader, CourseWriter, EnrollmentReader,
    LessonReader, UserReader,
};

use super::{ServiceError, ServiceResult, resolve_profile};

/// Slug probes attempted before giving up on a title.
const MAX_SLUG_ATTEMPTS: usize = 50;

/// Resolve a course row into its public shape by looking up every relation.
///
/// Lessons are only materialized for the detail view; listings carry the
/// counts alone.
fn hydrate_course<R>(course: Course, include_lessons: bool, repo: &R) -> RepositoryResult<CoursePublic>
where
    R: UserReader + CategoryReader + LessonReader + EnrollmentReader,
{
    let instructor = repo
        .get_user_by_id(course.instructor_id)?
        .map(UserPublic::from);
    let category = match course.category_id {
        Some(id) => repo.get_category_by_id(id)?.map(CategoryRef::from),
        None => None,
    };
    let subcategory = match course.subcategory_id {
        Some(id) => repo.get_subcategory_by_id(id)?.map(SubcategoryRef::from),
        None => None,
    };
    let counts = CourseCounts {
        lessons: repo.count_lessons(course.id)?,
        enrollments: repo.count_enrollments(course.id)?,
    };
    let lessons = if include_lessons {
        repo.list_published_lessons(course.id)?
            .into_iter()
            .map(LessonRef::from)
            .collect()
    } else {
        Vec::new()
    };

    Ok(CoursePublic::assemble(
        course,
        instructor,
        category,
        subcategory,
        lessons,
        counts,
    ))
}

fn sort_by_enrollments(items: &mut [CoursePublic], direction: SortDirection) {
    items.sort_by(|a, b| {
        let ordering = a.counts.enrollments.cmp(&b.counts.enrollments);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

/// Public catalog listing.
///
/// Only PUBLISHED courses are visible, whatever the caller asked for. This
/// path never fails: any storage error is logged and an empty page is
/// served instead.
pub fn list_public_courses<R>(params: CourseListingParams, repo: &R) -> Paginated<CoursePublic>
where
    R: CourseReader + UserReader + CategoryReader + LessonReader + EnrollmentReader,
{
    let page = params.page();
    let limit = params.limit();
    let query = params.into_query().status(CourseStatus::Published);
    let by_popularity = query.sort.field == CourseSortField::Enrollments;
    let direction = query.sort.direction;

    let (total, courses) = match repo.list_courses(query) {
        Ok(result) => result,
        Err(e) => {
            log::error!("Failed to list courses: {e}");
            return Paginated::empty(page, limit);
        }
    };

    let mut hydrated = Vec::with_capacity(courses.len());
    for course in courses {
        match hydrate_course(course, false, repo) {
            Ok(course) => hydrated.push(course),
            Err(e) => {
                log::error!("Failed to hydrate course: {e}");
                return Paginated::empty(page, limit);
            }
        }
    }

    // Popularity has no backing column, so the fetched page is re-sorted by
    // its hydrated enrollment counts.
    if by_popularity {
        sort_by_enrollments(&mut hydrated, direction);
    }

    Paginated::new(hydrated, page, limit, total)
}

/// Course detail by slug. Drafts and archived courses stay hidden.
pub fn get_course_by_slug<R>(slug: &str, repo: &R) -> Option<CoursePublic>
where
    R: CourseReader + UserReader + CategoryReader + LessonReader + EnrollmentReader,
{
    let course = match repo.get_course_by_slug(slug) {
        Ok(Some(course)) if course.status == CourseStatus::Published => course,
        Ok(_) => return None,
        Err(e) => {
            log::error!("Failed to get course by slug: {e}");
            return None;
        }
    };

    match hydrate_course(course, true, repo) {
        Ok(course) => Some(course),
        Err(e) => {
            log::error!("Failed to hydrate course: {e}");
            None
        }
    }
}

/// Most-enrolled published courses, for the home page strip.
pub fn popular_courses<R>(limit: usize, repo: &R) -> Vec<CoursePublic>
where
    R: CourseReader + UserReader + CategoryReader + LessonReader + EnrollmentReader,
{
    let query = CourseListQuery::default().status(CourseStatus::Published);

    let courses = match repo.list_courses(query) {
        Ok((_total, courses)) => courses,
        Err(e) => {
            log::error!("Failed to list popular courses: {e}");
            return Vec::new();
        }
    };

    let mut hydrated = Vec::with_capacity(courses.len());
    for course in courses {
        match hydrate_course(course, false, repo) {
            Ok(course) => hydrated.push(course),
            Err(e) => {
                log::error!("Failed to hydrate course: {e}");
                return Vec::new();
            }
        }
    }

    sort_by_enrollments(&mut hydrated, SortDirection::Desc);
    hydrated.truncate(limit);
    hydrated
}

/// Published courses of one subcategory, newest first, as compact summaries.
pub fn courses_by_subcategory<R>(
    subcategory_id: SubcategoryId,
    limit: usize,
    repo: &R,
) -> Vec<CourseSummary>
where
    R: CourseReader + UserReader,
{
    let query = CourseListQuery::default()
        .status(CourseStatus::Published)
        .subcategory(subcategory_id)
        .paginate(1, limit);

    let courses = match repo.list_courses(query) {
        Ok((_total, courses)) => courses,
        Err(e) => {
            log::error!("Failed to list courses by subcategory: {e}");
            return Vec::new();
        }
    };

    let mut summaries = Vec::with_capacity(courses.len());
    for course in courses {
        let instructor = match repo.get_user_by_id(course.instructor_id) {
            Ok(user) => user,
            Err(e) => {
                log::error!("Failed to get instructor: {e}");
                return Vec::new();
            }
        };
        summaries.push(CourseSummary {
            id: course.id,
            title: course.title.into_inner(),
            slug: course.slug.into_inner(),
            short_desc: course.short_desc,
            price: course.price.get(),
            thumbnail: course.thumbnail.map(Into::into),
            level: course.level.map(|level| level.as_str().to_string()),
            status: course.status.as_str().to_string(),
            instructor: InstructorSummary {
                name: instructor
                    .as_ref()
                    .and_then(|u| u.name.as_ref())
                    .map(|n| n.as_str().to_string()),
                avatar: instructor
                    .and_then(|u| u.avatar)
                    .map(Into::into),
            },
        });
    }
    summaries
}

/// Instructor dashboard listing, drafts included.
///
/// Admins may inspect any instructor's courses; teachers only their own.
pub fn list_instructor_courses<R>(
    instructor_id: Option<UserId>,
    page: usize,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<Paginated<CoursePublic>>
where
    R: CourseReader + UserReader + CategoryReader + LessonReader + EnrollmentReader,
{
    let profile = resolve_profile(user, repo)?;
    if !profile.role.can_author_courses() {
        return Err(ServiceError::Unauthorized);
    }

    let target = match (profile.role, instructor_id) {
        (UserRole::Admin, Some(id)) => id,
        _ => profile.id,
    };

    let query = CourseListQuery::default()
        .instructor(target)
        .paginate(page, DEFAULT_ITEMS_PER_PAGE);

    let (total, courses) = match repo.list_courses(query) {
        Ok(result) => result,
        Err(e) => {
            log::error!("Failed to list instructor courses: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let mut hydrated = Vec::with_capacity(courses.len());
    for course in courses {
        match hydrate_course(course, false, repo) {
            Ok(course) => hydrated.push(course),
            Err(e) => {
                log::error!("Failed to hydrate course: {e}");
                return Err(ServiceError::Internal);
            }
        }
    }

    Ok(Paginated::new(
        hydrated,
        page,
        DEFAULT_ITEMS_PER_PAGE,
        total,
    ))
}

/// Find the first free slug for a title by probing the store.
fn allocate_slug<R>(title: &str, repo: &R) -> ServiceResult<CourseSlug>
where
    R: CourseReader,
{
    let base = slugify(title);
    for attempt in 0..MAX_SLUG_ATTEMPTS {
        let candidate = slug_candidate(&base, attempt);
        match repo.slug_exists(&candidate) {
            Ok(false) => {
                return CourseSlug::new(candidate).map_err(|e| {
                    log::error!("Derived slug failed validation: {e}");
                    ServiceError::Internal
                });
            }
            Ok(true) => {}
            Err(e) => {
                log::error!("Failed to check slug availability: {e}");
                return Err(ServiceError::Internal);
            }
        }
    }

    log::error!("Exhausted slug candidates for base '{base}'");
    Err(ServiceError::Internal)
}

/// Best-effort activity append; failures are logged and swallowed so they
/// never undo the committed operation.
fn log_course_activity<R>(
    repo: &R,
    user_id: UserId,
    activity_type: ActivityType,
    description: String,
    metadata: serde_json::Value,
) where
    R: ActivityWriter,
{
    let activity = NewUserActivity {
        user_id,
        activity_type,
        description,
        metadata: Some(metadata.to_string()),
        created_at: Utc::now().naive_utc(),
    };
    if let Err(e) = repo.log_activity(&activity) {
        log::error!("Failed to log activity: {e}");
    }
}

/// Create a course owned by the acting instructor.
///
/// Only admins and teachers may author courses. The slug is allocated from
/// the title; publishing at creation stamps `published_at` immediately.
pub fn create_course<R>(
    payload: CreateCourseFormPayload,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<Course>
where
    R: CourseReader + CourseWriter + UserReader + CategoryReader + ActivityWriter,
{
    let profile = resolve_profile(user, repo)?;
    if !profile.role.can_author_courses() {
        return Err(ServiceError::Unauthorized);
    }

    if let Some(subcategory_id) = payload.subcategory_id {
        match repo.get_subcategory_by_id(subcategory_id) {
            Ok(Some(subcategory)) if subcategory.category_id == payload.category_id => {}
            Ok(_) => {
                return Err(ServiceError::Form(
                    "La subcategoría no pertenece a la categoría seleccionada".to_string(),
                ));
            }
            Err(e) => {
                log::error!("Failed to get subcategory: {e}");
                return Err(ServiceError::Internal);
            }
        }
    }

    let slug = allocate_slug(payload.title.as_str(), repo)?;
    let new_course = payload.into_new_course(profile.id, slug);

    let course = match repo.create_course(&new_course) {
        Ok(course) => course,
        Err(e) => {
            log::error!("Failed to create course: {e}");
            return Err(ServiceError::Internal);
        }
    };

    log_course_activity(
        repo,
        profile.id,
        ActivityType::CourseCreated,
        format!("Creó el curso: {}", course.title),
        json!({
            "courseId": course.id,
            "courseSlug": course.slug.as_str(),
            "status": course.status,
        }),
    );

    Ok(course)
}

/// Transition a DRAFT or ARCHIVED course to PUBLISHED.
///
/// Admins may publish any course; teachers only their own. Publishing an
/// already published course is a conflict and performs no write.
pub fn publish_course<R>(course_id: i32, user: &AuthenticatedUser, repo: &R) -> ServiceResult<Course>
where
    R: CourseReader + CourseWriter + UserReader + ActivityWriter,
{
    let profile = resolve_profile(user, repo)?;

    let course_id = CourseId::new(course_id).map_err(|_| ServiceError::NotFound)?;
    let course = match repo.get_course_by_id(course_id) {
        Ok(Some(course)) => course,
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get course: {e}");
            return Err(ServiceError::Internal);
        }
    };

    if profile.role != UserRole::Admin && course.instructor_id != profile.id {
        return Err(ServiceError::Unauthorized);
    }

    if course.status == CourseStatus::Published {
        return Err(ServiceError::Conflict("El curso ya está publicado".to_string()));
    }

    let now = Utc::now().naive_utc();
    match repo.set_course_status(course.id, CourseStatus::Published, Some(now)) {
        // The row vanished between the read and the update.
        Ok(0) => return Err(ServiceError::NotFound),
        Ok(_) => {}
        Err(e) => {
            log::error!("Failed to publish course: {e}");
            return Err(ServiceError::Internal);
        }
    }

    log_course_activity(
        repo,
        profile.id,
        ActivityType::CoursePublished,
        format!("Publicó el curso: {}", course.title),
        json!({
            "courseId": course.id,
            "courseSlug": course.slug.as_str(),
            "previousStatus": course.status,
            "newStatus": CourseStatus::Published,
        }),
    );

    Ok(Course {
        status: CourseStatus::Published,
        published_at: Some(now),
        updated_at: now,
        ..course
    })
}
