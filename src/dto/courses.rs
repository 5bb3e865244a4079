use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::category::{Category, Subcategory};
use crate::domain::course::Course;
use crate::domain::lesson::Lesson;
use crate::domain::types::{CategoryId, CourseId, SubcategoryId};
use crate::dto::users::UserPublic;

/// Category projection embedded in a hydrated course record.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryRef {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl From<Category> for CategoryRef {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name.into_inner(),
            slug: category.slug.into_inner(),
            description: category.description,
            image: category.image.map(Into::into),
        }
    }
}

/// Subcategory projection embedded in a hydrated course record.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SubcategoryRef {
    pub id: SubcategoryId,
    pub name: String,
    pub slug: String,
}

impl From<Subcategory> for SubcategoryRef {
    fn from(subcategory: Subcategory) -> Self {
        Self {
            id: subcategory.id,
            name: subcategory.name.into_inner(),
            slug: subcategory.slug.into_inner(),
        }
    }
}

/// Relation counts attached to a hydrated course record.
#[derive(Debug, Clone, Copy, Serialize, Default, PartialEq, Eq)]
pub struct CourseCounts {
    pub lessons: usize,
    pub enrollments: usize,
}

/// Fully denormalized public course record.
///
/// Assembled by the service layer from the course row plus its relations;
/// usable only once every relation lookup has resolved.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursePublic {
    pub id: CourseId,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub short_desc: Option<String>,
    pub thumbnail: Option<String>,
    pub price: f64,
    pub status: String,
    pub featured: bool,
    pub level: Option<String>,
    pub duration: Option<i32>,
    pub created_at: NaiveDateTime,
    pub published_at: Option<NaiveDateTime>,
    pub instructor: UserPublic,
    pub category: Option<CategoryRef>,
    pub subcategory: Option<SubcategoryRef>,
    /// Ordered published lessons; only populated on the detail view.
    pub lessons: Vec<LessonRef>,
    #[serde(rename = "_count")]
    pub counts: CourseCounts,
}

impl CoursePublic {
    /// Assemble the public record from a course row and its resolved
    /// relations.
    pub fn assemble(
        course: Course,
        instructor: Option<UserPublic>,
        category: Option<CategoryRef>,
        subcategory: Option<SubcategoryRef>,
        lessons: Vec<LessonRef>,
        counts: CourseCounts,
    ) -> Self {
        Self {
            id: course.id,
            title: course.title.into_inner(),
            slug: course.slug.into_inner(),
            description: course.description,
            short_desc: course.short_desc,
            thumbnail: course.thumbnail.map(Into::into),
            price: course.price.get(),
            status: course.status.as_str().to_string(),
            featured: course.featured,
            level: course.level.map(|level| level.as_str().to_string()),
            duration: course.duration.map(|duration| duration.get()),
            created_at: course.created_at,
            published_at: course.published_at,
            instructor: instructor.unwrap_or_else(UserPublic::unknown_instructor),
            category,
            subcategory,
            lessons,
            counts,
        }
    }
}

/// Lesson projection embedded in the course detail record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonRef {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub video_url: Option<String>,
    pub duration: Option<i32>,
    pub order: i32,
    pub is_published: bool,
}

impl From<Lesson> for LessonRef {
    fn from(lesson: Lesson) -> Self {
        Self {
            id: lesson.id.get(),
            title: lesson.title.into_inner(),
            description: lesson.description,
            video_url: lesson.video_url.map(Into::into),
            duration: lesson.duration.map(|duration| duration.get()),
            order: lesson.order.get(),
            is_published: lesson.is_published,
        }
    }
}

/// Compact course shape for subcategory strips and similar secondary
/// listings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSummary {
    pub id: CourseId,
    pub title: String,
    pub slug: String,
    pub short_desc: Option<String>,
    pub price: f64,
    pub thumbnail: Option<String>,
    pub level: Option<String>,
    pub status: String,
    pub instructor: InstructorSummary,
}

/// Instructor name/avatar pair carried by [`CourseSummary`].
#[derive(Debug, Clone, Serialize)]
pub struct InstructorSummary {
    pub name: Option<String>,
    pub avatar: Option<String>,
}
