use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    CategoryId, CourseId, CourseLevel, CoursePrice, CourseSlug, CourseStatus, CourseTitle,
    DurationMinutes, SubcategoryId, ThumbnailUrl, UserId,
};

/// A sellable unit of educational content owned by an instructor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub title: CourseTitle,
    /// Unique and immutable once assigned.
    pub slug: CourseSlug,
    pub description: Option<String>,
    pub short_desc: Option<String>,
    pub thumbnail: Option<ThumbnailUrl>,
    pub price: CoursePrice,
    pub status: CourseStatus,
    pub featured: bool,
    pub level: Option<CourseLevel>,
    /// Total duration in minutes.
    pub duration: Option<DurationMinutes>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    /// Set iff the course has been PUBLISHED at least once.
    pub published_at: Option<NaiveDateTime>,
    pub instructor_id: UserId,
    pub category_id: Option<CategoryId>,
    pub subcategory_id: Option<SubcategoryId>,
}

/// Information required to create a new [`Course`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCourse {
    pub title: CourseTitle,
    pub slug: CourseSlug,
    pub description: Option<String>,
    pub short_desc: Option<String>,
    pub thumbnail: Option<ThumbnailUrl>,
    pub price: CoursePrice,
    pub status: CourseStatus,
    pub featured: bool,
    pub level: Option<CourseLevel>,
    pub published_at: Option<NaiveDateTime>,
    pub instructor_id: UserId,
    pub category_id: Option<CategoryId>,
    pub subcategory_id: Option<SubcategoryId>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
