use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::course::{Course as DomainCourse, NewCourse as DomainNewCourse};
use crate::domain::types::{
    CoursePrice, CourseSlug, CourseTitle, ThumbnailUrl, TypeConstraintError,
};

/// Diesel model representing the `courses` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::courses)]
pub struct Course {
    pub id: i32,
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
    pub updated_at: NaiveDateTime,
    pub published_at: Option<NaiveDateTime>,
    pub instructor_id: i32,
    pub category_id: Option<i32>,
    pub subcategory_id: Option<i32>,
}

/// Insertable form of [`Course`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::courses)]
pub struct NewCourse {
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub short_desc: Option<String>,
    pub thumbnail: Option<String>,
    pub price: f64,
    pub status: String,
    pub featured: bool,
    pub level: Option<String>,
    pub published_at: Option<NaiveDateTime>,
    pub instructor_id: i32,
    pub category_id: Option<i32>,
    pub subcategory_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Course> for DomainCourse {
    type Error = TypeConstraintError;

    fn try_from(course: Course) -> Result<Self, Self::Error> {
        Ok(Self {
            id: course.id.try_into()?,
            title: CourseTitle::new(course.title)?,
            slug: CourseSlug::new(course.slug)?,
            description: course.description,
            short_desc: course.short_desc,
            thumbnail: course.thumbnail.map(ThumbnailUrl::new).transpose()?,
            price: CoursePrice::new(course.price)?,
            status: course.status.as_str().try_into()?,
            featured: course.featured,
            level: course.level.as_deref().map(TryInto::try_into).transpose()?,
            duration: course.duration.map(TryInto::try_into).transpose()?,
            created_at: course.created_at,
            updated_at: course.updated_at,
            published_at: course.published_at,
            instructor_id: course.instructor_id.try_into()?,
            category_id: course.category_id.map(TryInto::try_into).transpose()?,
            subcategory_id: course.subcategory_id.map(TryInto::try_into).transpose()?,
        })
    }
}

impl From<DomainNewCourse> for NewCourse {
    fn from(course: DomainNewCourse) -> Self {
        Self {
            title: course.title.into_inner(),
            slug: course.slug.into_inner(),
            description: course.description,
            short_desc: course.short_desc,
            thumbnail: course.thumbnail.map(ThumbnailUrl::into_inner),
            price: course.price.get(),
            status: course.status.as_str().to_string(),
            featured: course.featured,
            level: course.level.map(|level| level.as_str().to_string()),
            published_at: course.published_at,
            instructor_id: course.instructor_id.get(),
            category_id: course.category_id.map(|id| id.get()),
            subcategory_id: course.subcategory_id.map(|id| id.get()),
            created_at: course.created_at,
            updated_at: course.updated_at,
        }
    }
}
