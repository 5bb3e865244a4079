use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::lesson::Lesson as DomainLesson;
use crate::domain::types::{LessonTitle, TypeConstraintError, VideoUrl};

/// Diesel model representing the `lessons` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::lessons)]
pub struct Lesson {
    pub id: i32,
    pub course_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub video_url: Option<String>,
    pub duration: Option<i32>,
    pub order: i32,
    pub is_published: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Lesson> for DomainLesson {
    type Error = TypeConstraintError;

    fn try_from(lesson: Lesson) -> Result<Self, Self::Error> {
        Ok(Self {
            id: lesson.id.try_into()?,
            course_id: lesson.course_id.try_into()?,
            title: LessonTitle::new(lesson.title)?,
            description: lesson.description,
            video_url: lesson.video_url.map(VideoUrl::new).transpose()?,
            duration: lesson.duration.map(TryInto::try_into).transpose()?,
            order: lesson.order.try_into()?,
            is_published: lesson.is_published,
            created_at: lesson.created_at,
            updated_at: lesson.updated_at,
        })
    }
}
