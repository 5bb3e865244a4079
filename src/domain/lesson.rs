use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CourseId, DurationSeconds, LessonId, LessonOrder, LessonTitle, VideoUrl};

/// A single lesson inside a course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    pub id: LessonId,
    pub course_id: CourseId,
    pub title: LessonTitle,
    pub description: Option<String>,
    pub video_url: Option<VideoUrl>,
    /// Video duration in seconds.
    pub duration: Option<DurationSeconds>,
    /// Ascending, unique per course.
    pub order: LessonOrder,
    pub is_published: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
