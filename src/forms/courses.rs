use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::course::NewCourse;
use crate::domain::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::domain::types::{
    CategoryId, CourseLevel, CoursePrice, CourseSortField, CourseSlug, CourseStatus, CourseTitle,
    SortDirection, SubcategoryId, ThumbnailUrl, TypeConstraintError, UserId,
};
use crate::repository::CourseListQuery;

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Query-string parameters of the public course listing.
///
/// Everything arrives as an optional string and parses permissively: a value
/// that does not parse is treated as absent, never as an error.
#[derive(Debug, Default, Deserialize)]
pub struct CourseListingParams {
    pub q: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub level: Option<String>,
    #[serde(rename = "priceMin")]
    pub price_min: Option<String>,
    #[serde(rename = "priceMax")]
    pub price_max: Option<String>,
    pub featured: Option<String>,
    #[serde(rename = "sortField")]
    pub sort_field: Option<String>,
    #[serde(rename = "sortDirection")]
    pub sort_direction: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl CourseListingParams {
    /// Requested page number, defaulting to the first page.
    pub fn page(&self) -> usize {
        self.page
            .as_deref()
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|&v| v >= 1)
            .unwrap_or(1)
    }

    /// Requested page size, defaulting to the standard listing size.
    pub fn limit(&self) -> usize {
        self.limit
            .as_deref()
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|&v| v >= 1)
            .unwrap_or(DEFAULT_ITEMS_PER_PAGE)
    }

    /// Convert the raw parameters into a repository query.
    ///
    /// Unparseable filters are dropped and sorting falls back to newest
    /// first. The caller decides the status restriction.
    pub fn into_query(self) -> CourseListQuery {
        let page = self.page();
        let limit = self.limit();

        let mut query = CourseListQuery::default().paginate(page, limit);

        if let Some(search) = trimmed(self.q) {
            query = query.search(search);
        }
        if let Some(category_id) = self
            .category
            .as_deref()
            .and_then(|v| v.trim().parse::<i32>().ok())
            .and_then(|v| CategoryId::new(v).ok())
        {
            query = query.category(category_id);
        }
        if let Some(subcategory_id) = self
            .subcategory
            .as_deref()
            .and_then(|v| v.trim().parse::<i32>().ok())
            .and_then(|v| SubcategoryId::new(v).ok())
        {
            query = query.subcategory(subcategory_id);
        }
        if let Some(level) = self
            .level
            .as_deref()
            .and_then(|v| CourseLevel::try_from(v).ok())
        {
            query = query.level(level);
        }
        if let Some(price_min) = self
            .price_min
            .as_deref()
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite())
        {
            query = query.price_min(price_min);
        }
        if let Some(price_max) = self
            .price_max
            .as_deref()
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite())
        {
            query = query.price_max(price_max);
        }
        if self.featured.as_deref().is_some_and(|v| v.trim() == "true") {
            query = query.featured_only();
        }

        let field = self
            .sort_field
            .as_deref()
            .and_then(|v| CourseSortField::try_from(v).ok())
            .unwrap_or(CourseSortField::CreatedAt);
        let direction = self
            .sort_direction
            .as_deref()
            .and_then(|v| SortDirection::try_from(v).ok())
            .unwrap_or(SortDirection::Desc);

        query.sort(field, direction)
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseForm {
    #[validate(length(min = 5, max = 100))]
    pub title: String,
    #[validate(length(min = 50, max = 2000))]
    pub description: String,
    #[validate(length(min = 10, max = 200))]
    pub short_desc: String,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(range(min = 1))]
    pub category_id: i32,
    pub subcategory_id: Option<i32>,
    pub level: String,
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub publish: bool,
}

#[derive(Debug, Clone)]
pub struct CreateCourseFormPayload {
    pub title: CourseTitle,
    pub description: String,
    pub short_desc: String,
    pub price: CoursePrice,
    pub category_id: CategoryId,
    pub subcategory_id: Option<SubcategoryId>,
    pub level: CourseLevel,
    pub thumbnail: Option<ThumbnailUrl>,
    pub publish: bool,
}

impl CreateCourseFormPayload {
    /// Build the insertable course once ownership and slug are settled.
    ///
    /// Publishing at creation stamps `published_at` together with the
    /// PUBLISHED status.
    pub fn into_new_course(self, instructor_id: UserId, slug: CourseSlug) -> NewCourse {
        let now = Utc::now().naive_utc();
        let status = if self.publish {
            CourseStatus::Published
        } else {
            CourseStatus::Draft
        };
        NewCourse {
            title: self.title,
            slug,
            description: Some(self.description),
            short_desc: Some(self.short_desc),
            thumbnail: self.thumbnail,
            price: self.price,
            status,
            featured: false,
            level: Some(self.level),
            published_at: self.publish.then_some(now),
            instructor_id,
            category_id: Some(self.category_id),
            subcategory_id: self.subcategory_id,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Error)]
pub enum CreateCourseFormError {
    #[error("Create course form validation failed: {0}")]
    Validation(String),
    #[error("Create course form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for CreateCourseFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for CreateCourseFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<CreateCourseForm> for CreateCourseFormPayload {
    type Error = CreateCourseFormError;

    fn try_from(value: CreateCourseForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            title: CourseTitle::new(value.title)?,
            description: value.description.trim().to_string(),
            short_desc: value.short_desc.trim().to_string(),
            price: CoursePrice::new(value.price)?,
            category_id: CategoryId::new(value.category_id)?,
            subcategory_id: value
                .subcategory_id
                .map(SubcategoryId::new)
                .transpose()?,
            level: CourseLevel::try_from(value.level)?,
            thumbnail: trimmed(value.thumbnail).map(ThumbnailUrl::new).transpose()?,
            publish: value.publish,
        })
    }
}
