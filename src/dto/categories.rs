use serde::Serialize;

use crate::domain::category::{Category, Subcategory};
use crate::domain::types::{CategoryId, SubcategoryId};

/// Subcategory annotated with its published-course count.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubcategoryWithCount {
    pub id: SubcategoryId,
    pub name: String,
    pub slug: String,
    pub course_count: usize,
}

impl SubcategoryWithCount {
    pub fn new(subcategory: Subcategory, course_count: usize) -> Self {
        Self {
            id: subcategory.id,
            name: subcategory.name.into_inner(),
            slug: subcategory.slug.into_inner(),
            course_count,
        }
    }
}

/// Category with its subcategories, as served to the categories slider.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryTree {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub subcategories: Vec<SubcategoryWithCount>,
}

impl CategoryTree {
    pub fn new(category: Category, subcategories: Vec<SubcategoryWithCount>) -> Self {
        Self {
            id: category.id,
            name: category.name.into_inner(),
            slug: category.slug.into_inner(),
            description: category.description,
            image: category.image.map(Into::into),
            subcategories,
        }
    }
}
