use serde::{Deserialize, Serialize};

use crate::domain::types::{
    CategoryId, CategoryName, CategorySlug, ImageUrl, SubcategoryId, SubcategoryName,
    SubcategorySlug,
};

/// A top-level course category. Reference data the core reads but never
/// mutates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub slug: CategorySlug,
    pub description: Option<String>,
    pub image: Option<ImageUrl>,
}

/// A subcategory belonging to exactly one [`Category`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subcategory {
    pub id: SubcategoryId,
    pub category_id: CategoryId,
    pub name: SubcategoryName,
    pub slug: SubcategorySlug,
}
