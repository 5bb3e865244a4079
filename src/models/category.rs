use diesel::prelude::*;

use crate::domain::category::{Category as DomainCategory, Subcategory as DomainSubcategory};
use crate::domain::types::{
    CategoryName, CategorySlug, ImageUrl, SubcategoryName, SubcategorySlug, TypeConstraintError,
};

/// Diesel model representing the `categories` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::categories)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// Diesel model representing the `subcategories` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::subcategories)]
pub struct Subcategory {
    pub id: i32,
    pub category_id: i32,
    pub name: String,
    pub slug: String,
}

impl TryFrom<Category> for DomainCategory {
    type Error = TypeConstraintError;

    fn try_from(category: Category) -> Result<Self, Self::Error> {
        Ok(Self {
            id: category.id.try_into()?,
            name: CategoryName::new(category.name)?,
            slug: CategorySlug::new(category.slug)?,
            description: category.description,
            image: category.image.map(ImageUrl::new).transpose()?,
        })
    }
}

impl TryFrom<Subcategory> for DomainSubcategory {
    type Error = TypeConstraintError;

    fn try_from(subcategory: Subcategory) -> Result<Self, Self::Error> {
        Ok(Self {
            id: subcategory.id.try_into()?,
            category_id: subcategory.category_id.try_into()?,
            name: SubcategoryName::new(subcategory.name)?,
            slug: SubcategorySlug::new(subcategory.slug)?,
        })
    }
}
