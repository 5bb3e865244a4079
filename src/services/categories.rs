use crate::dto::categories::{CategoryTree, SubcategoryWithCount};
use crate::repository::{CategoryReader, CourseReader};

/// Categories with their subcategories and published-course counts, for
/// the catalog navigation.
///
/// Public and fail-open: storage errors are logged and an empty tree is
/// served instead.
pub fn category_tree<R>(repo: &R) -> Vec<CategoryTree>
where
    R: CategoryReader + CourseReader,
{
    let categories = match repo.list_categories() {
        Ok(categories) => categories,
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            return Vec::new();
        }
    };
    let subcategories = match repo.list_subcategories() {
        Ok(subcategories) => subcategories,
        Err(e) => {
            log::error!("Failed to list subcategories: {e}");
            return Vec::new();
        }
    };

    let mut tree = Vec::with_capacity(categories.len());
    for category in categories {
        let mut children = Vec::new();
        for subcategory in subcategories.iter().filter(|s| s.category_id == category.id) {
            let count = match repo.count_published_by_subcategory(subcategory.id) {
                Ok(count) => count,
                Err(e) => {
                    log::error!("Failed to count courses in subcategory: {e}");
                    return Vec::new();
                }
            };
            children.push(SubcategoryWithCount::new(subcategory.clone(), count));
        }
        tree.push(CategoryTree::new(category, children));
    }

    tree
}
