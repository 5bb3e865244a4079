use diesel::prelude::*;

use crate::domain::category::{Category, Subcategory};
use crate::domain::types::{CategoryId, SubcategoryId};
use crate::models::category::{Category as DbCategory, Subcategory as DbSubcategory};
use crate::repository::errors::RepositoryResult;
use crate::repository::{CategoryReader, DieselRepository};

impl CategoryReader for DieselRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let items = categories::table
            .order(categories::name.asc())
            .load::<DbCategory>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Category>, _>>()?;

        Ok(items)
    }

    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let category = categories::table
            .filter(categories::id.eq(id.get()))
            .first::<DbCategory>(&mut conn)
            .optional()?;

        let category = category.map(TryInto::try_into).transpose()?;
        Ok(category)
    }

    fn list_subcategories(&self) -> RepositoryResult<Vec<Subcategory>> {
        use crate::schema::subcategories;

        let mut conn = self.conn()?;

        let items = subcategories::table
            .order(subcategories::name.asc())
            .load::<DbSubcategory>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Subcategory>, _>>()?;

        Ok(items)
    }

    fn get_subcategory_by_id(&self, id: SubcategoryId) -> RepositoryResult<Option<Subcategory>> {
        use crate::schema::subcategories;

        let mut conn = self.conn()?;

        let subcategory = subcategories::table
            .filter(subcategories::id.eq(id.get()))
            .first::<DbSubcategory>(&mut conn)
            .optional()?;

        let subcategory = subcategory.map(TryInto::try_into).transpose()?;
        Ok(subcategory)
    }
}
