use diesel::prelude::*;

use crate::domain::category::{Category, NewCategory};
use crate::domain::types::CategoryId;
use crate::models::category::{Category as DbCategory, NewCategory as DbNewCategory};
use crate::repository::errors::RepositoryResult;
use crate::repository::{CategoryReader, CategoryWriter, DieselRepository};

impl CategoryReader for DieselRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let items = categories::table
            .order(categories::id.asc())
            .select(DbCategory::as_select())
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
            .select(DbCategory::as_select())
            .first::<DbCategory>(&mut conn)
            .optional()?;

        let category = category.map(TryInto::try_into).transpose()?;
        Ok(category)
    }
}

impl CategoryWriter for DieselRepository {
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<Category> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let db_category: DbNewCategory = category.clone().into();

        let inserted = diesel::insert_into(categories::table)
            .values(db_category)
            .returning(DbCategory::as_returning())
            .get_result::<DbCategory>(&mut conn)?;

        let category: Category = inserted.try_into()?;
        Ok(category)
    }

    fn update_category(&self, id: CategoryId, category: &NewCategory) -> RepositoryResult<usize> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let changes: DbNewCategory = category.clone().into();

        let affected = diesel::update(categories::table.filter(categories::id.eq(id.get())))
            .set(changes)
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn delete_category(&self, id: CategoryId) -> RepositoryResult<usize> {
        use crate::schema::{categories, movies};

        let mut conn = self.conn()?;

        // The foreign key cascades too; removing the movies explicitly keeps the
        // delete atomic even on connections opened without the pragma.
        let affected = conn.transaction(|conn| {
            diesel::delete(movies::table.filter(movies::category_id.eq(id.get()))).execute(conn)?;

            diesel::delete(categories::table.filter(categories::id.eq(id.get()))).execute(conn)
        })?;

        Ok(affected)
    }
}
