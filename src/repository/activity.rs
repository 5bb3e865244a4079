use diesel::prelude::*;

use crate::domain::activity::{NewUserActivity, UserActivity};
use crate::domain::types::UserId;
use crate::models::activity::{NewUserActivity as DbNewUserActivity, UserActivity as DbUserActivity};
use crate::repository::errors::RepositoryResult;
use crate::repository::{ActivityReader, ActivityWriter, DieselRepository};

impl ActivityReader for DieselRepository {
    fn list_activities(&self, user_id: UserId) -> RepositoryResult<Vec<UserActivity>> {
        use crate::schema::user_activities;

        let mut conn = self.conn()?;

        let items = user_activities::table
            .filter(user_activities::user_id.eq(user_id.get()))
            .order(user_activities::created_at.desc())
            .load::<DbUserActivity>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<UserActivity>, _>>()?;

        Ok(items)
    }
}

impl ActivityWriter for DieselRepository {
    fn log_activity(&self, activity: &NewUserActivity) -> RepositoryResult<usize> {
        use crate::schema::user_activities;

        let mut conn = self.conn()?;
        let db_activity: DbNewUserActivity = activity.clone().into();

        let affected = diesel::insert_into(user_activities::table)
            .values(db_activity)
            .execute(&mut conn)?;

        Ok(affected)
    }
}
