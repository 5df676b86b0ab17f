use crate::db::database_service::DatabaseService;
use crate::{
    types::{error::AppError, user},
    utils::token,
};
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};
use std::collections::HashMap;
use uuid::Uuid;

impl DatabaseService {
    pub async fn user_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    pub async fn get_user_by_id(&self, id: &Uuid) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(*id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User not found".into()))?)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<UserModel, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User not found".into()))?)
    }

    /// Signup: create user. The unique email key decides duplicates.
    pub async fn create_user(&self, payload: user::DBUserCreate) -> Result<UserModel, AppError> {
        let now = Utc::now();

        Ok(UserActive {
            id: Set(token::new_id()),
            email: Set(payload.email),
            name: Set(payload.name),
            last_name: Set(payload.last_name),
            password_hash: Set(payload.password_hash),
            password_salt: Set(payload.password_salt),
            picture: Set(payload.picture),
            phone_number: Set(payload.phone_number),
            role: Set(payload.role),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.database_connection)
        .await?)
    }

    /// Everyone except `user_id`, by name.
    pub async fn list_other_users(&self, user_id: Uuid) -> Result<Vec<UserModel>, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Id.ne(user_id))
            .order_by_asc(entity::user::Column::Name)
            .order_by_asc(entity::user::Column::LastName)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn list_users(&self) -> Result<Vec<UserModel>, AppError> {
        Ok(User::find()
            .order_by_asc(entity::user::Column::Name)
            .order_by_asc(entity::user::Column::LastName)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn get_users_by_ids(&self, ids: &[Uuid]) -> Result<HashMap<Uuid, UserModel>, AppError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        Ok(User::find()
            .filter(entity::user::Column::Id.is_in(ids.iter().copied()))
            .all(&self.database_connection)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect())
    }

    /// Fails with `Validation` naming the first id that has no user.
    pub async fn ensure_users_exist(&self, ids: &[Uuid]) -> Result<(), AppError> {
        let found = self.get_users_by_ids(ids).await?;
        match ids.iter().find(|id| !found.contains_key(id)) {
            Some(missing) => Err(AppError::Validation(format!("Unknown user {missing}"))),
            None => Ok(()),
        }
    }
}
