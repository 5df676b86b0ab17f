use crate::access::{Role, RoleSet};
use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::movie::CreditEntry;
use crate::types::user::UserSummary;
use crate::utils::token::new_id;
use chrono::Utc;
use entity::user::Entity as User;
use entity::user_role_film::{self, ActiveModel as RoleActive, Entity as UserRoleFilm, Model as RoleModel};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set};
use std::collections::HashSet;
use tracing::info;
use uuid::Uuid;

impl DatabaseService {
    /// Raw ledger rows for (user, movie), oldest first.
    pub async fn role_rows(&self, user_id: Uuid, movie_id: Uuid) -> Result<Vec<RoleModel>, AppError> {
        Ok(UserRoleFilm::find()
            .filter(user_role_film::Column::MovieId.eq(movie_id))
            .filter(user_role_film::Column::UserId.eq(user_id))
            .order_by_asc(user_role_film::Column::AssignedAt)
            .all(&self.database_connection)
            .await?)
    }

    /// Every role `user_id` holds on `movie_id`. A missing movie resolves to
    /// the empty set rather than an error.
    pub async fn resolve_roles(&self, user_id: Uuid, movie_id: Uuid) -> Result<RoleSet, AppError> {
        let rows = self.role_rows(user_id, movie_id).await?;
        Ok(RoleSet::from_rows(&rows))
    }

    /// Adds a credit. Duplicate (movie, user, role) rows are allowed.
    pub async fn assign_role(
        &self,
        movie_id: Uuid,
        user_id: Uuid,
        role: Role,
        character: Option<String>,
    ) -> Result<RoleModel, AppError> {
        self.ensure_movie_exists(movie_id).await?;
        self.get_user_by_id(&user_id).await?;

        let character = character.map(|c| c.trim().to_string()).filter(|c| !c.is_empty());

        let row = RoleActive {
            id: Set(new_id()),
            movie_id: Set(movie_id),
            user_id: Set(user_id),
            role: Set(role.number()),
            character: Set(character),
            assigned_at: Set(Utc::now()),
        }
        .insert(&self.database_connection)
        .await?;

        info!("Assigned {} to user {} on movie {}", role, user_id, movie_id);
        Ok(row)
    }

    /// Deletes every row matching the triple in one statement. The director
    /// credit can never be removed this way.
    pub async fn remove_role(&self, movie_id: Uuid, user_id: Uuid, role: Role) -> Result<u64, AppError> {
        if role == Role::Director {
            return Err(AppError::Forbidden("Director cannot be removed".into()));
        }
        self.ensure_movie_exists(movie_id).await?;

        let res = UserRoleFilm::delete_many()
            .filter(user_role_film::Column::MovieId.eq(movie_id))
            .filter(user_role_film::Column::UserId.eq(user_id))
            .filter(user_role_film::Column::Role.eq(role.number()))
            .exec(&self.database_connection)
            .await?;

        if res.rows_affected == 0 {
            return Err(AppError::NotFound("Role not found for that user".into()));
        }

        info!("Removed {} row(s) of {} for user {} on movie {}", res.rows_affected, role, user_id, movie_id);
        Ok(res.rows_affected)
    }

    /// The movie's roster, one entry per ledger row, in assignment order.
    pub async fn list_credits(&self, movie_id: Uuid) -> Result<Vec<CreditEntry>, AppError> {
        let rows = UserRoleFilm::find()
            .filter(user_role_film::Column::MovieId.eq(movie_id))
            .order_by_asc(user_role_film::Column::AssignedAt)
            .find_also_related(User)
            .all(&self.database_connection)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(row, user)| {
                Some(CreditEntry {
                    user: UserSummary::from(user?),
                    role: row.role,
                    character: row.character,
                })
            })
            .collect())
    }

    /// Users who do not yet hold `role` on the movie. With no role given,
    /// every user is available.
    pub async fn list_available_users(
        &self,
        movie_id: Uuid,
        role: Option<Role>,
    ) -> Result<Vec<UserSummary>, AppError> {
        let taken: HashSet<Uuid> = match role {
            Some(role) => UserRoleFilm::find()
                .select_only()
                .column(user_role_film::Column::UserId)
                .filter(user_role_film::Column::MovieId.eq(movie_id))
                .filter(user_role_film::Column::Role.eq(role.number()))
                .into_tuple::<Uuid>()
                .all(&self.database_connection)
                .await?
                .into_iter()
                .collect(),
            None => HashSet::new(),
        };

        Ok(self
            .list_users()
            .await?
            .into_iter()
            .filter(|u| !taken.contains(&u.id))
            .map(UserSummary::from)
            .collect())
    }

    /// Ids of every movie `user_id` holds at least one role on.
    pub async fn list_movie_ids_for_user(&self, user_id: Uuid) -> Result<Vec<Uuid>, AppError> {
        let ids: Vec<Uuid> = UserRoleFilm::find()
            .select_only()
            .column(user_role_film::Column::MovieId)
            .filter(user_role_film::Column::UserId.eq(user_id))
            .order_by_asc(user_role_film::Column::AssignedAt)
            .into_tuple::<Uuid>()
            .all(&self.database_connection)
            .await?;

        let mut seen = HashSet::new();
        Ok(ids.into_iter().filter(|id| seen.insert(*id)).collect())
    }
}
