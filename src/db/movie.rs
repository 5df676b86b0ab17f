use crate::access::{Role, RoleGrant};
use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::movie::{CrewMovie, DirectedMovie, RMovieCreate};
use crate::utils::token::new_id;
use chrono::Utc;
use entity::movie::{ActiveModel as MovieActive, Entity as Movie, Model as MovieModel};
use entity::user_role_film::{self, ActiveModel as RoleActive, Entity as UserRoleFilm};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set, TransactionTrait,
};
use std::collections::HashMap;
use uuid::Uuid;

impl DatabaseService {
    /// Creates the movie and credits `creator` as its director in one transaction.
    pub async fn create_movie(
        &self,
        creator: Uuid,
        payload: RMovieCreate,
        picture: Option<String>,
    ) -> Result<MovieModel, AppError> {
        let now = Utc::now();
        let txn = self.database_connection.begin().await?;

        let movie = MovieActive {
            id: Set(new_id()),
            name: Set(payload.name),
            description: Set(payload.description),
            picture: Set(picture),
            created_at: Set(now),
        }
        .insert(&txn)
        .await?;

        RoleActive {
            id: Set(new_id()),
            movie_id: Set(movie.id),
            user_id: Set(creator),
            role: Set(Role::Director.number()),
            character: Set(None),
            assigned_at: Set(now),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok(movie)
    }

    pub async fn get_movie(&self, id: Uuid) -> Result<MovieModel, AppError> {
        Ok(Movie::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Movie not found".into()))?)
    }

    pub async fn movie_exists(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(Movie::find_by_id(id).count(&self.database_connection).await? > 0)
    }

    pub async fn ensure_movie_exists(&self, id: Uuid) -> Result<(), AppError> {
        if !self.movie_exists(id).await? {
            return Err(AppError::not_found("Movie"));
        }
        Ok(())
    }

    /// Movies `user_id` directs, newest first.
    pub async fn list_directed_movies(&self, user_id: Uuid) -> Result<Vec<DirectedMovie>, AppError> {
        let rows = UserRoleFilm::find()
            .filter(user_role_film::Column::UserId.eq(user_id))
            .filter(user_role_film::Column::Role.eq(Role::Director.number()))
            .order_by_asc(user_role_film::Column::AssignedAt)
            .all(&self.database_connection)
            .await?;

        let mut first_row: HashMap<Uuid, user_role_film::Model> = HashMap::new();
        for row in rows {
            first_row.entry(row.movie_id).or_insert(row);
        }

        let movies = self.movies_newest_first(first_row.keys().copied().collect()).await?;
        Ok(movies
            .into_iter()
            .filter_map(|movie| {
                let row = first_row.remove(&movie.id)?;
                Some(DirectedMovie { movie, role: Role::Director, character: row.character })
            })
            .collect())
    }

    /// Movies where `user_id` holds anything other than director, newest
    /// first, with every such role.
    pub async fn list_crew_movies(&self, user_id: Uuid) -> Result<Vec<CrewMovie>, AppError> {
        let rows = UserRoleFilm::find()
            .filter(user_role_film::Column::UserId.eq(user_id))
            .filter(user_role_film::Column::Role.ne(Role::Director.number()))
            .order_by_asc(user_role_film::Column::AssignedAt)
            .all(&self.database_connection)
            .await?;

        let mut grants: HashMap<Uuid, Vec<RoleGrant>> = HashMap::new();
        for row in rows {
            if let Ok(role) = Role::try_from(row.role) {
                grants
                    .entry(row.movie_id)
                    .or_default()
                    .push(RoleGrant { role, character: row.character });
            }
        }

        let movies = self.movies_newest_first(grants.keys().copied().collect()).await?;
        Ok(movies
            .into_iter()
            .filter_map(|movie| {
                let roles = grants.remove(&movie.id)?;
                Some(CrewMovie { movie, roles })
            })
            .collect())
    }

    async fn movies_newest_first(&self, ids: Vec<Uuid>) -> Result<Vec<MovieModel>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        Ok(Movie::find()
            .filter(entity::movie::Column::Id.is_in(ids))
            .order_by_desc(entity::movie::Column::CreatedAt)
            .order_by_desc(entity::movie::Column::Id)
            .all(&self.database_connection)
            .await?)
    }
}
