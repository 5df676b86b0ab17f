use crate::db::database_service::DatabaseService;
use crate::types::document::{DBScenarioCreate, ScenarioPatch};
use crate::types::error::AppError;
use crate::utils::token::new_id;
use chrono::Utc;
use entity::scenario::{self, ActiveModel as ScenarioActive, Entity as Scenario, Model as ScenarioModel};
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, IntoActiveModel, QueryFilter, Set};
use uuid::Uuid;

impl DatabaseService {
    pub async fn find_scenario(&self, movie_id: Uuid) -> Result<Option<ScenarioModel>, AppError> {
        Ok(Scenario::find()
            .filter(scenario::Column::MovieId.eq(movie_id))
            .one(&self.database_connection)
            .await?)
    }

    pub async fn get_scenario(&self, movie_id: Uuid) -> Result<ScenarioModel, AppError> {
        Ok(self
            .find_scenario(movie_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Scenario not found".into()))?)
    }

    pub async fn create_scenario(&self, payload: DBScenarioCreate) -> Result<ScenarioModel, AppError> {
        self.ensure_movie_exists(payload.movie_id).await?;

        ScenarioActive {
            id: Set(new_id()),
            movie_id: Set(payload.movie_id),
            title: Set(payload.title),
            description: Set(payload.description),
            file_url: Set(payload.file_url),
            created_at: Set(Utc::now()),
        }
        .insert(&self.database_connection)
        .await
        .map_err(|e| AppError::from(e).on_duplicate(scenario_exists))
    }

    /// Applies the fields present in `patch`. Returns the updated row and the
    /// file reference it replaced, if any.
    pub async fn update_scenario(
        &self,
        movie_id: Uuid,
        patch: ScenarioPatch,
    ) -> Result<(ScenarioModel, Option<String>), AppError> {
        let existing = self.get_scenario(movie_id).await?;
        let replaced = match &patch.file_url {
            Some(_) => existing.file_url.clone(),
            None => None,
        };

        let mut active = existing.into_active_model();
        if let Some(title) = patch.title {
            active.title = Set(title);
        }
        if let Some(description) = patch.description {
            active.description = Set(Some(description));
        }
        if let Some(file_url) = patch.file_url {
            active.file_url = Set(Some(file_url));
        }

        Ok((active.update(&self.database_connection).await?, replaced))
    }

    pub async fn delete_scenario(&self, movie_id: Uuid) -> Result<ScenarioModel, AppError> {
        let existing = self.get_scenario(movie_id).await?;
        Scenario::delete_by_id(existing.id).exec(&self.database_connection).await?;
        Ok(existing)
    }
}

pub(crate) fn scenario_exists() -> AppError {
    AppError::BadRequest("Scenario already exists for this movie".into())
}
