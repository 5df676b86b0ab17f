use actix_multipart::form::MultipartForm;
use actix_web::{post, web};
use std::sync::Arc;
use tracing::info;

use super::{store_as_pdf, ScenarioRes};
use crate::db::database_service::DatabaseService;
use crate::db::scenario::scenario_exists;
use crate::storage::Storage;
use crate::types::document::{DBScenarioCreate, ScenarioForm};
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::multipart;
use crate::utils::webutils::AuthUser;

#[post("/add")]
async fn add(
    auth: AuthUser,
    db: web::Data<Arc<DatabaseService>>,
    storage: web::Data<Storage>,
    MultipartForm(form): MultipartForm<ScenarioForm>,
) -> ApiResult<ScenarioRes> {
    let movie_id = multipart::uuid(form.movie_id, "movieId")?
        .ok_or_else(|| AppError::Validation("movieId is required".into()))?;
    let title = multipart::require(form.title, "title")?;

    db.ensure_movie_exists(movie_id).await?;
    if db.find_scenario(movie_id).await?.is_some() {
        return Err(scenario_exists());
    }

    let file_url = match multipart::take_file(form.file).await? {
        Some(file) => Some(store_as_pdf(&storage, file).await?),
        None => None,
    };

    let scenario = match db
        .create_scenario(DBScenarioCreate {
            movie_id,
            title,
            description: multipart::text(form.description),
            file_url: file_url.clone(),
        })
        .await
    {
        Ok(scenario) => scenario,
        Err(e) => {
            storage.discard(file_url.as_deref()).await;
            return Err(e);
        }
    };
    info!("User {} added scenario {} to movie {}", auth.id, scenario.id, movie_id);

    Ok(ApiResponse::Created(ScenarioRes {
        success: true,
        message: "Scenario created".into(),
        scenario,
    }))
}
