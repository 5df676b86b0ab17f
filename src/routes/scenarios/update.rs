use actix_multipart::form::MultipartForm;
use actix_web::{put, web};
use std::sync::Arc;
use uuid::Uuid;

use super::{store_as_pdf, ScenarioRes};
use crate::db::database_service::DatabaseService;
use crate::storage::Storage;
use crate::types::document::{ScenarioForm, ScenarioPatch};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::multipart;
use crate::utils::webutils::AuthUser;

#[put("/update/{movie_id}")]
async fn update(
    _auth: AuthUser,
    db: web::Data<Arc<DatabaseService>>,
    storage: web::Data<Storage>,
    path: web::Path<Uuid>,
    MultipartForm(form): MultipartForm<ScenarioForm>,
) -> ApiResult<ScenarioRes> {
    let movie_id = path.into_inner();
    db.get_scenario(movie_id).await?;

    let file_url = match multipart::take_file(form.file).await? {
        Some(file) => Some(store_as_pdf(&storage, file).await?),
        None => None,
    };

    let patch = ScenarioPatch {
        title: multipart::text(form.title),
        description: multipart::text(form.description),
        file_url: file_url.clone(),
    };
    let (scenario, replaced) = match db.update_scenario(movie_id, patch).await {
        Ok(updated) => updated,
        Err(e) => {
            storage.discard(file_url.as_deref()).await;
            return Err(e);
        }
    };
    storage.discard(replaced.as_deref()).await;

    Ok(ApiResponse::Ok(ScenarioRes {
        success: true,
        message: "Scenario updated".into(),
        scenario,
    }))
}
