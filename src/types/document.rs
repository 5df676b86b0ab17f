use actix_multipart::form::{tempfile::TempFile, text::Text, MultipartForm};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Scenario upload; office documents are converted to PDF on the way in.
#[derive(MultipartForm)]
pub struct ScenarioForm {
    #[multipart(rename = "movieId")]
    pub movie_id: Option<Text<String>>,
    pub title: Option<Text<String>>,
    pub description: Option<Text<String>>,
    #[multipart(limit = "20 MiB")]
    pub file: Option<TempFile>,
}

#[derive(MultipartForm)]
pub struct BookForm {
    #[multipart(rename = "movieId")]
    pub movie_id: Option<Text<String>>,
    pub title: Option<Text<String>>,
    pub description: Option<Text<String>>,
    #[multipart(limit = "50 MiB")]
    pub file: Option<TempFile>,
}

#[derive(Debug, Clone)]
pub struct DBScenarioCreate {
    pub movie_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub file_url: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ScenarioPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub file_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DBBookUpsert {
    pub movie_id: Uuid,
    pub file_url: String,
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RCreateEmptyBook {
    pub movie_id: Option<Uuid>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RBookContent {
    pub content: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct BookRes {
    pub success: bool,
    pub message: String,
    pub book: entity::book::Model,
}
