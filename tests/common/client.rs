use actix_web::{web, App};
use serde_json::Value;
use slate::{
    db::database_service::DatabaseService,
    storage::Storage,
    types::{error::AppError, user::DBUserCreate},
    utils::token::hash_password,
};
use std::sync::Arc;
use uuid::Uuid;

pub const BOUNDARY: &str = "----slate-test-boundary";

pub struct TestClient {
    pub db: Arc<DatabaseService>,
    pub storage: Storage,
}

impl TestClient {
    pub fn new(ctx: &super::TestContext) -> Self {
        TestClient { db: ctx.db.clone(), storage: ctx.storage.clone() }
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(web::Data::new(self.storage.clone()))
            .configure(slate::routes::configure_routes)
    }

    /// Creates a user straight in the database and opens a session for them.
    pub async fn create_test_user(&self, email: Option<String>) -> Result<(Uuid, String), AppError> {
        let email = email.unwrap_or_else(|| format!("user-{}@test.com", Uuid::new_v4()));
        let (password_hash, password_salt) = hash_password("password123").expect("Failed to hash password");

        let user = self
            .db
            .create_user(DBUserCreate {
                email,
                name: "Test".to_string(),
                last_name: "User".to_string(),
                password_hash,
                password_salt,
                picture: None,
                phone_number: None,
                role: None,
            })
            .await?;

        let token = self.db.create_session(user.id, 1).await?;
        Ok((user.id, token))
    }

    /// A movie directed by `director`.
    #[allow(dead_code)]
    pub async fn create_test_movie(&self, director: Uuid, name: &str) -> Uuid {
        self.db
            .create_movie(
                director,
                slate::types::movie::RMovieCreate { name: name.to_string(), description: None },
                None,
            )
            .await
            .expect("Failed to create movie")
            .id
    }
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

/// Builds a multipart/form-data body from text fields and an optional
/// `(field, filename, bytes)` file part.
#[allow(dead_code)]
pub fn multipart_body(fields: &[(&str, &str)], file: Option<(&str, &str, &[u8])>) -> ((&'static str, String), Vec<u8>) {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes());
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    }
    if let Some((name, filename, bytes)) = file {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n").as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    (("Content-Type", format!("multipart/form-data; boundary={BOUNDARY}")), body)
}

#[allow(dead_code)]
pub fn ids(list: &Value, pointer: &str) -> Vec<String> {
    list.as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.pointer(pointer).and_then(Value::as_str).map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
