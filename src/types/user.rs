use actix_multipart::form::{tempfile::TempFile, text::Text, MultipartForm};
use serde::{Serialize, Deserialize};
use uuid::Uuid;

use entity::user::Model as UserModel;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DBUserCreate {
    pub email: String,
    pub name: String,
    pub last_name: String,
    pub password_hash: String,
    pub password_salt: String,
    pub picture: Option<String>,
    pub phone_number: Option<String>,
    pub role: Option<i32>,
}

#[derive(MultipartForm)]
pub struct RegisterForm {
    pub email: Option<Text<String>>,
    pub name: Option<Text<String>>,
    #[multipart(rename = "lastName")]
    pub last_name: Option<Text<String>>,
    pub password: Option<Text<String>>,
    pub role: Option<Text<String>>,
    #[multipart(rename = "phoneNumber")]
    pub phone_number: Option<Text<String>>,
    #[multipart(limit = "5 MiB")]
    pub picture: Option<TempFile>,
}

/// Registration fields, read from the multipart form.
#[derive(Debug, Clone)]
pub struct RUserRegister {
    pub email: String,
    pub name: String,
    pub last_name: String,
    pub password: String,
    pub role: Option<i32>,
    pub phone_number: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RLogin {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct LoginRes {
    pub token: String,
}

#[derive(Serialize, Debug)]
pub struct RegisterRes {
    pub success: bool,
    pub token: String,
    pub user: UserModel,
}

/// Public slice of a user, used wherever another record references one.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub last_name: String,
    pub picture: Option<String>,
    pub phone_number: Option<String>,
}

impl From<UserModel> for UserSummary {
    fn from(u: UserModel) -> Self {
        Self {
            id: u.id,
            email: u.email,
            name: u.name,
            last_name: u.last_name,
            picture: u.picture,
            phone_number: u.phone_number,
        }
    }
}

impl From<&UserModel> for UserSummary {
    fn from(u: &UserModel) -> Self {
        u.clone().into()
    }
}
