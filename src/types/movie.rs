use actix_multipart::form::{tempfile::TempFile, text::Text, MultipartForm};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use entity::movie::Model as MovieModel;

use crate::access::{Role, RoleGrant};
use crate::types::user::UserSummary;

#[derive(MultipartForm)]
pub struct MovieForm {
    pub name: Option<Text<String>>,
    pub description: Option<Text<String>>,
    #[multipart(limit = "5 MiB")]
    pub picture: Option<TempFile>,
}

#[derive(Debug, Clone)]
pub struct RMovieCreate {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct MovieCreateRes {
    pub success: bool,
    pub message: String,
    pub movie: MovieModel,
}

#[derive(Serialize, Debug)]
pub struct MovieRes {
    pub success: bool,
    pub movie: MovieModel,
}

/// A movie the caller directs.
#[derive(Serialize, Debug)]
pub struct DirectedMovie {
    pub movie: MovieModel,
    pub role: Role,
    pub character: Option<String>,
}

/// A movie the caller crews on, with every non-director role they hold.
#[derive(Serialize, Debug)]
pub struct CrewMovie {
    pub movie: MovieModel,
    pub roles: Vec<RoleGrant>,
}

#[derive(Serialize, Debug)]
pub struct MovieListRes<T> {
    pub success: bool,
    pub movies: Vec<T>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RAssignRole {
    pub user_id: Option<Uuid>,
    pub role: Option<i32>,
    pub character: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RRemoveRole {
    pub user_id: Option<Uuid>,
    pub role: Option<i32>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AssignRoleRes {
    pub success: bool,
    pub message: String,
    pub user_role: entity::user_role_film::Model,
}

/// One credit on a movie's roster.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CreditEntry {
    pub user: UserSummary,
    pub role: i32,
    pub character: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct CreditsRes {
    pub success: bool,
    pub users: Vec<CreditEntry>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RemoveRoleRes {
    pub success: bool,
    pub message: String,
    pub removed_count: u64,
    pub users: Vec<CreditEntry>,
}

#[derive(Serialize, Debug)]
pub struct MyRoleRes {
    pub success: bool,
    pub role: Option<Role>,
    pub character: Option<String>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RolesRes {
    pub success: bool,
    pub roles: Vec<RoleGrant>,
    pub main_role: i32,
}

#[derive(Serialize, Debug)]
pub struct UsersRes {
    pub success: bool,
    pub users: Vec<UserSummary>,
}

#[derive(Deserialize, Debug)]
pub struct AvailableUsersQuery {
    pub role: Option<i32>,
}
