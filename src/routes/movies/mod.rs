use crate::access::Role;
use crate::types::error::AppError;

pub mod add;
pub mod assign_role;
pub mod available_users;
pub mod get;
pub mod list;
pub mod remove_role;
pub mod roles;
pub mod users;


fn parse_role(raw: Option<i32>) -> Result<Role, AppError> {
    let raw = raw.ok_or_else(|| AppError::Validation("role is required".into()))?;
    Role::try_from(raw).map_err(AppError::Validation)
}
