pub mod book;
pub mod comment;
pub mod database_service;
pub mod movie;
pub mod note;
pub mod role;
pub mod scenario;
pub mod session;
pub mod user;
