pub mod comment;
pub mod document;
pub mod error;
pub mod movie;
pub mod note;
pub mod response;
pub mod user;
