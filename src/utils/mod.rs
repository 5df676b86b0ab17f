pub mod multipart;
pub mod token;
pub mod webutils;
