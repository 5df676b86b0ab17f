pub mod add;
pub mod create_empty;
pub mod delete;
pub mod get;
pub mod update;

const BOOK_EXTENSIONS: [&str; 2] = ["pdf", "epub"];
