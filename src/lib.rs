pub mod access;
pub mod config;
pub mod db;
pub mod routes;
pub mod storage;
pub mod types;
pub mod utils;
