
pub mod models;
