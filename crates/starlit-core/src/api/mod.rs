pub mod show;
pub mod types;
