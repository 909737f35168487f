use crate::shared::structs::config::Configuration;

pub mod config;
pub mod discord;

#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Configuration,
}
