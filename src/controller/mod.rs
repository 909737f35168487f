use axum::{Router, routing::get};

use crate::controller::discord::interaction::handle_interaction;
use crate::shared::structs::AppState;

pub mod discord;
pub mod ping;

/// Builds the application router: the liveness probe and the interaction
/// endpoint share `/`, everything else falls through to 404. Fails when
/// the command table carries duplicate names.
pub fn create_router(app_state: AppState) -> anyhow::Result<Router> {
    discord::commands::validate_command_table()?;

    let router = Router::new()
        .route("/", get(ping::greet).post(handle_interaction))
        .fallback(ping::not_found)
        .with_state(app_state);

    Ok(router)
}
