use axum::body::Bytes;
use axum::http::{HeaderMap, StatusCode};
use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::controller::discord::components::ComponentAction;
use crate::controller::discord::{aww, commands::Command, components, invite};
use crate::shared::middleware::discord_validation::validate_interaction;
use crate::shared::structs::AppState;
use crate::shared::structs::discord::interaction::Interaction;
use crate::shared::structs::discord::response::{InteractionError, InteractionResponse};

/// The interaction endpoint: verify the envelope, parse the payload,
/// dispatch, answer. Each request is a single bounded computation; all
/// failures surface directly in the response.
pub async fn handle_interaction(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let verified = match validate_interaction(&headers, body, &app_state.config.public_key) {
        Ok(verified) => verified,
        Err(rejection) => return rejection.into_response(),
    };

    let interaction = match Interaction::parse(verified) {
        Ok(interaction) => interaction,
        Err(e) => {
            tracing::error!("Failed to deserialize incoming payload: {}", e);
            return unknown_type();
        }
    };

    tracing::debug!("Received incoming interaction: {:?}", &interaction);

    dispatch(interaction, &app_state)
}

/// Flat one-level dispatch over the interaction discriminant. Returns
/// exactly one response per interaction.
fn dispatch(interaction: Interaction, app_state: &AppState) -> Response {
    match interaction {
        Interaction::Ping => ok(InteractionResponse::pong()),
        Interaction::ApplicationCommand(data) => match Command::from_name(&data.name) {
            Some(Command::Aww) => ok(aww::aww()),
            Some(Command::Invite) => ok(invite::invite(&app_state.config)),
            None => {
                tracing::warn!("Received unknown command: {}", data.name);
                unknown_type()
            }
        },
        Interaction::MessageComponent(data) => {
            match ComponentAction::from_custom_id(&data.custom_id) {
                Some(ComponentAction::Refine) => ok(components::refine_modal()),
                None => ok(components::component_fallback(&data)),
            }
        }
        Interaction::ModalSubmit(data) => ok(components::modal_fallback(&data)),
        Interaction::Unknown(unknown) => {
            tracing::warn!("Received unknown interaction type: {}", unknown);
            unknown_type()
        }
    }
}

fn ok(response: InteractionResponse) -> Response {
    (StatusCode::OK, Json(response)).into_response()
}

fn unknown_type() -> Response {
    (StatusCode::BAD_REQUEST, Json(InteractionError::unknown_type())).into_response()
}
