use serde::{Deserialize, Serialize};

use crate::shared::middleware::discord_validation::VerifiedBody;

pub const INTERACTION_PING: i32 = 1;
pub const INTERACTION_APPLICATION_COMMAND: i32 = 2;
pub const INTERACTION_MESSAGE_COMPONENT: i32 = 3;
pub const INTERACTION_MODAL_SUBMIT: i32 = 5;

/// Raw interaction payload as it arrives on the wire. The `type` field is
/// the discriminant; the shape of `data` depends on it.
#[derive(Debug, Clone, Deserialize)]
pub struct InteractionRequest {
    pub r#type: i32,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CommandSubmitData {
    pub name: String,
    #[serde(default)]
    pub options: Vec<CommandOption>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CommandOption {
    pub name: String,
    #[serde(default)]
    pub value: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ComponentSubmitData {
    pub custom_id: String,
    #[serde(default)]
    pub component_type: Option<i32>,
    #[serde(default)]
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModalSubmitData {
    pub custom_id: String,
    #[serde(default)]
    pub components: Vec<ModalSubmitRow>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModalSubmitRow {
    #[serde(default)]
    pub components: Vec<ModalSubmitField>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModalSubmitField {
    pub custom_id: String,
    #[serde(default)]
    pub value: Option<String>,
}

/// One inbound interaction, classified by discriminant. Unrecognized
/// discriminants are preserved so the dispatcher can log them before
/// answering with the error object.
#[derive(Debug, Clone)]
pub enum Interaction {
    Ping,
    ApplicationCommand(CommandSubmitData),
    MessageComponent(ComponentSubmitData),
    ModalSubmit(ModalSubmitData),
    Unknown(i32),
}

impl Interaction {
    /// Parses a verified request body. Consuming a [`VerifiedBody`] is the
    /// only way to obtain an `Interaction`, so parsing can only happen
    /// after the envelope check.
    pub fn parse(body: VerifiedBody) -> anyhow::Result<Self> {
        let request = serde_json::from_slice::<InteractionRequest>(body.bytes())?;

        let interaction = match request.r#type {
            INTERACTION_PING => Interaction::Ping,
            INTERACTION_APPLICATION_COMMAND => {
                Interaction::ApplicationCommand(submit_data(request.data)?)
            }
            INTERACTION_MESSAGE_COMPONENT => {
                Interaction::MessageComponent(submit_data(request.data)?)
            }
            INTERACTION_MODAL_SUBMIT => Interaction::ModalSubmit(submit_data(request.data)?),
            unknown => Interaction::Unknown(unknown),
        };

        Ok(interaction)
    }
}

fn submit_data<T>(data: Option<serde_json::Value>) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let value =
        data.ok_or_else(|| anyhow::anyhow!("Interaction payload is missing the data object."))?;

    Ok(serde_json::from_value(value)?)
}
