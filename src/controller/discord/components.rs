use crate::shared::structs::discord::interaction::{ComponentSubmitData, ModalSubmitData};
use crate::shared::structs::discord::response::{
    ActionRow, CallbackData, InteractionResponse, TextInput,
};

pub const REFINE_CUSTOM_ID: &str = "refine";
pub const REFINE_MODAL_ID: &str = "refine-modal";

const PROMPT_INPUT_ID: &str = "prompt";

/// Component actions with a dedicated handler. Anything else lands in the
/// echo fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentAction {
    Refine,
}

impl ComponentAction {
    pub fn from_custom_id(custom_id: &str) -> Option<Self> {
        match custom_id {
            REFINE_CUSTOM_ID => Some(ComponentAction::Refine),
            _ => None,
        }
    }
}

/// Opens the refine prompt: a modal with a single short text input.
pub fn refine_modal() -> InteractionResponse {
    let prompt = TextInput::short(PROMPT_INPUT_ID, "Refine the prompt");

    InteractionResponse::modal(
        CallbackData::new()
            .custom_id(REFINE_MODAL_ID)
            .title("Refine your search")
            .components(vec![ActionRow::new(vec![prompt.into()]).into()]),
    )
}

/// Fallback for component interactions with no dedicated handler: echo
/// the received data back as text.
pub fn component_fallback(data: &ComponentSubmitData) -> InteractionResponse {
    let echoed = serde_json::to_string(data).unwrap_or_else(|_| data.custom_id.clone());

    InteractionResponse::message(
        CallbackData::new().content(format!("Received component interaction: {echoed}")),
    )
}

/// Modal submissions are echoed back as text; field contents are already
/// validated by Discord before they reach this endpoint.
pub fn modal_fallback(data: &ModalSubmitData) -> InteractionResponse {
    let echoed = serde_json::to_string(data).unwrap_or_else(|_| data.custom_id.clone());

    InteractionResponse::message(
        CallbackData::new().content(format!("Received modal submission: {echoed}")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::structs::discord::response::{
        CALLBACK_MODAL, COMPONENT_TEXT_INPUT, Component, TEXT_INPUT_STYLE_SHORT,
    };

    #[test]
    fn refine_resolves_and_other_ids_fall_through() {
        assert_eq!(
            ComponentAction::from_custom_id("refine"),
            Some(ComponentAction::Refine)
        );
        assert_eq!(ComponentAction::from_custom_id("Refine"), None);
        assert_eq!(ComponentAction::from_custom_id("next"), None);
    }

    #[test]
    fn refine_modal_has_one_short_prompt_input() {
        let response = refine_modal();
        assert_eq!(response.r#type, CALLBACK_MODAL);

        let data = response.data.expect("Modal response should carry data.");
        assert_eq!(data.custom_id.as_deref(), Some(REFINE_MODAL_ID));
        assert_eq!(data.components.len(), 1);

        let Component::ActionRow(row) = &data.components[0] else {
            panic!("Modal should hold an action row.");
        };
        assert_eq!(row.components.len(), 1);

        let Component::TextInput(input) = &row.components[0] else {
            panic!("Row should hold a text input.");
        };
        assert_eq!(input.r#type, COMPONENT_TEXT_INPUT);
        assert_eq!(input.style, TEXT_INPUT_STYLE_SHORT);
        assert_eq!(input.custom_id, PROMPT_INPUT_ID);
    }

    #[test]
    fn fallback_echoes_the_component_data() {
        let data = ComponentSubmitData {
            custom_id: "mystery".into(),
            component_type: Some(2),
            values: Vec::new(),
        };

        let response = component_fallback(&data);
        let content = response.data.unwrap().content.unwrap();
        assert!(content.contains("mystery"));
    }
}
