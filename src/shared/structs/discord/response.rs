use serde::Serialize;

pub const CALLBACK_PONG: i32 = 1;
pub const CALLBACK_CHANNEL_MESSAGE_WITH_SOURCE: i32 = 4;
pub const CALLBACK_MODAL: i32 = 9;

pub const COMPONENT_ACTION_ROW: i32 = 1;
pub const COMPONENT_BUTTON: i32 = 2;
pub const COMPONENT_STRING_SELECT: i32 = 3;
pub const COMPONENT_TEXT_INPUT: i32 = 4;

pub const BUTTON_STYLE_PRIMARY: i32 = 1;
pub const BUTTON_STYLE_SECONDARY: i32 = 2;

pub const TEXT_INPUT_STYLE_SHORT: i32 = 1;

pub const MESSAGE_FLAG_EPHEMERAL: u32 = 1 << 6;

/// One of the closed set of interaction responses: acknowledgement,
/// channel message, or modal prompt.
#[derive(Debug, Clone, Serialize)]
pub struct InteractionResponse {
    pub r#type: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<CallbackData>,
}

impl InteractionResponse {
    pub fn pong() -> Self {
        InteractionResponse {
            r#type: CALLBACK_PONG,
            data: None,
        }
    }

    pub fn message(data: CallbackData) -> Self {
        InteractionResponse {
            r#type: CALLBACK_CHANNEL_MESSAGE_WITH_SOURCE,
            data: Some(data),
        }
    }

    pub fn modal(data: CallbackData) -> Self {
        InteractionResponse {
            r#type: CALLBACK_MODAL,
            data: Some(data),
        }
    }
}

/// Error object returned for unrecognized interaction discriminants and
/// command names, always paired with a 400 status.
#[derive(Debug, Clone, Serialize)]
pub struct InteractionError {
    pub error: String,
}

impl InteractionError {
    pub fn unknown_type() -> Self {
        InteractionError {
            error: "Unknown Type".into(),
        }
    }
}

/// Callback payload of a channel-message or modal response. Unset fields
/// are omitted from the wire format rather than serialized as null.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CallbackData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<Embed>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<Component>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl CallbackData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn embed(mut self, embed: Embed) -> Self {
        self.embeds.push(embed);
        self
    }

    pub fn components(mut self, components: Vec<Component>) -> Self {
        self.components = components;
        self
    }

    pub fn ephemeral(mut self) -> Self {
        self.flags = Some(self.flags.unwrap_or_default() | MESSAGE_FLAG_EPHEMERAL);
        self
    }

    pub fn custom_id(mut self, custom_id: impl Into<String>) -> Self {
        self.custom_id = Some(custom_id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Embed {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<EmbedImage>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmbedImage {
    pub url: String,
}

/// Message components a response may carry. Serialized untagged; each
/// concrete struct carries its own `type` discriminant.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Component {
    ActionRow(ActionRow),
    Button(Button),
    SelectMenu(SelectMenu),
    TextInput(TextInput),
}

#[derive(Debug, Clone, Serialize)]
pub struct ActionRow {
    pub r#type: i32,
    pub components: Vec<Component>,
}

impl ActionRow {
    pub fn new(components: Vec<Component>) -> Self {
        ActionRow {
            r#type: COMPONENT_ACTION_ROW,
            components,
        }
    }
}

impl From<ActionRow> for Component {
    fn from(value: ActionRow) -> Self {
        Component::ActionRow(value)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Button {
    pub r#type: i32,
    pub style: i32,
    pub label: String,
    pub custom_id: String,
}

impl Button {
    pub fn primary(label: impl Into<String>, custom_id: impl Into<String>) -> Self {
        Self::styled(label, custom_id, BUTTON_STYLE_PRIMARY)
    }

    pub fn secondary(label: impl Into<String>, custom_id: impl Into<String>) -> Self {
        Self::styled(label, custom_id, BUTTON_STYLE_SECONDARY)
    }

    fn styled(label: impl Into<String>, custom_id: impl Into<String>, style: i32) -> Self {
        Button {
            r#type: COMPONENT_BUTTON,
            style,
            label: label.into(),
            custom_id: custom_id.into(),
        }
    }
}

impl From<Button> for Component {
    fn from(value: Button) -> Self {
        Component::Button(value)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SelectMenu {
    pub r#type: i32,
    pub custom_id: String,
    pub options: Vec<SelectOption>,
}

impl SelectMenu {
    pub fn new(custom_id: impl Into<String>, options: Vec<SelectOption>) -> Self {
        SelectMenu {
            r#type: COMPONENT_STRING_SELECT,
            custom_id: custom_id.into(),
            options,
        }
    }
}

impl From<SelectMenu> for Component {
    fn from(value: SelectMenu) -> Self {
        Component::SelectMenu(value)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        SelectOption {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TextInput {
    pub r#type: i32,
    pub style: i32,
    pub custom_id: String,
    pub label: String,
}

impl TextInput {
    pub fn short(custom_id: impl Into<String>, label: impl Into<String>) -> Self {
        TextInput {
            r#type: COMPONENT_TEXT_INPUT,
            style: TEXT_INPUT_STYLE_SHORT,
            custom_id: custom_id.into(),
            label: label.into(),
        }
    }
}

impl From<TextInput> for Component {
    fn from(value: TextInput) -> Self {
        Component::TextInput(value)
    }
}
