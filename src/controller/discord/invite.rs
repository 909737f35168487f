use crate::shared::DISCORD_AUTHORIZE_ENDPOINT;
use crate::shared::structs::config::Configuration;
use crate::shared::structs::discord::response::{CallbackData, InteractionResponse};

/// Answers with the OAuth2 authorize link for the configured application.
/// Ephemeral, so only the invoking user sees their own invite link.
pub fn invite(config: &Configuration) -> InteractionResponse {
    let url = format!(
        "{}?client_id={}&scope=applications.commands",
        DISCORD_AUTHORIZE_ENDPOINT, config.application_id
    );

    InteractionResponse::message(CallbackData::new().content(url).ephemeral())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::structs::discord::response::MESSAGE_FLAG_EPHEMERAL;

    fn test_config() -> Configuration {
        Configuration {
            server_bind_point: "127.0.0.1:0".into(),
            log_level: "DEBUG".into(),
            application_id: "123456789012345678".into(),
            public_key: String::new(),
        }
    }

    #[test]
    fn link_carries_the_application_id() {
        let data = invite(&test_config()).data.unwrap();
        let content = data.content.unwrap();

        assert!(content.contains("client_id=123456789012345678"));
        assert!(content.starts_with(DISCORD_AUTHORIZE_ENDPOINT));
    }

    #[test]
    fn response_is_ephemeral() {
        let data = invite(&test_config()).data.unwrap();
        assert_eq!(
            data.flags.unwrap_or_default() & MESSAGE_FLAG_EPHEMERAL,
            MESSAGE_FLAG_EPHEMERAL
        );
    }
}
