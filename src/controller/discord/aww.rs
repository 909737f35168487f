use crate::shared::structs::discord::response::{
    ActionRow, Button, CallbackData, Embed, EmbedImage, InteractionResponse, SelectMenu,
    SelectOption,
};
use crate::shared::{EMBED_COLOR, GALLERY_IMAGE_ENDPOINT};

pub const PREV_BUTTON_ID: &str = "prev";
pub const NEXT_BUTTON_ID: &str = "next";
pub const PAGE_SELECT_ID: &str = "page";

const GALLERY_SIZE: usize = 3;

/// Builds the cuteness gallery: three image embeds plus one row of paging
/// controls. The controls are rendered only; every click comes back as an
/// independent interaction.
pub fn aww() -> InteractionResponse {
    let mut data = CallbackData::new().content("Here are some friends to brighten your day!");

    for index in 1..=GALLERY_SIZE {
        data = data.embed(gallery_embed(index));
    }

    let page_options = (1..=GALLERY_SIZE)
        .map(|index| SelectOption::new(index.to_string(), index.to_string()))
        .collect();

    let controls = ActionRow::new(vec![
        Button::secondary("Prev", PREV_BUTTON_ID).into(),
        Button::primary("Next", NEXT_BUTTON_ID).into(),
        SelectMenu::new(PAGE_SELECT_ID, page_options).into(),
    ]);

    InteractionResponse::message(data.components(vec![controls.into()]))
}

fn gallery_embed(index: usize) -> Embed {
    Embed {
        title: Some(format!("Cute friend #{index}")),
        description: None,
        color: Some(EMBED_COLOR),
        image: Some(EmbedImage {
            url: format!("{GALLERY_IMAGE_ENDPOINT}/aww-{index}/600/400"),
        }),
    }
}
