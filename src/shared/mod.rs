pub mod middleware;
pub mod structs;

pub const DISCORD_AUTHORIZE_ENDPOINT: &str = "https://discord.com/oauth2/authorize";

/// Third-party placeholder image service; `{seed}/{width}/{height}` gets
/// appended per embed. Opaque data as far as this service is concerned.
pub const GALLERY_IMAGE_ENDPOINT: &str = "https://picsum.photos/seed";

pub const EMBED_COLOR: u32 = 0x93_9C_95;
