use anyhow::bail;

/// Slash commands the application answers. Dispatch is an exhaustive
/// match on this enum, so adding a variant forces a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Aww,
    Invite,
}

/// Registration metadata for one slash command, as sent to Discord when
/// the command set is registered.
#[derive(Debug, Clone, Copy)]
pub struct CommandMetadata {
    pub name: &'static str,
    pub description: &'static str,
    pub command: Command,
}

pub const COMMANDS: &[CommandMetadata] = &[
    CommandMetadata {
        name: "aww",
        description: "Drop some cuteness on this channel.",
        command: Command::Aww,
    },
    CommandMetadata {
        name: "invite",
        description: "Get an invite link to add the bot to your server.",
        command: Command::Invite,
    },
];

impl Command {
    /// Command names are matched case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        COMMANDS
            .iter()
            .find(|metadata| metadata.name.eq_ignore_ascii_case(name))
            .map(|metadata| metadata.command)
    }
}

/// Rejects duplicate command names before the router goes live. Names
/// that collide only by letter casing count as duplicates, since lookup
/// ignores case.
pub fn validate_command_table() -> anyhow::Result<()> {
    ensure_unique_names(COMMANDS)
}

fn ensure_unique_names(commands: &[CommandMetadata]) -> anyhow::Result<()> {
    for (index, metadata) in commands.iter().enumerate() {
        let duplicate = commands[index + 1..]
            .iter()
            .any(|other| other.name.eq_ignore_ascii_case(metadata.name));

        if duplicate {
            bail!("Duplicate command name in command table: {}", metadata.name);
        }
    }

    Ok(())
}
