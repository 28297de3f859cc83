/// Generic embed styling shared across commands.
pub mod embed;
/// Shared formatting helpers (mentions, reasons, argument joining).
pub mod formatting;
/// Prefix used when none is configured.
pub const DEFAULT_COMMAND_PREFIX: &str = "!";
/// Pure parser helpers.
pub mod parse;
/// Permission helper utilities.
pub mod permissions;
/// Shared time helpers.
pub mod time;
