//! Reply texts shared by the dispatcher and the commands.

use warden_utils::formatting::format_invocation;

pub fn unknown_command_message(prefix: &str, name: &str) -> String {
    format!(
        "I couldn't find a command named \"{}\".\nUse `{}help` to list every available command.",
        name, prefix
    )
}

pub fn permission_denied_message(capability: &str) -> String {
    format!("You are missing the `{}` permission.", capability)
}

pub fn internal_error_message() -> &'static str {
    "Something went wrong while running this command."
}

pub fn usage_message(prefix: &str, alias: &str, usage: Option<&str>) -> String {
    format!(
        "Invalid usage. Example: `{}`",
        format_invocation(prefix, alias, usage)
    )
}
