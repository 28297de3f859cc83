use warden_core::{Capabilities, Embed};
use warden_utils::embed::DEFAULT_EMBED_COLOR;
use warden_utils::formatting::format_invocation;
use warden_utils::time::now_unix_secs;

use crate::command::{Command, CommandKind, Invocation, Outcome};
use crate::permission::is_permitted;
use crate::registry::Registry;

pub fn command() -> Command {
    Command::new(CommandKind::Help, ["help", "hilfe"])
}

pub async fn run(invocation: &Invocation<'_>, args: &[String]) -> Outcome {
    if !args.is_empty() {
        return Outcome::Usage;
    }

    let ctx = invocation.ctx;
    let entries = help_entries(invocation.registry, &ctx.capabilities, invocation.prefix());

    let mut embed = Embed::new()
        .title(format!("Available commands ({})", entries.len()))
        .description("Tailored to your current role.")
        .color(DEFAULT_EMBED_COLOR)
        .timestamp(now_unix_secs())
        .footer(
            format!("Requested by {}", ctx.actor.tag),
            ctx.actor.avatar_url.clone(),
        );
    for (name, description) in entries {
        embed = embed.field(name, description);
    }

    invocation.say(embed).await;
    Outcome::Success
}

/// `(invocation, description)` pairs for every described command the actor may run.
pub fn help_entries(
    registry: &Registry,
    capabilities: &Capabilities,
    prefix: &str,
) -> Vec<(String, String)> {
    registry
        .iter()
        .filter(|command| is_permitted(command, capabilities))
        .filter_map(|command| {
            let description = command.description().filter(|text| !text.is_empty())?;
            let name = format_invocation(prefix, command.primary_alias(), command.usage());
            Some((name, description.to_owned()))
        })
        .collect()
}
