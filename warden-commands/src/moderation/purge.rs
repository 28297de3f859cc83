use tracing::{error, info};

use warden_core::capability::MANAGE_MESSAGES;

use crate::command::{Command, CommandKind, Invocation, Outcome};

pub const MIN_MESSAGES: u8 = 2;
pub const MAX_MESSAGES: u8 = 100;

pub fn command() -> Command {
    Command::new(CommandKind::Purge, ["purge", "clear"])
        .with_capability(MANAGE_MESSAGES)
        .with_description("Deletes the most recent messages in this channel.")
        .with_usage("<messages>")
}

pub async fn run(invocation: &Invocation<'_>, args: &[String]) -> Outcome {
    let [raw] = args else {
        return Outcome::Usage;
    };

    let Ok(requested) = raw.parse::<i64>() else {
        invocation.say("You must provide a valid number.").await;
        return Outcome::Usage;
    };

    let Some(count) = u8::try_from(requested)
        .ok()
        .filter(|count| (MIN_MESSAGES..=MAX_MESSAGES).contains(count))
    else {
        invocation
            .say(format!(
                "The number must be between {} and {}.",
                MIN_MESSAGES, MAX_MESSAGES
            ))
            .await;
        return Outcome::Success;
    };

    let channel_id = invocation.ctx.channel_id;
    match invocation.data.platform.bulk_delete(channel_id, count).await {
        Ok(deleted) => {
            info!(channel_id, requested = count, deleted, "purged messages");
            invocation.say(format!("Deleted {} messages.", deleted)).await;
        }
        Err(source) => {
            error!(?source, channel_id, "bulk delete failed");
            invocation
                .say(format!("Couldn't delete messages: `{}`", source))
                .await;
        }
    }

    Outcome::Success
}
