use tracing::{error, info};

use warden_core::capability::{ADMINISTRATOR, MANAGE_NICKNAMES};
use warden_utils::formatting::{join_args, user_mention};
use warden_utils::parse::{looks_like_user_mention, parse_user_mention};

use crate::command::{Command, CommandKind, Invocation, Outcome};

pub fn command() -> Command {
    Command::new(CommandKind::Nick, ["nick"])
        .with_capability(MANAGE_NICKNAMES)
        .with_description("Changes a member's nickname, or the bot's own.")
        .with_usage("[@user] <nickname...>")
}

pub async fn run(invocation: &Invocation<'_>, args: &[String]) -> Outcome {
    let Some((first, rest)) = args.split_first() else {
        return Outcome::Usage;
    };

    if looks_like_user_mention(first) {
        return rename_member(invocation, first, rest).await;
    }

    if !invocation.ctx.capabilities.contains(ADMINISTRATOR) {
        invocation.say("You are not an administrator.").await;
        return Outcome::Success;
    }

    let nickname = join_args(args);
    match invocation.data.platform.set_own_nickname(&nickname).await {
        Ok(()) => {
            info!(actor = invocation.ctx.actor.id, %nickname, "changed own nickname");
            invocation
                .say(format!("My nickname is now `{}`.", nickname))
                .await;
        }
        Err(source) => {
            error!(?source, "own nickname change failed");
            invocation
                .say(format!("Couldn't change my nickname: `{}`", source))
                .await;
        }
    }

    Outcome::Success
}

async fn rename_member(invocation: &Invocation<'_>, mention: &str, rest: &[String]) -> Outcome {
    let Some(target) = parse_user_mention(mention).and_then(|id| invocation.ctx.mentions.member(id))
    else {
        return Outcome::Usage;
    };

    let nickname = join_args(rest);
    let target_mention = user_mention(target.id);
    match invocation
        .data
        .platform
        .set_nickname(target.id, &nickname)
        .await
    {
        Ok(()) if nickname.is_empty() => {
            invocation
                .say(format!("You reset the nickname of {}.", target_mention))
                .await;
        }
        Ok(()) => {
            info!(target_id = target.id, %nickname, "changed member nickname");
            invocation
                .say(format!(
                    "You changed the nickname of {} to `{}`.",
                    target_mention, nickname
                ))
                .await;
        }
        Err(source) => {
            error!(?source, target_id = target.id, "nickname change failed");
            invocation
                .say(format!(
                    "Couldn't change the nickname of {}: `{}`",
                    target_mention, source
                ))
                .await;
        }
    }

    Outcome::Success
}
