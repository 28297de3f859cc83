use tracing::warn;

use warden_utils::formatting::channel_mention;
use warden_utils::parse::parse_channel_mention;

use crate::command::{Command, CommandKind, Invocation, Outcome};

pub fn command() -> Command {
    Command::new(CommandKind::Invite, ["invite"])
        .with_description("Creates an invitation link.")
        .with_usage("[#channel]")
}

pub async fn run(invocation: &Invocation<'_>, args: &[String]) -> Outcome {
    let channel_arg = match args {
        [] => None,
        [channel] => Some(channel),
        _ => return Outcome::Usage,
    };

    let Some(channel_arg) = channel_arg else {
        let settings = &invocation.data.settings;
        if settings.invitation.is_empty() {
            invocation
                .say("No invitation link has been configured.")
                .await;
        } else {
            invocation
                .say(format!(
                    "Invitation link for `{}`: {}",
                    settings.guild_name, settings.invitation
                ))
                .await;
        }
        return Outcome::Success;
    };

    let Some(channel_id) = parse_channel_mention(channel_arg)
        .filter(|id| invocation.ctx.mentions.has_channel(*id))
    else {
        return Outcome::Usage;
    };

    let channel = channel_mention(channel_id);
    match invocation.data.platform.create_invite(channel_id).await {
        Ok(url) => {
            invocation
                .say(format!("Your invitation link for {}: {}", channel, url))
                .await;
        }
        Err(source) => {
            warn!(?source, channel_id, "invite creation failed");
            invocation
                .say(format!(
                    "Couldn't create an invitation link for {}: {}",
                    channel, source
                ))
                .await;
        }
    }

    Outcome::Success
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::run;
    use crate::command::{Invocation, Outcome};
    use crate::commands;
    use crate::testing::{Call, FakePlatform, args, context, data};

    async fn invoke(platform: &Arc<FakePlatform>, channels: &[u64], raw: &[&str]) -> Outcome {
        let data = data(platform);
        let registry = commands();
        let mut ctx = context(&[]);
        ctx.mentions.channels = channels.to_vec();
        let invocation = Invocation {
            data: &data,
            registry: &registry,
            ctx: &ctx,
        };
        run(&invocation, &args(raw)).await
    }

    #[tokio::test]
    async fn without_arguments_returns_static_link() {
        let platform = Arc::new(FakePlatform::default());
        assert_eq!(invoke(&platform, &[], &[]).await, Outcome::Success);
        assert_eq!(
            platform.reply_texts(),
            ["Invitation link for `Home`: https://discord.gg/home"]
        );
    }

    #[tokio::test]
    async fn mentioned_channel_gets_scoped_invite() {
        let platform = Arc::new(FakePlatform::default());
        assert_eq!(invoke(&platform, &[55], &["<#55>"]).await, Outcome::Success);
        assert_eq!(platform.calls()[0], Call::CreateInvite { channel_id: 55 });
        assert_eq!(
            platform.reply_texts(),
            ["Your invitation link for <#55>: https://discord.gg/fake55"]
        );
    }

    #[tokio::test]
    async fn unresolved_channel_is_usage_error() {
        let platform = Arc::new(FakePlatform::default());
        assert_eq!(invoke(&platform, &[], &["<#55>"]).await, Outcome::Usage);
        assert_eq!(invoke(&platform, &[55], &["general"]).await, Outcome::Usage);
        assert_eq!(invoke(&platform, &[55], &["<#55>", "extra"]).await, Outcome::Usage);
        assert!(platform.calls().is_empty());
    }

    #[tokio::test]
    async fn platform_failure_is_reported() {
        let platform = Arc::new(FakePlatform {
            fail_invite: true,
            ..FakePlatform::default()
        });
        assert_eq!(invoke(&platform, &[55], &["<#55>"]).await, Outcome::Success);
        assert_eq!(
            platform.reply_texts(),
            ["Couldn't create an invitation link for <#55>: missing permissions"]
        );
    }
}
