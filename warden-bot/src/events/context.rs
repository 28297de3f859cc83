use anyhow::Context as _;
use serenity::all::{ChannelId, Context, GuildId, Message, User};
use tracing::debug;

use warden_core::{Actor, Capabilities, ExecutionContext, MentionedMember, Mentions};
use warden_utils::parse::channel_mentions;
use warden_utils::permissions::{capability_names, is_kickable, member_permissions};

/// Resolve the actor's capabilities and the message's mentions against the guild.
pub async fn build_execution_context(
    ctx: &Context,
    guild_id: GuildId,
    message: &Message,
) -> anyhow::Result<ExecutionContext> {
    let guild = guild_id
        .to_partial_guild(&ctx.http)
        .await
        .context("failed to fetch guild")?;
    let author = guild_id
        .member(&ctx.http, message.author.id)
        .await
        .context("failed to fetch invoking member")?;
    let bot_id = ctx.cache.current_user().id;
    let bot = guild_id
        .member(&ctx.http, bot_id)
        .await
        .context("failed to fetch bot member")?;

    let capabilities: Capabilities = capability_names(member_permissions(&guild, &author))
        .into_iter()
        .collect();

    let mut members = Vec::with_capacity(message.mentions.len());
    for user in &message.mentions {
        match guild_id.member(&ctx.http, user.id).await {
            Ok(member) => members.push(MentionedMember {
                id: user.id.get(),
                tag: user.tag(),
                avatar_url: user.avatar_url(),
                kickable: is_kickable(&guild, &bot, &member),
            }),
            Err(source) => debug!(?source, user_id = %user.id, "mentioned user is not a member"),
        }
    }

    let channels = match channel_mentions(&message.content).as_slice() {
        [] => Vec::new(),
        mentioned => {
            let known = guild_id
                .channels(&ctx.http)
                .await
                .context("failed to fetch guild channels")?;
            mentioned
                .iter()
                .copied()
                .filter(|id| known.contains_key(&ChannelId::new(*id)))
                .collect()
        }
    };

    Ok(ExecutionContext {
        actor: actor(&message.author),
        capabilities,
        channel_id: message.channel_id.get(),
        mentions: Mentions { members, channels },
    })
}

fn actor(user: &User) -> Actor {
    Actor {
        id: user.id.get(),
        tag: user.tag(),
        avatar_url: user.avatar_url(),
    }
}
