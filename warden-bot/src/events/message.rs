use serenity::all::{Channel, ChannelType, Context, Message};
use tracing::{debug, error};

use super::Handler;
use super::context::build_execution_context;

/// Filter an inbound message and hand it to the dispatcher.
pub async fn handle_message(handler: &Handler, ctx: &Context, message: &Message) {
    if message.author.bot || message.webhook_id.is_some() {
        return;
    }

    let Some(guild_id) = message.guild_id else {
        debug!(author = %message.author.id, "ignored message outside a guild");
        return;
    };
    if guild_id.get() != handler.config.guild_id {
        debug!(%guild_id, "ignored message from foreign guild");
        return;
    }

    if handler.config.debug && !handler.config.is_owner(message.author.id.get()) {
        debug!(author = %message.author.id, "ignored non-owner message in debug mode");
        return;
    }

    let Some(dispatcher) = handler.dispatcher.get() else {
        debug!("ignored message received before ready");
        return;
    };

    // Skip the lookups below for plain chatter.
    if !dispatcher.is_command(&message.content) {
        return;
    }

    let channel_id = message.channel_id.get();
    let author_id = message.author.id.get();

    match message.channel(ctx).await {
        Ok(Channel::Guild(channel)) if accepts_commands(channel.kind) => {}
        Ok(_) => {
            debug!(channel_id, "ignored command outside a text channel");
            return;
        }
        Err(source) => {
            error!(?source, channel_id, "failed to resolve message channel");
            dispatcher.report_failure(channel_id, author_id).await;
            return;
        }
    }

    let execution = match build_execution_context(ctx, guild_id, message).await {
        Ok(execution) => execution,
        Err(source) => {
            error!(?source, message_id = %message.id, "failed to build execution context");
            dispatcher.report_failure(channel_id, author_id).await;
            return;
        }
    };

    dispatcher.dispatch(&execution, &message.content).await;
}

/// Commands are only taken from regular and announcement text channels.
fn accepts_commands(kind: ChannelType) -> bool {
    matches!(kind, ChannelType::Text | ChannelType::News)
}

#[cfg(test)]
mod tests {
    use serenity::all::ChannelType;

    use super::accepts_commands;

    #[test]
    fn threads_and_voice_channels_are_ignored() {
        assert!(accepts_commands(ChannelType::Text));
        assert!(accepts_commands(ChannelType::News));
        assert!(!accepts_commands(ChannelType::PublicThread));
        assert!(!accepts_commands(ChannelType::PrivateThread));
        assert!(!accepts_commands(ChannelType::Voice));
        assert!(!accepts_commands(ChannelType::Stage));
    }
}
