use std::sync::Arc;

use serenity::all::{Context, GuildId, Ready};
use tracing::{debug, info, warn};

use warden_commands::Dispatcher;
use warden_core::{Data, Settings};

use super::Handler;
use crate::platform::SerenityPlatform;

/// Leave foreign guilds, resolve the home guild and make the dispatcher available.
pub async fn handle_ready(handler: &Handler, ctx: &Context, ready: &Ready) {
    let home = GuildId::new(handler.config.guild_id);
    info!(user = %ready.user.tag(), "Warden has awoken!");

    for guild in &ready.guilds {
        if guild.id == home {
            continue;
        }

        match guild.id.leave(&ctx.http).await {
            Ok(()) => info!(guild_id = %guild.id, "left foreign guild"),
            Err(source) => warn!(?source, guild_id = %guild.id, "failed to leave foreign guild"),
        }
    }

    if handler.dispatcher.get().is_some() {
        debug!("gateway resumed; dispatcher already built");
        return;
    }

    let guild_name = match home.to_partial_guild(&ctx.http).await {
        Ok(guild) => guild.name,
        Err(source) => {
            warn!(?source, guild_id = %home, "could not resolve home guild name");
            String::new()
        }
    };

    let data = Data {
        store: handler.store.clone(),
        platform: Arc::new(SerenityPlatform::new(ctx.http.clone(), home)),
        settings: Settings {
            prefix: handler.config.prefix.clone(),
            invitation: handler.config.invite_url.clone(),
            guild_name,
            owners: handler.config.owners.clone(),
        },
    };

    let dispatcher = Dispatcher::new(data, warden_commands::commands());
    info!(
        commands = dispatcher.registry().len(),
        prefix = %handler.config.prefix,
        "dispatcher ready"
    );
    if handler.dispatcher.set(dispatcher).is_err() {
        debug!("dispatcher was built concurrently");
    }
}
