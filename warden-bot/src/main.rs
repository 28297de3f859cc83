mod config;
mod events;
mod platform;

use serenity::all::{ClientBuilder, GatewayIntents};
use tracing::{error, info};
use tracing_subscriber::Layer;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use rustls::crypto::ring::default_provider;

use warden_database::MemberStore;

use crate::config::Config;
use crate::events::Handler;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load the .env file before anything reads the environment.
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let max_level = if config.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let fmt_layer = tracing_subscriber::fmt::layer().with_filter(filter_fn(move |metadata| {
        let target = metadata.target();

        if *metadata.level() > max_level {
            return false;
        }

        !(target.starts_with("serenity::gateway::bridge::shard_manager")
            || target.starts_with("serenity::gateway::bridge::shard_runner"))
    }));

    tracing_subscriber::registry().with(fmt_layer).init();

    default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("failed to install rustls ring provider"))?;

    let store = MemberStore::connect(
        &config.storage_backend,
        &config.storage_uri,
        &config.storage,
    )
    .await?;

    if config.auto_run_migrations {
        store.migrate().await?;
        info!(backend = %store.kind(), "Storage migrations applied.");
    } else {
        info!("Auto migrations disabled (set AUTO_RUN_MIGRATIONS=true to run at startup).");
    }

    if config.debug {
        info!(owners = config.owners.len(), "Debug mode: only owners may issue commands.");
    }

    let intents =
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT;

    info!("Warden is connecting...");

    let mut client = ClientBuilder::new(&config.token, intents)
        .event_handler(Handler::new(config.clone(), store.clone()))
        .await?;

    let shard_manager = client.shard_manager.clone();
    let shutdown_store = store.clone();
    tokio::spawn(async move {
        if let Err(source) = tokio::signal::ctrl_c().await {
            error!(?source, "failed to listen for shutdown signal");
            return;
        }

        info!("Shutdown requested.");
        shutdown_store.close().await;
        shard_manager.shutdown_all().await;
    });

    client.start().await?;
    Ok(())
}
