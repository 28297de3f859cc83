pub mod context;
pub mod message;
pub mod ready;

use std::sync::OnceLock;

use async_trait::async_trait;
use serenity::all::{Context, EventHandler, Message, Ready};

use warden_commands::Dispatcher;
use warden_database::MemberStore;

use crate::config::Config;

/// Gateway event handler. The dispatcher is only available once `ready` ran.
pub struct Handler {
    config: Config,
    store: MemberStore,
    dispatcher: OnceLock<Dispatcher>,
}

impl Handler {
    pub fn new(config: Config, store: MemberStore) -> Self {
        Self {
            config,
            store,
            dispatcher: OnceLock::new(),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(self, &ctx, &ready).await;
    }

    async fn message(&self, ctx: Context, new_message: Message) {
        message::handle_message(self, &ctx, &new_message).await;
    }
}
