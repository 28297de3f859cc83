pub mod capability;
mod context;
mod platform;

use std::fmt;
use std::sync::Arc;

use warden_database::MemberStore;

pub use capability::Capabilities;
pub use context::{Actor, ExecutionContext, MentionedMember, Mentions};
pub use platform::{Embed, EmbedAuthor, EmbedField, EmbedFooter, Platform, Reply};

pub type Error = anyhow::Error;

/// Process configuration the commands read while running.
#[derive(Clone, Debug, Default)]
pub struct Settings {
    pub prefix: String,
    /// Static invitation handed out by `invite` without arguments.
    pub invitation: String,
    /// Display name of the home guild, resolved once the bot is ready.
    pub guild_name: String,
    /// Users notified about moderation actions.
    pub owners: Vec<u64>,
}

/// Application context built once at startup and shared by every dispatch.
#[derive(Clone)]
pub struct Data {
    pub store: MemberStore,
    pub platform: Arc<dyn Platform>,
    pub settings: Settings,
}

impl fmt::Debug for Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Data")
            .field("store", &self.store)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
