use std::env;

use anyhow::Context;

use warden_database::StoreOptions;
use warden_database::store::{DEFAULT_MAX_CONNECTIONS, DEFAULT_NAMESPACE};
use warden_utils::DEFAULT_COMMAND_PREFIX;
use warden_utils::parse::parse_id_list;

/// Startup configuration read from the environment (and `.env`).
#[derive(Clone, Debug)]
pub struct Config {
    pub token: String,
    pub guild_id: u64,
    pub prefix: String,
    pub invite_url: String,
    pub owners: Vec<u64>,
    pub storage_backend: String,
    pub storage_uri: String,
    pub storage: StoreOptions,
    pub auto_run_migrations: bool,
    /// Verbose logging; only owners may issue commands.
    pub debug: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let token = lookup("DISCORD_TOKEN")
            .filter(|token| !token.trim().is_empty())
            .context("DISCORD_TOKEN must be set")?;
        let guild_id = lookup("DISCORD_GUILD_ID")
            .context("DISCORD_GUILD_ID must be set")?
            .trim()
            .parse::<u64>()
            .context("DISCORD_GUILD_ID must be a numeric id")?;

        let prefix = lookup("COMMAND_PREFIX")
            .map(|prefix| prefix.trim().to_owned())
            .filter(|prefix| !prefix.is_empty())
            .unwrap_or_else(|| DEFAULT_COMMAND_PREFIX.to_owned());

        let owners = match lookup("OWNER_IDS") {
            Some(raw) => parse_id_list(&raw).context("OWNER_IDS must be comma-separated ids")?,
            None => Vec::new(),
        };

        let namespace = lookup("STORAGE_NAMESPACE")
            .map(|namespace| namespace.trim().to_owned())
            .filter(|namespace| !namespace.is_empty())
            .unwrap_or_else(|| DEFAULT_NAMESPACE.to_owned());
        let max_connections = env_u64(
            &lookup,
            "STORAGE_MAX_CONNECTIONS",
            u64::from(DEFAULT_MAX_CONNECTIONS),
        );

        Ok(Self {
            token,
            guild_id,
            prefix,
            invite_url: lookup("INVITE_URL").unwrap_or_default().trim().to_owned(),
            owners,
            storage_backend: lookup("STORAGE_BACKEND").unwrap_or_else(|| "memory".to_owned()),
            storage_uri: lookup("STORAGE_URI").unwrap_or_default(),
            storage: StoreOptions {
                namespace,
                max_connections: u32::try_from(max_connections).unwrap_or(DEFAULT_MAX_CONNECTIONS),
            },
            auto_run_migrations: env_bool(&lookup, "AUTO_RUN_MIGRATIONS", true),
            debug: env_bool(&lookup, "DEBUG", false),
        })
    }

    pub fn is_owner(&self, user_id: u64) -> bool {
        self.owners.contains(&user_id)
    }
}

fn env_bool(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: bool) -> bool {
    match lookup(key) {
        Some(value) => matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        ),
        None => default,
    }
}

fn env_u64(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: u64) -> u64 {
    match lookup(key) {
        Some(value) => value.trim().parse::<u64>().unwrap_or(default),
        None => default,
    }
}
