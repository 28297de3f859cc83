use tracing::error;

use warden_core::{Data, ExecutionContext, Reply};

use crate::moderation::{kick, nick, purge};
use crate::registry::Registry;
use crate::utility::{help, invite};

/// The closed set of operations a command can perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandKind {
    Help,
    Invite,
    Kick,
    Nick,
    Purge,
}

/// What a command reports back to the dispatcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The command ran (possibly replying with a domain-specific refusal).
    Success,
    /// Arguments were malformed; the dispatcher answers with the usage example.
    Usage,
}

/// Command definition: aliases, gate and help metadata plus the operation it runs.
#[derive(Clone, Debug)]
pub struct Command {
    aliases: Vec<String>,
    capability: Option<String>,
    description: Option<String>,
    usage: Option<String>,
    kind: CommandKind,
}

impl Command {
    /// Aliases are lower-cased; the first one is the primary alias shown in help.
    pub fn new<I, S>(kind: CommandKind, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lowered: Vec<String> = Vec::new();
        for alias in aliases {
            let alias = alias.as_ref().trim().to_lowercase();
            if !alias.is_empty() && !lowered.contains(&alias) {
                lowered.push(alias);
            }
        }
        debug_assert!(!lowered.is_empty(), "a command needs at least one alias");

        Self {
            aliases: lowered,
            capability: None,
            description: None,
            usage: None,
            kind,
        }
    }

    pub fn with_capability(mut self, capability: impl Into<String>) -> Self {
        self.capability = Some(capability.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = Some(usage.into());
        self
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn primary_alias(&self) -> &str {
        self.aliases.first().map(String::as_str).unwrap_or_default()
    }

    pub fn matches(&self, name: &str) -> bool {
        self.aliases.iter().any(|alias| alias == name)
    }

    pub fn capability(&self) -> Option<&str> {
        self.capability.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn usage(&self) -> Option<&str> {
        self.usage.as_deref()
    }

    pub fn kind(&self) -> CommandKind {
        self.kind
    }

    pub async fn execute(&self, invocation: &Invocation<'_>, args: &[String]) -> Outcome {
        match self.kind {
            CommandKind::Help => help::run(invocation, args).await,
            CommandKind::Invite => invite::run(invocation, args).await,
            CommandKind::Kick => kick::run(invocation, args).await,
            CommandKind::Nick => nick::run(invocation, args).await,
            CommandKind::Purge => purge::run(invocation, args).await,
        }
    }
}

/// One command invocation: the shared application state plus the caller's context.
pub struct Invocation<'a> {
    pub data: &'a Data,
    pub registry: &'a Registry,
    pub ctx: &'a ExecutionContext,
}

impl Invocation<'_> {
    pub fn prefix(&self) -> &str {
        &self.data.settings.prefix
    }

    /// Reply in the invoking channel. Delivery failures are logged and dropped.
    pub async fn say(&self, reply: impl Into<Reply>) {
        let result = self
            .data
            .platform
            .reply(self.ctx.channel_id, self.ctx.actor.id, reply.into())
            .await;

        if let Err(source) = result {
            error!(
                ?source,
                channel_id = self.ctx.channel_id,
                "failed to deliver command reply"
            );
        }
    }
}
