use tracing::{debug, error, info};

use warden_core::{Data, ExecutionContext, Reply};

use crate::command::{Invocation, Outcome};
use crate::messages::{
    internal_error_message, permission_denied_message, unknown_command_message, usage_message,
};
use crate::permission::is_permitted;
use crate::registry::Registry;
use crate::tokenizer::{Tokenized, Tokenizer};

/// Whether the dispatcher consumed a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// Not a command; the caller may route the message elsewhere.
    Unhandled,
    Handled,
}

/// Turns message text into a permission-checked command execution.
///
/// Built once after startup and shared read-only by every message event.
#[derive(Debug)]
pub struct Dispatcher {
    tokenizer: Tokenizer,
    registry: Registry,
    data: Data,
}

impl Dispatcher {
    pub fn new(data: Data, registry: Registry) -> Self {
        Self {
            tokenizer: Tokenizer::new(&data.settings.prefix),
            registry,
            data,
        }
    }

    pub fn data(&self) -> &Data {
        &self.data
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Whether `text` names a command, before any lookup or permission work.
    pub fn is_command(&self, text: &str) -> bool {
        matches!(self.tokenizer.tokenize(text), Tokenized::Command { .. })
    }

    /// Tell the invoker their command failed before it could be dispatched.
    pub async fn report_failure(&self, channel_id: u64, user_id: u64) {
        let reply = Reply::from(internal_error_message());
        if let Err(source) = self.data.platform.reply(channel_id, user_id, reply).await {
            error!(?source, channel_id, "failed to deliver failure reply");
        }
    }

    /// Tokenize, look up, gate, execute and fall back to a usage reply.
    ///
    /// Every per-message failure ends as a reply; nothing is returned as an error.
    pub async fn dispatch(&self, ctx: &ExecutionContext, text: &str) -> Dispatch {
        let (name, args) = match self.tokenizer.tokenize(text) {
            Tokenized::NotCommand => return Dispatch::Unhandled,
            Tokenized::Empty => {
                debug!(actor = ctx.actor.id, "ignored empty command");
                return Dispatch::Handled;
            }
            Tokenized::Command { name, args } => (name, args),
        };

        let invocation = Invocation {
            data: &self.data,
            registry: &self.registry,
            ctx,
        };
        let prefix = invocation.prefix();

        let Some(command) = self.registry.find(&name) else {
            debug!(actor = ctx.actor.id, command = %name, "unknown command");
            invocation
                .say(unknown_command_message(prefix, &name))
                .await;
            return Dispatch::Handled;
        };

        if !is_permitted(command, &ctx.capabilities) {
            let missing = command.capability().unwrap_or_default();
            debug!(actor = ctx.actor.id, command = %name, missing, "permission denied");
            invocation.say(permission_denied_message(missing)).await;
            return Dispatch::Handled;
        }

        info!(
            actor = ctx.actor.id,
            channel_id = ctx.channel_id,
            command = command.primary_alias(),
            "executing command"
        );

        if command.execute(&invocation, &args).await == Outcome::Usage {
            invocation
                .say(usage_message(prefix, &name, command.usage()))
                .await;
        }

        Dispatch::Handled
    }
}
