use warden_core::Capabilities;

use crate::command::Command;

/// Whether an actor holding `capabilities` may run `command`.
///
/// Commands without a requirement are open to everyone. Otherwise the exact
/// capability must be held.
pub fn is_permitted(command: &Command, capabilities: &Capabilities) -> bool {
    match command.capability() {
        Some(required) => capabilities.contains(required),
        None => true,
    }
}
