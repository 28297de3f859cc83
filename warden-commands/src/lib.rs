pub mod command;
pub mod dispatcher;
pub mod messages;
pub mod moderation;
pub mod permission;
pub mod registry;
pub mod tokenizer;
pub mod utility;

#[cfg(test)]
pub(crate) mod testing;

pub use command::{Command, CommandKind, Invocation, Outcome};
pub use dispatcher::{Dispatch, Dispatcher};
pub use registry::Registry;
pub use tokenizer::{Tokenized, Tokenizer};

/// The default command set, in lookup order.
///
/// Order matters: when two commands share an alias the earlier one wins.
pub fn commands() -> Registry {
    Registry::new(vec![
        utility::help::command(),
        utility::invite::command(),
        moderation::kick::command(),
        moderation::nick::command(),
        moderation::purge::command(),
    ])
}
