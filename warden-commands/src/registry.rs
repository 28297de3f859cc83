use crate::command::Command;

/// Ordered, immutable command list built once at startup.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    commands: Vec<Command>,
}

impl Registry {
    pub fn new(commands: Vec<Command>) -> Self {
        Self { commands }
    }

    /// First command, in registration order, that owns `name` as an alias.
    ///
    /// Later commands sharing an alias with an earlier one are unreachable
    /// through that alias.
    pub fn find(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|command| command.matches(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::Registry;
    use crate::command::{Command, CommandKind};

    #[test]
    fn empty_registry_finds_nothing() {
        let registry = Registry::default();
        assert!(registry.find("help").is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn first_registered_wins_on_shared_alias() {
        let registry = Registry::new(vec![
            Command::new(CommandKind::Purge, ["purge", "clear"]),
            Command::new(CommandKind::Help, ["clear", "help"]),
        ]);

        for _ in 0..3 {
            assert_eq!(registry.find("clear").unwrap().kind(), CommandKind::Purge);
        }
        assert_eq!(registry.find("help").unwrap().kind(), CommandKind::Help);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn unknown_alias_is_none() {
        let registry = Registry::new(vec![Command::new(CommandKind::Kick, ["kick"])]);
        assert!(registry.find("ban").is_none());
    }
}
