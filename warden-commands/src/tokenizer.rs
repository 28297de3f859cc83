/// Result of splitting raw message text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tokenized {
    /// The text does not start with the prefix; someone else may handle it.
    NotCommand,
    /// The text is the bare prefix: consumed, nothing to run.
    Empty,
    Command { name: String, args: Vec<String> },
}

/// Splits `<prefix><name> <args...>` messages.
#[derive(Clone, Debug)]
pub struct Tokenizer {
    prefix: String,
}

impl Tokenizer {
    pub fn new(prefix: impl AsRef<str>) -> Self {
        Self {
            prefix: prefix.as_ref().to_lowercase(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Trim, case-fold and split on whitespace.
    pub fn tokenize(&self, text: &str) -> Tokenized {
        let folded = text.trim().to_lowercase();
        let mut tokens = folded.split_whitespace();

        let Some(head) = tokens.next() else {
            return Tokenized::NotCommand;
        };
        let Some(name) = head.strip_prefix(self.prefix.as_str()) else {
            return Tokenized::NotCommand;
        };
        if name.is_empty() {
            return Tokenized::Empty;
        }

        Tokenized::Command {
            name: name.to_owned(),
            args: tokens.map(str::to_owned).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Tokenized, Tokenizer};

    fn command(name: &str, args: &[&str]) -> Tokenized {
        Tokenized::Command {
            name: name.to_owned(),
            args: args.iter().map(|arg| (*arg).to_owned()).collect(),
        }
    }

    #[test]
    fn text_without_prefix_is_not_a_command() {
        let tokenizer = Tokenizer::new("!");
        assert_eq!(tokenizer.tokenize("hello there"), Tokenized::NotCommand);
        assert_eq!(tokenizer.tokenize("   "), Tokenized::NotCommand);
        assert_eq!(tokenizer.tokenize("?help"), Tokenized::NotCommand);
    }

    #[test]
    fn bare_prefix_is_empty() {
        let tokenizer = Tokenizer::new("!");
        assert_eq!(tokenizer.tokenize("!"), Tokenized::Empty);
        assert_eq!(tokenizer.tokenize("  !   with args"), Tokenized::Empty);
    }

    #[test]
    fn splits_name_and_arguments() {
        let tokenizer = Tokenizer::new("!");
        assert_eq!(
            tokenizer.tokenize("  !KICK <@1>   Spamming\there "),
            command("kick", &["<@1>", "spamming", "here"])
        );
        assert_eq!(tokenizer.tokenize("!help"), command("help", &[]));
    }

    #[test]
    fn multi_character_prefix_is_case_insensitive() {
        let tokenizer = Tokenizer::new("Bot.");
        assert_eq!(tokenizer.prefix(), "bot.");
        assert_eq!(tokenizer.tokenize("BOT.purge 5"), command("purge", &["5"]));
        assert_eq!(tokenizer.tokenize("bot."), Tokenized::Empty);
    }
}
