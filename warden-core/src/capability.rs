use std::collections::BTreeSet;

pub const ADMINISTRATOR: &str = "ADMINISTRATOR";
pub const KICK_MEMBERS: &str = "KICK_MEMBERS";
pub const MANAGE_MESSAGES: &str = "MANAGE_MESSAGES";
pub const MANAGE_NICKNAMES: &str = "MANAGE_NICKNAMES";

/// Flat set of capability names an actor holds.
///
/// Membership is the only question asked of it; no capability implies another.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Capabilities(BTreeSet<String>);

impl Capabilities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }
}

impl<S: Into<String>> FromIterator<S> for Capabilities {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
