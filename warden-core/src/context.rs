use crate::capability::Capabilities;

/// The user who issued a command.
#[derive(Clone, Debug, Default)]
pub struct Actor {
    pub id: u64,
    /// Display tag, e.g. `name#0001` or the global name.
    pub tag: String,
    pub avatar_url: Option<String>,
}

/// A guild member mentioned in the invoking message.
#[derive(Clone, Debug, Default)]
pub struct MentionedMember {
    pub id: u64,
    pub tag: String,
    pub avatar_url: Option<String>,
    /// Whether platform rules allow the bot to remove this member.
    pub kickable: bool,
}

#[derive(Clone, Debug, Default)]
pub struct Mentions {
    pub members: Vec<MentionedMember>,
    pub channels: Vec<u64>,
}

impl Mentions {
    /// The mentioned guild member with this id, if any.
    pub fn member(&self, id: u64) -> Option<&MentionedMember> {
        self.members.iter().find(|member| member.id == id)
    }

    pub fn has_channel(&self, channel_id: u64) -> bool {
        self.channels.contains(&channel_id)
    }
}

/// Everything a command knows about one invocation. Read-only for the dispatch.
#[derive(Clone, Debug, Default)]
pub struct ExecutionContext {
    pub actor: Actor,
    pub capabilities: Capabilities,
    pub channel_id: u64,
    pub mentions: Mentions,
}
