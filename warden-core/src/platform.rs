use async_trait::async_trait;

use crate::Error;

/// Outbound side of the chat platform, as seen by the commands.
///
/// Every method is a single suspension point that either succeeds or fails;
/// callers turn failures into replies.
#[async_trait]
pub trait Platform: Send + Sync {
    /// Send a reply into `channel_id`, addressed to `user_id`.
    async fn reply(&self, channel_id: u64, user_id: u64, reply: Reply) -> Result<(), Error>;

    async fn direct_message(&self, user_id: u64, reply: Reply) -> Result<(), Error>;

    /// Create an invitation scoped to `channel_id` and return its URL.
    async fn create_invite(&self, channel_id: u64) -> Result<String, Error>;

    async fn kick(&self, user_id: u64, reason: &str) -> Result<(), Error>;

    async fn set_nickname(&self, user_id: u64, nickname: &str) -> Result<(), Error>;

    async fn set_own_nickname(&self, nickname: &str) -> Result<(), Error>;

    /// Delete up to `count` of the most recent messages and return how many went away.
    async fn bulk_delete(&self, channel_id: u64, count: u8) -> Result<usize, Error>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Embed(Embed),
}

impl Reply {
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Embed(_) => None,
        }
    }
}

impl From<String> for Reply {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Reply {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<Embed> for Reply {
    fn from(embed: Embed) -> Self {
        Self::Embed(embed)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmbedAuthor {
    pub name: String,
    pub icon_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmbedFooter {
    pub text: String,
    pub icon_url: Option<String>,
}

/// Platform-neutral rich message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Embed {
    pub title: Option<String>,
    pub description: Option<String>,
    pub author: Option<EmbedAuthor>,
    pub fields: Vec<EmbedField>,
    pub footer: Option<EmbedFooter>,
    /// Unix seconds.
    pub timestamp: Option<u64>,
    pub color: Option<u32>,
}

impl Embed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn author(mut self, name: impl Into<String>, icon_url: Option<String>) -> Self {
        self.author = Some(EmbedAuthor {
            name: name.into(),
            icon_url,
        });
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn footer(mut self, text: impl Into<String>, icon_url: Option<String>) -> Self {
        self.footer = Some(EmbedFooter {
            text: text.into(),
            icon_url,
        });
        self
    }

    pub fn timestamp(mut self, unix_secs: u64) -> Self {
        self.timestamp = Some(unix_secs);
        self
    }

    pub fn color(mut self, color: u32) -> Self {
        self.color = Some(color);
        self
    }
}
