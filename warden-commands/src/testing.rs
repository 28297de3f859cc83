use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use warden_core::{
    Actor, Capabilities, Data, Error, ExecutionContext, MentionedMember, Mentions, Platform, Reply,
    Settings,
};
use warden_database::MemberStore;

pub const ACTOR_ID: u64 = 1;
pub const CHANNEL_ID: u64 = 10;
pub const OWNER_ID: u64 = 99;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Reply { channel_id: u64, user_id: u64, reply: Reply },
    DirectMessage { user_id: u64, reply: Reply },
    CreateInvite { channel_id: u64 },
    Kick { user_id: u64, reason: String },
    SetNickname { user_id: u64, nickname: String },
    SetOwnNickname { nickname: String },
    BulkDelete { channel_id: u64, count: u8 },
}

/// Records every platform call; individual operations can be told to fail.
#[derive(Debug, Default)]
pub struct FakePlatform {
    pub calls: Mutex<Vec<Call>>,
    pub fail_kick: bool,
    pub fail_invite: bool,
    pub fail_nickname: bool,
    pub fail_delete: bool,
    /// Messages reported as deleted; defaults to the requested count.
    pub deleted: Option<usize>,
}

impl FakePlatform {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn replies(&self) -> Vec<Reply> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Reply { reply, .. } => Some(reply),
                _ => None,
            })
            .collect()
    }

    pub fn reply_texts(&self) -> Vec<String> {
        self.replies()
            .iter()
            .filter_map(|reply| reply.text().map(str::to_owned))
            .collect()
    }

    fn push(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl Platform for FakePlatform {
    async fn reply(&self, channel_id: u64, user_id: u64, reply: Reply) -> Result<(), Error> {
        self.push(Call::Reply {
            channel_id,
            user_id,
            reply,
        });
        Ok(())
    }

    async fn direct_message(&self, user_id: u64, reply: Reply) -> Result<(), Error> {
        self.push(Call::DirectMessage { user_id, reply });
        Ok(())
    }

    async fn create_invite(&self, channel_id: u64) -> Result<String, Error> {
        self.push(Call::CreateInvite { channel_id });
        if self.fail_invite {
            anyhow::bail!("missing permissions");
        }
        Ok(format!("https://discord.gg/fake{}", channel_id))
    }

    async fn kick(&self, user_id: u64, reason: &str) -> Result<(), Error> {
        self.push(Call::Kick {
            user_id,
            reason: reason.to_owned(),
        });
        if self.fail_kick {
            anyhow::bail!("missing permissions");
        }
        Ok(())
    }

    async fn set_nickname(&self, user_id: u64, nickname: &str) -> Result<(), Error> {
        self.push(Call::SetNickname {
            user_id,
            nickname: nickname.to_owned(),
        });
        if self.fail_nickname {
            anyhow::bail!("missing permissions");
        }
        Ok(())
    }

    async fn set_own_nickname(&self, nickname: &str) -> Result<(), Error> {
        self.push(Call::SetOwnNickname {
            nickname: nickname.to_owned(),
        });
        if self.fail_nickname {
            anyhow::bail!("missing permissions");
        }
        Ok(())
    }

    async fn bulk_delete(&self, channel_id: u64, count: u8) -> Result<usize, Error> {
        self.push(Call::BulkDelete { channel_id, count });
        if self.fail_delete {
            anyhow::bail!("messages too old");
        }
        Ok(self.deleted.unwrap_or(usize::from(count)))
    }
}

pub fn data(platform: &Arc<FakePlatform>) -> Data {
    Data {
        store: MemberStore::memory(),
        platform: platform.clone(),
        settings: Settings {
            prefix: "!".to_owned(),
            invitation: "https://discord.gg/home".to_owned(),
            guild_name: "Home".to_owned(),
            owners: vec![OWNER_ID],
        },
    }
}

pub fn context(capabilities: &[&str]) -> ExecutionContext {
    ExecutionContext {
        actor: Actor {
            id: ACTOR_ID,
            tag: "moderator".to_owned(),
            avatar_url: None,
        },
        capabilities: capabilities.iter().copied().collect::<Capabilities>(),
        channel_id: CHANNEL_ID,
        mentions: Mentions::default(),
    }
}

pub fn mentioned(id: u64, kickable: bool) -> MentionedMember {
    MentionedMember {
        id,
        tag: format!("user{}", id),
        avatar_url: None,
        kickable,
    }
}

pub fn args(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|arg| (*arg).to_owned()).collect()
}
