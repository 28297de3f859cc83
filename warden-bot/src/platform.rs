use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use serenity::all::{
    ChannelId, CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter, CreateInvite, CreateMessage,
    EditMember, GetMessages, GuildId, Http, Timestamp, UserId,
};

use warden_core::{Embed, Error, Platform, Reply};
use warden_utils::formatting::user_mention;

/// Discord implementation of the outbound platform port, bound to the home guild.
pub struct SerenityPlatform {
    http: Arc<Http>,
    guild_id: GuildId,
}

impl SerenityPlatform {
    pub fn new(http: Arc<Http>, guild_id: GuildId) -> Self {
        Self { http, guild_id }
    }
}

#[async_trait]
impl Platform for SerenityPlatform {
    async fn reply(&self, channel_id: u64, user_id: u64, reply: Reply) -> Result<(), Error> {
        let channel_id = ChannelId::new(channel_id);
        match reply {
            Reply::Text(text) => {
                channel_id
                    .say(&self.http, format!("{}, {}", user_mention(user_id), text))
                    .await?;
            }
            Reply::Embed(embed) => {
                channel_id
                    .send_message(&self.http, CreateMessage::new().embed(create_embed(embed)))
                    .await?;
            }
        }

        Ok(())
    }

    async fn direct_message(&self, user_id: u64, reply: Reply) -> Result<(), Error> {
        let message = match reply {
            Reply::Text(text) => CreateMessage::new().content(text),
            Reply::Embed(embed) => CreateMessage::new().embed(create_embed(embed)),
        };

        UserId::new(user_id)
            .direct_message(&self.http, message)
            .await
            .context("failed to send direct message")?;
        Ok(())
    }

    async fn create_invite(&self, channel_id: u64) -> Result<String, Error> {
        let invite = ChannelId::new(channel_id)
            .create_invite(&self.http, CreateInvite::new().max_age(0))
            .await?;

        Ok(format!("https://discord.gg/{}", invite.code))
    }

    async fn kick(&self, user_id: u64, reason: &str) -> Result<(), Error> {
        self.guild_id
            .kick_with_reason(&self.http, UserId::new(user_id), reason)
            .await?;
        Ok(())
    }

    async fn set_nickname(&self, user_id: u64, nickname: &str) -> Result<(), Error> {
        self.guild_id
            .edit_member(
                &self.http,
                UserId::new(user_id),
                EditMember::new().nickname(nickname),
            )
            .await?;
        Ok(())
    }

    async fn set_own_nickname(&self, nickname: &str) -> Result<(), Error> {
        let nickname = Some(nickname).filter(|nickname| !nickname.is_empty());
        self.guild_id.edit_nickname(&self.http, nickname).await?;
        Ok(())
    }

    async fn bulk_delete(&self, channel_id: u64, count: u8) -> Result<usize, Error> {
        let channel_id = ChannelId::new(channel_id);
        let message_ids: Vec<_> = channel_id
            .messages(&self.http, GetMessages::new().limit(count))
            .await?
            .into_iter()
            .map(|message| message.id)
            .collect();

        match message_ids.as_slice() {
            [] => {}
            [only] => channel_id.delete_message(&self.http, *only).await?,
            _ => channel_id.delete_messages(&self.http, &message_ids).await?,
        }

        Ok(message_ids.len())
    }
}

fn create_embed(embed: Embed) -> CreateEmbed {
    let mut created = CreateEmbed::new();

    if let Some(title) = embed.title {
        created = created.title(title);
    }
    if let Some(description) = embed.description {
        created = created.description(description);
    }
    if let Some(author) = embed.author {
        let mut builder = CreateEmbedAuthor::new(author.name);
        if let Some(icon_url) = author.icon_url {
            builder = builder.icon_url(icon_url);
        }
        created = created.author(builder);
    }
    for field in embed.fields {
        created = created.field(field.name, field.value, false);
    }
    if let Some(footer) = embed.footer {
        let mut builder = CreateEmbedFooter::new(footer.text);
        if let Some(icon_url) = footer.icon_url {
            builder = builder.icon_url(icon_url);
        }
        created = created.footer(builder);
    }
    if let Some(timestamp) = embed
        .timestamp
        .and_then(|secs| i64::try_from(secs).ok())
        .and_then(|secs| Timestamp::from_unix_timestamp(secs).ok())
    {
        created = created.timestamp(timestamp);
    }
    if let Some(color) = embed.color {
        created = created.color(color);
    }

    created
}
