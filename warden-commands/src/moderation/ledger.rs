use tracing::warn;

use warden_core::{Data, Embed, MentionedMember, Reply};
use warden_database::{Action, Member, MemberStore};
use warden_utils::embed::DEFAULT_EMBED_COLOR;
use warden_utils::formatting::sanitize_mentions;
use warden_utils::time::now_unix_secs;

/// Append `action` to its target's ledger and persist the full sequence.
pub async fn record_action(store: &MemberStore, action: Action) -> anyhow::Result<Member> {
    let mut member = store.get(action.target()).await?;
    member.record(action);
    store.save(&member).await
}

/// Build the overseer notice for a moderation action.
pub fn action_notice(
    target: &MentionedMember,
    action_past_tense: &str,
    reason: &str,
    moderator_tag: &str,
    moderator_avatar: Option<String>,
) -> Embed {
    Embed::new()
        .author(format!("User: {}", target.tag), target.avatar_url.clone())
        .description(format!(
            "Was {} from the server: `{}`",
            action_past_tense,
            sanitize_mentions(reason)
        ))
        .color(DEFAULT_EMBED_COLOR)
        .timestamp(now_unix_secs())
        .footer(
            format!("{} by {}", capitalize(action_past_tense), moderator_tag),
            moderator_avatar,
        )
}

/// Send `notice` to every configured owner. Delivery failures are logged per owner.
pub async fn notify_owners(data: &Data, notice: Embed) {
    for owner_id in &data.settings.owners {
        let result = data
            .platform
            .direct_message(*owner_id, Reply::Embed(notice.clone()))
            .await;

        if let Err(source) = result {
            warn!(?source, owner_id, "could not notify owner");
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => format!("{}{}", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}
