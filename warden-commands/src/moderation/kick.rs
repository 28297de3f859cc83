use tracing::{error, info, warn};

use warden_core::capability::KICK_MEMBERS;
use warden_database::Action;
use warden_utils::formatting::{join_args, sanitize_mentions, user_mention};
use warden_utils::parse::parse_user_mention;
use warden_utils::time::now_unix_secs;

use crate::command::{Command, CommandKind, Invocation, Outcome};
use crate::moderation::ledger::{action_notice, notify_owners, record_action};

pub fn command() -> Command {
    Command::new(CommandKind::Kick, ["kick"])
        .with_capability(KICK_MEMBERS)
        .with_description("Kicks a user from the server.")
        .with_usage("<@user> <reason...>")
}

pub async fn run(invocation: &Invocation<'_>, args: &[String]) -> Outcome {
    if args.len() < 2 {
        return Outcome::Usage;
    }

    let ctx = invocation.ctx;
    // The mention list is unordered, so the target is whoever the first argument names.
    let Some(target) = parse_user_mention(&args[0]).and_then(|id| ctx.mentions.member(id)) else {
        return Outcome::Usage;
    };
    let mention = user_mention(target.id);

    if !target.kickable {
        invocation.say(format!("You can't kick {}.", mention)).await;
        return Outcome::Success;
    }

    let reason = join_args(&args[1..]);
    let data = invocation.data;

    if let Err(source) = data.platform.kick(target.id, &reason).await {
        error!(?source, target_id = target.id, "kick request failed");
        invocation
            .say(format!("Couldn't kick {}: `{}`", mention, source))
            .await;
        return Outcome::Success;
    }

    info!(target_id = target.id, actor = ctx.actor.id, "member kicked");
    invocation
        .say(format!(
            "You kicked {} from the server.\nNote: this action has been reported to the staff.",
            mention
        ))
        .await;

    let target_notice = format!(
        "You were kicked from the \"{}\" server: `{}`",
        data.settings.guild_name,
        sanitize_mentions(&reason)
    );
    if let Err(source) = data
        .platform
        .direct_message(target.id, target_notice.into())
        .await
    {
        warn!(?source, target_id = target.id, "could not notify kicked member");
    }

    let action = Action::kick(target.id.to_string(), reason.as_str(), now_unix_secs());
    if let Err(source) = record_action(&data.store, action).await {
        error!(?source, target_id = target.id, "failed to record kick");
        invocation
            .say(format!(
                "The kick of {} could not be recorded: `{}`",
                mention, source
            ))
            .await;
    }

    let notice = action_notice(
        target,
        "kicked",
        &reason,
        &ctx.actor.tag,
        ctx.actor.avatar_url.clone(),
    );
    notify_owners(data, notice).await;

    Outcome::Success
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use warden_core::capability::KICK_MEMBERS;
    use warden_core::{Data, MentionedMember};
    use warden_database::{Action, MemberStore};

    use super::run;
    use crate::command::{Invocation, Outcome};
    use crate::commands;
    use crate::testing::{Call, FakePlatform, OWNER_ID, args, context, data, mentioned};

    async fn invoke(data: &Data, members: Vec<MentionedMember>, raw: &[&str]) -> Outcome {
        let registry = commands();
        let mut ctx = context(&[KICK_MEMBERS]);
        ctx.mentions.members = members;
        let invocation = Invocation {
            data,
            registry: &registry,
            ctx: &ctx,
        };
        run(&invocation, &args(raw)).await
    }

    #[tokio::test]
    async fn needs_mention_and_reason() {
        let platform = Arc::new(FakePlatform::default());
        let data = data(&platform);

        assert_eq!(
            invoke(&data, vec![mentioned(42, true)], &["<@42>"]).await,
            Outcome::Usage
        );
        assert_eq!(
            invoke(&data, vec![], &["someone", "spamming"]).await,
            Outcome::Usage
        );
        assert!(platform.calls().is_empty());
    }

    #[tokio::test]
    async fn unkickable_target_is_refused_without_record() {
        let platform = Arc::new(FakePlatform::default());
        let data = data(&platform);

        let outcome = invoke(&data, vec![mentioned(42, false)], &["<@42>", "spam"]).await;

        assert_eq!(outcome, Outcome::Success);
        assert_eq!(platform.reply_texts(), ["You can't kick <@42>."]);
        assert!(data.store.get("42").await.unwrap().actions().is_empty());
    }

    #[tokio::test]
    async fn successful_kick_appends_one_action_and_notifies() {
        let platform = Arc::new(FakePlatform::default());
        let data = data(&platform);

        let outcome = invoke(
            &data,
            vec![mentioned(42, true)],
            &["<@42>", "spamming", "here"],
        )
        .await;
        assert_eq!(outcome, Outcome::Success);

        let ledger = data.store.get("42").await.unwrap();
        let [action] = ledger.actions() else {
            panic!("expected exactly one action, got {:?}", ledger.actions());
        };
        assert!(matches!(action, Action::Kick { .. }));
        assert_eq!(action.target(), "42");
        assert_eq!(action.reason(), "spamming here");
        assert!(action.issued_at() > 0);

        let calls = platform.calls();
        assert_eq!(
            calls[0],
            Call::Kick {
                user_id: 42,
                reason: "spamming here".to_owned()
            }
        );
        assert!(calls.iter().any(|call| matches!(call, Call::DirectMessage { user_id: 42, .. })));
        assert!(
            calls
                .iter()
                .any(|call| matches!(call, Call::DirectMessage { user_id: OWNER_ID, .. }))
        );
        assert!(platform.reply_texts()[0].starts_with("You kicked <@42>"));
    }

    #[tokio::test]
    async fn target_is_the_first_argument_not_the_first_mention() {
        let platform = Arc::new(FakePlatform::default());
        let data = data(&platform);

        let outcome = invoke(
            &data,
            vec![mentioned(7, true), mentioned(42, true)],
            &["<@42>", "abuse", "reported", "by", "<@7>"],
        )
        .await;

        assert_eq!(outcome, Outcome::Success);
        assert_eq!(
            platform.calls()[0],
            Call::Kick {
                user_id: 42,
                reason: "abuse reported by <@7>".to_owned()
            }
        );
        assert_eq!(data.store.get("42").await.unwrap().actions().len(), 1);
        assert!(data.store.get("7").await.unwrap().actions().is_empty());
    }

    #[tokio::test]
    async fn mention_after_the_reason_is_usage() {
        let platform = Arc::new(FakePlatform::default());
        let data = data(&platform);

        let outcome = invoke(&data, vec![mentioned(42, true)], &["spamming", "<@42>"]).await;

        assert_eq!(outcome, Outcome::Usage);
        assert!(platform.calls().is_empty());
    }

    #[tokio::test]
    async fn storage_failure_is_reported_and_owners_still_notified() {
        let platform = Arc::new(FakePlatform::default());
        let data = Data {
            store: MemberStore::rejecting_writes(),
            ..data(&platform)
        };

        let outcome = invoke(&data, vec![mentioned(42, true)], &["<@42>", "spam"]).await;

        assert_eq!(outcome, Outcome::Success);
        let texts = platform.reply_texts();
        assert_eq!(texts.len(), 2);
        assert!(texts[1].starts_with("The kick of <@42> could not be recorded:"));
        assert!(
            platform
                .calls()
                .iter()
                .any(|call| matches!(call, Call::DirectMessage { user_id: OWNER_ID, .. }))
        );
    }

    #[tokio::test]
    async fn platform_rejection_records_nothing() {
        let platform = Arc::new(FakePlatform {
            fail_kick: true,
            ..FakePlatform::default()
        });
        let data = data(&platform);

        let outcome = invoke(&data, vec![mentioned(42, true)], &["<@42>", "spam"]).await;

        assert_eq!(outcome, Outcome::Success);
        assert_eq!(
            platform.reply_texts(),
            ["Couldn't kick <@42>: `missing permissions`"]
        );
        assert!(data.store.get("42").await.unwrap().actions().is_empty());
        assert!(
            !platform
                .calls()
                .iter()
                .any(|call| matches!(call, Call::DirectMessage { .. }))
        );
    }

    #[tokio::test]
    async fn repeated_kicks_accumulate_in_order() {
        let platform = Arc::new(FakePlatform::default());
        let data = data(&platform);

        invoke(&data, vec![mentioned(42, true)], &["<@42>", "first"]).await;
        invoke(&data, vec![mentioned(42, true)], &["<@42>", "second"]).await;

        let reasons: Vec<String> = data
            .store
            .get("42")
            .await
            .unwrap()
            .actions()
            .iter()
            .map(|action| action.reason().to_owned())
            .collect();
        assert_eq!(reasons, ["first", "second"]);
    }
}
