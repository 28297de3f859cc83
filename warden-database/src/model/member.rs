use serde::{Deserialize, Serialize};

/// A single moderation action issued against a member.
///
/// Actions are never mutated once created; the ledger only grows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Action {
    Kick {
        target: String,
        reason: String,
        issued_at: u64,
    },
    Ban {
        target: String,
        reason: String,
        days: u8,
        issued_at: u64,
    },
}

impl Action {
    /// `issued_at` is in unix seconds.
    pub fn kick(target: impl Into<String>, reason: impl Into<String>, issued_at: u64) -> Self {
        Self::Kick {
            target: target.into(),
            reason: reason.into(),
            issued_at,
        }
    }

    pub fn ban(
        target: impl Into<String>,
        reason: impl Into<String>,
        days: u8,
        issued_at: u64,
    ) -> Self {
        Self::Ban {
            target: target.into(),
            reason: reason.into(),
            days,
            issued_at,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Kick { .. } => "kick",
            Self::Ban { .. } => "ban",
        }
    }

    pub fn target(&self) -> &str {
        match self {
            Self::Kick { target, .. } | Self::Ban { target, .. } => target,
        }
    }

    pub fn reason(&self) -> &str {
        match self {
            Self::Kick { reason, .. } | Self::Ban { reason, .. } => reason,
        }
    }

    pub fn issued_at(&self) -> u64 {
        match self {
            Self::Kick { issued_at, .. } | Self::Ban { issued_at, .. } => *issued_at,
        }
    }
}

/// A guild member and their moderation ledger.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    id: String,
    actions: Vec<Action>,
}

impl Member {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            actions: Vec::new(),
        }
    }

    pub(crate) fn from_parts(id: String, actions: Vec<Action>) -> Self {
        Self { id, actions }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Chronological action history, oldest first.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Append an action to the ledger. Persisting it is the caller's job.
    pub fn record(&mut self, action: Action) {
        self.actions.push(action);
    }
}

#[cfg(test)]
mod tests {
    use super::{Action, Member};

    #[test]
    fn actions_serialize_with_kind_tag() {
        let action = Action::Kick {
            target: "42".to_owned(),
            reason: "spam".to_owned(),
            issued_at: 1_700_000_000,
        };

        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["kind"], "kick");
        assert_eq!(json["target"], "42");
        assert_eq!(json["issued_at"], 1_700_000_000_u64);

        let parsed: Action = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, action);
    }

    #[test]
    fn ban_carries_days() {
        let action = Action::ban("7", "raid", 3, 100);
        assert_eq!(action.name(), "ban");
        assert_eq!(action.target(), "7");
        assert_eq!(action.reason(), "raid");
        assert!(matches!(action, Action::Ban { days: 3, .. }));
    }

    #[test]
    fn record_appends_in_order() {
        let mut member = Member::new("42");
        member.record(Action::kick("42", "first", 10));
        member.record(Action::ban("42", "second", 0, 20));

        let reasons: Vec<&str> = member.actions().iter().map(Action::reason).collect();
        assert_eq!(reasons, ["first", "second"]);
        assert_eq!(member.actions()[0].issued_at(), 10);
    }
}
