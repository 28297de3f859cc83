/// Format a user id as a platform mention.
pub fn user_mention(user_id: u64) -> String {
    format!("<@{}>", user_id)
}

/// Format a channel id as a platform mention.
pub fn channel_mention(channel_id: u64) -> String {
    format!("<#{}>", channel_id)
}

/// Break `@` so quoted free text can't ping anyone.
pub fn sanitize_mentions(raw: &str) -> String {
    raw.replace('@', "@\u{200B}")
}

/// Rejoin free-text argument tokens with single spaces.
pub fn join_args<S: AsRef<str>>(args: &[S]) -> String {
    args.iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a command invocation example like `!kick <@user> <reason...>`.
pub fn format_invocation(prefix: &str, alias: &str, usage: Option<&str>) -> String {
    match usage {
        Some(usage) if !usage.is_empty() => format!("{}{} {}", prefix, alias, usage),
        _ => format!("{}{}", prefix, alias),
    }
}
