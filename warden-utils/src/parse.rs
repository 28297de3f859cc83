/// Parse a user mention token (`<@123>` or `<@!123>`) into its id.
pub fn parse_user_mention(raw: &str) -> Option<u64> {
    let inner = raw.trim().strip_prefix("<@")?.strip_suffix('>')?;
    let digits = inner.strip_prefix('!').unwrap_or(inner);
    parse_snowflake(digits)
}

/// Parse a channel mention token (`<#123>`) into its id.
pub fn parse_channel_mention(raw: &str) -> Option<u64> {
    let inner = raw.trim().strip_prefix("<#")?.strip_suffix('>')?;
    parse_snowflake(inner)
}

/// Whether the token is written as a user mention, resolvable or not.
pub fn looks_like_user_mention(raw: &str) -> bool {
    raw.trim_start().starts_with("<@")
}

/// Every channel id mentioned in `text`, in order of appearance, without duplicates.
pub fn channel_mentions(text: &str) -> Vec<u64> {
    let mut ids = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find("<#") {
        let candidate = &rest[start..];
        let Some(end) = candidate.find('>') else {
            break;
        };

        if let Some(id) = parse_channel_mention(&candidate[..=end])
            && !ids.contains(&id)
        {
            ids.push(id);
        }
        rest = &candidate[end + 1..];
    }

    ids
}

/// Parse a comma or whitespace separated list of ids, skipping blanks.
pub fn parse_id_list(raw: &str) -> anyhow::Result<Vec<u64>> {
    raw.split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| parse_snowflake(part).ok_or_else(|| anyhow::anyhow!("invalid id `{part}`")))
        .collect()
}

fn parse_snowflake(raw: &str) -> Option<u64> {
    if raw.is_empty() || !raw.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }

    raw.parse::<u64>().ok().filter(|id| *id > 0)
}
