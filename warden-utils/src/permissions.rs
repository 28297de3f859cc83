use serenity::all::{Member, PartialGuild, Permissions, RoleId};

/// Convert a permission bitset into the flat capability names the commands check.
///
/// `ADMINISTRATOR` grants every permission on the platform, so it is expanded
/// here; the command gate itself never infers one capability from another.
pub fn capability_names(perms: Permissions) -> Vec<String> {
    let effective = if perms.contains(Permissions::ADMINISTRATOR) {
        Permissions::all()
    } else {
        perms
    };

    effective
        .iter_names()
        .map(|(name, _flag)| name.to_owned())
        .collect()
}

/// Combine the `@everyone` role with the member's roles. Guild owners hold everything.
pub fn member_permissions(guild: &PartialGuild, member: &Member) -> Permissions {
    if guild.owner_id == member.user.id {
        return Permissions::all();
    }

    let everyone_role_id = RoleId::new(guild.id.get());
    guild
        .roles
        .values()
        .filter(|role| role.id == everyone_role_id || member.roles.contains(&role.id))
        .fold(Permissions::empty(), |resolved, role| resolved | role.permissions)
}

/// Position of the member's highest role; members without roles sit at zero.
pub fn highest_role_position(guild: &PartialGuild, member: &Member) -> i64 {
    member
        .roles
        .iter()
        .filter_map(|role_id| guild.roles.get(role_id))
        .map(|role| i64::from(role.position))
        .max()
        .unwrap_or(0)
}

/// Whether `bot` may remove `target` under the guild's role hierarchy.
pub fn is_kickable(guild: &PartialGuild, bot: &Member, target: &Member) -> bool {
    if target.user.id == guild.owner_id || target.user.id == bot.user.id {
        return false;
    }

    let bot_perms = member_permissions(guild, bot);
    if !(bot_perms.contains(Permissions::ADMINISTRATOR)
        || bot_perms.contains(Permissions::KICK_MEMBERS))
    {
        return false;
    }

    guild.owner_id == bot.user.id
        || highest_role_position(guild, bot) > highest_role_position(guild, target)
}
