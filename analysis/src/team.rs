//! Cross referencing of names and ids against the user table.

use std::collections::BTreeMap;

use common::{Team, User};

/// Name shown for ids that are not part of the user table
pub const UNKNOWN_NAME: &str = "Unknown";

/// Resolves the team of a chat sender by their display name.
///
/// Chat lines only carry the name of the sender, so this is best effort: the
/// first user (in the given order) with exactly this name wins. Two users with
/// the same name, or somebody renaming during the match, end up attributed to
/// whoever matches first. Names that match nobody are [`Team::Other`].
pub fn resolve_team<'u, I>(name: &str, users: I) -> Team
where
    I: IntoIterator<Item = &'u User>,
{
    users
        .into_iter()
        .find(|u| u.name == name)
        .map(|u| u.team)
        .unwrap_or(Team::Other)
}

/// A user referenced by some event, possibly missing from the user table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Participant<'d> {
    pub id: u32,
    pub name: &'d str,
    pub team: Team,
    pub known: bool,
}

pub fn resolve_user(id: u32, users: &BTreeMap<u32, User>) -> Participant<'_> {
    match users.get(&id) {
        Some(user) => Participant {
            id,
            name: &user.name,
            team: user.team,
            known: true,
        },
        None => {
            tracing::trace!(id, "Event references unknown user");

            Participant {
                id,
                name: UNKNOWN_NAME,
                team: Team::Other,
                known: false,
            }
        }
    }
}
