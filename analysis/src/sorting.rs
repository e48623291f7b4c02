//! Orderings of the user table for the scoreboard like views.

use common::{DemoData, PlayerSummary, User};

use crate::stats::{self, Counter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Name,
    Points,
    Kills,
    Assists,
    Deaths,
    Kd,
    HeadshotPct,
    DamageDealt,
    Healing,
    Ubercharges,
    Backstabs,
    BuildingsDestroyed,
    Captures,
    Defenses,
    Support,
}

impl SortKey {
    fn counter(self) -> Option<Counter> {
        match self {
            Self::Points => Some(Counter::Points),
            Self::Kills => Some(Counter::Kills),
            Self::Assists => Some(Counter::Assists),
            Self::Deaths => Some(Counter::Deaths),
            Self::DamageDealt => Some(Counter::DamageDealt),
            Self::Healing => Some(Counter::Healing),
            Self::Ubercharges => Some(Counter::Ubercharges),
            Self::Backstabs => Some(Counter::Backstabs),
            Self::BuildingsDestroyed => Some(Counter::BuildingsDestroyed),
            Self::Captures => Some(Counter::Captures),
            Self::Defenses => Some(Counter::Defenses),
            Self::Support => Some(Counter::Support),
            Self::Name | Self::Kd | Self::HeadshotPct => None,
        }
    }

    /// The direction a freshly selected key starts out with
    pub fn default_direction(self) -> Direction {
        match self {
            Self::Name => Direction::Ascending,
            _ => Direction::Descending,
        }
    }

    fn extract(self, user: &User, summary: Option<&PlayerSummary>) -> KeyValue {
        if let Some(counter) = self.counter() {
            return KeyValue::Number(counter.value(summary) as f64);
        }

        let kills = Counter::Kills.value(summary);
        match self {
            Self::Name => KeyValue::Text(user.name.to_lowercase()),
            Self::Kd => KeyValue::Number(stats::kd(kills, Counter::Deaths.value(summary))),
            Self::HeadshotPct => KeyValue::Number(
                stats::headshot_pct(Counter::Headshots.value(summary), kills) as f64,
            ),
            _ => KeyValue::Number(0.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    pub fn flip(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: Direction,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            key: SortKey::Points,
            direction: Direction::Descending,
        }
    }
}

impl SortConfig {
    pub fn new(key: SortKey, direction: Direction) -> Self {
        Self { key, direction }
    }

    /// Selecting the active key again flips the direction, any other key
    /// starts with its default direction
    pub fn toggle(self, key: SortKey) -> Self {
        if self.key == key {
            Self {
                key,
                direction: self.direction.flip(),
            }
        } else {
            Self {
                key,
                direction: key.default_direction(),
            }
        }
    }

    pub fn display_symbol(&self, key: SortKey) -> &'static str {
        if self.key != key {
            return "-";
        }

        match self.direction {
            Direction::Ascending => "↑",
            Direction::Descending => "↓",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum KeyValue {
    Text(String),
    Number(f64),
}

impl KeyValue {
    fn compare(&self, other: &Self) -> core::cmp::Ordering {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Text(_), Self::Number(_)) => core::cmp::Ordering::Less,
            (Self::Number(_), Self::Text(_)) => core::cmp::Ordering::Greater,
        }
    }
}

/// All users of the demo, in id order
pub fn all_users(data: &DemoData) -> Vec<&User> {
    data.users.values().collect()
}

/// Sorts the given users by a single key.
///
/// Users without a summary count as zero for every numeric key. Users that
/// compare equal keep their order from `users`, so sorting an already sorted
/// list by another key keeps the previous order within ties.
pub fn sort_users<'d>(users: &[&'d User], data: &DemoData, config: SortConfig) -> Vec<&'d User> {
    let mut keyed: Vec<(KeyValue, usize, &'d User)> = users
        .iter()
        .enumerate()
        .map(|(pos, user)| (config.key.extract(user, data.summary(user.user_id)), pos, *user))
        .collect();

    keyed.sort_by(|(k1, p1, u1), (k2, p2, u2)| {
        let by_key = match config.direction {
            Direction::Ascending => k1.compare(k2),
            Direction::Descending => k2.compare(k1),
        };
        by_key
            .then_with(|| p1.cmp(p2))
            .then_with(|| u1.user_id.cmp(&u2.user_id))
    });

    keyed.into_iter().map(|(_, _, u)| u).collect()
}

/// Red before Blue before everybody else, within a team by points descending
pub fn group_by_team<'d>(users: &[&'d User], data: &DemoData) -> Vec<&'d User> {
    let mut keyed: Vec<(u8, u32, &'d User)> = users
        .iter()
        .map(|user| {
            let points = Counter::Points.value(data.summary(user.user_id));
            (user.team.display_rank(), points, *user)
        })
        .collect();

    keyed.sort_by(|(t1, p1, u1), (t2, p2, u2)| {
        t1.cmp(t2)
            .then_with(|| p2.cmp(p1))
            .then_with(|| u1.user_id.cmp(&u2.user_id))
    });

    keyed.into_iter().map(|(_, _, u)| u).collect()
}
