//! The record handed back by the demo parser module.
//!
//! All of these types are plain values. Once a [`DemoData`] has been
//! deserialized nothing in this workspace changes it again.

use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoData {
    pub header: Header,
    #[serde(default)]
    pub chat: Vec<ChatMessage>,
    #[serde(default)]
    pub users: BTreeMap<u32, User>,
    #[serde(default)]
    pub deaths: Vec<DeathEvent>,
    #[serde(default)]
    pub rounds: Vec<Round>,
    #[serde(default)]
    pub start_tick: u32,
    #[serde(default)]
    pub interval_per_tick: Option<f64>,
    #[serde(default)]
    pub player_summary: Option<PlayerSummaries>,
}

impl DemoData {
    pub fn user(&self, id: u32) -> Option<&User> {
        self.users.get(&id)
    }

    /// The end of match summary for the given user, if the parser produced one
    pub fn summary(&self, id: u32) -> Option<&PlayerSummary> {
        self.player_summary
            .as_ref()
            .and_then(|s| s.player_summaries.get(&id))
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Header {
    pub demo_type: String,
    pub version: u32,
    pub protocol: u32,
    pub server: String,
    pub nick: String,
    pub map: String,
    pub game: String,
    /// Length of the recording in seconds
    pub duration: f64,
    pub ticks: u32,
    #[serde(default)]
    pub frames: u32,
    #[serde(default)]
    pub signon: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Red,
    Blue,
    #[serde(other)]
    Other,
}

impl Team {
    /// Position of the team in the grouped player views
    pub fn display_rank(self) -> u8 {
        match self {
            Self::Red => 0,
            Self::Blue => 1,
            Self::Other => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub name: String,
    pub user_id: u32,
    pub steam_id: String,
    pub team: Team,
    #[serde(default)]
    pub classes: ClassCounts,
}

/// Player classes, numbered the way the viewer labels them (Scout = 0 up to
/// Spy = 8).
///
/// Class keys on the wire are read with this numbering as is. A parser that
/// numbers its classes differently (e.g. Other = 0, Scout = 1, Sniper = 2)
/// needs its keys remapped before they get here, otherwise the names are off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Class {
    Scout,
    Soldier,
    Pyro,
    Demoman,
    Heavy,
    Engineer,
    Medic,
    Sniper,
    Spy,
    Unknown,
}

impl Class {
    pub const ALL: [Class; 10] = [
        Class::Scout,
        Class::Soldier,
        Class::Pyro,
        Class::Demoman,
        Class::Heavy,
        Class::Engineer,
        Class::Medic,
        Class::Sniper,
        Class::Spy,
        Class::Unknown,
    ];

    pub fn id(self) -> u8 {
        self as u8
    }

    /// Anything outside of the known range ends up as [`Class::Unknown`]
    pub fn from_id(id: u8) -> Self {
        Self::ALL
            .get(id as usize)
            .copied()
            .unwrap_or(Class::Unknown)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Scout => "Scout",
            Self::Soldier => "Soldier",
            Self::Pyro => "Pyro",
            Self::Demoman => "Demoman",
            Self::Heavy => "Heavy",
            Self::Engineer => "Engineer",
            Self::Medic => "Medic",
            Self::Sniper => "Sniper",
            Self::Spy => "Spy",
            Self::Unknown => "Unknown",
        }
    }
}

/// Per class occurrence counter of a single user, indexed by [`Class`].
///
/// On the wire this is a map from the class id (as a string) to the count.
/// Keys that don't name a known class are added to [`Class::Unknown`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "BTreeMap<String, u32>", into = "BTreeMap<String, u32>")]
pub struct ClassCounts([u32; 10]);

impl ClassCounts {
    pub fn new(counts: [u32; 10]) -> Self {
        Self(counts)
    }

    pub fn get(&self, class: Class) -> u32 {
        self.0[class as usize]
    }

    pub fn total(&self) -> u32 {
        self.0.iter().copied().fold(0, u32::saturating_add)
    }

    /// All classes together with their count, in class id order
    pub fn iter(&self) -> impl Iterator<Item = (Class, u32)> + '_ {
        Class::ALL.into_iter().zip(self.0.iter().copied())
    }
}

impl From<BTreeMap<String, u32>> for ClassCounts {
    fn from(value: BTreeMap<String, u32>) -> Self {
        let mut counts = [0u32; 10];
        for (key, count) in value {
            let class = key
                .trim()
                .parse::<u8>()
                .map(Class::from_id)
                .unwrap_or(Class::Unknown);
            let slot = &mut counts[class as usize];
            *slot = slot.saturating_add(count);
        }
        Self(counts)
    }
}

impl From<ClassCounts> for BTreeMap<String, u32> {
    fn from(value: ClassCounts) -> Self {
        value
            .iter()
            .filter(|(_, count)| *count > 0)
            .map(|(class, count)| (class.id().to_string(), count))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeathEvent {
    pub weapon: String,
    pub victim: u32,
    #[serde(default)]
    pub assister: Option<u32>,
    pub killer: u32,
    pub tick: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChatMessage {
    /// Raw message kind as reported by the game, e.g. `TF_Chat_Team`
    pub kind: String,
    /// Display name of the sender. This is not a user id.
    pub from: String,
    pub text: String,
    pub tick: u32,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Round {
    pub winner: Team,
    /// Length of the round in seconds
    pub length: f64,
    pub end_tick: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlayerSummaries {
    #[serde(default)]
    pub player_summaries: BTreeMap<u32, PlayerSummary>,
}

/// End of match scoreboard values for one user.
///
/// Every counter is optional, a missing counter means the parser had no data
/// for it which is not the same as a value of zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayerSummary {
    pub points: Option<u32>,
    pub kills: Option<u32>,
    pub assists: Option<u32>,
    pub deaths: Option<u32>,
    pub damage_dealt: Option<u32>,
    pub healing: Option<u32>,
    pub ubercharges: Option<u32>,
    pub headshots: Option<u32>,
    pub backstabs: Option<u32>,
    pub buildings_destroyed: Option<u32>,
    pub captures: Option<u32>,
    pub defenses: Option<u32>,
    pub support: Option<u32>,
    pub dominations: Option<u32>,
    pub revenges: Option<u32>,
    pub teleports: Option<u32>,
    pub bonus_points: Option<u32>,
}
