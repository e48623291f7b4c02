//! Derived per user statistics.
//!
//! The kill/death ratio is displayed with [`crate::config::KD_DECIMALS`]
//! decimals everywhere, including users without any deaths whose ratio is
//! simply their number of kills.

use common::{Class, ClassCounts, PlayerSummary, User};

/// One of the raw counters of a [`PlayerSummary`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Counter {
    Points,
    Kills,
    Assists,
    Deaths,
    DamageDealt,
    Healing,
    Ubercharges,
    Headshots,
    Backstabs,
    BuildingsDestroyed,
    Captures,
    Defenses,
    Support,
}

impl Counter {
    /// `None` if the parser did not report this counter
    pub fn get(self, summary: &PlayerSummary) -> Option<u32> {
        match self {
            Self::Points => summary.points,
            Self::Kills => summary.kills,
            Self::Assists => summary.assists,
            Self::Deaths => summary.deaths,
            Self::DamageDealt => summary.damage_dealt,
            Self::Healing => summary.healing,
            Self::Ubercharges => summary.ubercharges,
            Self::Headshots => summary.headshots,
            Self::Backstabs => summary.backstabs,
            Self::BuildingsDestroyed => summary.buildings_destroyed,
            Self::Captures => summary.captures,
            Self::Defenses => summary.defenses,
            Self::Support => summary.support,
        }
    }

    /// The counter with missing data treated as zero
    pub fn value(self, summary: Option<&PlayerSummary>) -> u32 {
        summary.and_then(|s| self.get(s)).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedStats {
    pub kd: f64,
    pub headshot_pct: u8,
    pub top_class: Option<Class>,
}

/// Derives the stats of a user, `None` if there is no summary for them
pub fn derive(user: &User, summary: Option<&PlayerSummary>) -> Option<DerivedStats> {
    let summary = summary?;

    let kills = Counter::Kills.value(Some(summary));
    let deaths = Counter::Deaths.value(Some(summary));
    let headshots = Counter::Headshots.value(Some(summary));

    Some(DerivedStats {
        kd: kd(kills, deaths),
        headshot_pct: headshot_pct(headshots, kills),
        top_class: top_class(&user.classes),
    })
}

pub fn kd(kills: u32, deaths: u32) -> f64 {
    if deaths == 0 {
        return kills as f64;
    }

    kills as f64 / deaths as f64
}

/// Rounded percentage of kills that were headshots, always within `0..=100`
pub fn headshot_pct(headshots: u32, kills: u32) -> u8 {
    if kills == 0 {
        return 0;
    }

    let pct = (headshots as f64 / kills as f64 * 100.0).round();
    pct.clamp(0.0, 100.0) as u8
}

/// The most played class, ties go to the class with the lowest id.
///
/// Users that never played any class have no top class.
pub fn top_class(counts: &ClassCounts) -> Option<Class> {
    let mut top: Option<(Class, u32)> = None;
    for (class, count) in counts.iter().filter(|(_, c)| *c > 0) {
        match top {
            Some((_, top_count)) if top_count >= count => {}
            _ => top = Some((class, count)),
        }
    }

    top.map(|(class, _)| class)
}

pub fn format_kd(kd: f64) -> String {
    format!("{:.*}", crate::config::KD_DECIMALS, kd)
}
