//! Projections of a demo for the different display surfaces.

use common::{Class, DemoData, PlayerSummary, Team, User};

use crate::{
    clock::{self, TickClock},
    paginate,
    sorting::{self, SortConfig, SortKey},
    stats::{self, DerivedStats},
    team::{self, Participant},
    Config,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overview<'d> {
    pub map: &'d str,
    pub duration: String,
    pub ticks: u32,
    pub players: usize,
    pub server: &'d str,
    pub protocol: u32,
    pub recorder: &'d str,
    pub game: &'d str,
    pub rounds: usize,
    pub red_wins: usize,
    pub blue_wins: usize,
}

pub fn overview(data: &DemoData) -> Overview<'_> {
    let wins = |team: Team| data.rounds.iter().filter(|r| r.winner == team).count();

    Overview {
        map: &data.header.map,
        duration: clock::format_seconds(data.header.duration),
        ticks: data.header.ticks,
        players: data.users.len(),
        server: &data.header.server,
        protocol: data.header.protocol,
        recorder: &data.header.nick,
        game: &data.header.game,
        rounds: data.rounds.len(),
        red_wins: wins(Team::Red),
        blue_wins: wins(Team::Blue),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KillfeedEntry<'d> {
    pub tick: u32,
    pub time: String,
    pub killer: Participant<'d>,
    pub victim: Participant<'d>,
    pub assister: Option<Participant<'d>>,
    pub weapon: &'d str,
}

/// Every death of the demo in tick order
pub fn killfeed(data: &DemoData) -> Vec<KillfeedEntry<'_>> {
    let clock = TickClock::for_demo(data);

    data.deaths
        .iter()
        .map(|death| KillfeedEntry {
            tick: death.tick,
            time: clock.format(death.tick),
            killer: team::resolve_user(death.killer, &data.users),
            victim: team::resolve_user(death.victim, &data.users),
            assister: death.assister.map(|id| team::resolve_user(id, &data.users)),
            weapon: &death.weapon,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerCard<'d> {
    pub user: &'d User,
    /// Only classes that were actually played, in class id order
    pub classes: Vec<(Class, u32)>,
    pub summary: Option<&'d PlayerSummary>,
    pub stats: Option<DerivedStats>,
}

impl<'d> PlayerCard<'d> {
    fn new(user: &'d User, data: &'d DemoData) -> Self {
        let summary = data.summary(user.user_id);

        Self {
            user,
            classes: user.classes.iter().filter(|(_, c)| *c > 0).collect(),
            summary,
            stats: stats::derive(user, summary),
        }
    }

    /// The formatted kill/death ratio, `None` without a summary
    pub fn kd(&self) -> Option<String> {
        self.stats.map(|s| stats::format_kd(s.kd))
    }
}

/// Cards of all players grouped by team
pub fn player_cards(data: &DemoData) -> Vec<PlayerCard<'_>> {
    let users = sorting::all_users(data);
    sorting::group_by_team(&users, data)
        .into_iter()
        .map(|user| PlayerCard::new(user, data))
        .collect()
}

/// Rows of a scoreboard sorted by a single column
pub fn scoreboard(data: &DemoData, sort: SortConfig) -> Vec<PlayerCard<'_>> {
    let users = sorting::all_users(data);
    sorting::sort_users(&users, data, sort)
        .into_iter()
        .map(|user| PlayerCard::new(user, data))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundEntry {
    /// One based
    pub number: usize,
    pub winner: Team,
    pub length: String,
    pub end: String,
}

pub fn rounds(data: &DemoData) -> Vec<RoundEntry> {
    let clock = TickClock::for_demo(data);

    data.rounds
        .iter()
        .enumerate()
        .map(|(idx, round)| RoundEntry {
            number: idx + 1,
            winner: round.winner,
            length: clock::format_seconds(round.length),
            end: clock.format(round.end_tick),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Tab {
    #[default]
    Overview,
    Players,
    Killfeed,
    Chat,
}

/// Everything a display surface remembers between renders.
///
/// Owned by the caller, a fresh demo should start with [`ViewState::default`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ViewState {
    pub tab: Tab,
    pub sort: SortConfig,
    pub killfeed_page: usize,
    pub chat_page: usize,
}

impl ViewState {
    pub fn select_tab(self, tab: Tab) -> Self {
        Self { tab, ..self }
    }

    pub fn sort_by(self, key: SortKey) -> Self {
        Self {
            sort: self.sort.toggle(key),
            ..self
        }
    }

    pub fn next_killfeed_page(self, data: &DemoData, config: &Config) -> Self {
        Self {
            killfeed_page: paginate::next_page(self.killfeed_page, data.deaths.len(), config.page_size()),
            ..self
        }
    }

    pub fn previous_killfeed_page(self, data: &DemoData, config: &Config) -> Self {
        Self {
            killfeed_page: paginate::previous_page(self.killfeed_page, data.deaths.len(), config.page_size()),
            ..self
        }
    }

    pub fn next_chat_page(self, data: &DemoData, config: &Config) -> Self {
        Self {
            chat_page: paginate::next_page(self.chat_page, data.chat.len(), config.page_size()),
            ..self
        }
    }

    pub fn previous_chat_page(self, data: &DemoData, config: &Config) -> Self {
        Self {
            chat_page: paginate::previous_page(self.chat_page, data.chat.len(), config.page_size()),
            ..self
        }
    }
}
