//! The chat log of a demo.
//!
//! Chat lines only know the display name of their sender, the team is looked
//! up by that name.

use common::{DemoData, Team};

use crate::clock::TickClock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ChatKind {
    All,
    Team,
    Other,
}

static CHAT_KINDS: phf::Map<&'static str, ChatKind> = phf::phf_map! {
    "TF_Chat_All" => ChatKind::All,
    "TF_Chat_AllDead" => ChatKind::All,
    "TF_Chat_AllSpec" => ChatKind::All,
    "TF_Chat_Team" => ChatKind::Team,
    "TF_Chat_Team_Dead" => ChatKind::Team,
    "TF_Chat_Team_Loc" => ChatKind::Team,
};

pub fn classify(kind: &str) -> ChatKind {
    CHAT_KINDS.get(kind).copied().unwrap_or(ChatKind::Other)
}

/// The kind as shown next to a message, `TF_Chat_Team` becomes `Team`
pub fn display_label(kind: &str) -> &str {
    kind.strip_prefix("TF_Chat_").unwrap_or(kind)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEntry<'d> {
    pub tick: u32,
    pub time: String,
    pub from: &'d str,
    /// Resolved by name, see [`crate::team::resolve_team`]
    pub team: Team,
    pub kind: ChatKind,
    pub label: &'d str,
    pub text: &'d str,
}

/// The chat of the demo in the order it was recorded
pub fn chat_log(data: &DemoData) -> Vec<ChatEntry<'_>> {
    let clock = TickClock::for_demo(data);

    data.chat
        .iter()
        .map(|msg| ChatEntry {
            tick: msg.tick,
            time: clock.format(msg.tick),
            from: &msg.from,
            team: crate::team::resolve_team(&msg.from, data.users.values()),
            kind: classify(&msg.kind),
            label: display_label(&msg.kind),
            text: &msg.text,
        })
        .collect()
}
