pub mod demo;

pub use demo::{
    ChatMessage, Class, ClassCounts, DeathEvent, DemoData, Header, PlayerSummaries,
    PlayerSummary, Round, Team, User,
};
