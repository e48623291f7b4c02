//! Read-only views over a parsed demo.
//!
//! A [`store::DemoRecordStore`] holds the record of the currently loaded demo,
//! everything else in here are pure functions over that record which produce
//! the sorted, paginated and cross referenced data the display surfaces need.

pub mod chat;
pub mod clock;
pub mod config;
pub mod error;
pub mod paginate;
pub mod parser;
pub mod sorting;
pub mod stats;
pub mod store;
pub mod team;
pub mod views;

pub use config::Config;
pub use error::LoadError;
