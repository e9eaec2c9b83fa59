//! Event-sourced mirror of the diary contract. Replaying the contract's
//! event stream against a blob store rebuilds a queryable graph of users,
//! volumes, entries, rewards, and premium changes, with streaks derived
//! by the same rules the service layer uses.

pub mod entities;
pub mod events;
pub mod handlers;
pub mod store;

pub use entities::{Entry, GlobalStats, PremiumStatusChange, Reward, User, Volume};
pub use events::{DiaryEvent, EventEnvelope};
pub use handlers::Indexer;
pub use store::EntityStore;
