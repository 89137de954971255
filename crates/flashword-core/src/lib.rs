//! flashword-core — Word catalog, session persistence, and the game state machine.
//!
//! This crate defines the data model, the durable key-value store seam, and
//! the turn logic that every flashword front end builds on.

pub mod catalog;
pub mod config;
pub mod cues;
pub mod error;
pub mod game;
pub mod model;
pub mod session;
pub mod store;

pub use catalog::Catalog;
pub use error::{CatalogError, StoreError};
pub use game::{AnswerOutcome, Feedback, Game, GameState};
pub use model::{UserRecord, WordEntry};
pub use session::{LoginOutcome, SessionStore};
pub use store::{FileStore, KeyValueStore, MemoryStore};
