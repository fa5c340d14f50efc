//! Configuration loading for the whole plugin.
//!
//! The load pipeline runs in one pass: the main settings document is read
//! with get-or-set-default semantics, validated, migrated and re-saved in
//! canonical form, then every arena referenced by a queue is loaded against
//! the shared parent template. [`ConfigService`] holds the result and swaps
//! it atomically on reload.

pub mod arena;
pub(crate) mod defaults;
pub(crate) mod keys;
pub mod loader;
pub mod queue;
pub mod schema;

pub use arena::{ArenaConfig, ArenaLoader};
pub use loader::{ConfigLoader, ConfigService, ConfigSnapshot};
pub use queue::QueueMap;
pub use schema::{
    ArenaOrder, CommandWhitelistSettings, EconomySettings, HookSettings, KitGuiSettings,
    MainSettings, MessageLimitSettings, SaveSettings, ScoreSettings, TimerSettings,
};
