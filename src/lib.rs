//! Configuration subsystem for a SkyWars-style minigame server.
//!
//! This library loads, validates and persists every settings file the
//! plugin uses: the main configuration document, per-arena settings files
//! inheriting from a shared parent template, and the queue-to-arena
//! assignment derived from them. Settings files are human-edited YAML; the
//! loader fills in defaults for anything missing and re-saves the canonical
//! form, so operators always have a complete file to work from.
//!
//! # Examples
//!
//! ```no_run
//! use skywars_config::ConfigService;
//!
//! let service = ConfigService::load("plugins/SkyWars").unwrap();
//! let settings = service.settings();
//! println!(
//!     "{} arenas, order {}",
//!     service.enabled_arenas().len(),
//!     settings.arena_order,
//! );
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod color;
pub mod config;
pub mod error;
pub mod events;
pub mod resources;
pub mod store;

pub use config::{
    ArenaConfig, ArenaLoader, ArenaOrder, CommandWhitelistSettings, ConfigLoader, ConfigService,
    ConfigSnapshot, EconomySettings, HookSettings, KitGuiSettings, MainSettings,
    MessageLimitSettings, QueueMap, SaveSettings, ScoreSettings, TimerSettings,
};
pub use error::{Error, Result};
pub use events::{JoinQueueInfo, JoinSecondaryQueueInfo, PlayerId};
pub use store::SettingsFile;
