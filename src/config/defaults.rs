//! Default values for the main settings document.
//!
//! Every consulted key has a concrete default here; the store writes it
//! back whenever the key is absent or ill-typed.

use crate::config::schema::ArenaOrder;

/// The configuration version this build reads and writes.
pub(crate) const VERSION: i64 = 2;
pub(crate) const DEBUG: bool = false;
pub(crate) const REPORT_STATISTICS: bool = true;
pub(crate) const SKIP_UUID_CHECK: bool = false;
pub(crate) const ARENA_ORDER: ArenaOrder = ArenaOrder::Random;
pub(crate) const MESSAGE_PREFIX: &str = "&8[&cSkyWars&8]&a ";
pub(crate) const LOCALE: &str = "en";
pub(crate) const ARENA_GAMERULES: &[(&str, &str)] = &[("doDaylightCycle", "false")];
pub(crate) const RESPAWN_PLAYERS_IMMEDIATELY: bool = true;
pub(crate) const SAVE_INVENTORY: bool = true;
pub(crate) const ENABLE_MULTIPLE_QUEUES: bool = false;
pub(crate) const ENABLED_ARENAS: &[&str] = &["skyblock-warriors"];
pub(crate) const ARENA_DISTANCE_APART: i32 = 200;
pub(crate) const ARENA_COPYING_BLOCK_SIZE: i32 = 100_000;
pub(crate) const JOIN_SIGN_LINES: [&str; 4] = [
    "&8[&cSkyWars&8]",
    "&cJoin next game!",
    "{count} queued",
    "&8{arena}",
];
pub(crate) const DISABLE_REPORT: bool = false;
pub(crate) const DISABLE_SCORE_RECOVERY: bool = false;
pub(crate) const DEVELOPER_OPTIONS: bool = false;

pub(crate) mod score {
    pub(crate) const ENABLED: bool = false;
    pub(crate) const WIN_DIFF: i32 = 7;
    pub(crate) const KILL_DIFF: i32 = 1;
    pub(crate) const DEATH_DIFF: i32 = -2;
    /// Seconds between score saves when scores live in a local flat file.
    pub(crate) const SAVE_INTERVAL: i64 = 30;
    /// Seconds between score saves when scores live in a real database;
    /// saving every 30 seconds would hammer it.
    pub(crate) const SAVE_INTERVAL_WITH_SQL: i64 = 300;
    pub(crate) const USE_SQL: bool = false;
    pub(crate) const SQL_HOST: &str = "127.0.0.1";
    pub(crate) const SQL_PORT: i32 = 3306;
    pub(crate) const SQL_DATABASE: &str = "minecraft";
    pub(crate) const SQL_USERNAME: &str = "root";
    pub(crate) const SQL_PASSWORD: &str = "aComplexPassword";
    pub(crate) const INDIVIDUAL_RANK_UPDATE_INTERVAL: i64 = 120;
}

pub(crate) mod economy {
    pub(crate) const ENABLED: bool = true;
    pub(crate) const KILL_REWARD: i32 = 10;
    pub(crate) const WIN_REWARD: i32 = 10;
    pub(crate) const REWARD_MESSAGES: bool = true;
}

pub(crate) mod command_whitelist {
    pub(crate) const ENABLED: bool = true;
    pub(crate) const IS_BLACKLIST: bool = false;
    pub(crate) const COMMANDS: &[&str] = &["kit", "sw", "skywars"];
}

pub(crate) mod limit_messages {
    pub(crate) const START: bool = false;
    pub(crate) const DEATH: bool = false;
    pub(crate) const END: bool = false;
    pub(crate) const START_TIMER: bool = false;
}

pub(crate) mod kit_gui {
    pub(crate) const SHOW_UNAVAILABLE_KITS: bool = true;
    pub(crate) const REPLACE_KIT_COMMAND: bool = false;
    pub(crate) const SHOW_ON_JOIN: bool = false;
}

pub(crate) mod timing {
    /// Seconds until start once the queue is full.
    pub(crate) const TILL_START_AFTER_MAX_PLAYERS: i64 = 30;
    /// Seconds until start once the minimum player count is present.
    pub(crate) const TILL_START_AFTER_MIN_PLAYERS: i64 = 180;
    /// Seconds before the scheduled start at which the arena copy begins.
    pub(crate) const BEFORE_START_TO_COPY_ARENA: i64 = 60;
    /// Ticks players are frozen at their spawn after the game starts.
    pub(crate) const IN_GAME_PLAYER_FREEZE: i64 = 5;
    /// Remaining-seconds marks at which countdown messages are broadcast.
    pub(crate) const START_TIMER_MESSAGE_TIMES: &[i64] =
        &[600, 300, 180, 120, 60, 45, 30, 15, 10, 5, 4, 3, 2, 1];
}

pub(crate) mod hooks {
    pub(crate) const MULTIVERSE_CORE: bool = true;
    pub(crate) const WORLDEDIT: bool = true;
    pub(crate) const MULTIINV_WORKAROUND: bool = true;
    pub(crate) const FORCE_MULTIINV_WORKAROUND: bool = false;
}
