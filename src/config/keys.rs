//! Key names for the main settings document.
//!
//! One constant per consulted key, grouped by section the way the file
//! itself nests them. Dotted names navigate nested mappings in the store.

pub(crate) const VERSION: &str = "config-version";
pub(crate) const DEBUG: &str = "debug";
pub(crate) const REPORT_STATISTICS: &str = "report-statistics";
pub(crate) const SKIP_UUID_CHECK: &str = "skip-uuid-check";
pub(crate) const ARENA_ORDER: &str = "arena-order";
pub(crate) const MESSAGE_PREFIX: &str = "message-prefix";
pub(crate) const LOCALE: &str = "locale";
pub(crate) const ARENA_GAMERULES: &str = "arena-gamerules";
pub(crate) const RESPAWN_PLAYERS_IMMEDIATELY: &str = "respawn-players-immediately";
pub(crate) const SAVE_INVENTORY: &str = "save-inventory";
pub(crate) const SAVE_EXPERIENCE: &str = "save-experience";
pub(crate) const SAVE_POSITION_GAMEMODE_HEALTH: &str = "save-position-gamemode-health";
pub(crate) const ENABLE_MULTIPLE_QUEUES: &str = "enable-multiple-queues";
pub(crate) const QUEUE_DESCRIPTIONS: &str = "queue-descriptions";
pub(crate) const ENABLED_ARENAS: &str = "enabled-arenas";
pub(crate) const ARENA_DISTANCE_APART: &str = "arena-distance-apart";
pub(crate) const ARENA_COPYING_BLOCK_SIZE: &str = "arena-copying-block-size";
pub(crate) const JOIN_SIGN_LINES: &str = "join-sign-lines";
pub(crate) const DISABLE_REPORT: &str = "disable-report";
pub(crate) const DISABLE_SCORE_RECOVERY: &str = "disable-score-recovery";
pub(crate) const DEVELOPER_OPTIONS: &str = "developer-options";

pub(crate) mod score {
    pub(crate) const ENABLED: &str = "score.enabled";
    pub(crate) const WIN_DIFF: &str = "score.win-diff";
    pub(crate) const KILL_DIFF: &str = "score.kill-diff";
    pub(crate) const DEATH_DIFF: &str = "score.death-diff";
    pub(crate) const SAVE_INTERVAL: &str = "score.save-interval";
    pub(crate) const USE_SQL: &str = "score.use-sql";
    pub(crate) const SQL_HOST: &str = "score.sql.host";
    pub(crate) const SQL_PORT: &str = "score.sql.port";
    pub(crate) const SQL_DATABASE: &str = "score.sql.database";
    pub(crate) const SQL_USERNAME: &str = "score.sql.username";
    pub(crate) const SQL_PASSWORD: &str = "score.sql.password";
    pub(crate) const INDIVIDUAL_RANK_UPDATE_INTERVAL: &str =
        "score.individual-rank-update-interval";
}

pub(crate) mod economy {
    pub(crate) const ENABLED: &str = "economy.enabled";
    pub(crate) const KILL_REWARD: &str = "economy.kill-reward";
    pub(crate) const WIN_REWARD: &str = "economy.win-reward";
    pub(crate) const REWARD_MESSAGES: &str = "economy.reward-messages";
}

pub(crate) mod command_whitelist {
    pub(crate) const ENABLED: &str = "command-whitelist.enabled";
    pub(crate) const IS_BLACKLIST: &str = "command-whitelist.treated-as-blacklist";
    pub(crate) const COMMANDS: &str = "command-whitelist.commands";
}

pub(crate) mod limit_messages {
    pub(crate) const START: &str = "limit-messages.start";
    pub(crate) const DEATH: &str = "limit-messages.death";
    pub(crate) const END: &str = "limit-messages.end";
    pub(crate) const START_TIMER: &str = "limit-messages.start-timer";
}

pub(crate) mod kit_gui {
    pub(crate) const SHOW_UNAVAILABLE_KITS: &str = "kit-gui.show-unavailable-kits";
    pub(crate) const REPLACE_KIT_COMMAND: &str = "kit-gui.replace-kit-command";
    pub(crate) const SHOW_ON_JOIN: &str = "kit-gui.show-on-join";
}

pub(crate) mod timing {
    pub(crate) const TILL_START_AFTER_MAX_PLAYERS: &str = "timing.till-start-after-max-players";
    pub(crate) const TILL_START_AFTER_MIN_PLAYERS: &str = "timing.till-start-after-min-players";
    pub(crate) const BEFORE_START_TO_COPY_ARENA: &str = "timing.before-start-to-copy-arena";
    pub(crate) const IN_GAME_PLAYER_FREEZE: &str = "timing.in-game-player-freeze";
    pub(crate) const START_TIMER_MESSAGE_TIMES: &str = "timing.start-timer-message-times";
}

pub(crate) mod hooks {
    pub(crate) const MULTIVERSE_CORE: &str = "hooks.multiverse-core";
    pub(crate) const WORLDEDIT: &str = "hooks.worldedit";
    pub(crate) const MULTIINV_WORKAROUND: &str = "hooks.multiinv-workaround";
    pub(crate) const FORCE_MULTIINV_WORKAROUND: &str = "hooks.force-multiinv-workaround";
}

pub(crate) mod deprecated {
    pub(crate) const CHAT_PREFIX: &str = "chat-prefix";
    pub(crate) const PREFIX_CHAT: &str = "prefix-chat";
}
