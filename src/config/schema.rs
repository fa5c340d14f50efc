//! Typed schema for the main settings snapshot.
//!
//! [`MainSettings`] is an immutable snapshot of every value one load pass
//! produced. It is constructed once at plugin start and replaced wholesale
//! (never mutated) on reload; consumers hold it by reference through the
//! configuration service.

use std::collections::HashMap;

use regex::Regex;

/// The order arenas are cycled through when a game ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArenaOrder {
    /// Arenas run in their configured order.
    Ordered,
    /// The next arena is picked at random.
    Random,
}

impl ArenaOrder {
    /// Names accepted by [`ArenaOrder::parse`], in canonical spelling.
    pub const VALID_NAMES: &'static [&'static str] = &["ORDERED", "RANDOM"];

    /// Parses an order by name, case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use skywars_config::ArenaOrder;
    ///
    /// assert_eq!(ArenaOrder::parse("random"), Some(ArenaOrder::Random));
    /// assert_eq!(ArenaOrder::parse("SHUFFLED"), None);
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "ORDERED" => Some(Self::Ordered),
            "RANDOM" => Some(Self::Random),
            _ => None,
        }
    }

    /// The canonical stored spelling of this order.
    #[must_use]
    pub fn canonical_name(self) -> &'static str {
        match self {
            Self::Ordered => "ORDERED",
            Self::Random => "RANDOM",
        }
    }
}

impl std::fmt::Display for ArenaOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.canonical_name())
    }
}

/// Player-state save toggles.
///
/// Invariant: experience or position-gamemode-health saving requires
/// inventory saving. The loader rejects any combination violating this;
/// it is a structural requirement of the save subsystem, not a niceness
/// check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveSettings {
    /// Save and restore player inventories around a game.
    pub inventory: bool,
    /// Save and restore experience.
    pub experience: bool,
    /// Save and restore position, gamemode and health.
    pub position_gamemode_health: bool,
}

/// Score tracking settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreSettings {
    /// Whether score tracking is enabled at all.
    pub enabled: bool,
    /// Score delta applied on a win.
    pub win_diff: i32,
    /// Score delta applied on a kill.
    pub kill_diff: i32,
    /// Score delta applied on a death.
    pub death_diff: i32,
    /// Seconds between score saves.
    pub save_interval: i64,
    /// Whether scores are stored in SQL rather than a flat file.
    pub use_sql: bool,
    /// SQL host.
    pub sql_host: String,
    /// SQL port.
    pub sql_port: i32,
    /// SQL database name.
    pub sql_database: String,
    /// SQL username.
    pub sql_username: String,
    /// SQL password.
    pub sql_password: String,
    /// Seconds between individual rank recalculations.
    pub individual_rank_update_interval: i64,
}

/// Economy reward settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EconomySettings {
    /// Whether economy rewards are enabled.
    pub enabled: bool,
    /// Currency awarded per kill.
    pub kill_reward: i32,
    /// Currency awarded per win.
    pub win_reward: i32,
    /// Whether players are told about their rewards.
    pub reward_messages: bool,
}

/// In-game command restriction settings.
#[derive(Debug, Clone)]
pub struct CommandWhitelistSettings {
    /// Whether command restriction is enabled.
    pub enabled: bool,
    /// When true the listed commands are blocked instead of allowed.
    pub treated_as_blacklist: bool,
    /// Compiled matcher over the configured command list, or `None` when
    /// the list is empty (feature effectively disabled).
    pub pattern: Option<Regex>,
}

impl CommandWhitelistSettings {
    /// Whether a chat command matches the configured list.
    ///
    /// # Examples
    ///
    /// ```
    /// use skywars_config::CommandWhitelistSettings;
    /// use regex::Regex;
    ///
    /// let settings = CommandWhitelistSettings {
    ///     enabled: true,
    ///     treated_as_blacklist: false,
    ///     pattern: Some(Regex::new("(?i)^(kit|vote)( .*|$)").unwrap()),
    /// };
    /// assert!(settings.matches("kit diamond"));
    /// assert!(!settings.matches("kits"));
    /// ```
    #[must_use]
    pub fn matches(&self, command: &str) -> bool {
        self.pattern
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(command))
    }
}

/// Broadcast-limiting toggles: when set, the given message category is
/// sent only to players in the affected arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageLimitSettings {
    /// Game-start messages.
    pub start: bool,
    /// Death messages.
    pub death: bool,
    /// Game-end messages.
    pub end: bool,
    /// Start-timer countdown messages.
    pub start_timer: bool,
}

/// Kit GUI behavior toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KitGuiSettings {
    /// Show kits the player cannot currently use.
    pub show_unavailable_kits: bool,
    /// Replace the `/kit` command with the GUI.
    pub replace_kit_command: bool,
    /// Open the GUI automatically when a player joins a queue.
    pub show_on_join: bool,
}

/// Countdown and arena-copy timing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerSettings {
    /// Seconds until start once the queue is full.
    pub till_start_after_max_players: i64,
    /// Seconds until start once the minimum player count is present.
    pub till_start_after_min_players: i64,
    /// Seconds of lead time before start at which the arena copy begins.
    pub before_start_to_copy_arena: i64,
    /// Ticks players are frozen after the game starts.
    pub in_game_player_freeze: i64,
    /// Remaining-seconds marks at which countdown messages fire.
    pub start_timer_message_times: Vec<i64>,
}

/// Third-party integration toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookSettings {
    /// Enable the world-management plugin hook.
    pub multiverse_core: bool,
    /// Enable the world-edit plugin hook.
    pub worldedit: bool,
    /// Enable the multi-inventory workaround when that plugin is detected.
    pub multiinv_workaround: bool,
    /// Force the multi-inventory workaround on regardless of detection.
    pub force_multiinv_workaround: bool,
}

/// Immutable snapshot of the main settings document.
///
/// Produced by one load pass of the main configuration loader; all fields
/// hold either the operator's stored value or the applied default, after
/// cross-field validation and migrations.
#[derive(Debug, Clone)]
pub struct MainSettings {
    /// Debug logging toggle, passed to consumers at construction instead
    /// of living in process-wide state.
    pub debug: bool,
    /// Whether anonymous usage statistics reporting is enabled.
    pub report_statistics: bool,
    /// Skip UUID lookups for offline-mode servers.
    pub skip_uuid_check: bool,
    /// Order arenas are cycled in.
    pub arena_order: ArenaOrder,
    /// Color-resolved prefix prepended to every plugin chat message.
    pub message_prefix: String,
    /// Message locale.
    pub locale: String,
    /// Gamerules applied to every arena world.
    pub arena_gamerules: HashMap<String, String>,
    /// Respawn players immediately instead of showing the death screen.
    pub respawn_players_immediately: bool,
    /// Player-state save toggles.
    pub save: SaveSettings,
    /// Whether multiple named queues are enabled.
    pub multiple_queues_enabled: bool,
    /// Score settings.
    pub score: ScoreSettings,
    /// Economy settings.
    pub economy: EconomySettings,
    /// Blocks left between neighboring arena copies.
    pub arena_distance_apart: i32,
    /// Blocks copied per arena-copy work unit.
    pub arena_copying_block_size: i32,
    /// Command restriction settings.
    pub command_whitelist: CommandWhitelistSettings,
    /// The four lines of text on physical join signs.
    pub join_sign_lines: [String; 4],
    /// Broadcast-limiting toggles.
    pub limit_messages: MessageLimitSettings,
    /// Kit GUI toggles.
    pub kit_gui: KitGuiSettings,
    /// Countdown and copy timing.
    pub timers: TimerSettings,
    /// Integration hook toggles.
    pub hooks: HookSettings,
    /// Disable the usage report entirely (read without default-persisting).
    pub disable_report: bool,
    /// Whether score storage errors are recovered from rather than fatal.
    pub recover_from_score_errors: bool,
    /// Developer options toggle (read without default-persisting).
    pub developer_options: bool,
}
