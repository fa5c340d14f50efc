//! The main configuration load procedure and the service wrapping it.
//!
//! One load pass reads the main settings document, applies defaults and
//! migrations, validates cross-field constraints, re-saves the canonical
//! document, and then loads every arena each queue references. The pass
//! produces a [`ConfigSnapshot`]; [`ConfigService`] swaps snapshots in
//! whole on reload, so a failed reload leaves the previous configuration
//! fully intact.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use regex::Regex;
use serde_yaml::Mapping;

use crate::color;
use crate::config::arena::{ArenaConfig, ArenaLoader};
use crate::config::queue::QueueMap;
use crate::config::schema::{
    ArenaOrder, CommandWhitelistSettings, EconomySettings, HookSettings, KitGuiSettings,
    MainSettings, MessageLimitSettings, SaveSettings, ScoreSettings, TimerSettings,
};
use crate::config::{defaults, keys};
use crate::error::{Error, Result};
use crate::resources;
use crate::store::SettingsFile;

/// File name of the main settings document, relative to the data directory.
pub const MAIN_FILE: &str = "main-config.yml";
/// Directory holding per-arena settings files, relative to the data
/// directory.
pub const ARENA_DIR: &str = "arenas";
/// File name of the shared arena parent template, relative to the data
/// directory.
pub const PARENT_FILE: &str = "arena-parent.yml";

const MAIN_HEADER: &str = "####### main-config.yml #######

All comment changes will be removed on the next load.

For documentation, please visit
https://dabo.guru/projects/skywars/configuring-skywars
#########";

fn arena_header(name: &str) -> String {
    format!(
        "####### {name}.yml ###

All values that are not in this file are inherited from
arena-parent.yml.

All comment changes will be removed on the next load.

For documentation, please visit
https://dabo.guru/projects/skywars/configuring-arenas
#######"
    )
}

/// Everything one load pass produced.
#[derive(Debug, Clone)]
pub struct ConfigSnapshot {
    /// The validated main settings.
    pub settings: MainSettings,
    /// One entry per arena reference, in queue document order. A name
    /// referenced by several queues appears once per reference, all
    /// sharing the same loaded document.
    pub enabled_arenas: Vec<Arc<ArenaConfig>>,
    /// Queue-to-arena assignment.
    pub queues: QueueMap,
}

/// Runs one full load pass against a data directory.
#[derive(Debug)]
pub struct ConfigLoader<'a> {
    data_dir: &'a Path,
}

impl<'a> ConfigLoader<'a> {
    /// Creates a loader rooted at the plugin data directory.
    #[must_use]
    pub fn new(data_dir: &'a Path) -> Self {
        Self { data_dir }
    }

    /// Loads, validates, migrates and re-saves the whole configuration.
    ///
    /// On success every consulted key is present in the persisted main
    /// document, every referenced arena has a complete settings file on
    /// disk, and the returned snapshot is internally consistent. On error
    /// nothing the caller previously held is touched.
    ///
    /// # Errors
    ///
    /// Returns an error when any settings file cannot be read, parsed, or
    /// written, or when a semantic constraint fails. Every configuration
    /// error names the offending key and file.
    pub fn load(&self) -> Result<ConfigSnapshot> {
        let main_path = self.data_dir.join(MAIN_FILE);
        let mut main = SettingsFile::load(&main_path)?;

        let arena_dir = self.data_dir.join(ARENA_DIR);
        if !arena_dir.exists() {
            fs::create_dir_all(&arena_dir)?;
        } else if !arena_dir.is_dir() {
            return Err(Error::NotADirectory { path: arena_dir });
        }

        let version = main.get_set_long(keys::VERSION, defaults::VERSION);
        if version > defaults::VERSION {
            return Err(Error::UnsupportedVersion {
                found: version,
                max: defaults::VERSION,
                key: keys::VERSION,
                path: main_path,
            });
        }
        main.overwrite(keys::VERSION, defaults::VERSION);

        let debug = main.get_set_bool(keys::DEBUG, defaults::DEBUG);
        let report_statistics =
            main.get_set_bool(keys::REPORT_STATISTICS, defaults::REPORT_STATISTICS);
        let skip_uuid_check = main.get_bool(keys::SKIP_UUID_CHECK, defaults::SKIP_UUID_CHECK);

        let order_name =
            main.get_set_string(keys::ARENA_ORDER, defaults::ARENA_ORDER.canonical_name());
        let Some(arena_order) = ArenaOrder::parse(&order_name) else {
            return Err(Error::InvalidArenaOrder {
                value: order_name,
                valid: ArenaOrder::VALID_NAMES.join(", "),
                key: keys::ARENA_ORDER,
                path: main_path,
            });
        };

        let message_prefix =
            color::translate_codes(&main.get_set_string(keys::MESSAGE_PREFIX, defaults::MESSAGE_PREFIX));
        main.set_string_if_differs(keys::MESSAGE_PREFIX, &message_prefix);

        let inventory = main.get_set_bool(keys::SAVE_INVENTORY, defaults::SAVE_INVENTORY);
        // Experience and position saving default to whatever inventory
        // saving is set to, and cannot be enabled without it.
        let experience = main.get_set_bool(keys::SAVE_EXPERIENCE, inventory);
        let position_gamemode_health =
            main.get_set_bool(keys::SAVE_POSITION_GAMEMODE_HEALTH, inventory);
        if (experience || position_gamemode_health) && !inventory {
            return Err(Error::SaveDependency { path: main_path });
        }

        let multiple_queues_enabled =
            main.get_set_bool(keys::ENABLE_MULTIPLE_QUEUES, defaults::ENABLE_MULTIPLE_QUEUES);

        let queue_descriptions: Vec<(Option<String>, Vec<String>)> = if multiple_queues_enabled {
            let described = main.get_set_string_list_map(keys::QUEUE_DESCRIPTIONS, &[]);
            if described.is_empty() {
                return Err(Error::EmptyQueueDescriptions {
                    key: keys::QUEUE_DESCRIPTIONS,
                    path: main_path,
                });
            }
            for (queue, arena_names) in &described {
                if arena_names.is_empty() {
                    return Err(Error::EmptyQueue {
                        queue: queue.clone(),
                        key: keys::QUEUE_DESCRIPTIONS,
                        path: main_path,
                    });
                }
            }
            described
                .into_iter()
                .map(|(queue, arena_names)| (Some(queue), arena_names))
                .collect()
        } else {
            let enabled = main.get_set_string_list(keys::ENABLED_ARENAS, defaults::ENABLED_ARENAS);
            if enabled.is_empty() {
                return Err(Error::NoArenasEnabled {
                    key: keys::ENABLED_ARENAS,
                    path: main_path,
                });
            }
            // Persist an empty queue-description section so operators see
            // the key when they come to enable multiple queues.
            main.get_set_string_list_map(keys::QUEUE_DESCRIPTIONS, &[]);
            vec![(None, enabled)]
        };

        let locale = main.get_set_string(keys::LOCALE, defaults::LOCALE);
        let arena_gamerules =
            main.get_set_string_map(keys::ARENA_GAMERULES, defaults::ARENA_GAMERULES);
        let respawn_players_immediately = main.get_set_bool(
            keys::RESPAWN_PLAYERS_IMMEDIATELY,
            defaults::RESPAWN_PLAYERS_IMMEDIATELY,
        );

        let score_enabled = main.get_set_bool(keys::score::ENABLED, defaults::score::ENABLED);
        let win_diff = main.get_set_int(keys::score::WIN_DIFF, defaults::score::WIN_DIFF);
        let death_diff = main.get_set_int(keys::score::DEATH_DIFF, defaults::score::DEATH_DIFF);
        let kill_diff = main.get_set_int(keys::score::KILL_DIFF, defaults::score::KILL_DIFF);
        let mut save_interval =
            main.get_set_long(keys::score::SAVE_INTERVAL, defaults::score::SAVE_INTERVAL);
        let use_sql = main.get_set_bool(keys::score::USE_SQL, defaults::score::USE_SQL);
        let sql_host = main.get_set_string(keys::score::SQL_HOST, defaults::score::SQL_HOST);
        let sql_port = main.get_set_int(keys::score::SQL_PORT, defaults::score::SQL_PORT);
        let sql_database =
            main.get_set_string(keys::score::SQL_DATABASE, defaults::score::SQL_DATABASE);
        let sql_username =
            main.get_set_string(keys::score::SQL_USERNAME, defaults::score::SQL_USERNAME);
        let sql_password =
            main.get_set_string(keys::score::SQL_PASSWORD, defaults::score::SQL_PASSWORD);
        let individual_rank_update_interval = main.get_set_long(
            keys::score::INDIVIDUAL_RANK_UPDATE_INTERVAL,
            defaults::score::INDIVIDUAL_RANK_UPDATE_INTERVAL,
        );

        // Nudge the save interval to a sensible value when the SQL toggle
        // changed but the interval was left at the old default. Operators
        // who really want the default interval with the other backend can
        // set any non-default value (31 or 301 works).
        if save_interval == defaults::score::SAVE_INTERVAL && use_sql {
            save_interval = defaults::score::SAVE_INTERVAL_WITH_SQL;
            main.overwrite(keys::score::SAVE_INTERVAL, save_interval);
            log::debug!("raised score save interval to {save_interval}s for the SQL backend");
        } else if save_interval == defaults::score::SAVE_INTERVAL_WITH_SQL && !use_sql {
            save_interval = defaults::score::SAVE_INTERVAL;
            main.overwrite(keys::score::SAVE_INTERVAL, save_interval);
            log::debug!("lowered score save interval to {save_interval}s for the flat-file backend");
        }

        let economy_enabled = main.get_set_bool(keys::economy::ENABLED, defaults::economy::ENABLED);
        let kill_reward = main.get_set_int(keys::economy::KILL_REWARD, defaults::economy::KILL_REWARD);
        let win_reward = main.get_set_int(keys::economy::WIN_REWARD, defaults::economy::WIN_REWARD);
        let reward_messages =
            main.get_set_bool(keys::economy::REWARD_MESSAGES, defaults::economy::REWARD_MESSAGES);

        let arena_distance_apart =
            main.get_set_int(keys::ARENA_DISTANCE_APART, defaults::ARENA_DISTANCE_APART);
        let arena_copying_block_size = main.get_set_int(
            keys::ARENA_COPYING_BLOCK_SIZE,
            defaults::ARENA_COPYING_BLOCK_SIZE,
        );

        let whitelist_enabled = main.get_set_bool(
            keys::command_whitelist::ENABLED,
            defaults::command_whitelist::ENABLED,
        );
        let treated_as_blacklist = main.get_set_bool(
            keys::command_whitelist::IS_BLACKLIST,
            defaults::command_whitelist::IS_BLACKLIST,
        );
        let whitelist_commands = main.get_set_string_list(
            keys::command_whitelist::COMMANDS,
            defaults::command_whitelist::COMMANDS,
        );
        let command_pattern = compile_command_pattern(&whitelist_commands)?;

        let join_sign_lines =
            main.get_set_sign_lines(keys::JOIN_SIGN_LINES, &defaults::JOIN_SIGN_LINES);

        let limit_start = main.get_set_bool(
            keys::limit_messages::START,
            defaults::limit_messages::START,
        );
        let limit_death = main.get_set_bool(
            keys::limit_messages::DEATH,
            defaults::limit_messages::DEATH,
        );
        let limit_end =
            main.get_set_bool(keys::limit_messages::END, defaults::limit_messages::END);
        let limit_start_timer = main.get_set_bool(
            keys::limit_messages::START_TIMER,
            defaults::limit_messages::START_TIMER,
        );

        let show_unavailable_kits = main.get_set_bool(
            keys::kit_gui::SHOW_UNAVAILABLE_KITS,
            defaults::kit_gui::SHOW_UNAVAILABLE_KITS,
        );
        let replace_kit_command = main.get_set_bool(
            keys::kit_gui::REPLACE_KIT_COMMAND,
            defaults::kit_gui::REPLACE_KIT_COMMAND,
        );
        let show_on_join =
            main.get_set_bool(keys::kit_gui::SHOW_ON_JOIN, defaults::kit_gui::SHOW_ON_JOIN);

        let till_start_after_max_players = main.get_set_long(
            keys::timing::TILL_START_AFTER_MAX_PLAYERS,
            defaults::timing::TILL_START_AFTER_MAX_PLAYERS,
        );
        let till_start_after_min_players = main.get_set_long(
            keys::timing::TILL_START_AFTER_MIN_PLAYERS,
            defaults::timing::TILL_START_AFTER_MIN_PLAYERS,
        );
        let before_start_to_copy_arena = main.get_set_long(
            keys::timing::BEFORE_START_TO_COPY_ARENA,
            defaults::timing::BEFORE_START_TO_COPY_ARENA,
        );
        let in_game_player_freeze = main.get_set_long(
            keys::timing::IN_GAME_PLAYER_FREEZE,
            defaults::timing::IN_GAME_PLAYER_FREEZE,
        );
        let start_timer_message_times = main.get_set_long_list(
            keys::timing::START_TIMER_MESSAGE_TIMES,
            defaults::timing::START_TIMER_MESSAGE_TIMES,
        );

        let disable_report = main.get_bool(keys::DISABLE_REPORT, defaults::DISABLE_REPORT);
        let recover_from_score_errors =
            !main.get_bool(keys::DISABLE_SCORE_RECOVERY, defaults::DISABLE_SCORE_RECOVERY);

        let multiverse_core =
            main.get_set_bool(keys::hooks::MULTIVERSE_CORE, defaults::hooks::MULTIVERSE_CORE);
        let worldedit = main.get_set_bool(keys::hooks::WORLDEDIT, defaults::hooks::WORLDEDIT);
        let multiinv_workaround = main.get_set_bool(
            keys::hooks::MULTIINV_WORKAROUND,
            defaults::hooks::MULTIINV_WORKAROUND,
        );
        let force_multiinv_workaround = main.get_set_bool(
            keys::hooks::FORCE_MULTIINV_WORKAROUND,
            defaults::hooks::FORCE_MULTIINV_WORKAROUND,
        );

        let developer_options = main.get_bool(keys::DEVELOPER_OPTIONS, defaults::DEVELOPER_OPTIONS);
        if developer_options {
            log::info!("enabling developer options");
        }

        main.remove_values(&[keys::deprecated::CHAT_PREFIX, keys::deprecated::PREFIX_CHAT]);
        main.save(MAIN_HEADER)?;

        let parent = self.load_parent_document()?;
        let arena_loader = ArenaLoader::new(&parent);
        let list_key = if multiple_queues_enabled {
            keys::QUEUE_DESCRIPTIONS
        } else {
            keys::ENABLED_ARENAS
        };

        let mut enabled_arenas: Vec<Arc<ArenaConfig>> = Vec::new();
        let mut loaded: HashMap<String, Arc<ArenaConfig>> = HashMap::new();
        let mut queues: HashMap<Option<String>, Vec<Arc<ArenaConfig>>> = HashMap::new();
        for (queue, arena_names) in queue_descriptions {
            let mut arenas = Vec::with_capacity(arena_names.len());
            for name in arena_names {
                let arena = if let Some(existing) = loaded.get(&name) {
                    Arc::clone(existing)
                } else {
                    let arena =
                        Arc::new(self.load_arena(&arena_loader, &arena_dir, &name, list_key)?);
                    loaded.insert(name, Arc::clone(&arena));
                    arena
                };
                enabled_arenas.push(Arc::clone(&arena));
                arenas.push(arena);
            }
            queues.insert(queue, arenas);
        }

        let settings = MainSettings {
            debug,
            report_statistics,
            skip_uuid_check,
            arena_order,
            message_prefix,
            locale,
            arena_gamerules,
            respawn_players_immediately,
            save: SaveSettings {
                inventory,
                experience,
                position_gamemode_health,
            },
            multiple_queues_enabled,
            score: ScoreSettings {
                enabled: score_enabled,
                win_diff,
                kill_diff,
                death_diff,
                save_interval,
                use_sql,
                sql_host,
                sql_port,
                sql_database,
                sql_username,
                sql_password,
                individual_rank_update_interval,
            },
            economy: EconomySettings {
                enabled: economy_enabled,
                kill_reward,
                win_reward,
                reward_messages,
            },
            arena_distance_apart,
            arena_copying_block_size,
            command_whitelist: CommandWhitelistSettings {
                enabled: whitelist_enabled,
                treated_as_blacklist,
                pattern: command_pattern,
            },
            join_sign_lines,
            limit_messages: MessageLimitSettings {
                start: limit_start,
                death: limit_death,
                end: limit_end,
                start_timer: limit_start_timer,
            },
            kit_gui: KitGuiSettings {
                show_unavailable_kits,
                replace_kit_command,
                show_on_join,
            },
            timers: TimerSettings {
                till_start_after_max_players,
                till_start_after_min_players,
                before_start_to_copy_arena,
                in_game_player_freeze,
                start_timer_message_times,
            },
            hooks: HookSettings {
                multiverse_core,
                worldedit,
                multiinv_workaround,
                force_multiinv_workaround,
            },
            disable_report,
            recover_from_score_errors,
            developer_options,
        };

        Ok(ConfigSnapshot {
            settings,
            enabled_arenas,
            queues: QueueMap::new(queues),
        })
    }

    fn load_parent_document(&self) -> Result<Mapping> {
        let path = self.data_dir.join(PARENT_FILE);
        if !path.exists() {
            fs::write(&path, resources::ARENA_PARENT).map_err(|source| Error::Save {
                path: path.clone(),
                source,
            })?;
        }
        let file = SettingsFile::load(&path)?;
        Ok(file.document().clone())
    }

    fn load_arena(
        &self,
        arena_loader: &ArenaLoader<'_>,
        arena_dir: &Path,
        name: &str,
        list_key: &'static str,
    ) -> Result<ArenaConfig> {
        let path = arena_dir.join(format!("{name}.yml"));
        if !path.exists() {
            let Some(template) = resources::bundled_arena(name) else {
                return Err(Error::MissingArenaTemplate {
                    arena: name.to_owned(),
                    key: list_key,
                    path,
                });
            };
            fs::write(&path, template).map_err(|source| Error::Save {
                path: path.clone(),
                source,
            })?;
        }
        let arena = arena_loader.load(path, name)?;
        // Write-back completes the file with inherited values; a failure
        // here leaves a usable in-memory arena, so it is not fatal.
        if let Err(err) = arena.save(&arena_header(name)) {
            log::error!("failed to save arena settings for '{name}': {err}");
        }
        Ok(arena)
    }
}

fn compile_command_pattern(commands: &[String]) -> Result<Option<Regex>> {
    if commands.is_empty() {
        return Ok(None);
    }
    let alternatives: Vec<String> = commands.iter().map(|cmd| regex::escape(cmd)).collect();
    let source = format!("(?i)^({})( .*|$)", alternatives.join("|"));
    let pattern = Regex::new(&source).map_err(|err| Error::Validation {
        field: keys::command_whitelist::COMMANDS.to_owned(),
        message: err.to_string(),
    })?;
    Ok(Some(pattern))
}

/// Owns the live configuration snapshot and the data directory it was
/// loaded from.
///
/// # Examples
///
/// ```no_run
/// use skywars_config::ConfigService;
///
/// let mut service = ConfigService::load("plugins/SkyWars").unwrap();
/// println!("locale: {}", service.settings().locale);
/// service.reload().unwrap();
/// ```
#[derive(Debug)]
pub struct ConfigService {
    data_dir: PathBuf,
    snapshot: ConfigSnapshot,
}

impl ConfigService {
    /// Performs the initial load against a data directory.
    ///
    /// # Errors
    ///
    /// Returns any error from the load pass; see [`ConfigLoader::load`].
    pub fn load(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        let snapshot = ConfigLoader::new(&data_dir).load()?;
        Ok(Self { data_dir, snapshot })
    }

    /// Re-runs the load pass and swaps in the new snapshot.
    ///
    /// The swap happens only after the whole pass succeeded. On error the
    /// previous snapshot stays in place, so callers keep serving the last
    /// good configuration.
    ///
    /// # Errors
    ///
    /// Returns any error from the load pass; see [`ConfigLoader::load`].
    pub fn reload(&mut self) -> Result<()> {
        let snapshot = ConfigLoader::new(&self.data_dir).load()?;
        self.snapshot = snapshot;
        Ok(())
    }

    /// The live snapshot.
    #[must_use]
    pub fn snapshot(&self) -> &ConfigSnapshot {
        &self.snapshot
    }

    /// The live main settings.
    #[must_use]
    pub fn settings(&self) -> &MainSettings {
        &self.snapshot.settings
    }

    /// The live snapshot's arena references, one per queue entry.
    #[must_use]
    pub fn enabled_arenas(&self) -> &[Arc<ArenaConfig>] {
        &self.snapshot.enabled_arenas
    }

    /// The live queue-to-arena assignment.
    #[must_use]
    pub fn queues(&self) -> &QueueMap {
        &self.snapshot.queues
    }

    /// The data directory this service loads from.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Writes an arena's merged document back to its file, logging rather
    /// than propagating failures.
    pub fn save_arena(&self, arena: &ArenaConfig) {
        if let Err(err) = arena.save(&arena_header(arena.name())) {
            log::error!("failed to save arena settings for '{}': {err}", arena.name());
        }
    }
}
