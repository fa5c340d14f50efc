//! End-to-end tests of the configuration load pipeline against real
//! temporary data directories.

use std::fs;

use serde_yaml::Value;
use tempfile::TempDir;

use skywars_config::config::loader::{ARENA_DIR, MAIN_FILE, PARENT_FILE};
use skywars_config::{ArenaOrder, ConfigService, Error};

fn write_main(dir: &TempDir, contents: &str) {
    fs::write(dir.path().join(MAIN_FILE), contents).unwrap();
}

fn write_arena(dir: &TempDir, name: &str, contents: &str) {
    let arena_dir = dir.path().join(ARENA_DIR);
    fs::create_dir_all(&arena_dir).unwrap();
    fs::write(arena_dir.join(format!("{name}.yml")), contents).unwrap();
}

fn parse_main(dir: &TempDir) -> Value {
    let contents = fs::read_to_string(dir.path().join(MAIN_FILE)).unwrap();
    serde_yaml::from_str(&contents).unwrap()
}

#[test]
fn test_first_load_creates_canonical_files() {
    let dir = TempDir::new().unwrap();
    let service = ConfigService::load(dir.path()).unwrap();

    assert!(dir.path().join(MAIN_FILE).is_file());
    assert!(dir.path().join(PARENT_FILE).is_file());
    assert!(dir
        .path()
        .join(ARENA_DIR)
        .join("skyblock-warriors.yml")
        .is_file());

    assert_eq!(service.enabled_arenas().len(), 1);
    assert_eq!(service.enabled_arenas()[0].name(), "skyblock-warriors");
    assert_eq!(service.queues().len(), 1);
    let default_queue = service.queues().arenas_for_queue(None).unwrap();
    assert_eq!(default_queue.len(), 1);

    let settings = service.settings();
    assert!(!settings.debug);
    assert_eq!(settings.arena_order, ArenaOrder::Random);
    assert_eq!(settings.locale, "en");
    assert_eq!(settings.score.save_interval, 30);
}

#[test]
fn test_first_load_persists_every_consulted_key() {
    let dir = TempDir::new().unwrap();
    ConfigService::load(dir.path()).unwrap();

    let document = parse_main(&dir);
    assert_eq!(document["config-version"], Value::from(2));
    assert_eq!(document["debug"], Value::from(false));
    assert_eq!(document["arena-order"], Value::from("RANDOM"));
    assert_eq!(document["score"]["save-interval"], Value::from(30));
    assert_eq!(document["hooks"]["worldedit"], Value::from(true));
    // Read-only toggles never appear unless the operator writes them.
    assert_eq!(document.get("skip-uuid-check"), None);
    assert_eq!(document.get("disable-report"), None);
    assert_eq!(document.get("developer-options"), None);
}

#[test]
fn test_main_file_starts_with_commented_header() {
    let dir = TempDir::new().unwrap();
    ConfigService::load(dir.path()).unwrap();

    let contents = fs::read_to_string(dir.path().join(MAIN_FILE)).unwrap();
    assert!(contents.starts_with('#'));
    assert!(contents.contains("main-config.yml"));
}

#[test]
fn test_newer_version_is_rejected() {
    let dir = TempDir::new().unwrap();
    write_main(&dir, "config-version: 3\n");

    let err = ConfigService::load(dir.path()).unwrap_err();
    match err {
        Error::UnsupportedVersion { found, max, .. } => {
            assert_eq!(found, 3);
            assert_eq!(max, 2);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_older_version_is_migrated_forward() {
    let dir = TempDir::new().unwrap();
    write_main(&dir, "config-version: 1\n");

    ConfigService::load(dir.path()).unwrap();
    let document = parse_main(&dir);
    assert_eq!(document["config-version"], Value::from(2));
}

#[test]
fn test_experience_save_requires_inventory_save() {
    let dir = TempDir::new().unwrap();
    write_main(&dir, "save-inventory: false\nsave-experience: true\n");

    let err = ConfigService::load(dir.path()).unwrap_err();
    assert!(matches!(err, Error::SaveDependency { .. }));
}

#[test]
fn test_position_save_requires_inventory_save() {
    let dir = TempDir::new().unwrap();
    write_main(
        &dir,
        "save-inventory: false\nsave-position-gamemode-health: true\n",
    );

    let err = ConfigService::load(dir.path()).unwrap_err();
    assert!(matches!(err, Error::SaveDependency { .. }));
}

#[test]
fn test_disabled_saves_follow_inventory_default() {
    let dir = TempDir::new().unwrap();
    write_main(&dir, "save-inventory: false\n");

    let service = ConfigService::load(dir.path()).unwrap();
    let save = service.settings().save;
    assert!(!save.inventory);
    assert!(!save.experience);
    assert!(!save.position_gamemode_health);
}

#[test]
fn test_empty_enabled_arenas_is_rejected() {
    let dir = TempDir::new().unwrap();
    write_main(&dir, "enabled-arenas: []\n");

    let err = ConfigService::load(dir.path()).unwrap_err();
    assert!(matches!(err, Error::NoArenasEnabled { .. }));
}

#[test]
fn test_multiple_queues_require_descriptions() {
    let dir = TempDir::new().unwrap();
    write_main(&dir, "enable-multiple-queues: true\nqueue-descriptions: {}\n");

    let err = ConfigService::load(dir.path()).unwrap_err();
    assert!(matches!(err, Error::EmptyQueueDescriptions { .. }));
}

#[test]
fn test_queue_without_arenas_is_rejected() {
    let dir = TempDir::new().unwrap();
    write_main(
        &dir,
        "enable-multiple-queues: true\nqueue-descriptions:\n  solo: []\n",
    );

    let err = ConfigService::load(dir.path()).unwrap_err();
    match err {
        Error::EmptyQueue { queue, .. } => assert_eq!(queue, "solo"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_single_queue_lists_arenas_in_configured_order() {
    let dir = TempDir::new().unwrap();
    write_main(&dir, "enabled-arenas:\n- sky1\n- sky2\n");
    write_arena(&dir, "sky1", "min-players: 2\nmax-players: 6\n");
    write_arena(&dir, "sky2", "min-players: 4\nmax-players: 12\n");

    let service = ConfigService::load(dir.path()).unwrap();
    let names: Vec<&str> = service
        .enabled_arenas()
        .iter()
        .map(|arena| arena.name())
        .collect();
    assert_eq!(names, vec!["sky1", "sky2"]);

    let default_queue = service.queues().arenas_for_queue(None).unwrap();
    assert_eq!(default_queue.len(), 2);
    assert_eq!(default_queue[1].max_players(), 12);
}

#[test]
fn test_multiple_queues_share_arena_configs() {
    let dir = TempDir::new().unwrap();
    write_main(
        &dir,
        "enable-multiple-queues: true\nqueue-descriptions:\n  solo:\n  - sky1\n  team:\n  - sky1\n  - sky2\n",
    );
    write_arena(&dir, "sky1", "min-players: 2\nmax-players: 6\n");
    write_arena(&dir, "sky2", "min-players: 4\nmax-players: 12\n");

    let service = ConfigService::load(dir.path()).unwrap();
    assert_eq!(service.queues().len(), 2);
    // sky1 is referenced by both queues: two entries, one loaded document.
    assert_eq!(service.enabled_arenas().len(), 3);
    let solo = service.queues().arenas_for_queue(Some("solo")).unwrap();
    let team = service.queues().arenas_for_queue(Some("team")).unwrap();
    assert!(std::sync::Arc::ptr_eq(&solo[0], &team[0]));
    assert!(service.queues().arenas_for_queue(None).is_none());
}

#[test]
fn test_queues_load_in_document_order() {
    let dir = TempDir::new().unwrap();
    write_main(
        &dir,
        "enable-multiple-queues: true\nqueue-descriptions:\n  zeta:\n  - sky2\n  alpha:\n  - sky1\n",
    );
    write_arena(&dir, "sky1", "min-players: 2\nmax-players: 6\n");
    write_arena(&dir, "sky2", "min-players: 4\nmax-players: 12\n");

    let service = ConfigService::load(dir.path()).unwrap();
    let names: Vec<&str> = service
        .enabled_arenas()
        .iter()
        .map(|arena| arena.name())
        .collect();
    // zeta is written first, so its arena loads first.
    assert_eq!(names, vec!["sky2", "sky1"]);
}

#[test]
fn test_unknown_queue_lookup_is_none() {
    let dir = TempDir::new().unwrap();
    let service = ConfigService::load(dir.path()).unwrap();
    assert!(service.queues().arenas_for_queue(Some("ranked")).is_none());
}

#[test]
fn test_missing_arena_template_names_the_arena() {
    let dir = TempDir::new().unwrap();
    write_main(&dir, "enabled-arenas:\n- custom-map\n");

    let err = ConfigService::load(dir.path()).unwrap_err();
    match err {
        Error::MissingArenaTemplate { arena, key, .. } => {
            assert_eq!(arena, "custom-map");
            assert_eq!(key, "enabled-arenas");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_arena_inherits_unset_keys_from_parent() {
    let dir = TempDir::new().unwrap();
    write_main(&dir, "enabled-arenas:\n- sky1\n");
    write_arena(&dir, "sky1", "min-players: 2\n");

    let service = ConfigService::load(dir.path()).unwrap();
    let arena = &service.enabled_arenas()[0];
    assert_eq!(arena.min_players(), 2);
    // max-players comes from the extracted arena-parent.yml.
    assert_eq!(arena.max_players(), 8);

    // The write-back completes the file on disk with inherited values.
    let contents =
        fs::read_to_string(dir.path().join(ARENA_DIR).join("sky1.yml")).unwrap();
    let document: Value = serde_yaml::from_str(&contents).unwrap();
    assert_eq!(document["max-players"], Value::from(8));
}

#[test]
fn test_invalid_arena_player_counts_are_rejected() {
    let dir = TempDir::new().unwrap();
    write_main(&dir, "enabled-arenas:\n- sky1\n");
    write_arena(&dir, "sky1", "min-players: 10\nmax-players: 4\n");

    let err = ConfigService::load(dir.path()).unwrap_err();
    assert!(matches!(err, Error::Arena { .. }));
}

#[test]
fn test_sql_toggle_raises_default_save_interval() {
    let dir = TempDir::new().unwrap();
    write_main(&dir, "score:\n  use-sql: true\n");

    let service = ConfigService::load(dir.path()).unwrap();
    assert_eq!(service.settings().score.save_interval, 300);
    let document = parse_main(&dir);
    assert_eq!(document["score"]["save-interval"], Value::from(300));
}

#[test]
fn test_disabling_sql_lowers_default_save_interval() {
    let dir = TempDir::new().unwrap();
    write_main(&dir, "score:\n  use-sql: false\n  save-interval: 300\n");

    let service = ConfigService::load(dir.path()).unwrap();
    assert_eq!(service.settings().score.save_interval, 30);
    let document = parse_main(&dir);
    assert_eq!(document["score"]["save-interval"], Value::from(30));
}

#[test]
fn test_non_default_save_interval_is_left_alone() {
    let dir = TempDir::new().unwrap();
    write_main(&dir, "score:\n  use-sql: true\n  save-interval: 31\n");

    let service = ConfigService::load(dir.path()).unwrap();
    assert_eq!(service.settings().score.save_interval, 31);
}

#[test]
fn test_command_whitelist_pattern_from_config() {
    let dir = TempDir::new().unwrap();
    write_main(
        &dir,
        "command-whitelist:\n  commands:\n  - kit\n  - vote\n",
    );

    let service = ConfigService::load(dir.path()).unwrap();
    let whitelist = &service.settings().command_whitelist;
    assert!(whitelist.matches("kit"));
    assert!(whitelist.matches("kit diamond"));
    assert!(whitelist.matches("KIT"));
    assert!(whitelist.matches("vote"));
    assert!(!whitelist.matches("kits"));
    assert!(!whitelist.matches("give kit"));
}

#[test]
fn test_empty_command_list_disables_matching() {
    let dir = TempDir::new().unwrap();
    write_main(&dir, "command-whitelist:\n  commands: []\n");

    let service = ConfigService::load(dir.path()).unwrap();
    assert!(service.settings().command_whitelist.pattern.is_none());
}

#[test]
fn test_invalid_arena_order_lists_valid_values() {
    let dir = TempDir::new().unwrap();
    write_main(&dir, "arena-order: SHUFFLED\n");

    let err = ConfigService::load(dir.path()).unwrap_err();
    let display = format!("{err}");
    assert!(display.contains("SHUFFLED"));
    assert!(display.contains("ORDERED"));
    assert!(display.contains("RANDOM"));
}

#[test]
fn test_arena_order_parsed_case_insensitively() {
    let dir = TempDir::new().unwrap();
    write_main(&dir, "arena-order: ordered\n");

    let service = ConfigService::load(dir.path()).unwrap();
    assert_eq!(service.settings().arena_order, ArenaOrder::Ordered);
}

#[test]
fn test_message_prefix_is_translated_and_persisted() {
    let dir = TempDir::new().unwrap();
    write_main(&dir, "message-prefix: '&8[&cSky&8] '\n");

    let service = ConfigService::load(dir.path()).unwrap();
    assert_eq!(service.settings().message_prefix, "\u{a7}8[\u{a7}cSky\u{a7}8] ");

    let document = parse_main(&dir);
    assert_eq!(
        document["message-prefix"],
        Value::from("\u{a7}8[\u{a7}cSky\u{a7}8] ")
    );
}

#[test]
fn test_sign_lines_padded_to_four() {
    let dir = TempDir::new().unwrap();
    write_main(&dir, "join-sign-lines:\n- first\n- second\n");

    let service = ConfigService::load(dir.path()).unwrap();
    let lines = &service.settings().join_sign_lines;
    assert_eq!(lines[0], "first");
    assert_eq!(lines[1], "second");
    assert!(!lines[2].is_empty());
    assert!(!lines[3].is_empty());
}

#[test]
fn test_deprecated_keys_removed_on_load() {
    let dir = TempDir::new().unwrap();
    write_main(&dir, "chat-prefix: '[Sky]'\nprefix-chat: true\n");

    ConfigService::load(dir.path()).unwrap();
    let document = parse_main(&dir);
    assert_eq!(document.get("chat-prefix"), None);
    assert_eq!(document.get("prefix-chat"), None);
}

#[test]
fn test_score_recovery_negates_disable_toggle() {
    let dir = TempDir::new().unwrap();
    write_main(&dir, "disable-score-recovery: true\n");

    let service = ConfigService::load(dir.path()).unwrap();
    assert!(!service.settings().recover_from_score_errors);

    let defaults_dir = TempDir::new().unwrap();
    let defaults_service = ConfigService::load(defaults_dir.path()).unwrap();
    assert!(defaults_service.settings().recover_from_score_errors);
}

#[test]
fn test_unknown_operator_keys_survive_resave() {
    let dir = TempDir::new().unwrap();
    write_main(&dir, "operator-note: keep me\n");

    ConfigService::load(dir.path()).unwrap();
    let document = parse_main(&dir);
    assert_eq!(document["operator-note"], Value::from("keep me"));
}

#[test]
fn test_failed_reload_preserves_previous_snapshot() {
    let dir = TempDir::new().unwrap();
    write_main(&dir, "locale: fr\n");
    let mut service = ConfigService::load(dir.path()).unwrap();
    assert_eq!(service.settings().locale, "fr");

    write_main(&dir, "locale: [unclosed\n");
    let err = service.reload().unwrap_err();
    assert!(err.is_format());
    assert_eq!(service.settings().locale, "fr");
    assert_eq!(service.enabled_arenas().len(), 1);
}

#[test]
fn test_successful_reload_swaps_snapshot() {
    let dir = TempDir::new().unwrap();
    let mut service = ConfigService::load(dir.path()).unwrap();
    assert_eq!(service.settings().locale, "en");

    // Edit the saved canonical file the way an operator would.
    let contents = fs::read_to_string(dir.path().join(MAIN_FILE)).unwrap();
    fs::write(
        dir.path().join(MAIN_FILE),
        contents.replace("locale: en", "locale: de"),
    )
    .unwrap();

    service.reload().unwrap();
    assert_eq!(service.settings().locale, "de");
}

#[test]
fn test_arena_dir_path_conflict_is_rejected() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(ARENA_DIR), "not a directory").unwrap();

    let err = ConfigService::load(dir.path()).unwrap_err();
    assert!(matches!(err, Error::NotADirectory { .. }));
}

#[cfg(unix)]
#[test]
fn test_arena_save_failure_is_not_fatal() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    write_main(&dir, "enabled-arenas:\n- sky1\n");
    write_arena(&dir, "sky1", "min-players: 2\nmax-players: 6\n");

    let arena_file = dir.path().join(ARENA_DIR).join("sky1.yml");
    let mut perms = fs::metadata(&arena_file).unwrap().permissions();
    perms.set_mode(0o444);
    fs::set_permissions(&arena_file, perms).unwrap();

    // The write-back fails but the load still succeeds.
    let service = ConfigService::load(dir.path()).unwrap();
    assert_eq!(service.enabled_arenas()[0].min_players(), 2);
}

fn assert_send_sync<T: Send + Sync>(_value: &T) {}

#[test]
fn test_snapshot_is_shareable_across_threads() {
    let dir = TempDir::new().unwrap();
    let service = ConfigService::load(dir.path()).unwrap();
    assert_send_sync(service.snapshot());
}
