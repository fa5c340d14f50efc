//! Bundled default resources.
//!
//! When an enabled arena has no settings file on disk, the loader extracts
//! the matching bundled template to the expected relative path. An enabled
//! arena with neither a file nor a bundled template is a hard configuration
//! error.

/// The parent template every arena inherits unset keys from.
pub const ARENA_PARENT: &str = include_str!("../resources/arena-parent.yml");

const SKYBLOCK_WARRIORS: &str = include_str!("../resources/skyblock-warriors.yml");

/// Looks up the bundled template for an arena name.
///
/// # Examples
///
/// ```
/// use skywars_config::resources::bundled_arena;
///
/// assert!(bundled_arena("skyblock-warriors").is_some());
/// assert!(bundled_arena("custom-arena").is_none());
/// ```
#[must_use]
pub fn bundled_arena(name: &str) -> Option<&'static str> {
    match name {
        "skyblock-warriors" => Some(SKYBLOCK_WARRIORS),
        _ => None,
    }
}
