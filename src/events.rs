//! Event payloads carried to listener code when a player is placed into a
//! matchmaking queue.
//!
//! These are pure data carriers: matchmaking logic (out of scope here)
//! constructs them, notification listeners read them. Both payloads are
//! immutable after construction and validate their player reference up
//! front, so listeners never have to defend against a blank player id.

use serde::Serialize;

use crate::error::{Error, Result};

/// Unique identifier for players.
pub type PlayerId = String;

/// Payload delivered when a player joins (or is denied from) the primary
/// matchmaking queue.
///
/// # Examples
///
/// ```
/// use skywars_config::JoinQueueInfo;
///
/// let info = JoinQueueInfo::new("Notch", true, true).unwrap();
/// assert_eq!(info.player(), "Notch");
/// assert!(info.is_queue_full());
/// assert!(info.min_players_present());
///
/// assert!(JoinQueueInfo::new("", false, false).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JoinQueueInfo {
    player: PlayerId,
    queue_full: bool,
    min_players_present: bool,
}

impl JoinQueueInfo {
    /// Creates a new payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the player id is blank.
    pub fn new(
        player: impl Into<PlayerId>,
        queue_full: bool,
        min_players_present: bool,
    ) -> Result<Self> {
        let player = validated_player(player)?;
        Ok(Self {
            player,
            queue_full,
            min_players_present,
        })
    }

    /// The player who attempted to join.
    #[must_use]
    pub fn player(&self) -> &str {
        &self.player
    }

    /// Whether the queue was already full when the player joined.
    #[must_use]
    pub fn is_queue_full(&self) -> bool {
        self.queue_full
    }

    /// Whether enough players are present for a game to start.
    #[must_use]
    pub fn min_players_present(&self) -> bool {
        self.min_players_present
    }
}

/// Payload delivered when a player joins a named secondary queue.
///
/// The queue name is absent when the join targeted the single default
/// queue of a server running without multiple queues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JoinSecondaryQueueInfo {
    player: PlayerId,
    queue_name: Option<String>,
}

impl JoinSecondaryQueueInfo {
    /// Creates a new payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the player id is blank.
    pub fn new(player: impl Into<PlayerId>, queue_name: Option<String>) -> Result<Self> {
        let player = validated_player(player)?;
        Ok(Self { player, queue_name })
    }

    /// The player who attempted to join.
    #[must_use]
    pub fn player(&self) -> &str {
        &self.player
    }

    /// The queue that was joined, or `None` for the default queue.
    #[must_use]
    pub fn queue_name(&self) -> Option<&str> {
        self.queue_name.as_deref()
    }
}

fn validated_player(player: impl Into<PlayerId>) -> Result<PlayerId> {
    let player = player.into();
    if player.trim().is_empty() {
        return Err(Error::Validation {
            field: "player".to_string(),
            message: "player id cannot be blank".to_string(),
        });
    }
    Ok(player)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_queue_info_echoes_inputs() {
        let info = JoinQueueInfo::new("Alex", false, true).unwrap();
        assert_eq!(info.player(), "Alex");
        assert!(!info.is_queue_full());
        assert!(info.min_players_present());
    }

    #[test]
    fn test_join_queue_info_rejects_blank_player() {
        assert!(JoinQueueInfo::new("", false, false).is_err());
        assert!(JoinQueueInfo::new("   ", true, true).is_err());
    }

    #[test]
    fn test_secondary_queue_info_named_queue() {
        let info = JoinSecondaryQueueInfo::new("Alex", Some("solo".to_string())).unwrap();
        assert_eq!(info.player(), "Alex");
        assert_eq!(info.queue_name(), Some("solo"));
    }

    #[test]
    fn test_secondary_queue_info_default_queue() {
        let info = JoinSecondaryQueueInfo::new("Alex", None).unwrap();
        assert_eq!(info.queue_name(), None);
    }

    #[test]
    fn test_secondary_queue_info_rejects_blank_player() {
        let err = JoinSecondaryQueueInfo::new(" ", None).unwrap_err();
        assert!(format!("{err}").contains("player"));
    }
}
