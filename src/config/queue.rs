//! Queue-to-arena assignment.
//!
//! In single-queue mode there is exactly one unnamed queue holding every
//! enabled arena. With multiple queues enabled, each named queue maps to its
//! own arena list. Arena configurations are shared behind [`Arc`] so the
//! same arena can appear in several queues without duplicating its document.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::arena::ArenaConfig;

/// Maps queue names to the arenas they cycle through.
///
/// The `None` key is the unnamed default queue of single-queue mode.
#[derive(Debug, Clone, Default)]
pub struct QueueMap {
    queues: HashMap<Option<String>, Vec<Arc<ArenaConfig>>>,
}

impl QueueMap {
    pub(crate) fn new(queues: HashMap<Option<String>, Vec<Arc<ArenaConfig>>>) -> Self {
        Self { queues }
    }

    /// The arenas assigned to a queue, or `None` when no such queue is
    /// configured. Looking up an unknown queue is not an error; callers
    /// decide how to respond to a player naming one.
    #[must_use]
    pub fn arenas_for_queue(&self, name: Option<&str>) -> Option<&[Arc<ArenaConfig>]> {
        self.queues
            .get(&name.map(str::to_owned))
            .map(Vec::as_slice)
    }

    /// Iterates over the configured queue names. The unnamed default queue
    /// appears as `None`.
    pub fn queue_names(&self) -> impl Iterator<Item = Option<&str>> {
        self.queues.keys().map(Option::as_deref)
    }

    /// Number of configured queues.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queues.len()
    }

    /// Whether no queues are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queues.is_empty()
    }
}
