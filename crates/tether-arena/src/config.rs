//! Arena configuration parameters.

/// Configuration for a record arena.
///
/// Immutable after construction.
#[derive(Clone, Debug)]
pub struct ArenaConfig {
    /// Maximum number of bytes of record payload this arena may hold.
    ///
    /// Default: [`ArenaConfig::UNLIMITED`]. Allocations that would push
    /// the arena past this limit fail with
    /// [`ArenaError::CapacityExceeded`](crate::ArenaError::CapacityExceeded).
    pub memory_limit: usize,
}

impl ArenaConfig {
    /// Sentinel for an effectively unbounded arena.
    pub const UNLIMITED: usize = usize::MAX;

    /// Create a config with no memory limit.
    pub fn new() -> Self {
        Self {
            memory_limit: Self::UNLIMITED,
        }
    }

    /// Create a config that caps record payload at `bytes`.
    pub fn with_memory_limit(bytes: usize) -> Self {
        Self {
            memory_limit: bytes,
        }
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new()
    }
}
