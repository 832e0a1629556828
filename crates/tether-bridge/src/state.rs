//! Per-module bridge state.

use crate::cache::ObjectCache;

/// The bridge's module-wide state: the identity cache handle.
///
/// The original design kept this in an ambient per-module global; here it
/// is an explicit context object, created once at module initialization
/// and passed by reference to every operation that needs the cache.
///
/// Teardown is just `drop`. Outstanding bindings keep the underlying
/// table alive through their own cache handles, so dropping the state
/// while bindings are still live is safe: their destructors deregister
/// against the shared table as usual.
pub struct ModuleState {
    cache: ObjectCache,
}

impl ModuleState {
    /// Create the module state with an empty identity cache.
    pub fn new() -> Self {
        Self {
            cache: ObjectCache::new(),
        }
    }

    /// The identity cache handle.
    pub fn cache(&self) -> &ObjectCache {
        &self.cache
    }
}

impl Default for ModuleState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;
    use tether_core::RecordAddr;

    #[test]
    fn fresh_state_has_an_empty_cache() {
        let state = ModuleState::new();
        assert!(state.cache().is_empty());
    }

    #[test]
    fn cache_handle_outlives_the_state() {
        let state = ModuleState::new();
        let handle = state.cache().clone();
        let wrapper = Rc::new(7u32);
        handle.add(RecordAddr(1), &wrapper);
        drop(state);
        // The shared table is still reachable through the clone.
        assert!(handle.contains(RecordAddr(1)));
        handle.delete(RecordAddr(1));
    }
}
