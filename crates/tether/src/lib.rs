//! Tether: an identity-preserving bridge between a reference-counted
//! host object system and arena-allocated native records.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Tether sub-crates. For most users, adding `tether` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use std::rc::Rc;
//! use tether::prelude::*;
//!
//! // Records are plain immutable data, opaque to the bridge.
//! struct MessageDef {
//!     name: &'static str,
//! }
//!
//! // Module init: one context object, passed everywhere by reference.
//! let state = ModuleState::new();
//!
//! // The host binding exclusively owns a fresh native arena.
//! let pool = ArenaBinding::new();
//! let record = pool.native().alloc(MessageDef { name: "Envelope" }).unwrap();
//!
//! // Repeated binds yield the identical host object, not a copy.
//! let first = RecordBinding::bind(&state, record, &pool).unwrap();
//! let second = RecordBinding::bind(&state, record, &pool).unwrap();
//! assert!(Rc::ptr_eq(&first, &second));
//! assert_eq!(first.record().name, "Envelope");
//!
//! // Bindings keep the arena alive; drop them all and the pool to
//! // release every record in one bulk operation.
//! drop(first);
//! drop(second);
//! drop(pool);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`arena`] | `tether-arena` | Record storage, fusion groups, `RecordPtr` |
//! | [`types`] | `tether-core` | `RecordAddr`, `ArenaId` |
//! | [`bridge`] | `tether-bridge` | Identity cache, bindings, module state |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Record arenas, fusion groups, and record pointers (`tether-arena`).
pub use tether_arena as arena;

/// Core identifier types (`tether-core`).
pub use tether_core as types;

/// Identity cache, host bindings, and module state (`tether-bridge`).
pub use tether_bridge as bridge;

/// Common imports for typical Tether usage.
///
/// ```rust
/// use tether::prelude::*;
/// ```
pub mod prelude {
    // Arena
    pub use tether_arena::{ArenaConfig, ArenaError, RecordArena, RecordPtr};

    // Core IDs
    pub use tether_core::{ArenaId, RecordAddr};

    // Bridge
    pub use tether_bridge::{
        get_or_create, host_bytes, ArenaBinding, BridgeError, ModuleState, ObjectCache,
        RecordBinding,
    };
}
