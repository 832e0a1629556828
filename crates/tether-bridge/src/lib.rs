//! Object identity cache and arena lifetime bindings for refcounted hosts.
//!
//! This crate is the bridge between a reference-counted host object system
//! (modeled as [`std::rc`]) and bulk-freed arena memory from
//! `tether-arena`. It guarantees three things:
//!
//! 1. every record has at most one live host binding at any time
//!    (the identity cache),
//! 2. a binding never outlives the arena memory it points into, because
//!    every binding holds a counted reference to the owning arena's
//!    lifetime group,
//! 3. cache entries never go stale: entries are weak, and a binding's
//!    destructor removes its entry before the binding is reclaimed.
//!
//! The whole crate is single-threaded by contract, like the host runtime
//! it models; all sharing goes through `Rc` and `RefCell`, never locks.
//! A multi-threaded host would need a locked or concurrent table with the
//! same weak-entry discipline.
//!
//! This crate is one of two that may contain `unsafe` code (along with
//! `tether-arena`); the single `unsafe` block is the record dereference in
//! [`RecordBinding::record`], whose liveness argument is local.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod arena;
pub mod binding;
pub mod cache;
pub mod error;
pub mod state;
pub mod value;

pub use arena::ArenaBinding;
pub use binding::{get_or_create, RecordBinding};
pub use cache::ObjectCache;
pub use error::BridgeError;
pub use state::ModuleState;
pub use value::host_bytes;
