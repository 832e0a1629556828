//! Arena-based record storage with fused lifetime groups.
//!
//! Provides address-stable record allocation for the Tether bridge.
//! Records are allocated into an arena and freed in bulk when the arena's
//! lifetime group dies; no record is ever freed individually. This crate
//! is one of two that may contain `unsafe` code (along with
//! `tether-bridge`), and every `unsafe` block carries a `SAFETY` comment.
//!
//! # Architecture
//!
//! ```text
//! RecordArena (allocation facade, unique handle)
//! ├── Rc<RefCell<RecordStore>> (boxed record slots + byte accounting)
//! └── Rc<FuseGroup> (lifetime group; strongly holds every member store)
//!     └── merged_into → Rc<FuseGroup> (forwarding link after a fuse)
//! ```
//!
//! # Address stability
//!
//! Each record lives in its own heap slot (`Box<dyn Any>`) appended to the
//! store. Growing the slot table moves the boxes, not their contents, so a
//! record's address is stable from allocation until its group is dropped.
//!
//! # Fused lifetimes
//!
//! [`RecordArena::fuse`] merges two arenas' lifetime groups. After a fuse,
//! holding any member arena alive keeps every record of the whole group
//! alive, and all of the group's memory is released together when the last
//! member handle drops.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod arena;
pub mod config;
pub mod error;
mod group;
pub mod record;
mod store;

pub use arena::RecordArena;
pub use config::ArenaConfig;
pub use error::ArenaError;
pub use record::RecordPtr;
