//! Core identifier types for the Tether arena bridge.
//!
//! This is the leaf crate with zero dependencies. It defines the
//! strongly-typed identifiers shared by the arena and bridge crates:
//! record addresses and arena instance IDs.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod id;

pub use id::{ArenaId, RecordAddr};
