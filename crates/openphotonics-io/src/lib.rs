//! # OpenPhotonics I/O
//!
//! File format writers: a minimal GDS-II binary stream writer and the
//! JSON metadata emitter.

pub mod gds;
pub mod metadata;

pub use gds::{GdsError, GdsWriter};
pub use metadata::{write_metadata, InterfaceMetadata, MetadataError};
