//! Container parsing and representation.
//!
//! This module turns a plain container image into an [`ain::Ain`]: a set of flat symbol
//! tables addressed by index, name indices over them, and the section map recording where
//! each section was found.
//!
//! # Key Components
//!
//! - [`ain`] - The container, its queries and append operations
//! - [`version`] - The `(major, minor)` version gate threaded through every reader
//! - [`types`] - Data kinds, recursive type descriptors and their rendering
//! - [`symbols`] - Table entries and the per-section readers
//! - [`sections`] - Section tags and the section map
//! - [`index`] - Name to index lookups
//! - [`config`] - Loader options
//!
//! # Examples
//!
//! ```rust,no_run
//! use ainscope::Ain;
//!
//! let ain = Ain::from_file("System40.ain")?;
//! for (tag, section) in ain.sections().iter() {
//!     println!("{} at {:#x} ({} bytes)", tag.name(), section.offset, section.size);
//! }
//! for structure in &ain.structures {
//!     println!("struct {} ({} members)", structure.name, structure.members.len());
//! }
//! # Ok::<(), ainscope::Error>(())
//! ```

/// The in-memory container
pub mod ain;
/// Loader configuration
pub mod config;
/// Name lookup indices
pub mod index;
/// The tag-dispatched container parser
pub(crate) mod loader;
/// Section tags and bookkeeping
pub mod sections;
/// Symbol table entries and their readers
pub mod symbols;
/// Data kinds and type descriptors
pub mod types;
/// The container version gate
pub mod version;
