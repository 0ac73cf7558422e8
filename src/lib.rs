// Copyright 2026 The ainscope Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
//#![deny(unsafe_code)]
// - 'file/physical.rs' uses mmap to map a file into memory

//! # ainscope
//!
//! A reader for AIN bytecode containers, the compiled script format of the System 4
//! visual novel engine. `ainscope` loads a container in any of its format revisions
//! (major versions 1 to 14), rebuilds one consistent symbol model from it, and provides a
//! cursor to walk its bytecode.
//!
//! ## Features
//!
//! - **Every envelope** - Raw, zlib-compressed (`AI2`) and XOR-encrypted containers
//! - **Every revision** - Version-gated section readers for majors 1 to 14, including 14.0
//! - **Symbol tables** - Functions, globals, structures, libraries, enums, switches, strings
//!   with name indices and `name#N` overload selection
//! - **Disassembly** - A per-container opcode table and a cursor tracking function nesting
//! - **Enum recovery** - Member names reconstructed from compiler-generated stringifiers
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ainscope::prelude::*;
//!
//! let ain = Ain::from_file("System40.ain")?;
//! println!("AIN v{} with {} functions", ain.version(), ain.functions.len());
//!
//! for e in &ain.enums {
//!     println!("enum {} {{ {} }}", e.name, e.symbols.join(", "));
//! }
//! # Ok::<(), ainscope::Error>(())
//! ```
//!
//! ### Custom text decoding
//!
//! Strings are stored in the game's native encoding (usually Shift-JIS). The decoder used
//! for every string is injected through [`LoadOptions`]:
//!
//! ```rust,no_run
//! use ainscope::{Ain, LoadOptions};
//!
//! fn decode(bytes: &[u8]) -> String {
//!     bytes.iter().map(|&b| b as char).collect()
//! }
//!
//! let ain = Ain::from_file_with("System40.ain", LoadOptions { decoder: decode, ..LoadOptions::default() })?;
//! # Ok::<(), ainscope::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`file`] - Input backends, envelope detection and the byte cursor
//! - [`metadata`] - Section readers, symbol tables, type descriptors and the [`Ain`] container
//! - [`disassembler`] - Opcode metadata and the code cursor
//! - [`analysis`] - Passes built on the disassembler, such as enum recovery
//! - [`Error`] and [`Result`] - Error handling

#[macro_use]
pub(crate) mod error;

/// Input backends, envelope handling and the bounds-checked byte cursor.
pub mod file;

/// Shared functionality which is used in unit-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types.
///
/// # Example
///
/// ```rust,no_run
/// use ainscope::prelude::*;
///
/// let ain = Ain::from_file("System40.ain")?;
/// let mut dasm = Disassembler::new(&ain);
/// println!("{}", dasm.format());
/// # Ok::<(), ainscope::Error>(())
/// ```
pub mod prelude;

/// Opcode metadata, system calls and the code-section cursor.
pub mod disassembler;

/// Container model, section readers and symbol tables.
pub mod metadata;

/// Passes that interpret small parts of the bytecode.
pub mod analysis;

/// `ainscope` Result type
///
/// A type alias for `std::result::Result<T, Error>` where the error type is always
/// [`Error`]. Used consistently throughout the crate for all fallible operations.
pub type Result<T> = std::result::Result<T, Error>;

/// `ainscope` Error type
///
/// Loading is fail-fast and reports one of `FileError`, `UnrecognizedFormat` or `Invalid`.
/// See [`Error`] for the full taxonomy.
pub use error::Error;

/// Main entry point: a loaded or freshly created container.
pub use metadata::ain::Ain;

/// Loader configuration.
pub use metadata::config::LoadOptions;

/// Code-section cursor.
pub use disassembler::Disassembler;

/// Low-level file access and parsing.
pub use file::{parser::Parser, File};
