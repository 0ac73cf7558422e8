//! Analyses built on top of the disassembler.
//!
//! These passes only use the public [`crate::Disassembler`] interface and never fail a
//! load: when they cannot reach a result they log a warning and leave the affected table
//! untouched or empty.
//!
//! - [`enums`] - Recover enum member names from their stringifier functions

pub mod enums;

pub use enums::{enum_symbols, recover_enums, stringifier_name};
