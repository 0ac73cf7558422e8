//! Symbol table entries and their section readers.
//!
//! Every table of a container is a flat `Vec` addressed by integer index. The readers in
//! this module decode one section body each and take a [`ReadContext`] that carries the
//! container version, the text decoder and the type nesting bound, so they can be used
//! (and tested) in isolation.

mod function;
mod library;
mod structure;
mod switch;
mod variable;

pub use function::{read_function, read_function_types, Function, FunctionFlags, FunctionType};
pub use library::{read_libraries, HllArgument, HllFunction, Library, MAX_HLL_ARGUMENTS};
pub use structure::{mark_interfaces, read_structures, Interface, Structure};
pub use switch::{read_switches, Switch, SwitchCase, SwitchCaseType};
pub use variable::{read_globals, read_variables, render_variable, InitValue, Variable, VariableKind};

use crate::{
    file::parser::{decode_lossy, Parser, TextDecoder},
    metadata::{types::DataKind, version::Version},
    Result,
};

/// Default bound on nested type descriptors.
pub const DEFAULT_MAX_TYPE_DEPTH: usize = 16;

/// Parameters shared by all section readers.
#[derive(Clone, Copy)]
pub struct ReadContext {
    /// Container version
    pub version: Version,
    /// Text decoder for every string read
    pub decoder: TextDecoder,
    /// Bound on nested type descriptors
    pub max_type_depth: usize,
}

impl ReadContext {
    /// A context for `version` with the default decoder and depth bound.
    #[must_use]
    pub fn new(version: Version) -> Self {
        ReadContext {
            version,
            decoder: decode_lossy,
            max_type_depth: DEFAULT_MAX_TYPE_DEPTH,
        }
    }
}

/// A literal initial value of a global, from the `GSET` section.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalInitval {
    /// Index into the global table
    pub global_index: i32,
    /// Data kind the value was stored as
    pub data_type: DataKind,
    /// The value
    pub value: InitValue,
}

/// A named code address (`SLBL`, version 1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioLabel {
    /// Label name
    pub name: String,
    /// Code address
    pub address: i32,
}

/// An enum and its recovered member names.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Enum {
    /// Enum name
    pub name: String,
    /// Member names in declaration order; empty when recovery failed
    pub symbols: Vec<String>,
}

impl Enum {
    /// An enum without recovered members.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Enum {
            name: name.into(),
            symbols: Vec::new(),
        }
    }
}

/// Read a count followed by that many NUL-terminated strings.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] on truncation or [`crate::Error::Invalid`] for a
/// bad count.
pub fn read_strings(parser: &mut Parser<'_>, ctx: &ReadContext) -> Result<Vec<String>> {
    let count = parser.read_count()?;
    let mut strings = Vec::with_capacity(count);
    for _ in 0..count {
        strings.push(parser.read_cstring(ctx.decoder)?);
    }
    Ok(strings)
}

/// Read the body of an `MSG1` section: a count, an unknown word, then length-prefixed
/// messages whose bytes are obfuscated with `b[i] + i + 0x60`.
///
/// Returns the messages and the unknown word.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] on truncation or [`crate::Error::Invalid`] for bad
/// counts or lengths.
pub fn read_msg1_strings(parser: &mut Parser<'_>, ctx: &ReadContext) -> Result<(Vec<String>, i32)> {
    let count = parser.read_count()?;
    let unknown = parser.read_i32()?;
    let mut messages = Vec::with_capacity(count);
    for _ in 0..count {
        let len = parser.read_i32()?;
        let Ok(len) = usize::try_from(len) else {
            return Err(invalid_error!("Negative message length: {}", len));
        };
        let mut bytes = parser.read_bytes(len)?.to_vec();
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = byte.wrapping_sub(i as u8).wrapping_sub(0x60);
        }
        messages.push((ctx.decoder)(&bytes));
    }
    Ok((messages, unknown))
}

/// Read the body of a `GSET` section.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] on truncation or [`crate::Error::Invalid`] for bad
/// counts and unknown data types.
pub fn read_initvals(parser: &mut Parser<'_>, ctx: &ReadContext) -> Result<Vec<GlobalInitval>> {
    let count = parser.read_count()?;
    let mut initvals = Vec::with_capacity(count);
    for _ in 0..count {
        let global_index = parser.read_i32()?;
        let data_type = DataKind::from_i32(parser.read_i32()?)?;
        let value = if data_type == DataKind::String {
            InitValue::String(parser.read_cstring(ctx.decoder)?)
        } else {
            InitValue::from_bits(data_type, parser.read_i32()?)
        };
        initvals.push(GlobalInitval {
            global_index,
            data_type,
            value,
        });
    }
    Ok(initvals)
}

/// Read the body of an `SLBL` section.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] on truncation or [`crate::Error::Invalid`] for a
/// bad count.
pub fn read_scenario_labels(parser: &mut Parser<'_>, ctx: &ReadContext) -> Result<Vec<ScenarioLabel>> {
    let count = parser.read_count()?;
    let mut labels = Vec::with_capacity(count);
    for _ in 0..count {
        labels.push(ScenarioLabel {
            name: parser.read_cstring(ctx.decoder)?,
            address: parser.read_i32()?,
        });
    }
    Ok(labels)
}
