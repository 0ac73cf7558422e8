//! # ainscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types of the
//! ainscope library. Import this module to get quick access to the essential types for
//! reading containers and walking their bytecode.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all ainscope operations
pub use crate::Error;

/// The result type used throughout ainscope
pub use crate::Result;

/// Configuration for container loading
pub use crate::LoadOptions;

// ================================================================================================
// Main Entry Points
// ================================================================================================

/// The container
pub use crate::Ain;

/// Low-level file parsing utilities
pub use crate::{File, Parser};

// ================================================================================================
// Metadata
// ================================================================================================

/// Version gate
pub use crate::metadata::version::Version;

/// Section bookkeeping
pub use crate::metadata::sections::{Section, SectionMap, SectionTag};

/// Type descriptors and their rendering
pub use crate::metadata::types::{render_type, DataKind, TypeDescriptor, TypeNames};

/// Symbol table entries
pub use crate::metadata::symbols::{
    Enum, Function, FunctionFlags, FunctionType, GlobalInitval, HllArgument, HllFunction,
    InitValue, Interface, Library, ScenarioLabel, Structure, Switch, SwitchCase, SwitchCaseType,
    Variable, VariableKind,
};

// ================================================================================================
// Disassembly
// ================================================================================================

/// Cursor and opcode metadata
pub use crate::disassembler::{
    opcodes, ArgType, Disassembler, FlowType, InstructionInfo, InstructionSet, Syscall,
};

/// Enum member recovery
pub use crate::analysis::recover_enums;
