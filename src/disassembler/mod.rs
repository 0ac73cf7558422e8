//! Bytecode instruction metadata and the code-section cursor.
//!
//! This module describes the instruction set of the AIN virtual machine and provides a
//! cursor to walk the code section of a loaded container.
//!
//! # Key Types
//! - [`InstructionInfo`] - Static description of one opcode: operands, stack shape, flow
//! - [`InstructionSet`] - The opcode table configured for one container version
//! - [`Disassembler`] - Cursor decoding the code section one instruction at a time
//! - [`Syscall`] - Built-in system call reachable through `CALLSYS`
//!
//! Opcode shapes depend on the container version. Every [`crate::Ain`] owns its own
//! [`InstructionSet`], so containers of different versions can be disassembled side by
//! side.
//!
//! # Example
//! ```rust,no_run
//! use ainscope::{Ain, Disassembler};
//! use ainscope::disassembler::opcodes;
//!
//! let ain = Ain::from_file("System40.ain")?;
//! let mut dasm = Disassembler::new(&ain);
//! let mut calls = 0;
//! while !dasm.eof() && !dasm.instruction().is_sentinel() {
//!     if dasm.opcode() == Some(opcodes::CALLFUNC) {
//!         calls += 1;
//!     }
//!     dasm.next();
//! }
//! println!("{} direct calls", calls);
//! # Ok::<(), ainscope::Error>(())
//! ```

mod cursor;
mod format;
mod instruction;
pub mod opcodes;
mod syscalls;
mod table;

pub use cursor::{Disassembler, FUNCTION_STACK_DEPTH};
pub use instruction::{ArgType, FlowType, InstructionInfo, SENTINEL};
pub use syscalls::{syscall, syscall_by_name, Syscall, SYSCALLS};
pub use table::{InstructionSet, BASE_TABLE};
