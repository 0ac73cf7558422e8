//! A cursor over the code section of a container.
//!
//! [`Disassembler`] sits on one byte address and keeps the descriptor of the instruction at
//! that address decoded. Moving it with [`Disassembler::jump`] or [`Disassembler::next`]
//! redecodes; [`Disassembler::peek`] looks one instruction ahead without moving.
//!
//! The cursor also follows `FUNC` / `ENDFUNC` markers to know which function the current
//! address belongs to. Enclosing functions are remembered in a ring of
//! [`FUNCTION_STACK_DEPTH`] slots; nesting deeper than that drops the outermost saved
//! function, so after unwinding past it [`Disassembler::current_function`] reports `None`.
//!
//! Nothing that can be found in the code section aborts decoding. An opcode outside the
//! table, one whose layout is unknown, or a word cut off by the end of the section decodes
//! as [`SENTINEL`], whose width is 0. Callers walking the code must treat an address that
//! does not change across [`Disassembler::next`] as a stall.
//!
//! # Examples
//!
//! ```rust,no_run
//! use ainscope::{Ain, Disassembler};
//!
//! let ain = Ain::from_file("System40.ain")?;
//! let mut dasm = Disassembler::new(&ain);
//! while !dasm.eof() {
//!     let before = dasm.address();
//!     println!("{:08x}: {}", before, dasm.format());
//!     dasm.next();
//!     if dasm.address() == before {
//!         break;
//!     }
//! }
//! # Ok::<(), ainscope::Error>(())
//! ```

use crate::{
    disassembler::{
        instruction::{ArgType, InstructionInfo, SENTINEL},
        opcodes::{self, OPCODE_MASK},
    },
    file::io::read_le,
    metadata::ain::Ain,
};

/// Number of enclosing functions the cursor remembers.
pub const FUNCTION_STACK_DEPTH: usize = 16;

/// Cursor over the bytecode of one container.
#[derive(Debug, Clone)]
pub struct Disassembler<'a> {
    ain: &'a Ain,
    address: usize,
    instruction: &'a InstructionInfo,
    function: Option<usize>,
    stack: [Option<usize>; FUNCTION_STACK_DEPTH],
}

impl<'a> Disassembler<'a> {
    /// Cursor at address 0.
    #[must_use]
    pub fn new(ain: &'a Ain) -> Self {
        let mut dasm = Disassembler {
            ain,
            address: 0,
            instruction: &SENTINEL,
            function: None,
            stack: [None; FUNCTION_STACK_DEPTH],
        };
        dasm.decode();
        dasm
    }

    /// Cursor at `address`.
    #[must_use]
    pub fn at(ain: &'a Ain, address: usize) -> Self {
        let mut dasm = Disassembler::new(ain);
        dasm.jump(address);
        dasm
    }

    /// Move to `address` and decode the instruction there.
    pub fn jump(&mut self, address: usize) {
        self.address = address;
        self.decode();
    }

    /// Advance past the current instruction and decode the next one.
    ///
    /// Has no effect on the address while the cursor sits on [`SENTINEL`].
    pub fn next(&mut self) {
        self.address += self.instruction.width();
        self.decode();
    }

    /// Opcode of the instruction following the current one, without moving.
    #[must_use]
    pub fn peek(&self) -> Option<u16> {
        let next = self.address + self.instruction.width();
        self.word_at(next).map(|word| word & OPCODE_MASK)
    }

    /// `true` once the address is at or past the end of the code section.
    #[must_use]
    pub fn eof(&self) -> bool {
        self.address >= self.ain.code.len()
    }

    /// Current byte address.
    #[must_use]
    pub fn address(&self) -> usize {
        self.address
    }

    /// Descriptor of the current instruction; [`SENTINEL`] when there is none.
    #[must_use]
    pub fn instruction(&self) -> &'a InstructionInfo {
        self.instruction
    }

    /// Opcode of the current instruction, `None` on [`SENTINEL`].
    #[must_use]
    pub fn opcode(&self) -> Option<u16> {
        (!self.instruction.is_sentinel()).then_some(self.instruction.opcode)
    }

    /// Number of immediate operands of the current instruction.
    #[must_use]
    pub fn nr_args(&self) -> usize {
        self.instruction.nr_args()
    }

    /// Value of immediate operand `n`, if the instruction has one and it lies inside the
    /// code section.
    #[must_use]
    pub fn arg(&self, n: usize) -> Option<i32> {
        if n >= self.instruction.nr_args() {
            return None;
        }
        let offset = self.address + 2 + 4 * n;
        let bytes = self.ain.code.get(offset..offset + 4)?;
        read_le::<i32>(bytes).ok()
    }

    /// Type of immediate operand `n`.
    #[must_use]
    pub fn arg_type(&self, n: usize) -> Option<ArgType> {
        self.instruction.args.get(n).copied()
    }

    /// Function the current address belongs to, as tracked through `FUNC` / `ENDFUNC`.
    #[must_use]
    pub fn current_function(&self) -> Option<usize> {
        self.function
    }

    /// The container being disassembled.
    #[must_use]
    pub fn ain(&self) -> &'a Ain {
        self.ain
    }

    fn word_at(&self, address: usize) -> Option<u16> {
        let bytes = self.ain.code.get(address..address.checked_add(2)?)?;
        read_le::<u16>(bytes).ok()
    }

    fn decode(&mut self) {
        let set = self.ain.instructions();
        self.instruction = self
            .word_at(self.address)
            .and_then(|word| set.get(word & OPCODE_MASK))
            .filter(|info| info.implemented)
            .unwrap_or(&SENTINEL);

        match self.instruction.opcode {
            opcodes::FUNC => {
                let entered = self.arg(0).and_then(|value| usize::try_from(value).ok());
                self.stack.copy_within(0..FUNCTION_STACK_DEPTH - 1, 1);
                self.stack[0] = self.function;
                self.function = entered;
            }
            opcodes::ENDFUNC => {
                self.function = self.stack[0];
                self.stack.copy_within(1..FUNCTION_STACK_DEPTH, 0);
                self.stack[FUNCTION_STACK_DEPTH - 1] = None;
            }
            _ => {}
        }
    }
}
