//! Static description of a single opcode.

use std::fmt;

/// Meaning of an immediate operand or stack slot.
///
/// Page, variable and member slots of the original table are plain integers and are
/// folded into [`ArgType::Int`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgType {
    /// Plain integer
    Int,
    /// IEEE-754 single stored in the operand bits
    Float,
    /// Code address
    Addr,
    /// Function index
    Func,
    /// String table index
    String,
    /// Message table index
    Msg,
    /// Local variable index of the current function
    Local,
    /// Global variable index
    Global,
    /// Structure index
    Struct,
    /// System call id
    Syscall,
    /// Library index
    Hll,
    /// Function index inside the preceding library
    HllFunc,
    /// File name index
    File,
    /// Delegate index
    Dlg,
    /// Switch table index
    Switch,
}

impl fmt::Display for ArgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArgType::Int => "int",
            ArgType::Float => "float",
            ArgType::Addr => "address",
            ArgType::Func => "function",
            ArgType::String => "string",
            ArgType::Msg => "message",
            ArgType::Local => "local",
            ArgType::Global => "global",
            ArgType::Struct => "struct",
            ArgType::Syscall => "syscall",
            ArgType::Hll => "library",
            ArgType::HllFunc => "library function",
            ArgType::File => "file",
            ArgType::Dlg => "delegate",
            ArgType::Switch => "switch",
        };
        f.write_str(name)
    }
}

/// How an instruction moves the instruction pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowType {
    /// Falls through to the next instruction
    Sequential,
    /// Sets the instruction pointer itself (jumps, calls, returns)
    Jump,
}

/// Descriptor of one opcode: operands, stack shape and flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstructionInfo {
    /// Opcode id
    pub opcode: u16,
    /// Mnemonic
    pub mnemonic: &'static str,
    /// Immediate operand types, in encoding order
    pub args: &'static [ArgType],
    /// Values popped from the stack
    pub stack_in: &'static [ArgType],
    /// Values pushed onto the stack
    pub stack_out: &'static [ArgType],
    /// Control flow behaviour
    pub flow: FlowType,
    /// Whether the operand layout is known
    pub implemented: bool,
}

/// Decoded in place of anything that is not a usable instruction.
///
/// Its width is 0, so a cursor sitting on it does not advance.
pub static SENTINEL: InstructionInfo = InstructionInfo {
    opcode: u16::MAX,
    mnemonic: "",
    args: &[],
    stack_in: &[],
    stack_out: &[],
    flow: FlowType::Sequential,
    implemented: false,
};

impl InstructionInfo {
    /// Number of immediate operands.
    #[must_use]
    pub fn nr_args(&self) -> usize {
        self.args.len()
    }

    /// Encoded size in bytes: the opcode word plus 4 bytes per operand. 0 for [`SENTINEL`].
    #[must_use]
    pub fn width(&self) -> usize {
        if self.is_sentinel() {
            0
        } else {
            2 + 4 * self.args.len()
        }
    }

    /// Amount the interpreter adds to the instruction pointer after executing this
    /// instruction; 0 for instructions that set it themselves.
    #[must_use]
    pub fn ip_inc(&self) -> usize {
        match self.flow {
            FlowType::Jump => 0,
            FlowType::Sequential => self.width(),
        }
    }

    /// Whether this is the [`SENTINEL`].
    #[must_use]
    pub fn is_sentinel(&self) -> bool {
        self.opcode == SENTINEL.opcode
    }
}

impl fmt::Display for InstructionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_sentinel() {
            return f.write_str("<none>");
        }
        f.write_str(self.mnemonic)
    }
}
