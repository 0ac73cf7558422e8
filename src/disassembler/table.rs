//! The opcode table and its per-version configuration.
//!
//! [`BASE_TABLE`] holds every opcode in its version-independent shape. An
//! [`InstructionSet`] is a private copy of that table with the version 11 operand changes
//! applied, owned by one container.

use crate::{
    disassembler::{
        instruction::{ArgType as T, FlowType, InstructionInfo},
        opcodes::{self, NR_OPCODES},
    },
    metadata::version::Version,
};

const PAGE: T = T::Int;
const VAR: T = T::Int;
const MEMB: T = T::Int;
const MEMB2: T = T::Int;
const MEMB3: T = T::Int;
const LOCMEMB: T = T::Int;

macro_rules! entry {
    ($code:ident, $flow:expr, $implemented:expr, [$($arg:expr),*], [$($sin:expr),*], [$($sout:expr),*]) => {
        InstructionInfo {
            opcode: opcodes::$code,
            mnemonic: stringify!($code),
            args: &[$($arg),*],
            stack_in: &[$($sin),*],
            stack_out: &[$($sout),*],
            flow: $flow,
            implemented: $implemented,
        }
    };
}

macro_rules! op {
    ($code:ident, $($rest:tt)*) => {
        entry!($code, FlowType::Sequential, true, $($rest)*)
    };
}

macro_rules! jmp {
    ($code:ident, $($rest:tt)*) => {
        entry!($code, FlowType::Jump, true, $($rest)*)
    };
}

macro_rules! unimpl {
    ($code:ident, $($rest:tt)*) => {
        entry!($code, FlowType::Sequential, false, $($rest)*)
    };
}

/// Every opcode, indexed by id, in the shape used before version 11.
pub static BASE_TABLE: [InstructionInfo; NR_OPCODES] = [
    op!(PUSH, [T::Int], [], [T::Int]),
    op!(POP, [], [T::Int], []),
    op!(REF, [], [PAGE, VAR], [T::Int]),
    op!(REFREF, [], [PAGE, VAR], [PAGE, VAR]),
    op!(PUSHGLOBALPAGE, [], [], [PAGE]),
    op!(PUSHLOCALPAGE, [], [], [PAGE]),
    op!(INV, [], [T::Int], [T::Int]),
    op!(NOT, [], [T::Int], [T::Int]),
    op!(COMPL, [], [T::Int], [T::Int]),
    op!(ADD, [], [T::Int, T::Int], [T::Int]),
    op!(SUB, [], [T::Int, T::Int], [T::Int]),
    op!(MUL, [], [T::Int, T::Int], [T::Int]),
    op!(DIV, [], [T::Int, T::Int], [T::Int]),
    op!(MOD, [], [T::Int, T::Int], [T::Int]),
    op!(AND, [], [T::Int, T::Int], [T::Int]),
    op!(OR, [], [T::Int, T::Int], [T::Int]),
    op!(XOR, [], [T::Int, T::Int], [T::Int]),
    op!(LSHIFT, [], [T::Int, T::Int], [T::Int]),
    op!(RSHIFT, [], [T::Int, T::Int], [T::Int]),
    op!(LT, [], [T::Int, T::Int], [T::Int]),
    op!(GT, [], [T::Int, T::Int], [T::Int]),
    op!(LTE, [], [T::Int, T::Int], [T::Int]),
    op!(GTE, [], [T::Int, T::Int], [T::Int]),
    op!(NOTE, [], [T::Int, T::Int], [T::Int]),
    op!(EQUALE, [], [T::Int, T::Int], [T::Int]),
    op!(ASSIGN, [], [PAGE, VAR, T::Int], [T::Int]),
    op!(PLUSA, [], [PAGE, VAR, T::Int], [T::Int]),
    op!(MINUSA, [], [PAGE, VAR, T::Int], [T::Int]),
    op!(MULA, [], [PAGE, VAR, T::Int], [T::Int]),
    op!(DIVA, [], [PAGE, VAR, T::Int], [T::Int]),
    op!(MODA, [], [PAGE, VAR, T::Int], [T::Int]),
    op!(ANDA, [], [PAGE, VAR, T::Int], [T::Int]),
    op!(ORA, [], [PAGE, VAR, T::Int], [T::Int]),
    op!(XORA, [], [PAGE, VAR, T::Int], [T::Int]),
    op!(LSHIFTA, [], [PAGE, VAR, T::Int], [T::Int]),
    op!(RSHIFTA, [], [PAGE, VAR, T::Int], [T::Int]),
    op!(F_ASSIGN, [], [PAGE, VAR, T::Float], [T::Float]),
    op!(F_PLUSA, [], [PAGE, VAR, T::Float], [T::Float]),
    op!(F_MINUSA, [], [PAGE, VAR, T::Float], [T::Float]),
    op!(F_MULA, [], [PAGE, VAR, T::Float], [T::Float]),
    op!(F_DIVA, [], [PAGE, VAR, T::Float], [T::Float]),
    op!(DUP2, [], [T::Int, T::Int], [T::Int, T::Int, T::Int, T::Int]),
    op!(DUP_X2, [], [T::Int, T::Int, T::Int], [T::Int, T::Int, T::Int, T::Int]),
    unimpl!(CMP, [], [], []),
    jmp!(JUMP, [T::Addr], [], []),
    jmp!(IFZ, [T::Addr], [T::Int], []),
    jmp!(IFNZ, [T::Addr], [T::Int], []),
    jmp!(RETURN, [], [], []),
    jmp!(CALLFUNC, [T::Func], [], []),
    op!(INC, [], [PAGE, VAR], []),
    op!(DEC, [], [PAGE, VAR], []),
    op!(FTOI, [], [T::Float], [T::Int]),
    op!(ITOF, [], [T::Int], [T::Float]),
    op!(F_INV, [], [T::Float], [T::Float]),
    op!(F_ADD, [], [T::Float, T::Float], [T::Float]),
    op!(F_SUB, [], [T::Float, T::Float], [T::Float]),
    op!(F_MUL, [], [T::Float, T::Float], [T::Float]),
    op!(F_DIV, [], [T::Float, T::Float], [T::Float]),
    op!(F_LT, [], [T::Float, T::Float], [T::Int]),
    op!(F_GT, [], [T::Float, T::Float], [T::Int]),
    op!(F_LTE, [], [T::Float, T::Float], [T::Int]),
    op!(F_GTE, [], [T::Float, T::Float], [T::Int]),
    op!(F_NOTE, [], [T::Float, T::Float], [T::Int]),
    op!(F_EQUALE, [], [T::Float, T::Float], [T::Int]),
    op!(F_PUSH, [T::Float], [], [T::Float]),
    op!(S_PUSH, [T::String], [], [T::String]),
    op!(S_POP, [], [T::String], []),
    op!(S_ADD, [], [T::String, T::String], [T::String]),
    op!(S_ASSIGN, [], [T::String, T::String], [T::String]),
    op!(S_PLUSA, [], [T::String, T::String], [T::String]),
    op!(S_REF, [], [PAGE, VAR], [T::String]),
    unimpl!(S_REFREF, [], [], []),
    op!(S_NOTE, [], [T::String, T::String], [T::Int]),
    op!(S_EQUALE, [], [T::String, T::String], [T::Int]),
    unimpl!(SF_CREATE, [], [], []),
    unimpl!(SF_CREATEPIXEL, [], [], []),
    unimpl!(SF_CREATEALPHA, [], [], []),

    op!(SR_POP, [], [PAGE], []),
    op!(SR_ASSIGN, [], [PAGE, PAGE, T::Struct], [PAGE]),
    op!(SR_REF, [T::Struct], [PAGE, VAR], [PAGE]),
    unimpl!(SR_REFREF, [], [], []),
    op!(A_ALLOC, [], [], []),
    op!(A_REALLOC, [], [], []),
    op!(A_FREE, [], [PAGE, VAR], []),
    op!(A_NUMOF, [], [PAGE, VAR, T::Int], []),
    op!(A_COPY, [], [PAGE, VAR, T::Int, PAGE, T::Int, T::Int], []),
    op!(A_FILL, [], [PAGE, VAR, T::Int, T::Int, T::Int], []),
    op!(C_REF, [], [T::String, T::Int], [T::Int]),
    op!(C_ASSIGN, [], [T::String, T::Int, T::Int], [T::Int]),
    jmp!(MSG, [T::Msg], [], []),
    op!(CALLHLL, [T::Hll, T::HllFunc], [], []),
    op!(PUSHSTRUCTPAGE, [], [], [PAGE]),
    jmp!(CALLMETHOD, [T::Func], [], []),
    op!(SH_GLOBALREF, [T::Global], [], [T::Int]),
    op!(SH_LOCALREF, [T::Local], [], [T::Int]),
    jmp!(SWITCH, [T::Switch], [T::Int], []),
    jmp!(STRSWITCH, [T::Switch], [T::String], []),
    op!(FUNC, [T::Func], [], []),
    op!(EOF, [T::File], [], []),
    op!(CALLSYS, [T::Syscall], [], []),
    jmp!(SJUMP, [], [T::Int], []),
    op!(CALLONJUMP, [], [T::String], [PAGE]),
    op!(SWAP, [], [T::Int, T::Int], [T::Int, T::Int]),
    op!(SH_STRUCTREF, [MEMB], [], [T::Int]),
    op!(S_LENGTH, [], [PAGE, VAR], [T::Int]),
    op!(S_LENGTHBYTE, [], [PAGE, VAR], [T::Int]),
    op!(I_STRING, [], [T::Int], [T::String]),
    jmp!(CALLFUNC2, [], [], []),
    op!(DUP2_X1, [], [T::Int, T::Int, T::Int], [T::Int, T::Int, T::Int, T::Int, T::Int]),
    op!(R_ASSIGN, [], [PAGE, VAR, PAGE, VAR], [PAGE, VAR]),
    op!(FT_ASSIGNS, [], [PAGE, VAR, T::String, T::Int], [T::String]),
    op!(ASSERT, [], [T::Int, T::String, T::String, T::Int], []),
    op!(S_LT, [], [T::String, T::String], [T::Int]),
    op!(S_GT, [], [T::String, T::String], [T::Int]),
    op!(S_LTE, [], [T::String, T::String], [T::Int]),
    op!(S_GTE, [], [T::String, T::String], [T::Int]),
    op!(S_LENGTH2, [], [T::String], [T::Int]),
    unimpl!(S_LENGTHBYTE2, [], [], []),
    op!(NEW, [], [], []),
    op!(DELETE, [], [PAGE], []),
    unimpl!(CHECKUDO, [], [], []),
    op!(A_REF, [], [PAGE], []),
    op!(DUP, [], [T::Int], [T::Int, T::Int]),
    op!(DUP_U2, [], [T::Int, T::Int], [T::Int, T::Int, T::Int]),
    op!(SP_INC, [], [PAGE], []),
    unimpl!(SP_DEC, [], [PAGE], []),
    op!(ENDFUNC, [T::Func], [], []),
    op!(R_EQUALE, [], [PAGE, VAR, PAGE, VAR], [T::Int]),
    op!(R_NOTE, [], [PAGE, VAR, PAGE, VAR], [T::Int]),
    op!(SH_LOCALCREATE, [T::Local, T::Struct], [], []),
    op!(SH_LOCALDELETE, [T::Local], [], []),
    op!(STOI, [], [T::String], [T::Int]),
    op!(A_PUSHBACK, [], [PAGE, VAR, T::Int], []),
    op!(A_POPBACK, [], [PAGE, VAR], []),
    op!(S_EMPTY, [], [T::String], [T::Int]),
    op!(A_EMPTY, [], [PAGE, VAR], [T::Int]),
    op!(A_ERASE, [], [PAGE, VAR, T::Int], [T::Int]),
    op!(A_INSERT, [], [PAGE, VAR, T::Int, T::Int], []),
    op!(SH_LOCALINC, [T::Local], [], []),
    op!(SH_LOCALDEC, [T::Local], [], []),
    op!(SH_LOCALASSIGN, [T::Local, T::Int], [], []),
    op!(ITOB, [], [T::Int], [T::Int]),
    op!(S_FIND, [], [T::String, T::String], [T::Int]),
    op!(S_GETPART, [], [T::String, T::Int, T::Int], [T::String]),
    op!(A_SORT, [], [PAGE, VAR, T::Func], []),
    unimpl!(S_PUSHBACK, [], [], []),
    unimpl!(S_POPBACK, [], [], []),
    op!(FTOS, [], [T::Float], [T::String]),
    op!(S_MOD, [], [T::String, T::Int, T::Int], [T::String]),
    op!(S_PLUSA2, [], [T::String, T::String], [T::String]),
    op!(OBJSWAP, [], [PAGE, VAR, PAGE, VAR, T::Int], []),
    unimpl!(S_ERASE, [], [], []),
    op!(SR_REF2, [T::Struct], [PAGE], [PAGE]),
    op!(S_ERASE2, [], [T::String, T::Int, T::Int], []),
    op!(S_PUSHBACK2, [], [T::String, T::Int], []),
    op!(S_POPBACK2, [], [T::String], []),
    op!(ITOLI, [], [T::Int], [T::Int]),
    op!(LI_ADD, [], [T::Int, T::Int], [T::Int]),
    op!(LI_SUB, [], [T::Int, T::Int], [T::Int]),
    op!(LI_MUL, [], [T::Int, T::Int], [T::Int]),
    op!(LI_DIV, [], [T::Int, T::Int], [T::Int]),
    op!(LI_MOD, [], [T::Int, T::Int], [T::Int]),
    op!(LI_ASSIGN, [], [PAGE, VAR, T::Int], [T::Int]),
    op!(LI_PLUSA, [], [PAGE, VAR, T::Int], [T::Int]),
    op!(LI_MINUSA, [], [PAGE, VAR, T::Int], [T::Int]),
    op!(LI_MULA, [], [PAGE, VAR, T::Int], [T::Int]),
    op!(LI_DIVA, [], [PAGE, VAR, T::Int], [T::Int]),
    op!(LI_MODA, [], [PAGE, VAR, T::Int], [T::Int]),
    op!(LI_ANDA, [], [PAGE, VAR, T::Int], [T::Int]),
    op!(LI_ORA, [], [PAGE, VAR, T::Int], [T::Int]),
    op!(LI_XORA, [], [PAGE, VAR, T::Int], [T::Int]),
    op!(LI_LSHIFTA, [], [PAGE, VAR, T::Int], [T::Int]),
    op!(LI_RSHIFTA, [], [PAGE, VAR, T::Int], [T::Int]),
    op!(LI_INC, [], [PAGE, VAR], []),
    op!(LI_DEC, [], [PAGE, VAR], []),
    op!(A_FIND, [], [PAGE, VAR, T::Int, T::Int, T::Int, T::Func], [T::Int]),
    op!(A_REVERSE, [], [PAGE, VAR], []),

    op!(SH_SR_ASSIGN, [], [PAGE, PAGE, VAR], []),
    op!(SH_MEM_ASSIGN_LOCAL, [MEMB, T::Local], [], []),
    op!(A_NUMOF_GLOB_1, [T::Global], [], [T::Int]),
    op!(A_NUMOF_STRUCT_1, [MEMB], [], [T::Int]),
    op!(SH_MEM_ASSIGN_IMM, [MEMB, T::Int], [], []),
    op!(SH_LOCALREFREF, [T::Local], [], [PAGE, T::Int]),
    op!(SH_LOCALASSIGN_SUB_IMM, [T::Local, T::Int], [], []),
    jmp!(SH_IF_LOC_LT_IMM, [T::Local, T::Int, T::Addr], [], []),
    jmp!(SH_IF_LOC_GE_IMM, [T::Local, T::Int, T::Addr], [], []),
    op!(SH_LOCREF_ASSIGN_MEM, [T::Local, MEMB], [], []),
    op!(PAGE_REF, [T::Int], [PAGE], [T::Int]),
    op!(SH_GLOBAL_ASSIGN_LOCAL, [T::Global, T::Local], [], []),
    op!(SH_STRUCTREF_GT_IMM, [MEMB, T::Int], [], []),
    op!(SH_STRUCT_ASSIGN_LOCALREF_ITOB, [MEMB, T::Local], [], []),
    op!(SH_LOCAL_ASSIGN_STRUCTREF, [T::Local, MEMB], [], []),
    jmp!(SH_IF_STRUCTREF_NE_LOCALREF, [MEMB, T::Local, T::Addr], [], []),
    jmp!(SH_IF_STRUCTREF_GT_IMM, [MEMB, T::Int, T::Addr], [], []),
    jmp!(SH_STRUCTREF_CALLMETHOD_NO_PARAM, [MEMB, T::Func], [], []),
    op!(SH_STRUCTREF2, [MEMB, MEMB2], [], [T::Int]),
    op!(SH_REF_STRUCTREF2, [MEMB, MEMB2], [PAGE], [T::Int]),
    op!(SH_STRUCTREF3, [MEMB, MEMB2, MEMB3], [], [T::Int]),
    jmp!(SH_STRUCTREF2_CALLMETHOD_NO_PARAM, [MEMB, MEMB2, T::Func], [], []),
    jmp!(SH_IF_STRUCTREF_Z, [MEMB, T::Addr], [], []),
    jmp!(SH_IF_STRUCT_A_NOT_EMPTY, [MEMB, T::Addr], [], []),
    jmp!(SH_IF_LOC_GT_IMM, [T::Local, T::Int, T::Addr], [], []),
    jmp!(SH_IF_STRUCTREF_NE_IMM, [MEMB, T::Int, T::Addr], [], []),
    jmp!(THISCALLMETHOD_NOPARAM, [T::Func], [], []),
    jmp!(SH_IF_LOC_NE_IMM, [T::Local, T::Int, T::Addr], [], []),
    jmp!(SH_IF_STRUCTREF_EQ_IMM, [MEMB, T::Int, T::Addr], [], []),
    op!(SH_GLOBAL_ASSIGN_IMM, [T::Global, T::Int], [], []),
    op!(SH_LOCALSTRUCT_ASSIGN_IMM, [T::Local, LOCMEMB, T::Int], [], []),
    op!(SH_STRUCT_A_PUSHBACK_LOCAL_STRUCT, [MEMB, T::Local], [], []),
    op!(SH_GLOBAL_A_PUSHBACK_LOCAL_STRUCT, [T::Global, T::Local], [], []),
    op!(SH_LOCAL_A_PUSHBACK_LOCAL_STRUCT, [T::Local, T::Local], [], []),
    jmp!(SH_IF_SREF_NE_STR0, [T::String, T::Addr], [PAGE, VAR], []),
    op!(SH_S_ASSIGN_REF, [], [T::String, PAGE, VAR], []),
    unimpl!(SH_A_FIND_SREF, [], [], []),
    op!(SH_SREF_EMPTY, [], [PAGE, VAR], [T::Int]),
    op!(SH_STRUCTSREF_EQ_LOCALSREF, [MEMB, T::Local], [], [T::Int]),
    op!(SH_LOCALSREF_EQ_STR0, [T::Local, T::String], [], [T::Int]),
    op!(SH_STRUCTSREF_NE_LOCALSREF, [MEMB, T::Local], [], [T::Int]),
    op!(SH_LOCALSREF_NE_STR0, [T::Local, T::String], [], [T::Int]),
    op!(SH_STRUCT_SR_REF, [MEMB, T::Struct], [], [PAGE]),
    op!(SH_STRUCT_S_REF, [MEMB], [], [T::String]),
    op!(S_REF2, [MEMB], [PAGE], [T::String]),
    op!(SH_REF_LOCAL_ASSIGN_STRUCTREF2, [MEMB, T::Local, MEMB2], [], []),
    op!(SH_GLOBAL_S_REF, [T::Global], [], [T::String]),
    op!(SH_LOCAL_S_REF, [T::Local], [], [T::String]),
    op!(SH_LOCALREF_SASSIGN_LOCALSREF, [T::Local, T::Local], [], []),
    op!(SH_LOCAL_APUSHBACK_LOCALSREF, [T::Local, T::Local], [], []),
    op!(SH_S_ASSIGN_CALLSYS19, [], [T::String, T::Func], []),
    op!(SH_S_ASSIGN_STR0, [T::String], [T::String], []),
    op!(SH_SASSIGN_LOCALSREF, [T::Local], [T::String], []),
    op!(SH_STRUCTREF_SASSIGN_LOCALSREF, [MEMB, T::Local], [], []),
    op!(SH_LOCALSREF_EMPTY, [T::Local], [], [T::Int]),
    op!(SH_GLOBAL_APUSHBACK_LOCALSREF, [T::Global, T::Local], [], []),
    op!(SH_STRUCT_APUSHBACK_LOCALSREF, [MEMB, T::Local], [], []),
    op!(SH_STRUCTSREF_EMPTY, [MEMB], [], [T::Int]),
    op!(SH_GLOBALSREF_EMPTY, [T::Global], [], [T::Int]),
    op!(SH_SASSIGN_STRUCTSREF, [MEMB], [], [T::String]),
    op!(SH_SASSIGN_GLOBALSREF, [T::Global], [], [T::String]),
    op!(SH_STRUCTSREF_NE_STR0, [MEMB, T::String], [], [T::Int]),
    op!(SH_GLOBALSREF_NE_STR0, [T::Global, T::String], [], [T::Int]),
    op!(SH_LOC_LT_IMM_OR_LOC_GE_IMM, [T::Local, T::Int, T::Int], [], [T::Int]),

    unimpl!(A_SORT_MEM, [], [PAGE, VAR, T::Int], []),
    op!(DG_SET, [], [PAGE, PAGE, T::Func], []),
    op!(DG_ADD, [], [PAGE, PAGE, T::Func], []),
    jmp!(DG_CALL, [T::Dlg, T::Addr], [], []),
    op!(DG_NUMOF, [], [PAGE], [T::Int]),
    unimpl!(DG_EXIST, [], [], []),
    unimpl!(DG_ERASE, [], [], []),
    op!(DG_CLEAR, [], [PAGE], []),
    op!(DG_COPY, [], [PAGE], [PAGE]),
    op!(DG_ASSIGN, [], [PAGE, PAGE], [PAGE]),
    op!(DG_PLUSA, [], [PAGE, PAGE], [PAGE]),
    op!(DG_POP, [], [PAGE], []),
    op!(DG_NEW_FROM_METHOD, [], [PAGE, T::Func], [PAGE]),
    op!(DG_MINUSA, [], [PAGE, PAGE], [PAGE]),
    op!(DG_CALLBEGIN, [T::Dlg], [PAGE], []),
    unimpl!(DG_NEW, [], [], []),
    unimpl!(DG_STR_TO_METHOD, [], [], []),

    unimpl!(OP_0X102, [], [], []),
    unimpl!(X_GETENV, [], [], []),
    unimpl!(X_SET, [], [], []),
    unimpl!(X_ICAST, [T::Struct], [], []),
    unimpl!(X_OP_SET, [T::Int], [], []),
    unimpl!(OP_0X107, [], [], []),
    unimpl!(OP_0X108, [], [], []),
    unimpl!(OP_0X109, [], [], []),
    unimpl!(X_DUP, [T::Int], [], []),
    unimpl!(X_MOV, [T::Int, T::Int], [], []),
    unimpl!(X_REF, [T::Int], [], []),
    unimpl!(X_ASSIGN, [T::Int], [], []),
    unimpl!(X_A_INIT, [T::Int], [], []),
    unimpl!(X_A_SIZE, [], [], []),
    unimpl!(X_TO_STR, [T::Int], [], []),
];

/// Operands of the opcodes whose encoding changed in version 11. Each of them decodes from
/// version 11 on.
const V11_ARGS: &[(u16, &[T])] = &[
    (opcodes::CALLHLL, &[T::Hll, T::HllFunc, T::Int]),
    (opcodes::NEW, &[T::Struct, T::Int]),
    (opcodes::S_MOD, &[T::Int]),
    (opcodes::OBJSWAP, &[T::Int]),
    (opcodes::DG_STR_TO_METHOD, &[T::Dlg]),
    (opcodes::CALLMETHOD, &[T::Int]),
];

/// The opcode table configured for one container version.
#[derive(Debug, Clone, PartialEq)]
pub struct InstructionSet {
    version: Version,
    table: Vec<InstructionInfo>,
}

impl InstructionSet {
    /// Build the table for `version`. Calling this twice with the same version yields equal
    /// sets.
    #[must_use]
    pub fn for_version(version: Version) -> Self {
        let mut table = BASE_TABLE.to_vec();
        if version.gte(11, 0) {
            for &(opcode, args) in V11_ARGS {
                let info = &mut table[usize::from(opcode)];
                info.args = args;
                info.implemented = true;
            }
        }
        InstructionSet { version, table }
    }

    /// Version the set was configured for.
    #[must_use]
    pub fn version(&self) -> Version {
        self.version
    }

    /// Descriptor of `opcode`, if it is in the table.
    #[must_use]
    pub fn get(&self, opcode: u16) -> Option<&InstructionInfo> {
        self.table.get(usize::from(opcode))
    }

    /// Descriptor with the given mnemonic.
    #[must_use]
    pub fn by_mnemonic(&self, mnemonic: &str) -> Option<&InstructionInfo> {
        self.table.iter().find(|info| info.mnemonic == mnemonic)
    }

    /// Number of opcodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// All descriptors in opcode order.
    pub fn iter(&self) -> impl Iterator<Item = &InstructionInfo> {
        self.table.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_dense() {
        for (index, info) in BASE_TABLE.iter().enumerate() {
            assert_eq!(usize::from(info.opcode), index, "{}", info.mnemonic);
        }
        assert_eq!(BASE_TABLE[usize::from(opcodes::MSG)].mnemonic, "MSG");
        assert_eq!(BASE_TABLE[usize::from(opcodes::EOF)].mnemonic, "EOF");
    }

    #[test]
    fn widths_and_flow() {
        let set = InstructionSet::for_version(Version::new(4, 0));
        let push = set.get(opcodes::PUSH).unwrap();
        assert_eq!(push.width(), 6);
        assert_eq!(push.ip_inc(), 6);

        let jump = set.get(opcodes::JUMP).unwrap();
        assert_eq!(jump.args, &[T::Addr]);
        assert_eq!(jump.ip_inc(), 0);

        let ret = set.get(opcodes::RETURN).unwrap();
        assert_eq!(ret.width(), 2);
        assert_eq!(ret.flow, FlowType::Jump);

        assert!(!set.get(opcodes::CMP).unwrap().implemented);
        assert!(set.get(opcodes::FUNC).unwrap().implemented);
        assert!(set.get(NR_OPCODES as u16).is_none());
        assert_eq!(set.by_mnemonic("ENDFUNC").unwrap().opcode, opcodes::ENDFUNC);
    }

    #[test]
    fn version_11_patches() {
        let old = InstructionSet::for_version(Version::new(8, 0));
        let new = InstructionSet::for_version(Version::new(11, 0));

        assert_eq!(old.get(opcodes::CALLHLL).unwrap().nr_args(), 2);
        assert_eq!(new.get(opcodes::CALLHLL).unwrap().nr_args(), 3);
        assert_eq!(old.get(opcodes::NEW).unwrap().nr_args(), 0);
        assert_eq!(new.get(opcodes::NEW).unwrap().nr_args(), 2);
        for opcode in [opcodes::S_MOD, opcodes::OBJSWAP, opcodes::DG_STR_TO_METHOD] {
            assert_eq!(old.get(opcode).unwrap().nr_args(), 0);
            assert_eq!(new.get(opcode).unwrap().nr_args(), 1);
        }
        assert_eq!(old.get(opcodes::CALLMETHOD).unwrap().args, &[T::Func]);
        assert_eq!(new.get(opcodes::CALLMETHOD).unwrap().args, &[T::Int]);

        assert_eq!(new.get(opcodes::NEW).unwrap().width(), 10);
        assert!(!old.get(opcodes::DG_STR_TO_METHOD).unwrap().implemented);
        assert!(new.get(opcodes::DG_STR_TO_METHOD).unwrap().implemented);
        assert_eq!(new.get(opcodes::DG_STR_TO_METHOD).unwrap().width(), 6);
        assert_eq!(InstructionSet::for_version(Version::new(11, 0)), new);

        let unchanged = old
            .iter()
            .zip(new.iter())
            .filter(|(a, b)| a == b)
            .count();
        assert_eq!(unchanged, NR_OPCODES - V11_ARGS.len());
    }
}
