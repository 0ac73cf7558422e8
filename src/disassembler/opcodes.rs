//! Opcode identifiers.
//!
//! Values are the low 14 bits of the instruction word; the top two bits are operand-type
//! flags and are masked off on decode.

#![allow(missing_docs)]

pub const PUSH: u16 = 0x000;
pub const POP: u16 = 0x001;
pub const REF: u16 = 0x002;
pub const REFREF: u16 = 0x003;
pub const PUSHGLOBALPAGE: u16 = 0x004;
pub const PUSHLOCALPAGE: u16 = 0x005;
pub const INV: u16 = 0x006;
pub const NOT: u16 = 0x007;
pub const COMPL: u16 = 0x008;
pub const ADD: u16 = 0x009;
pub const SUB: u16 = 0x00A;
pub const MUL: u16 = 0x00B;
pub const DIV: u16 = 0x00C;
pub const MOD: u16 = 0x00D;
pub const AND: u16 = 0x00E;
pub const OR: u16 = 0x00F;
pub const XOR: u16 = 0x010;
pub const LSHIFT: u16 = 0x011;
pub const RSHIFT: u16 = 0x012;
pub const LT: u16 = 0x013;
pub const GT: u16 = 0x014;
pub const LTE: u16 = 0x015;
pub const GTE: u16 = 0x016;
pub const NOTE: u16 = 0x017;
pub const EQUALE: u16 = 0x018;
pub const ASSIGN: u16 = 0x019;
pub const PLUSA: u16 = 0x01A;
pub const MINUSA: u16 = 0x01B;
pub const MULA: u16 = 0x01C;
pub const DIVA: u16 = 0x01D;
pub const MODA: u16 = 0x01E;
pub const ANDA: u16 = 0x01F;
pub const ORA: u16 = 0x020;
pub const XORA: u16 = 0x021;
pub const LSHIFTA: u16 = 0x022;
pub const RSHIFTA: u16 = 0x023;
pub const F_ASSIGN: u16 = 0x024;
pub const F_PLUSA: u16 = 0x025;
pub const F_MINUSA: u16 = 0x026;
pub const F_MULA: u16 = 0x027;
pub const F_DIVA: u16 = 0x028;
pub const DUP2: u16 = 0x029;
pub const DUP_X2: u16 = 0x02A;
pub const CMP: u16 = 0x02B;
pub const JUMP: u16 = 0x02C;
pub const IFZ: u16 = 0x02D;
pub const IFNZ: u16 = 0x02E;
pub const RETURN: u16 = 0x02F;
pub const CALLFUNC: u16 = 0x030;
pub const INC: u16 = 0x031;
pub const DEC: u16 = 0x032;
pub const FTOI: u16 = 0x033;
pub const ITOF: u16 = 0x034;
pub const F_INV: u16 = 0x035;
pub const F_ADD: u16 = 0x036;
pub const F_SUB: u16 = 0x037;
pub const F_MUL: u16 = 0x038;
pub const F_DIV: u16 = 0x039;
pub const F_LT: u16 = 0x03A;
pub const F_GT: u16 = 0x03B;
pub const F_LTE: u16 = 0x03C;
pub const F_GTE: u16 = 0x03D;
pub const F_NOTE: u16 = 0x03E;
pub const F_EQUALE: u16 = 0x03F;
pub const F_PUSH: u16 = 0x040;
pub const S_PUSH: u16 = 0x041;
pub const S_POP: u16 = 0x042;
pub const S_ADD: u16 = 0x043;
pub const S_ASSIGN: u16 = 0x044;
pub const S_PLUSA: u16 = 0x045;
pub const S_REF: u16 = 0x046;
pub const S_REFREF: u16 = 0x047;
pub const S_NOTE: u16 = 0x048;
pub const S_EQUALE: u16 = 0x049;
pub const SF_CREATE: u16 = 0x04A;
pub const SF_CREATEPIXEL: u16 = 0x04B;
pub const SF_CREATEALPHA: u16 = 0x04C;
pub const SR_POP: u16 = 0x04D;
pub const SR_ASSIGN: u16 = 0x04E;
pub const SR_REF: u16 = 0x04F;
pub const SR_REFREF: u16 = 0x050;
pub const A_ALLOC: u16 = 0x051;
pub const A_REALLOC: u16 = 0x052;
pub const A_FREE: u16 = 0x053;
pub const A_NUMOF: u16 = 0x054;
pub const A_COPY: u16 = 0x055;
pub const A_FILL: u16 = 0x056;
pub const C_REF: u16 = 0x057;
pub const C_ASSIGN: u16 = 0x058;
pub const MSG: u16 = 0x059;
pub const CALLHLL: u16 = 0x05A;
pub const PUSHSTRUCTPAGE: u16 = 0x05B;
pub const CALLMETHOD: u16 = 0x05C;
pub const SH_GLOBALREF: u16 = 0x05D;
pub const SH_LOCALREF: u16 = 0x05E;
pub const SWITCH: u16 = 0x05F;
pub const STRSWITCH: u16 = 0x060;
pub const FUNC: u16 = 0x061;
pub const EOF: u16 = 0x062;
pub const CALLSYS: u16 = 0x063;
pub const SJUMP: u16 = 0x064;
pub const CALLONJUMP: u16 = 0x065;
pub const SWAP: u16 = 0x066;
pub const SH_STRUCTREF: u16 = 0x067;
pub const S_LENGTH: u16 = 0x068;
pub const S_LENGTHBYTE: u16 = 0x069;
pub const I_STRING: u16 = 0x06A;
pub const CALLFUNC2: u16 = 0x06B;
pub const DUP2_X1: u16 = 0x06C;
pub const R_ASSIGN: u16 = 0x06D;
pub const FT_ASSIGNS: u16 = 0x06E;
pub const ASSERT: u16 = 0x06F;
pub const S_LT: u16 = 0x070;
pub const S_GT: u16 = 0x071;
pub const S_LTE: u16 = 0x072;
pub const S_GTE: u16 = 0x073;
pub const S_LENGTH2: u16 = 0x074;
pub const S_LENGTHBYTE2: u16 = 0x075;
pub const NEW: u16 = 0x076;
pub const DELETE: u16 = 0x077;
pub const CHECKUDO: u16 = 0x078;
pub const A_REF: u16 = 0x079;
pub const DUP: u16 = 0x07A;
pub const DUP_U2: u16 = 0x07B;
pub const SP_INC: u16 = 0x07C;
pub const SP_DEC: u16 = 0x07D;
pub const ENDFUNC: u16 = 0x07E;
pub const R_EQUALE: u16 = 0x07F;
pub const R_NOTE: u16 = 0x080;
pub const SH_LOCALCREATE: u16 = 0x081;
pub const SH_LOCALDELETE: u16 = 0x082;
pub const STOI: u16 = 0x083;
pub const A_PUSHBACK: u16 = 0x084;
pub const A_POPBACK: u16 = 0x085;
pub const S_EMPTY: u16 = 0x086;
pub const A_EMPTY: u16 = 0x087;
pub const A_ERASE: u16 = 0x088;
pub const A_INSERT: u16 = 0x089;
pub const SH_LOCALINC: u16 = 0x08A;
pub const SH_LOCALDEC: u16 = 0x08B;
pub const SH_LOCALASSIGN: u16 = 0x08C;
pub const ITOB: u16 = 0x08D;
pub const S_FIND: u16 = 0x08E;
pub const S_GETPART: u16 = 0x08F;
pub const A_SORT: u16 = 0x090;
pub const S_PUSHBACK: u16 = 0x091;
pub const S_POPBACK: u16 = 0x092;
pub const FTOS: u16 = 0x093;
pub const S_MOD: u16 = 0x094;
pub const S_PLUSA2: u16 = 0x095;
pub const OBJSWAP: u16 = 0x096;
pub const S_ERASE: u16 = 0x097;
pub const SR_REF2: u16 = 0x098;
pub const S_ERASE2: u16 = 0x099;
pub const S_PUSHBACK2: u16 = 0x09A;
pub const S_POPBACK2: u16 = 0x09B;
pub const ITOLI: u16 = 0x09C;
pub const LI_ADD: u16 = 0x09D;
pub const LI_SUB: u16 = 0x09E;
pub const LI_MUL: u16 = 0x09F;
pub const LI_DIV: u16 = 0x0A0;
pub const LI_MOD: u16 = 0x0A1;
pub const LI_ASSIGN: u16 = 0x0A2;
pub const LI_PLUSA: u16 = 0x0A3;
pub const LI_MINUSA: u16 = 0x0A4;
pub const LI_MULA: u16 = 0x0A5;
pub const LI_DIVA: u16 = 0x0A6;
pub const LI_MODA: u16 = 0x0A7;
pub const LI_ANDA: u16 = 0x0A8;
pub const LI_ORA: u16 = 0x0A9;
pub const LI_XORA: u16 = 0x0AA;
pub const LI_LSHIFTA: u16 = 0x0AB;
pub const LI_RSHIFTA: u16 = 0x0AC;
pub const LI_INC: u16 = 0x0AD;
pub const LI_DEC: u16 = 0x0AE;
pub const A_FIND: u16 = 0x0AF;
pub const A_REVERSE: u16 = 0x0B0;
pub const SH_SR_ASSIGN: u16 = 0x0B1;
pub const SH_MEM_ASSIGN_LOCAL: u16 = 0x0B2;
pub const A_NUMOF_GLOB_1: u16 = 0x0B3;
pub const A_NUMOF_STRUCT_1: u16 = 0x0B4;
pub const SH_MEM_ASSIGN_IMM: u16 = 0x0B5;
pub const SH_LOCALREFREF: u16 = 0x0B6;
pub const SH_LOCALASSIGN_SUB_IMM: u16 = 0x0B7;
pub const SH_IF_LOC_LT_IMM: u16 = 0x0B8;
pub const SH_IF_LOC_GE_IMM: u16 = 0x0B9;
pub const SH_LOCREF_ASSIGN_MEM: u16 = 0x0BA;
pub const PAGE_REF: u16 = 0x0BB;
pub const SH_GLOBAL_ASSIGN_LOCAL: u16 = 0x0BC;
pub const SH_STRUCTREF_GT_IMM: u16 = 0x0BD;
pub const SH_STRUCT_ASSIGN_LOCALREF_ITOB: u16 = 0x0BE;
pub const SH_LOCAL_ASSIGN_STRUCTREF: u16 = 0x0BF;
pub const SH_IF_STRUCTREF_NE_LOCALREF: u16 = 0x0C0;
pub const SH_IF_STRUCTREF_GT_IMM: u16 = 0x0C1;
pub const SH_STRUCTREF_CALLMETHOD_NO_PARAM: u16 = 0x0C2;
pub const SH_STRUCTREF2: u16 = 0x0C3;
pub const SH_REF_STRUCTREF2: u16 = 0x0C4;
pub const SH_STRUCTREF3: u16 = 0x0C5;
pub const SH_STRUCTREF2_CALLMETHOD_NO_PARAM: u16 = 0x0C6;
pub const SH_IF_STRUCTREF_Z: u16 = 0x0C7;
pub const SH_IF_STRUCT_A_NOT_EMPTY: u16 = 0x0C8;
pub const SH_IF_LOC_GT_IMM: u16 = 0x0C9;
pub const SH_IF_STRUCTREF_NE_IMM: u16 = 0x0CA;
pub const THISCALLMETHOD_NOPARAM: u16 = 0x0CB;
pub const SH_IF_LOC_NE_IMM: u16 = 0x0CC;
pub const SH_IF_STRUCTREF_EQ_IMM: u16 = 0x0CD;
pub const SH_GLOBAL_ASSIGN_IMM: u16 = 0x0CE;
pub const SH_LOCALSTRUCT_ASSIGN_IMM: u16 = 0x0CF;
pub const SH_STRUCT_A_PUSHBACK_LOCAL_STRUCT: u16 = 0x0D0;
pub const SH_GLOBAL_A_PUSHBACK_LOCAL_STRUCT: u16 = 0x0D1;
pub const SH_LOCAL_A_PUSHBACK_LOCAL_STRUCT: u16 = 0x0D2;
pub const SH_IF_SREF_NE_STR0: u16 = 0x0D3;
pub const SH_S_ASSIGN_REF: u16 = 0x0D4;
pub const SH_A_FIND_SREF: u16 = 0x0D5;
pub const SH_SREF_EMPTY: u16 = 0x0D6;
pub const SH_STRUCTSREF_EQ_LOCALSREF: u16 = 0x0D7;
pub const SH_LOCALSREF_EQ_STR0: u16 = 0x0D8;
pub const SH_STRUCTSREF_NE_LOCALSREF: u16 = 0x0D9;
pub const SH_LOCALSREF_NE_STR0: u16 = 0x0DA;
pub const SH_STRUCT_SR_REF: u16 = 0x0DB;
pub const SH_STRUCT_S_REF: u16 = 0x0DC;
pub const S_REF2: u16 = 0x0DD;
pub const SH_REF_LOCAL_ASSIGN_STRUCTREF2: u16 = 0x0DE;
pub const SH_GLOBAL_S_REF: u16 = 0x0DF;
pub const SH_LOCAL_S_REF: u16 = 0x0E0;
pub const SH_LOCALREF_SASSIGN_LOCALSREF: u16 = 0x0E1;
pub const SH_LOCAL_APUSHBACK_LOCALSREF: u16 = 0x0E2;
pub const SH_S_ASSIGN_CALLSYS19: u16 = 0x0E3;
pub const SH_S_ASSIGN_STR0: u16 = 0x0E4;
pub const SH_SASSIGN_LOCALSREF: u16 = 0x0E5;
pub const SH_STRUCTREF_SASSIGN_LOCALSREF: u16 = 0x0E6;
pub const SH_LOCALSREF_EMPTY: u16 = 0x0E7;
pub const SH_GLOBAL_APUSHBACK_LOCALSREF: u16 = 0x0E8;
pub const SH_STRUCT_APUSHBACK_LOCALSREF: u16 = 0x0E9;
pub const SH_STRUCTSREF_EMPTY: u16 = 0x0EA;
pub const SH_GLOBALSREF_EMPTY: u16 = 0x0EB;
pub const SH_SASSIGN_STRUCTSREF: u16 = 0x0EC;
pub const SH_SASSIGN_GLOBALSREF: u16 = 0x0ED;
pub const SH_STRUCTSREF_NE_STR0: u16 = 0x0EE;
pub const SH_GLOBALSREF_NE_STR0: u16 = 0x0EF;
pub const SH_LOC_LT_IMM_OR_LOC_GE_IMM: u16 = 0x0F0;
pub const A_SORT_MEM: u16 = 0x0F1;
pub const DG_SET: u16 = 0x0F2;
pub const DG_ADD: u16 = 0x0F3;
pub const DG_CALL: u16 = 0x0F4;
pub const DG_NUMOF: u16 = 0x0F5;
pub const DG_EXIST: u16 = 0x0F6;
pub const DG_ERASE: u16 = 0x0F7;
pub const DG_CLEAR: u16 = 0x0F8;
pub const DG_COPY: u16 = 0x0F9;
pub const DG_ASSIGN: u16 = 0x0FA;
pub const DG_PLUSA: u16 = 0x0FB;
pub const DG_POP: u16 = 0x0FC;
pub const DG_NEW_FROM_METHOD: u16 = 0x0FD;
pub const DG_MINUSA: u16 = 0x0FE;
pub const DG_CALLBEGIN: u16 = 0x0FF;
pub const DG_NEW: u16 = 0x100;
pub const DG_STR_TO_METHOD: u16 = 0x101;
pub const OP_0X102: u16 = 0x102;
pub const X_GETENV: u16 = 0x103;
pub const X_SET: u16 = 0x104;
pub const X_ICAST: u16 = 0x105;
pub const X_OP_SET: u16 = 0x106;
pub const OP_0X107: u16 = 0x107;
pub const OP_0X108: u16 = 0x108;
pub const OP_0X109: u16 = 0x109;
pub const X_DUP: u16 = 0x10A;
pub const X_MOV: u16 = 0x10B;
pub const X_REF: u16 = 0x10C;
pub const X_ASSIGN: u16 = 0x10D;
pub const X_A_INIT: u16 = 0x10E;
pub const X_A_SIZE: u16 = 0x10F;
pub const X_TO_STR: u16 = 0x110;

/// Number of defined opcodes.
pub const NR_OPCODES: usize = 273;

/// Bits of the instruction word that carry the opcode id.
pub const OPCODE_MASK: u16 = !0xC000;
