//! Enum member recovery.
//!
//! Enum members are not stored in the container. The compiler does emit a stringifier
//! function per enum (`<Enum>@String` before version 14, `<Enum>::ToString` from 14 on)
//! whose body pushes every member name as a string literal, so the members are recovered by
//! walking that one function with a [`Disassembler`] and collecting its `S_PUSH` operands.

use crate::{
    disassembler::{opcodes, Disassembler},
    metadata::{ain::Ain, version::Version},
};

/// Name of the stringifier function of enum `name`.
#[must_use]
pub fn stringifier_name(name: &str, version: Version) -> String {
    if version.lt(14, 0) {
        format!("{name}@String")
    } else {
        format!("{name}::ToString")
    }
}

/// Member names of enum `index`, in the order its stringifier pushes them.
///
/// Returns an empty list, with a warning, when the stringifier is missing or overloaded.
#[must_use]
pub fn enum_symbols(ain: &Ain, index: usize) -> Vec<String> {
    let Some(enumeration) = ain.enumeration(index) else {
        return Vec::new();
    };

    let name = stringifier_name(&enumeration.name, ain.version());
    let function = match ain.get_overloads(&name) {
        [function] => *function,
        [] => {
            log::warn!("no stringifier '{}' for enum '{}'", name, enumeration.name);
            return Vec::new();
        }
        overloads => {
            log::warn!(
                "stringifier '{}' for enum '{}' has {} overloads",
                name,
                enumeration.name,
                overloads.len()
            );
            return Vec::new();
        }
    };
    let Some(address) = ain.function(function).map(|f| f.address as usize) else {
        return Vec::new();
    };

    let mut symbols = Vec::new();
    let mut dasm = Disassembler::at(ain, address);
    while !dasm.eof() && dasm.opcode() != Some(opcodes::ENDFUNC) {
        if dasm.opcode() == Some(opcodes::S_PUSH) {
            let text = dasm
                .arg(0)
                .and_then(|value| usize::try_from(value).ok())
                .and_then(|i| ain.string(i));
            match text {
                Some("") => {}
                Some(text) => symbols.push(text.to_string()),
                None => log::warn!(
                    "invalid string index {:?} in '{}' at {:#x}",
                    dasm.arg(0),
                    name,
                    dasm.address()
                ),
            }
        }

        let before = dasm.address();
        dasm.next();
        if dasm.address() == before {
            log::warn!("undecodable instruction in '{}' at {:#x}", name, before);
            break;
        }
    }
    symbols
}

/// Fill in the member list of every enum of `ain`.
///
/// The function index must be current; the loader rebuilds it before calling this.
pub fn recover_enums(ain: &mut Ain) {
    let recovered: Vec<_> = (0..ain.enums.len())
        .map(|index| enum_symbols(ain, index))
        .collect();
    for (enumeration, symbols) in ain.enums.iter_mut().zip(recovered) {
        enumeration.symbols = symbols;
    }
}
