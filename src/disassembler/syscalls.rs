//! Built-in system calls reachable through `CALLSYS`.

use crate::metadata::types::DataKind;

/// One system call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Syscall {
    /// Id passed as the `CALLSYS` operand
    pub code: u32,
    /// Qualified name, `system.<Name>`
    pub name: &'static str,
    /// Return kind
    pub return_type: DataKind,
    /// Argument kinds
    pub arguments: &'static [DataKind],
}

macro_rules! syscall {
    ($code:expr, $name:ident, $ret:expr, [$($arg:expr),*]) => {
        Syscall {
            code: $code,
            name: concat!("system.", stringify!($name)),
            return_type: $ret,
            arguments: &[$($arg),*],
        }
    };
}

/// All system calls, indexed by id.
pub static SYSCALLS: [Syscall; 29] = [
    syscall!(0x00, Exit, DataKind::Void, [DataKind::Int]),
    syscall!(0x01, GlobalSave, DataKind::Int, [DataKind::String, DataKind::String]),
    syscall!(0x02, GlobalLoad, DataKind::Int, [DataKind::String, DataKind::String]),
    syscall!(0x03, LockPeek, DataKind::Int, []),
    syscall!(0x04, UnlockPeek, DataKind::Int, []),
    syscall!(0x05, Reset, DataKind::Void, []),
    syscall!(0x06, Output, DataKind::String, [DataKind::String]),
    syscall!(0x07, MsgBox, DataKind::String, [DataKind::String]),
    syscall!(0x08, ResumeSave, DataKind::Int, [DataKind::String, DataKind::String, DataKind::RefInt]),
    syscall!(0x09, ResumeLoad, DataKind::Void, [DataKind::String, DataKind::String]),
    syscall!(0x0A, ExistsFile, DataKind::Int, [DataKind::String]),
    syscall!(0x0B, OpenWeb, DataKind::Void, [DataKind::String]),
    syscall!(0x0C, GetSaveFolderName, DataKind::String, []),
    syscall!(0x0D, GetTime, DataKind::Int, []),
    syscall!(0x0E, GetGameName, DataKind::String, []),
    syscall!(0x0F, Error, DataKind::String, [DataKind::String]),
    syscall!(0x10, ExistsSaveFile, DataKind::Int, [DataKind::String]),
    syscall!(0x11, IsDebugMode, DataKind::Int, []),
    syscall!(0x12, MsgBoxOkCancel, DataKind::Int, [DataKind::String]),
    syscall!(0x13, GetFuncStackName, DataKind::String, [DataKind::Int]),
    syscall!(0x14, Peek, DataKind::Void, []),
    syscall!(0x15, Sleep, DataKind::Void, [DataKind::Int]),
    syscall!(0x16, GroupSave, DataKind::Int, [DataKind::String, DataKind::String, DataKind::String, DataKind::RefInt]),
    syscall!(0x17, GroupLoad, DataKind::Int, [DataKind::String, DataKind::String, DataKind::String, DataKind::RefInt]),
    syscall!(0x18, ResumeWriteComment, DataKind::Bool, [DataKind::String, DataKind::String, DataKind::RefArrayString]),
    syscall!(0x19, ResumeReadComment, DataKind::Bool, [DataKind::String, DataKind::String, DataKind::RefArrayString]),
    syscall!(0x1A, DeleteSaveFile, DataKind::Int, [DataKind::String]),
    syscall!(0x1B, ExistFunc, DataKind::Bool, [DataKind::String]),
    syscall!(0x1C, CopySaveFile, DataKind::Int, [DataKind::String, DataKind::String]),];

/// The system call with id `code`.
#[must_use]
pub fn syscall(code: i32) -> Option<&'static Syscall> {
    usize::try_from(code).ok().and_then(|index| SYSCALLS.get(index))
}

/// The system call called `name`, with or without the `system.` prefix.
#[must_use]
pub fn syscall_by_name(name: &str) -> Option<&'static Syscall> {
    let qualified = name.strip_prefix("system.").unwrap_or(name);
    SYSCALLS
        .iter()
        .find(|sys| sys.name.strip_prefix("system.") == Some(qualified))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_match_positions() {
        for (index, sys) in SYSCALLS.iter().enumerate() {
            assert_eq!(sys.code as usize, index);
            assert!(sys.name.starts_with("system."));
        }
    }

    #[test]
    fn lookups() {
        assert_eq!(syscall(0).unwrap().name, "system.Exit");
        assert_eq!(syscall(0x1C).unwrap().name, "system.CopySaveFile");
        assert!(syscall(29).is_none());
        assert!(syscall(-1).is_none());

        let save = syscall_by_name("GroupSave").unwrap();
        assert_eq!(save.code, 0x16);
        assert_eq!(save.arguments.len(), 4);
        assert_eq!(save.arguments[3], DataKind::RefInt);
        assert_eq!(syscall_by_name("system.Sleep").unwrap().code, 0x15);
        assert!(syscall_by_name("Nope").is_none());
    }
}
