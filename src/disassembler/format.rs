//! Text rendering of the instruction under a cursor.

use std::fmt::Write;

use crate::disassembler::{cursor::Disassembler, instruction::ArgType, syscalls::syscall};

fn index(value: i32) -> Option<usize> {
    usize::try_from(value).ok()
}

fn quoted(text: &str) -> String {
    format!("{text:?}")
}

impl Disassembler<'_> {
    /// Render immediate operand `n` with its symbolic name where one is known, falling back
    /// to the raw number.
    #[must_use]
    pub fn format_arg(&self, n: usize) -> Option<String> {
        let value = self.arg(n)?;
        let ain = self.ain();

        let symbolic = match self.arg_type(n)? {
            ArgType::Int | ArgType::Switch => None,
            ArgType::Float => Some(format!("{:.6}", f32::from_bits(value as u32))),
            ArgType::Addr => Some(format!("{value:#x}")),
            ArgType::Func => index(value)
                .and_then(|i| ain.function(i))
                .map(|f| f.name.clone()),
            ArgType::String => index(value).and_then(|i| ain.string(i)).map(quoted),
            ArgType::Msg => index(value).and_then(|i| ain.message(i)).map(quoted),
            ArgType::Local => self
                .current_function()
                .and_then(|f| ain.function(f))
                .zip(index(value))
                .and_then(|(f, i)| f.vars.get(i))
                .map(|var| var.name.clone()),
            ArgType::Global => index(value)
                .and_then(|i| ain.global(i))
                .map(|g| g.name.clone()),
            ArgType::Struct => index(value)
                .and_then(|i| ain.structure(i))
                .map(|s| s.name.clone()),
            ArgType::Syscall => syscall(value).map(|sys| sys.name.to_string()),
            ArgType::Hll => index(value)
                .and_then(|i| ain.library(i))
                .map(|lib| lib.name.clone()),
            ArgType::HllFunc => {
                let library = n
                    .checked_sub(1)
                    .filter(|&prev| self.arg_type(prev) == Some(ArgType::Hll))
                    .and_then(|prev| self.arg(prev))
                    .and_then(index)
                    .and_then(|i| ain.library(i));
                library
                    .zip(index(value))
                    .and_then(|(lib, i)| lib.functions.get(i))
                    .map(|f| f.name.clone())
            }
            ArgType::File => index(value).and_then(|i| ain.filename(i)).map(quoted),
            ArgType::Dlg => index(value)
                .and_then(|i| ain.delegate(i))
                .map(|d| d.name.clone()),
        };

        Some(symbolic.unwrap_or_else(|| value.to_string()))
    }

    /// Render the current instruction as `MNEMONIC arg, arg, ...`.
    ///
    /// The [`crate::disassembler::SENTINEL`] renders as `<none>`.
    #[must_use]
    pub fn format(&self) -> String {
        let mut out = self.instruction().to_string();
        for n in 0..self.nr_args() {
            let separator = if n == 0 { " " } else { ", " };
            let arg = self.format_arg(n).unwrap_or_else(|| "?".to_string());
            let _ = write!(out, "{separator}{arg}");
        }
        out
    }
}
