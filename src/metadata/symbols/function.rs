use bitflags::bitflags;

use crate::{
    file::parser::Parser,
    metadata::{
        symbols::{
            variable::{read_variables, Variable, VariableKind},
            ReadContext,
        },
        types::{read_return_type, DataKind, TypeDescriptor},
    },
    Result,
};

bitflags! {
    /// Function attributes stored as separate on-disk fields.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FunctionFlags: u8 {
        /// Scenario label function (versions 2 to 6)
        const LABEL = 0x01;
        /// Compiler-generated lambda (version 11+)
        const LAMBDA = 0x02;
    }
}

/// A bytecode function.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    /// Code address of the first instruction after `FUNC`
    pub address: u32,
    /// Function name; methods are spelled `Struct@method`
    pub name: String,
    /// Label / lambda flags
    pub flags: FunctionFlags,
    /// Return type
    pub return_type: TypeDescriptor,
    /// Number of leading `vars` that are arguments
    pub nr_args: usize,
    /// Arguments followed by locals
    pub vars: Vec<Variable>,
    /// Checksum stored by the compiler (version 2+)
    pub crc: i32,
    /// Owning structure, inferred from the name
    pub struct_type: Option<usize>,
    /// Owning enum, inferred from the name
    pub enum_type: Option<usize>,
}

impl Function {
    /// An empty function returning void.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Function {
            address: 0,
            name: name.into(),
            flags: FunctionFlags::empty(),
            return_type: TypeDescriptor::new(DataKind::Void),
            nr_args: 0,
            vars: Vec::new(),
            crc: 0,
            struct_type: None,
            enum_type: None,
        }
    }

    /// The declared arguments.
    #[must_use]
    pub fn args(&self) -> &[Variable] {
        &self.vars[..self.nr_args.min(self.vars.len())]
    }

    /// `true` for scenario label functions.
    #[must_use]
    pub fn is_label(&self) -> bool {
        self.flags.contains(FunctionFlags::LABEL)
    }

    /// `true` for lambdas.
    #[must_use]
    pub fn is_lambda(&self) -> bool {
        self.flags.contains(FunctionFlags::LAMBDA)
    }
}

/// A named function signature, from the `FNCT` (function types) or `DELG` (delegates)
/// section.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionType {
    /// Signature name
    pub name: String,
    /// Return type
    pub return_type: TypeDescriptor,
    /// Number of leading `variables` that are arguments
    pub nr_arguments: usize,
    /// Arguments followed by locals
    pub variables: Vec<Variable>,
}

impl FunctionType {
    /// An empty signature returning void.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        FunctionType {
            name: name.into(),
            return_type: TypeDescriptor::new(DataKind::Void),
            nr_arguments: 0,
            variables: Vec::new(),
        }
    }
}

fn read_flag(parser: &mut Parser<'_>, what: &str, name: &str) -> Result<bool> {
    let value = parser.read_i32()?;
    if value != 0 && value != 1 {
        log::warn!("function '{}': {} is not a boolean: {}", name, what, value);
    }
    Ok(value != 0)
}

fn read_non_negative(parser: &mut Parser<'_>, what: &str) -> Result<usize> {
    let value = parser.read_i32()?;
    usize::try_from(value).map_err(|_| invalid_error!("Negative {}: {}", what, value))
}

/// Read one `FUNC` entry.
///
/// Some broken containers pad function names with leading `0xFF` bytes; these are skipped
/// with a warning.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] on truncation or [`crate::Error::Invalid`] for
/// negative counts and unknown data types.
pub fn read_function(parser: &mut Parser<'_>, ctx: &ReadContext) -> Result<Function> {
    let address = parser.read_le::<u32>()?;

    if parser.peek_byte()? == 0xFF {
        let start = parser.pos();
        while parser.peek_byte()? == 0xFF {
            parser.advance_by(1)?;
        }
        log::warn!(
            "skipped {} junk bytes before function name at {:#x}",
            parser.pos() - start,
            start
        );
    }
    let name = parser.read_cstring(ctx.decoder)?;

    let mut flags = FunctionFlags::empty();
    if ctx.version.gte(2, 0) && ctx.version.lt(7, 0) && parser.read_i32()? != 0 {
        flags |= FunctionFlags::LABEL;
    }

    let return_type = read_return_type(parser, ctx.version, ctx.max_type_depth)?;
    let nr_args = read_non_negative(parser, "argument count")?;
    let nr_vars = parser.read_count()?;

    if ctx.version.gte(11, 0) && read_flag(parser, "is_lambda", &name)? {
        flags |= FunctionFlags::LAMBDA;
    }

    let crc = if ctx.version.gte(2, 0) {
        parser.read_i32()?
    } else {
        0
    };

    let vars = read_variables(parser, ctx, nr_vars, VariableKind::Local)?;

    Ok(Function {
        address,
        name,
        flags,
        return_type,
        nr_args,
        vars,
        crc,
        struct_type: None,
        enum_type: None,
    })
}

/// Read the body of a `FNCT` or `DELG` section, after its recorded size.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] on truncation or [`crate::Error::Invalid`] for
/// negative counts and unknown data types.
pub fn read_function_types(parser: &mut Parser<'_>, ctx: &ReadContext) -> Result<Vec<FunctionType>> {
    let count = parser.read_count()?;
    let mut types = Vec::with_capacity(count);
    for _ in 0..count {
        let name = parser.read_cstring(ctx.decoder)?;
        let return_type = read_return_type(parser, ctx.version, ctx.max_type_depth)?;
        let nr_arguments = read_non_negative(parser, "argument count")?;
        let nr_variables = parser.read_count()?;
        let variables = read_variables(parser, ctx, nr_variables, VariableKind::Local)?;
        types.push(FunctionType {
            name,
            return_type,
            nr_arguments,
            variables,
        });
    }
    Ok(types)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{metadata::version::Version, test::AinBuilder};

    #[test]
    fn read_v4_function() {
        let mut b = AinBuilder::new();
        b.i32(0x20).cstring("main").i32(1);
        b.i32(DataKind::Int.as_i32()).i32(-1);
        b.i32(1).i32(2).i32(0x1234);
        b.cstring("a").type_desc(DataKind::Int, -1, 0);
        b.cstring("b").type_desc(DataKind::String, -1, 0);
        let data = b.build();

        let ctx = ReadContext::new(Version::new(4, 0));
        let mut parser = Parser::new(&data);
        let f = read_function(&mut parser, &ctx).unwrap();
        assert!(!parser.has_more_data());

        assert_eq!(f.address, 0x20);
        assert_eq!(f.name, "main");
        assert!(f.is_label());
        assert!(!f.is_lambda());
        assert_eq!(f.return_type.kind, DataKind::Int);
        assert_eq!(f.crc, 0x1234);
        assert_eq!(f.args().len(), 1);
        assert_eq!(f.vars[1].name, "b");
    }

    #[test]
    fn read_v11_function_skips_junk() {
        let mut b = AinBuilder::new();
        b.i32(6).bytes(&[0xFF, 0xFF]).cstring("f");
        b.type_desc(DataKind::Void, -1, 0);
        b.i32(0).i32(0).i32(1).i32(7);
        let data = b.build();

        let ctx = ReadContext::new(Version::new(11, 0));
        let mut parser = Parser::new(&data);
        let f = read_function(&mut parser, &ctx).unwrap();
        assert_eq!(f.name, "f");
        assert!(f.is_lambda());
        assert!(!f.is_label());
        assert_eq!(f.crc, 7);
        assert!(!parser.has_more_data());
    }

    #[test]
    fn negative_argument_count() {
        let mut b = AinBuilder::new();
        b.i32(0).cstring("f").i32(0).i32(-1).i32(-2).i32(0).i32(0);
        let data = b.build();

        let ctx = ReadContext::new(Version::new(8, 0));
        let mut parser = Parser::new(&data);
        assert!(read_function(&mut parser, &ctx).unwrap_err().is_invalid());
    }

    #[test]
    fn read_delegates() {
        let mut b = AinBuilder::new();
        b.i32(1).cstring("Callback").type_desc(DataKind::Void, -1, 0).i32(1).i32(1);
        b.cstring("x").cstring("").type_desc(DataKind::Int, -1, 0).i32(0);
        let data = b.build();

        let ctx = ReadContext::new(Version::new(12, 0));
        let mut parser = Parser::new(&data);
        let types = read_function_types(&mut parser, &ctx).unwrap();
        assert_eq!(types.len(), 1);
        assert_eq!(types[0].name, "Callback");
        assert_eq!(types[0].nr_arguments, 1);
        assert_eq!(types[0].variables[0].name, "x");
        assert!(!parser.has_more_data());
    }
}
