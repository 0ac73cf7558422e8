use crate::{
    file::parser::Parser,
    metadata::{
        symbols::ReadContext,
        types::{read_type, render_type, DataKind, TypeDescriptor, TypeNames},
    },
    Result,
};

/// Where a variable lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableKind {
    /// Function argument or local
    Local,
    /// Structure member
    Member,
    /// Global variable
    Global,
}

/// A literal initial value.
#[derive(Debug, Clone, PartialEq)]
pub enum InitValue {
    /// Integer-like kinds (int, bool, lint, enum, ...)
    Int(i32),
    /// Float kind, reinterpreted from the stored bits
    Float(f32),
    /// String kind
    String(String),
}

impl InitValue {
    /// Interpret a stored 32-bit value according to `kind`.
    #[must_use]
    pub fn from_bits(kind: DataKind, bits: i32) -> Self {
        if kind == DataKind::Float {
            InitValue::Float(f32::from_bits(bits as u32))
        } else {
            InitValue::Int(bits)
        }
    }
}

/// A local, member or global variable.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    /// Variable name
    pub name: String,
    /// Secondary name (version 12+)
    pub name2: Option<String>,
    /// Declared type
    pub value_type: TypeDescriptor,
    /// Literal initial value, if any
    pub initval: Option<InitValue>,
    /// Global group index (globals of version 5+ only)
    pub group_index: i32,
    /// Storage class
    pub kind: VariableKind,
}

impl Variable {
    /// A variable of `value_type` without initial value.
    #[must_use]
    pub fn new(name: impl Into<String>, value_type: TypeDescriptor, kind: VariableKind) -> Self {
        Variable {
            name: name.into(),
            name2: None,
            value_type,
            initval: None,
            group_index: 0,
            kind,
        }
    }
}

fn read_name2(parser: &mut Parser<'_>, ctx: &ReadContext) -> Result<Option<String>> {
    if ctx.version.gte(12, 0) {
        Ok(Some(parser.read_cstring(ctx.decoder)?))
    } else {
        Ok(None)
    }
}

/// Read `count` function-local or member variables.
///
/// From version 8 on, each variable carries a `has_initval` flag followed by the value when
/// the kind stores one.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] on truncation or [`crate::Error::Invalid`] for an
/// unknown data type.
pub fn read_variables(
    parser: &mut Parser<'_>,
    ctx: &ReadContext,
    count: usize,
    kind: VariableKind,
) -> Result<Vec<Variable>> {
    let mut vars = Vec::with_capacity(count);
    for _ in 0..count {
        let name = parser.read_cstring(ctx.decoder)?;
        let name2 = read_name2(parser, ctx)?;
        let value_type = read_type(parser, ctx.version, ctx.max_type_depth)?;

        let mut initval = None;
        if ctx.version.gte(8, 0) {
            let has_initval = parser.read_i32()?;
            if has_initval != 0 {
                if has_initval != 1 {
                    log::warn!(
                        "variable '{}': has_initval is not a boolean: {}",
                        name,
                        has_initval
                    );
                }
                initval = read_initval(parser, ctx, value_type.kind)?;
            }
        }

        vars.push(Variable {
            name,
            name2,
            value_type,
            initval,
            group_index: 0,
            kind,
        });
    }
    Ok(vars)
}

fn read_initval(parser: &mut Parser<'_>, ctx: &ReadContext, kind: DataKind) -> Result<Option<InitValue>> {
    if kind == DataKind::String {
        return Ok(Some(InitValue::String(parser.read_cstring(ctx.decoder)?)));
    }
    if !kind.carries_initval() {
        return Ok(None);
    }
    Ok(Some(InitValue::from_bits(kind, parser.read_i32()?)))
}

/// Read `count` global variables.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] on truncation or [`crate::Error::Invalid`] for an
/// unknown data type.
pub fn read_globals(parser: &mut Parser<'_>, ctx: &ReadContext, count: usize) -> Result<Vec<Variable>> {
    let mut globals = Vec::with_capacity(count);
    for _ in 0..count {
        let name = parser.read_cstring(ctx.decoder)?;
        let name2 = read_name2(parser, ctx)?;
        let value_type = read_type(parser, ctx.version, ctx.max_type_depth)?;
        let group_index = if ctx.version.gte(5, 0) {
            parser.read_i32()?
        } else {
            0
        };

        globals.push(Variable {
            name,
            name2,
            value_type,
            initval: None,
            group_index,
            kind: VariableKind::Global,
        });
    }
    Ok(globals)
}

/// Render a variable declaration: `"<type> <name>"` plus ` = <value>` when it has an
/// initial value. Floats print with six decimals.
///
/// # Examples
///
/// ```rust
/// use ainscope::metadata::symbols::{render_variable, InitValue, Variable, VariableKind};
/// use ainscope::metadata::types::{DataKind, TypeDescriptor};
///
/// let mut var = Variable::new("speed", TypeDescriptor::new(DataKind::Float), VariableKind::Global);
/// var.initval = Some(InitValue::Float(1.5));
/// assert_eq!(render_variable(None, &var), "float speed = 1.500000");
/// ```
#[must_use]
pub fn render_variable(names: Option<&dyn TypeNames>, var: &Variable) -> String {
    let mut out = format!("{} {}", render_type(names, Some(&var.value_type)), var.name);
    if var.value_type.kind == DataKind::Delegate || var.value_type.kind.is_ref() {
        return out;
    }
    match &var.initval {
        Some(InitValue::String(s)) => out.push_str(&format!(" = \"{s}\"")),
        Some(InitValue::Float(f)) => out.push_str(&format!(" = {f:.6}")),
        Some(InitValue::Int(i)) => out.push_str(&format!(" = {i}")),
        None => {}
    }
    out
}
