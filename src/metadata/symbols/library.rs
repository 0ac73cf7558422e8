use crate::{
    file::parser::Parser,
    metadata::{
        symbols::ReadContext,
        types::{read_hll_type, TypeDescriptor},
    },
    Result,
};

/// Upper bound on the argument count of a host function.
pub const MAX_HLL_ARGUMENTS: usize = 100;

/// An argument of a host function.
#[derive(Debug, Clone, PartialEq)]
pub struct HllArgument {
    /// Argument name
    pub name: String,
    /// Argument type
    pub value_type: TypeDescriptor,
}

/// A function implemented by the host runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct HllFunction {
    /// Function name
    pub name: String,
    /// Return type
    pub return_type: TypeDescriptor,
    /// Ordered arguments
    pub arguments: Vec<HllArgument>,
}

/// A host library: a named group of host functions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Library {
    /// Library name
    pub name: String,
    /// Declared functions
    pub functions: Vec<HllFunction>,
}

impl Library {
    /// An empty library.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Library {
            name: name.into(),
            functions: Vec::new(),
        }
    }

    /// Index of the function called `name`.
    #[must_use]
    pub fn function_index(&self, name: &str) -> Option<usize> {
        self.functions.iter().position(|f| f.name == name)
    }
}

/// Read the body of an `HLL0` section.
///
/// Types are stored in full from version 14 on; earlier containers store only the data
/// kind.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] on truncation or [`crate::Error::Invalid`] for bad
/// counts (including more than [`MAX_HLL_ARGUMENTS`] arguments) and unknown data types.
pub fn read_libraries(parser: &mut Parser<'_>, ctx: &ReadContext) -> Result<Vec<Library>> {
    let count = parser.read_count()?;
    let mut libraries = Vec::with_capacity(count);
    for _ in 0..count {
        let name = parser.read_cstring(ctx.decoder)?;
        let nr_functions = parser.read_count()?;
        let mut functions = Vec::with_capacity(nr_functions);
        for _ in 0..nr_functions {
            let fn_name = parser.read_cstring(ctx.decoder)?;
            let return_type = read_hll_type(parser, ctx.version, ctx.max_type_depth)?;

            let nr_arguments = parser.read_i32()?;
            let nr_arguments = match usize::try_from(nr_arguments) {
                Ok(n) if n <= MAX_HLL_ARGUMENTS => n,
                _ => {
                    return Err(invalid_error!(
                        "{}.{}: too many arguments: {}",
                        name,
                        fn_name,
                        nr_arguments
                    ))
                }
            };

            let mut arguments = Vec::with_capacity(nr_arguments);
            for _ in 0..nr_arguments {
                arguments.push(HllArgument {
                    name: parser.read_cstring(ctx.decoder)?,
                    value_type: read_hll_type(parser, ctx.version, ctx.max_type_depth)?,
                });
            }

            functions.push(HllFunction {
                name: fn_name,
                return_type,
                arguments,
            });
        }
        libraries.push(Library { name, functions });
    }
    Ok(libraries)
}
