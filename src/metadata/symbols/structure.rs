use crate::{
    file::parser::Parser,
    metadata::{
        symbols::{
            variable::{read_variables, Variable, VariableKind},
            ReadContext,
        },
        types::optional_index,
    },
    Result,
};

/// An interface implemented by a structure (version 11+).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interface {
    /// Index of the interface structure
    pub struct_type: i32,
    /// Offset of the interface's methods in the implementing structure's vtable
    pub vtable_offset: i32,
}

/// A structure (class) declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Structure {
    /// Structure name
    pub name: String,
    /// Implemented interfaces
    pub interfaces: Vec<Interface>,
    /// Constructor function index
    pub constructor: Option<usize>,
    /// Destructor function index
    pub destructor: Option<usize>,
    /// Member variables
    pub members: Vec<Variable>,
    /// Virtual method function indices (version 14.1+)
    pub vmethods: Vec<i32>,
    /// Set when another structure implements this one as an interface
    pub is_interface: bool,
}

impl Structure {
    /// An empty structure without constructor or destructor.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Structure {
            name: name.into(),
            interfaces: Vec::new(),
            constructor: None,
            destructor: None,
            members: Vec::new(),
            vmethods: Vec::new(),
            is_interface: false,
        }
    }
}

/// Read the body of a `STRT` section and mark interface structures.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] on truncation or [`crate::Error::Invalid`] for bad
/// counts, unknown data types, or an interface reference outside the structure table.
pub fn read_structures(parser: &mut Parser<'_>, ctx: &ReadContext) -> Result<Vec<Structure>> {
    let count = parser.read_count()?;
    let mut structures = Vec::with_capacity(count);
    for _ in 0..count {
        let name = parser.read_cstring(ctx.decoder)?;

        let mut interfaces = Vec::new();
        if ctx.version.gte(11, 0) {
            let nr_interfaces = parser.read_count()?;
            interfaces.reserve(nr_interfaces);
            for _ in 0..nr_interfaces {
                interfaces.push(Interface {
                    struct_type: parser.read_i32()?,
                    vtable_offset: parser.read_i32()?,
                });
            }
        }

        let constructor = optional_index(parser.read_i32()?);
        let destructor = optional_index(parser.read_i32()?);
        let nr_members = parser.read_count()?;
        let members = read_variables(parser, ctx, nr_members, VariableKind::Member)?;

        let mut vmethods = Vec::new();
        if ctx.version.gte(14, 1) {
            let nr_vmethods = parser.read_count()?;
            vmethods.reserve(nr_vmethods);
            for _ in 0..nr_vmethods {
                vmethods.push(parser.read_i32()?);
            }
        }

        structures.push(Structure {
            name,
            interfaces,
            constructor,
            destructor,
            members,
            vmethods,
            is_interface: false,
        });
    }

    mark_interfaces(&mut structures)?;
    Ok(structures)
}

/// Set `is_interface` on every structure referenced from an interface list.
///
/// # Errors
/// Returns [`crate::Error::Invalid`] for a reference outside the table.
pub fn mark_interfaces(structures: &mut [Structure]) -> Result<()> {
    let mut referenced = Vec::new();
    for structure in structures.iter() {
        for iface in &structure.interfaces {
            match usize::try_from(iface.struct_type) {
                Ok(index) if index < structures.len() => referenced.push(index),
                _ => {
                    return Err(invalid_error!(
                        "Structure '{}' implements unknown interface {}",
                        structure.name,
                        iface.struct_type
                    ))
                }
            }
        }
    }

    for index in referenced {
        structures[index].is_interface = true;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{metadata::types::DataKind, metadata::version::Version, test::AinBuilder};

    fn v14_structures(minor: i32, iface_target: i32) -> Vec<u8> {
        let mut b = AinBuilder::new();
        b.i32(2);

        b.cstring("IFoo").i32(0).i32(-1).i32(-1).i32(0);
        if minor >= 1 {
            b.i32(0);
        }

        b.cstring("Foo").i32(1).i32(iface_target).i32(0).i32(3).i32(4).i32(1);
        b.cstring("x").cstring("").type_desc(DataKind::Int, -1, 0).i32(0);
        if minor >= 1 {
            b.i32(2).i32(5).i32(6);
        }
        b.build()
    }

    #[test]
    fn read_v14_1_structures() {
        let data = v14_structures(1, 0);
        let ctx = ReadContext::new(Version::new(14, 1));
        let mut parser = Parser::new(&data);
        let structures = read_structures(&mut parser, &ctx).unwrap();
        assert!(!parser.has_more_data());

        assert!(structures[0].is_interface);
        assert!(!structures[1].is_interface);
        assert_eq!(structures[0].constructor, None);
        assert_eq!(structures[1].constructor, Some(3));
        assert_eq!(structures[1].destructor, Some(4));
        assert_eq!(structures[1].members[0].kind, VariableKind::Member);
        assert_eq!(structures[1].vmethods, vec![5, 6]);
        assert_eq!(
            structures[1].interfaces,
            vec![Interface {
                struct_type: 0,
                vtable_offset: 0
            }]
        );
    }

    #[test]
    fn read_v14_0_structures_have_no_vtable() {
        let data = v14_structures(0, 0);
        let ctx = ReadContext::new(Version::new(14, 0));
        let mut parser = Parser::new(&data);
        let structures = read_structures(&mut parser, &ctx).unwrap();
        assert!(!parser.has_more_data());
        assert!(structures[1].vmethods.is_empty());
    }

    #[test]
    fn interface_out_of_range() {
        let data = v14_structures(1, 9);
        let ctx = ReadContext::new(Version::new(14, 1));
        let mut parser = Parser::new(&data);
        assert!(read_structures(&mut parser, &ctx).unwrap_err().is_invalid());
    }
}
