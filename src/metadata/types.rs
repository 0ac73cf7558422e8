//! Type descriptors of variables, return values and host-function arguments.
//!
//! A [`TypeDescriptor`] pairs a [`DataKind`] with an optional structure (or enum) index and
//! a rank. The meaning of the rank depends on the container version:
//!
//! - before version 11 it is a literal array depth (`array<int>@2`),
//! - from version 11 on it is a flag: when set, one nested descriptor follows on disk and
//!   describes the element type of a generic container (`array<T>`, `wrap<T>`, ...).
//!
//! Rendering goes through [`TypeNames`] so a descriptor can be turned into text with or
//! without a container at hand.

use strum::{EnumCount, EnumIter, FromRepr};

use crate::{file::parser::Parser, metadata::version::Version, Error, Result};

/// Numeric data type tags, as stored on disk.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr, EnumIter, EnumCount)]
#[repr(i32)]
pub enum DataKind {
    Void = 0,
    Int = 10,
    Float = 11,
    String = 12,
    Struct = 13,
    ArrayInt = 14,
    ArrayFloat = 15,
    ArrayString = 16,
    ArrayStruct = 17,
    RefInt = 18,
    RefFloat = 19,
    RefString = 20,
    RefStruct = 21,
    RefArrayInt = 22,
    RefArrayFloat = 23,
    RefArrayString = 24,
    RefArrayStruct = 25,
    IMainSystem = 26,
    FuncType = 27,
    ArrayFuncType = 30,
    RefFuncType = 31,
    RefArrayFuncType = 32,
    Bool = 47,
    ArrayBool = 50,
    RefBool = 51,
    RefArrayBool = 52,
    LongInt = 55,
    ArrayLongInt = 58,
    RefLongInt = 59,
    RefArrayLongInt = 60,
    Delegate = 63,
    ArrayDelegate = 66,
    RefDelegate = 67,
    RefArrayDelegate = 69,
    HllFunc71 = 71,
    HllParam = 74,
    RefHllParam = 75,
    Array = 79,
    RefArray = 80,
    Wrap = 82,
    Option = 86,
    Unknown87 = 87,
    Iface = 89,
    Enum2 = 91,
    Enum = 92,
    RefEnum = 93,
    HllFunc = 95,
    IfaceWrap = 100,
}

impl DataKind {
    /// Decode a numeric tag.
    ///
    /// # Errors
    /// Returns [`crate::Error::Invalid`] for a value outside the known set.
    pub fn from_i32(value: i32) -> Result<Self> {
        DataKind::from_repr(value).ok_or_else(|| invalid_error!("Unknown data type: {}", value))
    }

    /// The on-disk tag.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Reference kinds. Variables of these kinds never carry an initial value.
    #[must_use]
    pub fn is_ref(self) -> bool {
        matches!(
            self,
            DataKind::RefInt
                | DataKind::RefFloat
                | DataKind::RefString
                | DataKind::RefStruct
                | DataKind::RefArrayInt
                | DataKind::RefArrayFloat
                | DataKind::RefArrayString
                | DataKind::RefArrayStruct
                | DataKind::RefFuncType
                | DataKind::RefArrayFuncType
                | DataKind::RefBool
                | DataKind::RefArrayBool
                | DataKind::RefLongInt
                | DataKind::RefArrayLongInt
                | DataKind::RefDelegate
                | DataKind::RefArrayDelegate
                | DataKind::RefArray
        )
    }

    /// The generic containers whose element type is a nested descriptor.
    #[must_use]
    pub fn is_container(self) -> bool {
        matches!(
            self,
            DataKind::Array | DataKind::RefArray | DataKind::Wrap | DataKind::Option
        )
    }

    /// Kinds whose rendering ends in `>` when used as a container element.
    fn closes_with_angle(self) -> bool {
        self.is_container() || self == DataKind::IfaceWrap
    }

    /// Whether a variable of this kind stores an initial value on disk.
    #[must_use]
    pub fn carries_initval(self) -> bool {
        !(self.is_ref()
            || matches!(
                self,
                DataKind::Struct | DataKind::Delegate | DataKind::Array
            ))
    }
}

/// Resolves structure and enum indices to names while rendering types.
pub trait TypeNames {
    /// Name of structure `index`, if it exists.
    fn struct_name(&self, index: usize) -> Option<&str>;
    /// Name of enum `index`, if it exists.
    fn enum_name(&self, index: usize) -> Option<&str>;
}

/// A (possibly nested) type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    /// Data kind
    pub kind: DataKind,
    /// Structure or enum index for struct-like kinds, `None` when absent (-1 on disk)
    pub struct_index: Option<usize>,
    /// Array depth before version 11; nesting flag (0/1) from version 11 on
    pub rank: i32,
    /// Element type of a generic container (version 11+)
    pub nested: Option<Box<TypeDescriptor>>,
}

impl TypeDescriptor {
    /// A scalar type with no structure reference.
    #[must_use]
    pub fn new(kind: DataKind) -> Self {
        TypeDescriptor {
            kind,
            struct_index: None,
            rank: 0,
            nested: None,
        }
    }

    /// A struct-like type referring to `index`.
    #[must_use]
    pub fn with_struct(kind: DataKind, index: usize) -> Self {
        TypeDescriptor {
            struct_index: Some(index),
            ..TypeDescriptor::new(kind)
        }
    }

    /// A version 11+ container of `inner`.
    #[must_use]
    pub fn container(kind: DataKind, inner: TypeDescriptor) -> Self {
        TypeDescriptor {
            kind,
            struct_index: None,
            rank: 1,
            nested: Some(Box::new(inner)),
        }
    }

    /// Render to text. See [`render_type`].
    #[must_use]
    pub fn render(&self, names: Option<&dyn TypeNames>) -> String {
        render_type(names, Some(self))
    }
}

/// Convert an on-disk index where -1 (or any negative) means "none".
#[must_use]
pub fn optional_index(value: i32) -> Option<usize> {
    usize::try_from(value).ok()
}

/// Read a full type descriptor.
///
/// From version 11 on, a nonzero rank means a nested element type follows. Ranks other than
/// 0 or 1 are tolerated with a warning and treated as 1. `max_depth` bounds the nesting.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] on truncation, [`crate::Error::Invalid`] for an
/// unknown kind and [`crate::Error::RecursionLimit`] when nesting exceeds `max_depth`.
pub fn read_type(parser: &mut Parser<'_>, version: Version, max_depth: usize) -> Result<TypeDescriptor> {
    read_type_at_depth(parser, version, max_depth, 0)
}

fn read_type_at_depth(
    parser: &mut Parser<'_>,
    version: Version,
    max_depth: usize,
    depth: usize,
) -> Result<TypeDescriptor> {
    if depth > max_depth {
        return Err(Error::RecursionLimit(max_depth));
    }

    let kind = DataKind::from_i32(parser.read_i32()?)?;
    let struct_index = optional_index(parser.read_i32()?);
    let mut rank = parser.read_i32()?;

    let mut nested = None;
    if version.gte(11, 0) {
        if rank != 0 && rank != 1 {
            log::warn!("non-boolean rank flag {} at {:#x}", rank, parser.pos() - 4);
            rank = 1;
        }
        if rank == 1 {
            nested = Some(Box::new(read_type_at_depth(
                parser,
                version,
                max_depth,
                depth + 1,
            )?));
        }
    }

    Ok(TypeDescriptor {
        kind,
        struct_index,
        rank,
        nested,
    })
}

/// Read a function return type: a full descriptor from version 11 on, otherwise only the
/// kind and structure index.
///
/// # Errors
/// See [`read_type`].
pub fn read_return_type(
    parser: &mut Parser<'_>,
    version: Version,
    max_depth: usize,
) -> Result<TypeDescriptor> {
    if version.gte(11, 0) {
        return read_type(parser, version, max_depth);
    }

    let kind = DataKind::from_i32(parser.read_i32()?)?;
    let struct_index = optional_index(parser.read_i32()?);
    Ok(TypeDescriptor {
        struct_index,
        ..TypeDescriptor::new(kind)
    })
}

/// Read a host-function type: a full descriptor from version 14 on, otherwise only the kind.
///
/// # Errors
/// See [`read_type`].
pub fn read_hll_type(
    parser: &mut Parser<'_>,
    version: Version,
    max_depth: usize,
) -> Result<TypeDescriptor> {
    if version.gte(14, 0) {
        return read_type(parser, version, max_depth);
    }

    Ok(TypeDescriptor::new(DataKind::from_i32(parser.read_i32()?)?))
}

fn with_rank(base: &str, rank: i32) -> String {
    if rank <= 1 {
        base.to_string()
    } else {
        format!("{base}@{rank}")
    }
}

/// Render a type to its source-level spelling.
///
/// Structure and enum references are resolved through `names` when available, otherwise a
/// placeholder (`hll_struct`, `interface`, `enum#92`, ...) is used. A missing descriptor
/// renders as `?`. Nested generic containers get a space before the closing `>` so the
/// output never contains `>>`.
///
/// # Examples
///
/// ```rust
/// use ainscope::metadata::types::{render_type, DataKind, TypeDescriptor};
///
/// let inner = TypeDescriptor::container(DataKind::Array, TypeDescriptor::new(DataKind::Int));
/// let outer = TypeDescriptor::container(DataKind::Array, inner);
/// assert_eq!(render_type(None, Some(&outer)), "array<array<int> >");
/// ```
#[must_use]
pub fn render_type(names: Option<&dyn TypeNames>, ty: Option<&TypeDescriptor>) -> String {
    let Some(ty) = ty else {
        return "?".to_string();
    };

    let struct_name = ty
        .struct_index
        .and_then(|index| names.and_then(|names| names.struct_name(index)));
    let enum_name = ty
        .struct_index
        .and_then(|index| names.and_then(|names| names.enum_name(index)));

    match ty.kind {
        DataKind::Void => "void".to_string(),
        DataKind::Int => "int".to_string(),
        DataKind::Float => "float".to_string(),
        DataKind::String => "string".to_string(),
        DataKind::Struct => struct_name.unwrap_or("hll_struct").to_string(),
        DataKind::ArrayInt => with_rank("array<int>", ty.rank),
        DataKind::ArrayFloat => with_rank("array<float>", ty.rank),
        DataKind::ArrayString => with_rank("array<string>", ty.rank),
        DataKind::ArrayStruct => match struct_name {
            Some(name) => with_rank(&format!("array<{name}>"), ty.rank),
            None => with_rank("array<struct>", ty.rank),
        },
        DataKind::RefInt => "ref int".to_string(),
        DataKind::RefFloat => "ref float".to_string(),
        DataKind::RefString => "ref string".to_string(),
        DataKind::RefStruct => format!("ref {}", struct_name.unwrap_or("hll_struct")),
        DataKind::RefArrayInt => with_rank("ref array<int>", ty.rank),
        DataKind::RefArrayFloat => with_rank("ref array<float>", ty.rank),
        DataKind::RefArrayString => with_rank("ref array<string>", ty.rank),
        DataKind::RefArrayStruct => match struct_name {
            Some(name) => with_rank(&format!("ref array<{name}>"), ty.rank),
            None => "ref array<hll_struct>".to_string(),
        },
        DataKind::IMainSystem => "imain_system".to_string(),
        DataKind::FuncType => "functype".to_string(),
        DataKind::ArrayFuncType => with_rank("array<functype>", ty.rank),
        DataKind::RefFuncType => "ref functype".to_string(),
        DataKind::RefArrayFuncType => with_rank("ref array<functype>", ty.rank),
        DataKind::Bool => "bool".to_string(),
        DataKind::ArrayBool => with_rank("array<bool>", ty.rank),
        DataKind::RefBool => "ref bool".to_string(),
        DataKind::RefArrayBool => with_rank("ref array<bool>", ty.rank),
        DataKind::LongInt => "lint".to_string(),
        DataKind::ArrayLongInt => with_rank("array<lint>", ty.rank),
        DataKind::RefLongInt => "ref lint".to_string(),
        DataKind::RefArrayLongInt => with_rank("ref array<lint>", ty.rank),
        DataKind::Delegate => "delegate".to_string(),
        DataKind::ArrayDelegate => with_rank("array<delegate>", ty.rank),
        DataKind::RefDelegate => "ref delegate".to_string(),
        DataKind::RefArrayDelegate => with_rank("ref array<delegate>", ty.rank),
        DataKind::HllParam => "hll_param".to_string(),
        DataKind::RefHllParam => "ref hll_param".to_string(),
        DataKind::Array | DataKind::RefArray | DataKind::Wrap | DataKind::Option => {
            render_container(names, ty)
        }
        DataKind::Unknown87 => "type_87".to_string(),
        DataKind::Iface => struct_name.unwrap_or("interface").to_string(),
        DataKind::Enum2 | DataKind::Enum => match enum_name {
            Some(name) => format!("{}#{}", name, ty.kind.as_i32()),
            None => format!("enum#{}", ty.kind.as_i32()),
        },
        DataKind::RefEnum => format!("ref {}", enum_name.unwrap_or("enum")),
        DataKind::HllFunc71 => "hll_func_71".to_string(),
        DataKind::HllFunc => "hll_func".to_string(),
        DataKind::IfaceWrap => format!("iwrap<{}>", struct_name.unwrap_or("?")),
    }
}

fn render_container(names: Option<&dyn TypeNames>, ty: &TypeDescriptor) -> String {
    let container = match ty.kind {
        DataKind::Array => "array",
        DataKind::RefArray => "ref array",
        DataKind::Wrap => "wrap",
        _ => "option",
    };

    let inner = ty.nested.as_deref();
    let rendered = render_type(names, inner);
    if inner.is_some_and(|inner| inner.kind.closes_with_angle()) {
        format!("{container}<{rendered} >")
    } else {
        format!("{container}<{rendered}>")
    }
}
