//! Options controlling how a container is loaded.

use crate::{
    file::parser::{decode_lossy, TextDecoder},
    metadata::symbols::DEFAULT_MAX_TYPE_DEPTH,
};

/// Configuration for [`crate::metadata::ain::Ain::from_mem_with`] and
/// [`crate::metadata::ain::Ain::from_file_with`].
///
/// # Examples
///
/// ```rust,no_run
/// use ainscope::{Ain, LoadOptions};
///
/// fn sjis_to_utf8(bytes: &[u8]) -> String {
///     // plug in a real converter here
///     String::from_utf8_lossy(bytes).into_owned()
/// }
///
/// let options = LoadOptions {
///     decoder: sjis_to_utf8,
///     ..LoadOptions::default()
/// };
/// let ain = Ain::from_file_with("System40.ain", options)?;
/// # Ok::<(), ainscope::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    /// Converts every string read from the container.
    pub decoder: TextDecoder,
    /// Recover enum member names from their stringifier functions after loading.
    pub recover_enums: bool,
    /// Infer `struct_type` / `enum_type` of functions from their names.
    pub infer_membership: bool,
    /// Bound on nested type descriptors.
    pub max_type_depth: usize,
    /// Treat `FNCT` / `DELG` recorded sizes that disagree with their content as invalid
    /// instead of warning.
    pub strict_sizes: bool,
}

impl LoadOptions {
    /// Only the mandatory parse: no heuristic post-passes.
    #[must_use]
    pub fn minimal() -> Self {
        LoadOptions {
            recover_enums: false,
            infer_membership: false,
            ..LoadOptions::default()
        }
    }

    /// Everything enabled and recorded section sizes enforced.
    #[must_use]
    pub fn strict() -> Self {
        LoadOptions {
            strict_sizes: true,
            ..LoadOptions::default()
        }
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        LoadOptions {
            decoder: decode_lossy,
            recover_enums: true,
            infer_membership: true,
            max_type_depth: DEFAULT_MAX_TYPE_DEPTH,
            strict_sizes: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets() {
        let default = LoadOptions::default();
        assert!(default.recover_enums);
        assert!(default.infer_membership);
        assert!(!default.strict_sizes);
        assert_eq!((default.decoder)(b"abc"), "abc");

        let minimal = LoadOptions::minimal();
        assert!(!minimal.recover_enums);
        assert!(!minimal.infer_membership);

        assert!(LoadOptions::strict().strict_sizes);
    }
}
