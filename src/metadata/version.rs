//! Container version gate.
//!
//! Every layout decision in the section readers and every version-dependent opcode shape is
//! made through [`Version::gte`] / [`Version::lt`] on the version read from the `VERS`
//! section. The value is passed explicitly to each decode function.

use std::fmt;

/// A `(major, minor)` container version.
///
/// Ordering is lexicographic: major first, then minor.
///
/// # Examples
///
/// ```rust
/// use ainscope::metadata::version::Version;
///
/// let v = Version::new(14, 1);
/// assert!(v.gte(14, 1));
/// assert!(v.gte(11, 0));
/// assert!(v.lt(15, 0));
/// assert_eq!(v.to_string(), "14.1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Version {
    /// Major version, as stored in the `VERS` section.
    pub major: i32,
    /// Minor version. Only meaningful for major 6 and 14.
    pub minor: i32,
}

impl Version {
    /// Create a version from its parts.
    #[must_use]
    pub const fn new(major: i32, minor: i32) -> Self {
        Version { major, minor }
    }

    /// Version for a freshly read `VERS` value. Major 14 defaults to minor 1.
    #[must_use]
    pub const fn from_major(major: i32) -> Self {
        Version {
            major,
            minor: if major == 14 { 1 } else { 0 },
        }
    }

    /// `self >= (major, minor)`
    #[must_use]
    pub const fn gte(&self, major: i32, minor: i32) -> bool {
        self.major > major || (self.major == major && self.minor >= minor)
    }

    /// `self < (major, minor)`
    #[must_use]
    pub const fn lt(&self, major: i32, minor: i32) -> bool {
        !self.gte(major, minor)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// A known container whose on-disk minor version is ambiguous.
///
/// Version 14 containers carry no minor version. Readers assume 14.1 (which adds vtables to
/// structures), but a few titles shipped 14.0 layouts. They are recognized by a function
/// name that only they contain.
#[derive(Debug, Clone, Copy)]
pub struct MinorVersionQuirk {
    /// Where the marker comes from.
    pub origin: &'static str,
    /// The function name whose presence identifies the container.
    pub function: &'static str,
    /// Version the container claims after reading `VERS`.
    pub claimed: Version,
    /// Minor version to use instead.
    pub minor: i32,
}

/// Containers whose 14.1 default must be corrected to 14.0.
pub const MINOR_VERSION_QUIRKS: &[MinorVersionQuirk] = &[
    MinorVersionQuirk {
        origin: "Evenicle 2",
        function: "C_MedicaMenu@0",
        claimed: Version::new(14, 1),
        minor: 0,
    },
    MinorVersionQuirk {
        origin: "Haha Ranman",
        function: "CInvasionHexScene@0",
        claimed: Version::new(14, 1),
        minor: 0,
    },
    MinorVersionQuirk {
        origin: "14.0 marker function",
        function: "_ALICETOOLS_AINV14_00",
        claimed: Version::new(14, 1),
        minor: 0,
    },
];

/// Look up a minor version correction triggered by `function_name` under `version`.
#[must_use]
pub fn minor_version_quirk(version: Version, function_name: &str) -> Option<&'static MinorVersionQuirk> {
    MINOR_VERSION_QUIRKS
        .iter()
        .find(|quirk| quirk.claimed == version && quirk.function == function_name)
}

/// Name of the marker function [`crate::metadata::ain::Ain::new`] adds for a nonzero minor.
#[must_use]
pub fn version_marker_name(version: Version) -> String {
    format!("_ALICETOOLS_AINV{:02}_{:02}", version.major, version.minor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicates() {
        let v = Version::new(11, 0);
        assert!(v.gte(11, 0));
        assert!(v.gte(8, 5));
        assert!(!v.gte(11, 1));
        assert!(v.lt(12, 0));
        assert!(v.lt(11, 1));
        assert!(!v.lt(4, 0));
    }

    #[test]
    fn ordering() {
        assert!(Version::new(14, 0) < Version::new(14, 1));
        assert!(Version::new(6, 1) < Version::new(7, 0));
        assert_eq!(Version::new(4, 0).max(Version::new(4, 0)), Version::new(4, 0));
    }

    #[test]
    fn from_major() {
        assert_eq!(Version::from_major(14), Version::new(14, 1));
        assert_eq!(Version::from_major(12), Version::new(12, 0));
    }

    #[test]
    fn quirks() {
        let quirk = minor_version_quirk(Version::new(14, 1), "C_MedicaMenu@0").unwrap();
        assert_eq!(quirk.minor, 0);
        assert!(minor_version_quirk(Version::new(14, 1), "CInvasionHexScene@0").is_some());
        assert!(minor_version_quirk(Version::new(14, 0), "C_MedicaMenu@0").is_none());
        assert!(minor_version_quirk(Version::new(14, 1), "main").is_none());
    }

    #[test]
    fn marker_name() {
        assert_eq!(version_marker_name(Version::new(14, 0)), "_ALICETOOLS_AINV14_00");
        assert_eq!(version_marker_name(Version::new(6, 1)), "_ALICETOOLS_AINV06_01");
        let marker = version_marker_name(Version::new(14, 0));
        assert!(minor_version_quirk(Version::new(14, 1), &marker).is_some());
    }
}
