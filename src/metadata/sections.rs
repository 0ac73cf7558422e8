//! Section tags and the per-container section map.

use strum::{EnumCount, EnumIter, IntoEnumIterator};

/// A top-level section tag, in the order well-formed containers present them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount)]
pub enum SectionTag {
    /// `VERS`: major version
    Vers,
    /// `KEYC`: encryption keycode
    Keyc,
    /// `CODE`: bytecode
    Code,
    /// `FUNC`: functions
    Func,
    /// `GLOB`: globals
    Glob,
    /// `GSET`: global initial values
    Gset,
    /// `STRT`: structures
    Strt,
    /// `MSG0`: plain messages
    Msg0,
    /// `MSG1`: obfuscated messages
    Msg1,
    /// `MAIN`: main function index
    Main,
    /// `MSGF`: message function index
    Msgf,
    /// `HLL0`: host libraries
    Hll0,
    /// `SWI0`: switch tables
    Swi0,
    /// `GVER`: game version
    Gver,
    /// `SLBL`: scenario labels
    Slbl,
    /// `STR0`: string table
    Str0,
    /// `FNAM`: source file names
    Fnam,
    /// `OJMP`: onjump function index
    Ojmp,
    /// `FNCT`: function types
    Fnct,
    /// `DELG`: delegates
    Delg,
    /// `OBJG`: global groups
    Objg,
    /// `ENUM`: enums
    Enum,
}

impl SectionTag {
    /// The 4-byte ASCII tag.
    #[must_use]
    pub fn as_bytes(self) -> &'static [u8; 4] {
        match self {
            SectionTag::Vers => b"VERS",
            SectionTag::Keyc => b"KEYC",
            SectionTag::Code => b"CODE",
            SectionTag::Func => b"FUNC",
            SectionTag::Glob => b"GLOB",
            SectionTag::Gset => b"GSET",
            SectionTag::Strt => b"STRT",
            SectionTag::Msg0 => b"MSG0",
            SectionTag::Msg1 => b"MSG1",
            SectionTag::Main => b"MAIN",
            SectionTag::Msgf => b"MSGF",
            SectionTag::Hll0 => b"HLL0",
            SectionTag::Swi0 => b"SWI0",
            SectionTag::Gver => b"GVER",
            SectionTag::Slbl => b"SLBL",
            SectionTag::Str0 => b"STR0",
            SectionTag::Fnam => b"FNAM",
            SectionTag::Ojmp => b"OJMP",
            SectionTag::Fnct => b"FNCT",
            SectionTag::Delg => b"DELG",
            SectionTag::Objg => b"OBJG",
            SectionTag::Enum => b"ENUM",
        }
    }

    /// Look up a tag from its 4 bytes.
    #[must_use]
    pub fn from_bytes(bytes: &[u8; 4]) -> Option<Self> {
        SectionTag::iter().find(|tag| tag.as_bytes() == bytes)
    }

    /// Tag as text.
    #[must_use]
    pub fn name(self) -> &'static str {
        std::str::from_utf8(self.as_bytes()).unwrap_or("????")
    }
}

/// Location of one section in the container image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Section {
    /// Offset of the tag
    pub offset: usize,
    /// Bytes from the tag to the end of the section
    pub size: usize,
    /// Whether the container has this section
    pub present: bool,
}

/// Section-tag to [`Section`] map.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SectionMap {
    sections: [Section; SectionTag::COUNT],
}

impl SectionMap {
    /// Map with no section present.
    #[must_use]
    pub fn new() -> Self {
        SectionMap::default()
    }

    /// The entry of `tag`.
    #[must_use]
    pub fn get(&self, tag: SectionTag) -> &Section {
        &self.sections[tag as usize]
    }

    /// Whether `tag` is present.
    #[must_use]
    pub fn is_present(&self, tag: SectionTag) -> bool {
        self.get(tag).present
    }

    /// Record the location of a parsed section.
    pub fn record(&mut self, tag: SectionTag, offset: usize, size: usize) {
        self.sections[tag as usize] = Section {
            offset,
            size,
            present: true,
        };
    }

    /// Mark `tag` present or absent without a location.
    pub fn set_present(&mut self, tag: SectionTag, present: bool) {
        self.sections[tag as usize].present = present;
    }

    /// Present sections, in tag order.
    pub fn iter(&self) -> impl Iterator<Item = (SectionTag, &Section)> {
        SectionTag::iter()
            .map(|tag| (tag, self.get(tag)))
            .filter(|(_, section)| section.present)
    }
}
