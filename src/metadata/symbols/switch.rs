use crate::{file::parser::Parser, Result};

/// Key type of a switch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwitchCaseType {
    /// Cases match integers (`SWITCH`)
    Int,
    /// Case values are string table indices (`STRSWITCH`)
    String,
}

impl SwitchCaseType {
    /// Decode the on-disk case type (2 = int, 4 = string).
    ///
    /// # Errors
    /// Returns [`crate::Error::Invalid`] for any other value.
    pub fn from_i32(value: i32) -> Result<Self> {
        match value {
            2 => Ok(SwitchCaseType::Int),
            4 => Ok(SwitchCaseType::String),
            _ => Err(invalid_error!("Unknown switch case type: {}", value)),
        }
    }

    /// On-disk value.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        match self {
            SwitchCaseType::Int => 2,
            SwitchCaseType::String => 4,
        }
    }
}

/// One `(value, address)` entry of a switch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchCase {
    /// Matched value (integer or string index)
    pub value: i32,
    /// Jump target
    pub address: i32,
    /// Index of the owning switch
    pub switch: usize,
}

/// A jump table backing `SWITCH` / `STRSWITCH`.
#[derive(Debug, Clone, PartialEq)]
pub struct Switch {
    /// Key type
    pub case_type: SwitchCaseType,
    /// Default jump target, -1 for none
    pub default_address: i32,
    /// Ordered cases
    pub cases: Vec<SwitchCase>,
}

impl Switch {
    /// An empty integer switch without default.
    #[must_use]
    pub fn new() -> Self {
        Switch {
            case_type: SwitchCaseType::Int,
            default_address: -1,
            cases: Vec::new(),
        }
    }

    /// Jump target for `value`, falling back to the default.
    #[must_use]
    pub fn target(&self, value: i32) -> Option<i32> {
        self.cases
            .iter()
            .find(|case| case.value == value)
            .map(|case| case.address)
            .or((self.default_address >= 0).then_some(self.default_address))
    }
}

impl Default for Switch {
    fn default() -> Self {
        Switch::new()
    }
}

/// Read the body of a `SWI0` section.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] on truncation or [`crate::Error::Invalid`] for bad
/// counts and unknown case types.
pub fn read_switches(parser: &mut Parser<'_>) -> Result<Vec<Switch>> {
    let count = parser.read_count()?;
    let mut switches = Vec::with_capacity(count);
    for index in 0..count {
        let case_type = SwitchCaseType::from_i32(parser.read_i32()?)?;
        let default_address = parser.read_i32()?;
        let nr_cases = parser.read_count()?;
        let mut cases = Vec::with_capacity(nr_cases);
        for _ in 0..nr_cases {
            cases.push(SwitchCase {
                value: parser.read_i32()?,
                address: parser.read_i32()?,
                switch: index,
            });
        }
        switches.push(Switch {
            case_type,
            default_address,
            cases,
        });
    }
    Ok(switches)
}
