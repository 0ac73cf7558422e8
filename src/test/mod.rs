//! Shared helpers for unit tests: byte builders for crafted containers and code sections,
//! and a stand-alone name table for type rendering.

use crate::metadata::{
    types::{DataKind, TypeNames},
    version::Version,
};

/// Little-endian byte builder for section payloads and whole container images.
#[derive(Debug, Clone, Default)]
pub struct AinBuilder {
    data: Vec<u8>,
}

impl AinBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a 4-byte section tag
    pub fn tag(&mut self, tag: &[u8; 4]) -> &mut Self {
        self.data.extend_from_slice(tag);
        self
    }

    pub fn i32(&mut self, value: i32) -> &mut Self {
        self.data.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.data.extend_from_slice(bytes);
        self
    }

    /// Append a NUL-terminated string
    pub fn cstring(&mut self, s: &str) -> &mut Self {
        self.data.extend_from_slice(s.as_bytes());
        self.data.push(0);
        self
    }

    /// Append a type descriptor triple `(kind, struct, rank)`
    pub fn type_desc(&mut self, kind: DataKind, struc: i32, rank: i32) -> &mut Self {
        self.i32(kind.as_i32()).i32(struc).i32(rank)
    }

    /// Append a length-prefixed `MSG1` message, obfuscated the way the compiler stores it
    pub fn msg1_string(&mut self, s: &str) -> &mut Self {
        self.i32(s.len() as i32);
        for (i, byte) in s.bytes().enumerate() {
            self.data
                .push(byte.wrapping_add(i as u8).wrapping_add(0x60));
        }
        self
    }

    /// Append a `FUNC` entry without variables returning void, laid out for `version`
    pub fn function(&mut self, version: Version, name: &str, address: i32) -> &mut Self {
        self.i32(address).cstring(name);
        if version.gte(2, 0) && version.lt(7, 0) {
            self.i32(0);
        }
        if version.gte(11, 0) {
            self.type_desc(DataKind::Void, -1, 0);
        } else {
            self.i32(DataKind::Void.as_i32()).i32(-1);
        }
        self.i32(0).i32(0);
        if version.gte(11, 0) {
            self.i32(0);
        }
        if version.gte(2, 0) {
            self.i32(0);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn build(&self) -> Vec<u8> {
        self.data.clone()
    }
}

/// Encoder for code sections: an opcode word followed by 4-byte operands.
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    data: Vec<u8>,
}

impl CodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an instruction with the given operands
    pub fn op(&mut self, opcode: u16, args: &[i32]) -> &mut Self {
        self.word(opcode);
        for arg in args {
            self.i32(*arg);
        }
        self
    }

    pub fn word(&mut self, word: u16) -> &mut Self {
        self.data.extend_from_slice(&word.to_le_bytes());
        self
    }

    pub fn i32(&mut self, value: i32) -> &mut Self {
        self.data.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn build(&self) -> Vec<u8> {
        self.data.clone()
    }
}

/// Structure and enum names for rendering types without a container.
#[derive(Debug, Clone, Default)]
pub struct TypeNameTable {
    pub structs: Vec<String>,
    pub enums: Vec<String>,
}

impl TypeNames for TypeNameTable {
    fn struct_name(&self, index: usize) -> Option<&str> {
        self.structs.get(index).map(String::as_str)
    }

    fn enum_name(&self, index: usize) -> Option<&str> {
        self.enums.get(index).map(String::as_str)
    }
}
