//! Helpers for crafting container images in integration tests.

#![allow(dead_code)]

use std::io::Write;

use ainscope::metadata::types::DataKind;
use flate2::{write::ZlibEncoder, Compression};

/// Little-endian writer for container images and code sections.
#[derive(Default)]
pub struct ImageWriter {
    data: Vec<u8>,
}

impl ImageWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tag(&mut self, tag: &[u8; 4]) -> &mut Self {
        self.data.extend_from_slice(tag);
        self
    }

    pub fn i32(&mut self, value: i32) -> &mut Self {
        self.data.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn cstring(&mut self, s: &str) -> &mut Self {
        self.data.extend_from_slice(s.as_bytes());
        self.data.push(0);
        self
    }

    pub fn bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.data.extend_from_slice(bytes);
        self
    }

    /// An instruction: opcode word plus operands.
    pub fn op(&mut self, opcode: u16, args: &[i32]) -> &mut Self {
        self.data.extend_from_slice(&opcode.to_le_bytes());
        for arg in args {
            self.i32(*arg);
        }
        self
    }

    /// A version 4 `FUNC` entry without variables.
    pub fn v4_function(&mut self, name: &str, address: i32) -> &mut Self {
        self.i32(address).cstring(name).i32(0);
        self.i32(DataKind::Void.as_i32()).i32(-1);
        self.i32(0).i32(0).i32(0)
    }

    /// A version 14 `FUNC` entry without variables.
    pub fn v14_function(&mut self, name: &str, address: i32) -> &mut Self {
        self.i32(address).cstring(name);
        self.i32(DataKind::Void.as_i32()).i32(-1).i32(0);
        self.i32(0).i32(0).i32(0).i32(0)
    }

    pub fn build(&self) -> Vec<u8> {
        self.data.clone()
    }
}

/// Wrap `image` in the zlib envelope.
pub fn compress(image: &[u8]) -> Vec<u8> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(image).unwrap();
    let payload = encoder.finish().unwrap();

    let mut data = b"AI2\0\0\0\0\0".to_vec();
    data.extend_from_slice(&(image.len() as u32).to_le_bytes());
    data.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    data.extend_from_slice(&payload);
    data
}
