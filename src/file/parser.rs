//! Sequential byte cursor used by every section reader.
//!
//! [`crate::file::parser::Parser`] keeps a position into an immutable byte slice and offers
//! bounds-checked reads of the primitives an AIN container is made of: little-endian
//! integers and floats, 4-byte section tags, NUL-terminated strings and length-prefixed
//! strings. Text conversion is not the cursor's business: string reads take a
//! [`crate::file::parser::TextDecoder`] which turns the raw bytes into a `String`
//! (containers in the wild are Shift-JIS encoded; callers inject the converter).
//!
//! # Examples
//!
//! ```rust
//! use ainscope::{Parser, file::parser::decode_lossy};
//!
//! let data = [0x2A, 0x00, 0x00, 0x00, b'h', b'i', 0x00];
//! let mut parser = Parser::new(&data);
//!
//! assert_eq!(parser.read_i32()?, 42);
//! assert_eq!(parser.read_cstring(decode_lossy)?, "hi");
//! assert!(!parser.has_more_data());
//! # Ok::<(), ainscope::Error>(())
//! ```

use crate::{
    file::io::{read_le_at, AinIO},
    Result,
};

/// Converts raw string bytes from a container into text.
pub type TextDecoder = fn(&[u8]) -> String;

/// Default [`TextDecoder`]: UTF-8 with invalid sequences replaced.
#[must_use]
pub fn decode_lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// A generic binary data parser for reading AIN structures.
///
/// All reads advance the position by exactly the number of bytes consumed and fail with
/// [`crate::Error::OutOfBounds`] without moving when not enough data remains.
pub struct Parser<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> Parser<'a> {
    /// Create a new [`Parser`] over `data`, positioned at offset 0.
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Parser { data, position: 0 }
    }

    /// Returns the length of the underlying buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the underlying buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `true` while at least one more byte can be read.
    #[must_use]
    pub fn has_more_data(&self) -> bool {
        self.position < self.data.len()
    }

    /// Number of bytes between the current position and the end of the buffer.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// Move the position to `pos`.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if `pos` lies beyond the end of the buffer.
    pub fn seek(&mut self, pos: usize) -> Result<()> {
        if pos > self.data.len() {
            return Err(out_of_bounds_error!());
        }

        self.position = pos;
        Ok(())
    }

    /// Move the position forward by `step` bytes.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if that would move past the end of the buffer.
    pub fn advance_by(&mut self, step: usize) -> Result<()> {
        let Some(target) = self.position.checked_add(step) else {
            return Err(out_of_bounds_error!());
        };
        self.seek(target)
    }

    /// Current position.
    #[must_use]
    pub fn pos(&self) -> usize {
        self.position
    }

    /// The whole underlying buffer.
    #[must_use]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Read the byte at the current position without advancing.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] at the end of the buffer.
    pub fn peek_byte(&self) -> Result<u8> {
        self.data
            .get(self.position)
            .copied()
            .ok_or(out_of_bounds_error!())
    }

    /// Returns the 4-byte section tag at the current position without advancing, if present.
    #[must_use]
    pub fn peek_tag(&self) -> Option<[u8; 4]> {
        let end = self.position.checked_add(4)?;
        self.data.get(self.position..end)?.try_into().ok()
    }

    /// Read a type `T` in little-endian format and advance the position.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if reading would exceed the data length.
    pub fn read_le<T: AinIO>(&mut self) -> Result<T> {
        read_le_at::<T>(self.data, &mut self.position)
    }

    /// Read a little-endian `i32`, the format's workhorse field type.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if fewer than 4 bytes remain.
    pub fn read_i32(&mut self) -> Result<i32> {
        self.read_le::<i32>()
    }

    /// Read a little-endian `f32`.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if fewer than 4 bytes remain.
    pub fn read_f32(&mut self) -> Result<f32> {
        self.read_le::<f32>()
    }

    /// Read an `i32` element count.
    ///
    /// A count is rejected when it is negative or when it could not possibly fit in the
    /// rest of the buffer (every element occupies at least one byte), which keeps hostile
    /// counts from driving huge allocations.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the count itself is truncated, or
    /// [`crate::Error::Invalid`] if the count is out of range.
    pub fn read_count(&mut self) -> Result<usize> {
        let count = self.read_i32()?;
        let Ok(count) = usize::try_from(count) else {
            return Err(invalid_error!("Negative element count: {}", count));
        };
        if count > self.remaining() {
            return Err(invalid_error!(
                "Element count {} exceeds remaining {} bytes",
                count,
                self.remaining()
            ));
        }
        Ok(count)
    }

    /// Read `len` raw bytes and advance past them.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if fewer than `len` bytes remain.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        let Some(end) = self.position.checked_add(len) else {
            return Err(out_of_bounds_error!());
        };
        let Some(bytes) = self.data.get(self.position..end) else {
            return Err(out_of_bounds_error!());
        };

        self.position = end;
        Ok(bytes)
    }

    /// Read the raw bytes of a NUL-terminated string, consuming the terminator.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if no terminator is found before the end of
    /// the buffer.
    pub fn read_cstring_bytes(&mut self) -> Result<&'a [u8]> {
        let rest = self.data.get(self.position..).unwrap_or_default();
        let Some(len) = rest.iter().position(|&b| b == 0) else {
            return Err(out_of_bounds_error!());
        };

        self.position += len + 1;
        Ok(&rest[..len])
    }

    /// Read a NUL-terminated string and convert it with `decoder`.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the string is not terminated.
    pub fn read_cstring(&mut self, decoder: TextDecoder) -> Result<String> {
        let bytes = self.read_cstring_bytes()?;
        Ok(decoder(bytes))
    }

    /// Read an `i32` length followed by that many bytes, and convert them with `decoder`.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the payload is truncated, or
    /// [`crate::Error::Invalid`] for a negative length.
    pub fn read_prefixed_string(&mut self, decoder: TextDecoder) -> Result<String> {
        let len = self.read_i32()?;
        let Ok(len) = usize::try_from(len) else {
            return Err(invalid_error!("Negative string length: {}", len));
        };
        let bytes = self.read_bytes(len)?;
        Ok(decoder(bytes))
    }
}
