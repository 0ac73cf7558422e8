//! Little-endian primitive reads for AIN buffers.
//!
//! Every integer in an AIN container is little-endian. This module provides the
//! [`crate::file::io::AinIO`] trait, implemented for the handful of primitive types the
//! format uses, together with bounds-checked helpers that read a value from a slice.
//!
//! # Examples
//!
//! ```rust,ignore
//! use ainscope::file::io::read_le_at;
//!
//! let data = [0x01, 0x00, 0x02, 0x00, 0x00, 0x00];
//! let mut offset = 0;
//!
//! let first: u16 = read_le_at(&data, &mut offset)?;  // offset: 0 -> 2
//! let second: i32 = read_le_at(&data, &mut offset)?; // offset: 2 -> 6
//!
//! assert_eq!(first, 1);
//! assert_eq!(second, 2);
//! # Ok::<(), ainscope::Error>(())
//! ```
//!
//! # Error Handling
//!
//! All functions return [`crate::Error::OutOfBounds`] if the buffer holds fewer bytes than
//! the requested type needs.

use crate::Result;

/// Trait for primitive types that can be decoded from a little-endian byte array.
///
/// Each implementation defines a `Bytes` associated type that represents the fixed-size
/// byte array for that type (e.g. `[u8; 4]` for `i32`).
pub trait AinIO: Sized {
    /// Byte array type for this numeric type.
    type Bytes: Sized + for<'a> TryFrom<&'a [u8]>;

    /// Read T from a byte buffer in little-endian
    fn from_le_bytes(bytes: Self::Bytes) -> Self;
}

macro_rules! impl_ain_io {
    ($($ty:ty => $len:literal),* $(,)?) => {
        $(
            impl AinIO for $ty {
                type Bytes = [u8; $len];

                fn from_le_bytes(bytes: Self::Bytes) -> Self {
                    <$ty>::from_le_bytes(bytes)
                }
            }
        )*
    };
}

impl_ain_io! {
    u8 => 1,
    i8 => 1,
    u16 => 2,
    i16 => 2,
    u32 => 4,
    i32 => 4,
    f32 => 4,
}

/// Safely reads `T` in little-endian from the start of `data`.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] if `data` is shorter than `T`.
pub fn read_le<T: AinIO>(data: &[u8]) -> Result<T> {
    let mut offset = 0_usize;
    read_le_at(data, &mut offset)
}

/// Safely reads `T` in little-endian at `offset` and advances the offset past it.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] if fewer than `size_of::<T>()` bytes remain.
pub fn read_le_at<T: AinIO>(data: &[u8], offset: &mut usize) -> Result<T> {
    let type_len = std::mem::size_of::<T>();
    let Some(end) = offset.checked_add(type_len) else {
        return Err(out_of_bounds_error!());
    };
    if end > data.len() {
        return Err(out_of_bounds_error!());
    }

    let Ok(read) = data[*offset..end].try_into() else {
        return Err(out_of_bounds_error!());
    };

    *offset = end;

    Ok(T::from_le_bytes(read))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    const TEST_BUFFER: [u8; 8] = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];

    #[test]
    fn read_le_u16() {
        let result = read_le::<u16>(&TEST_BUFFER).unwrap();
        assert_eq!(result, 0x0201);
    }

    #[test]
    fn read_le_i32() {
        let result = read_le::<i32>(&TEST_BUFFER).unwrap();
        assert_eq!(result, 0x04030201);
    }

    #[test]
    fn read_le_negative() {
        let result = read_le::<i32>(&[0xFF, 0xFF, 0xFF, 0xFF]).unwrap();
        assert_eq!(result, -1);
    }

    #[test]
    fn read_le_f32() {
        let bytes = 1.5_f32.to_le_bytes();
        let result = read_le::<f32>(&bytes).unwrap();
        assert_eq!(result, 1.5);
    }

    #[test]
    fn read_le_at_advances() {
        let mut offset = 0;
        let first: u16 = read_le_at(&TEST_BUFFER, &mut offset).unwrap();
        let second: u32 = read_le_at(&TEST_BUFFER, &mut offset).unwrap();
        assert_eq!(first, 0x0201);
        assert_eq!(second, 0x06050403);
        assert_eq!(offset, 6);
    }

    #[test]
    fn errors() {
        let buffer = [0xFF, 0xFF, 0xFF];

        let result = read_le::<i32>(&buffer);
        assert!(matches!(result, Err(Error::OutOfBounds)));

        let mut offset = 2;
        let result = read_le_at::<u16>(&buffer, &mut offset);
        assert!(matches!(result, Err(Error::OutOfBounds)));
        assert_eq!(offset, 2);

        let mut offset = usize::MAX;
        let result = read_le_at::<u8>(&buffer, &mut offset);
        assert!(matches!(result, Err(Error::OutOfBounds)));
    }
}
