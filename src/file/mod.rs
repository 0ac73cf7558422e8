//! Input handling for AIN containers.
//!
//! This module owns everything between "bytes on disk / in memory" and "a plain container
//! image the section reader can walk":
//!
//! - [`crate::file::Backend`] abstracts over where the bytes live. [`crate::file::physical::Physical`]
//!   memory-maps a path, [`crate::file::memory::Memory`] wraps an owned buffer.
//! - [`crate::file::File`] detects the envelope the container is wrapped in and produces the
//!   plain image: raw (`VERS` first), zlib-compressed (`AI2\0` header) or XOR-encrypted.
//! - [`crate::file::parser::Parser`] is the sequential cursor used to read the image.
//!
//! # Examples
//!
//! ```rust,no_run
//! use ainscope::file::{Envelope, File};
//!
//! let file = File::from_file("System40.ain")?;
//! let (envelope, image) = file.image()?;
//! if envelope == Envelope::Encrypted {
//!     println!("decrypted {} bytes", image.len());
//! }
//! # Ok::<(), ainscope::Error>(())
//! ```

pub mod crypt;
pub mod io;
pub mod memory;
pub mod parser;
pub mod physical;

use std::{borrow::Cow, io::Read, path::Path};

use flate2::read::ZlibDecoder;

use crate::{
    file::{memory::Memory, physical::Physical},
    Error, Result,
};

/// Magic of the zlib envelope. Only the first four bytes are significant.
pub const ZLIB_MAGIC: &[u8; 4] = b"AI2\0";
/// Size of the zlib envelope header.
pub const ZLIB_HEADER_SIZE: usize = 16;

/// Backing storage for a loaded input.
pub trait Backend: Send + Sync {
    /// Returns the entire data buffer.
    fn data(&self) -> &[u8];

    /// Returns the total length of the data buffer.
    fn len(&self) -> usize {
        self.data().len()
    }

    /// Returns `true` if the buffer holds no data.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// How a container was wrapped on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Envelope {
    /// Plain container starting with the `VERS` tag.
    Raw,
    /// zlib stream behind a 16-byte `AI2\0` header.
    Compressed,
    /// Whole buffer XORed with the container key stream.
    Encrypted,
}

/// A loaded input file, before envelope removal.
pub struct File {
    backend: Box<dyn Backend>,
}

impl File {
    /// Memory-map the file at `path`.
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if the file cannot be opened or mapped.
    pub fn from_file(path: impl AsRef<Path>) -> Result<File> {
        Ok(File {
            backend: Box::new(Physical::new(path)?),
        })
    }

    /// Wrap an owned buffer.
    #[must_use]
    pub fn from_mem(data: Vec<u8>) -> File {
        File {
            backend: Box::new(Memory::new(data)),
        }
    }

    /// The raw input bytes, envelope included.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        self.backend.data()
    }

    /// Remove the envelope and return the plain container image.
    ///
    /// # Errors
    /// Returns [`crate::Error::UnrecognizedFormat`] if no envelope matches or the
    /// compressed payload cannot be inflated.
    pub fn image(&self) -> Result<(Envelope, Cow<'_, [u8]>)> {
        unwrap_envelope(self.backend.data())
    }
}

/// Detect the envelope of `data` and return the plain container image.
///
/// Raw images are borrowed; compressed and encrypted ones are decoded into a new buffer.
///
/// # Errors
/// Returns [`crate::Error::UnrecognizedFormat`] if no envelope matches or the compressed
/// payload cannot be inflated.
pub fn unwrap_envelope(data: &[u8]) -> Result<(Envelope, Cow<'_, [u8]>)> {
    if data.starts_with(ZLIB_MAGIC) {
        let image = decompress(data)?;
        log::debug!("inflated container: {} -> {} bytes", data.len(), image.len());
        return Ok((Envelope::Compressed, Cow::Owned(image)));
    }

    if crypt::is_encrypted(data) {
        let mut image = data.to_vec();
        crypt::xor_crypt(&mut image);
        log::debug!("decrypted container of {} bytes", image.len());
        return Ok((Envelope::Encrypted, Cow::Owned(image)));
    }

    if data.starts_with(b"VERS") {
        return Ok((Envelope::Raw, Cow::Borrowed(data)));
    }

    Err(Error::UnrecognizedFormat)
}

fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    if data.len() < ZLIB_HEADER_SIZE {
        return Err(Error::UnrecognizedFormat);
    }

    let mut offset = 8;
    let out_len: u32 = io::read_le_at(data, &mut offset)?;
    let in_len: u32 = io::read_le_at(data, &mut offset)?;

    let Some(end) = ZLIB_HEADER_SIZE.checked_add(in_len as usize) else {
        return Err(Error::UnrecognizedFormat);
    };
    let Some(payload) = data.get(ZLIB_HEADER_SIZE..end) else {
        return Err(Error::UnrecognizedFormat);
    };

    let mut image = Vec::with_capacity((out_len as usize).min(payload.len().saturating_mul(64)));
    let mut decoder = ZlibDecoder::new(payload).take(u64::from(out_len) + 1);
    if decoder.read_to_end(&mut image).is_err() || image.len() != out_len as usize {
        return Err(Error::UnrecognizedFormat);
    }

    Ok(image)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use flate2::{write::ZlibEncoder, Compression};

    use super::*;

    fn compressed(image: &[u8]) -> Vec<u8> {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(image).unwrap();
        let payload = encoder.finish().unwrap();

        let mut data = b"AI2\0\0\0\0\0".to_vec();
        data.extend_from_slice(&(image.len() as u32).to_le_bytes());
        data.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        data.extend_from_slice(&payload);
        data
    }

    #[test]
    fn raw_is_borrowed() {
        let data = b"VERS\x04\x00\x00\x00".to_vec();
        let (envelope, image) = unwrap_envelope(&data).unwrap();
        assert_eq!(envelope, Envelope::Raw);
        assert!(matches!(image, Cow::Borrowed(_)));
    }

    #[test]
    fn zlib_envelope() {
        let image = b"VERS\x0c\x00\x00\x00CODE\x00\x00\x00\x00".to_vec();
        let data = compressed(&image);

        let (envelope, decoded) = unwrap_envelope(&data).unwrap();
        assert_eq!(envelope, Envelope::Compressed);
        assert_eq!(decoded.as_ref(), image.as_slice());
    }

    #[test]
    fn zlib_envelope_corrupt() {
        let mut data = compressed(b"VERS\x0c\x00\x00\x00");
        let last = data.len() - 6;
        data.truncate(last);
        data[8] = 0xFF;
        assert!(matches!(
            unwrap_envelope(&data),
            Err(Error::UnrecognizedFormat)
        ));

        assert!(matches!(
            unwrap_envelope(b"AI2\0\0\0\0\0"),
            Err(Error::UnrecognizedFormat)
        ));
    }

    #[test]
    fn encrypted_envelope() {
        let image = b"VERS\x06\x00\x00\x00MAIN\x01\x00\x00\x00".to_vec();
        let mut data = image.clone();
        crypt::xor_crypt(&mut data);

        let (envelope, decoded) = unwrap_envelope(&data).unwrap();
        assert_eq!(envelope, Envelope::Encrypted);
        assert_eq!(decoded.as_ref(), image.as_slice());
    }

    #[test]
    fn unrecognized() {
        assert!(matches!(
            unwrap_envelope(b"MZ\x90\x00\x03\x00\x00\x00"),
            Err(Error::UnrecognizedFormat)
        ));
        assert!(matches!(unwrap_envelope(&[]), Err(Error::UnrecognizedFormat)));
    }

    #[test]
    fn file_from_mem() {
        let file = File::from_mem(b"VERS\x01\x00\x00\x00".to_vec());
        assert_eq!(file.data().len(), 8);
        let (envelope, _) = file.image().unwrap();
        assert_eq!(envelope, Envelope::Raw);
    }
}
