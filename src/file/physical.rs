//! Memory-mapped file backend.
//!
//! [`crate::file::physical::Physical`] maps a container file read-only into the address
//! space instead of reading it upfront. Raw containers are then parsed straight out of the
//! mapping; enveloped ones are decoded into an owned buffer.

use std::{fs, path::Path};

use memmap2::Mmap;

use crate::{file::Backend, Error::FileError, Result};

/// A file backend that uses memory-mapped I/O.
///
/// # Examples
///
/// ```rust,ignore
/// use ainscope::file::{physical::Physical, Backend};
///
/// let physical = Physical::new("System40.ain")?;
/// println!("container size: {} bytes", physical.len());
/// # Ok::<(), ainscope::Error>(())
/// ```
#[derive(Debug)]
pub struct Physical {
    /// Memory-mapped file data
    data: Mmap,
}

impl Physical {
    /// Create a new physical file backend by memory-mapping the specified file.
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if the file cannot be opened or mapped.
    pub fn new(path: impl AsRef<Path>) -> Result<Physical> {
        let file = fs::File::open(path).map_err(FileError)?;

        // The mapping is read-only; concurrent truncation of the file by another process is
        // outside what this crate can guard against.
        let mmap = unsafe { Mmap::map(&file) }.map_err(FileError)?;

        Ok(Physical { data: mmap })
    }
}

impl Backend for Physical {
    fn data(&self) -> &[u8] {
        self.data.as_ref()
    }
}
