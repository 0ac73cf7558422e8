use thiserror::Error;

/// Helper macro for creating [`crate::Error::Invalid`] errors with source location information.
///
/// The macro captures the file and line at the call site, which makes it cheap to pinpoint
/// which section reader rejected a container.
///
/// # Examples
///
/// ```rust,ignore
/// // Single string version
/// let error = invalid_error!("VERS section missing");
///
/// // Format string with arguments version
/// let error = invalid_error!("Global index out of range: {}", index);
/// ```
macro_rules! invalid_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Invalid {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Invalid {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// Helper macro for creating [`crate::Error::OutOfBounds`] errors.
///
/// Exists so cursor code reads the same as the other error sites and so the variant can gain
/// context later without touching every caller.
macro_rules! out_of_bounds_error {
    () => {
        crate::Error::OutOfBounds
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Loading a container is fail-fast: the first structural problem aborts the parse and no
/// partially populated [`crate::metadata::ain::Ain`] is ever handed back. Heuristic passes
/// (enum recovery, minor version disambiguation, membership inference) never produce an
/// error; they log a warning and degrade instead.
///
/// # Error Categories
///
/// ## Input Errors
/// - [`Error::FileError`] - Filesystem I/O errors while opening or mapping a path
/// - [`Error::UnrecognizedFormat`] - Input is not a raw, compressed or encrypted container
///
/// ## Structural Errors
/// - [`Error::Invalid`] - Any violated structural invariant of the container
/// - [`Error::OutOfBounds`] - A cursor read ran past the end of its buffer
/// - [`Error::RecursionLimit`] - Nested type descriptors exceeded the configured depth
///
/// The container loader folds [`Error::OutOfBounds`] and [`Error::RecursionLimit`] into
/// [`Error::Invalid`] before returning, so the parse entry points only ever report
/// `FileError`, `UnrecognizedFormat` or `Invalid`.
///
/// # Examples
///
/// ```rust,no_run
/// use ainscope::{Error, Ain};
///
/// match Ain::from_file("System40.ain") {
///     Ok(ain) => println!("version {}", ain.version()),
///     Err(Error::UnrecognizedFormat) => eprintln!("not an AIN file"),
///     Err(Error::Invalid { message, file, line }) => {
///         eprintln!("invalid container: {} ({}:{})", message, file, line);
///     }
///     Err(Error::FileError(io_err)) => eprintln!("I/O error: {}", io_err),
///     Err(e) => eprintln!("other error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// File I/O error.
    ///
    /// Wraps the error reported while opening or memory-mapping the source path.
    #[error("{0}")]
    FileError(#[from] std::io::Error),

    /// The input is not a recognized container.
    ///
    /// Raised when the buffer is neither a raw container, a zlib envelope nor an
    /// encrypted container, or when decompressing the zlib envelope fails.
    #[error("Unrecognized file format")]
    UnrecognizedFormat,

    /// The container violates a structural invariant.
    ///
    /// # Fields
    ///
    /// * `message` - Description of what was wrong
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Invalid - {file}:{line}: {message}")]
    Invalid {
        /// The message to be printed for the Invalid error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// An out of bound access was attempted while reading a buffer.
    #[error("Out of Bound read would have occurred!")]
    OutOfBounds,

    /// Recursion limit reached.
    ///
    /// Type descriptors of version 11+ containers nest recursively; the depth is bounded
    /// to keep hostile inputs from exhausting the stack. The associated value is the limit.
    #[error("Reach the maximum recursion level allowed - {0}")]
    RecursionLimit(usize),
}

impl Error {
    /// Returns `true` for [`Error::Invalid`].
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Error::Invalid { .. })
    }
}
