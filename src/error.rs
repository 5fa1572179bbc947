use std::{alloc::Layout, error, fmt};

/// Errors reported by the fallible [`DynArray`] operations.
///
/// [`DynArray`]: crate::DynArray
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The system allocator could not satisfy the request.
    OutOfMemory {
        /// The layout that was requested.
        layout: Layout,
    },
    /// The requested capacity does not fit in a valid allocation layout.
    CapacityOverflow,
    /// A position outside the live range was passed to a positional
    /// operation.
    OutOfRange {
        /// The offending position.
        index: usize,
        /// The length at the time of the call.
        len: usize,
    },
    /// An element was requested from an empty array.
    EmptyContainer,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfMemory { layout } => write!(
                f,
                "out of memory: failed to allocate {} bytes with alignment {}",
                layout.size(),
                layout.align()
            ),
            Self::CapacityOverflow => f.write_str("capacity overflow"),
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::EmptyContainer => f.write_str("container is empty"),
        }
    }
}

impl error::Error for Error {}

/// Shorthand for results carrying an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Converts an allocation failure into the behavior of the infallible API:
/// capacity overflow panics, allocator failure goes to
/// [`handle_alloc_error`].
///
/// [`handle_alloc_error`]: std::alloc::handle_alloc_error
#[track_caller]
pub(crate) fn infallible<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(Error::OutOfMemory { layout }) => std::alloc::handle_alloc_error(layout),
        Err(Error::CapacityOverflow) => panic!("capacity overflow"),
        Err(e) => panic!("{e}"),
    }
}
