//! Error taxonomy shared by the sequences and the map.

use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Positional access outside the valid range. `len` is the size of the
    /// sequence at the time of the call.
    #[error("Index: {index}, list size: {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    /// The operation is not supported by this type (e.g. removal through an
    /// iterator).
    #[error("unsupported operation: {operation}")]
    Unsupported { operation: &'static str },
}

impl Error {
    pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
        if index < len {
            Ok(())
        } else {
            Err(Error::IndexOutOfBounds { index, len })
        }
    }

    pub(crate) fn check_position(index: usize, len: usize) -> Result<()> {
        if index <= len {
            Ok(())
        } else {
            Err(Error::IndexOutOfBounds { index, len })
        }
    }

    pub(crate) fn iterator_remove<T>() -> Result<T> {
        Err(Error::Unsupported {
            operation: "remove through iterator",
        })
    }
}
