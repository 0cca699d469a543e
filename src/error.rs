/// Errors from the counting strategies.
use core::{error, fmt};

/// Errors returned by this library.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// No free slot could be reached within one full probe cycle of the table.
    TableOverflow { capacity: usize },
    /// A fixed table cannot be built without any slot.
    ZeroCapacity,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Self::TableOverflow { capacity } => {
                write!(f, "Table overflow: all {} slots are taken", capacity)
            }
            Self::ZeroCapacity => write!(f, "Table capacity must be positive"),
        }
    }
}

impl error::Error for Error {}
