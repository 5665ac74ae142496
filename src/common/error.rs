use std::fmt::{Debug, Display, Error, Formatter};

// Error
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum QRError {
    // Input
    EmptyData,
    CapacityExceeded,

    // Field arithmetic
    IncompatibleBase,
    RangeError,

    // Layout
    LayoutConflict,
    StreamUnderflow,
    StreamOverflow,
}

impl Display for QRError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        let msg = match *self {
            Self::EmptyData => "Empty data",
            Self::CapacityExceeded => "Data exceeds the capacity of every allowed version and level",
            Self::IncompatibleBase => "Cannot multiply terms with different symbolic bases",
            Self::RangeError => "Value out of range",
            Self::LayoutConflict => "Module has already been written",
            Self::StreamUnderflow => "Codeword stream exhausted before the symbol was filled",
            Self::StreamOverflow => "Codeword stream has bits left after the symbol was filled",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for QRError {}

pub type QRResult<T> = Result<T, QRError>;
