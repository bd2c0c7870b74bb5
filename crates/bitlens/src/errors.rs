//! Error types for the guarded arithmetic, layout compilation and persistence.

use std::fmt;

/// Errors produced by the guarded primitives in [crate::bits].
///
/// Neither variant is a user mistake; both signal an invariant violation
/// upstream and are surfaced as fatal at the frontend boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithError {
    /// A shift or AND primitive received a negative operand.
    InvalidOperand,
    /// An operand or intermediate left the 32-bit packed domain.
    OperandOutOfRange,
}

impl fmt::Display for ArithError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ArithError::InvalidOperand => {
                write!(f, "negative operand passed to a guarded bit operation")
            }
            ArithError::OperandOutOfRange => {
                write!(f, "operand does not fit the 32-bit packed domain")
            }
        }
    }
}

impl std::error::Error for ArithError {}

/// Errors produced when compiling a field sequence into a [crate::layout::Layout].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A single field is wider than 32 bits.
    FieldTooWide,
    /// The sequence would need bits beyond position 31 of the packed value.
    WidthExceeded,
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            LayoutError::FieldTooWide => write!(f, "field is wider than 32 bits"),
            LayoutError::WidthExceeded => {
                write!(f, "field sequence does not fit in a 32-bit packed value")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// Errors produced when writing a field value back into a packed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateError {
    /// Field index is outside the layout.
    NoSuchField,
    /// A guarded primitive rejected its operands.
    Arith(ArithError),
}

impl From<ArithError> for UpdateError {
    fn from(err: ArithError) -> Self {
        UpdateError::Arith(err)
    }
}

impl fmt::Display for UpdateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            UpdateError::NoSuchField => write!(f, "field index is outside the layout"),
            UpdateError::Arith(ref err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for UpdateError {}

/// Any failure an explorer session can report. Frontends treat these as
/// fatal: discard persisted state and show a generic failure notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplorerError {
    Layout(LayoutError),
    Arith(ArithError),
    Update(UpdateError),
    /// Field index is outside the current sequence.
    NoSuchField,
}

impl From<LayoutError> for ExplorerError {
    fn from(err: LayoutError) -> Self {
        ExplorerError::Layout(err)
    }
}

impl From<ArithError> for ExplorerError {
    fn from(err: ArithError) -> Self {
        ExplorerError::Arith(err)
    }
}

impl From<UpdateError> for ExplorerError {
    fn from(err: UpdateError) -> Self {
        ExplorerError::Update(err)
    }
}

impl fmt::Display for ExplorerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ExplorerError::Layout(ref err) => write!(f, "{}", err),
            ExplorerError::Arith(ref err) => write!(f, "{}", err),
            ExplorerError::Update(ref err) => write!(f, "{}", err),
            ExplorerError::NoSuchField => write!(f, "field index is outside the sequence"),
        }
    }
}

impl std::error::Error for ExplorerError {}

/// Errors produced when encoding a session snapshot for storage.
#[derive(Debug)]
pub enum PersistError {
    Serialize(serde_json::Error),
}

impl From<serde_json::Error> for PersistError {
    fn from(err: serde_json::Error) -> Self {
        PersistError::Serialize(err)
    }
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            PersistError::Serialize(ref err) => {
                write!(f, "failed to serialize session snapshot: {}", err)
            }
        }
    }
}

impl std::error::Error for PersistError {}
