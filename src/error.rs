//! When limb arithmetic cannot be carried out.

use core::fmt::{self, Debug, Display};
use core::result;

/// This type represents all possible errors that can occur while building,
/// mutating or rendering a [`BigInt`](crate::BigInt).
#[derive(Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
}

/// Alias for a `Result` with the error type `biglimb::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// Specifies the cause of this error.
    pub fn code(&self) -> &ErrorCode {
        &self.code
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::Alloc` - limb storage could not be grown
    /// - `Category::Data` - an operand or input string was not acceptable
    /// - `Category::Capacity` - a destination was too small for the result
    /// - `Category::Lifecycle` - the value had already been released
    pub fn classify(&self) -> Category {
        match self.code {
            ErrorCode::AllocationFailure { .. } => Category::Alloc,
            ErrorCode::InvalidDigitCharacter { .. }
            | ErrorCode::ShiftAmountOutOfRange(_)
            | ErrorCode::DivisionByZero => Category::Data,
            ErrorCode::BufferTooSmall { .. } => Category::Capacity,
            ErrorCode::UseAfterRelease => Category::Lifecycle,
        }
    }

    /// Returns true if this error was caused by a failed storage reservation.
    pub fn is_alloc(&self) -> bool {
        self.classify() == Category::Alloc
    }

    /// Returns true if this error was caused by an unacceptable operand, such
    /// as a non-digit character, an oversized shift amount or a zero divisor.
    pub fn is_data(&self) -> bool {
        self.classify() == Category::Data
    }

    /// Returns true if this error was caused by a destination that cannot
    /// hold the result.
    pub fn is_capacity(&self) -> bool {
        self.classify() == Category::Capacity
    }

    /// Returns true if this error was caused by operating on a released value.
    pub fn is_lifecycle(&self) -> bool {
        self.classify() == Category::Lifecycle
    }
}

/// Categorizes the cause of a `biglimb::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// Limb storage could not be grown.
    Alloc,

    /// An operand or input string was not acceptable.
    Data,

    /// A destination buffer or value was too small to hold the result.
    Capacity,

    /// The value was released and has not been reset since.
    Lifecycle,
}

/// The specific cause of an [`Error`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ErrorCode {
    /// Reserving room for `requested` more limbs failed.
    AllocationFailure {
        /// Number of additional limbs that were asked for.
        requested: usize,
    },

    /// A decimal string contained something other than `'0'..='9'`.
    InvalidDigitCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the input.
        index: usize,
    },

    /// Sub-word shifts only accept amounts in `0..32`.
    ShiftAmountOutOfRange(u32),

    /// The destination holds `available` slots but `needed` are required.
    BufferTooSmall {
        /// Slots the result requires.
        needed: usize,
        /// Slots the destination offers.
        available: usize,
    },

    /// The value was released and has not been reset since.
    UseAfterRelease,

    /// Scalar division by zero.
    DivisionByZero,
}

impl Error {
    #[cold]
    pub(crate) fn new(code: ErrorCode) -> Self {
        Error { code }
    }

    #[cold]
    pub(crate) fn allocation(requested: usize) -> Self {
        Error::new(ErrorCode::AllocationFailure { requested })
    }

    #[cold]
    pub(crate) fn invalid_digit(character: char, index: usize) -> Self {
        Error::new(ErrorCode::InvalidDigitCharacter { character, index })
    }

    #[cold]
    pub(crate) fn buffer_too_small(needed: usize, available: usize) -> Self {
        Error::new(ErrorCode::BufferTooSmall { needed, available })
    }
}

impl From<ErrorCode> for Error {
    fn from(code: ErrorCode) -> Self {
        Error::new(code)
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ErrorCode::AllocationFailure { requested } => {
                write!(f, "failed to allocate {} more limbs", requested)
            }
            ErrorCode::InvalidDigitCharacter { character, index } => write!(
                f,
                "invalid digit character {:?} at index {}",
                character, index
            ),
            ErrorCode::ShiftAmountOutOfRange(amount) => write!(
                f,
                "shift amount {} out of range, expected less than 32",
                amount
            ),
            ErrorCode::BufferTooSmall { needed, available } => write!(
                f,
                "buffer too small: needed {}, available {}",
                needed, available
            ),
            ErrorCode::UseAfterRelease => f.write_str("use of a released value"),
            ErrorCode::DivisionByZero => f.write_str("division by zero"),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&self.code, f)
    }
}

// Print the message rather than the nested code. Humans often end up seeing
// this representation because it is what unwrap() shows.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Error({:?})", alloc::string::ToString::to_string(&self.code))
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
