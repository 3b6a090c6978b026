//! Error types for the wordlist generation library.

use std::fmt;
use std::io;

/// Errors produced while validating a run or streaming a wordlist.
#[derive(Debug)]
pub enum WordlistError {
    /// Alphabet contains no symbols.
    EmptyAlphabet,
    /// Alphabet contains the same symbol twice.
    DuplicateSymbol(char),
    /// Alphabet contains a control character (would corrupt the
    /// newline-delimited output).
    ControlSymbol(char),
    /// Alphabet exceeds the 64-symbol capacity of the decoder's used-symbol
    /// bitmask.
    AlphabetTooLarge { len: usize },
    /// Minimum length is zero.
    ZeroLength,
    /// Minimum length exceeds maximum length.
    EmptyLengthRange { min: usize, max: usize },
    /// Requested length exceeds the alphabet size, so no permutation of
    /// distinct symbols exists.
    LengthExceedsAlphabet { len: usize, alphabet: usize },
    /// Chunk size is zero.
    ZeroChunkSize,
    /// The permutation count for this length does not fit in 64 bits.
    CountOverflow { length: usize },
    /// Run stopped cooperatively at a chunk boundary.
    Interrupted { lines_written: u64 },
    /// Appending to or flushing the output sink failed.
    Sink(io::Error),
}

impl fmt::Display for WordlistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordlistError::EmptyAlphabet => {
                write!(f, "Alphabet must contain at least one symbol")
            }
            WordlistError::DuplicateSymbol(c) => {
                write!(f, "Alphabet contains duplicate symbol {c:?}")
            }
            WordlistError::ControlSymbol(c) => {
                write!(f, "Alphabet contains control character {c:?}")
            }
            WordlistError::AlphabetTooLarge { len } => {
                write!(f, "Alphabet has {len} symbols, maximum supported is 64")
            }
            WordlistError::ZeroLength => {
                write!(f, "Minimum length must be at least 1")
            }
            WordlistError::EmptyLengthRange { min, max } => {
                write!(f, "Minimum length {min} exceeds maximum length {max}")
            }
            WordlistError::LengthExceedsAlphabet { len, alphabet } => {
                write!(
                    f,
                    "Length {len} exceeds alphabet size {alphabet}, no permutation without repeats exists"
                )
            }
            WordlistError::ZeroChunkSize => {
                write!(f, "Chunk size must be at least 1")
            }
            WordlistError::CountOverflow { length } => {
                write!(
                    f,
                    "Permutation count for length {length} overflows the 64-bit range"
                )
            }
            WordlistError::Interrupted { lines_written } => {
                write!(f, "Interrupted after {lines_written} lines")
            }
            WordlistError::Sink(e) => {
                write!(f, "Failed to write to output: {e}")
            }
        }
    }
}

impl std::error::Error for WordlistError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WordlistError::Sink(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for WordlistError {
    fn from(e: io::Error) -> Self {
        WordlistError::Sink(e)
    }
}
