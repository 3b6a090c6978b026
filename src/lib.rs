// Public exports for integration tests and benchmarks
pub mod alphabet;
pub mod chunk;
pub mod decoder;
pub mod error;
pub mod pipeline;
pub mod progress;

pub use alphabet::{Alphabet, DEFAULT_ALPHABET};
pub use chunk::{Chunk, ChunkSchedule};
pub use decoder::{decode, encode, permutation_count, MAX_ALPHABET};
pub use error::WordlistError;
pub use pipeline::{enumerate, open_sink, validate, EnumerationConfig, EnumerationReport};
