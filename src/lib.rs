//! Character tokenizer for Esperanto text. Each recognized character becomes one token in
//! `[0, VOCAB_SIZE)` and the sequence is saved as an int32 `.npy` array for training pipelines.

pub mod cli;
pub mod data;
pub mod error;

pub use data::convert::VOCAB_SIZE;
pub use error::TokenError;
