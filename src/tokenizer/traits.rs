//! Tokenizer trait definition.

use crate::error::Result;

/// Token identifier produced by a tokenizer
pub type TokenId = u32;

/// Minimal tokenizer interface consumed by scoring and filtering code
///
/// Object-safe so callers can hand in `&dyn Tokenizer` backed by whatever
/// vocabulary the surrounding framework uses.
pub trait Tokenizer {
    /// Encode text into token ids
    fn encode(&self, text: &str) -> Result<Vec<TokenId>>;

    /// Decode token ids back into text
    fn decode(&self, ids: &[TokenId]) -> Result<String>;

    /// Number of entries in the vocabulary
    fn vocab_size(&self) -> usize;
}
