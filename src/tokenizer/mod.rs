//! Tokenizer seam between raw text and token-level code
//!
//! Real subword tokenizers ship with the model being fine-tuned; the
//! scorer and the length filter only need *some* mapping from text to
//! comparable token ids. This module defines that seam as a trait and
//! provides a character-level baseline good enough for offline scoring.
//!
//! # Example
//!
//! ```
//! use afinar::tokenizer::{CharTokenizer, Tokenizer};
//!
//! let mut tokenizer = CharTokenizer::new();
//! tokenizer.fit(&["hello world"]);
//!
//! let ids = tokenizer.encode("hello").unwrap();
//! assert_eq!(tokenizer.decode(&ids).unwrap(), "hello");
//! ```

mod char;
mod traits;

pub use self::char::CharTokenizer;
pub use traits::{TokenId, Tokenizer};
