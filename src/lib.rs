//! # Afinar: Chat Fine-Tuning Preparation & Evaluation
//!
//! Afinar prepares conversational datasets for supervised fine-tuning and
//! scores the completions a fine-tuned model generates. Model weights,
//! adapter injection, and sampling belong to the serving framework; this
//! crate owns everything around them:
//!
//! - **chat**: Conversation data model, ChatML special tokens, turn template
//! - **dataset**: Sample-to-conversation conversion, length filtering, splits
//! - **tokenizer**: Tokenizer seam plus a character-level baseline
//! - **eval**: Sequence-match scoring of generated completions
//! - **lora**: Adapter hyperparameters and target-module selection
//! - **generate**: Prompt assembly and batching around the generation step
//! - **config**: Declarative YAML run specification
//! - **stats**: Post-run memory and timing report

pub mod chat;
pub mod config;
pub mod dataset;
pub mod eval;
pub mod generate;
pub mod lora;
pub mod stats;
pub mod tokenizer;

pub mod error;

// Re-export commonly used types
pub use error::{Error, Result};
pub use eval::{
    bag_overlap_ratio, evaluate, longest_common_run, EvalExample, EvalReport, ResponseKind,
};
pub use tokenizer::{CharTokenizer, TokenId, Tokenizer};
