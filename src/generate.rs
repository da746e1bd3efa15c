//! Glue around the external generation step
//!
//! Sampling happens in the serving framework; this module owns the pure
//! parts on either side of it: sampling hyperparameters, assembling
//! prompts from conversations, batching queries, and separating a model's
//! continuation from the prompt tokens it was fed.

use serde::{Deserialize, Serialize};

use crate::chat::{ChatTemplate, Conversation};
use crate::error::{Error, Result};
use crate::tokenizer::TokenId;

/// Sampling hyperparameters for evaluation generations
///
/// Defaults are tuned for near-greedy decoding: scoring generated function
/// calls against references only makes sense when the model is not
/// wandering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Upper bound on generated tokens per completion
    pub max_new_tokens: usize,
    /// Softmax temperature
    pub temperature: f32,
    /// Nucleus sampling mass
    pub top_p: f32,
    /// Penalty applied to already-generated tokens (1.0 = off)
    pub repetition_penalty: f32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_new_tokens: 256,
            temperature: 0.01,
            top_p: 0.95,
            repetition_penalty: 1.0,
        }
    }
}

impl GenerationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_new_tokens(mut self, max_new_tokens: usize) -> Self {
        self.max_new_tokens = max_new_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = top_p;
        self
    }

    pub fn with_repetition_penalty(mut self, repetition_penalty: f32) -> Self {
        self.repetition_penalty = repetition_penalty;
        self
    }

    /// Check all hyperparameters are in range
    pub fn validate(&self) -> Result<()> {
        if self.max_new_tokens == 0 {
            return Err(Error::InvalidParameter(
                "max_new_tokens must be > 0".to_string(),
            ));
        }
        if self.temperature <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "temperature must be > 0, got {}",
                self.temperature
            )));
        }
        if !(self.top_p > 0.0 && self.top_p <= 1.0) {
            return Err(Error::InvalidParameter(format!(
                "top_p must be in (0, 1], got {}",
                self.top_p
            )));
        }
        if self.repetition_penalty <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "repetition_penalty must be > 0, got {}",
                self.repetition_penalty
            )));
        }
        Ok(())
    }
}

/// Render each conversation into a prompt ending in an open model turn
pub fn assemble_prompts(conversations: &[Conversation], template: &ChatTemplate) -> Vec<String> {
    conversations
        .iter()
        .map(|conversation| template.render(conversation, true))
        .collect()
}

/// Chunk items into fixed-size batches (the last may be short)
pub fn batched<T: Clone>(items: &[T], batch_size: usize) -> Vec<Vec<T>> {
    items
        .chunks(batch_size.max(1))
        .map(|chunk| chunk.to_vec())
        .collect()
}

/// The generated continuation of an output stream
///
/// Generation frameworks return prompt and continuation concatenated;
/// scoring only wants the part after `prompt_len` tokens.
pub fn completion_tail(output: &[TokenId], prompt_len: usize) -> &[TokenId] {
    &output[prompt_len.min(output.len())..]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::{Message, Role};

    #[test]
    fn test_default_config_is_valid() {
        let config = GenerationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_new_tokens, 256);
        assert!((config.temperature - 0.01).abs() < 1e-6);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(GenerationConfig::new()
            .with_max_new_tokens(0)
            .validate()
            .is_err());
        assert!(GenerationConfig::new()
            .with_temperature(0.0)
            .validate()
            .is_err());
        assert!(GenerationConfig::new().with_top_p(1.5).validate().is_err());
        assert!(GenerationConfig::new()
            .with_repetition_penalty(0.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_assemble_prompts_open_model_turn() {
        let conversation = Conversation::from_iter([Message::text(Role::User, "Hi")]);
        let prompts = assemble_prompts(&[conversation], &ChatTemplate::default());

        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].ends_with("<start_of_turn>model\n"));
    }

    #[test]
    fn test_batched_sizes() {
        let items: Vec<u32> = (0..10).collect();
        let batches = batched(&items, 4);

        assert_eq!(batches.len(), 3);
        assert_eq!(batches[0].len(), 4);
        assert_eq!(batches[2].len(), 2);
    }

    #[test]
    fn test_batched_clamps_zero_batch_size() {
        let batches = batched(&[1, 2, 3], 0);
        assert_eq!(batches.len(), 3);
    }

    #[test]
    fn test_completion_tail() {
        let output = [1, 2, 3, 4, 5];
        assert_eq!(completion_tail(&output, 3), &[4, 5]);
        assert_eq!(completion_tail(&output, 0), &output);
        // Prompt length beyond the output yields nothing, not a panic
        assert!(completion_tail(&output, 9).is_empty());
    }
}
