//! Sequence-length filtering of rendered conversations.

use crate::chat::{ChatTemplate, Conversation};
use crate::error::Result;
use crate::tokenizer::Tokenizer;

/// Drops conversations whose rendered text exceeds the sequence budget
///
/// Training frameworks truncate over-long examples mid-turn, which corrupts
/// the reply the loss is computed on; filtering them out up front is the
/// safer default for small datasets.
pub struct LengthFilter<'a> {
    template: &'a ChatTemplate,
    tokenizer: &'a dyn Tokenizer,
    max_seq_len: usize,
}

impl<'a> LengthFilter<'a> {
    pub fn new(
        template: &'a ChatTemplate,
        tokenizer: &'a dyn Tokenizer,
        max_seq_len: usize,
    ) -> Self {
        Self {
            template,
            tokenizer,
            max_seq_len,
        }
    }

    /// Render a conversation, returning the text only if it fits
    pub fn render_if_fits(&self, conversation: &Conversation) -> Result<Option<String>> {
        let text = self.template.render(conversation, false);
        let tokens = self.tokenizer.encode(&text)?;
        Ok((tokens.len() <= self.max_seq_len).then_some(text))
    }

    /// Render a whole dataset, keeping the conversations that fit
    pub fn apply(&self, conversations: &[Conversation]) -> Result<Vec<String>> {
        let mut kept = Vec::with_capacity(conversations.len());
        for conversation in conversations {
            if let Some(text) = self.render_if_fits(conversation)? {
                kept.push(text);
            }
        }
        Ok(kept)
    }
}
