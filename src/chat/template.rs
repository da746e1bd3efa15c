//! Turn-based chat template rendering.

use super::message::{Conversation, Role};

/// Turn-delimited chat template
///
/// Renders a conversation the way Gemma-style models expect it: a BOS
/// marker, then each non-system turn wrapped in start/end-of-turn markers
/// with the role name on its own line. System turns are omitted from the
/// rendered text; their content reaches the model through the tool catalog
/// embedded in the dataset instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTemplate {
    pub bos: String,
    pub start_of_turn: String,
    pub end_of_turn: String,
    pub eos: String,
    /// Role named by the generation prompt
    pub generation_role: Role,
}

impl Default for ChatTemplate {
    fn default() -> Self {
        Self {
            bos: "<bos>".to_string(),
            start_of_turn: "<start_of_turn>".to_string(),
            end_of_turn: "<end_of_turn>".to_string(),
            eos: "<eos>".to_string(),
            generation_role: Role::Model,
        }
    }
}

impl ChatTemplate {
    /// Render a conversation to templated text
    ///
    /// With `add_generation_prompt`, the output ends with an opened turn
    /// for the generation role, cueing the model to continue from there.
    pub fn render(&self, conversation: &Conversation, add_generation_prompt: bool) -> String {
        let mut out = self.bos.clone();
        for message in conversation.iter() {
            if message.role == Role::System {
                continue;
            }
            out.push_str(&self.start_of_turn);
            out.push_str(message.role.as_str());
            out.push('\n');
            out.push_str(message.text_content().trim());
            out.push_str(&self.end_of_turn);
            out.push_str(&self.eos);
            out.push('\n');
        }
        if add_generation_prompt {
            out.push_str(&self.start_of_turn);
            out.push_str(self.generation_role.as_str());
            out.push('\n');
        }
        out
    }
}
