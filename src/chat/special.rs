//! ChatML special-token inventory.

use std::fmt;

/// Special tokens used in the ChatML function-calling format
///
/// These are added to the tokenizer vocabulary before fine-tuning so each
/// marker encodes as a single unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialToken {
    /// Opens the tool catalog in the system turn
    Tools,
    EndTools,
    /// Wraps model reasoning that is not part of the reply
    Think,
    EndThink,
    /// Wraps a structured function call in a model reply
    ToolCall,
    EndToolCall,
    /// Wraps the result a tool returns to the model
    ToolResponse,
    EndToolResponse,
    Pad,
    Eos,
}

impl SpecialToken {
    /// The literal markup for this token
    pub const fn as_str(self) -> &'static str {
        match self {
            SpecialToken::Tools => "<tools>",
            SpecialToken::EndTools => "</tools>",
            SpecialToken::Think => "<think>",
            SpecialToken::EndThink => "</think>",
            SpecialToken::ToolCall => "<tool_call>",
            SpecialToken::EndToolCall => "</tool_call>",
            SpecialToken::ToolResponse => "<tool_response>",
            SpecialToken::EndToolResponse => "</tool_response>",
            SpecialToken::Pad => "<pad>",
            SpecialToken::Eos => "<eos>",
        }
    }

    /// Every special token, in declaration order
    pub const fn all() -> [SpecialToken; 10] {
        [
            SpecialToken::Tools,
            SpecialToken::EndTools,
            SpecialToken::Think,
            SpecialToken::EndThink,
            SpecialToken::ToolCall,
            SpecialToken::EndToolCall,
            SpecialToken::ToolResponse,
            SpecialToken::EndToolResponse,
            SpecialToken::Pad,
            SpecialToken::Eos,
        ]
    }
}

impl fmt::Display for SpecialToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
