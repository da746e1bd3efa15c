//! Role-tagged messages and conversations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Speaker of a conversation turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    /// The model's own turns (the trainable targets)
    Model,
    /// A tool result fed back into the conversation
    Tool,
}

impl Role {
    /// Lowercase role name as it appears in templated text
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Model => "model",
            Role::Tool => "tool",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reference to an image supplied alongside text
///
/// The crate never decodes pixels; the identifier is handed through to the
/// vision processor of the surrounding framework.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(pub String);

impl ImageRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One piece of a message body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentPart {
    Text { text: String },
    Image { image: ImageRef },
}

/// A single conversation turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: Vec<ContentPart>,
}

impl Message {
    /// Text-only message
    pub fn text(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            content: vec![ContentPart::Text { text: text.into() }],
        }
    }

    /// User message pairing an instruction with an image
    pub fn user_with_image(text: impl Into<String>, image: ImageRef) -> Self {
        Self {
            role: Role::User,
            content: vec![
                ContentPart::Text { text: text.into() },
                ContentPart::Image { image },
            ],
        }
    }

    /// Concatenated text parts of this message
    ///
    /// Image parts contribute nothing here; they are consumed by the
    /// vision processor, not the text template.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for part in &self.content {
            if let ContentPart::Text { text } = part {
                out.push_str(text);
            }
        }
        out
    }

    /// Whether any part of this message is an image
    pub fn has_image(&self) -> bool {
        self.content
            .iter()
            .any(|part| matches!(part, ContentPart::Image { .. }))
    }
}

/// An ordered sequence of messages
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Conversation {
    pub messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    /// Split a multi-turn conversation into evaluation pairs
    ///
    /// At every model turn, emits the conversation so far (the prompt
    /// context) together with that turn's text (the reference reply), then
    /// folds the turn into the context and continues. A conversation with
    /// several model turns therefore yields several pairs, each seeing all
    /// earlier turns.
    pub fn eval_pairs(&self) -> Vec<(Conversation, String)> {
        let mut context = Conversation::new();
        let mut pairs = Vec::new();
        for message in &self.messages {
            if message.role == Role::Model {
                pairs.push((context.clone(), message.text_content()));
            }
            context.push(message.clone());
        }
        pairs
    }
}

impl FromIterator<Message> for Conversation {
    fn from_iter<I: IntoIterator<Item = Message>>(iter: I) -> Self {
        Self {
            messages: iter.into_iter().collect(),
        }
    }
}
