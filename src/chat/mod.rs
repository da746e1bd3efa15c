//! Conversational data model and chat templating
//!
//! Fine-tuning datasets arrive as multi-turn conversations; the model
//! consumes them as a single templated string. This module provides:
//!
//! - `Message` / `Conversation`: role-tagged turns with text and image parts
//! - `SpecialToken`: the ChatML markup inventory (`<tool_call>`, `<think>`, ...)
//! - `ChatTemplate`: turn-based rendering with an optional generation prompt
//!
//! # Example
//!
//! ```
//! use afinar::chat::{ChatTemplate, Conversation, Message, Role};
//!
//! let mut conversation = Conversation::new();
//! conversation.push(Message::text(Role::User, "What is 2+2?"));
//! conversation.push(Message::text(Role::Model, "4"));
//!
//! let template = ChatTemplate::default();
//! let prompt = template.render(&conversation, false);
//! assert!(prompt.contains("<start_of_turn>user"));
//! ```

mod message;
mod special;
mod template;


pub use message::{ContentPart, Conversation, ImageRef, Message, Role};
pub use special::SpecialToken;
pub use template::ChatTemplate;
