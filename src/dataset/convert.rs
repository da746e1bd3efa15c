//! Sample-to-conversation conversion.

use serde::{Deserialize, Serialize};

use crate::chat::{Conversation, ImageRef, Message, Role};
use crate::error::{Error, Result};

/// Instruction used for radiology captioning runs
pub const RADIOLOGY_INSTRUCTION: &str =
    "You are an expert radiologist. Describe accurately what you see in this image.";

/// A visual question-answering row: one question about one image, with one
/// or more acceptable answers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VqaSample {
    pub question: String,
    pub image: ImageRef,
    pub answers: Vec<String>,
}

/// A captioned image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptionSample {
    pub image: ImageRef,
    pub caption: String,
}

/// Convert a VQA sample into a two-turn conversation
///
/// The user turn carries the question and the image; the model turn carries
/// the first listed answer. Samples without answers are rejected.
pub fn vqa_to_conversation(sample: &VqaSample) -> Result<Conversation> {
    let answer = sample.answers.first().ok_or(Error::MissingAnswer)?;

    let mut conversation = Conversation::new();
    conversation.push(Message::user_with_image(
        sample.question.clone(),
        sample.image.clone(),
    ));
    conversation.push(Message::text(Role::Model, answer.clone()));
    Ok(conversation)
}

/// Convert a captioned image into a two-turn conversation
///
/// Every sample shares the same instruction; the caption becomes the model
/// turn.
pub fn caption_to_conversation(sample: &CaptionSample, instruction: &str) -> Conversation {
    let mut conversation = Conversation::new();
    conversation.push(Message::user_with_image(
        instruction.to_string(),
        sample.image.clone(),
    ));
    conversation.push(Message::text(Role::Model, sample.caption.clone()));
    conversation
}
