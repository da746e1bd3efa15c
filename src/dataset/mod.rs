//! Dataset preparation for supervised fine-tuning
//!
//! Raw samples (VQA rows, captioned images, recorded dialogues) become
//! conversations, get rendered through the chat template, are dropped when
//! they exceed the model's sequence budget, and are split into train/test
//! partitions with a seeded shuffle.
//!
//! # Example
//!
//! ```
//! use afinar::chat::ImageRef;
//! use afinar::dataset::{vqa_to_conversation, VqaSample};
//!
//! let sample = VqaSample {
//!     question: "What is the total?".to_string(),
//!     image: ImageRef::new("invoice-3"),
//!     answers: vec!["$42.00".to_string()],
//! };
//! let conversation = vqa_to_conversation(&sample).unwrap();
//! assert_eq!(conversation.len(), 2);
//! ```

mod convert;
mod filter;
mod split;

#[cfg(test)]
mod tests;

pub use convert::{
    caption_to_conversation, vqa_to_conversation, CaptionSample, VqaSample,
    RADIOLOGY_INSTRUCTION,
};
pub use filter::LengthFilter;
pub use split::train_test_split;
