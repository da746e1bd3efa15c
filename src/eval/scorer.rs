//! Batch evaluation of reference/generated text pairs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::chat::SpecialToken;
use crate::error::{Error, Result};
use crate::tokenizer::Tokenizer;

use super::sequence::{bag_overlap_ratio, longest_common_run};

/// Which scoring branch an example takes
///
/// Decided by the reference text alone, before tokenization, so a model
/// that hallucinates tool markup into a conversational reply is still
/// scored as conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    /// The reference reply is a structured function call
    ToolInvocation,
    /// Free-form assistant text
    Conversational,
}

impl ResponseKind {
    /// Classify a reference reply by the presence of the tool-call marker
    pub fn of(reference: &str) -> Self {
        if reference.contains(SpecialToken::ToolCall.as_str()) {
            ResponseKind::ToolInvocation
        } else {
            ResponseKind::Conversational
        }
    }
}

/// One reference/generated pair to score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalExample {
    /// Ground-truth reply from the dataset
    pub reference: String,
    /// What the model actually generated
    pub generated: String,
}

impl EvalExample {
    pub fn new(reference: impl Into<String>, generated: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            generated: generated.into(),
        }
    }
}

/// Aggregate scores over a batch, split by response kind
///
/// A category with no examples reports `None` rather than zero; "no data"
/// and "scored zero" are different findings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvalReport {
    /// Mean tool-invocation score, if any such examples were seen
    pub tool_accuracy: Option<f32>,
    /// Mean conversational overlap, if any such examples were seen
    pub chat_overlap: Option<f32>,
    pub tool_examples: usize,
    pub chat_examples: usize,
}

impl EvalReport {
    pub fn total_examples(&self) -> usize {
        self.tool_examples + self.chat_examples
    }
}

impl fmt::Display for EvalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tool_accuracy {
            Some(score) => writeln!(
                f,
                "Accuracy in function calling: {score:.5} ({} examples)",
                self.tool_examples
            )?,
            None => writeln!(f, "Accuracy in function calling: no data")?,
        }
        match self.chat_overlap {
            Some(score) => write!(
                f,
                "Match in helpful exchange: {score:.5} ({} examples)",
                self.chat_examples
            ),
            None => write!(f, "Match in helpful exchange: no data"),
        }
    }
}

/// Score a batch of examples, aggregating per response kind
///
/// Tool-invocation examples are scored as `longest_common_run / reference
/// length`; conversational examples as [`bag_overlap_ratio`]. An empty
/// tokenized reference on the tool branch is rejected with
/// [`Error::EmptyReference`]; dividing by it would silently poison the
/// aggregate.
pub fn evaluate<T>(examples: &[EvalExample], tokenizer: &T) -> Result<EvalReport>
where
    T: Tokenizer + ?Sized,
{
    let mut tool_scores = Vec::new();
    let mut chat_scores = Vec::new();

    for (index, example) in examples.iter().enumerate() {
        let reference = tokenizer.encode(&example.reference)?;
        let generated = tokenizer.encode(&example.generated)?;

        match ResponseKind::of(&example.reference) {
            ResponseKind::ToolInvocation => {
                if reference.is_empty() {
                    return Err(Error::EmptyReference(index));
                }
                let run = longest_common_run(&reference, &generated);
                tool_scores.push(run as f32 / reference.len() as f32);
            }
            ResponseKind::Conversational => {
                chat_scores.push(bag_overlap_ratio(&reference, &generated));
            }
        }
    }

    Ok(EvalReport {
        tool_accuracy: mean(&tool_scores),
        chat_overlap: mean(&chat_scores),
        tool_examples: tool_scores.len(),
        chat_examples: chat_scores.len(),
    })
}

fn mean(scores: &[f32]) -> Option<f32> {
    if scores.is_empty() {
        None
    } else {
        Some(scores.iter().sum::<f32>() / scores.len() as f32)
    }
}
