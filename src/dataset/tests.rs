//! Tests for dataset conversion, filtering, and splitting

use proptest::prelude::*;

use crate::chat::{ChatTemplate, Conversation, ImageRef, Message, Role};
use crate::error::Error;
use crate::tokenizer::{CharTokenizer, Tokenizer};

use super::*;

fn vqa_sample() -> VqaSample {
    VqaSample {
        question: "What is the invoice total?".to_string(),
        image: ImageRef::new("invoice-0042"),
        answers: vec!["$42.00".to_string(), "42 dollars".to_string()],
    }
}

#[test]
fn test_vqa_conversion_shape() {
    let conversation = vqa_to_conversation(&vqa_sample()).unwrap();

    assert_eq!(conversation.len(), 2);
    let user = &conversation.messages[0];
    assert_eq!(user.role, Role::User);
    assert!(user.has_image());
    assert_eq!(user.text_content(), "What is the invoice total?");

    // Only the first answer is used
    let model = &conversation.messages[1];
    assert_eq!(model.role, Role::Model);
    assert_eq!(model.text_content(), "$42.00");
}

#[test]
fn test_vqa_conversion_requires_an_answer() {
    let mut sample = vqa_sample();
    sample.answers.clear();

    let err = vqa_to_conversation(&sample).unwrap_err();
    assert!(matches!(err, Error::MissingAnswer));
}

#[test]
fn test_caption_conversion_uses_instruction() {
    let sample = CaptionSample {
        image: ImageRef::new("xray-17"),
        caption: "No acute findings.".to_string(),
    };

    let conversation = caption_to_conversation(&sample, RADIOLOGY_INSTRUCTION);
    assert_eq!(conversation.len(), 2);
    assert_eq!(conversation.messages[0].text_content(), RADIOLOGY_INSTRUCTION);
    assert_eq!(conversation.messages[1].text_content(), "No acute findings.");
}

#[test]
fn test_length_filter_drops_long_conversations() {
    let short = Conversation::from_iter([Message::text(Role::User, "hi")]);
    let long = Conversation::from_iter([Message::text(
        Role::User,
        "a much longer message that will not fit in the budget",
    )]);

    let template = ChatTemplate::default();
    let mut tokenizer = CharTokenizer::new();
    tokenizer.fit(&[
        template.render(&short, false),
        template.render(&long, false),
    ]);

    let budget = tokenizer
        .encode(&template.render(&short, false))
        .unwrap()
        .len();
    let filter = LengthFilter::new(&template, &tokenizer, budget);

    let kept = filter.apply(&[short.clone(), long]).unwrap();
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0], template.render(&short, false));
}

#[test]
fn test_length_filter_keeps_exact_fit() {
    let conversation = Conversation::from_iter([Message::text(Role::User, "ok")]);
    let template = ChatTemplate::default();
    let rendered = template.render(&conversation, false);

    let mut tokenizer = CharTokenizer::new();
    tokenizer.fit(&[rendered.as_str()]);
    let budget = tokenizer.encode(&rendered).unwrap().len();

    let filter = LengthFilter::new(&template, &tokenizer, budget);
    assert!(filter.render_if_fits(&conversation).unwrap().is_some());

    let filter = LengthFilter::new(&template, &tokenizer, budget - 1);
    assert!(filter.render_if_fits(&conversation).unwrap().is_none());
}

#[test]
fn test_split_is_deterministic_per_seed() {
    let items: Vec<u32> = (0..100).collect();

    let (train_a, test_a) = train_test_split(&items, 0.2, 0).unwrap();
    let (train_b, test_b) = train_test_split(&items, 0.2, 0).unwrap();
    assert_eq!(train_a, train_b);
    assert_eq!(test_a, test_b);

    let (_, test_c) = train_test_split(&items, 0.2, 1).unwrap();
    assert_ne!(test_a, test_c);
}

#[test]
fn test_split_sizes() {
    let items: Vec<u32> = (0..10).collect();
    let (train, test) = train_test_split(&items, 0.2, 0).unwrap();

    assert_eq!(test.len(), 2);
    assert_eq!(train.len(), 8);
}

#[test]
fn test_split_rejects_bad_fraction() {
    let items = [1, 2, 3];
    assert!(train_test_split(&items, 0.0, 0).is_err());
    assert!(train_test_split(&items, 1.0, 0).is_err());
    assert!(train_test_split(&items, -0.5, 0).is_err());
}

#[test]
fn test_split_empty_input() {
    let items: [u32; 0] = [];
    let (train, test) = train_test_split(&items, 0.5, 0).unwrap();
    assert!(train.is_empty());
    assert!(test.is_empty());
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(100))]

    /// Every item lands in exactly one partition
    #[test]
    fn prop_split_is_a_partition(
        len in 0usize..200,
        test_size in 0.05f64..0.95,
        seed in 0u64..1000,
    ) {
        let items: Vec<usize> = (0..len).collect();
        let (train, test) = train_test_split(&items, test_size, seed).unwrap();

        prop_assert_eq!(train.len() + test.len(), len);

        let mut all: Vec<usize> = train.iter().chain(test.iter()).copied().collect();
        all.sort_unstable();
        prop_assert_eq!(all, items);
    }
}
