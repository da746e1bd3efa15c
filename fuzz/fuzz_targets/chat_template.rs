#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use afinar::chat::{ChatTemplate, Conversation, Message, Role};
use afinar::eval::ResponseKind;

/// Fuzz target for chat template rendering and response classification
///
/// Rendering must never panic on arbitrary message text, and the rendered
/// output must keep its structural guarantees.

#[derive(Arbitrary, Debug)]
struct FuzzTurn {
    role: u8,
    text: String,
}

#[derive(Arbitrary, Debug)]
struct FuzzDialogue {
    turns: Vec<FuzzTurn>,
    add_generation_prompt: bool,
}

fuzz_target!(|dialogue: FuzzDialogue| {
    let mut conversation = Conversation::new();
    for turn in &dialogue.turns {
        let role = match turn.role % 4 {
            0 => Role::System,
            1 => Role::User,
            2 => Role::Model,
            _ => Role::Tool,
        };
        conversation.push(Message::text(role, turn.text.clone()));
    }

    let template = ChatTemplate::default();
    let rendered = template.render(&conversation, dialogue.add_generation_prompt);

    // Invariant 1: always begins with BOS
    assert!(rendered.starts_with("<bos>"));

    // Invariant 2: a generation prompt leaves an open model turn at the end
    if dialogue.add_generation_prompt {
        assert!(rendered.ends_with("<start_of_turn>model\n"));
    }

    // Invariant 3: every non-system turn opens and closes
    // (message text can itself contain markers, so these are lower bounds)
    let body_turns = conversation
        .iter()
        .filter(|m| m.role != Role::System)
        .count();
    let opened = rendered.matches("<start_of_turn>").count();
    let closed = rendered.matches("<end_of_turn>").count();
    assert!(opened >= body_turns + usize::from(dialogue.add_generation_prompt));
    assert!(closed >= body_turns);

    // Invariant 4: classification never panics on arbitrary text
    for turn in &dialogue.turns {
        let kind = ResponseKind::of(&turn.text);
        assert_eq!(
            kind == ResponseKind::ToolInvocation,
            turn.text.contains("<tool_call>")
        );
    }
});
