use crate::models::ConversationTurn;

/// Compose the per-turn prompt: session briefing, then the windowed history
/// under a "Conversation:" heading, then the latest user line. The latest
/// user turn appears both at the window tail and on the final "User:" line;
/// the trailing line is what the model completes against.
pub fn build_turn_prompt(
    briefing: &str,
    history: &[ConversationTurn],
    user_text: &str,
) -> String {
    let mut prompt = String::with_capacity(briefing.len() + 256);
    prompt.push_str(briefing);
    prompt.push_str("\n\nConversation:\n");
    for turn in history {
        prompt.push_str(&format!("{}: {}\n", turn.role.label(), turn.text));
    }
    prompt.push_str(&format!("User: {user_text}"));
    prompt
}
