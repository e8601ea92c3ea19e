use chrono::Local;

use crate::models::enums::TurnRole;
use crate::models::ConversationTurn;

/// Hard cap on retained turns. Once reached, the oldest turn is evicted on
/// append so a long-lived session cannot grow without bound.
pub const MAX_TURNS: usize = 256;

/// Number of trailing turns included in each prompt.
pub const HISTORY_WINDOW: usize = 5;

/// Ordered, append-only log of turns for one session. Nothing is persisted;
/// the log dies with the session.
#[derive(Debug, Default)]
pub struct ConversationLog {
    turns: Vec<ConversationTurn>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self { turns: Vec::new() }
    }

    pub fn append(&mut self, role: TurnRole, text: &str) {
        if self.turns.len() == MAX_TURNS {
            self.turns.remove(0);
        }
        self.turns.push(ConversationTurn {
            role,
            text: text.to_string(),
            timestamp: Local::now().naive_local(),
        });
    }

    /// The last `n` turns in original order (all of them when the history
    /// is shorter).
    pub fn window(&self, n: usize) -> &[ConversationTurn] {
        let start = self.turns.len().saturating_sub(n);
        &self.turns[start..]
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
