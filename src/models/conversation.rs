use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::enums::TurnRole;

/// One exchange unit in the session's turn log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: TurnRole,
    pub text: String,
    pub timestamp: NaiveDateTime,
}
