use rusqlite::Connection;
use uuid::Uuid;

use super::aggregate::build_profiles;
use super::briefing::compile_briefing;
use super::conversation::{ConversationLog, HISTORY_WINDOW};
use super::prompt::build_turn_prompt;
use super::ChatError;
use crate::db::repository;
use crate::models::enums::TurnRole;
use crate::models::{ConversationTurn, DoctorProfile};

/// Trait for text generation within the per-turn pipeline.
pub trait CompletionModel {
    fn complete(&self, prompt: &str) -> Result<String, ChatError>;
}

/// Substituted when the completion service returns empty output, so
/// emptiness never propagates downstream.
pub const FALLBACK_RESPONSE: &str = "Sorry, I couldn't generate a response.";

/// Session-scoped context for one chat: the aggregated profiles, the
/// compiled briefing, and the turn log. Collections are fetched once at
/// construction and again only on an explicit `refresh()`.
pub struct ChatSession<'a, G: CompletionModel> {
    conn: &'a Connection,
    gateway: &'a G,
    session_id: Uuid,
    profiles: Vec<DoctorProfile>,
    briefing: String,
    log: ConversationLog,
}

impl<'a, G: CompletionModel> ChatSession<'a, G> {
    pub fn new(conn: &'a Connection, gateway: &'a G) -> Result<Self, ChatError> {
        let session_id = Uuid::new_v4();
        let (profiles, briefing) = load_context(conn)?;

        tracing::info!(
            session = %session_id,
            doctors = profiles.len(),
            briefing_chars = briefing.len(),
            "Chat session ready"
        );

        Ok(Self {
            conn,
            gateway,
            session_id,
            profiles,
            briefing,
            log: ConversationLog::new(),
        })
    }

    /// Re-fetch the collections and recompile the briefing. The turn log
    /// is untouched.
    pub fn refresh(&mut self) -> Result<(), ChatError> {
        let (profiles, briefing) = load_context(self.conn)?;
        self.profiles = profiles;
        self.briefing = briefing;
        tracing::info!(session = %self.session_id, "Session context refreshed");
        Ok(())
    }

    pub fn briefing(&self) -> &str {
        &self.briefing
    }

    pub fn profiles(&self) -> &[DoctorProfile] {
        &self.profiles
    }

    pub fn history(&self) -> &[ConversationTurn] {
        self.log.turns()
    }

    /// One blocking turn: append the user text, build the prompt from the
    /// briefing plus the trailing window, call the gateway, substitute the
    /// fallback for empty output, then append and return the response.
    pub fn handle_turn(&mut self, user_text: &str) -> Result<String, ChatError> {
        self.log.append(TurnRole::User, user_text);
        let window = self.log.window(HISTORY_WINDOW);
        let prompt = build_turn_prompt(&self.briefing, window, user_text);

        tracing::debug!(
            session = %self.session_id,
            prompt_chars = prompt.len(),
            "Dispatching turn"
        );

        let raw = self.gateway.complete(&prompt)?;
        let response = if raw.trim().is_empty() {
            FALLBACK_RESPONSE.to_string()
        } else {
            raw
        };

        self.log.append(TurnRole::Assistant, &response);
        Ok(response)
    }
}

fn load_context(conn: &Connection) -> Result<(Vec<DoctorProfile>, String), ChatError> {
    let records = repository::fetch_all_records(conn)?;
    let profiles = build_profiles(&records);
    let briefing = compile_briefing(&profiles);
    Ok((profiles, briefing))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::db::repository::{insert_clinic, insert_doctor, insert_review, insert_specialization};
    use crate::db::sqlite::open_memory_database;
    use crate::models::*;
    use crate::pipeline::briefing::NO_DOCTOR_SENTINEL;
    use crate::pipeline::ollama::MockModel;

    /// Records every prompt it is handed, so tests can inspect composition.
    struct CapturingModel {
        prompts: RefCell<Vec<String>>,
        response: String,
    }

    impl CapturingModel {
        fn new(response: &str) -> Self {
            Self {
                prompts: RefCell::new(Vec::new()),
                response: response.to_string(),
            }
        }
    }

    impl CompletionModel for CapturingModel {
        fn complete(&self, prompt: &str) -> Result<String, ChatError> {
            self.prompts.borrow_mut().push(prompt.to_string());
            Ok(self.response.clone())
        }
    }

    fn seed_doctor(conn: &rusqlite::Connection) -> i64 {
        let doctor_id = insert_doctor(
            conn,
            &Doctor {
                id: 0,
                name: "Dr. Asha Mehta".into(),
                degree: Some("MBBS, MD".into()),
                experience: Some(12),
                rating: None,
                reviews_count: None,
                recommendation_rate: None,
                clinics_count: None,
                about: None,
            },
        )
        .unwrap();
        insert_specialization(conn, doctor_id, "Cardiology").unwrap();
        doctor_id
    }

    #[test]
    fn turn_appends_user_and_assistant() {
        let conn = open_memory_database().unwrap();
        seed_doctor(&conn);

        let gateway = MockModel::new("Dr. Mehta has 12 years of experience.");
        let mut session = ChatSession::new(&conn, &gateway).unwrap();

        let response = session.handle_turn("How experienced is the doctor?").unwrap();
        assert_eq!(response, "Dr. Mehta has 12 years of experience.");

        let history = session.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].role, TurnRole::User);
        assert_eq!(history[0].text, "How experienced is the doctor?");
        assert_eq!(history[1].role, TurnRole::Assistant);
    }

    #[test]
    fn empty_completion_becomes_fallback() {
        let conn = open_memory_database().unwrap();
        seed_doctor(&conn);

        let gateway = MockModel::new("   \n");
        let mut session = ChatSession::new(&conn, &gateway).unwrap();

        let response = session.handle_turn("Anything?").unwrap();
        assert_eq!(response, FALLBACK_RESPONSE);
        // The fallback is what gets logged, not the empty output
        assert_eq!(session.history()[1].text, FALLBACK_RESPONSE);
    }

    #[test]
    fn empty_store_briefs_with_sentinel() {
        let conn = open_memory_database().unwrap();
        let gateway = MockModel::new("ok");
        let session = ChatSession::new(&conn, &gateway).unwrap();

        assert!(session.profiles().is_empty());
        assert_eq!(session.briefing(), NO_DOCTOR_SENTINEL);
    }

    #[test]
    fn prompt_carries_briefing_and_windowed_history() {
        let conn = open_memory_database().unwrap();
        seed_doctor(&conn);

        let gateway = CapturingModel::new("Noted.");
        let mut session = ChatSession::new(&conn, &gateway).unwrap();

        for i in 0..4 {
            session.handle_turn(&format!("question {i}")).unwrap();
        }

        let prompts = gateway.prompts.borrow();
        let last = prompts.last().unwrap();
        assert!(last.contains("Dr. Asha Mehta"));
        assert!(last.contains("\n\nConversation:\n"));
        assert!(last.ends_with("User: question 3"));

        // Fourth turn: the 5-turn window covers "question 1" onward,
        // so the first exchange has scrolled out
        assert!(!last.contains("question 0"));
        assert!(last.contains("question 1"));
        assert!(last.contains("question 2"));
    }

    #[test]
    fn refresh_picks_up_new_records() {
        let conn = open_memory_database().unwrap();
        let gateway = MockModel::new("ok");
        let mut session = ChatSession::new(&conn, &gateway).unwrap();
        assert_eq!(session.briefing(), NO_DOCTOR_SENTINEL);

        seed_doctor(&conn);
        session.refresh().unwrap();

        assert_eq!(session.profiles().len(), 1);
        assert!(session.briefing().contains("Dr. Asha Mehta"));
    }

    #[test]
    fn session_end_to_end_briefing_renders_clinic_placeholders() {
        let conn = open_memory_database().unwrap();
        let doctor_id = seed_doctor(&conn);

        insert_clinic(
            &conn,
            &Clinic {
                id: 0,
                doctor_id,
                name: "North Clinic".into(),
                location: Some("Town A".into()),
                fee: Some(Fee::Amount(50.0)),
            },
        )
        .unwrap();
        insert_clinic(
            &conn,
            &Clinic {
                id: 0,
                doctor_id,
                name: "South Clinic".into(),
                location: None,
                fee: None,
            },
        )
        .unwrap();
        insert_review(
            &conn,
            &PatientReview {
                id: 0,
                doctor_id,
                rating: Some(5.0),
                comment: Some("Excellent".into()),
            },
        )
        .unwrap();

        let gateway = MockModel::new("ok");
        let session = ChatSession::new(&conn, &gateway).unwrap();

        let clinic_lines: Vec<&str> = session
            .briefing()
            .lines()
            .filter(|l| l.starts_with("- ") && l.contains("Fee:"))
            .collect();
        assert_eq!(clinic_lines.len(), 2);
        assert_eq!(clinic_lines[0], "- North Clinic (Town A), Fee: 50");
        assert_eq!(clinic_lines[1], "- South Clinic (N/A), Fee: N/A");
    }
}
