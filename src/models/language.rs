use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpokenLanguage {
    pub id: i64,
    pub doctor_id: i64,
    pub language: String,
}
