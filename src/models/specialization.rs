use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Specialization {
    pub id: i64,
    pub doctor_id: i64,
    pub specialization: String,
}
