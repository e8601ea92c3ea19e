use serde::{Deserialize, Serialize};

/// A specialist related to the doctor. Name and specialization may be
/// missing in seed data; the similarity explainer substitutes placeholders
/// instead of failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarSpecialist {
    pub id: i64,
    pub doctor_id: i64,
    pub name: Option<String>,
    pub specialization: Option<String>,
}
