use serde::{Deserialize, Serialize};

/// A patient review. Rating is 1–5 when present; unrated reviews still
/// count toward the review total but never toward the average.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientReview {
    pub id: i64,
    pub doctor_id: i64,
    pub rating: Option<f64>,
    pub comment: Option<String>,
}
