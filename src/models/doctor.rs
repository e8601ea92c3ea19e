use serde::{Deserialize, Serialize};

/// One doctor row. The summary columns (`rating`, `reviews_count`,
/// `recommendation_rate`, `clinics_count`) are written at ingestion time;
/// the briefing recomputes the average rating from patient reviews and
/// never reads the stored one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    pub degree: Option<String>,
    pub experience: Option<i64>,
    pub rating: Option<f64>,
    pub reviews_count: Option<i64>,
    pub recommendation_rate: Option<i64>,
    pub clinics_count: Option<i64>,
    pub about: Option<String>,
}
