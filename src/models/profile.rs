use serde::{Deserialize, Serialize};

use super::{Clinic, Doctor, PatientReview, SimilarSpecialist};

/// The denormalized aggregate of one doctor plus everything joined to it.
/// Built once per session by the aggregator; the compiled briefing may
/// surface nothing outside this struct's recursive contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorProfile {
    pub doctor: Doctor,
    pub specializations: Vec<String>,
    pub languages: Vec<String>,
    pub clinics: Vec<Clinic>,
    pub reviews: Vec<PatientReview>,
    pub similar_specialists: Vec<SimilarSpecialist>,
}
