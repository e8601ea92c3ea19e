pub mod enums;

pub mod clinic;
pub mod conversation;
pub mod doctor;
pub mod language;
pub mod profile;
pub mod review;
pub mod specialist;
pub mod specialization;

pub use clinic::{Clinic, Fee};
pub use conversation::ConversationTurn;
pub use doctor::Doctor;
pub use language::SpokenLanguage;
pub use profile::DoctorProfile;
pub use review::PatientReview;
pub use specialist::SimilarSpecialist;
pub use specialization::Specialization;
