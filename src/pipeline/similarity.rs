use crate::models::DoctorProfile;

const UNKNOWN_SPECIALIST: &str = "Unknown specialist";
const UNKNOWN_SPECIALIZATION: &str = "Unknown specialization";

/// One explanatory line per similar-specialist entry, newline-joined in
/// input order. An entry whose specialization appears in the doctor's own
/// set (exact string match) is "shared"; anything else is called related
/// or complementary. Missing fields get placeholder text, never an error.
pub fn explain_similarity(profile: &DoctorProfile) -> String {
    profile
        .similar_specialists
        .iter()
        .map(|specialist| {
            let name = specialist.name.as_deref().unwrap_or(UNKNOWN_SPECIALIST);
            let spec = specialist
                .specialization
                .as_deref()
                .unwrap_or(UNKNOWN_SPECIALIZATION);

            if profile.specializations.iter().any(|s| s == spec) {
                format!("{name} shares specialization in {spec}.")
            } else {
                format!("{name} specializes in {spec}, which is related or complementary.")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
