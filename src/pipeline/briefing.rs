use crate::models::{Clinic, DoctorProfile, PatientReview};

use super::similarity::explain_similarity;

/// Returned instead of a briefing when the store holds no doctors at all.
pub const NO_DOCTOR_SENTINEL: &str = "No doctor data found in database.";

/// Mean of the non-null ratings, rounded to two decimal places.
/// An empty or all-null review set averages to 0, not an error.
pub fn average_rating(reviews: &[PatientReview]) -> f64 {
    let ratings: Vec<f64> = reviews.iter().filter_map(|r| r.rating).collect();
    if ratings.is_empty() {
        return 0.0;
    }
    let mean = ratings.iter().sum::<f64>() / ratings.len() as f64;
    (mean * 100.0).round() / 100.0
}

/// "0" when unrated, one decimal for whole averages ("4.0"), otherwise the
/// rounded value as-is ("4.33").
fn format_rating(avg: f64) -> String {
    if avg == 0.0 {
        "0".to_string()
    } else if avg.fract() == 0.0 {
        format!("{avg:.1}")
    } else {
        format!("{avg}")
    }
}

fn format_clinics(clinics: &[Clinic]) -> String {
    clinics
        .iter()
        .map(|c| {
            format!(
                "- {} ({}), Fee: {}",
                c.name,
                c.location.as_deref().unwrap_or("N/A"),
                c.fee
                    .as_ref()
                    .map(|f| f.to_string())
                    .unwrap_or_else(|| "N/A".into()),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the system briefing for one doctor — the model's only permitted
/// knowledge source for the session.
///
/// Briefs on the first profile in fetch order: deployments seed a single
/// doctor, so there is no selection policy beyond that. Everything in the
/// rendered document comes from the profile's own contents.
pub fn compile_briefing(profiles: &[DoctorProfile]) -> String {
    let Some(profile) = profiles.first() else {
        return NO_DOCTOR_SENTINEL.to_string();
    };

    let experience = profile
        .doctor
        .experience
        .map(|y| y.to_string())
        .unwrap_or_else(|| "N/A".into());

    let mut briefing = format!(
        "You are an AI assistant chatbot specialized in providing detailed and professional information about doctors.

Doctor Information:
- Name: {name}
- Degrees: {degrees}
- Experience: {experience} years
- Average Rating: {avg_rating}
- Languages Spoken: {languages}
- Clinics:
{clinics_info}

Patient Reviews Summary:
{review_count} reviews available.
",
        name = profile.doctor.name,
        degrees = profile.specializations.join(", "),
        avg_rating = format_rating(average_rating(&profile.reviews)),
        languages = profile.languages.join(", "),
        clinics_info = format_clinics(&profile.clinics),
        review_count = profile.reviews.len(),
    );

    let similar = explain_similarity(profile);
    if !similar.is_empty() {
        briefing.push_str("\nSimilar Specialists:\n");
        briefing.push_str(&similar);
        briefing.push('\n');
    }

    briefing.push_str(
        "\nYou will answer user queries based on this data only. Always be polite and professional.

If the user asks about the doctor's specialties, clinics, experience, or reviews, provide accurate info.
If you don't know the answer from the data, respond with \"I'm sorry, I don't have that information.\"

Only provide info related to the above data. Do not guess or fabricate.",
    );

    briefing
}
