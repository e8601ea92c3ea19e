use std::path::Path;

use rusqlite::Connection;
use serde::Deserialize;

use super::parse::parse_percent;
use super::IngestError;
use crate::db::repository;
use crate::models::{Clinic, Doctor, Fee, PatientReview, SimilarSpecialist};

/// One-shot seed document: a single doctor plus related specialists.
#[derive(Debug, Deserialize)]
pub struct SeedFile {
    pub doctor: SeedDoctor,
    #[serde(default)]
    pub similar_specialists: Vec<SeedSpecialist>,
}

#[derive(Debug, Deserialize)]
pub struct SeedDoctor {
    pub name: String,
    #[serde(default)]
    pub degrees: Vec<String>,
    pub experience: Option<i64>,
    pub rating: Option<f64>,
    pub reviews_count: Option<i64>,
    pub recommendation_rate: Option<String>,
    pub clinics_count: Option<i64>,
    pub about: Option<String>,
    #[serde(default)]
    pub specializations: Vec<String>,
    #[serde(default)]
    pub languages_spoken: Vec<String>,
    #[serde(default)]
    pub associated_clinics: Vec<SeedClinic>,
    #[serde(default)]
    pub patient_reviews: Vec<SeedReview>,
}

#[derive(Debug, Deserialize)]
pub struct SeedClinic {
    pub name: String,
    pub location: Option<String>,
    pub fee: Option<Fee>,
}

#[derive(Debug, Deserialize)]
pub struct SeedReview {
    pub rating: Option<f64>,
    pub comment: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SeedSpecialist {
    pub name: Option<String>,
    pub specialization: Option<String>,
    pub doctor_id: Option<i64>,
}

/// Read and parse a seed document from disk.
pub fn load_seed_file(path: &Path) -> Result<SeedFile, IngestError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Insert a seed document as relational records: the doctor row first, then
/// the five dependent collections keyed by the store-assigned doctor id.
/// Returns that id.
///
/// Seed specialist entries that name no doctor are attached to the doctor
/// being ingested; an explicit (possibly dangling) id is kept as-is.
pub fn ingest_seed(conn: &Connection, seed: &SeedFile) -> Result<i64, IngestError> {
    let doctor = &seed.doctor;

    let doctor_id = repository::insert_doctor(
        conn,
        &Doctor {
            id: 0,
            name: doctor.name.clone(),
            degree: if doctor.degrees.is_empty() {
                None
            } else {
                Some(doctor.degrees.join(", "))
            },
            experience: doctor.experience,
            rating: doctor.rating,
            reviews_count: doctor.reviews_count,
            recommendation_rate: doctor
                .recommendation_rate
                .as_deref()
                .and_then(parse_percent),
            clinics_count: doctor.clinics_count,
            about: doctor.about.clone(),
        },
    )?;

    for specialization in &doctor.specializations {
        repository::insert_specialization(conn, doctor_id, specialization)?;
    }

    for language in &doctor.languages_spoken {
        repository::insert_language(conn, doctor_id, language)?;
    }

    for clinic in &doctor.associated_clinics {
        repository::insert_clinic(
            conn,
            &Clinic {
                id: 0,
                doctor_id,
                name: clinic.name.clone(),
                location: clinic.location.clone(),
                fee: clinic.fee.clone(),
            },
        )?;
    }

    for review in &doctor.patient_reviews {
        repository::insert_review(
            conn,
            &PatientReview {
                id: 0,
                doctor_id,
                rating: review.rating,
                comment: review.comment.clone(),
            },
        )?;
    }

    for specialist in &seed.similar_specialists {
        repository::insert_similar_specialist(
            conn,
            &SimilarSpecialist {
                id: 0,
                doctor_id: specialist.doctor_id.unwrap_or(doctor_id),
                name: specialist.name.clone(),
                specialization: specialist.specialization.clone(),
            },
        )?;
    }

    tracing::info!(
        doctor_id,
        name = %doctor.name,
        clinics = doctor.associated_clinics.len(),
        reviews = doctor.patient_reviews.len(),
        specialists = seed.similar_specialists.len(),
        "Seed document ingested"
    );

    Ok(doctor_id)
}
