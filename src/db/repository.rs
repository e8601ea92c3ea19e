use rusqlite::{params, Connection};

use super::DatabaseError;
use crate::models::*;

/// The six flat collections as fetched from the store, in insertion order.
/// All joining happens in the aggregator; no filtering is pushed down here.
#[derive(Debug, Clone, Default)]
pub struct RecordCollections {
    pub doctors: Vec<Doctor>,
    pub specializations: Vec<Specialization>,
    pub languages: Vec<SpokenLanguage>,
    pub clinics: Vec<Clinic>,
    pub reviews: Vec<PatientReview>,
    pub similar_specialists: Vec<SimilarSpecialist>,
}

/// Fetch all six collections in one pass.
pub fn fetch_all_records(conn: &Connection) -> Result<RecordCollections, DatabaseError> {
    Ok(RecordCollections {
        doctors: fetch_doctors(conn)?,
        specializations: fetch_specializations(conn)?,
        languages: fetch_languages(conn)?,
        clinics: fetch_clinics(conn)?,
        reviews: fetch_reviews(conn)?,
        similar_specialists: fetch_similar_specialists(conn)?,
    })
}

// ═══════════════════════════════════════════
// Doctors
// ═══════════════════════════════════════════

/// Insert a doctor row. The `id` field is ignored; the store assigns the
/// rowid, which is returned.
pub fn insert_doctor(conn: &Connection, doctor: &Doctor) -> Result<i64, DatabaseError> {
    conn.execute(
        "INSERT INTO doctors (name, degree, experience, rating, reviews_count,
         recommendation_rate, clinics_count, about)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            doctor.name,
            doctor.degree,
            doctor.experience,
            doctor.rating,
            doctor.reviews_count,
            doctor.recommendation_rate,
            doctor.clinics_count,
            doctor.about,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn fetch_doctors(conn: &Connection) -> Result<Vec<Doctor>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, degree, experience, rating, reviews_count,
         recommendation_rate, clinics_count, about
         FROM doctors ORDER BY id",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(Doctor {
            id: row.get(0)?,
            name: row.get(1)?,
            degree: row.get(2)?,
            experience: row.get(3)?,
            rating: row.get(4)?,
            reviews_count: row.get(5)?,
            recommendation_rate: row.get(6)?,
            clinics_count: row.get(7)?,
            about: row.get(8)?,
        })
    })?;

    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

// ═══════════════════════════════════════════
// Specializations & languages
// ═══════════════════════════════════════════

pub fn insert_specialization(
    conn: &Connection,
    doctor_id: i64,
    specialization: &str,
) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO doctor_specializations (doctor_id, specialization) VALUES (?1, ?2)",
        params![doctor_id, specialization],
    )?;
    Ok(())
}

pub fn fetch_specializations(conn: &Connection) -> Result<Vec<Specialization>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, doctor_id, specialization FROM doctor_specializations ORDER BY id",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(Specialization {
            id: row.get(0)?,
            doctor_id: row.get(1)?,
            specialization: row.get(2)?,
        })
    })?;

    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

pub fn insert_language(
    conn: &Connection,
    doctor_id: i64,
    language: &str,
) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO doctor_languages (doctor_id, language) VALUES (?1, ?2)",
        params![doctor_id, language],
    )?;
    Ok(())
}

pub fn fetch_languages(conn: &Connection) -> Result<Vec<SpokenLanguage>, DatabaseError> {
    let mut stmt =
        conn.prepare("SELECT id, doctor_id, language FROM doctor_languages ORDER BY id")?;

    let rows = stmt.query_map([], |row| {
        Ok(SpokenLanguage {
            id: row.get(0)?,
            doctor_id: row.get(1)?,
            language: row.get(2)?,
        })
    })?;

    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

// ═══════════════════════════════════════════
// Clinics
// ═══════════════════════════════════════════

pub fn insert_clinic(conn: &Connection, clinic: &Clinic) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO clinics (doctor_id, name, location, fee) VALUES (?1, ?2, ?3, ?4)",
        params![
            clinic.doctor_id,
            clinic.name,
            clinic.location,
            clinic.fee.as_ref().map(|f| f.to_string()),
        ],
    )?;
    Ok(())
}

pub fn fetch_clinics(conn: &Connection) -> Result<Vec<Clinic>, DatabaseError> {
    let mut stmt =
        conn.prepare("SELECT id, doctor_id, name, location, fee FROM clinics ORDER BY id")?;

    let rows = stmt.query_map([], |row| {
        Ok(Clinic {
            id: row.get(0)?,
            doctor_id: row.get(1)?,
            name: row.get(2)?,
            location: row.get(3)?,
            fee: row.get::<_, Option<String>>(4)?.map(Fee::from_stored),
        })
    })?;

    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

// ═══════════════════════════════════════════
// Patient reviews
// ═══════════════════════════════════════════

pub fn insert_review(conn: &Connection, review: &PatientReview) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO patient_reviews (doctor_id, rating, comment) VALUES (?1, ?2, ?3)",
        params![review.doctor_id, review.rating, review.comment],
    )?;
    Ok(())
}

pub fn fetch_reviews(conn: &Connection) -> Result<Vec<PatientReview>, DatabaseError> {
    let mut stmt =
        conn.prepare("SELECT id, doctor_id, rating, comment FROM patient_reviews ORDER BY id")?;

    let rows = stmt.query_map([], |row| {
        Ok(PatientReview {
            id: row.get(0)?,
            doctor_id: row.get(1)?,
            rating: row.get(2)?,
            comment: row.get(3)?,
        })
    })?;

    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

// ═══════════════════════════════════════════
// Similar specialists
// ═══════════════════════════════════════════

pub fn insert_similar_specialist(
    conn: &Connection,
    specialist: &SimilarSpecialist,
) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO similar_specialists (doctor_id, name, specialization) VALUES (?1, ?2, ?3)",
        params![
            specialist.doctor_id,
            specialist.name,
            specialist.specialization,
        ],
    )?;
    Ok(())
}

pub fn fetch_similar_specialists(
    conn: &Connection,
) -> Result<Vec<SimilarSpecialist>, DatabaseError> {
    let mut stmt = conn
        .prepare("SELECT id, doctor_id, name, specialization FROM similar_specialists ORDER BY id")?;

    let rows = stmt.query_map([], |row| {
        Ok(SimilarSpecialist {
            id: row.get(0)?,
            doctor_id: row.get(1)?,
            name: row.get(2)?,
            specialization: row.get(3)?,
        })
    })?;

    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}
