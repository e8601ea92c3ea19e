use crate::db::repository::RecordCollections;
use crate::models::DoctorProfile;

/// Join the six flat collections into one profile per doctor.
///
/// Pure transform. Matching is exact equality on `doctor_id`; rows whose
/// foreign key points at no fetched doctor are dropped silently so the
/// aggregation is total. Profiles come out in doctor fetch order and each
/// sub-collection keeps its own fetch order — a Vec rather than a hash map,
/// so "first profile" is deterministic and the briefing text reproducible.
pub fn build_profiles(records: &RecordCollections) -> Vec<DoctorProfile> {
    records
        .doctors
        .iter()
        .map(|doctor| DoctorProfile {
            doctor: doctor.clone(),
            specializations: records
                .specializations
                .iter()
                .filter(|s| s.doctor_id == doctor.id)
                .map(|s| s.specialization.clone())
                .collect(),
            languages: records
                .languages
                .iter()
                .filter(|l| l.doctor_id == doctor.id)
                .map(|l| l.language.clone())
                .collect(),
            clinics: records
                .clinics
                .iter()
                .filter(|c| c.doctor_id == doctor.id)
                .cloned()
                .collect(),
            reviews: records
                .reviews
                .iter()
                .filter(|r| r.doctor_id == doctor.id)
                .cloned()
                .collect(),
            similar_specialists: records
                .similar_specialists
                .iter()
                .filter(|s| s.doctor_id == doctor.id)
                .cloned()
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::*;

    fn doctor(id: i64, name: &str) -> Doctor {
        Doctor {
            id,
            name: name.to_string(),
            degree: None,
            experience: None,
            rating: None,
            reviews_count: None,
            recommendation_rate: None,
            clinics_count: None,
            about: None,
        }
    }

    fn spec(id: i64, doctor_id: i64, label: &str) -> Specialization {
        Specialization {
            id,
            doctor_id,
            specialization: label.to_string(),
        }
    }

    fn review(id: i64, doctor_id: i64, rating: Option<f64>) -> PatientReview {
        PatientReview {
            id,
            doctor_id,
            rating,
            comment: None,
        }
    }

    #[test]
    fn empty_collections_produce_no_profiles() {
        let profiles = build_profiles(&RecordCollections::default());
        assert!(profiles.is_empty());
    }

    #[test]
    fn sub_collections_contain_only_matching_doctor_ids() {
        let records = RecordCollections {
            doctors: vec![doctor(1, "Dr. A"), doctor(2, "Dr. B")],
            specializations: vec![
                spec(1, 1, "Cardiology"),
                spec(2, 2, "Neurology"),
                spec(3, 1, "Internal Medicine"),
            ],
            reviews: vec![review(1, 1, Some(5.0)), review(2, 2, Some(3.0))],
            ..Default::default()
        };

        let profiles = build_profiles(&records);
        assert_eq!(profiles.len(), 2);
        assert_eq!(
            profiles[0].specializations,
            vec!["Cardiology", "Internal Medicine"]
        );
        assert_eq!(profiles[1].specializations, vec!["Neurology"]);
        assert_eq!(profiles[0].reviews.len(), 1);
        assert_eq!(profiles[1].reviews.len(), 1);
        assert_eq!(profiles[1].reviews[0].rating, Some(3.0));
    }

    #[test]
    fn dangling_references_are_dropped_silently() {
        let records = RecordCollections {
            doctors: vec![doctor(1, "Dr. A")],
            specializations: vec![spec(1, 999, "Orphaned")],
            reviews: vec![review(1, 42, Some(4.0))],
            ..Default::default()
        };

        let profiles = build_profiles(&records);
        assert_eq!(profiles.len(), 1);
        assert!(profiles[0].specializations.is_empty());
        assert!(profiles[0].reviews.is_empty());
    }

    #[test]
    fn profiles_follow_doctor_fetch_order() {
        let records = RecordCollections {
            doctors: vec![doctor(7, "Dr. Later"), doctor(3, "Dr. Earlier")],
            ..Default::default()
        };

        // Fetch order is the source order, not id order
        let profiles = build_profiles(&records);
        assert_eq!(profiles[0].doctor.name, "Dr. Later");
        assert_eq!(profiles[1].doctor.name, "Dr. Earlier");
    }
}
