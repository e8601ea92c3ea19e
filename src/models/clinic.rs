use std::fmt;

use serde::{Deserialize, Serialize};

/// A consultation fee as it arrives from the seed document: either a
/// number or free text ("On request"). Stored as TEXT in the clinics
/// table; numeric strings round-trip back to amounts on fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Fee {
    Amount(f64),
    Text(String),
}

impl Fee {
    pub fn from_stored(raw: String) -> Self {
        match raw.parse::<f64>() {
            Ok(v) => Fee::Amount(v),
            Err(_) => Fee::Text(raw),
        }
    }
}

impl fmt::Display for Fee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Whole amounts print without a trailing ".0" ("Fee: 50")
            Fee::Amount(v) if v.fract() == 0.0 => write!(f, "{}", *v as i64),
            Fee::Amount(v) => write!(f, "{v}"),
            Fee::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clinic {
    pub id: i64,
    pub doctor_id: i64,
    pub name: String,
    pub location: Option<String>,
    pub fee: Option<Fee>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_amount_displays_without_decimals() {
        assert_eq!(Fee::Amount(50.0).to_string(), "50");
        assert_eq!(Fee::Amount(49.5).to_string(), "49.5");
    }

    #[test]
    fn text_fee_displays_verbatim() {
        assert_eq!(Fee::Text("On request".into()).to_string(), "On request");
    }

    #[test]
    fn stored_numeric_string_becomes_amount() {
        assert_eq!(Fee::from_stored("50".into()), Fee::Amount(50.0));
        assert_eq!(
            Fee::from_stored("On request".into()),
            Fee::Text("On request".into())
        );
    }

    #[test]
    fn seed_fee_accepts_number_or_string() {
        let num: Fee = serde_json::from_str("50").unwrap();
        assert_eq!(num, Fee::Amount(50.0));

        let text: Fee = serde_json::from_str(r#""On request""#).unwrap();
        assert_eq!(text, Fee::Text("On request".into()));
    }
}
