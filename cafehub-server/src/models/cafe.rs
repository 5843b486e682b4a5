//! Cafe model, creation payload and response envelopes
//!
//! JSON keys are exactly the column names of the `cafes` table, so a row
//! serializes without any schema reflection.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Maximum length for short text columns (name, location, seats, coffee_price)
pub const MAX_TEXT_LEN: usize = 250;

/// Maximum length for URL columns (map_url, img_url)
pub const MAX_URL_LEN: usize = 500;

/// A cafe row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Cafe {
    pub id: i64,
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    pub coffee_price: Option<String>,
}

/// Payload for creating a cafe; `id` is assigned by the database
#[derive(Debug, Clone, Deserialize)]
pub struct CafeCreate {
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    #[serde(default)]
    pub coffee_price: Option<String>,
}

/// Field-level validation violations as (field, message) pairs
pub type FieldViolations = Vec<(&'static str, String)>;

impl CafeCreate {
    /// Check the table constraints: required fields, length limits,
    /// well-formed URLs. Collects every violation instead of stopping
    /// at the first one.
    pub fn check(&self) -> Result<(), FieldViolations> {
        let mut violations = FieldViolations::new();

        required_text(&mut violations, "name", &self.name, MAX_TEXT_LEN);
        required_url(&mut violations, "map_url", &self.map_url);
        required_url(&mut violations, "img_url", &self.img_url);
        required_text(&mut violations, "location", &self.location, MAX_TEXT_LEN);
        required_text(&mut violations, "seats", &self.seats, MAX_TEXT_LEN);
        if let Some(price) = &self.coffee_price {
            if price.len() > MAX_TEXT_LEN {
                violations.push(("coffee_price", too_long(MAX_TEXT_LEN)));
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// `GET /all` response body
#[derive(Debug, Serialize, Deserialize)]
pub struct CafeList {
    pub cafes: Vec<Cafe>,
}

/// `GET /random` response body
#[derive(Debug, Serialize, Deserialize)]
pub struct CafeEnvelope {
    pub cafe: Cafe,
}

fn too_long(max_len: usize) -> String {
    format!("Must be {max_len} characters or fewer.")
}

fn required_text(out: &mut FieldViolations, field: &'static str, value: &str, max_len: usize) {
    if value.trim().is_empty() {
        out.push((field, "This field is required.".to_string()));
    } else if value.len() > max_len {
        out.push((field, too_long(max_len)));
    }
}

fn required_url(out: &mut FieldViolations, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        out.push((field, "This field is required.".to_string()));
        return;
    }
    if value.len() > MAX_URL_LEN {
        out.push((field, too_long(MAX_URL_LEN)));
        return;
    }
    match reqwest::Url::parse(value) {
        Ok(url) if url.has_host() => {}
        _ => out.push((field, "Must be a well-formed URL.".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_cafe() -> Cafe {
        Cafe {
            id: 7,
            name: "Grind & Co".to_string(),
            map_url: "https://maps.example.com/grind".to_string(),
            img_url: "https://img.example.com/grind.jpg".to_string(),
            location: "Shoreditch".to_string(),
            seats: "20-30".to_string(),
            has_toilet: true,
            has_wifi: true,
            has_sockets: false,
            can_take_calls: false,
            coffee_price: Some("£2.80".to_string()),
        }
    }

    fn valid_create() -> CafeCreate {
        CafeCreate {
            name: "Grind & Co".to_string(),
            map_url: "https://maps.example.com/grind".to_string(),
            img_url: "https://img.example.com/grind.jpg".to_string(),
            location: "Shoreditch".to_string(),
            seats: "20-30".to_string(),
            has_toilet: true,
            has_wifi: true,
            has_sockets: false,
            can_take_calls: false,
            coffee_price: None,
        }
    }

    #[test]
    fn cafe_json_round_trip() {
        let cafe = sample_cafe();
        let json = serde_json::to_string(&cafe).unwrap();
        let back: Cafe = serde_json::from_str(&json).unwrap();
        assert_eq!(cafe, back);
    }

    #[test]
    fn cafe_serializes_with_column_names() {
        let value = serde_json::to_value(sample_cafe()).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        for expected in [
            "id",
            "name",
            "map_url",
            "img_url",
            "location",
            "seats",
            "has_toilet",
            "has_wifi",
            "has_sockets",
            "can_take_calls",
            "coffee_price",
        ] {
            assert!(keys.contains(&expected), "missing key {expected}");
        }
    }

    #[test]
    fn check_accepts_valid_payload() {
        assert!(valid_create().check().is_ok());
    }

    #[test]
    fn check_rejects_empty_name() {
        let mut cafe = valid_create();
        cafe.name = "  ".to_string();
        let violations = cafe.check().unwrap_err();
        assert!(violations.iter().any(|(field, _)| *field == "name"));
    }

    #[test]
    fn check_rejects_malformed_url() {
        let mut cafe = valid_create();
        cafe.map_url = "not a url".to_string();
        let violations = cafe.check().unwrap_err();
        assert!(violations.iter().any(|(field, _)| *field == "map_url"));
    }

    #[test]
    fn check_rejects_overlong_fields() {
        let mut cafe = valid_create();
        cafe.name = "x".repeat(MAX_TEXT_LEN + 1);
        cafe.img_url = format!("https://example.com/{}", "y".repeat(MAX_URL_LEN));
        let violations = cafe.check().unwrap_err();
        assert!(violations.iter().any(|(field, _)| *field == "name"));
        assert!(violations.iter().any(|(field, _)| *field == "img_url"));
    }

    #[test]
    fn check_collects_every_violation() {
        let cafe = CafeCreate {
            name: String::new(),
            map_url: "nope".to_string(),
            img_url: String::new(),
            location: String::new(),
            seats: String::new(),
            has_toilet: false,
            has_wifi: false,
            has_sockets: false,
            can_take_calls: false,
            coffee_price: None,
        };
        let violations = cafe.check().unwrap_err();
        assert_eq!(violations.len(), 5);
    }
}
