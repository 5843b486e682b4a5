//! Add-cafe form parsing and validation
//!
//! Everything arrives from the browser as a string; the amenity flags are
//! parsed to booleans here and the rest is checked against the table
//! constraints. Failures come back per field so the template can re-render
//! the form with messages next to the offending inputs.

use serde::Deserialize;

use crate::models::CafeCreate;
use crate::models::cafe::FieldViolations;

/// Raw form fields as submitted by the browser
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddCafeForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub map_url: String,
    #[serde(default)]
    pub img_url: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub seats: String,
    #[serde(default)]
    pub has_toilet: String,
    #[serde(default)]
    pub has_wifi: String,
    #[serde(default)]
    pub has_sockets: String,
    #[serde(default)]
    pub can_take_calls: String,
    #[serde(default)]
    pub coffee_price: String,
}

/// Per-field error messages rendered next to the matching input
#[derive(Debug, Clone, Default)]
pub struct FormErrors {
    pub name: Option<String>,
    pub map_url: Option<String>,
    pub img_url: Option<String>,
    pub location: Option<String>,
    pub seats: Option<String>,
    pub has_toilet: Option<String>,
    pub has_wifi: Option<String>,
    pub has_sockets: Option<String>,
    pub can_take_calls: Option<String>,
    pub coffee_price: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.map_url.is_none()
            && self.img_url.is_none()
            && self.location.is_none()
            && self.seats.is_none()
            && self.has_toilet.is_none()
            && self.has_wifi.is_none()
            && self.has_sockets.is_none()
            && self.can_take_calls.is_none()
            && self.coffee_price.is_none()
    }

    /// Record a message for a field, keeping the first one on repeats
    fn set(&mut self, field: &str, message: String) {
        let slot = match field {
            "name" => &mut self.name,
            "map_url" => &mut self.map_url,
            "img_url" => &mut self.img_url,
            "location" => &mut self.location,
            "seats" => &mut self.seats,
            "has_toilet" => &mut self.has_toilet,
            "has_wifi" => &mut self.has_wifi,
            "has_sockets" => &mut self.has_sockets,
            "can_take_calls" => &mut self.can_take_calls,
            "coffee_price" => &mut self.coffee_price,
            _ => return,
        };
        if slot.is_none() {
            *slot = Some(message);
        }
    }
}

impl AddCafeForm {
    /// Parse and validate the submission. On failure every offending field
    /// carries a message and nothing may be persisted.
    pub fn parse(&self) -> Result<CafeCreate, FormErrors> {
        let mut errors = FormErrors::default();

        let has_toilet = parse_flag(&self.has_toilet, "has_toilet", &mut errors);
        let has_wifi = parse_flag(&self.has_wifi, "has_wifi", &mut errors);
        let has_sockets = parse_flag(&self.has_sockets, "has_sockets", &mut errors);
        let can_take_calls = parse_flag(&self.can_take_calls, "can_take_calls", &mut errors);

        let cafe = CafeCreate {
            name: self.name.trim().to_string(),
            map_url: self.map_url.trim().to_string(),
            img_url: self.img_url.trim().to_string(),
            location: self.location.trim().to_string(),
            seats: self.seats.trim().to_string(),
            has_toilet: has_toilet.unwrap_or_default(),
            has_wifi: has_wifi.unwrap_or_default(),
            has_sockets: has_sockets.unwrap_or_default(),
            can_take_calls: can_take_calls.unwrap_or_default(),
            coffee_price: match self.coffee_price.trim() {
                "" => None,
                price => Some(price.to_string()),
            },
        };

        if let Err(violations) = cafe.check() {
            apply(&mut errors, violations);
        }

        if errors.is_empty() { Ok(cafe) } else { Err(errors) }
    }
}

fn parse_flag(value: &str, field: &str, errors: &mut FormErrors) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        "" => {
            errors.set(field, "This field is required.".to_string());
            None
        }
        _ => {
            errors.set(field, "Must be true or false.".to_string());
            None
        }
    }
}

fn apply(errors: &mut FormErrors, violations: FieldViolations) {
    for (field, message) in violations {
        errors.set(field, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> AddCafeForm {
        AddCafeForm {
            name: "Beanbox".to_string(),
            map_url: "https://maps.example.com/beanbox".to_string(),
            img_url: "https://img.example.com/beanbox.jpg".to_string(),
            location: "Peckham".to_string(),
            seats: "10-20".to_string(),
            has_toilet: "true".to_string(),
            has_wifi: "True".to_string(),
            has_sockets: "FALSE".to_string(),
            can_take_calls: "false".to_string(),
            coffee_price: "£3.10".to_string(),
        }
    }

    #[test]
    fn parse_accepts_valid_submission() {
        let cafe = valid_form().parse().unwrap();
        assert_eq!(cafe.name, "Beanbox");
        assert!(cafe.has_toilet);
        assert!(cafe.has_wifi);
        assert!(!cafe.has_sockets);
        assert!(!cafe.can_take_calls);
        assert_eq!(cafe.coffee_price.as_deref(), Some("£3.10"));
    }

    #[test]
    fn parse_treats_blank_price_as_absent() {
        let mut form = valid_form();
        form.coffee_price = "   ".to_string();
        let cafe = form.parse().unwrap();
        assert_eq!(cafe.coffee_price, None);
    }

    #[test]
    fn parse_flags_missing_required_fields() {
        let form = AddCafeForm::default();
        let errors = form.parse().unwrap_err();
        assert!(errors.name.is_some());
        assert!(errors.map_url.is_some());
        assert!(errors.img_url.is_some());
        assert!(errors.location.is_some());
        assert!(errors.seats.is_some());
        assert!(errors.has_toilet.is_some());
        assert!(errors.coffee_price.is_none());
    }

    #[test]
    fn parse_flags_non_boolean_amenity() {
        let mut form = valid_form();
        form.has_wifi = "maybe".to_string();
        let errors = form.parse().unwrap_err();
        assert_eq!(errors.has_wifi.as_deref(), Some("Must be true or false."));
        assert!(errors.has_toilet.is_none());
    }

    #[test]
    fn parse_flags_malformed_url() {
        let mut form = valid_form();
        form.map_url = "maps.example.com/beanbox".to_string();
        let errors = form.parse().unwrap_err();
        assert!(errors.map_url.is_some());
        assert!(errors.img_url.is_none());
    }
}
