//! Customer contact form.

use serde::{Deserialize, Serialize};

/// Customer contact and shipping details collected at checkout.
///
/// Every field is free text, recorded exactly as entered. The prototype
/// performs no validation and attaches none of this to an order record.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CustomerInfo {
    /// Email address.
    pub email: String,
    /// Full name.
    pub name: String,
    /// Phone number.
    pub phone: String,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// ZIP code.
    pub zip: String,
}

impl CustomerInfo {
    /// Format the non-empty fields as a single display line.
    pub fn one_line(&self) -> String {
        [
            &self.name,
            &self.address,
            &self.city,
            &self.state,
            &self.zip,
        ]
        .iter()
        .filter(|part| !part.is_empty())
        .map(|part| part.as_str())
        .collect::<Vec<_>>()
        .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_line_skips_empty_fields() {
        let info = CustomerInfo {
            name: "A. Rahman".to_string(),
            city: "Dallas".to_string(),
            zip: "75201".to_string(),
            ..CustomerInfo::default()
        };
        assert_eq!(info.one_line(), "A. Rahman, Dallas, 75201");
    }

    #[test]
    fn test_default_is_blank() {
        let info = CustomerInfo::default();
        assert!(info.email.is_empty());
        assert_eq!(info.one_line(), "");
    }
}
