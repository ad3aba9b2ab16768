use serde::{Deserialize, Serialize};

/// Customer details collected by the checkout form.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CheckoutForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    /// Optional; validated only when non-empty.
    pub phone: String,
}

/// A single field-level validation failure, addressed to the form field that
/// caused it so the UI can attach the message in place.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl CheckoutForm {
    /// Validates every field and returns all failures at once, so the form
    /// can highlight them together instead of one per submit.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        for (field, value) in [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("address", &self.address),
            ("city", &self.city),
        ] {
            if value.trim().is_empty() {
                errors.push(FieldError::new(field, "This field is required"));
            }
        }

        if !is_plausible_email(&self.email) {
            errors.push(FieldError::new("email", "Enter a valid email address"));
        }

        let postal = self.postal_code.trim();
        if postal.len() < 3
            || postal.len() > 10
            || !postal
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == ' ' || c == '-')
        {
            errors.push(FieldError::new("postal_code", "Enter a valid postal code"));
        }

        let phone = self.phone.trim();
        if !phone.is_empty() && phone.chars().filter(|c| c.is_ascii_digit()).count() < 7 {
            errors.push(FieldError::new("phone", "Enter a valid phone number"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn is_plausible_email(value: &str) -> bool {
    let value = value.trim();
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> CheckoutForm {
        CheckoutForm {
            first_name: "Alice".into(),
            last_name: "Smith".into(),
            email: "alice@example.com".into(),
            address: "1 Main St".into(),
            city: "Springfield".into(),
            postal_code: "12345".into(),
            phone: String::new(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn test_all_failures_reported_at_once() {
        let form = CheckoutForm::default();
        let errors = form.validate().unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert!(fields.contains(&"first_name"));
        assert!(fields.contains(&"email"));
        assert!(fields.contains(&"postal_code"));
    }

    #[test]
    fn test_email_validation() {
        let mut form = valid_form();
        for bad in ["", "no-at-sign", "@nodomain.com", "user@nodot", "user@.com"] {
            form.email = bad.into();
            let errors = form.validate().unwrap_err();
            assert!(errors.iter().any(|e| e.field == "email"), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_phone_checked_only_when_present() {
        let mut form = valid_form();
        form.phone = "12".into();
        assert!(form.validate().is_err());
        form.phone = "+1 (555) 123-4567".into();
        assert!(form.validate().is_ok());
    }
}
