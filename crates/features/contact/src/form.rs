use crate::error::ContactError;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, IntoStaticStr};

/// Input fields of the contact form, named as their DOM ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    #[must_use]
    pub fn id(self) -> &'static str {
        self.into()
    }
}

/// Raw form contents as typed by the visitor.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A validated, trimmed message ready for a submitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Checks every field and returns the trimmed message.
    ///
    /// # Errors
    /// [`ContactError::Validation`] naming the first offending field.
    pub fn validate(&self) -> Result<ContactMessage, ContactError> {
        for field in Field::ALL {
            if self.get(field).trim().is_empty() {
                return Err(ContactError::invalid(field, "required"));
            }
        }

        let email = self.email.trim();
        if !is_plausible_email(email) {
            return Err(ContactError::invalid(Field::Email, "expected an address like name@example.com"));
        }

        Ok(ContactMessage {
            name: self.name.trim().to_owned(),
            email: email.to_owned(),
            message: self.message.trim().to_owned(),
        })
    }
}

/// The browser's `type="email"` shape: one `@`, a non-empty local part and a
/// domain of non-empty dot-separated labels, no whitespace. Single-label
/// domains such as `localhost` are accepted.
fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.split('.').all(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "  Ada  ".to_owned(),
            email: " ada@example.org ".to_owned(),
            message: "Hello there\n".to_owned(),
        }
    }

    #[test]
    fn validate_trims_fields() {
        let message = filled().validate().unwrap();
        assert_eq!(message.name, "Ada");
        assert_eq!(message.email, "ada@example.org");
        assert_eq!(message.message, "Hello there");
    }

    #[test]
    fn blank_fields_are_rejected_in_order() {
        let mut form = filled();
        form.set(Field::Message, "   ");
        form.set(Field::Email, "");

        let err = form.validate().unwrap_err();
        assert!(matches!(err, ContactError::Validation { field: Field::Email, .. }));
        assert_eq!(err.to_string(), "Invalid email: required");
    }

    #[test]
    fn email_shape_checks() {
        for good in ["a@b.co", "first.last@mail.example.com", "ada@localhost", "a@b"] {
            assert!(is_plausible_email(good), "{good}");
        }
        for bad in ["plain", "@example.com", "a@", "a@@b.com", "a@b.", "a@.com", "a b@c.com"] {
            assert!(!is_plausible_email(bad), "{bad}");
        }
    }

    #[test]
    fn field_ids_match_inputs() {
        assert_eq!(Field::Name.id(), "name");
        assert_eq!(Field::Message.to_string(), "message");
    }
}
