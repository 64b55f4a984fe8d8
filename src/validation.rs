//! Form-side validation rules.
//!
//! The store trusts whatever it is given; these checks run at the input
//! boundary (the contact form and CSV import) before any mutating call.

use std::fmt;

use regex::Regex;

use crate::domain::contact::NewContact;
use crate::errors::AppError;

const MAX_EMAIL_LEN: usize = 254;
const MAX_EMAIL_LOCAL_LEN: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Address,
    City,
    State,
    Zip,
    Notes,
}

impl Field {
    /// Form order.
    pub const ALL: [Field; 8] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Address,
        Field::City,
        Field::State,
        Field::Zip,
        Field::Notes,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Address => "address",
            Field::City => "city",
            Field::State => "state",
            Field::Zip => "zip",
            Field::Notes => "notes",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::Address => "Address",
            Field::City => "City",
            Field::State => "State",
            Field::Zip => "Zip",
            Field::Notes => "Notes",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, Field::Notes)
    }

    /// Message shown when a present value breaks the field's format rule.
    pub fn requirement(&self) -> &'static str {
        match self {
            Field::Name => "Name may contain letters and spaces only",
            Field::Email => "Email must be a valid email address",
            Field::Phone => "Phone must be exactly 10 digits",
            Field::Zip => "Zip must be 5 or 6 digits",
            Field::Address => "Address must not be empty",
            Field::City => "City must not be empty",
            Field::State => "State must not be empty",
            Field::Notes => "Notes are free text",
        }
    }

    pub fn value_of<'a>(&self, draft: &'a NewContact) -> &'a str {
        match self {
            Field::Name => &draft.name,
            Field::Email => &draft.email,
            Field::Phone => &draft.phone,
            Field::Address => &draft.address,
            Field::City => &draft.city,
            Field::State => &draft.state,
            Field::Zip => &draft.zip,
            Field::Notes => draft.notes.as_deref().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    Required,
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub fn required(field: Field) -> Self {
        Self {
            field,
            kind: FieldErrorKind::Required,
        }
    }

    pub fn invalid(field: Field) -> Self {
        Self {
            field,
            kind: FieldErrorKind::Invalid,
        }
    }

    pub fn message(&self) -> String {
        match self.kind {
            FieldErrorKind::Required => format!("{} is required", self.field.label()),
            FieldErrorKind::Invalid => self.field.requirement().to_string(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field.key(), self.message())
    }
}

pub fn validate_name(name: &str) -> Result<bool, AppError> {
    // Letters and spaces only
    let re = Regex::new(r"^[a-zA-Z\s]+$")?;
    Ok(re.is_match(name))
}

pub fn validate_email(email: &str) -> Result<bool, AppError> {
    let re = Regex::new(
        r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )?;
    let local_len = email.split('@').next().map(str::len).unwrap_or_default();

    Ok(email.len() <= MAX_EMAIL_LEN && local_len <= MAX_EMAIL_LOCAL_LEN && re.is_match(email))
}

pub fn validate_phone(phone: &str) -> Result<bool, AppError> {
    let re = Regex::new(r"^[0-9]{10}$")?;
    Ok(re.is_match(phone))
}

pub fn validate_zip(zip: &str) -> Result<bool, AppError> {
    let re = Regex::new(r"^[0-9]{5,6}$")?;
    Ok(re.is_match(zip))
}

/// Checks one field value, `Ok(None)` meaning it passes.
///
/// A whitespace-only value counts as missing, so required fields reject it.
pub fn validate_field(field: Field, value: &str) -> Result<Option<FieldError>, AppError> {
    if value.trim().is_empty() {
        return Ok(field.is_required().then(|| FieldError::required(field)));
    }

    let valid = match field {
        Field::Name => validate_name(value)?,
        Field::Email => validate_email(value)?,
        Field::Phone => validate_phone(value)?,
        Field::Zip => validate_zip(value)?,
        Field::Address | Field::City | Field::State | Field::Notes => true,
    };

    Ok((!valid).then(|| FieldError::invalid(field)))
}

/// Every failing field of `draft`, in form order.
pub fn field_errors(draft: &NewContact) -> Result<Vec<FieldError>, AppError> {
    let mut errors = Vec::new();
    for field in Field::ALL {
        if let Some(error) = validate_field(field, field.value_of(draft))? {
            errors.push(error);
        }
    }
    Ok(errors)
}

pub fn validate_contact(draft: &NewContact) -> Result<(), AppError> {
    let errors = field_errors(draft)?;
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::InvalidForm(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> NewContact {
        NewContact {
            name: "Uche Johnson".to_string(),
            email: "uche@example.com".to_string(),
            phone: "0812345678".to_string(),
            address: "12 Marina Rd".to_string(),
            city: "Lagos".to_string(),
            state: "LA".to_string(),
            zip: "100001".to_string(),
            notes: None,
        }
    }

    #[test]
    fn name_allows_letters_and_spaces_only() -> Result<(), AppError> {
        assert!(validate_name("Mary Jane")?);
        assert!(!validate_name("R2 D2")?);
        assert!(!validate_name("O'Neil")?);
        assert!(!validate_name("")?);
        Ok(())
    }

    #[test]
    fn email_validation() -> Result<(), AppError> {
        assert!(validate_email("john.doe@example.com")?);
        assert!(validate_email("a+tag@mail.co.uk")?);
        assert!(validate_email("foo@bar")?);
        assert!(!validate_email("foo@")?);
        assert!(!validate_email("foo bar@example.com")?);
        assert!(!validate_email("@example.com")?);
        assert!(!validate_email(&format!("{}@example.com", "a".repeat(65)))?);
        Ok(())
    }

    #[test]
    fn phone_must_be_exactly_ten_digits() -> Result<(), AppError> {
        assert!(validate_phone("5551234567")?);
        assert!(!validate_phone("555123456")?);
        assert!(!validate_phone("55512345678")?);
        assert!(!validate_phone("(555) 123-4567")?);
        Ok(())
    }

    #[test]
    fn zip_is_five_or_six_digits() -> Result<(), AppError> {
        assert!(validate_zip("12345")?);
        assert!(validate_zip("123456")?);
        assert!(!validate_zip("1234")?);
        assert!(!validate_zip("1234567")?);
        assert!(!validate_zip("12a45")?);
        assert!(!validate_zip("\u{0661}\u{0662}\u{0663}\u{0664}\u{0665}")?);
        Ok(())
    }

    #[test]
    fn notes_are_optional() -> Result<(), AppError> {
        assert_eq!(validate_field(Field::Notes, "")?, None);
        assert_eq!(validate_field(Field::Notes, "anything at all 123 !")?, None);
        Ok(())
    }

    #[test]
    fn blank_required_fields_report_required() -> Result<(), AppError> {
        assert_eq!(
            validate_field(Field::City, "   ")?,
            Some(FieldError::required(Field::City))
        );
        assert_eq!(
            validate_field(Field::Phone, "")?,
            Some(FieldError::required(Field::Phone))
        );
        Ok(())
    }

    #[test]
    fn field_errors_come_back_in_form_order() -> Result<(), AppError> {
        let mut draft = valid_draft();
        draft.zip = "12".to_string();
        draft.name = String::new();
        draft.email = "nope".to_string();

        let errors = field_errors(&draft)?;

        assert_eq!(
            errors,
            vec![
                FieldError::required(Field::Name),
                FieldError::invalid(Field::Email),
                FieldError::invalid(Field::Zip),
            ]
        );
        Ok(())
    }

    #[test]
    fn valid_draft_passes() -> Result<(), AppError> {
        validate_contact(&valid_draft())
    }

    #[test]
    fn seed_phone_format_is_rejected() -> Result<(), AppError> {
        let mut draft = valid_draft();
        draft.phone = "(555) 123-4567".to_string();

        match validate_contact(&draft) {
            Err(AppError::InvalidForm(errors)) => {
                assert_eq!(errors, vec![FieldError::invalid(Field::Phone)]);
                Ok(())
            }
            other => panic!("expected invalid form, got {other:?}"),
        }
    }
}
