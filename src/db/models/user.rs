//! User registration payload
//!
//! Password confirmation check: both entries required, limited to
//! 30 characters, and equal to each other. The mismatch is a cross-field
//! rule, so it is reported under `non_field_errors`.

use serde::Deserialize;

use crate::utils::{AppError, FieldErrors, NON_FIELD_ERRORS, validation};

#[derive(Debug, Clone, Deserialize)]
pub struct UserRegister {
    pub password: Option<String>,
    pub password2: Option<String>,
}

impl UserRegister {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();

        for (field, value) in [("password", &self.password), ("password2", &self.password2)] {
            match value {
                Some(v) => validation::check_required_text(
                    v,
                    field,
                    validation::MAX_PASSWORD_LEN,
                    &mut errors,
                ),
                None => errors.push(field, validation::REQUIRED),
            }
        }

        if let (Some(password), Some(password2)) = (&self.password, &self.password2)
            && password != password2
        {
            errors.push(NON_FIELD_ERRORS, "the two password entries do not match");
        }

        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(password: Option<&str>, password2: Option<&str>) -> UserRegister {
        UserRegister {
            password: password.map(str::to_string),
            password2: password2.map(str::to_string),
        }
    }

    #[test]
    fn matching_passwords_pass() {
        assert!(user(Some("s3cret"), Some("s3cret")).validate().is_ok());
    }

    #[test]
    fn mismatch_is_a_non_field_error() {
        let err = user(Some("s3cret"), Some("other")).validate().unwrap_err();
        let AppError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            serde_json::json!({
                "non_field_errors": ["the two password entries do not match"],
            })
        );
    }

    #[test]
    fn both_entries_are_required() {
        let err = user(Some("s3cret"), None).validate().unwrap_err();
        let AppError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        let json = serde_json::to_value(&errors).unwrap();
        assert!(json.get("password2").is_some());
        // No mismatch report when one side is missing outright.
        assert!(json.get(NON_FIELD_ERRORS).is_none());
    }

    #[test]
    fn rejects_over_thirty_chars() {
        let long = "x".repeat(31);
        assert!(user(Some(&long), Some(&long)).validate().is_err());
    }
}
