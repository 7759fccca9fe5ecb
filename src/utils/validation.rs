//! Input validation helpers
//!
//! Centralized field limits and check functions shared by the payload types.
//! Checks push messages into a [`FieldErrors`] map instead of failing fast,
//! so one request can report every broken field at once.

use rust_decimal::Decimal;

use crate::utils::FieldErrors;

// ── Field limits ────────────────────────────────────────────────────

/// Department and employee names
pub const MAX_NAME_LEN: usize = 20;

/// Employee comment / remarks
pub const MAX_COMMENT_LEN: usize = 300;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 30;

/// Salary: 8 significant digits total, 2 of them after the decimal point
pub const SALARY_MAX_DIGITS: u32 = 8;
pub const SALARY_SCALE: u32 = 2;

// ── Messages ────────────────────────────────────────────────────────

pub const REQUIRED: &str = "this field is required";

pub const DEPARTMENT_NAME_MSG: &str =
    "department name must be letters, digits, or Chinese characters";

// ── Check functions ─────────────────────────────────────────────────

/// CJK ideograph range used for department names (部门名称允许中文).
fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || ('\u{4e00}'..='\u{9fa5}').contains(&c)
}

/// Department names: non-empty, at most [`MAX_NAME_LEN`] characters,
/// ASCII alphanumerics or CJK ideographs only.
pub fn check_department_name(name: &str, errors: &mut FieldErrors) {
    if name.chars().count() > MAX_NAME_LEN {
        errors.push(
            "name",
            format!("name must be at most {MAX_NAME_LEN} characters"),
        );
    }
    if name.is_empty() || !name.chars().all(is_name_char) {
        errors.push("name", DEPARTMENT_NAME_MSG);
    }
}

/// Required free text: non-empty and within the length limit.
pub fn check_required_text(value: &str, field: &str, max_len: usize, errors: &mut FieldErrors) {
    if value.trim().is_empty() {
        errors.push(field, format!("{field} must not be empty"));
    }
    if value.chars().count() > max_len {
        errors.push(field, format!("{field} must be at most {max_len} characters"));
    }
}

/// Optional free text: blank is fine, but respect the length limit.
pub fn check_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
    errors: &mut FieldErrors,
) {
    if let Some(v) = value
        && v.chars().count() > max_len
    {
        errors.push(field, format!("{field} must be at most {max_len} characters"));
    }
}

/// Salary: at most [`SALARY_SCALE`] decimal places and [`SALARY_MAX_DIGITS`]
/// digits in total. Returns the value rescaled to two decimal places so the
/// stored and serialized form is always `xxxx.yy`.
pub fn check_salary(salary: Decimal, errors: &mut FieldErrors) -> Decimal {
    if salary.scale() > SALARY_SCALE {
        errors.push(
            "salary",
            format!("salary must have at most {SALARY_SCALE} decimal places"),
        );
        return salary;
    }
    let mut rescaled = salary;
    rescaled.rescale(SALARY_SCALE);
    // 8,2 leaves 6 digits for the integer part
    let integer_limit = Decimal::from(10_i64.pow(SALARY_MAX_DIGITS - SALARY_SCALE));
    if rescaled.abs() >= integer_limit {
        errors.push(
            "salary",
            format!("salary must have at most {SALARY_MAX_DIGITS} digits in total"),
        );
    }
    rescaled
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name_errors(name: &str) -> FieldErrors {
        let mut errors = FieldErrors::new();
        check_department_name(name, &mut errors);
        errors
    }

    #[test]
    fn department_name_accepts_ascii_and_cjk() {
        assert!(name_errors("Dev01").is_empty());
        assert!(name_errors("研发部").is_empty());
        assert!(name_errors("研发部2024").is_empty());
    }

    #[test]
    fn department_name_rejects_punctuation_and_spaces() {
        for bad in ["R&D!", "dev team", "dev-team", "", "部门。"] {
            assert!(!name_errors(bad).is_empty(), "{bad:?} should be invalid");
        }
    }

    #[test]
    fn department_name_rejects_over_twenty_chars() {
        let ok = "a".repeat(20);
        let too_long = "a".repeat(21);
        assert!(name_errors(&ok).is_empty());
        assert!(!name_errors(&too_long).is_empty());
        // Character count, not bytes: 20 CJK chars are fine.
        let cjk = "部".repeat(20);
        assert!(name_errors(&cjk).is_empty());
    }

    #[test]
    fn salary_rescales_to_two_places() {
        let mut errors = FieldErrors::new();
        let salary = check_salary("4500".parse().unwrap(), &mut errors);
        assert!(errors.is_empty());
        assert_eq!(salary.to_string(), "4500.00");
    }

    #[test]
    fn salary_rejects_three_decimal_places() {
        let mut errors = FieldErrors::new();
        check_salary("4500.123".parse().unwrap(), &mut errors);
        assert!(!errors.is_empty());
    }

    #[test]
    fn salary_rejects_more_than_eight_digits() {
        let mut errors = FieldErrors::new();
        check_salary("1000000.00".parse().unwrap(), &mut errors);
        assert!(!errors.is_empty());

        let mut errors = FieldErrors::new();
        check_salary("999999.99".parse().unwrap(), &mut errors);
        assert!(errors.is_empty());
    }

    #[test]
    fn optional_text_allows_none_and_blank() {
        let mut errors = FieldErrors::new();
        check_optional_text(&None, "comment", MAX_COMMENT_LEN, &mut errors);
        check_optional_text(&Some(String::new()), "comment", MAX_COMMENT_LEN, &mut errors);
        assert!(errors.is_empty());

        check_optional_text(
            &Some("x".repeat(301)),
            "comment",
            MAX_COMMENT_LEN,
            &mut errors,
        );
        assert!(!errors.is_empty());
    }
}
