//! Employee Model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use crate::utils::{AppError, FieldErrors, validation};

/// Gender codes: 0 male (男), 1 female (女)
pub const GENDER_MALE: i64 = 0;
pub const GENDER_FEMALE: i64 = 1;

/// Employee entity (员工)
///
/// `department_id` serializes as `department`, the numeric id of the owning
/// department. `salary` serializes as a string with two decimal places.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub gender: i64,
    pub salary: Decimal,
    pub comment: Option<String>,
    pub hire_date: NaiveDate,
    #[serde(rename = "department")]
    pub department_id: i64,
}

// Manual FromRow: sqlx has no sqlite Decimal support, so salary is stored
// as TEXT and parsed here.
impl<'r> sqlx::FromRow<'r, SqliteRow> for Employee {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let salary: String = row.try_get("salary")?;
        let salary = salary
            .parse::<Decimal>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "salary".to_string(),
                source: Box::new(e),
            })?;
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            age: row.try_get("age")?,
            gender: row.try_get("gender")?,
            salary,
            comment: row.try_get("comment")?,
            hire_date: row.try_get("hire_date")?,
            department_id: row.try_get("department_id")?,
        })
    }
}

/// Create employee payload
///
/// `id` and `hire_date` are system-assigned and never read from the client.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeCreate {
    pub name: Option<String>,
    pub age: Option<i64>,
    pub gender: Option<i64>,
    pub salary: Option<Decimal>,
    pub comment: Option<String>,
    pub department: Option<i64>,
}

/// An employee payload that passed validation and is ready to persist.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub name: String,
    pub age: i64,
    pub gender: i64,
    pub salary: Decimal,
    pub comment: Option<String>,
    pub department_id: i64,
}

impl EmployeeCreate {
    pub fn validate(self) -> Result<NewEmployee, AppError> {
        let mut errors = FieldErrors::new();

        match &self.name {
            Some(name) => validation::check_required_text(
                name,
                "name",
                validation::MAX_NAME_LEN,
                &mut errors,
            ),
            None => errors.push("name", validation::REQUIRED),
        }
        if self.age.is_none() {
            errors.push("age", validation::REQUIRED);
        }

        let gender = self.gender.unwrap_or(GENDER_MALE);
        if gender != GENDER_MALE && gender != GENDER_FEMALE {
            errors.push("gender", "gender must be 0 (male) or 1 (female)");
        }

        let salary = match self.salary {
            Some(salary) => Some(validation::check_salary(salary, &mut errors)),
            None => {
                errors.push("salary", validation::REQUIRED);
                None
            }
        };

        validation::check_optional_text(
            &self.comment,
            "comment",
            validation::MAX_COMMENT_LEN,
            &mut errors,
        );

        if self.department.is_none() {
            errors.push("department", validation::REQUIRED);
        }

        match (self.name, self.age, salary, self.department) {
            (Some(name), Some(age), Some(salary), Some(department_id)) if errors.is_empty() => {
                Ok(NewEmployee {
                    name,
                    age,
                    gender,
                    salary,
                    comment: self.comment,
                    department_id,
                })
            }
            _ => Err(AppError::Validation(errors)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> EmployeeCreate {
        EmployeeCreate {
            name: Some("张三".to_string()),
            age: Some(28),
            gender: None,
            salary: Some("4500".parse().unwrap()),
            comment: None,
            department: Some(1),
        }
    }

    #[test]
    fn gender_defaults_to_male_and_salary_rescales() {
        let employee = payload().validate().unwrap();
        assert_eq!(employee.gender, GENDER_MALE);
        assert_eq!(employee.salary.to_string(), "4500.00");
    }

    #[test]
    fn rejects_unknown_gender_code() {
        let mut p = payload();
        p.gender = Some(2);
        assert!(p.validate().is_err());
    }

    #[test]
    fn rejects_long_comment() {
        let mut p = payload();
        p.comment = Some("备".repeat(301));
        assert!(p.validate().is_err());

        let mut p = payload();
        p.comment = Some("备".repeat(300));
        assert!(p.validate().is_ok());
    }

    #[test]
    fn requires_department_reference() {
        let mut p = payload();
        p.department = None;
        let AppError::Validation(errors) = p.validate().unwrap_err() else {
            panic!("expected validation error");
        };
        assert!(
            serde_json::to_value(&errors)
                .unwrap()
                .get("department")
                .is_some()
        );
    }

    #[test]
    fn collects_every_broken_field_at_once() {
        let err = EmployeeCreate {
            name: None,
            age: None,
            gender: Some(7),
            salary: Some("1.234".parse().unwrap()),
            comment: None,
            department: None,
        }
        .validate()
        .unwrap_err();

        let AppError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        let json = serde_json::to_value(&errors).unwrap();
        for field in ["name", "age", "gender", "salary", "department"] {
            assert!(json.get(field).is_some(), "missing error for {field}");
        }
    }
}
