//! Department Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::{AppError, FieldErrors, validation};

/// Department entity (部门)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Department {
    pub id: i64,
    pub name: String,
    pub create_date: NaiveDate,
    /// Soft-delete marker. Modeled but not consulted by any query filter;
    /// Delete removes the row outright.
    pub is_delete: bool,
}

/// Create department payload
///
/// Required fields are `Option` so that a missing field surfaces as a
/// field error rather than a deserialization failure. `id` is never
/// accepted from the client.
#[derive(Debug, Clone, Deserialize)]
pub struct DepartmentCreate {
    pub name: Option<String>,
    pub create_date: Option<NaiveDate>,
    pub is_delete: Option<bool>,
}

/// A department payload that passed validation and is ready to persist.
#[derive(Debug, Clone)]
pub struct NewDepartment {
    pub name: String,
    pub create_date: NaiveDate,
    pub is_delete: bool,
}

impl DepartmentCreate {
    /// Validate the payload; on success hand back the values to insert.
    pub fn validate(self) -> Result<NewDepartment, AppError> {
        let mut errors = FieldErrors::new();

        match &self.name {
            Some(name) => validation::check_department_name(name, &mut errors),
            None => errors.push("name", validation::REQUIRED),
        }
        if self.create_date.is_none() {
            errors.push("create_date", validation::REQUIRED);
        }

        match (self.name, self.create_date) {
            (Some(name), Some(create_date)) if errors.is_empty() => Ok(NewDepartment {
                name,
                create_date,
                is_delete: self.is_delete.unwrap_or(false),
            }),
            _ => Err(AppError::Validation(errors)),
        }
    }
}

/// Update department payload (full update)
///
/// Fields left out of the request keep their stored value.
#[derive(Debug, Clone, Deserialize)]
pub struct DepartmentUpdate {
    pub name: Option<String>,
    pub create_date: Option<NaiveDate>,
    pub is_delete: Option<bool>,
}

impl DepartmentUpdate {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        if let Some(name) = &self.name {
            validation::check_department_name(name, &mut errors);
        }
        errors.into_result()
    }
}

/// Rename payload for `PUT /departments/{id}/name`
#[derive(Debug, Clone, Deserialize)]
pub struct DepartmentRename {
    pub name: Option<String>,
}

impl DepartmentRename {
    /// Validate and return the new name.
    pub fn validate(self) -> Result<String, AppError> {
        let mut errors = FieldErrors::new();
        match self.name {
            Some(name) => {
                validation::check_department_name(&name, &mut errors);
                errors.into_result()?;
                Ok(name)
            }
            None => {
                errors.push("name", validation::REQUIRED);
                Err(AppError::Validation(errors))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str, date: &str) -> DepartmentCreate {
        DepartmentCreate {
            name: Some(name.to_string()),
            create_date: Some(date.parse().unwrap()),
            is_delete: None,
        }
    }

    #[test]
    fn create_defaults_is_delete_to_false() {
        let dept = payload("研发部", "2024-01-01").validate().unwrap();
        assert_eq!(dept.name, "研发部");
        assert!(!dept.is_delete);
    }

    #[test]
    fn create_requires_name_and_date() {
        let err = DepartmentCreate {
            name: None,
            create_date: None,
            is_delete: None,
        }
        .validate()
        .unwrap_err();

        let AppError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        let json = serde_json::to_value(&errors).unwrap();
        assert!(json.get("name").is_some());
        assert!(json.get("create_date").is_some());
    }

    #[test]
    fn create_rejects_punctuated_name() {
        let err = payload("R&D!", "2024-01-01").validate().unwrap_err();
        let AppError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            serde_json::json!({
                "name": ["department name must be letters, digits, or Chinese characters"],
            })
        );
    }

    #[test]
    fn update_validates_only_present_fields() {
        let update = DepartmentUpdate {
            name: None,
            create_date: None,
            is_delete: Some(true),
        };
        assert!(update.validate().is_ok());

        let update = DepartmentUpdate {
            name: Some("bad name".to_string()),
            create_date: None,
            is_delete: None,
        };
        assert!(update.validate().is_err());
    }

    #[test]
    fn rename_requires_valid_name() {
        let name = DepartmentRename {
            name: Some("新部门".to_string()),
        }
        .validate()
        .unwrap();
        assert_eq!(name, "新部门");

        assert!(DepartmentRename { name: None }.validate().is_err());
        assert!(
            DepartmentRename {
                name: Some("a b".to_string()),
            }
            .validate()
            .is_err()
        );
    }
}
