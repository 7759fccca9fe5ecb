//! Employee Repository

use chrono::Local;
use sqlx::SqlitePool;

use crate::db::models::{Employee, NewEmployee};
use crate::utils::{AppError, AppResult};

const COLUMNS: &str = "id, name, age, gender, salary, comment, hire_date, department_id";

/// Find employee by id
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> AppResult<Option<Employee>> {
    let employee =
        sqlx::query_as::<_, Employee>(&format!("SELECT {COLUMNS} FROM employee WHERE id = ?"))
            .bind(id)
            .fetch_optional(pool)
            .await?;
    Ok(employee)
}

/// Create a new employee. `hire_date` is assigned here (today), and the
/// department reference must point at an existing row.
pub async fn create(pool: &SqlitePool, data: NewEmployee) -> AppResult<Employee> {
    let department = sqlx::query_scalar::<_, i64>("SELECT id FROM department WHERE id = ?")
        .bind(data.department_id)
        .fetch_optional(pool)
        .await?;
    if department.is_none() {
        return Err(AppError::validation(
            "department",
            format!("department {} does not exist", data.department_id),
        ));
    }

    let hire_date = Local::now().date_naive();
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO employee (name, age, gender, salary, comment, hire_date, department_id) \
         VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(&data.name)
    .bind(data.age)
    .bind(data.gender)
    .bind(data.salary.to_string())
    .bind(&data.comment)
    .bind(hire_date)
    .bind(data.department_id)
    .fetch_one(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::database("Failed to create employee"))
}
