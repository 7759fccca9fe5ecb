//! Department Repository

use sqlx::SqlitePool;

use crate::db::models::{Department, DepartmentUpdate, NewDepartment};
use crate::utils::{AppError, AppResult};

const COLUMNS: &str = "id, name, create_date, is_delete";

/// Find all departments, optionally filtered by exact name
pub async fn find_all(pool: &SqlitePool, name: Option<&str>) -> AppResult<Vec<Department>> {
    let departments = match name {
        Some(name) => {
            sqlx::query_as::<_, Department>(&format!(
                "SELECT {COLUMNS} FROM department WHERE name = ? ORDER BY id"
            ))
            .bind(name)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, Department>(&format!(
                "SELECT {COLUMNS} FROM department ORDER BY id"
            ))
            .fetch_all(pool)
            .await?
        }
    };
    Ok(departments)
}

/// Count departments, with the same optional name filter as `find_all`
pub async fn count(pool: &SqlitePool, name: Option<&str>) -> AppResult<i64> {
    let count = match name {
        Some(name) => {
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM department WHERE name = ?")
                .bind(name)
                .fetch_one(pool)
                .await?
        }
        None => {
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM department")
                .fetch_one(pool)
                .await?
        }
    };
    Ok(count)
}

/// Fetch one page, ordered by id
pub async fn find_page(
    pool: &SqlitePool,
    name: Option<&str>,
    limit: i64,
    offset: i64,
) -> AppResult<Vec<Department>> {
    let departments = match name {
        Some(name) => {
            sqlx::query_as::<_, Department>(&format!(
                "SELECT {COLUMNS} FROM department WHERE name = ? ORDER BY id LIMIT ? OFFSET ?"
            ))
            .bind(name)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, Department>(&format!(
                "SELECT {COLUMNS} FROM department ORDER BY id LIMIT ? OFFSET ?"
            ))
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?
        }
    };
    Ok(departments)
}

/// Find department by id
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> AppResult<Option<Department>> {
    let department = sqlx::query_as::<_, Department>(&format!(
        "SELECT {COLUMNS} FROM department WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(department)
}

/// The most recently founded department.
/// Ties on `create_date` resolve to the largest id (the newest row).
pub async fn find_latest(pool: &SqlitePool) -> AppResult<Option<Department>> {
    let department = sqlx::query_as::<_, Department>(&format!(
        "SELECT {COLUMNS} FROM department ORDER BY create_date DESC, id DESC LIMIT 1"
    ))
    .fetch_optional(pool)
    .await?;
    Ok(department)
}

/// Create a new department; the id comes from AUTOINCREMENT
pub async fn create(pool: &SqlitePool, data: NewDepartment) -> AppResult<Department> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO department (name, create_date, is_delete) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(&data.name)
    .bind(data.create_date)
    .bind(data.is_delete)
    .fetch_one(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::database("Failed to create department"))
}

/// Full update with default-to-current: absent fields keep the stored value.
/// Returns None when the id has no row.
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    data: &DepartmentUpdate,
) -> AppResult<Option<Department>> {
    let rows = sqlx::query(
        "UPDATE department SET name = COALESCE(?1, name), create_date = COALESCE(?2, create_date), is_delete = COALESCE(?3, is_delete) WHERE id = ?4",
    )
    .bind(&data.name)
    .bind(data.create_date)
    .bind(data.is_delete)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Ok(None);
    }
    find_by_id(pool, id).await
}

/// Overwrite the name only. Returns None when the id has no row.
pub async fn rename(pool: &SqlitePool, id: i64, name: &str) -> AppResult<Option<Department>> {
    let rows = sqlx::query("UPDATE department SET name = ? WHERE id = ?")
        .bind(name)
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Ok(None);
    }
    find_by_id(pool, id).await
}

/// Hard delete. The soft-delete flag exists on the row but the API
/// contract removes the row outright. Deleting never cascades: a department
/// that still owns employees is refused.
pub async fn delete(pool: &SqlitePool, id: i64) -> AppResult<bool> {
    let employees =
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employee WHERE department_id = ?")
            .bind(id)
            .fetch_one(pool)
            .await?;
    if employees > 0 {
        return Err(AppError::validation(
            "department",
            "cannot delete a department that still has employees",
        ));
    }
    let rows = sqlx::query("DELETE FROM department WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
