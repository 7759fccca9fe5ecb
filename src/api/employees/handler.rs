//! Employee API Handlers

use axum::{Json, extract::State, http::StatusCode};

use crate::core::ServerState;
use crate::db::models::{Employee, EmployeeCreate};
use crate::db::repository::employee as repo;
use crate::utils::AppResult;

/// POST /employees - 创建员工
///
/// `hire_date` is assigned server-side; `department` must reference an
/// existing department and is echoed back as its numeric id.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    let data = payload.validate()?;
    let employee = repo::create(&state.pool, data).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}
