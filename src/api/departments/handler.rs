//! Department API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::models::{Department, DepartmentCreate, DepartmentRename, DepartmentUpdate};
use crate::db::repository::department as repo;
use crate::utils::{AppError, AppResult, FieldErrors};

/// List query: optional exact-name filter plus page-number pagination.
/// Without `page` the response is a plain array.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub name: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

/// One page of departments
#[derive(Debug, Serialize)]
pub struct PageResponse {
    pub count: i64,
    pub page: u32,
    pub page_size: u32,
    pub results: Vec<Department>,
}

/// GET /departments - 获取所有部门 (可分页)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Response> {
    let name = query.name.as_deref();

    let Some(page) = query.page else {
        let departments = repo::find_all(&state.pool, name).await?;
        return Ok(Json(departments).into_response());
    };

    let page_size = query.page_size.unwrap_or(state.config.page_size);
    let mut errors = FieldErrors::new();
    if page == 0 {
        errors.push("page", "page index out of range");
    }
    if page_size == 0 {
        errors.push("page_size", "page_size must be at least 1");
    }
    errors.into_result()?;

    let count = repo::count(&state.pool, name).await?;
    // An empty result set still has one (empty) page.
    let pages = (count.max(0) as u64)
        .div_ceil(u64::from(page_size))
        .max(1);
    if u64::from(page) > pages {
        return Err(AppError::validation("page", "page index out of range"));
    }

    let offset = i64::from(page - 1) * i64::from(page_size);
    let results = repo::find_page(&state.pool, name, i64::from(page_size), offset).await?;
    Ok(Json(PageResponse {
        count,
        page,
        page_size,
        results,
    })
    .into_response())
}

/// GET /departments/:id - 获取单个部门
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Department>> {
    let department = repo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Department {id} not found")))?;
    Ok(Json(department))
}

/// GET /departments/latest - 最新成立的部门
pub async fn latest(State(state): State<ServerState>) -> AppResult<Json<Department>> {
    let department = repo::find_latest(&state.pool)
        .await?
        .ok_or_else(|| AppError::not_found("No departments exist"))?;
    Ok(Json(department))
}

/// POST /departments - 创建部门
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<DepartmentCreate>,
) -> AppResult<(StatusCode, Json<Department>)> {
    let data = payload.validate()?;
    let department = repo::create(&state.pool, data).await?;
    Ok((StatusCode::CREATED, Json(department)))
}

/// PUT /departments/:id - 更新部门 (缺失字段保留原值)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<DepartmentUpdate>,
) -> AppResult<Json<Department>> {
    // A missing row is always a 404, even when the payload is also invalid.
    repo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Department {id} not found")))?;
    payload.validate()?;

    let department = repo::update(&state.pool, id, &payload)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Department {id} not found")))?;
    Ok(Json(department))
}

/// PUT /departments/:id/name - 修改部门名称
pub async fn rename(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<DepartmentRename>,
) -> AppResult<Json<Department>> {
    repo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Department {id} not found")))?;
    let name = payload.validate()?;

    let department = repo::rename(&state.pool, id, &name)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Department {id} not found")))?;
    Ok(Json(department))
}

/// DELETE /departments/:id - 删除部门 (硬删除)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    let deleted = repo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::not_found(format!("Department {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}
