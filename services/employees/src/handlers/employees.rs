use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::Json,
};
use shared::db::repositories::MAX_LIST_RESULTS;
use shared::models::EmployeeFilter;
use shared::utils::non_blank;
use shared::Repository;
use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::models::{
    CreateEmployeeRequest, Employee, EmployeeUpdate, ListEmployeesQuery, MessageResponse,
    SearchEmployeesQuery,
};
use crate::validation::{validate_new_employee, validate_update};
use crate::AppState;

pub async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<CreateEmployeeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Employee>), ApiError> {
    let Json(request) = payload?;
    let employee = validate_new_employee(request)?;

    // Check-then-insert; concurrent creates with the same id are not serialized.
    if state.employees.exists(&employee.employee_id).await? {
        return Err(ApiError::Conflict("Employee ID must be unique".to_string()));
    }

    let created = state.employees.create(employee).await?;
    info!("Created employee {}", created.employee_id);

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Result<Json<Employee>, ApiError> {
    state
        .employees
        .find_by_id(employee_id)
        .await?
        .map(Json)
        .ok_or_else(ApiError::employee_not_found)
}

pub async fn update_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    payload: Result<Json<EmployeeUpdate>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(update) = payload?;
    let update = validate_update(update)?;

    if !state
        .employees
        .update_partial(employee_id.clone(), &update)
        .await?
    {
        return Err(ApiError::employee_not_found());
    }
    info!("Updated employee {}", employee_id);

    Ok(Json(MessageResponse::new("Employee updated successfully")))
}

pub async fn delete_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !state.employees.delete(employee_id.clone()).await? {
        return Err(ApiError::employee_not_found());
    }
    info!("Deleted employee {}", employee_id);

    Ok(Json(MessageResponse::new("Employee deleted successfully")))
}

pub async fn list_employees(
    State(state): State<AppState>,
    query: Result<Query<ListEmployeesQuery>, QueryRejection>,
) -> Result<Json<Vec<Employee>>, ApiError> {
    let Query(query) = query?;
    let filter = EmployeeFilter {
        department: non_blank(query.department),
        ..EmployeeFilter::default()
    };
    debug!("Listing employees with {:?}", filter);

    let employees = state.employees.find_many(&filter, MAX_LIST_RESULTS).await?;
    Ok(Json(employees))
}

pub async fn average_salary(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<String, f64>>, ApiError> {
    let averages = state.employees.average_salary_by_department().await?;
    Ok(Json(averages))
}

pub async fn search_employees(
    State(state): State<AppState>,
    query: Result<Query<SearchEmployeesQuery>, QueryRejection>,
) -> Result<Json<Vec<Employee>>, ApiError> {
    let Query(query) = query?;
    let skill = non_blank(query.skill)
        .ok_or_else(|| ApiError::Validation("Query parameter 'skill' is required".to_string()))?;

    let employees = state
        .employees
        .find_many(&EmployeeFilter::by_skill(skill), MAX_LIST_RESULTS)
        .await?;
    Ok(Json(employees))
}
