use chrono::{Datelike, NaiveDate};

use crate::error::ApiError;
use crate::models::{CreateEmployeeRequest, Employee, EmployeeUpdate, Patch};

/// Path segments routed ahead of `/employees/:employee_id`.
const RESERVED_IDS: [&str; 2] = ["avg-salary", "search"];

/// Stored dates serialize as `YYYY-MM-DD`, so they sort lexically only
/// within four-digit years.
const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

/// Checks every field of a create payload and turns it into the record to
/// store, with surrounding whitespace trimmed from every string.
pub fn validate_new_employee(request: CreateEmployeeRequest) -> Result<Employee, ApiError> {
    let employee_id = require_text("employee_id", request.employee_id)?;
    require_addressable(&employee_id)?;
    let name = require_text("name", request.name)?;
    let department = require_text("department", request.department)?;
    require_salary(request.salary)?;
    require_date(request.joining_date)?;
    let skills = require_skills(request.skills)?;

    Ok(Employee {
        employee_id,
        name,
        department,
        salary: request.salary,
        joining_date: request.joining_date,
        skills,
    })
}

/// Checks the fields present in a partial update and returns it normalized
/// the same way as a create. An update without any field is rejected before
/// anything else.
pub fn validate_update(update: EmployeeUpdate) -> Result<EmployeeUpdate, ApiError> {
    if update.is_empty() {
        return Err(ApiError::EmptyUpdate);
    }

    let name = match update.name {
        Patch::Value(name) => Patch::Value(require_text("name", name)?),
        Patch::Null => return Err(null_field("name")),
        Patch::Absent => Patch::Absent,
    };
    let department = match update.department {
        Patch::Value(department) => Patch::Value(require_text("department", department)?),
        Patch::Null => return Err(null_field("department")),
        Patch::Absent => Patch::Absent,
    };
    match update.salary {
        Patch::Value(salary) => require_salary(salary)?,
        Patch::Null => return Err(null_field("salary")),
        Patch::Absent => {}
    }
    match update.joining_date {
        Patch::Value(joining_date) => require_date(joining_date)?,
        Patch::Null => return Err(null_field("joining_date")),
        Patch::Absent => {}
    }
    let skills = match update.skills {
        Patch::Value(skills) => Patch::Value(require_skills(skills)?),
        Patch::Null => return Err(null_field("skills")),
        Patch::Absent => Patch::Absent,
    };

    Ok(EmployeeUpdate {
        name,
        department,
        salary: update.salary,
        joining_date: update.joining_date,
        skills,
    })
}

fn require_text(field: &str, value: String) -> Result<String, ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::Validation(format!("{} must not be empty", field)));
    }
    Ok(trimmed.to_string())
}

fn require_addressable(employee_id: &str) -> Result<(), ApiError> {
    if employee_id.contains('/') || RESERVED_IDS.contains(&employee_id) {
        return Err(ApiError::Validation(format!(
            "employee_id '{}' is not allowed",
            employee_id
        )));
    }
    Ok(())
}

fn require_salary(salary: f64) -> Result<(), ApiError> {
    if !salary.is_finite() || salary <= 0.0 {
        return Err(ApiError::Validation(
            "salary must be a number greater than 0".to_string(),
        ));
    }
    Ok(())
}

fn require_date(joining_date: NaiveDate) -> Result<(), ApiError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&joining_date.year()) {
        return Err(ApiError::Validation(format!(
            "joining_date year must be between {} and {}",
            MIN_YEAR, MAX_YEAR
        )));
    }
    Ok(())
}

fn require_skills(skills: Vec<String>) -> Result<Vec<String>, ApiError> {
    if skills.is_empty() {
        return Err(ApiError::Validation(
            "skills must contain at least one entry".to_string(),
        ));
    }
    skills
        .into_iter()
        .map(|skill| {
            let trimmed = skill.trim();
            if trimmed.is_empty() {
                return Err(ApiError::Validation(
                    "skills must not contain empty entries".to_string(),
                ));
            }
            Ok(trimmed.to_string())
        })
        .collect()
}

fn null_field(field: &str) -> ApiError {
    ApiError::Validation(format!("{} must not be null", field))
}
