use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use shared::models::{Employee, EmployeeUpdate, Patch};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    pub employee_id: String,
    pub name: String,
    pub department: String,
    pub salary: f64,
    pub joining_date: NaiveDate,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListEmployeesQuery {
    pub department: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchEmployeesQuery {
    pub skill: Option<String>,
}
