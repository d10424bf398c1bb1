pub mod employee;

pub use employee::{EmployeeRepository, MAX_LIST_RESULTS};
