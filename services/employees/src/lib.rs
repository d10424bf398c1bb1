pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod validation;

use axum::{middleware as axum_middleware, routing::get, Router};
use shared::telemetry;
use shared::{DatabasePool, EmployeeRepository};
use tower::ServiceBuilder;

pub use error::ApiError;
pub use models::{CreateEmployeeRequest, MessageResponse};

#[derive(Clone)]
pub struct AppState {
    pub db_pool: DatabasePool,
    pub employees: EmployeeRepository,
}

impl AppState {
    pub fn new(db_pool: DatabasePool) -> Self {
        let employees = EmployeeRepository::new(&db_pool);
        Self { db_pool, employees }
    }
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route(
            "/employees",
            get(handlers::employees::list_employees).post(handlers::employees::create_employee),
        )
        // Static segments win over the `:employee_id` capture below.
        .route(
            "/employees/avg-salary",
            get(handlers::employees::average_salary),
        )
        .route(
            "/employees/search",
            get(handlers::employees::search_employees),
        )
        .route(
            "/employees/:employee_id",
            get(handlers::employees::get_employee)
                .put(handlers::employees::update_employee)
                .delete(handlers::employees::delete_employee),
        )
        .layer(
            ServiceBuilder::new()
                .layer(axum_middleware::from_fn(telemetry::middleware::trace_layer))
                .layer(middleware::cors_layer()),
        )
        .with_state(state)
}
