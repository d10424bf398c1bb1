use anyhow::Result;
use axum_test::TestServer;
use employee_service::{create_app, AppState};
use shared::test_environment::TestEnvironment;

pub struct TestFixture {
    #[allow(dead_code)]
    pub state: AppState,
    pub server: TestServer,
    pub test_env: TestEnvironment,
}

pub async fn setup_test_fixture() -> Result<TestFixture> {
    let test_env = TestEnvironment::new().await?;
    let state = AppState::new(test_env.db_pool.clone());
    let server = TestServer::new(create_app(state.clone()))?;

    Ok(TestFixture {
        state,
        server,
        test_env,
    })
}

impl TestFixture {
    pub async fn cleanup(self) -> Result<()> {
        self.test_env.cleanup().await
    }
}

pub mod fixtures {
    use serde_json::{json, Value};

    pub fn employee_payload(employee_id: &str) -> Value {
        json!({
            "employee_id": employee_id,
            "name": "John Doe",
            "department": "Engineering",
            "salary": 5000.00,
            "joining_date": "2023-01-15",
            "skills": ["Python", "Django"]
        })
    }

    pub fn employee_payload_with(
        employee_id: &str,
        department: &str,
        salary: f64,
        joining_date: &str,
        skills: &[&str],
    ) -> Value {
        json!({
            "employee_id": employee_id,
            "name": format!("Employee {}", employee_id),
            "department": department,
            "salary": salary,
            "joining_date": joining_date,
            "skills": skills
        })
    }
}
