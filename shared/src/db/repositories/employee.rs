use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{self, doc, Document};
use mongodb::Collection;
use std::collections::BTreeMap;
use std::time::Duration;

use crate::db::bounded;
use crate::db::error::DatabaseError;
use crate::db::pool::DatabasePool;
use crate::models::{DepartmentSalary, Employee, EmployeeFilter, EmployeeUpdate, Patch};
use crate::traits::Repository;

/// Upper bound on the number of records any listing returns.
pub const MAX_LIST_RESULTS: i64 = 100;

#[derive(Clone, Debug)]
pub struct EmployeeRepository {
    collection: Collection<Employee>,
    operation_timeout: Duration,
}

impl EmployeeRepository {
    pub fn new(pool: &DatabasePool) -> Self {
        Self {
            collection: pool.collection(&pool.config().collection),
            operation_timeout: pool.config().operation_timeout,
        }
    }

    pub async fn exists(&self, employee_id: &str) -> Result<bool, DatabaseError> {
        let found = bounded(
            self.operation_timeout,
            self.collection.find_one(doc! { "employee_id": employee_id }),
        )
        .await?;

        Ok(found.is_some())
    }

    /// Newest `joining_date` first, at most `limit` records.
    pub async fn find_many(
        &self,
        filter: &EmployeeFilter,
        limit: i64,
    ) -> Result<Vec<Employee>, DatabaseError> {
        let query = filter_document(filter);
        let limit = limit.clamp(1, MAX_LIST_RESULTS);

        let employees = bounded(self.operation_timeout, async {
            let cursor = self
                .collection
                .find(query)
                .sort(doc! { "joining_date": -1 })
                .limit(limit)
                .await?;
            cursor.try_collect::<Vec<_>>().await
        })
        .await?;

        Ok(employees)
    }

    pub async fn average_salary_by_department(
        &self,
    ) -> Result<BTreeMap<String, f64>, DatabaseError> {
        let rows = bounded(self.operation_timeout, async {
            let cursor = self
                .collection
                .aggregate(average_salary_pipeline())
                .await?;
            cursor.try_collect::<Vec<Document>>().await
        })
        .await?;

        let mut averages = BTreeMap::new();
        for row in rows {
            let row: DepartmentSalary = bson::from_document(row)?;
            averages.insert(row.department, row.avg_salary);
        }

        Ok(averages)
    }
}

#[async_trait]
impl Repository<Employee, String> for EmployeeRepository {
    type Update = EmployeeUpdate;

    async fn find_by_id(&self, employee_id: String) -> Result<Option<Employee>, DatabaseError> {
        bounded(
            self.operation_timeout,
            self.collection.find_one(doc! { "employee_id": employee_id }),
        )
        .await
    }

    async fn create(&self, employee: Employee) -> Result<Employee, DatabaseError> {
        bounded(self.operation_timeout, self.collection.insert_one(&employee)).await?;
        Ok(employee)
    }

    async fn update_partial(
        &self,
        employee_id: String,
        update: &EmployeeUpdate,
    ) -> Result<bool, DatabaseError> {
        let fields = set_document(update)?;
        if fields.is_empty() {
            return self.exists(&employee_id).await;
        }

        let result = bounded(
            self.operation_timeout,
            self.collection
                .update_one(doc! { "employee_id": employee_id }, doc! { "$set": fields }),
        )
        .await?;

        Ok(result.matched_count > 0)
    }

    async fn delete(&self, employee_id: String) -> Result<bool, DatabaseError> {
        let result = bounded(
            self.operation_timeout,
            self.collection.delete_one(doc! { "employee_id": employee_id }),
        )
        .await?;

        Ok(result.deleted_count > 0)
    }
}

fn filter_document(filter: &EmployeeFilter) -> Document {
    let mut query = Document::new();
    if let Some(department) = &filter.department {
        query.insert("department", department.as_str());
    }
    if let Some(skill) = &filter.skill {
        // Equality against an array field matches any element.
        query.insert("skills", skill.as_str());
    }
    query
}

/// `$set` body holding only the fields carrying a value.
fn set_document(update: &EmployeeUpdate) -> Result<Document, DatabaseError> {
    let mut fields = Document::new();
    if let Patch::Value(name) = &update.name {
        fields.insert("name", name.as_str());
    }
    if let Patch::Value(department) = &update.department {
        fields.insert("department", department.as_str());
    }
    if let Patch::Value(salary) = update.salary {
        fields.insert("salary", salary);
    }
    if let Patch::Value(joining_date) = &update.joining_date {
        fields.insert("joining_date", bson::to_bson(joining_date)?);
    }
    if let Patch::Value(skills) = &update.skills {
        fields.insert("skills", bson::to_bson(skills)?);
    }
    Ok(fields)
}

fn average_salary_pipeline() -> Vec<Document> {
    vec![
        doc! { "$group": { "_id": "$department", "avg_salary": { "$avg": "$salary" } } },
        doc! { "$project": { "department": "$_id", "avg_salary": 1, "_id": 0 } },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use mongodb::bson::Bson;

    #[test]
    fn test_filter_document_without_constraints_is_empty() {
        assert!(filter_document(&EmployeeFilter::default()).is_empty());
    }

    #[test]
    fn test_filter_document_by_department() {
        let query = filter_document(&EmployeeFilter::by_department("Engineering"));
        assert_eq!(query, doc! { "department": "Engineering" });
    }

    #[test]
    fn test_filter_document_by_skill() {
        let query = filter_document(&EmployeeFilter::by_skill("Python"));
        assert_eq!(query, doc! { "skills": "Python" });
    }

    #[test]
    fn test_set_document_skips_absent_and_null_fields() {
        let update = EmployeeUpdate {
            name: Patch::Value("Jane Smith".to_string()),
            department: Patch::Null,
            joining_date: Patch::Value(NaiveDate::from_ymd_opt(2023, 5, 10).unwrap()),
            skills: Patch::Value(vec!["Excel".to_string(), "Recruitment".to_string()]),
            ..EmployeeUpdate::default()
        };

        let fields = set_document(&update).unwrap();

        assert_eq!(fields.len(), 3);
        assert_eq!(fields.get_str("name").unwrap(), "Jane Smith");
        assert_eq!(
            fields.get("joining_date"),
            Some(&Bson::String("2023-05-10".to_string()))
        );
        assert_eq!(fields.get_array("skills").unwrap().len(), 2);
        assert!(!fields.contains_key("department"));
        assert!(!fields.contains_key("salary"));
    }

    #[test]
    fn test_set_document_writes_salary_as_double() {
        let update = EmployeeUpdate {
            salary: Patch::Value(6000.0),
            ..EmployeeUpdate::default()
        };
        assert_eq!(set_document(&update).unwrap(), doc! { "salary": 6000.0 });
    }

    #[test]
    fn test_average_salary_pipeline_groups_then_projects() {
        let pipeline = average_salary_pipeline();
        assert_eq!(pipeline.len(), 2);
        assert!(pipeline[0].contains_key("$group"));
        assert!(pipeline[1].contains_key("$project"));
    }
}
