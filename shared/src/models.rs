use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One document per hire. The store's own `_id` is never part of this type,
/// so it never reaches a response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub employee_id: String,
    pub name: String,
    pub department: String,
    pub salary: f64,
    pub joining_date: NaiveDate,
    pub skills: Vec<String>,
}

/// A field of a partial update.
///
/// `Absent` when the key is missing from the payload, `Null` when it was sent
/// as an explicit `null`, `Value` otherwise. Fields must be declared with
/// `#[serde(default)]` for the `Absent` case to be reachable.
#[derive(Debug, Clone, PartialEq)]
pub enum Patch<T> {
    Absent,
    Null,
    Value(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Absent
    }
}

impl<T> Patch<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Patch::Absent)
    }

    pub fn is_present(&self) -> bool {
        !self.is_absent()
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Patch::Value(value),
            None => Patch::Null,
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Patch::from)
    }
}

impl<T> Serialize for Patch<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Patch::Value(value) => value.serialize(serializer),
            Patch::Absent | Patch::Null => serializer.serialize_none(),
        }
    }
}

/// Partial update payload. `employee_id` is immutable and therefore an
/// unknown field here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmployeeUpdate {
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub name: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub department: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub salary: Patch<f64>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub joining_date: Patch<NaiveDate>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub skills: Patch<Vec<String>>,
}

impl EmployeeUpdate {
    pub fn is_empty(&self) -> bool {
        !(self.name.is_present()
            || self.department.is_present()
            || self.salary.is_present()
            || self.joining_date.is_present()
            || self.skills.is_present())
    }
}

/// Equality filters for listing. `None` means the field is not constrained.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeFilter {
    pub department: Option<String>,
    pub skill: Option<String>,
}

impl EmployeeFilter {
    pub fn by_department(department: impl Into<String>) -> Self {
        Self {
            department: Some(department.into()),
            ..Self::default()
        }
    }

    pub fn by_skill(skill: impl Into<String>) -> Self {
        Self {
            skill: Some(skill.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentSalary {
    pub department: String,
    pub avg_salary: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_patch_distinguishes_absent_null_and_value() {
        let update: EmployeeUpdate =
            serde_json::from_value(json!({ "name": "Jane", "department": null })).unwrap();

        assert_eq!(update.name, Patch::Value("Jane".to_string()));
        assert_eq!(update.department, Patch::Null);
        assert_eq!(update.salary, Patch::Absent);
        assert_eq!(update.joining_date, Patch::Absent);
        assert_eq!(update.skills, Patch::Absent);
        assert!(!update.is_empty());
    }

    #[test]
    fn test_empty_object_is_empty_update() {
        let update: EmployeeUpdate = serde_json::from_value(json!({})).unwrap();
        assert!(update.is_empty());
    }

    #[test]
    fn test_explicit_null_counts_as_present() {
        let update: EmployeeUpdate = serde_json::from_value(json!({ "salary": null })).unwrap();
        assert!(!update.is_empty());
    }

    #[test]
    fn test_employee_id_is_rejected_in_update() {
        let result = serde_json::from_value::<EmployeeUpdate>(json!({ "employee_id": "EMP2" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_update_serializes_only_present_fields() {
        let update = EmployeeUpdate {
            salary: Patch::Value(6000.0),
            ..EmployeeUpdate::default()
        };
        assert_eq!(serde_json::to_value(&update).unwrap(), json!({ "salary": 6000.0 }));
    }

    #[test]
    fn test_employee_joining_date_round_trips_as_iso_string() {
        let employee: Employee = serde_json::from_value(json!({
            "employee_id": "EMP123",
            "name": "John Doe",
            "department": "Engineering",
            "salary": 5000,
            "joining_date": "2023-01-15",
            "skills": ["Python", "Django"]
        }))
        .unwrap();

        assert_eq!(employee.joining_date, NaiveDate::from_ymd_opt(2023, 1, 15).unwrap());
        assert_eq!(employee.salary, 5000.0);
        assert_eq!(serde_json::to_value(&employee).unwrap()["joining_date"], "2023-01-15");
    }
}
