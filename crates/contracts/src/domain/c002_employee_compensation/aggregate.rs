use crate::domain::c001_salary_structure::{ComponentId, StructureId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Read model
// ============================================================================

/// One persisted per-component amount inside a compensation record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeComponentValue {
    #[serde(default)]
    pub id: Option<i64>,
    pub component_id: ComponentId,
    pub value: f64,
    #[serde(default)]
    pub employee_compensation_id: Option<i64>,
}

/// A persisted compensation record for one employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCompensation {
    pub id: i64,

    /// Externally issued employee identifier (not managed by this system).
    pub employee_id: String,

    pub structure_id: StructureId,
    pub effective_from: NaiveDate,

    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,

    #[serde(default)]
    pub component_values: Vec<EmployeeComponentValue>,
}

impl EmployeeCompensation {
    /// Persisted value for one component, if the record carries it.
    pub fn value_for(&self, component_id: ComponentId) -> Option<f64> {
        self.component_values
            .iter()
            .find(|v| v.component_id == component_id)
            .map(|v| v.value)
    }
}

// ============================================================================
// Write model (create / update-latest)
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentValueDraft {
    pub component_id: ComponentId,
    pub value: f64,
}

/// Body of POST and PUT /employees/{id}/compensation. The same shape serves
/// both; for PUT the backend decides which stored record is superseded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompensationDraft {
    pub employee_id: String,
    pub structure_id: StructureId,
    pub effective_from: NaiveDate,
    pub component_values: Vec<ComponentValueDraft>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_deserializes_and_resolves_values() {
        let json = r#"{
            "id": 7,
            "employee_id": "E-1001",
            "structure_id": 1,
            "effective_from": "2024-01-01",
            "created_at": "2024-01-02T08:00:00",
            "component_values": [
                { "id": 70, "component_id": 10, "value": 5000, "employee_compensation_id": 7 }
            ]
        }"#;
        let record: EmployeeCompensation = serde_json::from_str(json).unwrap();
        assert_eq!(record.structure_id, StructureId(1));
        assert_eq!(
            record.effective_from,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
        assert_eq!(record.value_for(ComponentId(10)), Some(5000.0));
        assert_eq!(record.value_for(ComponentId(11)), None);
    }

    #[test]
    fn draft_serializes_effective_from_as_iso_date() {
        let draft = CompensationDraft {
            employee_id: "E-1001".into(),
            structure_id: StructureId(1),
            effective_from: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            component_values: vec![ComponentValueDraft {
                component_id: ComponentId(10),
                value: 5000.0,
            }],
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["effective_from"], "2024-01-01");
        assert_eq!(json["component_values"][0]["component_id"], 10);
    }
}
