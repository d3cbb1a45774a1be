//! Field-set derivation and reconciliation for the compensation editor.
//!
//! Everything here is pure: the view model feeds it the settled results of
//! the catalog and history fetches and applies what comes back to its
//! signals. Because reconciliation is a function of (catalog, history), its
//! result cannot depend on which fetch finished first.

use chrono::NaiveDate;
use contracts::domain::c001_salary_structure::{ComponentId, SalaryStructure, StructureId};
use contracts::domain::c002_employee_compensation::{
    CompensationDraft, ComponentValueDraft, EmployeeCompensation,
};

/// One input row of the editor, derived from a structure component. The
/// value is kept as raw input text; numeric coercion happens only when a
/// draft is built for submission.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueRow {
    pub component_id: ComponentId,
    pub name: String,
    pub value: String,
}

/// Editor state reconstructed from a previously persisted record.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconciledForm {
    pub structure_id: StructureId,
    pub effective_from: String,
    pub rows: Vec<ValueRow>,
}

/// Exactly one row per component of `structure`, in the structure's order,
/// each seeded with the component id, its display name and a "0" value.
pub fn derive_rows(structure: &SalaryStructure) -> Vec<ValueRow> {
    structure
        .components
        .iter()
        .map(|c| ValueRow {
            component_id: c.id,
            name: c.name.clone(),
            value: "0".to_string(),
        })
        .collect()
}

/// Rows for the currently selected structure. No selection, or a selection
/// not present in the catalog, yields an empty row set. The previous rows
/// are always discarded wholesale: switching structures is destructive to
/// entered values by design.
pub fn rows_for_selection(
    catalog: &[SalaryStructure],
    structure_id: Option<StructureId>,
) -> Vec<ValueRow> {
    structure_id
        .and_then(|id| catalog.iter().find(|s| s.id == Some(id)))
        .map(derive_rows)
        .unwrap_or_default()
}

/// The record the editor operates on: the last element of the backend's
/// list, not a recomputed most-recent-by-date.
pub fn latest_record(history: &[EmployeeCompensation]) -> Option<&EmployeeCompensation> {
    history.last()
}

/// Overwrite row values with the amounts persisted in `record`. Rows without
/// a persisted value keep their "0" default; persisted values referencing a
/// component no longer in the structure are dropped silently.
pub fn apply_record(rows: &mut [ValueRow], record: &EmployeeCompensation) {
    for row in rows.iter_mut() {
        if let Some(value) = record.value_for(row.component_id) {
            row.value = format_value(value);
        }
    }
}

/// Rebuild the full editor state from the latest record, once both the
/// catalog and the history are in. `None` when the employee has no history:
/// the editor stays in its default new-assignment state.
pub fn reconcile(
    catalog: &[SalaryStructure],
    history: &[EmployeeCompensation],
) -> Option<ReconciledForm> {
    let record = latest_record(history)?;
    let mut rows = rows_for_selection(catalog, Some(record.structure_id));
    apply_record(&mut rows, record);
    Some(ReconciledForm {
        structure_id: record.structure_id,
        effective_from: record.effective_from.to_string(),
        rows,
    })
}

/// Validate and coerce the editor state into a write payload. Any missing
/// piece blocks submission; no request leaves the client on error.
pub fn build_draft(
    employee_id: &str,
    structure_id: Option<StructureId>,
    effective_from: &str,
    rows: &[ValueRow],
) -> Result<CompensationDraft, String> {
    let structure_id = structure_id.ok_or_else(|| "Select a salary structure".to_string())?;

    let effective_from = effective_from.trim();
    if effective_from.is_empty() {
        return Err("Effective date is required".to_string());
    }
    let effective_from: NaiveDate = effective_from
        .parse()
        .map_err(|_| "Effective date must be a valid date".to_string())?;

    let mut component_values = Vec::with_capacity(rows.len());
    for row in rows {
        let text = row.value.trim();
        if text.is_empty() {
            return Err(format!("Value for \"{}\" is required", row.name));
        }
        let value: f64 = text
            .parse()
            .map_err(|_| format!("Value for \"{}\" must be a number", row.name))?;
        component_values.push(ComponentValueDraft {
            component_id: row.component_id,
            value,
        });
    }

    Ok(CompensationDraft {
        employee_id: employee_id.to_string(),
        structure_id,
        effective_from,
        component_values,
    })
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::c001_salary_structure::{
        CompensationComponent, ComponentId, ComponentKind, Country, RuleKind,
    };
    use contracts::domain::c002_employee_compensation::EmployeeComponentValue;

    fn component(id: i64, name: &str) -> CompensationComponent {
        CompensationComponent {
            id: ComponentId(id),
            name: name.to_string(),
            kind: ComponentKind::Earning,
            rule_kind: Some(RuleKind::Fixed),
            structure_id: None,
        }
    }

    fn structure(id: i64, components: Vec<CompensationComponent>) -> SalaryStructure {
        SalaryStructure {
            id: Some(StructureId(id)),
            name: format!("Structure {id}"),
            country: Country::UAE,
            created_at: None,
            updated_at: None,
            components,
        }
    }

    fn record(
        structure_id: i64,
        effective_from: &str,
        values: Vec<(i64, f64)>,
    ) -> EmployeeCompensation {
        EmployeeCompensation {
            id: 1,
            employee_id: "E-1001".into(),
            structure_id: StructureId(structure_id),
            effective_from: effective_from.parse().unwrap(),
            created_at: None,
            updated_at: None,
            component_values: values
                .into_iter()
                .map(|(component_id, value)| EmployeeComponentValue {
                    id: None,
                    component_id: ComponentId(component_id),
                    value,
                    employee_compensation_id: None,
                })
                .collect(),
        }
    }

    #[test]
    fn derive_rows_one_per_component_in_order_with_zero_default() {
        let s = structure(1, vec![component(10, "Base"), component(11, "Housing")]);
        let rows = derive_rows(&s);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].component_id, ComponentId(10));
        assert_eq!(rows[0].name, "Base");
        assert_eq!(rows[0].value, "0");
        assert_eq!(rows[1].component_id, ComponentId(11));
    }

    #[test]
    fn switching_structures_discards_previous_rows() {
        let catalog = vec![
            structure(1, vec![component(10, "Base")]),
            structure(2, vec![component(20, "Stipend"), component(21, "Bonus")]),
        ];
        let mut rows = rows_for_selection(&catalog, Some(StructureId(1)));
        rows[0].value = "9000".into();

        let rows = rows_for_selection(&catalog, Some(StructureId(2)));
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.value == "0"));
    }

    #[test]
    fn missing_or_unknown_selection_yields_no_rows() {
        let catalog = vec![structure(1, vec![component(10, "Base")])];
        assert!(rows_for_selection(&catalog, None).is_empty());
        assert!(rows_for_selection(&catalog, Some(StructureId(7))).is_empty());
    }

    #[test]
    fn reconcile_fills_matching_values_and_defaults_the_rest() {
        // A record that only covers a subset of the structure's current
        // components.
        let catalog = vec![structure(1, vec![component(10, "Base"), component(11, "Housing")])];
        let history = vec![record(1, "2024-01-01", vec![(10, 5000.0)])];

        let form = reconcile(&catalog, &history).unwrap();
        assert_eq!(form.structure_id, StructureId(1));
        assert_eq!(form.effective_from, "2024-01-01");
        assert_eq!(form.rows.len(), 2);
        assert_eq!(form.rows[0].value, "5000");
        assert_eq!(form.rows[1].value, "0");
    }

    #[test]
    fn values_for_components_gone_from_the_structure_are_dropped() {
        let catalog = vec![structure(1, vec![component(10, "Base")])];
        let history = vec![record(1, "2024-01-01", vec![(10, 5000.0), (99, 750.0)])];

        let form = reconcile(&catalog, &history).unwrap();
        assert_eq!(form.rows.len(), 1);
        assert_eq!(form.rows[0].value, "5000");
    }

    #[test]
    fn latest_means_last_element_not_latest_date() {
        let history = vec![
            record(1, "2024-06-01", vec![]),
            record(1, "2024-01-01", vec![]),
        ];
        assert_eq!(
            latest_record(&history).unwrap().effective_from,
            "2024-01-01".parse::<NaiveDate>().unwrap()
        );
    }

    #[test]
    fn empty_history_reconciles_to_nothing() {
        let catalog = vec![structure(1, vec![component(10, "Base")])];
        assert_eq!(reconcile(&catalog, &[]), None);
    }

    #[test]
    fn record_for_structure_missing_from_catalog_yields_empty_rows() {
        let history = vec![record(42, "2024-01-01", vec![(10, 5000.0)])];
        let form = reconcile(&[], &history).unwrap();
        assert_eq!(form.structure_id, StructureId(42));
        assert!(form.rows.is_empty());
    }

    #[test]
    fn fractional_values_keep_their_precision() {
        let catalog = vec![structure(1, vec![component(10, "Base")])];
        let history = vec![record(1, "2024-01-01", vec![(10, 2500.5)])];
        let form = reconcile(&catalog, &history).unwrap();
        assert_eq!(form.rows[0].value, "2500.5");
    }

    #[test]
    fn submission_is_blocked_without_a_structure() {
        let err = build_draft("E-1001", None, "2024-01-01", &[]).unwrap_err();
        assert_eq!(err, "Select a salary structure");
    }

    #[test]
    fn submission_is_blocked_without_an_effective_date() {
        let err = build_draft("E-1001", Some(StructureId(1)), "  ", &[]).unwrap_err();
        assert_eq!(err, "Effective date is required");
    }

    #[test]
    fn submission_is_blocked_on_empty_or_non_numeric_values() {
        let row = |value: &str| ValueRow {
            component_id: ComponentId(10),
            name: "Base".into(),
            value: value.into(),
        };
        assert!(
            build_draft("E-1001", Some(StructureId(1)), "2024-01-01", &[row("")]).is_err()
        );
        assert!(
            build_draft("E-1001", Some(StructureId(1)), "2024-01-01", &[row("abc")]).is_err()
        );
    }

    #[test]
    fn draft_coerces_values_and_keeps_row_order() {
        let rows = vec![
            ValueRow {
                component_id: ComponentId(10),
                name: "Base".into(),
                value: " 5000 ".into(),
            },
            ValueRow {
                component_id: ComponentId(11),
                name: "Housing".into(),
                value: "0".into(),
            },
        ];
        let draft = build_draft("E-1001", Some(StructureId(1)), "2024-01-01", &rows).unwrap();
        assert_eq!(draft.employee_id, "E-1001");
        assert_eq!(draft.structure_id, StructureId(1));
        assert_eq!(draft.component_values.len(), 2);
        assert_eq!(draft.component_values[0].component_id, ComponentId(10));
        assert_eq!(draft.component_values[0].value, 5000.0);
        assert_eq!(draft.component_values[1].value, 0.0);
    }
}
