use crate::shared::api_utils::{self, ApiError};
use contracts::domain::c001_salary_structure::SalaryStructure;
use contracts::domain::c002_employee_compensation::EmployeeCompensation;

pub async fn fetch_structures() -> Result<Vec<SalaryStructure>, ApiError> {
    api_utils::get_json("/structures/").await
}

/// An employee with no records yet answers 404; the view treats that as an
/// empty history, not an error.
pub async fn fetch_history(employee_id: &str) -> Result<Vec<EmployeeCompensation>, ApiError> {
    match api_utils::get_json(&format!("/employees/{employee_id}/compensation")).await {
        Err(e) if e.is_not_found() => Ok(Vec::new()),
        other => other,
    }
}
