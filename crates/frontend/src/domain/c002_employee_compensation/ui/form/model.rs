use crate::shared::api_utils::{self, ApiError};
use contracts::domain::c001_salary_structure::SalaryStructure;
use contracts::domain::c002_employee_compensation::{CompensationDraft, EmployeeCompensation};

pub async fn fetch_structures() -> Result<Vec<SalaryStructure>, ApiError> {
    api_utils::get_json("/structures/").await
}

/// 404 means the employee has no records yet; the editor starts blank in
/// that case instead of showing an error.
pub async fn fetch_history(employee_id: &str) -> Result<Vec<EmployeeCompensation>, ApiError> {
    match api_utils::get_json(&format!("/employees/{employee_id}/compensation")).await {
        Err(e) if e.is_not_found() => Ok(Vec::new()),
        other => other,
    }
}

pub async fn create_compensation(
    employee_id: &str,
    draft: &CompensationDraft,
) -> Result<EmployeeCompensation, ApiError> {
    api_utils::post_json(&format!("/employees/{employee_id}/compensation"), draft).await
}

/// The backend decides which stored record the update supersedes.
pub async fn update_compensation(
    employee_id: &str,
    draft: &CompensationDraft,
) -> Result<EmployeeCompensation, ApiError> {
    api_utils::put_json(&format!("/employees/{employee_id}/compensation"), draft).await
}
