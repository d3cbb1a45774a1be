use crate::shared::api_utils::{self, ApiError};
use contracts::domain::c001_salary_structure::{SalaryStructure, StructureDraft};

pub async fn fetch_by_id(id: i64) -> Result<SalaryStructure, ApiError> {
    api_utils::get_json(&format!("/structures/{id}")).await
}

pub async fn create_structure(draft: &StructureDraft) -> Result<SalaryStructure, ApiError> {
    api_utils::post_json("/structures/", draft).await
}

pub async fn update_structure(id: i64, draft: &StructureDraft) -> Result<SalaryStructure, ApiError> {
    api_utils::put_json(&format!("/structures/{id}"), draft).await
}
