pub mod c001_salary_structure;
pub mod c002_employee_compensation;
