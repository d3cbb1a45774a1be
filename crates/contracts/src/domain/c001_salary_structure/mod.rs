//! Salary Structure Domain Module
//!
//! A salary structure is a named, country-scoped template made of
//! compensation components (earnings, deductions, benefits).

pub mod aggregate;

pub use aggregate::{
    ComponentDraft, ComponentId, ComponentKind, CompensationComponent, Country, RuleKind,
    SalaryStructure, StructureDraft, StructureId,
};
