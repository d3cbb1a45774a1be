//! Employee Compensation Domain Module
//!
//! A compensation record is a dated snapshot assigning a salary structure and
//! concrete per-component values to one employee. An employee accumulates
//! records over time; which one is "current" is decided by the backend's
//! list ordering, not by the record itself.

pub mod aggregate;

pub use aggregate::{
    CompensationDraft, ComponentValueDraft, EmployeeCompensation, EmployeeComponentValue,
};
