//! Row intake: the add-employee draft and its validation pipeline.

use thiserror::Error;

use crate::model::{Employee, Office, coerce_number};

/// Minimum accepted name length, in characters, after trimming.
pub const MIN_NAME_LEN: usize = 4;

/// Inclusive age bounds.
pub const MIN_AGE: f64 = 18.0;
pub const MAX_AGE: f64 = 90.0;

/// Validation failures, in the order the pipeline checks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IntakeError {
    #[error("All fields are required")]
    MissingFields,
    #[error("Name should be at least 4 characters")]
    NameTooShort,
    #[error("Age should be between 18 and 90 years")]
    AgeOutOfRange,
}

/// The in-progress, uncommitted values of the add-row form.
///
/// Fields hold raw text as typed. The draft survives a failed validation
/// untouched so the user can fix and resubmit; only a successful commit
/// resets it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeDraft {
    pub name: String,
    pub position: String,
    pub age: String,
    pub salary: String,
    pub office: String,
}

impl Default for IntakeDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            position: String::new(),
            age: String::new(),
            salary: String::new(),
            // The select starts on its first option.
            office: Office::Tokyo.label().to_string(),
        }
    }
}

impl IntakeDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset every field to its initial value (office back to the first
    /// option).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Run the validation pipeline, short-circuiting on the first failure,
    /// and produce the normalized employee record on success.
    ///
    /// The draft itself is not modified either way; the caller resets it
    /// after committing the record.
    pub fn submit(&self) -> Result<Employee, IntakeError> {
        let name = self.name.trim();
        let position = self.position.trim();
        let office = self.office.trim();
        let age = coerce_number(&self.age);
        let salary = coerce_number(&self.salary);

        if name.is_empty() || position.is_empty() || office.is_empty() || age == 0.0 || salary == 0.0
        {
            return Err(IntakeError::MissingFields);
        }
        if name.chars().count() < MIN_NAME_LEN {
            return Err(IntakeError::NameTooShort);
        }
        // Range-check the coerced value before truncating, so 17.5 and 90.5
        // are both out of range.
        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            return Err(IntakeError::AgeOutOfRange);
        }

        Ok(Employee {
            name: name.to_string(),
            position: position.to_string(),
            office: office.to_string(),
            age: age as i64,
            salary: salary as i64,
        })
    }
}
