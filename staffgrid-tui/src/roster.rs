//! Roster seeding: the built-in sample plus optional JSON seed files.

use std::fs;
use std::path::Path;

use log::info;

use staffgrid_core::model::{Employee, Row};

use crate::error::ShellError;

/// Load rows from a JSON seed file: an array of employee records with
/// `name`, `position`, `office`, `age`, and `salary` fields.
pub fn load_seed(path: &Path) -> Result<Vec<Row>, ShellError> {
    let text = fs::read_to_string(path).map_err(|source| ShellError::SeedRead {
        path: path.to_path_buf(),
        source,
    })?;
    let employees: Vec<Employee> =
        serde_json::from_str(&text).map_err(|source| ShellError::SeedParse {
            path: path.to_path_buf(),
            source,
        })?;
    info!("loaded {} rows from {}", employees.len(), path.display());
    Ok(employees.iter().map(Row::from_employee).collect())
}

/// The built-in sample roster, used when no seed file is given.
pub fn sample_roster() -> Vec<Row> {
    let employees = [
        ("Airi Satou", "Accountant", "Tokyo", 33, 162_700),
        ("Angelica Ramos", "Chief Executive Officer", "London", 47, 1_200_000),
        ("Ashton Cox", "Junior Technical Author", "San Francisco", 66, 86_000),
        ("Bradley Greer", "Software Engineer", "London", 41, 132_000),
        ("Brenden Wagner", "Software Engineer", "San Francisco", 28, 206_850),
        ("Brielle Williamson", "Integration Specialist", "New York", 61, 372_000),
        ("Caesar Vance", "Pre-Sales Support", "New York", 21, 106_450),
        ("Cedric Kelly", "Senior Developer", "Edinburgh", 22, 433_060),
    ];
    employees
        .into_iter()
        .map(|(name, position, office, age, salary)| {
            Row::from_employee(&Employee {
                name: name.to_string(),
                position: position.to_string(),
                office: office.to_string(),
                age,
                salary,
            })
        })
        .collect()
}
