use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::error::StoreError;

/// Subject name -> grade
pub type Grades = BTreeMap<String, f64>;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Student {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Grades", default)]
    pub grades: Grades,
}

impl Student {
    pub fn new(name: String, grades: Grades) -> Self {
        Self { name, grades }
    }

    pub fn grade(&self, subject: &str) -> Option<f64> {
        self.grades.get(subject).copied()
    }
}

/// Parse operator input into a grade. NaN and infinities are rejected since
/// they cannot be written to the JSON file.
pub fn parse_grade(input: &str) -> Result<f64, StoreError> {
    let trimmed = input.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(StoreError::InvalidGrade(trimmed.to_string())),
    }
}
