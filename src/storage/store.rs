use super::error::StoreError;
use super::student::{Grades, Student};
use std::collections::BTreeMap;

/// In-memory roster of students, keyed by name
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GradeStore {
    students: BTreeMap<String, Student>,
}

impl GradeStore {
    pub fn new() -> Self {
        Self {
            students: BTreeMap::new(),
        }
    }

    /// Build a store from loaded records. Each record is keyed by its own
    /// name; later duplicates replace earlier ones.
    pub fn from_students<I>(students: I) -> Self
    where
        I: IntoIterator<Item = Student>,
    {
        let mut store = Self::new();
        for student in students {
            store.students.insert(student.name.clone(), student);
        }
        store
    }

    /// Insert a student, replacing any existing record with the same name.
    pub fn add(&mut self, name: &str, grades: Grades) {
        let student = Student::new(name.to_string(), grades);
        if self.students.insert(name.to_string(), student).is_some() {
            log::debug!("Replaced existing record for '{}'", name);
        }
    }

    pub fn get(&self, name: &str) -> Option<&Student> {
        self.students.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.students.contains_key(name)
    }

    /// Insert or overwrite one subject grade for an existing student
    pub fn set_grade(&mut self, name: &str, subject: &str, value: f64) -> Result<(), StoreError> {
        let student = self
            .students
            .get_mut(name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;
        student.grades.insert(subject.to_string(), value);
        Ok(())
    }

    pub fn delete(&mut self, name: &str) -> Result<Student, StoreError> {
        self.students
            .remove(name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    /// Snapshot of every student, ordered by name
    pub fn all(&self) -> Vec<Student> {
        self.students.values().cloned().collect()
    }

    pub(crate) fn students(&self) -> &BTreeMap<String, Student> {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}
