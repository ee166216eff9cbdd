use super::error::StoreError;
use super::store::GradeStore;
use super::student::Student;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

pub const DEFAULT_DATA_FILE: &str = "grades.json";

/// Write the whole store to `path` as pretty-printed JSON, replacing whatever
/// the file held before.
pub fn save(store: &GradeStore, path: &Path) -> Result<(), StoreError> {
    let content = serde_json::to_string_pretty(store.students())?;
    fs::write(path, content)?;
    log::info!("Saved {} students to {}", store.len(), path.display());
    Ok(())
}

/// Read a store previously written by [`save`]. A missing file is an empty
/// store.
pub fn load(path: &Path) -> Result<GradeStore, StoreError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::info!("No data file at {}, starting fresh", path.display());
            return Ok(GradeStore::new());
        }
        Err(e) => return Err(e.into()),
    };

    let records: BTreeMap<String, Student> = serde_json::from_str(&content)?;
    for (key, student) in &records {
        if key != &student.name {
            log::warn!("Record key '{}' differs from name '{}', keeping name", key, student.name);
        }
    }

    let store = GradeStore::from_students(records.into_values());
    log::info!("Loaded {} students from {}", store.len(), path.display());
    Ok(store)
}
