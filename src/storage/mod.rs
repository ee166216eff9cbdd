pub mod error;
pub mod student;
pub mod store;
pub mod persistence;

pub use error::StoreError;
pub use student::{parse_grade, Grades, Student};
pub use store::GradeStore;
pub use persistence::{load, save, DEFAULT_DATA_FILE};
