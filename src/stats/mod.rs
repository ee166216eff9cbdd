pub mod error;
pub mod grades;

pub use error::StatsError;
pub use grades::{average, highest_lowest, median, median_of, Extremes, GradeReport, SubjectGrade};
