use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum StatsError {
    #[error("No grades recorded")]
    NoGrades,
}
