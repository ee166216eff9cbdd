use super::error::StatsError;
use crate::storage::{Grades, Student};

/// A grade together with the subject it was earned in
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectGrade {
    pub subject: String,
    pub grade: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Extremes {
    pub highest: SubjectGrade,
    pub lowest: SubjectGrade,
}

/// Every figure shown by the statistics view
#[derive(Debug, Clone, PartialEq)]
pub struct GradeReport {
    pub average: f64,
    pub median: f64,
    pub extremes: Extremes,
}

impl GradeReport {
    pub fn for_student(student: &Student) -> Result<Self, StatsError> {
        Self::for_grades(&student.grades)
    }

    pub fn for_grades(grades: &Grades) -> Result<Self, StatsError> {
        Ok(Self {
            average: average(grades)?,
            median: median(grades)?,
            extremes: highest_lowest(grades)?,
        })
    }
}

pub fn average(grades: &Grades) -> Result<f64, StatsError> {
    if grades.is_empty() {
        return Err(StatsError::NoGrades);
    }
    let sum: f64 = grades.values().sum();
    Ok(sum / grades.len() as f64)
}

/// Single pass for both extremes. Both start at the first subject and are only
/// replaced by a strictly better grade, so ties keep the earlier subject.
pub fn highest_lowest(grades: &Grades) -> Result<Extremes, StatsError> {
    let mut iter = grades.iter();
    let (first_subject, &first_grade) = iter.next().ok_or(StatsError::NoGrades)?;

    let mut highest = (first_subject, first_grade);
    let mut lowest = (first_subject, first_grade);

    for (subject, &grade) in iter {
        if grade > highest.1 {
            highest = (subject, grade);
        }
        if grade < lowest.1 {
            lowest = (subject, grade);
        }
    }

    Ok(Extremes {
        highest: SubjectGrade {
            subject: highest.0.clone(),
            grade: highest.1,
        },
        lowest: SubjectGrade {
            subject: lowest.0.clone(),
            grade: lowest.1,
        },
    })
}

pub fn median(grades: &Grades) -> Result<f64, StatsError> {
    let values: Vec<f64> = grades.values().copied().collect();
    median_of(values)
}

pub fn median_of(mut values: Vec<f64>) -> Result<f64, StatsError> {
    let n = values.len();
    if n == 0 {
        return Err(StatsError::NoGrades);
    }
    values.sort_by(|a, b| a.total_cmp(b));

    if n % 2 == 1 {
        Ok(values[n / 2])
    } else {
        Ok((values[n / 2 - 1] + values[n / 2]) / 2.0)
    }
}
