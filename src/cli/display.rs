use crate::stats::GradeReport;
use crate::storage::Student;
use std::io::{self, Write};

pub const MENU: &[&str] = &[
    "1. Add Student",
    "2. View All Students",
    "3. Search a specific student",
    "4. Update Student Grades",
    "5. Delete a student",
    "6. View Grade Statistics",
    "7. Exit",
];

pub fn display_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Student Grade System")?;
    for line in MENU {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

pub fn display_student<W: Write>(out: &mut W, student: &Student) -> io::Result<()> {
    writeln!(out, "Name : {}", student.name)?;
    if student.grades.is_empty() {
        writeln!(out, "  No grades recorded")?;
        return Ok(());
    }
    for (subject, grade) in &student.grades {
        writeln!(out, "  Subject: {}, Grade: {:.2}", subject, grade)?;
    }
    Ok(())
}

pub fn display_report<W: Write>(out: &mut W, report: &GradeReport) -> io::Result<()> {
    let extremes = &report.extremes;
    writeln!(out, "Average Grade: {:.2}", report.average)?;
    writeln!(out, "Highest Grade: {:.2} in {}", extremes.highest.grade, extremes.highest.subject)?;
    writeln!(out, "Lowest Grade: {:.2} in {}", extremes.lowest.grade, extremes.lowest.subject)?;
    writeln!(out, "Median Grade: {:.2}", report.median)?;
    Ok(())
}
