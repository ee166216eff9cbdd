use std::io::{self, BufRead, StdinLock, Stdout, Write};

use super::display::{display_menu, display_report, display_student};
use crate::config::Config;
use crate::stats::{GradeReport, StatsError};
use crate::storage::{self, parse_grade, GradeStore, Grades, StoreError};

/// Ends the repeated subject prompts in the add and update flows
const DONE: &str = "done";

/// Interactive menu over a [`GradeStore`]
pub struct CLI<R, W> {
    pub store: GradeStore,
    pub config: Config,
    input: R,
    output: W,
}

impl CLI<StdinLock<'static>, Stdout> {
    /// Shell bound to the process's stdin and stdout
    pub fn stdio(config: Config) -> Result<Self, StoreError> {
        CLI::new(config, io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CLI<R, W> {
    pub fn new(config: Config, input: R, output: W) -> Result<Self, StoreError> {
        let store = if config.load_on_start {
            storage::load(&config.data_file)?
        } else {
            GradeStore::new()
        };
        Ok(Self::with_store(store, config, input, output))
    }

    pub fn with_store(store: GradeStore, config: Config, input: R, output: W) -> Self {
        CLI {
            store,
            config,
            input,
            output,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until option 7 or end of input
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            display_menu(&mut self.output)?;
            let option = match self.prompt("Choose an option: ")? {
                Some(option) => option,
                None => {
                    writeln!(self.output)?;
                    writeln!(self.output, "Exiting....")?;
                    return Ok(());
                }
            };

            match option.as_str() {
                "1" => self.add_student()?,
                "2" => self.view_all_students()?,
                "3" => self.search_student()?,
                "4" => self.update_student_grades()?,
                "5" => self.delete_student()?,
                "6" => self.view_statistics()?,
                "7" => {
                    writeln!(self.output, "Exiting....")?;
                    return Ok(());
                }
                _ => writeln!(self.output, "Invalid option. Please choose a valid option.")?,
            }
        }
    }

    /// Print `text` and read one trimmed line. `None` means end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompt for a student name. Empty names are refused.
    fn prompt_name(&mut self) -> io::Result<Option<String>> {
        match self.prompt("Enter student name: ")? {
            Some(name) if name.is_empty() => {
                writeln!(self.output, "Student name cannot be empty")?;
                Ok(None)
            }
            other => Ok(other),
        }
    }

    /// Prompt for a name and check it is on the roster
    fn prompt_existing_name(&mut self) -> io::Result<Option<String>> {
        let Some(name) = self.prompt_name()? else {
            return Ok(None);
        };
        if !self.store.contains(&name) {
            writeln!(self.output, "{}", StoreError::NotFound(name))?;
            return Ok(None);
        }
        Ok(Some(name))
    }

    fn add_student(&mut self) -> io::Result<()> {
        let Some(name) = self.prompt_name()? else {
            return Ok(());
        };

        let mut grades = Grades::new();
        loop {
            let subject = match self.prompt("Enter subject name or done: ")? {
                Some(subject) if subject == DONE => break,
                Some(subject) if subject.is_empty() => {
                    writeln!(self.output, "Subject name cannot be empty")?;
                    continue;
                }
                Some(subject) => subject,
                None => break,
            };

            let Some(input) = self.prompt(&format!("Enter grade for {}: ", subject))? else {
                break;
            };
            // A bad grade only skips this subject
            match parse_grade(&input) {
                Ok(grade) => {
                    grades.insert(subject, grade);
                }
                Err(e) => {
                    log::debug!("Skipping subject '{}': {}", subject, e);
                    writeln!(self.output, "{}", e)?;
                }
            }
        }

        self.store.add(&name, grades);
        self.persist()?;
        writeln!(self.output, "Student added successfully!")?;
        Ok(())
    }

    fn view_all_students(&mut self) -> io::Result<()> {
        if self.store.is_empty() {
            writeln!(self.output, "No students found")?;
            return Ok(());
        }
        for student in self.store.all() {
            display_student(&mut self.output, &student)?;
        }
        Ok(())
    }

    fn search_student(&mut self) -> io::Result<()> {
        let Some(name) = self.prompt_name()? else {
            return Ok(());
        };
        match self.store.get(&name) {
            Some(student) => display_student(&mut self.output, student),
            None => writeln!(self.output, "{}", StoreError::NotFound(name)),
        }
    }

    fn update_student_grades(&mut self) -> io::Result<()> {
        let Some(name) = self.prompt_existing_name()? else {
            return Ok(());
        };
        writeln!(self.output, "Name : {}", name)?;

        let mut updated = 0;
        loop {
            let subject = match self.prompt("Enter subject to update (or 'done' to finish): ")? {
                Some(subject) if subject == DONE => break,
                Some(subject) if subject.is_empty() => {
                    writeln!(self.output, "Subject name cannot be empty")?;
                    continue;
                }
                Some(subject) => subject,
                None => break,
            };

            let Some(input) = self.prompt("Enter new grade: ")? else {
                break;
            };
            // Unlike add, a bad grade ends the whole update
            let grade = match parse_grade(&input) {
                Ok(grade) => grade,
                Err(e) => {
                    writeln!(self.output, "{}", e)?;
                    break;
                }
            };

            match self.store.set_grade(&name, &subject, grade) {
                Ok(()) => {
                    updated += 1;
                    writeln!(self.output, "Grade updated")?;
                }
                Err(e) => {
                    writeln!(self.output, "{}", e)?;
                    break;
                }
            }
        }

        if updated > 0 {
            self.persist()?;
        }
        Ok(())
    }

    fn delete_student(&mut self) -> io::Result<()> {
        let Some(name) = self.prompt_name()? else {
            return Ok(());
        };
        match self.store.delete(&name) {
            Ok(_) => {
                writeln!(self.output, "Student deleted")?;
                self.persist()
            }
            Err(e) => writeln!(self.output, "{}", e),
        }
    }

    fn view_statistics(&mut self) -> io::Result<()> {
        let Some(name) = self.prompt_name()? else {
            return Ok(());
        };
        let Some(student) = self.store.get(&name) else {
            return writeln!(self.output, "{}", StoreError::NotFound(name));
        };

        match GradeReport::for_student(student) {
            Ok(report) => display_report(&mut self.output, &report),
            Err(StatsError::NoGrades) => {
                writeln!(self.output, "No grades recorded for {}", name)
            }
        }
    }

    /// Save a full snapshot. Failures are reported and the in-memory store is
    /// left as is.
    fn persist(&mut self) -> io::Result<()> {
        match storage::save(&self.store, &self.config.data_file) {
            Ok(()) => writeln!(
                self.output,
                "Grades saved to {} successfully!",
                self.config.data_file.display()
            ),
            Err(e) => {
                log::error!("Failed to save {}: {}", self.config.data_file.display(), e);
                writeln!(self.output, "Error saving grades: {}", e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn session(temp_dir: &TempDir, store: GradeStore, input: &str) -> (GradeStore, String) {
        let config = Config::new(temp_dir.path().join("grades.json"));
        let mut cli = CLI::with_store(store, config, input.as_bytes(), Vec::new());
        cli.run().unwrap();

        let store = cli.store.clone();
        let output = String::from_utf8(cli.into_output()).unwrap();
        (store, output)
    }

    fn seeded() -> GradeStore {
        let mut store = GradeStore::new();
        let mut grades = Grades::new();
        grades.insert("math".to_string(), 80.0);
        grades.insert("sci".to_string(), 90.0);
        store.add("alice", grades);
        store
    }

    #[test]
    fn test_add_student_saves_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let (store, output) = session(
            &temp_dir,
            GradeStore::new(),
            "1\nalice\nmath\n80\nsci\n90\ndone\n7\n",
        );

        let alice = store.get("alice").unwrap();
        assert_eq!(alice.grade("math"), Some(80.0));
        assert_eq!(alice.grade("sci"), Some(90.0));
        assert!(output.contains("Student added successfully!"));
        assert!(output.contains("Exiting...."));

        let on_disk = storage::load(&temp_dir.path().join("grades.json")).unwrap();
        assert_eq!(on_disk, store);
    }

    #[test]
    fn test_add_skips_invalid_grade_and_continues() {
        let temp_dir = TempDir::new().unwrap();
        let (store, output) = session(
            &temp_dir,
            GradeStore::new(),
            "1\nbob\nmath\neighty\nsci\n75\ndone\n7\n",
        );

        let bob = store.get("bob").unwrap();
        assert_eq!(bob.grade("math"), None);
        assert_eq!(bob.grade("sci"), Some(75.0));
        assert!(output.contains("Invalid grade: eighty"));
        assert!(output.contains("Enter grade for sci: "));
    }

    #[test]
    fn test_update_aborts_on_invalid_grade() {
        let temp_dir = TempDir::new().unwrap();
        let (store, output) = session(
            &temp_dir,
            seeded(),
            "4\nalice\nmath\n95\nsci\nbad\n7\n",
        );

        let alice = store.get("alice").unwrap();
        assert_eq!(alice.grade("math"), Some(95.0));
        assert_eq!(alice.grade("sci"), Some(90.0));
        assert!(output.contains("Grade updated"));
        assert!(output.contains("Invalid grade: bad"));

        // "7" went to the menu, not to a subject prompt
        assert!(!alice.grades.contains_key("7"));
        let on_disk = storage::load(&temp_dir.path().join("grades.json")).unwrap();
        assert_eq!(on_disk.get("alice").unwrap().grade("math"), Some(95.0));
    }

    #[test]
    fn test_update_unknown_student() {
        let temp_dir = TempDir::new().unwrap();
        let (store, output) = session(&temp_dir, seeded(), "4\nzoe\n7\n");

        assert!(output.contains("Student not found: zoe"));
        assert_eq!(store, seeded());
        assert!(!temp_dir.path().join("grades.json").exists());
    }

    #[test]
    fn test_delete_then_search() {
        let temp_dir = TempDir::new().unwrap();
        let (store, output) = session(&temp_dir, seeded(), "5\nalice\n3\nalice\n5\nalice\n7\n");

        assert!(store.get("alice").is_none());
        assert!(output.contains("Student deleted"));
        assert_eq!(output.matches("Student not found: alice").count(), 2);

        let content = fs::read_to_string(temp_dir.path().join("grades.json")).unwrap();
        assert_eq!(content.trim(), "{}");
    }

    #[test]
    fn test_view_all_and_search() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = seeded();
        store.add("bob", Grades::new());
        let (_, output) = session(&temp_dir, store, "2\n3\nalice\n7\n");

        let bob_at = output.find("Name : bob").unwrap();
        let alice_at = output.find("Name : alice").unwrap();
        assert!(alice_at < bob_at);
        assert_eq!(output.matches("  Subject: math, Grade: 80.00").count(), 2);

        // Read-only options never write the file
        assert!(!temp_dir.path().join("grades.json").exists());
    }

    #[test]
    fn test_view_statistics() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = seeded();
        store.add("empty", Grades::new());
        let (_, output) = session(&temp_dir, store, "6\nalice\n6\nempty\n7\n");

        assert!(output.contains("Average Grade: 85.00"));
        assert!(output.contains("Highest Grade: 90.00 in sci"));
        assert!(output.contains("Lowest Grade: 80.00 in math"));
        assert!(output.contains("Median Grade: 85.00"));
        assert!(output.contains("No grades recorded for empty"));
    }

    #[test]
    fn test_invalid_option_and_end_of_input() {
        let temp_dir = TempDir::new().unwrap();
        let (store, output) = session(&temp_dir, GradeStore::new(), "9\n");

        assert!(output.contains("Invalid option. Please choose a valid option."));
        assert!(output.ends_with("Exiting....\n"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_end_of_input_finishes_add() {
        let temp_dir = TempDir::new().unwrap();
        let (store, _) = session(&temp_dir, GradeStore::new(), "1\ncarol\nmath\n70\n");

        assert_eq!(store.get("carol").unwrap().grade("math"), Some(70.0));
    }

    #[test]
    fn test_save_failure_keeps_memory_state() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::new(temp_dir.path().join("missing").join("grades.json"));
        let input = "1\ndave\ndone\n7\n";
        let mut cli = CLI::with_store(GradeStore::new(), config, input.as_bytes(), Vec::new());
        cli.run().unwrap();

        assert!(cli.store.contains("dave"));
        let output = String::from_utf8(cli.into_output()).unwrap();
        assert!(output.contains("Error saving grades: IO error"));
        assert!(output.contains("Exiting...."));
    }

    #[test]
    fn test_load_on_start() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("grades.json");
        storage::save(&seeded(), &path).unwrap();

        let config = Config::new(&path).with_load_on_start(true);
        let cli = CLI::new(config, "".as_bytes(), Vec::new()).unwrap();
        assert_eq!(cli.store, seeded());

        let fresh = CLI::new(Config::new(&path), "".as_bytes(), Vec::new()).unwrap();
        assert!(fresh.store.is_empty());
    }
}
