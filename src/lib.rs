pub mod cli;
pub mod config;
pub mod stats;
pub mod storage;

pub use cli::CLI;
pub use config::Config;
pub use stats::{GradeReport, StatsError};
pub use storage::{GradeStore, Grades, StoreError, Student};

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn run_session(config: Config, input: &str) -> (GradeStore, String) {
        let mut cli = CLI::new(config, input.as_bytes(), Vec::new()).unwrap();
        cli.run().unwrap();
        let store = cli.store.clone();
        (store, String::from_utf8(cli.into_output()).unwrap())
    }

    #[test]
    fn test_roster_survives_restart() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::new(temp_dir.path().join("grades.json"));

        // First session: build the roster
        let (first, _) = run_session(
            config.clone(),
            "1\nalice\nmath\n80\nsci\n90\ndone\n1\nbob\nhistory\n0\ndone\n4\nbob\nart\n-3\ndone\n7\n",
        );
        assert_eq!(first.len(), 2);

        // Second session with loading enabled picks up where the first stopped
        let (second, output) = run_session(
            config.clone().with_load_on_start(true),
            "6\nbob\n5\nalice\n7\n",
        );
        assert!(output.contains("Highest Grade: 0.00 in history"));
        assert!(output.contains("Lowest Grade: -3.00 in art"));
        assert!(!second.contains("alice"));

        // Third session sees the delete from the second
        let (third, _) = run_session(config.with_load_on_start(true), "7\n");
        assert_eq!(third.all().len(), 1);
        assert_eq!(third.get("bob").unwrap().grade("art"), Some(-3.0));
    }
}
