#[cfg(test)]
mod tests {
    use crate::executor::{Executable, Executor, RunError};
    use crate::fragment::Slot;
    use crate::statement::Statement;
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct Recorder {
        seen: Vec<String>,
        fail: bool,
    }

    impl Executor for Recorder {
        type Rows = usize;
        type Error = String;

        fn execute(&mut self, statement: &str) -> Result<usize, String> {
            if self.fail {
                return Err("connection closed".to_string());
            }
            self.seen.push(statement.to_string());
            Ok(self.seen.len())
        }
    }

    #[test]
    fn run_statement_builder() {
        let mut stmt = Statement::new();
        stmt.keyword("SHOW ROLES").fragment(Slot::new("LIKE %%", None::<&str>));

        let mut exec = Recorder::default();
        assert_eq!(stmt.run_on(&mut exec).unwrap(), 1);
        assert_eq!("SELECT 1".run_on(&mut exec).unwrap(), 2);
        assert_eq!(String::from("SELECT 2").run_on(&mut exec).unwrap(), 3);
        assert_eq!(exec.seen, vec!["SHOW ROLES", "SELECT 1", "SELECT 2"]);
    }

    #[test]
    fn render_errors_skip_execution() {
        let mut stmt = Statement::new();
        stmt.keyword("SHOW GRANTS TO").fragment(Slot::new("ROLE %%", 7_i64));

        let mut exec = Recorder::default();
        let err = stmt.run_on(&mut exec).unwrap_err();
        assert!(matches!(err, RunError::Statement(_)));
        assert!(exec.seen.is_empty());
    }

    #[test]
    fn execution_errors_are_wrapped() {
        let mut exec = Recorder {
            fail: true,
            ..Default::default()
        };
        let err = "SHOW USERS".run_on(&mut exec).unwrap_err();
        assert_eq!(err.to_string(), "statement execution failed: connection closed");
    }
}
