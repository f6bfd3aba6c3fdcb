//! End-to-end integration tests
//!
//! These tests validate the complete script pipeline using predefined CSV test
//! fixtures. Each test:
//! 1. Reads input.csv from a fixture directory
//! 2. Loads rules.csv from the same directory if present, the built-in rules otherwise
//! 3. Runs the script through the command invoker
//! 4. Compares the wallet CSV with expected.csv
//!
//! Test fixtures are located in tests/fixtures/ and cover:
//! - Happy path scenarios
//! - Rule rejections (overdraft, withdrawal caps)
//! - Transfers, their compensation and their undo
//! - Undo/redo history
//! - Categories and wallet lifecycle
//! - Edge cases (rounding, malformed rows, custom rule files)

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_wallet_ledger::cli::OutputFormat;
    use rust_wallet_ledger::io::load_rule_table;
    use rust_wallet_ledger::rules::RuleTable;
    use rust_wallet_ledger::runner::ScriptRunner;
    use std::fs;
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;

    /// Run a test fixture by processing input.csv and comparing with expected.csv
    ///
    /// # Arguments
    ///
    /// * `fixture_name` - Name of the fixture directory (e.g., "happy_path")
    ///
    /// # Panics
    ///
    /// Panics if:
    /// - Input, rule or expected files cannot be read
    /// - Output doesn't match expected
    fn run_test_fixture(fixture_name: &str) {
        let fixture_dir = format!("tests/fixtures/{}", fixture_name);
        let input_path = format!("{}/input.csv", fixture_dir);
        let rules_path = format!("{}/rules.csv", fixture_dir);
        let expected_path = format!("{}/expected.csv", fixture_dir);

        assert!(
            Path::new(&input_path).exists(),
            "Input file not found: {}",
            input_path
        );
        assert!(
            Path::new(&expected_path).exists(),
            "Expected file not found: {}",
            expected_path
        );

        let table = if Path::new(&rules_path).exists() {
            load_rule_table(Path::new(&rules_path))
                .unwrap_or_else(|e| panic!("Failed to load rules {}: {}", rules_path, e))
        } else {
            RuleTable::default()
        };
        let runner = ScriptRunner::new(table, OutputFormat::Csv);

        let mut temp_output = NamedTempFile::new().expect("Failed to create temp file");

        runner
            .process(Path::new(&input_path), &mut temp_output)
            .unwrap_or_else(|e| panic!("Failed to run script: {}", e));

        temp_output.flush().expect("Failed to flush temp file");

        let actual_output = fs::read_to_string(temp_output.path())
            .unwrap_or_else(|e| panic!("Failed to read temp output file: {}", e));

        let expected_output = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path, e));

        assert_eq!(
            actual_output, expected_output,
            "\n\nOutput mismatch for fixture: {}\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture_name, actual_output, expected_output
        );
    }

    #[rstest]
    #[case("happy_path")]
    #[case("insufficient_funds")]
    #[case("transfer_and_undo")]
    #[case("transfer_compensation")]
    #[case("undo_redo_history")]
    #[case("precision_rounding")]
    #[case("categories")]
    #[case("wallet_lifecycle")]
    #[case("malformed_data")]
    #[case("custom_rules")]
    fn test_fixtures(#[case] fixture: &str) {
        run_test_fixture(fixture);
    }

    #[test]
    fn test_report_output() {
        let runner = ScriptRunner::new(RuleTable::default(), OutputFormat::Report);
        let mut output = Vec::new();

        runner
            .process(Path::new("tests/fixtures/transfer_and_undo/input.csv"), &mut output)
            .unwrap();

        let report = String::from_utf8(output).unwrap();
        assert!(report.starts_with("wallet a [checking] balance 250.00 EUR, 2 transaction(s)\n"));
        assert!(report.contains("wallet b [checking] balance 350.00 EUR, 2 transaction(s)\n"));
    }
}
