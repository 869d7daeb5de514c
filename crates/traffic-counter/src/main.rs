mod bootstrap;
mod report;

use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};
use traffic_core::settings::{OutputFormat, Settings};
use traffic_core::TrafficError;
use traffic_data::analysis::analyze_file;

fn main() -> Result<ExitCode> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("Traffic Counter v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::debug!(
        "File: {}, top: {}, window: {}",
        settings.file.display(),
        settings.top,
        settings.window
    );

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let code = run(&settings, &mut stdout.lock(), &mut stderr.lock())?;
    Ok(ExitCode::from(code))
}

/// Analyse the configured file and write the report; returns the exit status.
///
/// Failures to find or read the input, and bad file content, are reported on
/// `err` with status 1. Anything else propagates.
fn run<O: Write, E: Write>(settings: &Settings, out: &mut O, err: &mut E) -> Result<u8> {
    let report = match analyze_file(&settings.file, settings.top, settings.window_size()) {
        Ok(report) => report,
        Err(e) if e.is_source_error() => {
            tracing::debug!("Source error: {:?}", e);
            writeln!(err, "Error: {}", e)?;
            return Ok(1);
        }
        Err(e @ (TrafficError::Parse { .. } | TrafficError::NoRecords(_))) => {
            writeln!(err, "Error reading file: {}", e)?;
            return Ok(1);
        }
        Err(e) => {
            return Err(e).with_context(|| {
                format!("Failed to analyse {}", settings.file.display())
            })
        }
    };

    match settings.format {
        OutputFormat::Text => report::write_text(out, &report)?,
        OutputFormat::Json => report::write_json(out, &report)?,
    }

    Ok(0)
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    const SAMPLE_DATA: &str = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../../data/traffic_data_sample.txt"
    ));

    struct Outcome {
        code: u8,
        stdout: Vec<String>,
        stderr: String,
    }

    fn run_cli(file: &Path, extra: &[&str]) -> Outcome {
        let mut args = vec![
            "traffic-counter".to_string(),
            file.to_string_lossy().to_string(),
        ];
        args.extend(extra.iter().map(|a| a.to_string()));
        let settings = Settings::try_load_from(args).expect("valid args");

        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(&settings, &mut out, &mut err).expect("run");

        Outcome {
            code,
            stdout: String::from_utf8(out)
                .unwrap()
                .lines()
                .map(str::to_string)
                .collect(),
            stderr: String::from_utf8(err).unwrap(),
        }
    }

    // ── Success paths ─────────────────────────────────────────────────────────

    #[test]
    fn test_cli_outputs_expected_sections() {
        let dir = TempDir::new().expect("tempdir");
        let sample = dir.path().join("sample.txt");
        std::fs::write(
            &sample,
            "2021-12-01T05:00:00 5\n2021-12-01T05:30:00 12\n2021-12-01T06:00:00 14",
        )
        .unwrap();

        let outcome = run_cli(&sample, &["--window", "2", "--top", "2"]);

        assert_eq!(outcome.code, 0);
        assert_eq!(outcome.stdout[0], "Total 31");
        assert_eq!(outcome.stdout[1], "2021-12-01 31");
        assert_eq!(outcome.stdout[2], "Top half hours:");
        assert_eq!(outcome.stdout[3], "2021-12-01T06:00:00 14");
        assert_eq!(outcome.stdout[4], "2021-12-01T05:30:00 12");
        assert!(outcome.stdout.iter().any(|l| l == "Lowest traffic window:"));
        assert!(outcome.stderr.is_empty());
    }

    #[test]
    fn test_cli_full_sample_with_defaults() {
        let dir = TempDir::new().expect("tempdir");
        let sample = dir.path().join("sample.txt");
        std::fs::write(&sample, SAMPLE_DATA).unwrap();

        let outcome = run_cli(&sample, &[]);

        assert_eq!(outcome.code, 0);
        assert_eq!(
            outcome.stdout,
            vec![
                "Total 398",
                "2021-12-01 179",
                "2021-12-05 81",
                "2021-12-08 134",
                "2021-12-09 4",
                "Top half hours:",
                "2021-12-01T07:30:00 46",
                "2021-12-01T08:00:00 42",
                "2021-12-08T18:00:00 33",
                "Lowest traffic window:",
                "Start 2021-12-01T15:00:00 Total 20",
                "2021-12-01T15:00:00 9",
                "2021-12-01T15:30:00 11",
                "2021-12-01T23:30:00 0",
            ]
        );
    }

    #[test]
    fn test_cli_reports_missing_window() {
        let dir = TempDir::new().expect("tempdir");
        let sample = dir.path().join("short.txt");
        std::fs::write(&sample, "2021-12-01T05:00:00 10\n2021-12-01T05:30:00 5\n").unwrap();

        let outcome = run_cli(&sample, &["--window", "3"]);

        assert_eq!(outcome.code, 0);
        assert_eq!(
            outcome.stdout.last().map(String::as_str),
            Some("No low-traffic window available")
        );
    }

    #[test]
    fn test_cli_json_format() {
        let dir = TempDir::new().expect("tempdir");
        let sample = dir.path().join("sample.txt");
        std::fs::write(&sample, SAMPLE_DATA).unwrap();

        let outcome = run_cli(&sample, &["--format", "json"]);

        assert_eq!(outcome.code, 0);
        let value: serde_json::Value =
            serde_json::from_str(&outcome.stdout.join("\n")).expect("json");
        assert_eq!(value["total"], 398);
        assert_eq!(value["busiest"].as_array().unwrap().len(), 3);
        assert_eq!(value["lowest_window"]["total"], 20);
    }

    #[test]
    fn test_cli_totals_beyond_u64() {
        let dir = TempDir::new().expect("tempdir");
        let sample = dir.path().join("huge.txt");
        std::fs::write(
            &sample,
            "2021-12-01T05:00:00 18446744073709551615\n2021-12-01T05:30:00 1\n",
        )
        .unwrap();

        let outcome = run_cli(&sample, &["--window", "2", "--top", "1"]);

        assert_eq!(outcome.code, 0);
        assert_eq!(outcome.stdout[0], "Total 18446744073709551616");
        assert_eq!(outcome.stdout[1], "2021-12-01 18446744073709551616");
        assert_eq!(outcome.stdout[3], "2021-12-01T05:00:00 18446744073709551615");
        assert_eq!(
            outcome.stdout[5],
            "Start 2021-12-01T05:00:00 Total 18446744073709551616"
        );
    }

    // ── Failure paths ─────────────────────────────────────────────────────────

    #[test]
    fn test_cli_missing_file_exits_with_one() {
        let dir = TempDir::new().expect("tempdir");
        let missing = dir.path().join("nope.txt");

        let outcome = run_cli(&missing, &[]);

        assert_eq!(outcome.code, 1);
        assert!(outcome.stdout.is_empty());
        assert!(outcome.stderr.contains("File not found"));
        assert!(outcome.stderr.contains(&*missing.to_string_lossy()));
    }

    #[test]
    fn test_cli_directory_exits_with_one() {
        let dir = TempDir::new().expect("tempdir");

        let outcome = run_cli(dir.path(), &[]);

        assert_eq!(outcome.code, 1);
        assert!(outcome.stderr.contains("Path is not a file"));
    }

    #[test]
    fn test_cli_malformed_content_exits_with_one() {
        let dir = TempDir::new().expect("tempdir");
        let sample = dir.path().join("bad.txt");
        std::fs::write(&sample, "2021-12-01T05:00:00 5\nnot a record\n").unwrap();

        let outcome = run_cli(&sample, &[]);

        assert_eq!(outcome.code, 1);
        assert!(outcome.stdout.is_empty());
        assert!(outcome.stderr.starts_with("Error reading file: Parse error at line 2"));
    }
}
