//! The end-to-end conversion pipeline.
//!
//! Stages run strictly in order; the first failure aborts the run. The
//! output file is only touched in the final stage, so an aborted run
//! leaves nothing behind.
use crate::{files, parse, paths};
use anyhow::Result;
use std::path::PathBuf;

/// Input path used when none is configured, relative to the base directory.
pub const DEFAULT_INPUT: &str = "../orders.csv";
/// Output path used when none is configured, relative to the base directory.
pub const DEFAULT_OUTPUT: &str = "../orders.json";

/// Paths for one conversion run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory relative paths resolve against; `None` means the
    /// executable's own directory.
    pub base_dir: Option<PathBuf>,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_dir: None,
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

/// What a completed run produced.
#[derive(Debug)]
pub struct Summary {
    pub record_count: usize,
    pub output: PathBuf,
}

/// Run one conversion: read → split → map → write.
pub fn run(config: &Config) -> Result<Summary> {
    let base_dir = match &config.base_dir {
        Some(dir) => dir.clone(),
        None => paths::default_base_dir()?,
    };
    let input = paths::resolve(&base_dir, &config.input);
    let output = paths::resolve(&base_dir, &config.output);

    let text = files::read_text(&input)?;
    tracing::debug!(path = %input.display(), bytes = text.len(), "read input");

    let lines = parse::split_lines(&text);
    let records = parse::map_rows(&lines)?;
    tracing::debug!(rows = records.len(), "mapped rows");

    files::write_json(&output, &records)?;
    tracing::debug!(path = %output.display(), "wrote output");

    Ok(Summary {
        record_count: records.len(),
        output,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn config_in(base: &Path) -> Config {
        Config {
            base_dir: Some(base.to_path_buf()),
            input: PathBuf::from("orders.csv"),
            output: PathBuf::from("orders.json"),
        }
    }

    #[test]
    fn run_converts_and_reports_summary() {
        let temp = TempDir::new().expect("create temp dir");
        std::fs::write(temp.path().join("orders.csv"), "id,name\n1,Alice\n2,Bob\n")
            .expect("write input");

        let summary = run(&config_in(temp.path())).expect("run pipeline");
        assert_eq!(summary.record_count, 2);
        assert_eq!(summary.output, temp.path().join("orders.json"));

        let json = std::fs::read_to_string(&summary.output).expect("read output");
        let parsed: serde_json::Value = serde_json::from_str(&json).expect("parse output");
        assert_eq!(
            parsed,
            serde_json::json!([
                {"id": 1, "name": "Alice"},
                {"id": 2, "name": "Bob"}
            ])
        );
    }

    #[test]
    fn run_aborts_when_output_exists() {
        let temp = TempDir::new().expect("create temp dir");
        std::fs::write(temp.path().join("orders.csv"), "id\n1\n").expect("write input");
        std::fs::write(temp.path().join("orders.json"), "keep").expect("seed output");

        let err = run(&config_in(temp.path())).expect_err("existing output");
        assert_eq!(err.root_cause().to_string(), "File already exists");
        assert_eq!(
            std::fs::read_to_string(temp.path().join("orders.json")).expect("read output"),
            "keep"
        );
    }

    #[test]
    fn run_aborts_when_input_missing_without_touching_output() {
        let temp = TempDir::new().expect("create temp dir");

        let err = run(&config_in(temp.path())).expect_err("missing input");
        assert_eq!(err.root_cause().to_string(), "File does not exist");
        assert!(!temp.path().join("orders.json").exists());
    }

    #[test]
    fn run_writes_an_empty_array_for_header_only_input() {
        let temp = TempDir::new().expect("create temp dir");
        std::fs::write(temp.path().join("orders.csv"), "id,name\n").expect("write input");

        let summary = run(&config_in(temp.path())).expect("run pipeline");
        assert_eq!(summary.record_count, 0);
        assert_eq!(
            std::fs::read_to_string(summary.output).expect("read output"),
            "[]"
        );
    }

    #[test]
    fn default_config_preserves_original_paths() {
        let config = Config::default();
        assert_eq!(config.input, PathBuf::from(DEFAULT_INPUT));
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT));
        assert!(config.base_dir.is_none());
    }
}
