//! Test environment builder for isolated cvs-decode runs.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Result of running a cvs-decode CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// NDJSON events printed on stdout
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| serde_json::from_str(line).expect("stdout line is not JSON"))
            .collect()
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated working tree plus a private spool directory
pub struct TestEnv {
    pub work_dir: TempDir,
    pub spool_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            work_dir: TempDir::new().expect("create work dir"),
            spool_dir: TempDir::new().expect("create spool dir"),
        }
    }

    pub fn work_path(&self, relative: &str) -> PathBuf {
        self.work_dir.path().join(relative)
    }

    /// Create a working file with content
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(&path, content).expect("write file");
        path
    }

    /// Store a transcript outside the working tree
    pub fn write_transcript(&self, content: &str) -> PathBuf {
        let path = self.spool_dir.path().join("transcript.log");
        fs::write(&path, content).expect("write transcript");
        path
    }

    pub fn read_entries(&self, dir: &str) -> String {
        fs::read_to_string(self.work_path(dir).join("CVS/Entries")).unwrap_or_default()
    }

    /// Number of annotate spools left in the spool directory
    pub fn spool_file_count(&self) -> usize {
        fs::read_dir(self.spool_dir.path())
            .map(|entries| {
                entries
                    .filter_map(Result::ok)
                    .filter(|e| e.file_name().to_string_lossy().ends_with(".spool"))
                    .count()
            })
            .unwrap_or(0)
    }

    /// Run cvs-decode with the working tree as `--local-dir`
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(self.work_dir.path(), args)
    }

    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let output = Command::new(env!("CARGO_BIN_EXE_cvs-decode"))
            .current_dir(cwd)
            .args(args)
            .arg("--local-dir")
            .arg(self.work_dir.path())
            .env("CVS_DECODE_TEMP_DIR", self.spool_dir.path())
            .env_remove("CVS_DECODE_LOCAL_DIR")
            .env_remove("CVS_DECODE_LOG")
            .env("XDG_CONFIG_HOME", self.spool_dir.path())
            .output()
            .expect("Failed to execute cvs-decode");

        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
