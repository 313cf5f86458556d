//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use crate::{golden_dir, regout_dir};
use alphatrim_core::PixelBuffer;
use alphatrim_io::ImageFormat;
use std::fs;
use std::path::Path;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Generate golden files
    Generate,
    /// Compare with golden files (default)
    #[default]
    Compare,
    /// Display mode - run without comparison
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("REGTEST_MODE").unwrap_or_default())
    }

    /// Parse mode from a string; anything unrecognised is `Compare`
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "generate" => Self::Generate,
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the test name, the index of the current check, the mode and
/// every failure recorded so far. Checks never panic; call
/// [`RegParams::cleanup`] at the end and assert on its result.
pub struct RegParams {
    /// Name of the test (e.g., "scan")
    pub test_name: String,
    /// Current check index (incremented before each check)
    index: usize,
    /// Test mode (generate, compare, or display)
    pub mode: RegTestMode,
    /// Recorded failures
    failures: Vec<TestError>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode is taken from the `REGTEST_MODE` environment variable.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            failures: Vec::new(),
        }
    }

    /// Get the current check index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, err: TestError) {
        eprintln!("Failure in {}_reg: {}", self.test_name, err);
        self.failures.push(err);
    }

    /// Compare two numeric values
    ///
    /// Returns `true` if `actual` is within `delta` of `expected`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        if (expected - actual).abs() > delta {
            self.fail(TestError::ValueMismatch {
                index: self.index,
                expected,
                actual,
                delta,
            });
            false
        } else {
            true
        }
    }

    /// Compare two buffers for exact equality
    ///
    /// On mismatch the size difference or the first differing pixel is
    /// printed.
    pub fn compare_buffers(&mut self, expected: &PixelBuffer, actual: &PixelBuffer) -> bool {
        self.index += 1;

        match expected.compare(actual) {
            Ok(diff) if diff.is_equal() => true,
            Ok(diff) => {
                if let Some((pos, a, b)) = diff.first {
                    eprintln!(
                        "  {} pixels differ; first at ({}, {}): {:?} vs {:?}",
                        diff.n_diff, pos.row, pos.col, a, b
                    );
                }
                self.fail(TestError::BufferMismatch { index: self.index });
                false
            }
            Err(e) => {
                eprintln!("  {}", e);
                self.fail(TestError::BufferMismatch { index: self.index });
                false
            }
        }
    }

    /// Compare two byte strings
    pub fn compare_strings(&mut self, expected: &[u8], actual: &[u8]) -> bool {
        self.index += 1;
        if expected != actual {
            eprintln!("  sizes: {} vs {}", expected.len(), actual.len());
            self.fail(TestError::BufferMismatch { index: self.index });
            false
        } else {
            true
        }
    }

    /// Write a buffer to the regout directory and check it against its
    /// golden file
    ///
    /// # Errors
    ///
    /// Returns an error if the directories cannot be created or the image
    /// cannot be written.
    pub fn write_buffer_and_check(&mut self, buf: &PixelBuffer, format: ImageFormat) -> TestResult<()> {
        self.index += 1;
        ensure_dir(&regout_dir())?;

        let local_path = format!(
            "{}/{}.{:02}.{}",
            regout_dir(),
            self.test_name,
            self.index,
            format.extension()
        );

        alphatrim_io::write_image(buf, &local_path, format).map_err(|e| TestError::ImageWrite {
            path: local_path.clone(),
            message: e.to_string(),
        })?;

        self.check_file(&local_path)
    }

    /// Check a file against its golden counterpart
    ///
    /// In generate mode, copies the file to golden.
    /// In compare mode, compares with golden file.
    /// In display mode, does nothing.
    fn check_file(&mut self, local_path: &str) -> TestResult<()> {
        let ext = Path::new(local_path)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");

        let golden_path = format!(
            "{}/{}_golden.{:02}.{}",
            golden_dir(),
            self.test_name,
            self.index,
            ext
        );

        match self.mode {
            RegTestMode::Generate => {
                ensure_dir(&golden_dir())?;
                fs::copy(local_path, &golden_path)?;
                eprintln!("Generated: {}", golden_path);
            }
            RegTestMode::Compare => {
                if !Path::new(&golden_path).exists() {
                    self.fail(TestError::GoldenNotFound { path: golden_path });
                    return Ok(());
                }

                let local_data = fs::read(local_path)?;
                let golden_data = fs::read(&golden_path)?;

                // Encoders may differ byte-wise; fall back to pixels
                if local_data != golden_data && !same_pixels(local_path, &golden_path) {
                    self.fail(TestError::FileMismatch {
                        index: self.index,
                        path: local_path.to_string(),
                    });
                }
            }
            RegTestMode::Display => {}
        }

        Ok(())
    }

    /// Clean up and report results
    ///
    /// Returns `true` if every check passed.
    pub fn cleanup(self) -> bool {
        if self.failures.is_empty() {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.failures.is_empty()
    }

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Get list of failures
    pub fn failures(&self) -> &[TestError] {
        &self.failures
    }
}

fn ensure_dir(path: &str) -> TestResult<()> {
    fs::create_dir_all(path).map_err(|e| TestError::DirectoryCreate {
        path: path.to_string(),
        message: e.to_string(),
    })
}

fn same_pixels(path1: &str, path2: &str) -> bool {
    match (alphatrim_io::read_image(path1), alphatrim_io::read_image(path2)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
