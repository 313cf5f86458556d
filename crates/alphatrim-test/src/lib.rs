//! alphatrim-test - Regression test framework for alphatrim
//!
//! Supports three modes, selected by the `REGTEST_MODE` environment
//! variable:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files (default)
//! - **Display**: Run checks without touching golden files
//!
//! # Usage
//!
//! ```ignore
//! use alphatrim_test::{RegParams, fixtures};
//!
//! let mut rp = RegParams::new("trim");
//! let buf = fixtures::with_opaque_pixels(5, 5, &[(2, 3)]);
//! rp.compare_values(1.0, trimmed.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
pub mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use alphatrim_core::PixelBuffer;

/// Load an image from the test data directory
///
/// # Arguments
///
/// * `name` - Image filename (e.g., "sprite.png")
pub fn load_test_image(name: &str) -> TestResult<PixelBuffer> {
    let path = test_data_path(name);
    alphatrim_io::read_image(&path).map_err(|e| TestError::ImageLoad {
        path: path.clone(),
        message: e.to_string(),
    })
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // alphatrim-test is at crates/alphatrim-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to a test data file
pub fn test_data_path(name: &str) -> String {
    format!("{}/tests/data/images/{}", workspace_root(), name)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
