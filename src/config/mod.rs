//! Configuration for the generation pipeline.
//!
//! There are no command-line flags or configuration files: every parameter is
//! a compiled-in default. The `with_*` builders exist so tests can point the
//! pipeline at other seeds, sizes and directories.

use std::path::{Path, PathBuf};

/// Default number of generated records
pub const DEFAULT_RECORD_COUNT: usize = 100;

/// Default seed for the pseudo-random generator
pub const DEFAULT_SEED: u64 = 42;

/// Default name of the CSV file written to the working directory
pub const DEFAULT_OUTPUT_FILE: &str = "Hybrid_Model.csv";

/// Configuration for the record generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of records to generate
    pub record_count: usize,
    /// Seed for the pseudo-random generator
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            record_count: DEFAULT_RECORD_COUNT,
            seed: DEFAULT_SEED,
        }
    }
}

impl GeneratorConfig {
    /// Set the number of records
    #[must_use]
    pub const fn with_record_count(mut self, record_count: usize) -> Self {
        self.record_count = record_count;
        self
    }

    /// Set the seed
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Configuration for chart rendering
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Directory the chart files are written to
    pub output_dir: PathBuf,
    /// Chart width in pixels
    pub width: u32,
    /// Chart height in pixels
    pub height: u32,
    /// File name of the success rate chart
    pub success_rate_file: String,
    /// File name of the confidence vs explanation chart
    pub confidence_file: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            // 7x4 inches at 100 dpi
            width: 700,
            height: 400,
            success_rate_file: "model_success_rate.svg".to_string(),
            confidence_file: "model_confidence_vs_explanation.svg".to_string(),
        }
    }
}

impl ChartConfig {
    /// Set the output directory
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Full path of the success rate chart
    #[must_use]
    pub fn success_rate_path(&self) -> PathBuf {
        self.output_dir.join(&self.success_rate_file)
    }

    /// Full path of the confidence vs explanation chart
    #[must_use]
    pub fn confidence_path(&self) -> PathBuf {
        self.output_dir.join(&self.confidence_file)
    }
}

/// Top-level configuration for one pipeline run
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Generator settings
    pub generator: GeneratorConfig,
    /// Path of the CSV output file
    pub output_path: PathBuf,
    /// Chart settings
    pub chart: ChartConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig::default(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            chart: ChartConfig::default(),
        }
    }
}

impl AppConfig {
    /// Write every output (CSV and charts) into `dir` instead of the working directory
    #[must_use]
    pub fn in_directory(dir: &Path) -> Self {
        Self {
            output_path: dir.join(DEFAULT_OUTPUT_FILE),
            chart: ChartConfig::default().with_output_dir(dir),
            ..Self::default()
        }
    }

    /// Replace the generator settings
    #[must_use]
    pub const fn with_generator(mut self, generator: GeneratorConfig) -> Self {
        self.generator = generator;
        self
    }

    /// File name of the CSV output, used in the confirmation message
    #[must_use]
    pub fn output_file_name(&self) -> String {
        self.output_path
            .file_name()
            .map_or_else(|| self.output_path.display().to_string(), |name| {
                name.to_string_lossy().into_owned()
            })
    }
}
