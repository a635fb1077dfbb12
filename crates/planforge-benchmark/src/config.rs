//! Comparison configuration.

use std::path::{Path, PathBuf};

use planforge_config::ReportConfig;

/// Names the comparison and its report sinks.
///
/// # Example
///
/// ```
/// use planforge_benchmark::ComparisonConfig;
///
/// let config = ComparisonConfig::new("gripper-4")
///     .with_csv_output("results.csv")
///     .with_markdown_output("report.md");
///
/// assert_eq!(config.name(), "gripper-4");
/// assert_eq!(config.csv_output_path().unwrap().to_str(), Some("results.csv"));
/// ```
#[derive(Debug, Clone)]
pub struct ComparisonConfig {
    name: String,
    csv_output_path: Option<PathBuf>,
    markdown_output_path: Option<PathBuf>,
}

impl ComparisonConfig {
    /// Creates a configuration without report sinks.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            csv_output_path: None,
            markdown_output_path: None,
        }
    }

    /// Creates a configuration with the sinks of a planner report section.
    pub fn from_report_config(name: impl Into<String>, report: &ReportConfig) -> Self {
        Self {
            name: name.into(),
            csv_output_path: report.csv_output.clone(),
            markdown_output_path: report.markdown_output.clone(),
        }
    }

    pub fn with_csv_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.csv_output_path = Some(path.into());
        self
    }

    pub fn with_markdown_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.markdown_output_path = Some(path.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn csv_output_path(&self) -> Option<&Path> {
        self.csv_output_path.as_deref()
    }

    pub fn markdown_output_path(&self) -> Option<&Path> {
        self.markdown_output_path.as_deref()
    }
}
