use super::parallel::StageLimits;
use crate::errors::GenerateError;
use crate::io::{SourceFilter, SOURCE_EXTENSION};
use crate::synth::{TestFramework, DEFAULT_EXTENSION};
use serde::{Deserialize, Serialize};

/// Contents of `.testgen.toml`.
///
/// ```toml
/// [parallelism]
/// max_read = 5
/// max_generate = 5
/// max_write = 5
///
/// [source]
/// extension = "cs"
/// recursive = false
/// ignore = ["**/obj/**"]
///
/// [output]
/// framework = "nunit"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub parallelism: StageLimits,

    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), GenerateError> {
        self.parallelism.validate()?;
        if self.source.extension.trim().is_empty() {
            return Err(GenerateError::config("source.extension must not be empty"));
        }
        if self.output.extension.trim().is_empty() {
            return Err(GenerateError::config("output.extension must not be empty"));
        }
        self.source_filter().validate()
    }

    pub fn source_filter(&self) -> SourceFilter {
        SourceFilter::default()
            .with_extension(self.source.extension.trim_start_matches('.'))
            .with_recursive(self.source.recursive)
            .with_ignore_patterns(self.source.ignore.clone())
    }
}

fn default_source_extension() -> String {
    SOURCE_EXTENSION.to_string()
}

fn default_output_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceConfig {
    /// Extension of source files, without the dot
    #[serde(default = "default_source_extension")]
    pub extension: String,

    /// Descend into subdirectories
    #[serde(default)]
    pub recursive: bool,

    /// Glob patterns of paths to skip
    #[serde(default)]
    pub ignore: Vec<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            extension: default_source_extension(),
            recursive: false,
            ignore: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub framework: TestFramework,

    /// Extension of generated files, without the dot
    #[serde(default = "default_output_extension")]
    pub extension: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            framework: TestFramework::default(),
            extension: default_output_extension(),
        }
    }
}
