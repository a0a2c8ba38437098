//! Per-stage concurrency limits.

use crate::errors::GenerateError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_READ: usize = 5;
pub const DEFAULT_MAX_GENERATE: usize = 5;
pub const DEFAULT_MAX_WRITE: usize = 5;
pub const DEFAULT_QUEUE_CAPACITY: usize = 64;

fn default_max_read() -> usize {
    DEFAULT_MAX_READ
}

fn default_max_generate() -> usize {
    DEFAULT_MAX_GENERATE
}

fn default_max_write() -> usize {
    DEFAULT_MAX_WRITE
}

fn default_queue_capacity() -> usize {
    DEFAULT_QUEUE_CAPACITY
}

/// Worker counts of the limited stages and the capacity of every inter-stage
/// queue. The split stage is sized by available CPUs and is not configurable.
///
/// ```rust
/// use testgen::config::StageLimits;
///
/// let limits = StageLimits::default().with_max_read(2);
/// assert_eq!(limits.max_read, 2);
/// assert!(limits.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StageLimits {
    /// Concurrent file reads (default: 5)
    #[serde(default = "default_max_read")]
    pub max_read: usize,

    /// Concurrent fixture syntheses (default: 5)
    #[serde(default = "default_max_generate")]
    pub max_generate: usize,

    /// Concurrent file writes (default: 5)
    #[serde(default = "default_max_write")]
    pub max_write: usize,

    /// Items buffered between two stages before the producer blocks
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
}

impl Default for StageLimits {
    fn default() -> Self {
        Self {
            max_read: DEFAULT_MAX_READ,
            max_generate: DEFAULT_MAX_GENERATE,
            max_write: DEFAULT_MAX_WRITE,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}

impl StageLimits {
    pub fn with_max_read(mut self, n: usize) -> Self {
        self.max_read = n;
        self
    }

    pub fn with_max_generate(mut self, n: usize) -> Self {
        self.max_generate = n;
        self
    }

    pub fn with_max_write(mut self, n: usize) -> Self {
        self.max_write = n;
        self
    }

    pub fn with_queue_capacity(mut self, n: usize) -> Self {
        self.queue_capacity = n;
        self
    }

    /// Apply command-line overrides; `None` keeps the current value.
    pub fn merge(
        self,
        max_read: Option<usize>,
        max_generate: Option<usize>,
        max_write: Option<usize>,
    ) -> Self {
        Self {
            max_read: max_read.unwrap_or(self.max_read),
            max_generate: max_generate.unwrap_or(self.max_generate),
            max_write: max_write.unwrap_or(self.max_write),
            queue_capacity: self.queue_capacity,
        }
    }

    /// Every limit must be at least 1.
    pub fn validate(&self) -> Result<(), GenerateError> {
        let knobs = [
            ("max_read", self.max_read),
            ("max_generate", self.max_generate),
            ("max_write", self.max_write),
            ("queue_capacity", self.queue_capacity),
        ];
        match knobs.iter().find(|(_, value)| *value == 0) {
            Some((name, _)) => Err(GenerateError::config(format!(
                "{} must be at least 1",
                name
            ))),
            None => Ok(()),
        }
    }
}

/// Worker count of the split stage: one per available CPU.
pub fn split_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let limits = StageLimits::default();
        assert_eq!(limits.max_read, 5);
        assert_eq!(limits.max_generate, 5);
        assert_eq!(limits.max_write, 5);
        assert!(limits.validate().is_ok());
    }

    #[test]
    fn test_zero_limit_rejected() {
        let err = StageLimits::default().with_max_write(0).validate().unwrap_err();
        assert_eq!(err.category(), "Config");
        assert!(err.message().contains("max_write"));
    }

    #[test]
    fn test_merge_overrides_only_given_values() {
        let limits = StageLimits::default()
            .with_max_generate(3)
            .merge(Some(1), None, Some(8));
        assert_eq!(limits.max_read, 1);
        assert_eq!(limits.max_generate, 3);
        assert_eq!(limits.max_write, 8);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let limits: StageLimits = toml::from_str("max_read = 2").unwrap();
        assert_eq!(limits, StageLimits::default().with_max_read(2));
    }

    #[test]
    fn test_split_workers_positive() {
        assert!(split_workers() >= 1);
    }
}
