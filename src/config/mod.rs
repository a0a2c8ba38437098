//! `.testgen.toml` configuration.
//!
//! Precedence, highest first: command-line flags, the nearest `.testgen.toml`
//! in the current directory or one of its ancestors, built-in defaults.

pub mod core;
pub mod loader;
pub mod parallel;

pub use self::core::{GeneratorConfig, OutputConfig, SourceConfig};
pub use loader::{
    directory_ancestors, load_config, load_config_file, load_config_from, parse_config,
    CONFIG_FILE_NAME,
};
pub use parallel::{split_workers, StageLimits};
