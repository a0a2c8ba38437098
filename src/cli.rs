use crate::config::{load_config, GeneratorConfig};
use crate::errors::GenerateError;
use crate::pipeline::{GenerationPipeline, GenerationSummary};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "testgen")]
#[command(about = "Generate unit test skeletons for C# classes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory containing the C# source files
    pub source: PathBuf,

    /// Existing directory receiving one <ClassName>Test.cs per public class
    pub destination: PathBuf,

    /// Maximum number of files read concurrently [default: 5]
    #[arg(long, env = "TESTGEN_MAX_READ", value_parser = parse_limit)]
    pub max_read: Option<usize>,

    /// Maximum number of fixtures synthesized concurrently [default: 5]
    #[arg(long, env = "TESTGEN_MAX_GENERATE", value_parser = parse_limit)]
    pub max_generate: Option<usize>,

    /// Maximum number of files written concurrently [default: 5]
    #[arg(long, env = "TESTGEN_MAX_WRITE", value_parser = parse_limit)]
    pub max_write: Option<usize>,
}

fn parse_limit(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

impl Cli {
    /// Layer the command-line limits over `config`.
    pub fn apply_to(&self, mut config: GeneratorConfig) -> GeneratorConfig {
        config.parallelism =
            config
                .parallelism
                .merge(self.max_read, self.max_generate, self.max_write);
        config
    }
}

/// Load configuration, apply flags and run the pipeline.
pub fn run(cli: &Cli) -> Result<GenerationSummary, GenerateError> {
    let config = cli.apply_to(load_config()?);
    tracing::debug!(?config, "Effective configuration");
    GenerationPipeline::from_config(&config).generate(&cli.source, &cli.destination)
}
