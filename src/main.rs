use anyhow::{Context, Result};
use clap::Parser;
use testgen::cli::{run, Cli};
use testgen::observability::install_panic_hook;

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();
    install_panic_hook();

    let cli = Cli::parse();
    let summary = run(&cli)
        .with_context(|| format!("Failed to generate tests from {}", cli.source.display()))?;

    println!("{}", summary);
    for path in &summary.written {
        println!("  {}", path.display());
    }
    Ok(())
}
