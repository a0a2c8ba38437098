//! Structured crash reports.
//!
//! The report shows the stage, file and class the panicking thread was
//! handling, plus how many fixtures had been written. Panics inside stage
//! workers are additionally turned into `Internal` errors by the pipeline.

use super::context::{get_current_context, get_progress, GenerationContext};
use std::panic::PanicHookInfo;
use tracing::Span;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const RULE: &str = "════════════════════════════════════════════════════════════════════════════════";

/// Install the crash-report panic hook. Call once, early in `main`.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!();
        eprintln!("{}", render_report(info));
    }));
}

fn render_report(info: &PanicHookInfo<'_>) -> String {
    let context = get_current_context();
    let (written, found) = get_progress();

    let mut lines = header();
    lines.push(format!("  PANIC: {}", truncate(&panic_message(info.payload()), 68)));
    if let Some(location) = info.location() {
        lines.push(format!(
            "  Location: {}:{}:{}",
            location.file(),
            location.line(),
            location.column()
        ));
    }
    lines.push(RULE.to_string());
    lines.extend(context_lines(&context, written, found));
    lines.push(RULE.to_string());
    if std::env::var("RUST_BACKTRACE").is_ok() {
        lines.push(format!("{}", std::backtrace::Backtrace::capture()));
    } else {
        lines.push("  Run with RUST_BACKTRACE=1 for stack trace".to_string());
    }
    lines.join("\n")
}

fn header() -> Vec<String> {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
    vec![
        RULE.to_string(),
        "  TESTGEN CRASH REPORT".to_string(),
        RULE.to_string(),
        format!("  Version: {}", VERSION),
        format!("  Platform: {}", std::env::consts::OS),
        format!("  Time: {}", timestamp),
        RULE.to_string(),
    ]
}

fn context_lines(context: &GenerationContext, written: usize, found: usize) -> Vec<String> {
    let mut lines = vec!["  OPERATION CONTEXT:".to_string()];
    match context.phase {
        Some(phase) => lines.push(format!("    Stage: {}", phase)),
        None => lines.push("    Stage: (not set, crash occurred outside the pipeline)".to_string()),
    }
    if let Some(metadata) = Span::current().metadata() {
        lines.push(format!("    Span: {}", metadata.name()));
    }
    if let Some(file) = &context.current_file {
        lines.push(format!("    File: {}", file.display()));
    }
    if let Some(class) = &context.current_class {
        lines.push(format!("    Class: {}", class));
    }
    if found > 0 {
        lines.push(format!("    Progress: {} / {} fixtures written", written, found));
    }
    lines
}

/// Best-effort text of a panic payload.
pub fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
