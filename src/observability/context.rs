//! Thread-local context tracking for crash reports.
//!
//! Every stage worker records which phase it is in and which file or class it
//! is handling. Process-wide atomic counters track how far generation got.
//!
//! ## Thread Safety
//!
//! - Thread-local context: each worker thread has its own context
//! - Global progress: atomic counters, shared by all workers
//! - Context guards use RAII for automatic cleanup on drop

use std::cell::RefCell;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

static CLASSES_WRITTEN: AtomicUsize = AtomicUsize::new(0);
static CLASSES_FOUND: AtomicUsize = AtomicUsize::new(0);

thread_local! {
    static CURRENT_CONTEXT: RefCell<GenerationContext> = const { RefCell::new(GenerationContext::new()) };
}

/// What the current thread was doing.
#[derive(Debug, Clone, Default)]
pub struct GenerationContext {
    pub phase: Option<GenerationPhase>,
    /// Source file being read or parsed
    pub current_file: Option<PathBuf>,
    /// Class whose fixture is being generated or written
    pub current_class: Option<String>,
}

impl GenerationContext {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: None,
            current_file: None,
            current_class: None,
        }
    }
}

/// Pipeline stages, in data-flow order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenerationPhase {
    Enumerate,
    Read,
    Split,
    Generate,
    Write,
}

impl GenerationPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Enumerate => "enumerate",
            Self::Read => "read",
            Self::Split => "split",
            Self::Generate => "generate",
            Self::Write => "write",
        }
    }
}

impl std::fmt::Display for GenerationPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Restores the previous context on drop.
pub struct ContextGuard {
    previous: GenerationContext,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        CURRENT_CONTEXT.with(|ctx| {
            *ctx.borrow_mut() = self.previous.clone();
        });
    }
}

fn update(apply: impl FnOnce(&mut GenerationContext)) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        apply(&mut ctx.borrow_mut());
        ContextGuard { previous }
    })
}

/// Set the current phase until the guard drops.
///
/// ```ignore
/// let _phase = set_phase(GenerationPhase::Split);
/// // phase restored when _phase drops
/// ```
#[must_use]
pub fn set_phase(phase: GenerationPhase) -> ContextGuard {
    update(|ctx| ctx.phase = Some(phase))
}

#[must_use]
pub fn set_current_file(path: impl Into<PathBuf>) -> ContextGuard {
    let path = path.into();
    update(|ctx| ctx.current_file = Some(path))
}

#[must_use]
pub fn set_current_class(name: impl Into<String>) -> ContextGuard {
    let name = name.into();
    update(|ctx| ctx.current_class = Some(name))
}

/// Called by the panic hook.
#[must_use]
pub fn get_current_context() -> GenerationContext {
    CURRENT_CONTEXT.with(|ctx| ctx.borrow().clone())
}

/// Count classes discovered by the split stage.
pub fn add_classes_found(count: usize) {
    CLASSES_FOUND.fetch_add(count, Ordering::Relaxed);
}

/// Count one fixture written to disk.
pub fn increment_written() {
    CLASSES_WRITTEN.fetch_add(1, Ordering::Relaxed);
}

/// (written, found) since process start.
#[must_use]
pub fn get_progress() -> (usize, usize) {
    (
        CLASSES_WRITTEN.load(Ordering::Relaxed),
        CLASSES_FOUND.load(Ordering::Relaxed),
    )
}
