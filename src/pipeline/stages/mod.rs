//! The five generation stages, in data-flow order.

pub mod enumerate;
pub mod generate;
pub mod read;
pub mod split;
pub mod write;

pub use enumerate::EnumerateStage;
pub use generate::GenerateStage;
pub use read::ReadStage;
pub use split::SplitStage;
pub use write::WriteStage;

use std::sync::atomic::{AtomicUsize, Ordering};

/// Per-run item counts reported in the summary.
#[derive(Debug, Default)]
pub struct RunCounters {
    files_read: AtomicUsize,
    classes_found: AtomicUsize,
}

impl RunCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file_read(&self) {
        self.files_read.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_classes_found(&self, count: usize) {
        self.classes_found.fetch_add(count, Ordering::Relaxed);
    }

    pub fn files_read(&self) -> usize {
        self.files_read.load(Ordering::Relaxed)
    }

    pub fn classes_found(&self) -> usize {
        self.classes_found.load(Ordering::Relaxed)
    }
}
