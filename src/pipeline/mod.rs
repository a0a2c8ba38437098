//! Concurrent generation pipeline.
//!
//! ```text
//! source dir -> enumerate -> read (R) -> split (CPUs) -> generate (G) -> write (W) -> paths
//! ```
//!
//! Every stage is a pool of named threads fed by a bounded queue. Completion
//! cascades when queues close; the first failure anywhere aborts the run and
//! is returned from [`GenerationHandle::wait`]. Fixtures written before the
//! abort stay on disk.

pub mod runner;
pub mod stage;
pub mod stages;

pub use runner::FailureSlot;
pub use stage::{FnStage, Stage};

use crate::config::{split_workers, GeneratorConfig, StageLimits};
use crate::errors::GenerateError;
use crate::io::{FileSystem, RealFileSystem, SourceFilter};
use crate::parser::{CSharpParser, SourceParser};
use crate::synth::TestSkeletonSynthesizer;
use crossbeam::channel::{bounded, unbounded, Receiver};
use runner::{join_all, spawn_stage};
use stages::{EnumerateStage, GenerateStage, ReadStage, RunCounters, SplitStage, WriteStage};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    pub files_read: usize,
    pub classes_found: usize,
    /// Written fixture paths, sorted
    pub written: Vec<PathBuf>,
    pub elapsed: Duration,
}

impl fmt::Display for GenerationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Generated {} test fixture(s) from {} class(es) in {} file(s) ({:.2?})",
            self.written.len(),
            self.classes_found,
            self.files_read,
            self.elapsed
        )
    }
}

/// Stateless pipeline definition; each `spawn` is an independent run.
#[derive(Clone)]
pub struct GenerationPipeline {
    fs: Arc<dyn FileSystem>,
    parser: Arc<dyn SourceParser>,
    synthesizer: TestSkeletonSynthesizer,
    limits: StageLimits,
    filter: SourceFilter,
}

impl Default for GenerationPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GenerationPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationPipeline")
            .field("synthesizer", &self.synthesizer)
            .field("limits", &self.limits)
            .field("filter", &self.filter)
            .finish_non_exhaustive()
    }
}

impl GenerationPipeline {
    /// Disk-backed pipeline with default limits.
    pub fn new() -> Self {
        Self {
            fs: Arc::new(RealFileSystem::new()),
            parser: Arc::new(CSharpParser::new()),
            synthesizer: TestSkeletonSynthesizer::new(),
            limits: StageLimits::default(),
            filter: SourceFilter::default(),
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new()
            .with_limits(config.parallelism)
            .with_source_filter(config.source_filter())
            .with_synthesizer(
                TestSkeletonSynthesizer::new()
                    .with_framework(config.output.framework)
                    .with_extension(config.output.extension.trim_start_matches('.')),
            )
    }

    pub fn with_file_system(mut self, fs: Arc<dyn FileSystem>) -> Self {
        self.fs = fs;
        self
    }

    pub fn with_parser(mut self, parser: Arc<dyn SourceParser>) -> Self {
        self.parser = parser;
        self
    }

    pub fn with_synthesizer(mut self, synthesizer: TestSkeletonSynthesizer) -> Self {
        self.synthesizer = synthesizer;
        self
    }

    pub fn with_limits(mut self, limits: StageLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_source_filter(mut self, filter: SourceFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn limits(&self) -> &StageLimits {
        &self.limits
    }

    /// Run to completion.
    pub fn generate(
        &self,
        source_dir: impl Into<PathBuf>,
        destination_dir: impl Into<PathBuf>,
    ) -> Result<GenerationSummary, GenerateError> {
        self.spawn(source_dir, destination_dir).wait()
    }

    /// Start a run in the background.
    ///
    /// Invalid limits or filters surface as the `Config` result of
    /// [`GenerationHandle::wait`]; no worker is started in that case.
    pub fn spawn(
        &self,
        source_dir: impl Into<PathBuf>,
        destination_dir: impl Into<PathBuf>,
    ) -> GenerationHandle {
        let source_dir = source_dir.into();
        let destination_dir = destination_dir.into();
        let failures = Arc::new(FailureSlot::new());
        let counters = Arc::new(RunCounters::new());
        let (results_tx, results_rx) = unbounded();

        let span = tracing::info_span!(
            "generation",
            source = %source_dir.display(),
            destination = %destination_dir.display()
        );

        let mut handle = GenerationHandle {
            workers: Vec::new(),
            results: results_rx,
            failures: Arc::clone(&failures),
            counters: Arc::clone(&counters),
            started: Instant::now(),
        };

        if let Err(e) = self.limits.validate().and_then(|_| self.filter.validate()) {
            failures.record(e);
            return handle;
        }

        let capacity = self.limits.queue_capacity;
        let (root_tx, root_rx) = bounded(1);
        let (paths_tx, paths_rx) = bounded(capacity);
        let (sources_tx, sources_rx) = bounded(capacity);
        let (units_tx, units_rx) = bounded(capacity);
        let (files_tx, files_rx) = bounded(capacity);

        let _enter = span.enter();
        tracing::info!(
            max_read = self.limits.max_read,
            max_generate = self.limits.max_generate,
            max_write = self.limits.max_write,
            "Starting generation"
        );

        let workers = &mut handle.workers;
        workers.extend(spawn_stage(
            Arc::new(EnumerateStage::new(Arc::clone(&self.fs), self.filter.clone())),
            1,
            root_rx,
            paths_tx,
            &failures,
            &span,
        ));
        workers.extend(spawn_stage(
            Arc::new(ReadStage::new(Arc::clone(&self.fs), Arc::clone(&counters))),
            self.limits.max_read,
            paths_rx,
            sources_tx,
            &failures,
            &span,
        ));
        workers.extend(spawn_stage(
            Arc::new(SplitStage::new(Arc::clone(&self.parser), Arc::clone(&counters))),
            split_workers(),
            sources_rx,
            units_tx,
            &failures,
            &span,
        ));
        workers.extend(spawn_stage(
            Arc::new(GenerateStage::new(self.synthesizer.clone())),
            self.limits.max_generate,
            units_rx,
            files_tx,
            &failures,
            &span,
        ));
        workers.extend(spawn_stage(
            Arc::new(WriteStage::new(Arc::clone(&self.fs), destination_dir)),
            self.limits.max_write,
            files_rx,
            results_tx,
            &failures,
            &span,
        ));

        // The root directory is the only input; dropping the sender starts
        // the completion cascade once enumeration is done.
        if root_tx.send(source_dir).is_err() {
            failures.record(GenerateError::internal("Enumerate stage is not running"));
        }
        drop(root_tx);

        handle
    }
}

/// A run in progress.
pub struct GenerationHandle {
    workers: Vec<JoinHandle<()>>,
    results: Receiver<PathBuf>,
    failures: Arc<FailureSlot>,
    counters: Arc<RunCounters>,
    started: Instant,
}

impl GenerationHandle {
    /// Whether a failure has been recorded so far.
    pub fn is_aborted(&self) -> bool {
        self.failures.is_aborted()
    }

    /// Block until every worker exits.
    ///
    /// Returns the first recorded failure, or the summary of a clean run.
    pub fn wait(self) -> Result<GenerationSummary, GenerateError> {
        join_all(self.workers, &self.failures);

        if let Some(error) = self.failures.first() {
            tracing::error!(category = error.category(), error = %error, "Generation failed");
            return Err(error.clone());
        }

        let mut written: Vec<PathBuf> = self.results.try_iter().collect();
        written.sort();
        let summary = GenerationSummary {
            files_read: self.counters.files_read(),
            classes_found: self.counters.classes_found(),
            written,
            elapsed: self.started.elapsed(),
        };
        tracing::info!(
            files = summary.files_read,
            classes = summary.classes_found,
            written = summary.written.len(),
            "Generation finished"
        );
        Ok(summary)
    }
}
