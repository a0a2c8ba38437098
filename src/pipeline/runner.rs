//! Worker pools connecting stages through bounded queues.
//!
//! # Completion
//!
//! A pool's output queue closes when the last of its workers exits and drops
//! its sender clone. Workers exit when their input queue is closed and empty,
//! so closing the root input cascades through every stage.
//!
//! # Faults
//!
//! The first failure (error or panic) of any worker is stored in the shared
//! [`FailureSlot`] and raises the abort flag. Workers check the flag before
//! pulling more input and leave queued items unprocessed.

use super::stage::Stage;
use crate::errors::GenerateError;
use crate::observability::{panic_message, set_phase};
use crossbeam::channel::{Receiver, Sender};
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};
use std::thread::{self, JoinHandle};

/// Set-once record of the first failure of a run.
#[derive(Debug, Default)]
pub struct FailureSlot {
    aborted: AtomicBool,
    first: OnceLock<GenerateError>,
}

impl FailureSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `error` unless a failure was already recorded, and abort.
    ///
    /// Returns whether `error` was the first failure.
    pub fn record(&self, error: GenerateError) -> bool {
        let first = self.first.set(error).is_ok();
        self.aborted.store(true, Ordering::SeqCst);
        first
    }

    pub fn is_aborted(&self) -> bool {
        self.aborted.load(Ordering::SeqCst)
    }

    pub fn first(&self) -> Option<&GenerateError> {
        self.first.get()
    }
}

/// Start `workers` threads running `stage` from `input` into `output`.
///
/// Threads are named `testgen-<stage>-<index>`. A thread that cannot be
/// spawned is recorded as an `Internal` failure.
pub fn spawn_stage<S: Stage>(
    stage: Arc<S>,
    workers: usize,
    input: Receiver<S::Input>,
    output: Sender<S::Output>,
    failures: &Arc<FailureSlot>,
    parent: &tracing::Span,
) -> Vec<JoinHandle<()>> {
    let mut handles = Vec::with_capacity(workers);
    for index in 0..workers {
        let name = format!("testgen-{}-{}", stage.name(), index);
        let worker = Worker {
            stage: Arc::clone(&stage),
            input: input.clone(),
            output: output.clone(),
            failures: Arc::clone(failures),
            span: tracing::debug_span!(parent: parent, "stage_worker", stage = stage.name(), index),
        };
        match thread::Builder::new().name(name.clone()).spawn(move || worker.run()) {
            Ok(handle) => handles.push(handle),
            Err(e) => {
                failures.record(GenerateError::internal(format!(
                    "Failed to spawn worker {}: {}",
                    name, e
                )));
                break;
            }
        }
    }
    handles
}

struct Worker<S: Stage> {
    stage: Arc<S>,
    input: Receiver<S::Input>,
    output: Sender<S::Output>,
    failures: Arc<FailureSlot>,
    span: tracing::Span,
}

impl<S: Stage> Worker<S> {
    fn run(self) {
        let _phase = set_phase(self.stage.phase());
        let _enter = self.span.enter();
        tracing::trace!("Worker started");

        while !self.failures.is_aborted() {
            let Ok(item) = self.input.recv() else {
                break;
            };
            if let Err(error) = self.process(item) {
                if self.failures.record(error.clone()) {
                    tracing::error!(error = %error, "Stage failed, aborting run");
                }
                break;
            }
        }

        tracing::trace!("Worker finished");
    }

    fn process(&self, item: S::Input) -> Result<(), GenerateError> {
        let output = &self.output;
        // A closed output means downstream already quit after an abort.
        let mut emit = |out: S::Output| {
            let _ = output.send(out);
        };
        match panic::catch_unwind(AssertUnwindSafe(|| self.stage.execute(item, &mut emit))) {
            Ok(result) => result,
            Err(payload) => Err(GenerateError::internal(format!(
                "{} worker panicked: {}",
                self.stage.name(),
                panic_message(payload.as_ref())
            ))),
        }
    }
}

/// Join every worker; a thread that died outside `catch_unwind` is recorded.
pub fn join_all(handles: Vec<JoinHandle<()>>, failures: &FailureSlot) {
    for handle in handles {
        let name = handle.thread().name().unwrap_or("worker").to_string();
        if let Err(payload) = handle.join() {
            failures.record(GenerateError::internal(format!(
                "{} terminated abnormally: {}",
                name,
                panic_message(payload.as_ref())
            )));
        }
    }
}
