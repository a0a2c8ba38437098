//! Pipeline stage abstraction.
//!
//! A stage turns one input item into zero or more output items. Stages hold
//! no per-run mutable state, so one instance is shared by every worker of its
//! pool.

use crate::errors::GenerateError;
use crate::observability::GenerationPhase;
use std::marker::PhantomData;

/// One step of the generation pipeline.
///
/// # Fan-out
///
/// `execute` hands each output to `emit` as soon as it is ready; the runner
/// forwards it to the next stage's queue. Emitting nothing is valid.
pub trait Stage: Send + Sync + 'static {
    type Input: Send + 'static;
    type Output: Send + 'static;

    fn execute(
        &self,
        input: Self::Input,
        emit: &mut dyn FnMut(Self::Output),
    ) -> Result<(), GenerateError>;

    fn phase(&self) -> GenerationPhase;

    /// Stage name for thread names and logs.
    fn name(&self) -> &str {
        self.phase().as_str()
    }
}

/// A stage backed by a one-to-one fallible function.
///
/// ```rust,ignore
/// let stage = FnStage::new(GenerationPhase::Generate, |unit: ClassUnit| {
///     Ok(synthesizer.synthesize(&unit))
/// });
/// ```
pub struct FnStage<F, I, O> {
    phase: GenerationPhase,
    func: F,
    _phantom: PhantomData<fn(I) -> O>,
}

impl<F, I, O> FnStage<F, I, O>
where
    F: Fn(I) -> Result<O, GenerateError>,
{
    pub fn new(phase: GenerationPhase, func: F) -> Self {
        Self {
            phase,
            func,
            _phantom: PhantomData,
        }
    }
}

impl<F, I, O> Stage for FnStage<F, I, O>
where
    F: Fn(I) -> Result<O, GenerateError> + Send + Sync + 'static,
    I: Send + 'static,
    O: Send + 'static,
{
    type Input = I;
    type Output = O;

    fn execute(&self, input: I, emit: &mut dyn FnMut(O)) -> Result<(), GenerateError> {
        emit((self.func)(input)?);
        Ok(())
    }

    fn phase(&self) -> GenerationPhase {
        self.phase
    }
}
