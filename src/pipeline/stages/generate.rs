use crate::core::{ClassUnit, GeneratedFile};
use crate::errors::GenerateError;
use crate::observability::{set_current_class, set_current_file, GenerationPhase};
use crate::pipeline::stage::Stage;
use crate::synth::TestSkeletonSynthesizer;

/// Synthesizes one fixture per class.
pub struct GenerateStage {
    synthesizer: TestSkeletonSynthesizer,
}

impl GenerateStage {
    pub fn new(synthesizer: TestSkeletonSynthesizer) -> Self {
        Self { synthesizer }
    }
}

impl Stage for GenerateStage {
    type Input = ClassUnit;
    type Output = GeneratedFile;

    fn execute(&self, unit: ClassUnit, emit: &mut dyn FnMut(GeneratedFile)) -> Result<(), GenerateError> {
        let _file = set_current_file(&unit.source);
        let _class = set_current_class(&unit.declaration.name);
        let generated = self.synthesizer.synthesize(&unit);
        tracing::debug!(class = %unit.declaration.name, file = %generated.filename, "Generated fixture");
        emit(generated);
        Ok(())
    }

    fn phase(&self) -> GenerationPhase {
        GenerationPhase::Generate
    }
}
