use super::RunCounters;
use crate::core::SourceFile;
use crate::errors::GenerateError;
use crate::io::FileSystem;
use crate::observability::{set_current_file, GenerationPhase};
use crate::pipeline::stage::Stage;
use std::path::PathBuf;
use std::sync::Arc;

/// Loads the text of each listed file.
pub struct ReadStage {
    fs: Arc<dyn FileSystem>,
    counters: Arc<RunCounters>,
}

impl ReadStage {
    pub fn new(fs: Arc<dyn FileSystem>, counters: Arc<RunCounters>) -> Self {
        Self { fs, counters }
    }
}

impl Stage for ReadStage {
    type Input = PathBuf;
    type Output = SourceFile;

    fn execute(&self, path: PathBuf, emit: &mut dyn FnMut(SourceFile)) -> Result<(), GenerateError> {
        let _file = set_current_file(&path);
        let text = self.fs.read_to_string(&path)?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "Read source file");
        self.counters.add_file_read();
        emit(SourceFile::new(path, text));
        Ok(())
    }

    fn phase(&self) -> GenerationPhase {
        GenerationPhase::Read
    }
}
