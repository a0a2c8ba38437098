use crate::core::GeneratedFile;
use crate::errors::GenerateError;
use crate::io::FileSystem;
use crate::observability::{increment_written, set_current_class, GenerationPhase};
use crate::pipeline::stage::Stage;
use std::path::PathBuf;
use std::sync::Arc;

/// Writes fixtures into the destination directory, overwriting existing files.
pub struct WriteStage {
    fs: Arc<dyn FileSystem>,
    destination: PathBuf,
}

impl WriteStage {
    pub fn new(fs: Arc<dyn FileSystem>, destination: PathBuf) -> Self {
        Self { fs, destination }
    }
}

impl Stage for WriteStage {
    type Input = GeneratedFile;
    type Output = PathBuf;

    fn execute(&self, file: GeneratedFile, emit: &mut dyn FnMut(PathBuf)) -> Result<(), GenerateError> {
        let _class = set_current_class(&file.filename);
        let path = self
            .fs
            .write_file(&self.destination, &file.filename, &file.text)?;
        tracing::info!(path = %path.display(), "Wrote fixture");
        increment_written();
        emit(path);
        Ok(())
    }

    fn phase(&self) -> GenerationPhase {
        GenerationPhase::Write
    }
}
