use crate::errors::GenerateError;
use crate::io::{FileSystem, SourceFilter};
use crate::observability::{set_current_file, GenerationPhase};
use crate::pipeline::stage::Stage;
use std::path::PathBuf;
use std::sync::Arc;

/// Lists the source files of one directory.
pub struct EnumerateStage {
    fs: Arc<dyn FileSystem>,
    filter: SourceFilter,
}

impl EnumerateStage {
    pub fn new(fs: Arc<dyn FileSystem>, filter: SourceFilter) -> Self {
        Self { fs, filter }
    }
}

impl Stage for EnumerateStage {
    type Input = PathBuf;
    type Output = PathBuf;

    fn execute(&self, dir: PathBuf, emit: &mut dyn FnMut(PathBuf)) -> Result<(), GenerateError> {
        let _dir = set_current_file(&dir);
        let files = self.fs.list_files(&dir, &self.filter)?;
        tracing::info!(dir = %dir.display(), count = files.len(), "Found source files");
        for file in files {
            emit(file);
        }
        Ok(())
    }

    fn phase(&self) -> GenerationPhase {
        GenerationPhase::Enumerate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::MemoryFileSystem;
    use crate::{assert_error_category, assert_result_ok};

    #[test]
    fn test_emits_matching_files() {
        let fs = MemoryFileSystem::new()
            .with_file("/src/A.cs", "")
            .with_file("/src/B.txt", "");
        let stage = EnumerateStage::new(Arc::new(fs), SourceFilter::default());

        let mut out = Vec::new();
        assert_result_ok!(stage.execute(PathBuf::from("/src"), &mut |p| out.push(p)));
        assert_eq!(out, vec![PathBuf::from("/src/A.cs")]);
    }

    #[test]
    fn test_missing_directory() {
        let stage = EnumerateStage::new(Arc::new(MemoryFileSystem::new()), SourceFilter::default());
        assert_error_category!(
            stage.execute(PathBuf::from("/missing"), &mut |_| {}),
            "InvalidInput"
        );
    }
}
