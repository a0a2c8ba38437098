use super::RunCounters;
use crate::core::{ClassUnit, SourceFile};
use crate::errors::GenerateError;
use crate::observability::{add_classes_found, set_current_file, GenerationPhase};
use crate::parser::{split_classes, SourceParser};
use crate::pipeline::stage::Stage;
use std::sync::Arc;

/// Parses a file and fans out one unit per public class.
pub struct SplitStage {
    parser: Arc<dyn SourceParser>,
    counters: Arc<RunCounters>,
}

impl SplitStage {
    pub fn new(parser: Arc<dyn SourceParser>, counters: Arc<RunCounters>) -> Self {
        Self { parser, counters }
    }
}

impl Stage for SplitStage {
    type Input = SourceFile;
    type Output = ClassUnit;

    fn execute(&self, file: SourceFile, emit: &mut dyn FnMut(ClassUnit)) -> Result<(), GenerateError> {
        let _file = set_current_file(&file.path);
        let units = split_classes(self.parser.parse(&file)?);
        tracing::debug!(path = %file.path.display(), classes = units.len(), "Split source file");

        self.counters.add_classes_found(units.len());
        add_classes_found(units.len());
        for unit in units {
            emit(unit);
        }
        Ok(())
    }

    fn phase(&self) -> GenerationPhase {
        GenerationPhase::Split
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::CSharpParser;
    use crate::{assert_error_category, assert_result_ok};
    use indoc::indoc;

    fn stage() -> (SplitStage, Arc<RunCounters>) {
        let counters = Arc::new(RunCounters::new());
        (
            SplitStage::new(Arc::new(CSharpParser::new()), Arc::clone(&counters)),
            counters,
        )
    }

    #[test]
    fn test_one_unit_per_public_class() {
        let source = indoc! {"
            namespace Shapes
            {
                public class Circle {}
                internal class Helper {}
                public class Square {}
            }
        "};
        let (stage, counters) = stage();

        let mut names = Vec::new();
        assert_result_ok!(stage.execute(SourceFile::new("Shapes.cs", source), &mut |u| {
            names.push(u.declaration.name)
        }));
        assert_eq!(names, vec!["Circle", "Square"]);
        assert_eq!(counters.classes_found(), 2);
    }

    #[test]
    fn test_malformed_source_is_parse_error() {
        let (stage, _) = stage();
        assert_error_category!(
            stage.execute(SourceFile::new("Bad.cs", "public class Broken { public void Go( { }"), &mut |_| {}),
            "Parse"
        );
    }
}
