use proptest::prelude::*;
use std::path::PathBuf;
use testgen::core::{
    ClassDeclaration, ClassUnit, ConstructorDeclaration, MethodDeclaration, Parameter, TypeRef,
};
use testgen::synth::Statement;
use testgen::{ClassAnalyzer, TestFramework, TestSkeletonSynthesizer};

fn interface_name() -> impl Strategy<Value = String> {
    "I[A-Z][a-z]{1,8}"
}

fn method_decl(index: usize, is_void: bool, public: bool) -> MethodDeclaration {
    MethodDeclaration {
        name: format!("Op{}", index),
        modifiers: if public {
            vec!["public".to_string()]
        } else {
            vec!["private".to_string()]
        },
        parameters: vec![Parameter::new("value", TypeRef::new("int"))],
        return_type: TypeRef::new(if is_void { "void" } else { "int" }),
        line: index + 1,
    }
}

fn unit(declaration: ClassDeclaration) -> ClassUnit {
    ClassUnit {
        declaration,
        namespace: Some("Sample".to_string()),
        source: PathBuf::from("Sample.cs"),
    }
}

proptest! {
    #[test]
    fn one_test_per_public_method_plus_setup(
        methods in prop::collection::vec((any::<bool>(), any::<bool>()), 0..12)
    ) {
        let mut class = ClassDeclaration::new("Subject");
        class.modifiers = vec!["public".to_string()];
        class.methods = methods
            .iter()
            .enumerate()
            .map(|(i, (is_void, public))| method_decl(i, *is_void, *public))
            .collect();
        let public_count = methods.iter().filter(|(_, public)| *public).count();

        let model = ClassAnalyzer::new().analyze(&unit(class));
        let fixture = TestSkeletonSynthesizer::new().build_fixture(&model);
        let fixture_class = &fixture.classes()[0];

        let tests: Vec<_> = fixture_class.methods().filter(|m| m.has_attribute("Test")).collect();
        let setups = fixture_class.methods().filter(|m| m.has_attribute("SetUp")).count();
        prop_assert_eq!(tests.len(), public_count);
        prop_assert_eq!(setups, 1);

        for test in tests {
            let last = test.statements().last().cloned();
            prop_assert_eq!(
                last,
                Some(Statement::Expr(TestFramework::NUnit.fail("autogenerated")))
            );
        }
    }

    #[test]
    fn one_mock_per_dependency_in_order(
        dependencies in prop::collection::vec(interface_name(), 1..6)
    ) {
        let mut class = ClassDeclaration::new("Subject");
        class.modifiers = vec!["public".to_string()];
        class.constructors = vec![ConstructorDeclaration {
            modifiers: vec!["public".to_string()],
            parameters: dependencies
                .iter()
                .enumerate()
                .map(|(i, ty)| Parameter::new(format!("dep{}", i), TypeRef::new(ty)))
                .collect(),
            line: 1,
        }];

        let file = TestSkeletonSynthesizer::new().synthesize(&unit(class));

        let mock_fields: Vec<&str> = file
            .text
            .lines()
            .map(str::trim)
            .filter(|l| l.starts_with("private Mock<"))
            .collect();
        let expected_fields: Vec<String> = dependencies
            .iter()
            .enumerate()
            .map(|(i, ty)| format!("private Mock<{}> _dep{}Mock;", ty, i))
            .collect();
        prop_assert_eq!(mock_fields, expected_fields);

        let args: Vec<String> = (0..dependencies.len())
            .map(|i| format!("_dep{}Mock.Object", i))
            .collect();
        let construction = format!("_subjectUnderTest = new Subject({});", args.join(", "));
        prop_assert!(file.text.contains(&construction), "missing `{}`", construction);
    }

    #[test]
    fn synthesis_is_deterministic(count in 0usize..8) {
        let mut class = ClassDeclaration::new("Subject");
        class.methods = (0..count).map(|i| method_decl(i, i % 2 == 0, true)).collect();
        let unit = unit(class);
        let synthesizer = TestSkeletonSynthesizer::new();

        prop_assert_eq!(synthesizer.synthesize(&unit), synthesizer.synthesize(&unit));
    }
}
