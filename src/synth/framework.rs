//! Test and mocking framework vocabulary used in generated fixtures.

use super::builders::{call, ident, member, string_lit};
use super::tree::Expr;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Namespace of the mocking library.
pub const MOCKING_NAMESPACE: &str = "Moq";

/// Message of the unconditional failure closing every generated test.
pub const FAILURE_MESSAGE: &str = "autogenerated";

/// `Mock<T>`
pub fn mock_type(ty: &str) -> String {
    format!("Mock<{}>", ty)
}

/// Proxy object a mock hands to the subject's constructor.
pub fn mock_object(mock: Expr) -> Expr {
    member(mock, "Object")
}

/// Unit test framework the fixture is written against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestFramework {
    #[default]
    NUnit,
    MsTest,
}

impl TestFramework {
    pub fn namespace(self) -> &'static str {
        match self {
            Self::NUnit => "NUnit.Framework",
            Self::MsTest => "Microsoft.VisualStudio.TestTools.UnitTesting",
        }
    }

    pub fn fixture_attribute(self) -> &'static str {
        match self {
            Self::NUnit => "TestFixture",
            Self::MsTest => "TestClass",
        }
    }

    pub fn setup_attribute(self) -> &'static str {
        match self {
            Self::NUnit => "SetUp",
            Self::MsTest => "TestInitialize",
        }
    }

    pub fn test_attribute(self) -> &'static str {
        match self {
            Self::NUnit => "Test",
            Self::MsTest => "TestMethod",
        }
    }

    /// Equality assertion between `actual` and `expected`.
    pub fn assert_equal(self, actual: Expr, expected: Expr) -> Expr {
        match self {
            Self::NUnit => call(
                member(ident("Assert"), "That"),
                vec![actual, call(member(ident("Is"), "EqualTo"), vec![expected])],
            ),
            Self::MsTest => call(member(ident("Assert"), "AreEqual"), vec![expected, actual]),
        }
    }

    /// `Assert.Fail("<message>")`, identical in both frameworks.
    pub fn fail(self, message: &str) -> Expr {
        call(member(ident("Assert"), "Fail"), vec![string_lit(message)])
    }
}

impl fmt::Display for TestFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NUnit => write!(f, "nunit"),
            Self::MsTest => write!(f, "mstest"),
        }
    }
}

impl FromStr for TestFramework {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nunit" => Ok(Self::NUnit),
            "mstest" => Ok(Self::MsTest),
            other => Err(format!(
                "Unknown test framework '{}' (expected nunit or mstest)",
                other
            )),
        }
    }
}
