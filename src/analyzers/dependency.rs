//! Dependency detection for constructor parameters.
//!
//! Deciding which constructor parameters are injected collaborators is a
//! naming-convention heuristic, not a type-system check. It is kept behind the
//! [`DependencyPredicate`] trait so callers can swap it without touching the
//! constructor selection logic.

use crate::core::TypeRef;

/// Decides whether a parameter type marks its constructor as an injection point.
pub trait DependencyPredicate: Send + Sync {
    fn is_dependency(&self, ty: &TypeRef) -> bool;
}

impl<F> DependencyPredicate for F
where
    F: Fn(&TypeRef) -> bool + Send + Sync,
{
    fn is_dependency(&self, ty: &TypeRef) -> bool {
        self(ty)
    }
}

/// `I` followed immediately by another uppercase letter: `IRepository`, `IClock`.
///
/// Matched against the unqualified name, so `Acme.Data.IRepository<T>` matches
/// while `Item`, `Int32` and `I` do not.
#[derive(Debug, Default, Clone, Copy)]
pub struct InterfaceNamingConvention;

impl DependencyPredicate for InterfaceNamingConvention {
    fn is_dependency(&self, ty: &TypeRef) -> bool {
        let mut chars = ty.simple_name().chars();
        matches!(
            (chars.next(), chars.next()),
            (Some('I'), Some(second)) if second.is_uppercase()
        )
    }
}
