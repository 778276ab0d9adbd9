//! The matcher capability and the built-in matcher set.
//!
//! A matcher declares one or more syntax templates and implements the match
//! logic for sentences that resolve to them. Arguments arrive positionally
//! extracted but not yet type-checked; each matcher runs the type checker
//! on the arguments it cares about. A failed domain check is a
//! `MatchOutcome::Failed` with a rendered message, distinct from type
//! mismatches and other faults which surface as errors.

mod arrays;
mod booleans;
mod callables;
mod equality;
mod numbers;
mod objects;
mod strings;

pub use arrays::{DoesNotHaveKey, HasKey, IsAssociative};
pub use booleans::{Boolean, IsNotNull, IsNull};
pub use callables::{DoesNotThrowAnError, ThrowsAnError};
pub use equality::{DoesNotEqual, Equals, ExactlyEquals, NotExactlyEquals};
pub use numbers::{IsGreaterThan, IsLessThan, IsNotNumeric, IsNumeric};
pub use objects::{
    HasProperty, HasPropertyWithExactValue, HasPropertyWithValue, IsAnObject, IsInstanceOf,
    IsNotAnObject,
};
pub use strings::MatchesRegex;

use crate::error::Result;
use crate::typecheck::TypeChecker;
use crate::value::Value;

/// One declared grammar fragment with its human description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Syntax {
    pub template: &'static str,
    pub description: &'static str,
}

/// Domain grouping used for documentation generation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Arrays,
    Booleans,
    Callables,
    Numbers,
    Objects,
    Strings,
}

/// The result of running a matcher: either the assertion held, or it did
/// not and carries the failure message for the harness.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    Matched,
    Failed(String),
}

impl MatchOutcome {
    pub fn failed(message: impl Into<String>) -> Self {
        MatchOutcome::Failed(message.into())
    }

    pub fn matched(&self) -> bool {
        matches!(self, MatchOutcome::Matched)
    }
}

pub trait Matcher {
    /// The syntax templates this matcher answers to.
    fn syntaxes(&self) -> Vec<Syntax>;

    /// Run the match for a sentence that resolved to one of this matcher's
    /// templates. `skeleton` identifies which template when there are
    /// several.
    fn matches(
        &self,
        skeleton: &str,
        checker: &TypeChecker,
        args: &[Value],
    ) -> Result<MatchOutcome>;

    fn tags(&self) -> &'static [Tag] {
        &[]
    }
}
