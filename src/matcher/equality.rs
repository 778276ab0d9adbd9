//! Equality matchers.

use super::{MatchOutcome, Matcher, Syntax};
use crate::error::Result;
use crate::typecheck::TypeChecker;
use crate::value::Value;

/// `? equals ?` — equality-level comparison, so `123` equals `123.0` and
/// `"123"`.
#[derive(Debug, Default)]
pub struct Equals;

impl Matcher for Equals {
    fn syntaxes(&self) -> Vec<Syntax> {
        vec![
            Syntax {
                template: "? equals ?",
                description: "Assert two values are equal.",
            },
            Syntax {
                template: "? is equal to ?",
                description: "Assert two values are equal (alternate wording).",
            },
        ]
    }

    fn matches(
        &self,
        _skeleton: &str,
        checker: &TypeChecker,
        args: &[Value],
    ) -> Result<MatchOutcome> {
        let actual = checker.check(&[], &args[0])?;
        let expected = checker.check(&[], &args[1])?;
        if actual.loose_eq(&expected) {
            Ok(MatchOutcome::Matched)
        } else {
            Ok(MatchOutcome::failed(format!(
                "Expected {} to equal {}.",
                actual.render(),
                expected.render()
            )))
        }
    }
}

/// `? does not equal ?` — inverts [`Equals`].
#[derive(Debug, Default)]
pub struct DoesNotEqual {
    inner: Equals,
}

impl Matcher for DoesNotEqual {
    fn syntaxes(&self) -> Vec<Syntax> {
        vec![
            Syntax {
                template: "? does not equal ?",
                description: "Assert two values are not equal.",
            },
            Syntax {
                template: "? is not equal to ?",
                description: "Assert two values are not equal (alternate wording).",
            },
        ]
    }

    fn matches(
        &self,
        skeleton: &str,
        checker: &TypeChecker,
        args: &[Value],
    ) -> Result<MatchOutcome> {
        match self.inner.matches(skeleton, checker, args)? {
            MatchOutcome::Matched => {
                let actual = checker.resolve(&args[0])?;
                let expected = checker.resolve(&args[1])?;
                Ok(MatchOutcome::failed(format!(
                    "Expected {} to not equal {}.",
                    actual.render(),
                    expected.render()
                )))
            }
            MatchOutcome::Failed(_) => Ok(MatchOutcome::Matched),
        }
    }
}

/// `? exactly equals ?` — identity-level comparison on top of equality, so
/// the representation must match too.
#[derive(Debug, Default)]
pub struct ExactlyEquals;

impl Matcher for ExactlyEquals {
    fn syntaxes(&self) -> Vec<Syntax> {
        vec![
            Syntax {
                template: "? exactly equals ?",
                description: "Assert two values are equal and of the same type.",
            },
            Syntax {
                template: "? is exactly equal to ?",
                description:
                    "Assert two values are equal and of the same type (alternate wording).",
            },
        ]
    }

    fn matches(
        &self,
        _skeleton: &str,
        checker: &TypeChecker,
        args: &[Value],
    ) -> Result<MatchOutcome> {
        let actual = checker.check(&[], &args[0])?;
        let expected = checker.check(&[], &args[1])?;
        if actual.strict_eq(&expected) {
            Ok(MatchOutcome::Matched)
        } else {
            Ok(MatchOutcome::failed(format!(
                "Expected {} to exactly equal {}.",
                actual.render(),
                expected.render()
            )))
        }
    }
}

/// `? is not exactly equal to ?` — inverts [`ExactlyEquals`].
#[derive(Debug, Default)]
pub struct NotExactlyEquals {
    inner: ExactlyEquals,
}

impl Matcher for NotExactlyEquals {
    fn syntaxes(&self) -> Vec<Syntax> {
        vec![Syntax {
            template: "? is not exactly equal to ?",
            description: "Assert two values differ in value or type.",
        }]
    }

    fn matches(
        &self,
        skeleton: &str,
        checker: &TypeChecker,
        args: &[Value],
    ) -> Result<MatchOutcome> {
        match self.inner.matches(skeleton, checker, args)? {
            MatchOutcome::Matched => {
                let actual = checker.resolve(&args[0])?;
                let expected = checker.resolve(&args[1])?;
                Ok(MatchOutcome::failed(format!(
                    "Expected {} to not exactly equal {}.",
                    actual.render(),
                    expected.render()
                )))
            }
            MatchOutcome::Failed(_) => Ok(MatchOutcome::Matched),
        }
    }
}
