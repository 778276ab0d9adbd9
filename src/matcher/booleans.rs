//! Boolean and null matchers.

use super::{MatchOutcome, Matcher, Syntax, Tag};
use crate::error::Result;
use crate::typecheck::TypeChecker;
use crate::value::Value;

/// `? is true` / `? is false` — one matcher, branching on the skeleton.
#[derive(Debug, Default)]
pub struct Boolean;

impl Matcher for Boolean {
    fn syntaxes(&self) -> Vec<Syntax> {
        vec![
            Syntax {
                template: "? is true",
                description: "Assert a value is true.",
            },
            Syntax {
                template: "? is false",
                description: "Assert a value is false.",
            },
        ]
    }

    fn matches(
        &self,
        skeleton: &str,
        checker: &TypeChecker,
        args: &[Value],
    ) -> Result<MatchOutcome> {
        let expected = skeleton.ends_with("true");
        let value = checker.resolve(&args[0])?;
        if value == Value::Bool(expected) {
            Ok(MatchOutcome::Matched)
        } else {
            Ok(MatchOutcome::failed(format!(
                "Expected {} to be {}.",
                value.render(),
                expected
            )))
        }
    }

    fn tags(&self) -> &'static [Tag] {
        &[Tag::Booleans]
    }
}

/// `? is null`
#[derive(Debug, Default)]
pub struct IsNull;

impl Matcher for IsNull {
    fn syntaxes(&self) -> Vec<Syntax> {
        vec![Syntax {
            template: "? is null",
            description: "Assert a value is null.",
        }]
    }

    fn matches(
        &self,
        _skeleton: &str,
        checker: &TypeChecker,
        args: &[Value],
    ) -> Result<MatchOutcome> {
        let value = checker.resolve(&args[0])?;
        if value == Value::Null {
            Ok(MatchOutcome::Matched)
        } else {
            Ok(MatchOutcome::failed(format!(
                "Expected {} to be null.",
                value.render()
            )))
        }
    }

    fn tags(&self) -> &'static [Tag] {
        &[Tag::Booleans]
    }
}

/// `? is not null` — inverts [`IsNull`].
#[derive(Debug, Default)]
pub struct IsNotNull {
    inner: IsNull,
}

impl Matcher for IsNotNull {
    fn syntaxes(&self) -> Vec<Syntax> {
        vec![Syntax {
            template: "? is not null",
            description: "Assert a value is not null.",
        }]
    }

    fn matches(
        &self,
        skeleton: &str,
        checker: &TypeChecker,
        args: &[Value],
    ) -> Result<MatchOutcome> {
        match self.inner.matches(skeleton, checker, args)? {
            MatchOutcome::Matched => Ok(MatchOutcome::failed("Expected null to not be null.")),
            MatchOutcome::Failed(_) => Ok(MatchOutcome::Matched),
        }
    }

    fn tags(&self) -> &'static [Tag] {
        &[Tag::Booleans]
    }
}
