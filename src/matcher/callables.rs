//! Callable matchers.

use super::{MatchOutcome, Matcher, Syntax, Tag};
use crate::error::{Error, Result};
use crate::typecheck::TypeChecker;
use crate::value::{Callable, Value};

fn callable_arg(checker: &TypeChecker, value: &Value) -> Result<Callable> {
    match checker.check(&["callable"], value)? {
        Value::Callable(callable) => Ok(callable),
        other => Err(Error::DataTypeMismatch {
            actual: other.type_name().to_string(),
            accepted: vec!["callable".to_string()],
        }),
    }
}

/// `?:callable throws an error`
#[derive(Debug, Default)]
pub struct ThrowsAnError;

impl Matcher for ThrowsAnError {
    fn syntaxes(&self) -> Vec<Syntax> {
        vec![Syntax {
            template: "?:callable throws an error",
            description: "Assert a callable throws an error.",
        }]
    }

    fn matches(
        &self,
        _skeleton: &str,
        checker: &TypeChecker,
        args: &[Value],
    ) -> Result<MatchOutcome> {
        let callable = callable_arg(checker, &args[0])?;
        match callable.call() {
            Err(_) => Ok(MatchOutcome::Matched),
            Ok(_) => Ok(MatchOutcome::failed(
                "Expected an error to be thrown, but nothing was thrown.",
            )),
        }
    }

    fn tags(&self) -> &'static [Tag] {
        &[Tag::Callables]
    }
}

/// `?:callable does not throw an error`
#[derive(Debug, Default)]
pub struct DoesNotThrowAnError;

impl Matcher for DoesNotThrowAnError {
    fn syntaxes(&self) -> Vec<Syntax> {
        vec![Syntax {
            template: "?:callable does not throw an error",
            description: "Assert a callable does not throw an error.",
        }]
    }

    fn matches(
        &self,
        _skeleton: &str,
        checker: &TypeChecker,
        args: &[Value],
    ) -> Result<MatchOutcome> {
        let callable = callable_arg(checker, &args[0])?;
        match callable.call() {
            Ok(_) => Ok(MatchOutcome::Matched),
            Err(error) => Ok(MatchOutcome::failed(format!(
                "Expected no error to be thrown, but \"{}\" was thrown.",
                error
            ))),
        }
    }

    fn tags(&self) -> &'static [Tag] {
        &[Tag::Callables]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typecheck::{ClassRegistry, Context};

    fn fixtures() -> (Context, ClassRegistry) {
        (Context::new(), ClassRegistry::new())
    }

    fn throwing() -> Value {
        Value::Callable(Callable::new(|| Err("boom".to_string())))
    }

    fn quiet() -> Value {
        Value::Callable(Callable::new(|| Ok(Value::Null)))
    }

    #[test]
    fn test_throws_an_error() {
        let (ctx, classes) = fixtures();
        let checker = TypeChecker::new(&ctx, &classes);
        assert!(ThrowsAnError
            .matches("? throws an error", &checker, &[throwing()])
            .unwrap()
            .matched());
        assert_eq!(
            ThrowsAnError
                .matches("? throws an error", &checker, &[quiet()])
                .unwrap(),
            MatchOutcome::Failed(
                "Expected an error to be thrown, but nothing was thrown.".to_string()
            )
        );
    }

    #[test]
    fn test_does_not_throw_an_error() {
        let (ctx, classes) = fixtures();
        let checker = TypeChecker::new(&ctx, &classes);
        assert!(DoesNotThrowAnError
            .matches("? does not throw an error", &checker, &[quiet()])
            .unwrap()
            .matched());
        assert_eq!(
            DoesNotThrowAnError
                .matches("? does not throw an error", &checker, &[throwing()])
                .unwrap(),
            MatchOutcome::Failed(
                "Expected no error to be thrown, but \"boom\" was thrown.".to_string()
            )
        );
    }

    #[test]
    fn test_non_callable_is_a_type_mismatch() {
        let (ctx, classes) = fixtures();
        let checker = TypeChecker::new(&ctx, &classes);
        assert!(ThrowsAnError
            .matches("? throws an error", &checker, &[Value::Int(5)])
            .is_err());
    }
}
